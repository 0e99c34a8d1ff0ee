use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::constants::messages;

/// Mapping of accepted method name to the status code it answered with.
pub type MethodStatuses = BTreeMap<String, u16>;

/// The outcome recorded for one input string.
///
/// Serializes untagged so the report matches the tool's output contract:
/// diagnostics are bare strings, probe results are `method -> status`
/// objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Classification {
    /// Input failed the `http` prefix check or strict URL syntax validation
    NotUrl(String),
    /// At least one method answered with a status other than 405
    Methods(MethodStatuses),
    /// Every method that answered did so with 405
    NoMethods(String),
    /// No method produced any response (transport failure)
    ProbeFailed(String),
}

impl Classification {
    /// Diagnostic classification for a string that is not a URL.
    pub fn not_url(input: &str) -> Self {
        Self::NotUrl(messages::not_a_url(input))
    }

    /// Diagnostic classification for a URL where all methods answered 405.
    pub fn no_methods(url: &str) -> Self {
        Self::NoMethods(messages::no_available_methods(url))
    }

    /// Diagnostic classification for a URL that could not be reached at all.
    pub fn probe_failed(url: &str, reason: &str) -> Self {
        Self::ProbeFailed(messages::probe_failed(url, reason))
    }

    /// Whether this classification came out of a network probe.
    pub fn is_probe_outcome(&self) -> bool {
        !matches!(self, Self::NotUrl(_))
    }
}

/// Final report: every original input string mapped to its classification.
///
/// Keys are unique (set-derived) and canonically ordered, so serialization
/// is deterministic per run regardless of probe arrival order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: BTreeMap<String, Classification>,
}

impl Report {
    pub fn insert(&mut self, input: String, classification: Classification) {
        self.entries.insert(input, classification);
    }

    pub fn get(&self, input: &str) -> Option<&Classification> {
        self.entries.get(input)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Classification)> {
        self.entries.iter()
    }

    /// Overlay probe results onto the eagerly recorded diagnostics.
    ///
    /// Probe results win on key collision. Collision is structurally
    /// impossible (a string is classified as non-URL or probed, never both)
    /// but the merge applies the overlay as authoritative regardless.
    pub fn merge_probe_results<I>(&mut self, probe_results: I)
    where
        I: IntoIterator<Item = (String, Classification)>,
    {
        for (url, classification) in probe_results {
            self.entries.insert(url, classification);
        }
    }
}

impl FromIterator<(String, Classification)> for Report {
    fn from_iter<I: IntoIterator<Item = (String, Classification)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
