//! Input classification and probe orchestration
//!
//! Partitions the deduplicated input set into candidate URLs and everything
//! else, fans the candidates out to the method prober over one shared
//! client, and merges both halves into the final report.

use async_trait::async_trait;
use futures::{StreamExt, stream};
use reqwest::redirect::Policy;
use rustc_hash::FxHashSet;
use url::Url;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::report::{Classification, Report};
use crate::probe::prober::{MethodProber, ProbeMethods};
use crate::reporting::logging;

/// Collect raw input strings into the set of distinct inputs.
///
/// Duplicates collapse; downstream ordering comes from the report's
/// canonical key order, not from this set.
pub fn dedup_inputs(inputs: &[String]) -> FxHashSet<String> {
    let mut unique = FxHashSet::with_capacity_and_hasher(inputs.len(), Default::default());
    for input in inputs {
        unique.insert(input.clone());
    }
    unique
}

/// Whether an input string qualifies for probing.
///
/// Requires the literal `http` prefix and strict URL syntax: the string
/// must parse, carry an http(s) scheme and a non-empty host. Bare words,
/// partial hosts and malformed strings all fail here and are reported as
/// non-URLs, never as errors.
pub fn is_candidate_url(input: &str) -> bool {
    if !input.starts_with("http") {
        return false;
    }

    match Url::parse(input) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

#[async_trait]
pub trait ClassifyInputs {
    /// Classify every input string and return the final report.
    async fn classify_with_config(
        &self,
        inputs: FxHashSet<String>,
        config: &Config,
    ) -> Result<Report>;
}

#[derive(Default, Debug)]
pub struct Dispatcher<P: ProbeMethods = MethodProber> {
    prober: P,
}

impl<P: ProbeMethods> Dispatcher<P> {
    pub fn new(prober: P) -> Self {
        Self { prober }
    }
}

#[async_trait]
impl<P: ProbeMethods> ClassifyInputs for Dispatcher<P> {
    async fn classify_with_config(
        &self,
        inputs: FxHashSet<String>,
        config: &Config,
    ) -> Result<Report> {
        let mut report = Report::default();
        let mut candidates = Vec::new();

        // Non-URL diagnostics are recorded eagerly; candidates are queued
        // for the concurrent probe pass.
        for input in inputs {
            if is_candidate_url(&input) {
                candidates.push(input);
            } else {
                let classification = Classification::not_url(&input);
                report.insert(input, classification);
            }
        }

        logging::log_classification_start(candidates.len(), report.len());

        // No candidates means no client and no network I/O at all.
        if candidates.is_empty() {
            return Ok(report);
        }

        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        // One session spans all probes in the batch and is dropped with it.
        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(10))
            .user_agent(user_agent)
            .build()?;

        let concurrency = config.concurrency.unwrap_or_else(num_cpus::get).max(1);

        let prober = &self.prober;
        let client_ref = &client;
        let mut probes = stream::iter(candidates)
            .map(|url| async move { prober.probe_methods(client_ref, &url).await })
            .buffer_unordered(concurrency);

        let mut probe_results = Vec::new();
        while let Some((url, classification)) = probes.next().await {
            probe_results.push((url, classification));
        }

        // Explicit merge pass; probe results are the authoritative overlay.
        report.merge_probe_results(probe_results);

        Ok(report)
    }
}
