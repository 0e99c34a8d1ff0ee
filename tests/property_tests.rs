//! Property-based tests for verbprobe using proptest
//!
//! These tests generate random inputs to test edge cases and ensure
//! robustness across a wide range of potential inputs.

use assert_cmd::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;
use std::process::Command;

use verbprobe::core::report::{Classification, Report};
use verbprobe::probe::{dedup_inputs, is_candidate_url};
use verbprobe::ui::output::render_report;

const NAME: &str = "verbprobe";

/// Generate bare words that can never pass URL validation
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,10}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))] // Default is 256...

    #[test]
    fn test_dedup_keeps_exactly_the_distinct_inputs(
        inputs in prop::collection::vec(word_strategy(), 1..20)
    ) {
        let deduped = dedup_inputs(&inputs);
        let expected: HashSet<String> = inputs.iter().cloned().collect();

        prop_assert_eq!(deduped.len(), expected.len());
        for input in &expected {
            prop_assert!(deduped.contains(input));
        }
    }

    #[test]
    fn test_bare_words_are_never_candidate_urls(
        word in word_strategy()
    ) {
        prop_assert!(!is_candidate_url(&word));
    }

    #[test]
    fn test_report_output_is_order_independent(
        words in prop::collection::hash_set(word_strategy(), 1..10)
    ) {
        let entries: Vec<(String, Classification)> = words
            .iter()
            .map(|w| (w.clone(), Classification::not_url(w)))
            .collect();

        let forward: Report = entries.clone().into_iter().collect();
        let reversed: Report = entries.into_iter().rev().collect();

        prop_assert_eq!(
            render_report(&forward).unwrap(),
            render_report(&reversed).unwrap()
        );
    }

    #[test]
    fn test_non_url_inputs_never_touch_the_network(
        words in prop::collection::hash_set(word_strategy(), 1..5)
    ) {
        // Bare words are classified eagerly, so this runs without any server
        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.arg("--no-config").arg("--timeout").arg("1");
        for word in &words {
            cmd.arg(word);
        }

        let assert = cmd.assert().success();
        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        for word in &words {
            let expected = format!("String '{}' is not a URL.", word);
            prop_assert!(stdout.contains(&expected));
        }
    }
}
