//! Per-URL method probing
//!
//! For a single confirmed URL, issue one request per verb in the fixed
//! method list, all concurrently, and reduce the responses into the URL's
//! classification.

use async_trait::async_trait;
use futures::future;

use crate::core::constants::{error_messages, http_methods, http_status};
use crate::core::report::{Classification, MethodStatuses};
use crate::reporting::logging;

#[async_trait]
pub trait ProbeMethods: Send + Sync {
    /// Probe every fixed method against `url` through the shared client.
    ///
    /// Returns the original URL paired with its classification so callers
    /// can join unordered results back into the report.
    async fn probe_methods(
        &self,
        client: &reqwest::Client,
        url: &str,
    ) -> (String, Classification);
}

#[derive(Default, Debug)]
pub struct MethodProber {}

#[async_trait]
impl ProbeMethods for MethodProber {
    async fn probe_methods(
        &self,
        client: &reqwest::Client,
        url: &str,
    ) -> (String, Classification) {
        let requests = http_methods::ALL.iter().map(|method| {
            let request = client.request(method.clone(), url);
            async move { (method, request.send().await) }
        });

        // One fan-out/fan-in round, no retries.
        let responses = future::join_all(requests).await;

        let mut available = MethodStatuses::new();
        let mut any_response = false;
        let mut first_failure: Option<String> = None;

        for (method, response) in responses {
            match response {
                Ok(res) => {
                    any_response = true;
                    let status_code = res.status().as_u16();
                    logging::log_probe_result(url, method.as_str(), Some(status_code), None);

                    // A method is available iff the server did not answer
                    // 405; every other status is recorded verbatim.
                    if status_code != http_status::METHOD_NOT_ALLOWED {
                        available.insert(method.as_str().to_string(), status_code);
                    }
                }
                Err(err) => {
                    let description = std::error::Error::source(&err)
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| err.to_string());
                    logging::log_probe_result(url, method.as_str(), None, Some(&description));

                    if first_failure.is_none() {
                        first_failure = Some(description);
                    }
                }
            }
        }

        let classification = if !available.is_empty() {
            Classification::Methods(available)
        } else if any_response {
            Classification::no_methods(url)
        } else {
            let reason =
                first_failure.unwrap_or_else(|| error_messages::UNKNOWN_ERROR.to_string());
            Classification::probe_failed(url, &reason)
        };

        (url.to_string(), classification)
    }
}
