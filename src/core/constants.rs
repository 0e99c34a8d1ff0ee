/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the fixed method list, status codes and other
/// literal values used across the application.
/// HTTP method constants
pub mod http_methods {
    use reqwest::Method;

    /// The fixed, ordered set of verbs probed against every candidate URL.
    ///
    /// This is static configuration, not derived data; the probe issues one
    /// request per entry and keys the report by `Method::as_str()`.
    pub const ALL: [Method; 9] = [
        Method::GET,
        Method::HEAD,
        Method::OPTIONS,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::CONNECT,
        Method::TRACE,
    ];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 405 Method Not Allowed - the only status that disqualifies a method
    pub const METHOD_NOT_ALLOWED: u16 = 405;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default connection timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    /// Maximum reasonable timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// Diagnostic message templates embedded verbatim in the report.
///
/// These are part of the output contract: tests compare report entries
/// against these exact strings.
pub mod messages {
    /// Diagnostic for an input string that is not a well-formed HTTP(S) URL.
    pub fn not_a_url(input: &str) -> String {
        format!("String '{input}' is not a URL.")
    }

    /// Diagnostic for a URL where every probed method answered 405.
    pub fn no_available_methods(url: &str) -> String {
        format!("URL '{url}' has no available methods.")
    }

    /// Diagnostic for a URL where no method produced any response.
    pub fn probe_failed(url: &str, reason: &str) -> String {
        format!("Probe of '{url}' failed: {reason}")
    }
}

/// Error message constants
pub mod error_messages {
    /// Unknown error fallback
    pub const UNKNOWN_ERROR: &str = "Unknown error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_methods_fixed_order() {
        let names: Vec<&str> = http_methods::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "GET", "HEAD", "OPTIONS", "POST", "PUT", "PATCH", "DELETE", "CONNECT", "TRACE"
            ]
        );
    }

    #[test]
    fn test_http_status_constants() {
        assert_eq!(http_status::METHOD_NOT_ALLOWED, 405);
    }

    #[test]
    fn test_timeout_constants() {
        assert_eq!(timeouts::DEFAULT_TIMEOUT_SECONDS, 30);
        assert_eq!(timeouts::MAX_TIMEOUT_SECONDS, 86_400);
        assert_eq!(timeouts::MIN_TIMEOUT_SECONDS, 1);
    }

    #[test]
    fn test_messages_embed_original_string() {
        assert_eq!(messages::not_a_url("sos"), "String 'sos' is not a URL.");
        assert_eq!(
            messages::no_available_methods("http://a.com"),
            "URL 'http://a.com' has no available methods."
        );
        assert_eq!(
            messages::probe_failed("http://a.com", "connection refused"),
            "Probe of 'http://a.com' failed: connection refused"
        );
    }
}
