mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::Server;
    use predicates::str::contains;

    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "verbprobe";

    #[test]
    fn test_output__when_no_inputs_provided() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert().failure();
        cmd.assert().failure().stderr(contains(
            "error: the following required arguments were not provided:\n  <STRINGS>...",
        ));
        Ok(())
    }

    #[test]
    fn test_output__when_single_non_url() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("a").arg("--no-config");

        cmd.assert().success().stdout(
            "{\n    \"a\": \"String 'a' is not a URL.\"\n}\n".to_string(),
        );
        Ok(())
    }

    #[test]
    fn test_output__when_duplicate_inputs__collapsed_and_key_sorted() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("sos").arg("alex").arg("sos").arg("--no-config");

        // "sos" appears once and keys come out in canonical order
        cmd.assert().success().stdout(
            concat!(
                "{\n",
                "    \"alex\": \"String 'alex' is not a URL.\",\n",
                "    \"sos\": \"String 'sos' is not a URL.\"\n",
                "}\n"
            )
            .to_string(),
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_url_with_available_methods() -> TestResult {
        let mut server = Server::new_async().await;
        let _m_get = server.mock("GET", "/").with_status(200).create();
        let _m_post = server.mock("POST", "/").with_status(405).create();
        let endpoint = server.url() + "/";
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(&endpoint)
            .arg("--no-config")
            .arg("--timeout")
            .arg("5")
            .arg("--concurrency")
            .arg("1");

        cmd.assert().success().stdout(contains("\"GET\": 200"));
        cmd.assert()
            .success()
            .stdout(contains(format!("\"{endpoint}\"")));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_mixed_urls_and_non_urls() -> TestResult {
        let mut server = Server::new_async().await;
        let _m_get = server.mock("GET", "/").with_status(200).create();
        let endpoint = server.url() + "/";
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(&endpoint)
            .arg("not-a-url")
            .arg("--no-config")
            .arg("--timeout")
            .arg("5");

        cmd.assert()
            .success()
            .stdout(contains("\"String 'not-a-url' is not a URL.\""));
        cmd.assert().success().stdout(contains("\"GET\": 200"));
        Ok(())
    }

    #[test]
    fn test_output__when_unreachable_url__partial_results_survive() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        // RFC 5737 TEST-NET-1 address, nothing listens there
        cmd.arg("http://192.0.2.1:1/unreachable")
            .arg("word")
            .arg("--no-config")
            .arg("--timeout")
            .arg("1");

        cmd.assert().success();
        cmd.assert()
            .success()
            .stdout(contains("\"String 'word' is not a URL.\""));
        cmd.assert()
            .success()
            .stdout(contains("Probe of 'http://192.0.2.1:1/unreachable' failed:"));
        Ok(())
    }

    #[test]
    fn test_output__when_zero_timeout_provided() {
        let mut cmd = Command::cargo_bin(NAME).unwrap();

        cmd.arg("a").arg("--no-config").arg("--timeout").arg("0");

        cmd.assert().failure();
        cmd.assert()
            .failure()
            .stderr(contains("Timeout cannot be 0"));
    }

    #[test]
    fn test_output__when_zero_concurrency_provided() {
        let mut cmd = Command::cargo_bin(NAME).unwrap();

        cmd.arg("a").arg("--no-config").arg("--concurrency").arg("0");

        cmd.assert().failure();
        cmd.assert()
            .failure()
            .stderr(contains("Concurrency cannot be 0"));
    }

    #[test]
    fn test_output__when_missing_config_file_provided() {
        let mut cmd = Command::cargo_bin(NAME).unwrap();

        cmd.arg("a").arg("--config").arg("some-file-that-doesnt-exist.toml");

        cmd.assert().failure();
        cmd.assert()
            .failure()
            .stderr(contains("Could not read config file"));
    }

    #[test]
    fn test_output__config_file_sets_timeout() -> TestResult {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"timeout = 5\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("a")
            .arg("--config")
            .arg(file.path());

        cmd.assert()
            .success()
            .stdout(contains("\"String 'a' is not a URL.\""));
        Ok(())
    }
}
