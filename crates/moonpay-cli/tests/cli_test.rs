/*
[INPUT]:  Built `moonpay` binary and a mock MoonPay API
[OUTPUT]: Test results for the command line surface
[POS]:    Integration tests - CLI end to end
[UPDATE]: When subcommands, flags or configuration sources change
*/

use std::path::PathBuf;
use std::process::Output;

use tokio::process::Command;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "pk_test_cli";

/// Scratch directory used as HOME so no real user config is picked up
fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("moonpay-cli-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn moonpay(home: &PathBuf) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_moonpay"));
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("MOONPAY_API_KEY")
        .env_remove("MOONPAY_TOKEN")
        .env_remove("MOONPAY_BASE_URL")
        .env_remove("MOONPAY_TIMEOUT_SECS")
        .args(["--log-level", "error"]);
    command
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[tokio::test]
async fn price_prints_json_from_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/currencies/eth/price"))
        .and(query_param("apiKey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "USD": 1820.55,
            "EUR": 1690.1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = scratch_dir();
    let output = moonpay(&home)
        .args(["price", "ETH"])
        .env("MOONPAY_API_KEY", API_KEY)
        .env("MOONPAY_BASE_URL", server.uri())
        .output()
        .await
        .expect("Failed to start moonpay binary");

    let prices = stdout_json(&output);
    assert!(prices["USD"].is_number(), "stdout: {prices}");
    assert!(prices["EUR"].is_number(), "stdout: {prices}");
    assert_eq!(prices["USD"], serde_json::json!(1820.55));
}

#[tokio::test]
async fn missing_api_key_fails() {
    let home = scratch_dir();
    let output = moonpay(&home)
        .arg("countries")
        .output()
        .await
        .expect("Failed to start moonpay binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MOONPAY_API_KEY"), "stderr: {stderr}");
}

#[tokio::test]
async fn api_errors_exit_non_zero_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/customers/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Invalid token"
        })))
        .mount(&server)
        .await;

    let home = scratch_dir();
    let output = moonpay(&home)
        .args(["customer", "info"])
        .env("MOONPAY_API_KEY", API_KEY)
        .env("MOONPAY_TOKEN", "expired-jwt")
        .env("MOONPAY_BASE_URL", server.uri())
        .output()
        .await
        .expect("Failed to start moonpay binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid token"), "stderr: {stderr}");
}

#[tokio::test]
async fn cards_list_sends_customer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/cards"))
        .and(header("authorization", "Bearer jwt-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let home = scratch_dir();
    let output = moonpay(&home)
        .args(["cards", "list"])
        .env("MOONPAY_API_KEY", API_KEY)
        .env("MOONPAY_TOKEN", "jwt-123")
        .env("MOONPAY_BASE_URL", server.uri())
        .output()
        .await
        .expect("Failed to start moonpay binary");

    assert_eq!(stdout_json(&output), serde_json::json!([]));
}

#[tokio::test]
async fn config_init_then_use_file_with_env_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/ip_address"))
        .and(query_param("apiKey", "pk_test_from_file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "alpha2": "GB",
            "alpha3": "GBR",
            "state": null,
            "ipAddress": "198.51.100.7",
            "isAllowed": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = scratch_dir();
    let config_path = home.join("moonpay.yaml");

    let init = moonpay(&home)
        .args(["config", "init", "--api-key", "pk_test_from_file", "--output"])
        .arg(&config_path)
        .output()
        .await
        .expect("Failed to start moonpay binary");
    assert!(init.status.success(), "stderr: {}", String::from_utf8_lossy(&init.stderr));

    let written = std::fs::read_to_string(&config_path).expect("config written");
    assert!(written.contains("pk_test_from_file"));

    let output = moonpay(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("ip")
        .env("MOONPAY_BASE_URL", server.uri())
        .output()
        .await
        .expect("Failed to start moonpay binary");

    let ip = stdout_json(&output);
    assert_eq!(ip["alpha3"], "GBR");
    assert_eq!(ip["isAllowed"], true);
}
