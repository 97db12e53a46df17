//! Runs the built binary and checks its streams and exit status

use serde_json::json;
use std::process::Output;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn es_export(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_es-export"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("ES_EXPORT_HOST")
        .env_remove("ES_EXPORT_SETTINGS_PATH")
        .output()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_export_to_stdout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/logs/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_scroll_id": "scroll-1",
            "hits": {
                "total": {"value": 2, "relation": "eq"},
                "hits": [
                    {"_source": {"host": "web-1", "status": 500}},
                    {"_source": {"host": "web-2", "status": 502}}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/_search/scroll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"succeeded": true})))
        .mount(&server)
        .await;

    let output = es_export(&[
        "--host",
        &server.uri(),
        "--index",
        "logs",
        "--query",
        "status:>=500",
        "--fields",
        "host,status",
    ])
    .await;

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(output.status.success(), "stderr: {}", stderr);
    assert_eq!(stdout, "host,status\nweb-1,500\nweb-2,502\n");
    assert!(stderr.contains("got 2 of 2"), "stderr: {}", stderr);
}

#[tokio::test]
async fn test_fatal_error_exit_status() {
    // Bind a free port, then release it so nothing listens there
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let host = format!("http://127.0.0.1:{}", port);

    let args = ["--host", host.as_str(), "--index", "logs", "--query", "*", "--fields", "a"];
    let output = es_export(&args).await;

    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("fatal: "), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_usage_error_before_export() {
    let output = es_export(&["--host", "http://127.0.0.1:9", "--fields", "a"]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
