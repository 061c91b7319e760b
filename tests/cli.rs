use std::path::Path;
use std::process::{Command, Output, Stdio};
use telegram_notify::config::{API_URL_VAR, CHAT_ID_VAR, TOKEN_VAR};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENVELOPE: &str = r#"{"body": "{\"action\":\"opened\",\"data\":{\"event\":{\"title\":\"Bug X\",\"message\":\"desc\",\"web_url\":\"http://x\"}}}", "httpMethod":"POST"}"#;

/// Builds the binary invocation with a clean NOTIFICATIONS_* environment and no `.env`.
fn command(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_telegram-notify"));
    cmd.current_dir(workdir)
        .arg("--env-file")
        .arg(workdir.join("missing.env"))
        .env_remove(TOKEN_VAR)
        .env_remove(CHAT_ID_VAR)
        .env_remove(API_URL_VAR)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    cmd
}

async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn forwards_envelope_file_and_prints_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bottok/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("envelope.json");
    std::fs::write(&input, ENVELOPE).unwrap();

    let mut cmd = command(tmp.path());
    cmd.arg("--input")
        .arg(&input)
        .env(TOKEN_VAR, "tok")
        .env(CHAT_ID_VAR, "1")
        .env(API_URL_VAR, server.uri());
    let output = run(cmd).await;

    assert!(output.status.success());
    let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        stdout,
        serde_json::json!({"statusCode": 200, "body": r#"{"ok":true}"#})
    );
}

#[tokio::test]
async fn empty_stdin_exits_with_status_1() {
    let tmp = tempfile::tempdir().unwrap();

    let mut cmd = command(tmp.path());
    cmd.env(TOKEN_VAR, "tok").env(CHAT_ID_VAR, "1");
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Empty input"));
}

#[tokio::test]
async fn whitespace_input_file_exits_with_status_1() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("blank.json");
    std::fs::write(&input, "\n  \n").unwrap();

    let mut cmd = command(tmp.path());
    cmd.arg("--input")
        .arg(&input)
        .env(TOKEN_VAR, "tok")
        .env(CHAT_ID_VAR, "1");
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn missing_settings_exit_with_status_1() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("envelope.json");
    std::fs::write(&input, ENVELOPE).unwrap();

    let mut cmd = command(tmp.path());
    cmd.arg("--input")
        .arg(&input)
        .env(API_URL_VAR, server.uri());
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains(TOKEN_VAR));
    server.verify().await;
}
