//! End-to-end runs of the CLI driver against a mock tracking endpoint.
//!
//! These tests don't spawn the binary; they call `app::run` with captured
//! output buffers, which is exactly what `main` does with the terminal.

use backer_track_cli::{app, cli::Cli, output::Output};
use clap::Parser as _;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const TRACK_PATH: &str = "/api/order/track";

struct RunResult {
    code: i32,
    stdout: String,
    stderr: String,
}

/// Test context holding a fresh mock server.
struct CliTestContext {
    mock_server: MockServer,
}

impl CliTestContext {
    async fn new() -> Self {
        Self {
            mock_server: MockServer::start().await,
        }
    }

    fn url(&self) -> String {
        format!("{}{TRACK_PATH}", self.mock_server.uri())
    }

    /// Mock the tracking endpoint with a JSON body.
    async fn mock_track(&self, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(TRACK_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the tracking endpoint with a bare status code.
    async fn mock_track_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(TRACK_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }

    /// Run the CLI with credentials and the mock URL, plus `extra` flags.
    async fn run(&self, extra: &[&str]) -> RunResult {
        let url = self.url();
        let mut argv = vec![
            "backer-track",
            "--email",
            "ada@example.com",
            "--backer",
            "4242",
            "--url",
            url.as_str(),
        ];
        argv.extend_from_slice(extra);
        run_args(&argv).await
    }
}

async fn run_args(argv: &[&str]) -> RunResult {
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    let mut out = Output::new(Vec::new(), Vec::new());
    let code = app::run(&cli, &mut out).await;
    let (stdout, stderr) = out.into_inner();
    RunResult {
        code,
        stdout: console::strip_ansi_codes(&String::from_utf8(stdout).unwrap()).into_owned(),
        stderr: console::strip_ansi_codes(&String::from_utf8(stderr).unwrap()).into_owned(),
    }
}

fn order_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "code": "0",
        "message": "ok",
        "data": [
            {
                "status": "Shipped",
                "productName": "三维打印机",
                "sku": "PRT-X1-CORE",
                "quantity": 1,
                "trackingNumber": "1Z999",
                "carrier": "UPS",
                "changeDeliveryTime": "2024年03月05日"
            },
            {
                "status": "Not Ship",
                "productName": "Spare nozzle kit",
                "sku": "ACC-NOZZLE",
                "quantity": 4,
                "localDeliveryTime": "2024-3-5"
            }
        ]
    })
}

#[tokio::test]
async fn test_api_failure_exits_non_zero_with_code_and_message() {
    let ctx = CliTestContext::new().await;
    ctx.mock_track(serde_json::json!({
        "success": false,
        "code": "E01",
        "message": "bad backer",
        "data": []
    }))
    .await;

    let result = ctx.run(&[]).await;

    assert_ne!(result.code, 0);
    assert!(result.stderr.contains("E01"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("bad backer"), "stderr: {}", result.stderr);
    assert!(result.stdout.is_empty(), "stdout: {}", result.stdout);
}

#[tokio::test]
async fn test_empty_order_is_informational() {
    let ctx = CliTestContext::new().await;
    ctx.mock_track(serde_json::json!({
        "success": true,
        "code": "0",
        "message": "ok",
        "data": []
    }))
    .await;

    let result = ctx.run(&[]).await;

    assert_eq!(result.code, 0);
    assert!(
        result.stdout.to_lowercase().contains("no order items"),
        "stdout: {}",
        result.stdout
    );
    assert!(!result.stdout.contains('┌'), "no table expected");
    assert!(result.stderr.is_empty(), "stderr: {}", result.stderr);
}

#[tokio::test]
async fn test_json_mode_prints_parsed_response() {
    let ctx = CliTestContext::new().await;
    ctx.mock_track(order_body()).await;

    let result = ctx.run(&["--json"]).await;

    let expected = serde_json::to_string_pretty(&order_body()).unwrap();
    assert_eq!(result.code, 0);
    assert_eq!(result.stdout, format!("{expected}\n"));
    assert!(!result.stdout.contains('┌'), "table should not be rendered");
}

#[tokio::test]
async fn test_json_mode_keeps_unknown_fields_and_original_types() {
    let ctx = CliTestContext::new().await;
    let body = serde_json::json!({
        "success": true,
        "code": 0,
        "message": "ok",
        "orderId": "X9",
        "data": [{ "sku": "A", "shippedAt": "2024-01-01" }]
    });
    ctx.mock_track(body.clone()).await;

    let result = ctx.run(&["--json"]).await;

    assert_eq!(result.code, 0, "stderr: {}", result.stderr);
    let printed: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(printed, body);
    assert!(result.stdout.contains("\"code\": 0"), "stdout: {}", result.stdout);
}

#[tokio::test]
async fn test_json_mode_api_failure_prints_body_and_exits_non_zero() {
    let ctx = CliTestContext::new().await;
    let body = serde_json::json!({
        "success": false,
        "code": "E01",
        "message": "bad backer",
        "data": []
    });
    ctx.mock_track(body.clone()).await;

    let result = ctx.run(&["--json"]).await;

    assert_eq!(result.code, 1);
    let expected = serde_json::to_string_pretty(&body).unwrap();
    assert_eq!(result.stdout, format!("{expected}\n"));
    assert!(result.stderr.contains("E01"), "stderr: {}", result.stderr);
}

#[tokio::test]
async fn test_numeric_tracking_number_is_rendered() {
    let ctx = CliTestContext::new().await;
    ctx.mock_track(serde_json::json!({
        "success": true,
        "code": "0",
        "message": "ok",
        "data": [{ "sku": "A", "status": "Shipped", "trackingNumber": 123456789 }]
    }))
    .await;

    let result = ctx.run(&["--sku", "A"]).await;

    assert_eq!(result.code, 0, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("123456789"), "stdout: {}", result.stdout);
    assert!(result.stderr.is_empty(), "stderr: {}", result.stderr);
}

#[tokio::test]
async fn test_table_with_highlighted_sku() {
    let ctx = CliTestContext::new().await;
    ctx.mock_track(order_body()).await;

    let result = ctx.run(&["--sku", "prt-x1-core"]).await;
    assert_eq!(result.code, 0, "stderr: {}", result.stderr);

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(
        lines[0],
        "prt-x1-core: Shipped · 三维打印机 ×1 · UPS 1Z999 · ETA 2024年03月05日"
    );
    assert!(lines[1].is_empty());

    let table = &lines[2..];
    assert_eq!(table.len(), 6, "top, header, divider, two rows, bottom");
    assert!(table[1].contains("Status") && table[1].contains("ETA"));
    assert!(table[3].contains("*PRT-X1-CORE"));
    assert!(table[3].contains("2024-03-05"));
    assert!(table[4].contains("ACC-NOZZLE") && !table[4].contains("*ACC"));
    assert!(table[4].contains("2024-3-5"));

    let width = console::measure_text_width(table[0]);
    for line in table {
        assert_eq!(console::measure_text_width(line), width, "misaligned: {line}");
    }
}

#[tokio::test]
async fn test_missing_sku_is_reported_but_table_still_printed() {
    let ctx = CliTestContext::new().await;
    ctx.mock_track(order_body()).await;

    let result = ctx.run(&["--sku", "NOPE-123"]).await;

    assert_eq!(result.code, 0);
    assert!(result.stdout.contains("SKU NOPE-123 not found"), "stdout: {}", result.stdout);
    assert!(result.stdout.contains("Spare nozzle kit"));
}

#[tokio::test]
async fn test_http_status_error_exits_non_zero() {
    let ctx = CliTestContext::new().await;
    ctx.mock_track_status(500).await;

    let result = ctx.run(&[]).await;

    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("500"), "stderr: {}", result.stderr);
    assert!(result.stdout.is_empty());
}

#[tokio::test]
async fn test_blank_credentials_fail_before_any_request() {
    let ctx = CliTestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    let url = ctx.url();
    let result = run_args(&[
        "backer-track",
        "--email",
        "   ",
        "--backer",
        "4242",
        "--url",
        url.as_str(),
    ])
    .await;

    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("email"), "stderr: {}", result.stderr);
    assert!(result.stdout.is_empty());
}
