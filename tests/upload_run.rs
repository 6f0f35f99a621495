//! End-to-end tests for run_upload against a mock lead API.
//!
//! These tests verify:
//! - one result row per input row, whatever the completion order
//! - translation of response codes into the result columns
//! - HTTP error and unparsable-body handling
//! - transport failures under both policies

mod helpers;

use std::collections::HashSet;

use helpers::{create_test_config, read_result_rows, write_leads_file, TOKEN};
use lead_uploader::run_upload;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INPUT_COLUMNS: usize = 14;

fn accepted_body(lead_id: i64) -> serde_json::Value {
    json!({
        "status": "success",
        "message": "",
        "version": "1.0",
        "code": 200,
        "data": {"leadStatus": "inProgress", "rejectReason": "", "leadId": lead_id}
    })
}

#[tokio::test]
async fn test_every_input_row_gets_one_result_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/lead"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("Content-Type", "application/json"))
        .and(header("Tool-Version", "v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(accepted_body(42)))
        .expect(37)
        .mount(&server)
        .await;

    let input = write_leads_file(37);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("result.csv");
    let config = create_test_config(
        input.path(),
        format!("{}/api/lead", server.uri()),
        output.clone(),
        5,
    );

    let report = run_upload(config).await.expect("Upload should succeed");

    assert_eq!(report.total_records, 37);
    assert_eq!(report.success, 37);
    assert_eq!(report.rows_written, 37);
    assert_eq!(report.output_path, output);

    let rows = read_result_rows(&output);
    assert_eq!(rows.len(), 38, "header plus one row per lead");
    assert_eq!(rows[0][0], "Фамилия");
    assert_eq!(rows[0][14], "Результат отправки");
    assert_eq!(rows[0].len(), 19);

    // No duplicates, no omissions
    let last_names: HashSet<&str> = rows[1..].iter().map(|row| row[0].as_str()).collect();
    let expected: HashSet<String> = (0..37).map(|i| format!("Фамилия{}", i)).collect();
    assert_eq!(last_names.len(), 37);
    for name in &expected {
        assert!(last_names.contains(name.as_str()), "missing {}", name);
    }

    for row in &rows[1..] {
        assert_eq!(&row[INPUT_COLUMNS..], ["Успех", "Принят", "", "42", ""]);
    }
}

#[tokio::test]
async fn test_payload_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "product": {"typeId": "consumer", "amount": 150000, "term": "12"},
            "location": {"name": {"region": "Москва", "city": "Москва"}},
            "passport": {"series": "4510", "number": "000000", "issueDate": "2010-06-01"},
            "client": {
                "lastName": "Фамилия0",
                "firstName": "Имя0",
                "birthDate": "1990-05-17",
                "age": 34
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(accepted_body(7)))
        .expect(1)
        .mount(&server)
        .await;

    let input = write_leads_file(1);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("result.csv");
    let config = create_test_config(input.path(), server.uri(), output.clone(), 1);

    let report = run_upload(config).await.expect("Upload should succeed");
    assert_eq!(report.success, 1);

    let rows = read_result_rows(&output);
    // Input columns are echoed verbatim, not normalized
    assert_eq!(rows[1][3], "17.05.1990");
    assert_eq!(rows[1][17], "7");
}

#[tokio::test]
async fn test_rejected_and_failed_leads_are_translated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"client": {"lastName": "Фамилия0"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Лид уже есть в системе",
            "data": {"leadStatus": "rejected", "rejectReason": "isDouble", "leadId": null}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"client": {"lastName": "Фамилия1"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail",
            "message": "Некорректный телефон",
            "data": {"leadStatus": "", "rejectReason": "", "leadId": 0}
        })))
        .mount(&server)
        .await;

    let input = write_leads_file(2);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("result.csv");
    let config = create_test_config(input.path(), server.uri(), output.clone(), 2);

    let report = run_upload(config).await.expect("Upload should succeed");
    assert_eq!(report.success, 1);
    assert_eq!(report.fail, 1);

    let rows = read_result_rows(&output);
    let by_name = |name: &str| {
        rows.iter()
            .find(|row| row[0] == name)
            .unwrap_or_else(|| panic!("no row for {}", name))
            .clone()
    };
    assert_eq!(
        &by_name("Фамилия0")[INPUT_COLUMNS..],
        ["Успех", "Не принят", "Дубль", "", "Лид уже есть в системе"]
    );
    assert_eq!(
        &by_name("Фамилия1")[INPUT_COLUMNS..],
        ["Ошибка данных", "", "", "", "Некорректный телефон"]
    );
}

#[tokio::test]
async fn test_http_503_gives_error_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(accepted_body(99)))
        .expect(3)
        .mount(&server)
        .await;

    let input = write_leads_file(3);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("result.csv");
    let config = create_test_config(input.path(), server.uri(), output.clone(), 2);

    let report = run_upload(config).await.expect("Upload should succeed");
    assert_eq!(report.error, 3);
    assert_eq!(report.success, 0);

    for row in &read_result_rows(&output)[1..] {
        assert_eq!(row[14], "Ошибка сервера");
        assert_eq!(row[15], "");
        assert_eq!(row[16], "");
        // Body is ignored for non-200 responses
        assert_eq!(row[17], "");
    }
}

#[tokio::test]
async fn test_unparsable_body_gives_empty_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let input = write_leads_file(2);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("result.csv");
    let config = create_test_config(input.path(), server.uri(), output.clone(), 1);

    let report = run_upload(config).await.expect("Upload should succeed");
    assert_eq!(report.unrecognized, 2);

    for row in &read_result_rows(&output)[1..] {
        assert_eq!(&row[INPUT_COLUMNS..], ["", "", "", "", ""]);
    }
}

#[tokio::test]
async fn test_transport_failure_is_recorded_per_lead() {
    let input = write_leads_file(4);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("result.csv");
    // Nothing listens on port 1
    let config = create_test_config(
        input.path(),
        "http://127.0.0.1:1/api/lead".to_string(),
        output.clone(),
        2,
    );

    let report = run_upload(config).await.expect("Upload should finish");
    assert_eq!(report.error, 4);

    let rows = read_result_rows(&output);
    assert_eq!(rows.len(), 5);
    for row in &rows[1..] {
        assert_eq!(row[14], "Ошибка сервера");
        assert!(!row[18].is_empty(), "message should describe the failure");
    }
}

#[tokio::test]
async fn test_transport_failure_aborts_with_fail_fast() {
    let input = write_leads_file(4);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("result.csv");
    let mut config = create_test_config(
        input.path(),
        "http://127.0.0.1:1/api/lead".to_string(),
        output.clone(),
        2,
    );
    config.fail_fast = true;

    let err = run_upload(config).await.expect_err("Upload should abort");
    assert!(format!("{:#}", err).contains("127.0.0.1:1"));

    // Only the header made it to disk
    assert_eq!(read_result_rows(&output).len(), 1);
}

#[tokio::test]
async fn test_empty_input_writes_header_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(accepted_body(1)))
        .expect(0)
        .mount(&server)
        .await;

    let input = write_leads_file(0);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("result.csv");
    let config = create_test_config(input.path(), server.uri(), output.clone(), 3);

    let report = run_upload(config).await.expect("Upload should succeed");
    assert_eq!(report.total_records, 0);
    assert_eq!(read_result_rows(&output).len(), 1);
}
