mod common;

use axum::http::StatusCode;
use common::TestApp;
use reqwest::multipart;

fn statement_form() -> multipart::Form {
    multipart::Form::new().part(
        "file",
        multipart::Part::bytes("statement text".as_bytes().to_vec())
            .file_name("statement.txt")
            .mime_str("text/plain")
            .unwrap(),
    )
}

#[tokio::test]
async fn upload_statement_returns_reconciled_ledger() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/statements", app.address))
        .multipart(statement_form())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["name"], "Test Account Holder");
    assert_eq!(body["currency"], "£");
    assert_eq!(body["startingBalance"], 100.0);
    assert_eq!(body["endingBalance"], 2096.5);
    assert_eq!(body["reconciles"], true);
    assert!(body.get("error").is_none());

    let transactions = body["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0]["desc"], "Coffee Shop");
    assert_eq!(transactions[0]["amount"], -3.5);
    assert_eq!(transactions[1]["desc"], "Salary");
    assert_eq!(transactions[1]["amount"], 2000.0);
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let form = multipart::Form::new().text("document", "not the right field");
    let response = client
        .post(format!("{}/api/statements", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn upload_of_empty_file_is_rejected() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(Vec::new())
            .file_name("empty.txt")
            .mime_str("text/plain")
            .unwrap(),
    );
    let response = client
        .post(format!("{}/api/statements", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn unusable_transcription_returns_defaulted_ledger() {
    let app = TestApp::spawn_with_mock_response("I could not read this document.").await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/statements", app.address))
        .multipart(statement_form())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().unwrap().contains("transcription"));
    assert!(body["name"].is_null());
    assert!(body["address"].is_null());
    assert!(body["date"].is_null());
    assert!(body["startingBalance"].is_null());
    assert!(body["endingBalance"].is_null());
    assert!(body["reconciles"].is_null());
    assert_eq!(body["currency"], "£");
    assert_eq!(body["transactions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn entries_the_normalizer_rejects_are_excluded() {
    let response_json = r#"{
        "startingBalance": 50.0,
        "endingBalance": 40.0,
        "currency": "£",
        "transactions": [
            {"date": "01-01-2024", "description": "Valid debit", "moneyIn": 0, "moneyOut": 10.0},
            {"date": "02-01-2024", "description": "Ambiguous", "moneyIn": 5.0, "moneyOut": 5.0},
            {"date": 3, "description": "Bad date", "moneyIn": 1.0, "moneyOut": 0}
        ]
    }"#;
    let app = TestApp::spawn_with_mock_response(response_json).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/statements", app.address))
        .multipart(statement_form())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let transactions = body["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0]["desc"], "Valid debit");
    assert_eq!(body["reconciles"], true);
}
