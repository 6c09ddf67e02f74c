mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

fn sample_transactions() -> serde_json::Value {
    json!([
        {"date": "01-01-2024", "desc": "Coffee Shop", "amount": -3.5, "currency": "£"},
        {"date": "02-01-2024", "desc": "Salary", "amount": 2000.0, "currency": "£"}
    ])
}

#[tokio::test]
async fn view_filters_by_search_term() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/statements/view", app.address))
        .json(&json!({
            "transactions": sample_transactions(),
            "search": "coffee"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["totalMatched"], 1);
    assert_eq!(body["pageCount"], 1);
    assert_eq!(body["transactions"][0]["desc"], "Coffee Shop");
}

#[tokio::test]
async fn view_matches_formatted_amounts() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/statements/view", app.address))
        .json(&json!({
            "transactions": sample_transactions(),
            "search": "3.50"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["totalMatched"], 1);
    assert_eq!(body["transactions"][0]["desc"], "Coffee Shop");
}

#[tokio::test]
async fn view_with_no_matches_still_has_one_page() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/statements/view", app.address))
        .json(&json!({
            "transactions": sample_transactions(),
            "search": "zzz"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["totalMatched"], 0);
    assert_eq!(body["pageCount"], 1);
    assert_eq!(body["transactions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn view_paginates_across_pages() {
    let transactions: Vec<serde_json::Value> = (1..=12)
        .map(|i| {
            json!({
                "date": format!("{:02}-01-2024", i),
                "desc": format!("Item {}", i),
                "amount": i as f64,
                "currency": "£"
            })
        })
        .collect();

    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/statements/view", app.address))
        .json(&json!({
            "transactions": transactions,
            "page": 2,
            "pageSize": 10
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["pageCount"], 2);
    assert_eq!(body["page"], 2);

    let page = body["transactions"].as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["desc"], "Item 11");
    assert_eq!(page[1]["desc"], "Item 12");
}

#[tokio::test]
async fn view_rejects_invalid_paging_parameters() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/statements/view", app.address))
        .json(&json!({
            "transactions": [],
            "page": 1,
            "pageSize": 0
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());
}
