//! End-to-end tests: in-memory SQLite, an in-process fake Akeneo and the real router.

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use backend::routes::configure_routes;
use backend::shared::config::parse_config;
use backend::shared::data::db::initialize_database;
use backend::shared::state::AppState;
use chrono::{Duration, Local};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, Value as DbValue};
use serde_json::{json, Value};

const DATE: &str = "%d/%m/%Y";

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn fake_token(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some("Basic b3BzOnNlY3JldA==") => Ok(Json(json!({ "access_token": "tok" }))),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn fake_product(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    match id.as_str() {
        "P-1" => Ok(Json(json!({
            "identifier": "P-1",
            "values": {
                "sku": [{ "locale": null, "scope": null, "data": "SKU-1" }],
                "mrp": [{ "locale": null, "scope": null, "data": "999.00" }]
            }
        }))),
        "P-3" => Ok(Json(json!({
            "identifier": "P-3",
            "values": { "list_price": [{ "data": [{ "amount": "250", "currency": "INR" }] }] }
        }))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn insert(
    db: &DatabaseConnection,
    product_id: &str,
    issue_type: &str,
    segment: &str,
    brand: &str,
    live: &str,
    end: &str,
    price: f64,
) {
    let values: Vec<DbValue> = vec![
        product_id.into(),
        issue_type.into(),
        segment.into(),
        brand.into(),
        live.into(),
        end.into(),
        price.into(),
    ];
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "INSERT INTO campaigns (product_id, issue_type, segment, brand, live_date, end_date, selling_price) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
        values,
    ))
    .await
    .unwrap();
}

/// Starts the fake PIM and the API; returns the API base url
async fn start(client_secret: &str) -> String {
    let pim = serve(
        Router::new()
            .route("/api/oauth/v1/token", post(fake_token))
            .route("/api/rest/v1/products/:id", get(fake_product)),
    )
    .await;

    let config = parse_config(&format!(
        r#"
[database]
url = "sqlite::memory:"

[akeneo]
url = "{pim}"
client_id = "ops"
secret = "{client_secret}"
username = "store-ops"
password = "pw"
"#
    ))
    .unwrap();

    let db = initialize_database(&config.database.url).await.unwrap();

    let today = Local::now().date_naive();
    let past = (today - Duration::days(5)).format(DATE).to_string();
    let soon = (today + Duration::days(5)).format(DATE).to_string();
    let expired = (today - Duration::days(1)).format(DATE).to_string();
    let long_ago = (today - Duration::days(30)).format(DATE).to_string();

    insert(&db, "P-1", "DOD", "Fashion", "Acme", &past, &soon, 500.0).await;
    insert(&db, "P-2", "FLASH_SALE", "Home", "Zed", &past, &soon, 100.0).await;
    insert(&db, "P-3", "DOD", "Fashion", "Acme", &long_ago, &expired, 200.0).await;

    serve(configure_routes(AppState::new(db, config))).await
}

#[tokio::test]
async fn health_and_root() {
    let api = start("secret").await;
    let health: Value = reqwest::get(format!("{api}/health")).await.unwrap().json().await.unwrap();
    assert_eq!(health, json!({ "status": "healthy" }));

    let root: Value = reqwest::get(format!("{api}/")).await.unwrap().json().await.unwrap();
    assert_eq!(root["message"], "Store Operations Automation API");
}

#[tokio::test]
async fn active_campaigns_skip_rows_missing_from_pim() {
    let api = start("secret").await;
    let body: Value = reqwest::get(format!("{api}/api/v1/campaigns"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_count"], 2);
    assert_eq!(body["processed_count"], 1);
    assert_eq!(body["failed_count"], 1);
    assert_eq!(body["failures"][0]["product_id"], "P-2");

    let falcon = &body["campaigns"][0]["falcon_data"];
    assert_eq!(falcon["sku_id"], "SKU-1");
    assert_eq!(falcon["MRP"], 999.0);
    assert_eq!(falcon["MOP"], 999.0);
    assert_eq!(falcon["mop_cost"], 489.5);
    assert_eq!(falcon["coins"], 2000);

    let all: Value = reqwest::get(format!("{api}/api/v1/campaigns?active_only=false"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all["total_count"], 3);
    assert_eq!(all["processed_count"], 2);

    let typed: Value = reqwest::get(format!("{api}/api/v1/campaigns/active?campaign_types=DOD"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(typed["total_count"], 1);
}

#[tokio::test]
async fn distinct_lists() {
    let api = start("secret").await;
    let types: Value = reqwest::get(format!("{api}/api/v1/campaigns/types"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(types, json!({ "campaign_types": ["DOD", "FLASH_SALE"] }));

    let segments: Value = reqwest::get(format!("{api}/api/v1/campaigns/segments"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(segments, json!({ "segments": ["Fashion", "Home"] }));

    let brands: Value = reqwest::get(format!("{api}/api/v1/campaigns/brands"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(brands, json!({ "brands": ["Acme", "Zed"] }));
}

#[tokio::test]
async fn export_formats_and_not_found() {
    let api = start("secret").await;

    let xlsx = reqwest::get(format!("{api}/api/v1/campaigns/export")).await.unwrap();
    assert_eq!(xlsx.status(), 200);
    assert_eq!(
        xlsx.headers()["content-type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = xlsx.headers()["content-disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"campaign_data_"));
    assert!(disposition.ends_with(".xlsx\""));
    let bytes = xlsx.bytes().await.unwrap();
    assert_eq!(&bytes[..2], b"PK");

    let csv = reqwest::get(format!("{api}/api/v1/campaigns/export?format=csv"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("sku_id,product_id,MRP,MOP,selling_price,mop_cost,selling_price_cost,coins")
    );
    assert_eq!(lines.next(), Some("SKU-1,P-1,999,999,500,489.5,500,2000"));
    assert_eq!(lines.next(), None);

    let none = reqwest::get(format!("{api}/api/v1/campaigns/export?segment=Garden"))
        .await
        .unwrap();
    assert_eq!(none.status(), 404);
    let body: Value = none.json().await.unwrap();
    assert_eq!(body["detail"], "No campaigns found with the given filters");

    let invalid = reqwest::get(format!("{api}/api/v1/campaigns/export?segment=Home"))
        .await
        .unwrap();
    assert_eq!(invalid.status(), 404);
    let body: Value = invalid.json().await.unwrap();
    assert_eq!(body["detail"], "No valid campaigns to export");
}

#[tokio::test]
async fn product_lookup() {
    let api = start("secret").await;

    let found: Value = reqwest::get(format!("{api}/api/v1/campaigns/product/P-3"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found["product_id"], "P-3");
    assert_eq!(found["campaign"]["falcon_data"]["MRP"], 250.0);
    assert_eq!(found["campaign"]["falcon_data"]["sku_id"], "P-3");

    let missing = reqwest::get(format!("{api}/api/v1/campaigns/product/NOPE")).await.unwrap();
    assert_eq!(missing.status(), 404);

    let not_in_pim = reqwest::get(format!("{api}/api/v1/campaigns/product/P-2")).await.unwrap();
    assert_eq!(not_in_pim.status(), 404);
}

#[tokio::test]
async fn summary_and_validation() {
    let api = start("secret").await;
    let http = reqwest::Client::new();

    let summary: Value = http
        .get(format!("{api}/api/v1/campaigns/summary?active_only=false"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["summary"]["total_campaigns"], 2);
    assert_eq!(summary["summary"]["total_potential_revenue"], 700.0);
    assert_eq!(summary["processing_stats"]["failed"], 1);
    assert_eq!(summary["filters_applied"]["active_only"], false);

    let empty: Value = http
        .get(format!("{api}/api/v1/campaigns/summary?brand=Nobody"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(empty["summary"], json!({ "total_campaigns": 0 }));

    let report: Value = http
        .post(format!("{api}/api/v1/campaigns/validate"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report["total_campaigns"], 3);
    assert_eq!(report["invalid_campaigns"], 0);
    assert_eq!(report["filters_applied"]["active_only"], false);

    let result: Value = http
        .post(format!("{api}/api/v1/campaigns/validate/record"))
        .json(&json!({
            "issue_type": "DOD",
            "live_date": "10/10/2026",
            "end_date": "01/10/2026",
            "product_id": "P-9",
            "selling_price": 10.0
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(result["valid"], false);
    assert_eq!(result["errors"], json!(["End date must be after live date"]));
}

#[tokio::test]
async fn bad_date_filter_is_a_bad_request() {
    let api = start("secret").await;
    let response = reqwest::get(format!("{api}/api/v1/campaigns?start_date=yesterday"))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn rejected_pim_credentials_are_service_unavailable() {
    let api = start("wrong").await;
    let response = reqwest::get(format!("{api}/api/v1/campaigns")).await.unwrap();
    assert_eq!(response.status(), 503);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Product catalog unavailable"));

    // nothing to enrich, so no PIM call
    let types = reqwest::get(format!("{api}/api/v1/campaigns/types")).await.unwrap();
    assert_eq!(types.status(), 200);
}

#[tokio::test]
async fn dashboard_pages() {
    let api = start("secret").await;

    let home = reqwest::get(format!("{api}/dashboard/")).await.unwrap();
    assert_eq!(home.status(), 200);
    let html = home.text().await.unwrap();
    assert!(html.contains("Store Operations Dashboard"));
    assert!(html.contains("FLASH_SALE"));

    let page = reqwest::get(format!("{api}/dashboard/campaigns"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Campaign Management"));
    assert!(page.contains("SKU-1"));
    assert!(page.contains("Skipped campaigns"));
}
