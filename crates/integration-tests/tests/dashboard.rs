//! Dashboard page and filter toggle tests.

use axum::http::StatusCode;

use shoe_inventory_integration_tests::{HEADER, TestContext, lists_model};

const ROWS: &str = "1,Nike,Mercurial,Football,Red,42,1500000\n\
                    2,Asics,Gel Nimbus,Running,Blue,41,2100000\n\
                    3,Vans,Old Skool,Casual,Black,40,899000\n";

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let response = ctx.get("/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_ready_without_data_file() {
    let ctx = TestContext::new();
    assert_eq!(ctx.get("/health/ready", None).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_not_ready_with_malformed_data_file() {
    let ctx = TestContext::with_rows("1,Nike,Air,Running,Blue,42,cheap\n");
    assert_eq!(
        ctx.get("/health/ready", None).await.status,
        StatusCode::SERVICE_UNAVAILABLE
    );
}

// =============================================================================
// Rendering
// =============================================================================

#[tokio::test]
async fn test_missing_file_renders_empty_dashboard() {
    let ctx = TestContext::new();
    let response = ctx.get("/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Shoes Dashboard"));
    assert!(response.body.contains("My Shoes Store"));
    assert!(response.body.contains("Rengasdengklok Street No. 45"));
    assert!(response.body.contains("No shoes match your filter criteria."));
    assert!(!response.body.contains("<svg"));

    // Created with only the header row
    assert_eq!(ctx.data().as_deref(), Some(HEADER));
}

#[tokio::test]
async fn test_dashboard_lists_rows_and_charts() {
    let ctx = TestContext::with_rows(ROWS);
    let response = ctx.get("/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(lists_model(&response.body, "Mercurial"));
    assert!(lists_model(&response.body, "Gel Nimbus"));
    assert!(lists_model(&response.body, "Old Skool"));
    assert!(response.body.contains("Rp 1.500.000"));
    assert_eq!(response.body.matches("<svg").count(), 3);
    assert!(response.body.contains("#bff3ca"));
    assert!(response.body.contains("#d946ef"));
    assert!(!response.body.contains("Show All Shoes"));
}

#[tokio::test]
async fn test_malformed_file_is_a_server_error() {
    let ctx = TestContext::with_rows("1,Nike,Air,Running,Blue,42,cheap\n");
    let response = ctx.get("/", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Internal server error");
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let ctx = TestContext::new();
    let response = ctx.get("/static/css/main.css", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(".data-table"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let ctx = TestContext::new();
    let response = ctx.get("/shoes/42/edit", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Not found: /shoes/42/edit");
}

// =============================================================================
// Filter toggles
// =============================================================================

async fn models_for(ctx: &TestContext, query: &str) -> Vec<&'static str> {
    let body = ctx.get(&format!("/{query}"), None).await.body;
    ["Mercurial", "Gel Nimbus", "Old Skool"]
        .into_iter()
        .filter(|model| lists_model(&body, model))
        .collect()
}

#[tokio::test]
async fn test_filter_scenarios() {
    let ctx = TestContext::with_rows(ROWS);

    assert_eq!(
        models_for(&ctx, "").await,
        ["Mercurial", "Gel Nimbus", "Old Skool"]
    );
    assert_eq!(models_for(&ctx, "?football=on").await, ["Mercurial"]);
    assert_eq!(
        models_for(&ctx, "?running=on").await,
        ["Mercurial", "Gel Nimbus"]
    );
    assert_eq!(
        models_for(&ctx, "?football=on&running=on").await,
        ["Mercurial", "Gel Nimbus"]
    );
}

#[tokio::test]
async fn test_active_filter_shows_banner_and_show_all() {
    let ctx = TestContext::with_rows(ROWS);
    let response = ctx.get("/?football=on", None).await;

    assert!(response.body.contains("Showing shoes suitable for playing football"));
    assert!(response.body.contains("Show All Shoes"));
    assert!(response.body.contains(r#"name="football" onchange="this.form.submit()" checked"#));
}

#[tokio::test]
async fn test_filter_with_no_matches() {
    let ctx = TestContext::with_rows("3,Vans,Old Skool,Casual,Black,40,899000\n");
    let response = ctx.get("/?running=on", None).await;

    assert!(response.body.contains("No shoes match your filter criteria."));
    assert!(!response.body.contains("<svg"));
    assert!(response.body.contains("Show All Shoes"));
}

#[tokio::test]
async fn test_unknown_category_is_listed_but_never_filtered_in() {
    let ctx = TestContext::with_rows("9,Crocs,Classic,clog,Green,39,500000\n");

    let all = ctx.get("/", None).await;
    assert!(lists_model(&all.body, "Classic"));
    assert!(all.body.contains("<td>clog</td>"));

    let filtered = ctx.get("/?football=on&running=on", None).await;
    assert!(!lists_model(&filtered.body, "Classic"));
}
