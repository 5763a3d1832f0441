//! Integration tests for admin catalog management and user search.
//!
//! These tests require:
//! - A migrated and seeded database (frontino-cli migrate && frontino-cli seed)
//! - The server running (cargo run -p frontino-server)
//!
//! Run with: cargo test -p frontino-integration-tests -- --ignored

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::{Client, StatusCode, redirect::Policy};

fn base_url() -> String {
    std::env::var("FRONTINO_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// A market name unique per test run, so re-runs don't collide.
fn unique_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .subsec_nanos();
    format!("{prefix} {nanos}")
}

/// Log in as the seeded administrator.
async fn admin_client() -> Client {
    let client = client();
    let resp = client
        .post(format!("{}/login", base_url()))
        .form(&[("handle", "admin"), ("password", "1234")])
        .send()
        .await
        .expect("admin login");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    client
}

/// Create a market through the admin form and return its name.
async fn create_market(client: &Client, name: &str, category: &str) {
    let resp = client
        .post(format!("{}/admin/add", base_url()))
        .form(&[
            ("name", name),
            ("address", "Main street 1"),
            ("phone", "555-0100"),
            ("opens_at", "08:00"),
            ("closes_at", "21:00"),
            ("description", "Integration test market"),
            ("category", category),
            ("image", ""),
        ])
        .send()
        .await
        .expect("create market");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/admin?success=added");
}

#[tokio::test]
#[ignore = "Requires a running server and seeded database"]
async fn admin_can_create_and_see_market() {
    let client = admin_client().await;
    let base = base_url();
    let name = unique_name("Corner Market");

    create_market(&client, &name, "grocery").await;

    let resp = client
        .get(format!("{base}/admin"))
        .send()
        .await
        .expect("panel request");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains(&name));
}

#[tokio::test]
#[ignore = "Requires a running server and seeded database"]
async fn search_filters_by_query_and_category() {
    let client = admin_client().await;
    let base = base_url();
    let name = unique_name("Searchable Market");

    create_market(&client, &name, "integration-bakery").await;

    // Free-text query finds the new entry.
    let resp = client
        .get(format!("{base}/search"))
        .query(&[("q", name.as_str())])
        .send()
        .await
        .expect("search request");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains(&name));

    // Category filter narrows to the matching category.
    let resp = client
        .get(format!("{base}/search"))
        .query(&[("category", "integration-bakery")])
        .send()
        .await
        .expect("search request");
    let body = resp.text().await.expect("body");
    assert!(body.contains(&name));

    // A non-matching category hides it.
    let resp = client
        .get(format!("{base}/search"))
        .query(&[("q", name.as_str()), ("category", "no-such-category")])
        .send()
        .await
        .expect("search request");
    let body = resp.text().await.expect("body");
    assert!(!body.contains(&name));
}

#[tokio::test]
#[ignore = "Requires a running server and seeded database"]
async fn user_role_cannot_reach_admin_routes() {
    let client = client();
    let base = base_url();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .subsec_nanos();
    let handle = format!("shopper-{nanos}");

    client
        .post(format!("{base}/register"))
        .form(&[
            ("name", "Shopper"),
            ("handle", handle.as_str()),
            ("password", "hunter2"),
        ])
        .send()
        .await
        .expect("register");
    client
        .post(format!("{base}/login"))
        .form(&[("handle", handle.as_str()), ("password", "hunter2")])
        .send()
        .await
        .expect("login");

    let resp = client
        .get(format!("{base}/admin"))
        .send()
        .await
        .expect("admin request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/login?error=denied");
}
