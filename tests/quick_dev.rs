//! Smoke test against a server started separately with `cargo run`.
//! Run with `cargo test --test quick_dev -- --ignored --nocapture`.

use anyhow::Result;
use serde_json::json;

#[tokio::test]
#[ignore = "needs a running server on localhost:3000"]
async fn quick_dev() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:3000")?;

    hc.do_post(
        "/api/submit",
        json!({ "name": "quick dev", "dates": ["2024-06-01", "2024-06-02"] }),
    )
    .await?
    .print()
    .await?;

    let list = hc.do_get("/api/responses").await?;
    list.print().await?;

    let id = list.json_body()?[0]["id"].as_i64().unwrap_or_default();
    hc.do_delete(&format!("/api/responses/{id}"))
        .await?
        .print()
        .await?;

    Ok(())
}
