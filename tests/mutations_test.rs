mod common;

use common::{ScriptedTransport, TEST_BASE, scripted_client};
use rewards_admin::{ApiError, Method};
use serde_json::json;

#[tokio::test]
async fn delete_campaign_succeeds_on_2xx() -> anyhow::Result<()> {
    let url = format!("{}/daily-rewards/campaigns/12", TEST_BASE);
    let transport = ScriptedTransport::new().respond(&url, 200, json!({ "success": true }));
    let client = scripted_client(transport);

    client.delete_campaign("12").await?;

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].body, None);
    Ok(())
}

#[tokio::test]
async fn empty_success_body_is_accepted() -> anyhow::Result<()> {
    let url = format!("{}/rewards/3", TEST_BASE);
    let transport = ScriptedTransport::new().respond_raw(&url, 204, "");
    let client = scripted_client(transport);

    client.delete_reward("3").await?;
    Ok(())
}

#[tokio::test]
async fn deactivate_reward_patches_is_active() -> anyhow::Result<()> {
    let url = format!("{}/rewards/3", TEST_BASE);
    let transport = ScriptedTransport::new().respond(&url, 200, json!({ "success": true }));
    let client = scripted_client(transport);

    client.deactivate_reward("3").await?;

    let request = &client.transport().requests()[0];
    assert_eq!(request.method, Method::Patch);
    let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap_or_default())?;
    assert_eq!(body, json!({ "is_active": 0 }));
    assert!(
        request
            .headers
            .contains(&("Content-Type".to_string(), "application/json".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn activate_campaign_sends_one() -> anyhow::Result<()> {
    let url = format!("{}/daily-rewards/campaigns/4", TEST_BASE);
    let transport = ScriptedTransport::new().respond(&url, 200, json!({ "success": true }));
    let client = scripted_client(transport);

    client.set_campaign_active("4", true).await?;

    let request = &client.transport().requests()[0];
    assert_eq!(request.body.as_deref(), Some(r#"{"is_active":1}"#));
    Ok(())
}

#[tokio::test]
async fn explicit_failure_flag_is_an_error() {
    let transport = ScriptedTransport::new()
        .respond(
            &format!("{}/daily-rewards/campaigns/5", TEST_BASE),
            200,
            json!({ "success": false, "message": "in use" }),
        )
        .respond("/api/daily-rewards/campaigns/5", 403, json!({}))
        .respond("/daily-rewards/campaigns/5", 200, json!({ "success": false }));
    let client = scripted_client(transport);

    let err = client.delete_campaign("5").await.expect_err("backend refused");
    assert!(matches!(err, ApiError::Envelope { .. }));
    assert_eq!(client.transport().requests().len(), 3);
}

#[tokio::test]
async fn mutation_falls_back_after_rejection() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new()
        .respond(&format!("{}/rewards/8", TEST_BASE), 405, json!({}))
        .respond("/api/rewards/8", 200, json!({ "success": true }));
    let client = scripted_client(transport);

    client.delete_reward("8").await?;
    assert_eq!(client.transport().requests().len(), 2);
    Ok(())
}

#[tokio::test]
async fn numeric_failure_flag_is_an_error() {
    let url = format!("{}/rewards/3", TEST_BASE);
    let transport = ScriptedTransport::new()
        .respond(&url, 200, json!({ "success": 0 }))
        .respond("/api/rewards/3", 200, json!({ "success": 0 }))
        .respond("/rewards/3", 200, json!({ "success": 0 }));
    let client = scripted_client(transport);

    let err = client.delete_reward("3").await.expect_err("backend refused");
    assert!(matches!(err, ApiError::Envelope { .. }));
}
