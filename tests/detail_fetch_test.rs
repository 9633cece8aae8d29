mod common;

use common::{ScriptedTransport, TEST_BASE, history_json, scripted_client};
use rewards_admin::{ApiError, ErrorInfo};
use serde_json::json;

fn record_url(path: &str) -> String {
    format!("{}/{}", TEST_BASE, path)
}

#[tokio::test]
async fn matching_id_is_accepted() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new().respond(
        &record_url("reward-history/5"),
        200,
        json!({ "success": true, "data": { "history": { "id": 5 } } }),
    );
    let client = scripted_client(transport);

    let entry = client.get_reward_history("5").await?;
    assert_eq!(entry.id, "5");
    Ok(())
}

#[tokio::test]
async fn mismatched_id_is_rejected() {
    let transport = ScriptedTransport::new().respond(
        &record_url("reward-history/6"),
        200,
        json!({ "success": true, "data": { "history": { "id": 5 } } }),
    );
    let client = scripted_client(transport);

    let err = client.get_reward_history("6").await.expect_err("wrong record");
    assert_eq!(
        err,
        ApiError::IdMismatch {
            expected: "6".to_string(),
            found: "5".to_string()
        }
    );
    assert_eq!(ErrorInfo::from(&err).title, "Unexpected record");
}

#[tokio::test]
async fn record_without_id_counts_as_mismatch() {
    let transport = ScriptedTransport::new().respond(
        &record_url("transactions/3"),
        200,
        json!({ "success": true, "data": { "transaction": { "transaction_number": "TXN-3" } } }),
    );
    let client = scripted_client(transport);

    let err = client.get_transaction("3").await.expect_err("missing id");
    assert!(matches!(err, ApiError::IdMismatch { ref found, .. } if found == "none"));
}

#[tokio::test]
async fn not_found_stops_the_fallback() {
    let transport = ScriptedTransport::new()
        .respond(&record_url("settlements/S-1"), 404, json!({ "error": "missing" }))
        .respond("/api/settlements/S-1", 200, json!({ "settlement_id": "S-1" }));
    let client = scripted_client(transport);

    let err = client.get_settlement("S-1").await.expect_err("404 is terminal");
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(client.transport().requests().len(), 1);
}

#[tokio::test]
async fn settlement_matches_on_settlement_id() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new()
        .respond(&record_url("settlements/S-1"), 500, json!({}))
        .respond(
            "/api/settlements/S-1",
            200,
            json!({ "settlement_id": "S-1", "store_name": "Corner Store", "net_amount": "12" }),
        );
    let client = scripted_client(transport);

    let settlement = client.get_settlement("S-1").await?;
    assert_eq!(settlement.store_name, "Corner Store");
    assert_eq!(settlement.effective_net_amount(), 12.0);
    Ok(())
}

#[tokio::test]
async fn numeric_and_string_ids_compare_equal() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new().respond(
        &record_url("reward-history/9"),
        200,
        json!({ "history": history_json(9, "Asha", "credit", "4", "2024-06-01T00:00:00Z") }),
    );
    let client = scripted_client(transport);

    let entry = client.get_reward_history(" 9 ").await?;
    assert_eq!(entry.user_name, "Asha");
    Ok(())
}

#[tokio::test]
async fn ids_are_escaped_in_the_path() {
    let client = scripted_client(ScriptedTransport::new());

    let _ = client.get_transaction("a/b c").await;
    assert_eq!(
        client.transport().urls()[0],
        format!("{}/transactions/a%2Fb%20c", TEST_BASE)
    );
}

#[tokio::test]
async fn user_details_merge_sub_collections() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new()
        .respond(
            &record_url("users/7"),
            200,
            json!({ "success": true, "data": { "user": {
                "id": 7,
                "name": "Asha Rao",
                "referrals": [{ "id": 1, "name": "Embedded Friend" }]
            } } }),
        )
        .respond(
            &record_url("users/7/transactions"),
            200,
            json!({ "success": true, "data": { "transactions": [
                { "id": 1, "transaction_number": "TXN-1", "final_amount": "10" },
                { "id": 2, "transaction_number": "TXN-2", "final_amount": "20" }
            ] } }),
        )
        .respond(
            &record_url("users/7/rewards"),
            200,
            json!([history_json(4, "Asha Rao", "credit", "3", "2024-06-01T00:00:00Z")]),
        );
    let client = scripted_client(transport);

    let user = client.get_user_details("7").await?;
    assert_eq!(user.initials(), "AR");
    assert_eq!(user.transactions.len(), 2);
    assert_eq!(user.rewards.len(), 1);
    // referrals endpoint is unreachable, embedded data survives
    assert_eq!(user.referrals.len(), 1);
    assert_eq!(user.referrals[0].name, "Embedded Friend");

    // user, then each sub-collection in order
    let urls = client.transport().urls();
    assert_eq!(urls[0], record_url("users/7"));
    assert_eq!(urls[1], record_url("users/7/transactions"));
    assert_eq!(urls[2], record_url("users/7/rewards"));
    assert_eq!(urls[3], record_url("users/7/referrals"));

    Ok(())
}

#[tokio::test]
async fn user_details_fail_when_user_missing() {
    let transport =
        ScriptedTransport::new().respond(&record_url("users/404"), 404, json!({ "success": false }));
    let client = scripted_client(transport);

    let err = client.get_user_details("404").await.expect_err("no user");
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(client.transport().requests().len(), 1);
}
