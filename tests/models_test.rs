use rewards_admin::models::{Campaign, CreditDebit, Reward, RewardHistory, Settlement, Transaction, User};
use rewards_admin::rewards::summarize;
use rewards_admin::settlements::settlement_totals;
use rewards_admin::users::UserTab;
use serde_json::json;

#[test]
fn campaign_placeholders_and_coercion() -> anyhow::Result<()> {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 3,
        "title": null,
        "is_active": "1",
        "reward_count": "4",
        "total_spins": null,
        "max_attempts_per_interval": 2.0
    }))?;

    assert_eq!(campaign.id, "3");
    assert_eq!(campaign.title, "Untitled Campaign");
    assert_eq!(campaign.campaign_type, "N/A");
    assert!(campaign.is_active);
    assert_eq!(campaign.reward_count, 4);
    assert_eq!(campaign.total_spins, 0);
    assert_eq!(campaign.max_attempts_per_interval, 2);
    assert_eq!(campaign.start_date, None);

    Ok(())
}

#[test]
fn reward_values_from_strings() -> anyhow::Result<()> {
    let rewards: Vec<Reward> = serde_json::from_value(json!([
        { "id": "r1", "reward_name": "Spin", "reward_type": "cashback", "is_active": true,
          "normal_reward_value": "5.50", "vip_reward_value": "abc", "total_awarded": "12",
          "total_credits": "66" },
        { "id": "r2", "is_active": 0, "total_awarded": 3, "total_credits": 4.5 }
    ]))?;

    assert_eq!(rewards[0].normal_reward_value, 5.5);
    assert_eq!(rewards[0].vip_reward_value, 0.0);
    assert_eq!(rewards[1].reward_name, "Untitled Reward");

    let summary = summarize(&rewards);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.active, 1);
    assert_eq!(summary.total_awarded, 15);
    assert_eq!(summary.total_credits, 70.5);

    Ok(())
}

#[test]
fn credit_debit_is_case_insensitive() -> anyhow::Result<()> {
    let entry: RewardHistory = serde_json::from_value(json!({
        "id": 1, "amount": "3.00", "credit_debit": "DEBIT"
    }))?;
    assert_eq!(entry.credit_debit, CreditDebit::Debit);
    assert_eq!(entry.signed_amount(), -3.0);
    assert_eq!(entry.user_name, "N/A");

    let entry: RewardHistory = serde_json::from_value(json!({ "id": 2, "credit_debit": null }))?;
    assert_eq!(entry.credit_debit, CreditDebit::Unknown);
    assert_eq!(entry.amount, 0.0);

    Ok(())
}

#[test]
fn settlement_status_and_net_amount() -> anyhow::Result<()> {
    let settlements: Vec<Settlement> = serde_json::from_value(json!([
        { "settlement_id": "S-1", "settlement_status": "Settled", "commission_amount": "10",
          "settlement_amount": "100", "settled_amount": "90", "net_amount": "85" },
        { "settlement_id": 2, "commission_amount": 5, "settlement_amount": "50",
          "tax_amount": "2", "platform_fee": "1", "pending_amount": "42" }
    ]))?;

    assert_eq!(settlements[0].settlement_status, "settled");
    assert_eq!(settlements[1].settlement_status, "pending");
    assert_eq!(settlements[1].settlement_id, "2");
    assert_eq!(settlements[0].effective_net_amount(), 85.0);
    assert_eq!(settlements[1].effective_net_amount(), 42.0);

    let totals = settlement_totals(&settlements);
    assert_eq!(totals.commission, 15.0);
    assert_eq!(totals.settled, 90.0);
    assert_eq!(totals.pending, 42.0);
    assert_eq!(totals.net, 127.0);

    Ok(())
}

#[test]
fn transaction_discount_sum() -> anyhow::Result<()> {
    let transaction: Transaction = serde_json::from_value(json!({
        "id": 11, "transaction_number": "TXN-11", "bill_amount": "200",
        "vendor_discount": "10", "coupon_discount": 5, "cashback_used": "2.5",
        "final_amount": "182.5", "payment_status": "paid"
    }))?;
    assert_eq!(transaction.total_discount(), 17.5);
    assert_eq!(transaction.payment_method, None);
    Ok(())
}

#[test]
fn user_nested_lists_tolerate_nulls() -> anyhow::Result<()> {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "name": "jane doe",
        "city": "Pune",
        "pincode": "411001",
        "is_vip": "true",
        "cashback_balance": "12.40",
        "transactions": null,
        "rewards": [{ "id": 1, "credit_debit": "credit", "amount": "2" }, "junk"],
        "referrals": "none"
    }))?;

    assert_eq!(user.initials(), "JD");
    assert_eq!(user.location().as_deref(), Some("Pune, 411001"));
    assert!(user.is_vip);
    assert_eq!(user.cashback_balance, 12.4);
    assert!(user.transactions.is_empty());
    assert_eq!(user.rewards.len(), 1);
    assert!(user.referrals.is_empty());

    let nameless: User = serde_json::from_value(json!({ "id": 8 }))?;
    assert_eq!(nameless.name, "N/A");
    assert_eq!(nameless.location(), None);

    Ok(())
}

#[test]
fn user_page_opens_on_overview() {
    assert_eq!(UserTab::default(), UserTab::Overview);
    assert_eq!(UserTab::all().first(), Some(&UserTab::default()));
}
