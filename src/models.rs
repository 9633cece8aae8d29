use serde::{Deserialize, Deserializer, Serialize};

use crate::coerce::{self, amount, count, flag, id, list, na, opt_id, opt_text, text_or_na};
use crate::constants::{UNTITLED_CAMPAIGN, UNTITLED_REWARD};

fn untitled_campaign() -> String {
    UNTITLED_CAMPAIGN.to_string()
}

fn untitled_reward() -> String {
    UNTITLED_REWARD.to_string()
}

fn campaign_title<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    opt_text(d).map(|v| v.unwrap_or_else(untitled_campaign))
}

fn reward_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    opt_text(d).map(|v| v.unwrap_or_else(untitled_reward))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    #[serde(default, deserialize_with = "id")]
    pub id: String,
    #[serde(default = "untitled_campaign", deserialize_with = "campaign_title")]
    pub title: String,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub campaign_type: String,
    #[serde(default, deserialize_with = "flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "count")]
    pub reward_count: i64,
    #[serde(default, deserialize_with = "count")]
    pub total_spins: i64,
    #[serde(default, deserialize_with = "count")]
    pub max_attempts_per_interval: i64,
    #[serde(default, deserialize_with = "opt_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reward {
    #[serde(default, deserialize_with = "id")]
    pub id: String,
    #[serde(default = "untitled_reward", deserialize_with = "reward_name")]
    pub reward_name: String,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub reward_type: String,
    #[serde(default, deserialize_with = "flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "amount")]
    pub normal_reward_value: f64,
    #[serde(default, deserialize_with = "amount")]
    pub vip_reward_value: f64,
    #[serde(default, deserialize_with = "count")]
    pub total_awarded: i64,
    #[serde(default, deserialize_with = "amount")]
    pub total_credits: f64,
    #[serde(default, deserialize_with = "opt_text")]
    pub created_at: Option<String>,
}

/// Ledger direction of a reward-history entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CreditDebit {
    Credit,
    Debit,
    #[default]
    Unknown,
}

impl CreditDebit {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "credit" | "cr" => CreditDebit::Credit,
            "debit" | "dr" => CreditDebit::Debit,
            _ => CreditDebit::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreditDebit::Credit => "credit",
            CreditDebit::Debit => "debit",
            CreditDebit::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for CreditDebit {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        opt_text(d).map(|v| v.map(|s| CreditDebit::parse(&s)).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardHistory {
    #[serde(default, deserialize_with = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_id")]
    pub user_id: Option<String>,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub user_name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub user_email: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub user_phone: Option<String>,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub reward_type: String,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub reward_name: String,
    #[serde(default, deserialize_with = "amount")]
    pub amount: f64,
    #[serde(default)]
    pub credit_debit: CreditDebit,
    #[serde(default, deserialize_with = "opt_id")]
    pub transaction_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub transaction_number: Option<String>,
    #[serde(default, deserialize_with = "opt_id")]
    pub store_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub store_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub created_at: Option<String>,
}

impl RewardHistory {
    /// Amount with the ledger sign applied.
    pub fn signed_amount(&self) -> f64 {
        match self.credit_debit {
            CreditDebit::Debit => -self.amount.abs(),
            _ => self.amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settlement {
    #[serde(default, deserialize_with = "id")]
    pub settlement_id: String,
    #[serde(default, deserialize_with = "opt_id")]
    pub store_id: Option<String>,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub store_name: String,
    #[serde(default, deserialize_with = "opt_id")]
    pub user_id: Option<String>,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub user_name: String,
    #[serde(default, deserialize_with = "count")]
    pub total_transactions: i64,
    #[serde(default, deserialize_with = "amount")]
    pub commission_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub settlement_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub settled_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub pending_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub tax_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub platform_fee: f64,
    #[serde(default, deserialize_with = "amount")]
    pub net_amount: f64,
    #[serde(default = "pending_status", deserialize_with = "settlement_status")]
    pub settlement_status: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub payment_reference: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub payment_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub updated_at: Option<String>,
}

fn pending_status() -> String {
    "pending".to_string()
}

fn settlement_status<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    opt_text(d).map(|v| v.map(|s| s.to_ascii_lowercase()).unwrap_or_else(pending_status))
}

impl Settlement {
    /// Net payout: the reported net amount, or settlement minus commission,
    /// tax and fees when the backend leaves it out.
    pub fn effective_net_amount(&self) -> f64 {
        if self.net_amount != 0.0 {
            return self.net_amount;
        }
        self.settlement_amount - self.commission_amount - self.tax_amount - self.platform_fee
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default, deserialize_with = "id")]
    pub id: String,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub transaction_number: String,
    #[serde(default, deserialize_with = "amount")]
    pub bill_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub vendor_discount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub coupon_discount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub cashback_used: f64,
    #[serde(default, deserialize_with = "amount")]
    pub final_amount: f64,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub payment_status: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "opt_id")]
    pub store_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub store_name: Option<String>,
    #[serde(default, deserialize_with = "opt_id")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub user_email: Option<String>,
    #[serde(default, deserialize_with = "opt_id")]
    pub coupon_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub coupon_code: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub created_at: Option<String>,
}

impl Transaction {
    pub fn total_discount(&self) -> f64 {
        self.vendor_discount + self.coupon_discount + self.cashback_used
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Referral {
    #[serde(default, deserialize_with = "id")]
    pub id: String,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "opt_text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default, deserialize_with = "id")]
    pub id: String,
    #[serde(default = "na", deserialize_with = "text_or_na")]
    pub name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub pincode: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_vip: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_email_verified: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_phone_verified: bool,
    #[serde(default, deserialize_with = "opt_text")]
    pub vip_start_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub vip_end_date: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub cashback_balance: f64,
    #[serde(default, deserialize_with = "amount")]
    pub pending_cashback: f64,
    #[serde(default, deserialize_with = "amount")]
    pub total_cashback_earned: f64,
    #[serde(default, deserialize_with = "opt_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub transactions: Vec<Transaction>,
    #[serde(default, deserialize_with = "list")]
    pub rewards: Vec<RewardHistory>,
    #[serde(default, deserialize_with = "list")]
    pub referrals: Vec<Referral>,
}

impl User {
    pub fn initials(&self) -> String {
        coerce::initials(&self.name)
    }

    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.state, &self.pincode]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}
