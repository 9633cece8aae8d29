use time::OffsetDateTime;

use crate::api::{AdminClient, Resource};
use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::list_view::{DateRange, ListFilter, Listable, matches_choice};
use crate::models::{CreditDebit, RewardHistory};
use crate::transport::Transport;

pub const REWARD_HISTORY: Resource = Resource {
    path: "reward-history",
    collection_key: "history",
    record_key: "history",
    id_field: "id",
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardHistoryFilters {
    pub reward_type: Option<String>,
    pub credit_debit: Option<CreditDebit>,
    pub date_range: DateRange,
}

impl Listable for RewardHistory {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.user_name.as_str(),
            self.reward_name.as_str(),
            self.reward_type.as_str(),
        ];
        fields.extend(
            [
                &self.user_email,
                &self.user_phone,
                &self.transaction_number,
                &self.store_name,
            ]
            .into_iter()
            .filter_map(|f| f.as_deref()),
        );
        fields
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    const NEWEST_FIRST: bool = true;
}

impl ListFilter<RewardHistory> for RewardHistoryFilters {
    fn matches(&self, item: &RewardHistory, now: OffsetDateTime) -> bool {
        matches_choice(&self.reward_type, &item.reward_type)
            && self.credit_debit.is_none_or(|cd| cd == item.credit_debit)
            && self.date_range.matches(item.created_at.as_deref(), now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LedgerTotals {
    pub credited: f64,
    pub debited: f64,
}

impl LedgerTotals {
    pub fn net(&self) -> f64 {
        self.credited - self.debited
    }
}

pub fn ledger_totals<'a>(entries: impl IntoIterator<Item = &'a RewardHistory>) -> LedgerTotals {
    entries
        .into_iter()
        .fold(LedgerTotals::default(), |mut totals, entry| {
            match entry.credit_debit {
                CreditDebit::Credit => totals.credited += entry.amount.abs(),
                CreditDebit::Debit => totals.debited += entry.amount.abs(),
                CreditDebit::Unknown => {}
            }
            totals
        })
}

impl<T: Transport, C: CredentialProvider> AdminClient<T, C> {
    pub async fn list_reward_history(&self) -> Result<Vec<RewardHistory>> {
        self.fetch_collection(&REWARD_HISTORY).await
    }

    pub async fn get_reward_history(&self, id: &str) -> Result<RewardHistory> {
        self.fetch_record(&REWARD_HISTORY, id).await
    }
}
