use time::OffsetDateTime;

use crate::api::{AdminClient, Resource};
use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::list_view::{ListFilter, Listable, matches_choice};
use crate::models::Settlement;
use crate::transport::Transport;

pub const SETTLEMENTS: Resource = Resource {
    path: "settlements",
    collection_key: "settlements",
    record_key: "settlement",
    id_field: "settlement_id",
};

pub const SETTLEMENT_STATUSES: [&str; 4] = ["pending", "processing", "settled", "failed"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettlementFilters {
    pub status: Option<String>,
}

impl Listable for Settlement {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.settlement_id.as_str(),
            self.store_name.as_str(),
            self.user_name.as_str(),
        ];
        if let Some(reference) = self.payment_reference.as_deref() {
            fields.push(reference);
        }
        fields
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl ListFilter<Settlement> for SettlementFilters {
    fn matches(&self, item: &Settlement, _now: OffsetDateTime) -> bool {
        matches_choice(&self.status, &item.settlement_status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SettlementTotals {
    pub commission: f64,
    pub settled: f64,
    pub pending: f64,
    pub net: f64,
}

pub fn settlement_totals<'a>(settlements: impl IntoIterator<Item = &'a Settlement>) -> SettlementTotals {
    settlements
        .into_iter()
        .fold(SettlementTotals::default(), |mut totals, s| {
            totals.commission += s.commission_amount;
            totals.settled += s.settled_amount;
            totals.pending += s.pending_amount;
            totals.net += s.effective_net_amount();
            totals
        })
}

impl<T: Transport, C: CredentialProvider> AdminClient<T, C> {
    pub async fn list_settlements(&self) -> Result<Vec<Settlement>> {
        self.fetch_collection(&SETTLEMENTS).await
    }

    pub async fn get_settlement(&self, settlement_id: &str) -> Result<Settlement> {
        self.fetch_record(&SETTLEMENTS, settlement_id).await
    }
}
