use time::OffsetDateTime;

use crate::api::{AdminClient, Resource};
use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::list_view::{ListFilter, Listable, StatusFilter, matches_choice};
use crate::models::Campaign;
use crate::transport::Transport;

pub const CAMPAIGNS: Resource = Resource {
    path: "daily-rewards/campaigns",
    collection_key: "campaigns",
    record_key: "campaign",
    id_field: "id",
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignFilters {
    pub status: StatusFilter,
    pub campaign_type: Option<String>,
}

impl Listable for Campaign {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.campaign_type.as_str()]
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl ListFilter<Campaign> for CampaignFilters {
    fn matches(&self, item: &Campaign, _now: OffsetDateTime) -> bool {
        self.status.matches(item.is_active) && matches_choice(&self.campaign_type, &item.campaign_type)
    }
}

/// Distinct campaign types, for the type dropdown.
pub fn campaign_types(campaigns: &[Campaign]) -> Vec<String> {
    let mut types: Vec<String> = campaigns.iter().map(|c| c.campaign_type.clone()).collect();
    types.sort();
    types.dedup();
    types
}

impl<T: Transport, C: CredentialProvider> AdminClient<T, C> {
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        self.fetch_collection(&CAMPAIGNS).await
    }

    pub async fn delete_campaign(&self, id: &str) -> Result<()> {
        self.delete(&CAMPAIGNS, id).await
    }

    pub async fn set_campaign_active(&self, id: &str, active: bool) -> Result<()> {
        self.set_active(&CAMPAIGNS, id, active).await
    }
}
