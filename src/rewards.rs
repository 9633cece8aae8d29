use time::OffsetDateTime;

use crate::api::{AdminClient, Resource};
use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::list_view::{ListFilter, Listable, StatusFilter, matches_choice};
use crate::models::Reward;
use crate::transport::Transport;

pub const REWARDS: Resource = Resource {
    path: "rewards",
    collection_key: "rewards",
    record_key: "reward",
    id_field: "id",
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardFilters {
    pub status: StatusFilter,
    pub reward_type: Option<String>,
}

impl Listable for Reward {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.reward_name.as_str(), self.reward_type.as_str()]
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl ListFilter<Reward> for RewardFilters {
    fn matches(&self, item: &Reward, _now: OffsetDateTime) -> bool {
        self.status.matches(item.is_active) && matches_choice(&self.reward_type, &item.reward_type)
    }
}

/// Headline numbers shown above the rewards table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RewardSummary {
    pub total: usize,
    pub active: usize,
    pub total_awarded: i64,
    pub total_credits: f64,
}

pub fn summarize(rewards: &[Reward]) -> RewardSummary {
    RewardSummary {
        total: rewards.len(),
        active: rewards.iter().filter(|r| r.is_active).count(),
        total_awarded: rewards.iter().map(|r| r.total_awarded).sum(),
        total_credits: rewards.iter().map(|r| r.total_credits).sum(),
    }
}

impl<T: Transport, C: CredentialProvider> AdminClient<T, C> {
    pub async fn list_rewards(&self) -> Result<Vec<Reward>> {
        self.fetch_collection(&REWARDS).await
    }

    pub async fn delete_reward(&self, id: &str) -> Result<()> {
        self.delete(&REWARDS, id).await
    }

    pub async fn deactivate_reward(&self, id: &str) -> Result<()> {
        self.set_active(&REWARDS, id, false).await
    }
}
