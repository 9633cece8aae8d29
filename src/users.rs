use tracing::warn;

use crate::api::{AdminClient, Resource};
use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::models::User;
use crate::transport::Transport;

pub const USERS: Resource = Resource {
    path: "users",
    collection_key: "users",
    record_key: "user",
    id_field: "id",
};

/// Tabs of the user detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserTab {
    #[default]
    Overview,
    Transactions,
    Rewards,
    Referrals,
}

impl UserTab {
    pub fn label(&self) -> &'static str {
        match self {
            UserTab::Overview => "Overview",
            UserTab::Transactions => "Transactions",
            UserTab::Rewards => "Rewards",
            UserTab::Referrals => "Referrals",
        }
    }

    pub fn all() -> &'static [UserTab] {
        &[
            UserTab::Overview,
            UserTab::Transactions,
            UserTab::Rewards,
            UserTab::Referrals,
        ]
    }
}

impl<T: Transport, C: CredentialProvider> AdminClient<T, C> {
    /// Fetches a user, then its transactions, rewards and referrals one
    /// after another. A failed sub-collection keeps whatever the user record
    /// embedded instead of failing the page.
    pub async fn get_user_details(&self, id: &str) -> Result<User> {
        let mut user: User = self.fetch_record(&USERS, id).await?;
        let base = USERS.record_path(id);

        match self.fetch_list_at(&format!("{}/transactions", base), "transactions").await {
            Ok(transactions) => user.transactions = transactions,
            Err(e) => warn!(user_id = id, error = %e, "could not load user transactions"),
        }

        match self.fetch_list_at(&format!("{}/rewards", base), "rewards").await {
            Ok(rewards) => user.rewards = rewards,
            Err(e) => warn!(user_id = id, error = %e, "could not load user rewards"),
        }

        match self.fetch_list_at(&format!("{}/referrals", base), "referrals").await {
            Ok(referrals) => user.referrals = referrals,
            Err(e) => warn!(user_id = id, error = %e, "could not load user referrals"),
        }

        Ok(user)
    }
}
