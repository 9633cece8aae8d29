use crate::api::{AdminClient, Resource};
use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::models::Transaction;
use crate::transport::Transport;

pub const TRANSACTIONS: Resource = Resource {
    path: "transactions",
    collection_key: "transactions",
    record_key: "transaction",
    id_field: "id",
};

impl<T: Transport, C: CredentialProvider> AdminClient<T, C> {
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction> {
        self.fetch_record(&TRANSACTIONS, id).await
    }
}
