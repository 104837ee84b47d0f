//! Gateway list endpoints.

use crate::GatewayClient;
use adblock_core::{AdblockError, GatewayList, NewList, Result};

/// Gateway list endpoints
pub struct ListsApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> ListsApi<'a> {
    pub(crate) const fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// List all Gateway lists in the account
    ///
    /// An account with no lists may return a `null` result, which maps to an
    /// empty vector.
    pub async fn list(&self) -> Result<Vec<GatewayList>> {
        let lists: Option<Vec<GatewayList>> = self.client.get(&["gateway", "lists"]).await?;
        Ok(lists.unwrap_or_default())
    }

    /// Get a single list
    pub async fn get(&self, list_id: &str) -> Result<GatewayList> {
        self.client
            .get(&["gateway", "lists", list_id])
            .await?
            .ok_or_else(|| AdblockError::NotFound {
                resource: format!("list {list_id}"),
            })
    }

    /// Create a list with its initial items
    pub async fn create(&self, list: &NewList) -> Result<GatewayList> {
        self.client
            .post(&["gateway", "lists"], list)
            .await?
            .ok_or_else(|| AdblockError::Internal("create list returned no result".into()))
    }

    /// Delete a list
    pub async fn delete(&self, list_id: &str) -> Result<()> {
        self.client.delete(&["gateway", "lists", list_id]).await
    }
}
