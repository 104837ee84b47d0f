//! [`Gateway`] implementation backed by the HTTP client.

use adblock_core::{Gateway, GatewayList, GatewayRule, NewList, NewRule, Result};
use async_trait::async_trait;

use crate::GatewayClient;

#[async_trait]
impl Gateway for GatewayClient {
    async fn list_lists(&self) -> Result<Vec<GatewayList>> {
        self.lists().list().await
    }

    async fn create_list(&self, list: &NewList) -> Result<GatewayList> {
        self.lists().create(list).await
    }

    async fn delete_list(&self, id: &str) -> Result<()> {
        self.lists().delete(id).await
    }

    async fn list_rules(&self) -> Result<Vec<GatewayRule>> {
        self.rules().list().await
    }

    async fn create_rule(&self, rule: &NewRule) -> Result<GatewayRule> {
        self.rules().create(rule).await
    }

    async fn delete_rule(&self, id: &str) -> Result<()> {
        self.rules().delete(id).await
    }
}
