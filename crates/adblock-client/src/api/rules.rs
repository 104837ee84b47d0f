//! Gateway rule endpoints.

use crate::GatewayClient;
use adblock_core::{AdblockError, GatewayRule, NewRule, Result};

/// Gateway rule endpoints
pub struct RulesApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> RulesApi<'a> {
    pub(crate) const fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// List all Gateway rules in the account
    pub async fn list(&self) -> Result<Vec<GatewayRule>> {
        let rules: Option<Vec<GatewayRule>> = self.client.get(&["gateway", "rules"]).await?;
        Ok(rules.unwrap_or_default())
    }

    /// Create a rule
    pub async fn create(&self, rule: &NewRule) -> Result<GatewayRule> {
        self.client
            .post(&["gateway", "rules"], rule)
            .await?
            .ok_or_else(|| AdblockError::Internal("create rule returned no result".into()))
    }

    /// Delete a rule
    pub async fn delete(&self, rule_id: &str) -> Result<()> {
        self.client.delete(&["gateway", "rules", rule_id]).await
    }
}
