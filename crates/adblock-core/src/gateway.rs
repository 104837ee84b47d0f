//! The provider capability the reconciler depends on.

use async_trait::async_trait;

use crate::{GatewayList, GatewayRule, NewList, NewRule, Result};

/// Account-scoped access to Zero Trust Gateway lists and rules
///
/// Implementations are bound to a single account when constructed, so none of
/// the methods take an account identifier.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetch every list in the account
    async fn list_lists(&self) -> Result<Vec<GatewayList>>;

    /// Create a list and return it with its assigned identifier
    async fn create_list(&self, list: &NewList) -> Result<GatewayList>;

    /// Delete a list by identifier
    async fn delete_list(&self, id: &str) -> Result<()>;

    /// Fetch every rule in the account
    async fn list_rules(&self) -> Result<Vec<GatewayRule>>;

    /// Create a rule and return it with its assigned identifier
    async fn create_rule(&self, rule: &NewRule) -> Result<GatewayRule>;

    /// Delete a rule by identifier
    async fn delete_rule(&self, id: &str) -> Result<()>;
}
