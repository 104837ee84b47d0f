use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Zero Trust Gateway rule as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayRule {
    /// Provider-assigned identifier
    #[serde(default)]
    pub id: Option<String>,

    /// Rule name
    #[serde(default)]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// What the rule does on a match
    #[serde(default)]
    pub action: Option<RuleAction>,

    /// Traffic matching expression
    #[serde(default)]
    pub traffic: Option<String>,

    /// Whether the rule is active
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Evaluation order
    #[serde(default)]
    pub precedence: Option<i64>,

    /// When the rule was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Action taken by a Gateway rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    /// Block matching traffic
    Block,
    /// Allow matching traffic
    Allow,
    /// Any action this client does not model
    #[serde(other)]
    Other,
}

impl std::fmt::Display for RuleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Block => write!(f, "block"),
            Self::Allow => write!(f, "allow"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Request body to create a rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRule {
    /// Rule name
    pub name: String,

    /// Description (carries the ownership marker for managed rules)
    pub description: String,

    /// Action on match
    pub action: RuleAction,

    /// Traffic matching expression
    pub traffic: String,

    /// Whether the rule is active
    pub enabled: bool,
}
