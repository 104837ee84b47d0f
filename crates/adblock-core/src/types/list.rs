use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Domain;

/// Zero Trust Gateway list as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayList {
    /// Provider-assigned identifier
    #[serde(default)]
    pub id: Option<String>,

    /// List name
    #[serde(default)]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Kind of values the list holds
    #[serde(default, rename = "type")]
    pub list_type: Option<ListType>,

    /// Number of items in the list
    #[serde(default)]
    pub count: Option<u64>,

    /// When the list was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the list was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Value type of a Gateway list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListType {
    /// Hostnames
    Domain,
    /// IP addresses or CIDR ranges
    Ip,
    /// URLs
    Url,
    /// Email addresses
    Email,
    /// Device serial numbers
    Serial,
    /// Any type this client does not know about
    #[serde(other)]
    Other,
}

impl std::fmt::Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain => write!(f, "DOMAIN"),
            Self::Ip => write!(f, "IP"),
            Self::Url => write!(f, "URL"),
            Self::Email => write!(f, "EMAIL"),
            Self::Serial => write!(f, "SERIAL"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

/// Single value inside a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// The item value
    pub value: String,
}

/// Request body to create a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewList {
    /// List name
    pub name: String,

    /// Description (carries the ownership marker for managed lists)
    pub description: String,

    /// Value type
    #[serde(rename = "type")]
    pub list_type: ListType,

    /// Initial items
    pub items: Vec<ListItem>,
}

impl NewList {
    /// Build a domain list from a slice of domains
    #[must_use]
    pub fn domains(
        name: impl Into<String>,
        description: impl Into<String>,
        domains: &[Domain],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            list_type: ListType::Domain,
            items: domains
                .iter()
                .map(|d| ListItem {
                    value: d.as_str().to_string(),
                })
                .collect(),
        }
    }

    /// Number of items in the request
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the request carries no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
