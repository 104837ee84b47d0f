//! Telling our Gateway resources apart from everyone else's.
//!
//! Cloudflare offers no metadata field for ownership, so managed resources are
//! tagged through their description. Matching is exact and case-sensitive;
//! lists and rules use separate markers.

use adblock_core::{GatewayList, GatewayRule};

/// Description carried by every list this tool creates
pub const LIST_MARKER: &str = "# auto created adservers list #";

/// Description carried by the rule this tool creates
pub const RULE_MARKER: &str = "# auto created block ads rule #";

/// A remote resource with an identifier and a description
pub trait Tagged {
    /// Provider-assigned identifier
    fn id(&self) -> Option<&str>;

    /// Description field
    fn description(&self) -> Option<&str>;
}

impl Tagged for GatewayList {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Tagged for GatewayRule {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Keep items whose description is exactly `marker` and whose id is non-empty
pub fn owned_by<'a, T: Tagged>(items: &'a [T], marker: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.description() == Some(marker))
        .filter(|item| item.id().is_some_and(|id| !id.is_empty()))
        .collect()
}

/// Lists created by this tool
pub fn managed_lists(lists: &[GatewayList]) -> Vec<&GatewayList> {
    owned_by(lists, LIST_MARKER)
}

/// Rules created by this tool
pub fn managed_rules(rules: &[GatewayRule]) -> Vec<&GatewayRule> {
    owned_by(rules, RULE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(id: Option<&str>, description: Option<&str>) -> GatewayList {
        GatewayList {
            id: id.map(String::from),
            name: "list".into(),
            description: description.map(String::from),
            list_type: None,
            count: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn rule(id: &str, description: &str) -> GatewayRule {
        GatewayRule {
            id: Some(id.into()),
            name: "rule".into(),
            description: Some(description.into()),
            action: None,
            traffic: None,
            enabled: None,
            precedence: None,
            created_at: None,
        }
    }

    fn ids<T: Tagged>(items: &[&T]) -> Vec<String> {
        items
            .iter()
            .filter_map(|item| item.id().map(String::from))
            .collect()
    }

    #[test]
    fn test_markers_are_distinct() {
        assert_ne!(LIST_MARKER, RULE_MARKER);
    }

    #[test]
    fn test_only_marked_lists_are_managed() {
        let lists = vec![
            list(Some("1"), Some("# auto created adservers list #")),
            list(Some("2"), Some("manual")),
        ];
        assert_eq!(ids(&managed_lists(&lists)), vec!["1"]);
    }

    #[test]
    fn test_marker_match_is_exact() {
        let lists = vec![
            list(Some("prefix"), Some("# auto created adservers list # (copy)")),
            list(Some("case"), Some("# AUTO CREATED ADSERVERS LIST #")),
            list(Some("space"), Some(" # auto created adservers list #")),
            list(Some("none"), None),
            list(Some("ok"), Some(LIST_MARKER)),
        ];
        assert_eq!(ids(&managed_lists(&lists)), vec!["ok"]);
    }

    #[test]
    fn test_missing_or_empty_id_is_skipped() {
        let lists = vec![
            list(None, Some(LIST_MARKER)),
            list(Some(""), Some(LIST_MARKER)),
        ];
        assert!(managed_lists(&lists).is_empty());
    }

    #[test]
    fn test_block_ads_rule_is_managed() {
        let rules = vec![
            rule("deployed", "# auto created block ads rule #"),
            rule("legacy", "# auto created adservers rule #"),
        ];
        assert_eq!(ids(&managed_rules(&rules)), vec!["deployed"]);
    }

    #[test]
    fn test_list_marker_does_not_claim_rules() {
        let rules = vec![rule("r1", LIST_MARKER), rule("r2", RULE_MARKER)];
        assert_eq!(ids(&managed_rules(&rules)), vec!["r2"]);

        let lists = vec![list(Some("l1"), Some(RULE_MARKER))];
        assert!(managed_lists(&lists).is_empty());
    }
}
