use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Labels of `[A-Za-z0-9_-]` joined by dots, ending in an alphabetic TLD of
/// at least two letters.
static DOMAIN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9_-]+\.)+[A-Za-z]{2,}$").expect("domain pattern is valid")
});

/// A hostname accepted into a blocklist
///
/// Compared by exact string equality; the casing of the feed is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Validate a token against the domain shape
    ///
    /// Returns `None` for anything with whitespace, a scheme prefix such as
    /// `://`, a missing dot, or a numeric top-level label.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if is_valid_domain(token) {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    /// The domain as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true if `token` has the shape of a fully-qualified hostname
#[must_use]
pub fn is_valid_domain(token: &str) -> bool {
    DOMAIN_SHAPE.is_match(token)
}

/// Ordered, duplicate-free collection of domains for a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSet {
    domains: Vec<Domain>,
}

impl DomainSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            domains: Vec::new(),
        }
    }

    /// Number of domains
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Returns true if there are no domains
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Iterate in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, Domain> {
        self.domains.iter()
    }

    /// Borrow the domains as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Domain] {
        &self.domains
    }

    /// Keep only the first `cap` domains
    pub fn truncate(&mut self, cap: usize) {
        self.domains.truncate(cap);
    }
}

impl FromIterator<Domain> for DomainSet {
    /// Deduplicate, keeping the first occurrence of each domain
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let domains = iter
            .into_iter()
            .filter(|domain| seen.insert(domain.clone()))
            .collect();
        Self { domains }
    }
}

impl IntoIterator for DomainSet {
    type Item = Domain;
    type IntoIter = std::vec::IntoIter<Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.into_iter()
    }
}

impl<'a> IntoIterator for &'a DomainSet {
    type Item = &'a Domain;
    type IntoIter = std::slice::Iter<'a, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(names: &[&str]) -> Vec<Domain> {
        names.iter().filter_map(|n| Domain::parse(n)).collect()
    }

    #[test]
    fn test_accepts_hostnames() {
        assert!(is_valid_domain("ads.example.com"));
        assert!(is_valid_domain("example.co"));
        assert!(is_valid_domain("track_01.ads-server.net"));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert!(!is_valid_domain("://bad"));
        assert!(!is_valid_domain("not a domain"));
        assert!(!is_valid_domain("a"));
        assert!(!is_valid_domain("http://ads.example.com"));
        assert!(!is_valid_domain("0.0.0.0"));
        assert!(!is_valid_domain("example.c"));
        assert!(!is_valid_domain(".example.com"));
        assert!(!is_valid_domain(""));
    }

    #[test]
    fn test_preserves_case() {
        let domain = Domain::parse("Ads.Example.COM").unwrap();
        assert_eq!(domain.as_str(), "Ads.Example.COM");
        assert_ne!(Domain::parse("ads.example.com").unwrap(), domain);
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let set: DomainSet = domains(&["a.com", "b.com", "a.com"]).into_iter().collect();
        let names: Vec<&str> = set.iter().map(Domain::as_str).collect();
        assert_eq!(names, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_truncate() {
        let mut set: DomainSet = domains(&["a.com", "b.com", "c.com"]).into_iter().collect();
        set.truncate(2);
        assert_eq!(set.len(), 2);
        set.truncate(10);
        assert_eq!(set.len(), 2);
    }
}
