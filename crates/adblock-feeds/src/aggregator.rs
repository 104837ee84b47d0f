//! Merge several feeds into one [`DomainSet`].

use adblock_core::{Domain, DomainSet};
use futures_util::future::try_join_all;
use tracing::{debug, info, warn};

use crate::error::{FeedError, FeedResult};
use crate::parse::parse_feed;
use crate::source::FeedSource;

/// Domains blocked on every run, ahead of any configured extras
pub const BUILTIN_OVERRIDES: [&str; 1] = ["m.vpon.com"];

/// Fetches every configured feed and merges the results
///
/// Overrides come first in the merged set, followed by each feed in the order
/// it was added. Duplicates keep their first position.
#[derive(Default)]
pub struct FeedAggregator {
    sources: Vec<Box<dyn FeedSource>>,
    overrides: Vec<String>,
}

impl FeedAggregator {
    /// Create an aggregator with no sources
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a feed source
    #[must_use]
    pub fn source(mut self, source: impl FeedSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Add several boxed feed sources
    #[must_use]
    pub fn sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn FeedSource>>,
    {
        self.sources.extend(sources);
        self
    }

    /// Add domains that are always included, ahead of any feed content
    #[must_use]
    pub fn overrides<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Override entries in merge order, before validation
    #[must_use]
    pub fn override_domains(&self) -> &[String] {
        &self.overrides
    }

    /// Number of configured sources
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no sources are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Fetch all feeds concurrently and build the domain set
    ///
    /// Any single feed failing fails the whole fetch.
    pub async fn fetch(&self) -> FeedResult<DomainSet> {
        if self.sources.is_empty() && self.overrides.is_empty() {
            return Err(FeedError::NoSources);
        }

        let bodies = try_join_all(self.sources.iter().map(|source| source.fetch())).await?;

        let mut merged = self.valid_overrides();
        for (source, body) in self.sources.iter().zip(&bodies) {
            let domains = parse_feed(body);
            info!(feed = source.name(), count = domains.len(), "Fetched feed");
            debug!(
                feed = source.name(),
                skipped = body.lines().count().saturating_sub(domains.len()),
                "Skipped lines without a domain"
            );
            merged.extend(domains);
        }

        let set: DomainSet = merged.into_iter().collect();
        info!("Fetched {} ad servers", set.len());

        Ok(set)
    }

    fn valid_overrides(&self) -> Vec<Domain> {
        self.overrides
            .iter()
            .filter_map(|entry| {
                let domain = Domain::parse(entry.trim());
                if domain.is_none() {
                    warn!(entry = %entry, "Skipping invalid override domain");
                }
                domain
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticFeed;
    use async_trait::async_trait;

    struct FailingFeed;

    #[async_trait]
    impl FeedSource for FailingFeed {
        fn name(&self) -> &str {
            "broken"
        }

        async fn fetch(&self) -> FeedResult<String> {
            Err(FeedError::Status {
                source_name: "broken".into(),
                status: 503,
            })
        }
    }

    fn names(set: &DomainSet) -> Vec<&str> {
        set.iter().map(Domain::as_str).collect()
    }

    #[tokio::test]
    async fn test_merges_overrides_first_and_dedups() {
        let aggregator = FeedAggregator::new()
            .overrides(["first.example.com", "not valid", "b.com"])
            .source(StaticFeed::new("one", "a.com\nb.com\na.com\n"))
            .source(StaticFeed::new("two", "# comment\n0.0.0.0 c.com\na.com\n"));

        let set = aggregator.fetch().await.unwrap();
        assert_eq!(names(&set), vec!["first.example.com", "b.com", "a.com", "c.com"]);
    }

    #[tokio::test]
    async fn test_single_failure_fails_everything() {
        let aggregator = FeedAggregator::new()
            .source(StaticFeed::new("ok", "a.com\n"))
            .source(FailingFeed);

        let err = aggregator.fetch().await.unwrap_err();
        assert!(matches!(err, FeedError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_requires_a_source() {
        let err = FeedAggregator::new().fetch().await.unwrap_err();
        assert!(matches!(err, FeedError::NoSources));
    }

    #[tokio::test]
    async fn test_overrides_alone_are_enough() {
        let set = FeedAggregator::new()
            .overrides(["only.example.com"])
            .fetch()
            .await
            .unwrap();
        assert_eq!(names(&set), vec!["only.example.com"]);
    }
}
