//! The full replace cycle: fetch feeds, tear down the old rule and lists,
//! create new lists, point a fresh rule at them.
//!
//! Teardown deletes the rule before the lists so the rule never references a
//! deleted list; creation makes the lists before the rule because the rule
//! needs their ids. The four provider stages run as one sequence on the
//! [`SequentialRunner`], so the first failure stops everything after it. There
//! is no rollback: a failure after teardown leaves the account without managed
//! lists until the next successful run.

use adblock_core::{DomainSet, Gateway, NewList, NewRule, Result, RuleAction};
use adblock_feeds::FeedAggregator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{info, warn};

use crate::chunk::chunk;
use crate::ownership::{managed_lists, managed_rules, LIST_MARKER, RULE_MARKER};
use crate::runner::{task, SequentialRunner, Task};
use crate::traffic::traffic_expression;

/// Most domains submitted per run
pub const DOMAIN_CAP: usize = 100_000;

/// Most items per Gateway list
pub const LIST_ITEM_LIMIT: usize = 1_000;

/// Managed lists are named `"{LIST_NAME_PREFIX} {n}"`, counting from one
pub const LIST_NAME_PREFIX: &str = "Ad servers";

/// Name of the managed rule
pub const RULE_NAME: &str = "Block ads";

/// Name of the `ordinal`-th managed list (1-based)
#[must_use]
pub fn list_name(ordinal: usize) -> String {
    format!("{LIST_NAME_PREFIX} {ordinal}")
}

/// What a reconcile run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Unique valid domains across all feeds
    pub domains_fetched: usize,

    /// Domains written to lists after applying [`DOMAIN_CAP`]
    pub domains_submitted: usize,

    /// Managed rules removed
    pub rules_deleted: usize,

    /// Managed lists removed
    pub lists_deleted: usize,

    /// Lists created
    pub lists_created: usize,

    /// Id of the new rule, if one was created
    pub rule_id: Option<String>,
}

impl std::fmt::Display for ReconcileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} domains ({} submitted), {} lists replaced by {}, rule {}",
            self.domains_fetched,
            self.domains_submitted,
            self.lists_deleted,
            self.lists_created,
            self.rule_id.as_deref().unwrap_or("not created"),
        )
    }
}

/// Counters shared by the stage tasks
#[derive(Default)]
struct Progress {
    rules_deleted: AtomicUsize,
    lists_deleted: AtomicUsize,
    lists_created: AtomicUsize,
    rule_id: Mutex<Option<String>>,
}

impl Progress {
    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn into_report(self, domains_fetched: usize, domains_submitted: usize) -> ReconcileReport {
        ReconcileReport {
            domains_fetched,
            domains_submitted,
            rules_deleted: self.rules_deleted.into_inner(),
            lists_deleted: self.lists_deleted.into_inner(),
            lists_created: self.lists_created.into_inner(),
            rule_id: self
                .rule_id
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
        }
    }
}

/// Drives one full sync of feeds into a Gateway account
pub struct Reconciler<G> {
    gateway: G,
    feeds: FeedAggregator,
    runner: SequentialRunner,
}

impl<G: Gateway> Reconciler<G> {
    /// Create a reconciler with the default one-second pause between calls
    pub fn new(gateway: G, feeds: FeedAggregator) -> Self {
        Self {
            gateway,
            feeds,
            runner: SequentialRunner::default(),
        }
    }

    /// Override the pause between provider calls
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.runner = SequentialRunner::new(delay);
        self
    }

    /// The gateway being reconciled
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Run the complete fetch, teardown and recreate cycle
    pub async fn reconcile(&self) -> Result<ReconcileReport> {
        let mut domains = self.feeds.fetch().await?;
        let domains_fetched = domains.len();

        domains.truncate(DOMAIN_CAP);
        if domains.len() < domains_fetched {
            info!(
                cap = DOMAIN_CAP,
                dropped = domains_fetched - domains.len(),
                "Domain cap reached"
            );
        }

        let progress = Progress::default();
        let stages: Vec<Task<'_>> = vec![
            task(|| self.delete_existing_rules(&progress)),
            task(|| self.delete_existing_lists(&progress)),
            task(|| self.create_lists(&domains, &progress)),
            task(|| self.create_rule(&progress)),
        ];
        self.runner.run(stages).await?;

        let report = progress.into_report(domains_fetched, domains.len());
        info!(%report, "Reconcile finished");

        Ok(report)
    }

    async fn delete_existing_rules(&self, progress: &Progress) -> Result<()> {
        info!("Fetching block ads rule");

        let rules = self.gateway.list_rules().await?;
        let managed = managed_rules(&rules);

        if managed.is_empty() {
            info!("No block ads rule to delete");
            return Ok(());
        }
        if managed.len() > 1 {
            warn!(count = managed.len(), "Found more than one block ads rule");
        }

        let tasks = managed
            .iter()
            .filter_map(|rule| rule.id.as_deref())
            .map(|id| {
                task(move || async move {
                    info!(rule_id = %id, "Deleting block ads rule");
                    self.gateway.delete_rule(id).await?;
                    Progress::bump(&progress.rules_deleted);
                    Ok(())
                })
            })
            .collect();

        self.runner.run(tasks).await
    }

    async fn delete_existing_lists(&self, progress: &Progress) -> Result<()> {
        let lists = self.gateway.list_lists().await?;
        let managed = managed_lists(&lists);
        let total = managed.len();

        info!("Fetched {total} ad server lists");

        let tasks = managed
            .iter()
            .filter_map(|list| list.id.as_deref())
            .enumerate()
            .map(|(index, id)| {
                task(move || async move {
                    info!("Deleting list {} of {total}", index + 1);
                    self.gateway.delete_list(id).await?;
                    Progress::bump(&progress.lists_deleted);
                    Ok(())
                })
            })
            .collect();

        self.runner.run(tasks).await
    }

    async fn create_lists(&self, domains: &DomainSet, progress: &Progress) -> Result<()> {
        let chunks = chunk(domains.as_slice(), LIST_ITEM_LIMIT)?;
        let total = chunks.len();

        let tasks = chunks
            .into_iter()
            .enumerate()
            .map(|(index, items)| {
                task(move || async move {
                    info!("Creating list {} of {total}", index + 1);
                    let request = NewList::domains(list_name(index + 1), LIST_MARKER, items);
                    self.gateway.create_list(&request).await?;
                    Progress::bump(&progress.lists_created);
                    Ok(())
                })
            })
            .collect();

        self.runner.run(tasks).await
    }

    async fn create_rule(&self, progress: &Progress) -> Result<()> {
        let lists = self.gateway.list_lists().await?;
        let managed = managed_lists(&lists);

        info!("Fetched {} ad server lists", managed.len());

        let Some(traffic) = traffic_expression(&managed) else {
            warn!("No ad server lists exist, not creating block ads rule");
            return Ok(());
        };

        info!("Creating block ads rule");

        let rule = self
            .gateway
            .create_rule(&NewRule {
                name: RULE_NAME.to_string(),
                description: RULE_MARKER.to_string(),
                action: RuleAction::Block,
                traffic,
                enabled: true,
            })
            .await?;

        *progress
            .rule_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = rule.id;

        Ok(())
    }
}
