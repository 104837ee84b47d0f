//! One-at-a-time execution of remote mutations.

use adblock_core::Result;
use futures_util::future::BoxFuture;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Pause between consecutive tasks
pub const REQUEST_DELAY: Duration = Duration::from_secs(1);

/// A deferred operation; nothing happens until the runner calls it
pub type Task<'a> = Box<dyn FnOnce() -> BoxFuture<'a, Result<()>> + Send + 'a>;

/// Wrap an async closure as a [`Task`]
pub fn task<'a, F, Fut>(f: F) -> Task<'a>
where
    F: FnOnce() -> Fut + Send + 'a,
    Fut: Future<Output = Result<()>> + Send + 'a,
{
    Box::new(move || Box::pin(f()))
}

/// Runs tasks strictly in order with a fixed pause between them
///
/// The first failing task stops the run; the tasks after it are never started
/// and the error is returned. Nothing is retried.
#[derive(Debug, Clone, Copy)]
pub struct SequentialRunner {
    delay: Duration,
}

impl Default for SequentialRunner {
    fn default() -> Self {
        Self::new(REQUEST_DELAY)
    }
}

impl SequentialRunner {
    /// Create a runner with the given inter-task delay
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The inter-task delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Run every task in order
    pub async fn run(&self, tasks: Vec<Task<'_>>) -> Result<()> {
        let total = tasks.len();

        for (index, task) in tasks.into_iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            debug!(task = index + 1, total, "Running task");
            task().await?;
        }

        Ok(())
    }
}
