//! Bounded-concurrency worker pool for batch operations.
//!
//! Grounded on `BatchProcessor`'s `ThreadPoolExecutor(max_workers=...)`
//! pattern, expressed with a `tokio::sync::Semaphore` rather than a thread
//! pool and `uuid`-tracked worker table, since every task here is already
//! an async future rather than a blocking closure.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// The per-item result of a batch operation.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The item was processed and its output written.
    Success {
        /// The input path this outcome is for.
        path: PathBuf,
    },
    /// The item was processed but produced no change (e.g. already aligned).
    Unchanged {
        /// The input path this outcome is for.
        path: PathBuf,
    },
    /// The item was processed but the operation failed.
    Failed {
        /// The input path this outcome is for.
        path: PathBuf,
        /// A human-readable description of the failure.
        message: String,
    },
    /// The item was not attempted (e.g. no matching pair, user declined).
    Skipped {
        /// The input path this outcome is for.
        path: PathBuf,
        /// Why the item was skipped.
        reason: String,
    },
}

impl Outcome {
    /// The path this outcome refers to, for sorting into a stable summary order.
    pub fn path(&self) -> &PathBuf {
        match self {
            Outcome::Success { path }
            | Outcome::Unchanged { path }
            | Outcome::Failed { path, .. }
            | Outcome::Skipped { path, .. } => path,
        }
    }
}

/// Aggregated counts and per-item outcomes for one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Every outcome, ordered by input path.
    pub outcomes: Vec<Outcome>,
}

impl BatchSummary {
    fn from_outcomes(mut outcomes: Vec<Outcome>) -> Self {
        outcomes.sort_by(|a, b| a.path().cmp(b.path()));
        Self { outcomes }
    }

    /// Count of [`Outcome::Success`] entries.
    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Success { .. })).count()
    }

    /// Count of [`Outcome::Unchanged`] entries.
    pub fn unchanged(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Unchanged { .. })).count()
    }

    /// Count of [`Outcome::Failed`] entries.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Failed { .. })).count()
    }

    /// Count of [`Outcome::Skipped`] entries.
    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Skipped { .. })).count()
    }

    /// A short human-readable summary line, in the style of the teacher's
    /// processing-summary report.
    pub fn report(&self) -> String {
        let mut lines = vec![
            "Batch Processing Summary:".to_string(),
            format!("  Total files: {}", self.outcomes.len()),
            format!("  Successful: {}", self.successful()),
        ];
        if self.unchanged() > 0 {
            lines.push(format!("  Unchanged: {}", self.unchanged()));
        }
        if self.skipped() > 0 {
            lines.push(format!("  Skipped: {}", self.skipped()));
        }
        if self.failed() > 0 {
            lines.push(format!("  Failed: {}", self.failed()));
        }
        lines.join("\n")
    }
}

/// The default worker-pool concurrency when the caller has not overridden it.
pub fn default_concurrency() -> usize {
    4
}

/// Concurrency to fall back to when the configured value is unavailable or
/// zero: the number of logical CPUs.
pub fn fallback_concurrency() -> usize {
    num_cpus::get().max(1)
}

/// Run `task` over every item in `items` with at most `concurrency`
/// in-flight at once, returning a summary ordered by input path.
///
/// `concurrency == 0` falls back to [`fallback_concurrency`], matching the
/// semantics of a misconfigured worker count rather than deadlocking on a
/// zero-permit semaphore.
pub async fn run_bounded<T, F, Fut>(items: Vec<T>, concurrency: usize, task: F) -> BatchSummary
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome> + Send + 'static,
{
    let concurrency = if concurrency == 0 { fallback_concurrency() } else { concurrency };
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let task = Arc::new(task);

    let mut handles = Vec::with_capacity(items.len());
    for item in items {
        let permit = Arc::clone(&semaphore);
        let task = Arc::clone(&task);
        handles.push(tokio::spawn(async move {
            let _permit = permit.acquire_owned().await.expect("semaphore never closed");
            task(item).await
        }));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(outcome) => outcomes.push(outcome),
            Err(join_err) => log::error!("batch worker task panicked: {join_err}"),
        }
    }
    BatchSummary::from_outcomes(outcomes)
}
