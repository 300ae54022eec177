use crate::core::{LookupRecord, LookupRequest, Outcome, ProviderAdapter, ProviderFailure};
use crate::utils::error::{LookupError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{Id, JoinSet};
use tokio::time::{timeout_at, Instant};

pub struct RaceCoordinator {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
    deadline: Duration,
}

impl RaceCoordinator {
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>, deadline: Duration) -> Self {
        Self { adapters, deadline }
    }

    /// Queries every adapter concurrently and returns the first success.
    ///
    /// Returns `Timeout` when the deadline, measured once from the start of
    /// the race, passes without a success, and `Exhausted` as soon as every
    /// adapter has failed. Adapters still running when this returns are
    /// aborted in the background; their results are never observed.
    pub async fn race(&self, request: &LookupRequest) -> Outcome {
        let deadline = Instant::now() + self.deadline;

        if self.adapters.is_empty() {
            tracing::warn!("No providers configured, nothing to race");
            return Outcome::Exhausted(Vec::new());
        }

        tracing::debug!(
            "Racing {} providers for CEP {} (deadline {:?})",
            self.adapters.len(),
            request.code,
            self.deadline
        );

        let mut tasks: JoinSet<Result<LookupRecord>> = JoinSet::new();
        let mut labels: HashMap<Id, String> = HashMap::with_capacity(self.adapters.len());

        for adapter in &self.adapters {
            let adapter = Arc::clone(adapter);
            let code = request.code.clone();
            let label = adapter.name().to_string();
            let handle = tasks.spawn(async move { adapter.lookup(&code).await });
            labels.insert(handle.id(), label);
        }

        let mut failures = Vec::new();

        loop {
            let next = match timeout_at(deadline, tasks.join_next_with_id()).await {
                Ok(next) => next,
                Err(_) => {
                    tracing::warn!(
                        "No provider answered within {:?} ({} failed, {} pending)",
                        self.deadline,
                        failures.len(),
                        tasks.len()
                    );
                    return Outcome::Timeout;
                }
            };

            let (provider, cause) = match next {
                None => {
                    tracing::warn!("All {} providers failed", failures.len());
                    return Outcome::Exhausted(failures);
                }
                Some(Ok((_, Ok(record)))) => {
                    tracing::info!(
                        "{} answered first ({} other providers failed)",
                        record.provider(),
                        failures.len()
                    );
                    return Outcome::Success(record);
                }
                Some(Ok((id, Err(cause)))) => (label_for(&labels, id), cause),
                Some(Err(join_error)) => {
                    let provider = label_for(&labels, join_error.id());
                    let cause = LookupError::TaskFailed {
                        provider: provider.clone(),
                        message: join_error.to_string(),
                    };
                    (provider, cause)
                }
            };

            tracing::warn!("error fetching data from {}: {}", provider, cause);
            failures.push(ProviderFailure { provider, cause });
        }
    }
}

fn label_for(labels: &HashMap<Id, String>, id: Id) -> String {
    labels
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("task-{}", id))
}
