//! Cancellable "thinking" delay placed in front of engine computations.
//!
//! Every [`AnalysisGate::run`] takes a fresh generation ticket, waits out the
//! configured delay, and only then computes. A newer `run` or an explicit
//! [`AnalysisGate::cancel`] bumps the generation, and the waiting call resolves
//! to [`AnalysisError::Superseded`] instead of delivering a stale result.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis {ticket} was superseded by a newer request")]
    Superseded { ticket: u64 },
}

#[derive(Debug)]
pub struct AnalysisGate {
    generation: watch::Sender<u64>,
    delay: Duration,
}

impl AnalysisGate {
    pub fn new(delay: Duration) -> Self {
        let (generation, _) = watch::channel(0);
        Self { generation, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Invalidate whatever analysis is currently waiting.
    pub fn cancel(&self) {
        self.advance();
    }

    pub async fn run<T, F>(&self, compute: F) -> Result<T, AnalysisError>
    where
        F: FnOnce() -> T,
    {
        let mut updates = self.generation.subscribe();
        let ticket = self.advance();
        updates.borrow_and_update();

        let sleep = tokio::time::sleep(self.delay);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => break,
                changed = updates.changed() => {
                    if changed.is_err() || *updates.borrow_and_update() != ticket {
                        debug!(ticket, "analysis superseded");
                        return Err(AnalysisError::Superseded { ticket });
                    }
                }
            }
        }

        if *self.generation.borrow() != ticket {
            return Err(AnalysisError::Superseded { ticket });
        }
        Ok(compute())
    }

    fn advance(&self) -> u64 {
        let mut ticket = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            ticket = *generation;
        });
        ticket
    }
}

/// One [`AnalysisGate`] per session key; keyless calls never supersede anything.
///
/// A key's gate lives only while some call on that key is in flight.
#[derive(Debug)]
pub struct AnalysisScheduler {
    delay: Duration,
    gates: Mutex<HashMap<String, Arc<AnalysisGate>>>,
}

impl AnalysisScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            gates: Mutex::new(HashMap::new()),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn gate(&self, key: &str) -> Arc<AnalysisGate> {
        let mut gates = self
            .gates
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        gates
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(AnalysisGate::new(self.delay)))
            .clone()
    }

    pub fn cancel(&self, key: &str) {
        let gates = self
            .gates
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(gate) = gates.get(key) {
            gate.cancel();
        }
    }

    /// Number of session keys with a live gate.
    pub fn session_count(&self) -> usize {
        self.gates
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub async fn run<T, F>(&self, key: Option<&str>, compute: F) -> Result<T, AnalysisError>
    where
        F: FnOnce() -> T,
    {
        let Some(key) = key else {
            return AnalysisGate::new(self.delay).run(compute).await;
        };
        let lease = GateLease {
            scheduler: self,
            key,
            gate: self.gate(key),
        };
        let outcome = lease.gate.run(compute).await;
        drop(lease);
        outcome
    }

    fn release(&self, key: &str, gate: &Arc<AnalysisGate>) {
        let mut gates = self
            .gates
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Clones are only handed out under this lock, so the count is exact:
        // the map's copy plus the caller's.
        let idle = gates
            .get(key)
            .is_some_and(|entry| Arc::ptr_eq(entry, gate) && Arc::strong_count(gate) == 2);
        if idle {
            gates.remove(key);
            debug!(key, "released idle analysis gate");
        }
    }
}

/// Holds a keyed gate for one call and drops the map entry when the last
/// call on that key finishes or is abandoned.
struct GateLease<'a> {
    scheduler: &'a AnalysisScheduler,
    key: &'a str,
    gate: Arc<AnalysisGate>,
}

impl Drop for GateLease<'_> {
    fn drop(&mut self) {
        self.scheduler.release(self.key, &self.gate);
    }
}
