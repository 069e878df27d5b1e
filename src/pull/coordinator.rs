// ABOUTME: Concurrent pull coordination and per-image state tracking.
// ABOUTME: One worker per image writes its own slot; readers get snapshots.

use super::puller::{PullOutcome, pull_image};
use crate::types::ImageRef;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Lifecycle of one pull task. Terminal states are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullStatus {
    Running,
    Success,
    Failed,
}

impl PullStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, PullStatus::Running)
    }
}

/// Point-in-time view of one task, as exposed to the renderer.
#[derive(Debug, Clone)]
pub struct TaskView {
    pub image: ImageRef,
    pub status: PullStatus,
}

/// Full record of one task after the batch completes.
#[derive(Debug, Clone)]
pub struct PullRecord {
    pub image: ImageRef,
    pub status: PullStatus,
    pub outcome: Option<PullOutcome>,
}

struct TaskSlot {
    image: ImageRef,
    status: PullStatus,
    outcome: Option<PullOutcome>,
}

impl TaskSlot {
    fn new(image: ImageRef) -> Self {
        Self {
            image,
            status: PullStatus::Running,
            outcome: None,
        }
    }

    // Called exactly once, by this slot's worker.
    fn complete(&mut self, outcome: PullOutcome) {
        debug_assert_eq!(self.status, PullStatus::Running);
        self.status = if outcome.succeeded() {
            PullStatus::Success
        } else {
            PullStatus::Failed
        };
        self.outcome = Some(outcome);
    }
}

/// Fans out one pull worker per image and aggregates their completion state.
///
/// All workers are dispatched immediately; the table behind the mutex is the
/// only shared state, and each slot is written by exactly one worker.
pub struct PullCoordinator {
    table: Arc<Mutex<Vec<TaskSlot>>>,
    workers: Vec<JoinHandle<()>>,
}

impl PullCoordinator {
    /// Create one Running task per image (duplicates included, order kept)
    /// and start every pull concurrently.
    pub fn start(engine: PathBuf, images: Vec<ImageRef>) -> Self {
        let table = Arc::new(Mutex::new(
            images.iter().cloned().map(TaskSlot::new).collect::<Vec<_>>(),
        ));
        let engine = Arc::new(engine);

        let workers = images
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                let table = Arc::clone(&table);
                let engine = Arc::clone(&engine);
                tokio::spawn(async move {
                    let outcome = pull_image(&engine, &image).await;
                    table.lock()[index].complete(outcome);
                })
            })
            .collect();

        Self { table, workers }
    }

    /// Immutable snapshot of all tasks in submission order. Never blocks on
    /// pull completion.
    pub fn poll(&self) -> Vec<TaskView> {
        self.table
            .lock()
            .iter()
            .map(|slot| TaskView {
                image: slot.image.clone(),
                status: slot.status,
            })
            .collect()
    }

    /// True iff every task has reached a terminal state.
    pub fn all_done(&self) -> bool {
        self.table.lock().iter().all(|slot| slot.status.is_terminal())
    }

    /// Wait for every worker to finish. Afterwards [`Self::all_done`] is
    /// guaranteed true.
    pub async fn wait(&mut self) {
        for worker in self.workers.drain(..) {
            // A worker only ends after writing its slot; join errors would
            // mean the runtime aborted it, which only happens at shutdown.
            let _ = worker.await;
        }
    }

    /// Full per-task records, including captured exit information.
    pub fn results(&self) -> Vec<PullRecord> {
        self.table
            .lock()
            .iter()
            .map(|slot| PullRecord {
                image: slot.image.clone(),
                status: slot.status,
                outcome: slot.outcome.clone(),
            })
            .collect()
    }
}
