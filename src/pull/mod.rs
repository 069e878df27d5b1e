// ABOUTME: Concurrent image pulling: puller, coordinator, and live renderer.
// ABOUTME: The coordinator owns all mutable state; the renderer only polls it.

mod coordinator;
mod puller;
pub mod render;

pub use coordinator::{PullCoordinator, PullRecord, PullStatus, TaskView};
pub use puller::{LAUNCH_FAILURE_CODE, PullOutcome, pull_image};
