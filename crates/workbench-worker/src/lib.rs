// Workbench attendance worker
//
// Scheduled batch execution of the retroactive log corrector (nightly, for
// yesterday) and the auto-leave safeguard (every couple of hours). Runs are
// not mutually exclusive; every write underneath is idempotent, so a crashed
// or overlapping run is safe to repeat.

pub mod config;
pub mod jobs;

pub use config::WorkerConfig;
pub use jobs::{AutoLeaveRun, CorrectorRun, RunSummary};
