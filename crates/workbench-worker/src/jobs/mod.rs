// Scheduled batch jobs
//
// Both jobs walk the active employee population sequentially and isolate
// per-employee failures: one bad record set must not block the run for
// everyone else.

pub mod auto_leave_run;
pub mod corrector_run;

pub use auto_leave_run::AutoLeaveRun;
pub use corrector_run::CorrectorRun;

/// Totals of one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Employees processed
    pub processed: usize,
    /// Employees whose correction/sweep failed (logged and skipped)
    pub failed: usize,
    /// Events written across all employees
    pub synthesized: usize,
}
