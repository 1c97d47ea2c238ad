// Services layer for business logic
// Services own wiring and validation, calling the core resolver directly

pub mod attendance;

pub use attendance::AttendanceService;
