// Public contracts for the Workbench attendance API
// This crate defines the DTOs exchanged over the v1 HTTP surface.

pub mod attendance;
pub mod common;

pub use attendance::*;
pub use common::*;

// Domain types referenced by the DTOs
pub use workbench_core::Status;
