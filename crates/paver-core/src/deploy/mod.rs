//! Deploy orchestration: role-bucketed registry and ordered dispatch.

pub mod entry;
pub mod manager;

pub use entry::DeployEntry;
pub use manager::{DeployManager, DeployReport, DispatchRecord, Registration};
