//! Snapshot contract and reading accessors for the engine panel.

pub mod format;
pub mod snapshot;
