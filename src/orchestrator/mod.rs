//! Orchestration layer: multi-call generation flows built on the services.

pub mod batch_generator;

pub use batch_generator::{BulkMcqRequest, McqBatchGenerator};
