// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Callers describe where rendered pages go as an `OutputPlan`; `deliver`
//! is the only place that touches stdout or the filesystem.

mod types;
mod writer;

pub use types::{CompletedOperation, DeliveryTarget, FailedOperation, OutputPlan, OutputReport};
pub use writer::deliver;
