//! Statement domain module.
//!
//! This crate composes catalog lookup and the billing calculators over a
//! whole invoice, producing a renderer-agnostic [`StatementData`] with
//! per-performance amounts, credits, and totals. Pure deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod builder;
pub mod invoice;

pub use builder::{EnrichedPerformance, StatementData, build_statement};
pub use invoice::Invoice;
