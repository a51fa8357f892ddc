//! Performance billing domain module.
//!
//! This crate contains the pricing and volume-credit rules for theatrical
//! performances, implemented purely as deterministic domain logic (no IO,
//! no HTTP, no storage). Behavior varies by genre through one calculator
//! variant per genre, selected by [`calculator_for`].

pub mod calculator;
pub mod factory;
pub mod performance;

pub use calculator::{
    ComedyCalculator, PerformanceCalculator, TragedyCalculator, base_volume_credits,
};
pub use factory::calculator_for;
pub use performance::Performance;
