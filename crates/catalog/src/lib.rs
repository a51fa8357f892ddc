//! Play catalog domain module.
//!
//! This crate contains the play records a theater can bill for and the
//! catalog they are looked up from, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod play;

pub use catalog::Catalog;
pub use play::{Genre, Play, PlayId};
