use stagebill_catalog::{Genre, Play};
use stagebill_core::{BillingError, BillingResult};

use crate::calculator::{ComedyCalculator, PerformanceCalculator, TragedyCalculator};
use crate::performance::Performance;

/// Select the calculator variant for a performance from its play's genre.
///
/// This is the single extension point for new genres: add a variant in
/// `calculator`, then add its arm here. Genres without an arm fail with
/// [`BillingError::UnknownGenre`] naming the genre.
pub fn calculator_for(
    performance: &Performance,
    play: &Play,
) -> BillingResult<Box<dyn PerformanceCalculator>> {
    match play.genre {
        Genre::Tragedy => Ok(Box::new(TragedyCalculator::new(performance.clone()))),
        Genre::Comedy => Ok(Box::new(ComedyCalculator::new(performance.clone()))),
        other => Err(BillingError::unknown_genre(other.as_str())),
    }
}
