use serde::Serialize;

use stagebill_billing::{Performance, calculator_for};
use stagebill_catalog::{Catalog, Play};
use stagebill_core::BillingResult;

use crate::invoice::Invoice;

/// A performance with its derived billing facts attached.
///
/// Built once per performance and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPerformance {
    #[serde(flatten)]
    pub performance: Performance,
    pub play: Play,
    /// Billed amount in integer minor currency units (cents).
    pub amount: u64,
    pub volume_credits: u64,
}

/// Everything a renderer needs to print a statement, and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementData {
    pub customer: String,
    pub performances: Vec<EnrichedPerformance>,
    pub total_amount: u64,
    pub total_volume_credits: u64,
}

/// Build the statement data for one invoice against one catalog.
///
/// Performances are processed in invoice order and appear in that order in
/// the output. Fail-fast: the first unknown play or unknown genre aborts the
/// whole build and no partial statement is returned.
pub fn build_statement(invoice: &Invoice, catalog: &Catalog) -> BillingResult<StatementData> {
    let performances = invoice
        .performances
        .iter()
        .map(|performance| enrich_performance(performance, catalog))
        .collect::<BillingResult<Vec<_>>>()?;

    let total_amount = performances.iter().map(|p| p.amount).sum();
    let total_volume_credits = performances.iter().map(|p| p.volume_credits).sum();

    Ok(StatementData {
        customer: invoice.customer.clone(),
        performances,
        total_amount,
        total_volume_credits,
    })
}

fn enrich_performance(
    performance: &Performance,
    catalog: &Catalog,
) -> BillingResult<EnrichedPerformance> {
    let play = catalog.resolve(&performance.play_id)?;
    let calculator = calculator_for(performance, play)?;

    Ok(EnrichedPerformance {
        performance: performance.clone(),
        play: play.clone(),
        amount: calculator.amount(),
        volume_credits: calculator.volume_credits(),
    })
}
