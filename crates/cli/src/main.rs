//! Demo binary: bill the canonical BigCo invoice and print the statement.

use anyhow::Context;

use stagebill_catalog::Catalog;
use stagebill_statement::{Invoice, build_statement};

const PLAYS_JSON: &str = r#"{
    "hamlet": { "name": "Hamlet", "genre": "tragedy" },
    "as-like": { "name": "As You Like It", "genre": "comedy" },
    "othello": { "name": "Othello", "genre": "tragedy" }
}"#;

const INVOICE_JSON: &str = r#"{
    "customer": "BigCo",
    "performances": [
        { "playID": "hamlet", "audience": 55 },
        { "playID": "as-like", "audience": 35 },
        { "playID": "othello", "audience": 40 }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    stagebill_observability::init();

    let catalog: Catalog = serde_json::from_str(PLAYS_JSON).context("parsing play catalog")?;
    let invoice: Invoice = serde_json::from_str(INVOICE_JSON).context("parsing invoice")?;

    let data = build_statement(&invoice, &catalog).context("building statement")?;
    tracing::info!(
        customer = %data.customer,
        total_amount = data.total_amount,
        total_volume_credits = data.total_volume_credits,
        "statement built"
    );

    print!("{}", stagebill_render::render_plain_text(&data));

    Ok(())
}
