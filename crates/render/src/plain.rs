use std::fmt::Write;

use stagebill_statement::StatementData;

use crate::currency::format_usd;

/// Render a statement as plain text for console output.
pub fn render_plain_text(data: &StatementData) -> String {
    let mut result = format!("Statement for {}\n", data.customer);

    for perf in &data.performances {
        let _ = writeln!(
            result,
            "  {}: {} ({} seats)",
            perf.play.name,
            format_usd(perf.amount),
            perf.performance.audience
        );
    }

    let _ = writeln!(result, "Amount owed is {}", format_usd(data.total_amount));
    let _ = writeln!(result, "You earned {} credits", data.total_volume_credits);

    result
}
