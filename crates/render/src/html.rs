use std::fmt::Write;

use stagebill_statement::StatementData;

use crate::currency::format_usd;

/// Render a statement as an HTML fragment.
///
/// Customer and play names come from caller data and are escaped; amounts
/// and counts are generated here and need no escaping.
pub fn render_html(data: &StatementData) -> String {
    let mut result = format!("<h1>Statement for {}</h1>\n", escape(&data.customer));
    result.push_str("<table>\n");
    result.push_str("<tr><th>play</th><th>seats</th><th>cost</th></tr>\n");

    for perf in &data.performances {
        let _ = writeln!(
            result,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&perf.play.name),
            perf.performance.audience,
            format_usd(perf.amount)
        );
    }

    result.push_str("</table>\n");
    let _ = writeln!(
        result,
        "<p>Amount owed is <em>{}</em></p>",
        format_usd(data.total_amount)
    );
    let _ = writeln!(
        result,
        "<p>You earned <em>{}</em> credits</p>",
        data.total_volume_credits
    );

    result
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagebill_billing::Performance;
    use stagebill_catalog::{Catalog, Genre, Play, PlayId};
    use stagebill_statement::{Invoice, build_statement};

    #[test]
    fn renders_the_canonical_statement_as_html() {
        let catalog = Catalog::from_iter([
            (PlayId::from("hamlet"), Play::new("Hamlet", Genre::Tragedy)),
            (
                PlayId::from("as-like"),
                Play::new("As You Like It", Genre::Comedy),
            ),
            (
                PlayId::from("othello"),
                Play::new("Othello", Genre::Tragedy),
            ),
        ]);
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        );
        let data = build_statement(&invoice, &catalog).unwrap();

        let expected = "\
<h1>Statement for BigCo</h1>
<table>
<tr><th>play</th><th>seats</th><th>cost</th></tr>
<tr><td>Hamlet</td><td>55</td><td>$650.00</td></tr>
<tr><td>As You Like It</td><td>35</td><td>$580.00</td></tr>
<tr><td>Othello</td><td>40</td><td>$500.00</td></tr>
</table>
<p>Amount owed is <em>$1,730.00</em></p>
<p>You earned <em>47</em> credits</p>
";
        assert_eq!(render_html(&data), expected);
    }

    #[test]
    fn escapes_markup_in_names() {
        let catalog = Catalog::from_iter([(
            PlayId::from("r-and-j"),
            Play::new("Romeo & Juliet", Genre::Tragedy),
        )]);
        let invoice = Invoice::new("<script>Co", vec![Performance::new("r-and-j", 10)]);
        let data = build_statement(&invoice, &catalog).unwrap();

        let html = render_html(&data);
        assert!(html.contains("<h1>Statement for &lt;script&gt;Co</h1>"));
        assert!(html.contains("<td>Romeo &amp; Juliet</td>"));
    }
}
