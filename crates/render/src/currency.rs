/// Format an amount in cents as a USD string, e.g. `$1,730.00`.
///
/// Two decimal digits always, thousands separated by commas. Integer
/// arithmetic only; the cents never leave `u64`.
pub fn format_usd(cents: u64) -> String {
    let dollars = cents / 100;
    let rem = cents % 100;
    format!("${}.{:02}", group_thousands(dollars), rem)
}

fn group_thousands(mut value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }

    let mut groups = Vec::new();
    while value >= 1_000 {
        groups.push(format!("{:03}", value % 1_000));
        value /= 1_000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts() {
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(5), "$0.05");
        assert_eq!(format_usd(65_000), "$650.00");
    }

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(format_usd(173_000), "$1,730.00");
        assert_eq!(format_usd(100_000_000), "$1,000,000.00");
        assert_eq!(format_usd(123_456_789), "$1,234,567.89");
    }
}
