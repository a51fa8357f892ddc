use serde::{Deserialize, Serialize};

use stagebill_billing::Performance;

/// A customer invoice: who to bill and which performances they booked.
///
/// Immutable input to the statement builder; listing order is meaningful and
/// preserved through to rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_deserializes_from_json() {
        let json = r#"{
            "customer": "BigCo",
            "performances": [
                { "playID": "hamlet", "audience": 55 },
                { "playID": "as-like", "audience": 35 }
            ]
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.customer, "BigCo");
        assert_eq!(
            invoice.performances,
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
            ]
        );
    }
}
