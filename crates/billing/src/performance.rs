use serde::{Deserialize, Serialize};

use stagebill_catalog::PlayId;

/// One performance as listed on an invoice: which play, and how many seats
/// were sold. Immutable input; amounts and credits are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_deserializes_from_invoice_line_shape() {
        let perf: Performance =
            serde_json::from_str(r#"{ "playID": "hamlet", "audience": 55 }"#).unwrap();
        assert_eq!(perf, Performance::new("hamlet", 55));
    }
}
