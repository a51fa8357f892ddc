use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stagebill_core::{BillingError, BillingResult};

use crate::play::{Play, PlayId};

/// Read-only mapping from play id to play record.
///
/// Built once by the caller and handed to the statement builder; nothing in
/// the domain layer mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: HashMap<PlayId, Play>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: PlayId, play: Play) {
        self.plays.insert(id, play);
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Resolve a play id to its catalog record.
    ///
    /// Fails with [`BillingError::UnknownPlay`] when the id is absent; the
    /// error names the offending id.
    pub fn resolve(&self, id: &PlayId) -> BillingResult<&Play> {
        self.plays
            .get(id)
            .ok_or_else(|| BillingError::unknown_play(id.as_str()))
    }
}

impl FromIterator<(PlayId, Play)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::Genre;

    fn sample_catalog() -> Catalog {
        Catalog::from_iter([
            (PlayId::from("hamlet"), Play::new("Hamlet", Genre::Tragedy)),
            (
                PlayId::from("as-like"),
                Play::new("As You Like It", Genre::Comedy),
            ),
        ])
    }

    #[test]
    fn resolve_returns_the_recorded_play() {
        let catalog = sample_catalog();
        let play = catalog.resolve(&PlayId::from("hamlet")).unwrap();
        assert_eq!(play, &Play::new("Hamlet", Genre::Tragedy));
    }

    #[test]
    fn resolve_fails_for_absent_play_id() {
        let catalog = sample_catalog();
        let err = catalog.resolve(&PlayId::from("henry-v")).unwrap_err();
        assert_eq!(err, BillingError::unknown_play("henry-v"));
    }

    #[test]
    fn catalog_deserializes_from_json_map() {
        let json = r#"{
            "hamlet": { "name": "Hamlet", "genre": "tragedy" },
            "as-like": { "name": "As You Like It", "genre": "comedy" }
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.resolve(&PlayId::from("as-like")).unwrap().genre,
            Genre::Comedy
        );
    }
}
