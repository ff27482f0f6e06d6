//! Ordered set catalog loaded from the card dataset.

use std::collections::HashSet;
use std::io;

use indexmap::IndexMap;
use tracing::debug;

use crate::data::CardSet;
use crate::errors::ExportError;
use crate::types::SetCode;

/// Ordered collection of card sets keyed by set code.
///
/// Dataset order is preserved: a later position means a more recent set,
/// which the resolver relies on to find the newest printing first. Set
/// codes are unique because the dataset keys them at the top level.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    sets: IndexMap<SetCode, CardSet>,
}

impl Catalog {
    /// Parse the set dataset from a JSON reader.
    ///
    /// An unreadable or malformed document fails the whole load; there
    /// is no partial catalog.
    pub fn load(reader: impl io::Read) -> Result<Self, ExportError> {
        let sets: IndexMap<SetCode, CardSet> = serde_json::from_reader(reader)?;
        Ok(Self { sets })
    }

    /// Parse the set dataset from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, ExportError> {
        let sets: IndexMap<SetCode, CardSet> = serde_json::from_str(raw)?;
        Ok(Self { sets })
    }

    /// Remove every set whose code matches an excluded code.
    ///
    /// Removal keeps the relative order of the remaining sets.
    pub fn remove_sets(&mut self, excluded: &HashSet<SetCode>) {
        for code in excluded {
            if self.sets.shift_remove(code).is_some() {
                debug!("[cardex:catalog] excluded set {code}");
            }
        }
    }

    /// Sets in dataset order, oldest first.
    pub fn sets(&self) -> impl DoubleEndedIterator<Item = (&str, &CardSet)> {
        self.sets.iter().map(|(code, set)| (code.as_str(), set))
    }

    /// Look up one set by code.
    pub fn get(&self, code: &str) -> Option<&CardSet> {
        self.sets.get(code)
    }

    /// Number of sets currently held.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True when no sets are loaded.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        let raw = json!({
            "LEA": { "name": "Limited Edition Alpha", "cards": [] },
            "2ED": { "name": "Unlimited Edition", "cards": [] },
            "EXP": { "name": "Zendikar Expeditions", "cards": [] },
            "MIR": { "name": "Mirage", "cards": [] },
        });
        Catalog::from_json(&raw.to_string()).unwrap()
    }

    #[test]
    fn load_preserves_dataset_order() {
        let catalog = catalog();
        let codes: Vec<&str> = catalog.sets().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["LEA", "2ED", "EXP", "MIR"]);
    }

    #[test]
    fn remove_sets_drops_matches_and_keeps_order() {
        let mut catalog = catalog();
        let excluded: HashSet<SetCode> = ["EXP".to_string()].into();
        catalog.remove_sets(&excluded);

        let codes: Vec<&str> = catalog.sets().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["LEA", "2ED", "MIR"]);
        assert!(catalog.get("EXP").is_none());
    }

    #[test]
    fn remove_sets_ignores_unknown_codes() {
        let mut catalog = catalog();
        let excluded: HashSet<SetCode> = ["ZZZ".to_string()].into();
        catalog.remove_sets(&excluded);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn malformed_dataset_fails_load() {
        assert!(Catalog::from_json("{not json").is_err());
        assert!(Catalog::from_json("[1, 2, 3]").is_err());
    }
}
