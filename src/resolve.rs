//! Card resolution against the set catalog.

use tracing::debug;

use crate::catalog::Catalog;
use crate::constants::pipeline::OVERRIDE_DELIMITER;
use crate::data::Card;
use crate::text::normalize_name;
use crate::types::{CardName, SetCode};

/// One line of an input card list: a name plus an optional set override.
///
/// Constructed per line and consumed immediately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRequest {
    /// Requested card name, compared after normalization.
    pub name: CardName,
    /// Set code recorded in place of the set the card was found in.
    pub set_override: Option<SetCode>,
}

impl CardRequest {
    /// Build a request for a bare name.
    pub fn new(name: impl Into<CardName>) -> Self {
        Self {
            name: name.into(),
            set_override: None,
        }
    }

    /// Attribute the resolved card to `code` instead of the set it was
    /// found in. The override never changes which sets are searched.
    pub fn with_set_override(mut self, code: impl Into<SetCode>) -> Self {
        self.set_override = Some(code.into());
        self
    }

    /// Parse one input list line (`name` or `name$SETCODE`).
    pub fn parse(line: &str) -> Self {
        match line.split_once(OVERRIDE_DELIMITER) {
            Some((name, code)) => Self {
                name: name.to_string(),
                set_override: (!code.is_empty()).then(|| code.to_string()),
            },
            None => Self::new(line),
        }
    }
}

/// A card matched to a request, attributed to a set code.
///
/// Holds an owned copy of the matched card with its name already
/// normalized; catalog data is never mutated during resolution.
#[derive(Clone, Debug)]
pub struct ResolvedCard {
    /// Matched card data.
    pub card: Card,
    /// Set code the card is attributed to, override applied.
    pub set_code: SetCode,
}

/// Matches requests against a catalog, newest printing first.
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    /// Create a resolver borrowing `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Find the single best printing for `request`, or `None`.
    ///
    /// Sets are scanned newest-first, cards within a set in document
    /// order, and the first matching card wins. A card matches when its
    /// normalized name equals the normalized requested name and it
    /// carries a `multiverseid`; printings without one are incomplete
    /// and skipped even on an exact name match, so a request can fall
    /// through to an older printing.
    pub fn resolve(&self, request: &CardRequest) -> Option<ResolvedCard> {
        let wanted = normalize_name(&request.name);
        for (code, set) in self.catalog.sets().rev() {
            let found = set.cards.iter().find(|card| {
                card.multiverseid.is_some() && normalize_name(&card.name) == wanted
            });
            if let Some(card) = found {
                let mut card = card.clone();
                card.name = normalize_name(&card.name).into_owned();
                let set_code = request
                    .set_override
                    .clone()
                    .unwrap_or_else(|| code.to_string());
                debug!(
                    "[cardex:resolve] '{}' matched in {code}, recorded as {set_code}",
                    card.name
                );
                return Some(ResolvedCard { card, set_code });
            }
        }
        None
    }
}
