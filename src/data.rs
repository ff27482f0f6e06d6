use serde::Deserialize;

use crate::types::{CardName, CollectorNumber, MultiverseId};

/// One set of cards as listed in the dataset.
///
/// Only the fields the exporter consumes are deserialized; everything
/// else in the dataset entry is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CardSet {
    /// Human-readable set name, kept for log output.
    #[serde(default)]
    pub name: Option<String>,
    /// Cards in document order.
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Canonical card payload as deserialized from the set dataset.
///
/// Every field except `name` is optional; the writer omits absent
/// fields rather than emitting empty placeholders.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Card {
    /// Card name as printed.
    pub name: CardName,
    /// Face names for split and flip cards.
    #[serde(default)]
    pub names: Vec<CardName>,
    /// Mana cost in `{..}` symbol notation.
    #[serde(default, rename = "manaCost")]
    pub mana_cost: Option<String>,
    /// Converted mana cost.
    #[serde(default)]
    pub cmc: Option<i64>,
    /// Color words.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Full printed type line.
    #[serde(default, rename = "type")]
    pub type_line: Option<String>,
    /// Supertype words from the type line.
    #[serde(default)]
    pub supertypes: Vec<String>,
    /// Card type words from the type line.
    #[serde(default)]
    pub types: Vec<String>,
    /// Subtype words from the type line.
    #[serde(default)]
    pub subtypes: Vec<String>,
    /// Printed rarity.
    #[serde(default)]
    pub rarity: Option<String>,
    /// Rules text.
    #[serde(default)]
    pub text: Option<String>,
    /// Flavor text.
    #[serde(default)]
    pub flavor: Option<String>,
    /// Illustration credit.
    #[serde(default)]
    pub artist: Option<String>,
    /// Collector number within the set.
    #[serde(default)]
    pub number: Option<CollectorNumber>,
    /// Power; may contain symbols such as `*`.
    #[serde(default)]
    pub power: Option<String>,
    /// Toughness; may contain symbols such as `*`.
    #[serde(default)]
    pub toughness: Option<String>,
    /// Planeswalker loyalty.
    #[serde(default)]
    pub loyalty: Option<i64>,
    /// Gatherer identifier. Cards without one are never resolved.
    #[serde(default)]
    pub multiverseid: Option<MultiverseId>,
    /// Watermark printed in the text box.
    #[serde(default)]
    pub watermark: Option<String>,
    /// Dated ruling annotations, oldest first.
    #[serde(default)]
    pub rulings: Vec<Ruling>,
}

/// One dated ruling attached to a card.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Ruling {
    /// Ruling date as published, e.g. `2004-10-04`.
    #[serde(default)]
    pub date: String,
    /// Ruling text.
    #[serde(default)]
    pub text: String,
}
