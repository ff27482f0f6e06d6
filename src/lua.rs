//! Lua data module writer.
//!
//! The consuming wiki module requires the exact field order, escaping,
//! and delimiters produced here; a change in any of them is a breaking
//! change for every page rendered from the data.

use std::fmt::{self, Write};
use std::io;

use crate::constants::lua::{ENTRY_CLOSER, FOOTER, HEADER};
use crate::data::Ruling;
use crate::errors::ExportError;
use crate::resolve::ResolvedCard;
use crate::text::escape_wikitext;

/// Write the opening assignment of the data container.
pub fn write_header(out: &mut impl io::Write) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())
}

/// Write the closing brace and return statement.
pub fn write_footer(out: &mut impl io::Write) -> io::Result<()> {
    out.write_all(FOOTER.as_bytes())
}

/// Render one card as a self-contained Lua table entry.
///
/// Rendering into a buffer keeps a failing card from leaving a
/// truncated entry in the output stream.
pub fn render_card(resolved: &ResolvedCard) -> Result<String, ExportError> {
    let mut entry = String::new();
    write_card(&mut entry, resolved)?;
    Ok(entry)
}

/// Write one card entry to `out` in the fixed field order.
///
/// Optional fields that are absent are omitted entirely; empty lists
/// are omitted rather than written as `{}`. Fails with
/// [`ExportError::MissingIdentifier`] when the card has no collector
/// number, since `CardNumber` is the key downstream lookups join on.
pub fn write_card(out: &mut impl Write, resolved: &ResolvedCard) -> Result<(), ExportError> {
    let card = &resolved.card;
    let number = card
        .number
        .as_deref()
        .ok_or_else(|| ExportError::MissingIdentifier {
            name: card.name.clone(),
            set_code: resolved.set_code.clone(),
        })?;

    let card_number = format!("{}{number}", resolved.set_code);
    let mut entry = Entry { out };
    entry.out.write_char('{')?;
    entry.text_field("Name", Some(card.name.as_str()))?;
    entry.list_field("Names", &card.names)?;
    entry.text_field("SetCode", Some(resolved.set_code.as_str()))?;
    entry.text_field("Manacost", card.mana_cost.as_deref())?;
    entry.int_field("cmc", card.cmc)?;
    entry.list_field("Colors", &card.colors)?;
    entry.text_field("Type", card.type_line.as_deref())?;
    entry.list_field("SuperTypes", &card.supertypes)?;
    entry.list_field("Types", &card.types)?;
    entry.list_field("SubTypes", &card.subtypes)?;
    entry.text_field("Rarity", card.rarity.as_deref())?;
    entry.long_text_field("Text", card.text.as_deref())?;
    entry.long_text_field("Flavor", card.flavor.as_deref())?;
    entry.text_field("Artist", card.artist.as_deref())?;
    entry.text_field("CardNumber", Some(card_number.as_str()))?;
    entry.text_field("Power", card.power.as_deref())?;
    entry.text_field("Toughness", card.toughness.as_deref())?;
    entry.int_field("Loyalty", card.loyalty)?;
    entry.int_field("MultiverseID", card.multiverseid)?;
    entry.text_field("Watermark", card.watermark.as_deref())?;
    entry.rulings_field(&card.rulings)?;
    entry.out.write_str(ENTRY_CLOSER)?;
    Ok(())
}

/// Field emission helpers for one card entry.
struct Entry<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> Entry<'_, W> {
    /// Single-line quoted string field, escaped; omitted when absent.
    fn text_field(&mut self, key: &str, value: Option<&str>) -> fmt::Result {
        match value {
            Some(value) => writeln!(self.out, "{key}=\"{}\";", escape_wikitext(value)),
            None => Ok(()),
        }
    }

    /// Long-bracket string field for text that may contain quotes or
    /// line breaks; omitted when absent.
    fn long_text_field(&mut self, key: &str, value: Option<&str>) -> fmt::Result {
        match value {
            Some(value) => writeln!(self.out, "{key}=[=[{}]=];", escape_wikitext(value)),
            None => Ok(()),
        }
    }

    /// Unquoted numeric field; omitted when absent.
    fn int_field<T: fmt::Display>(&mut self, key: &str, value: Option<T>) -> fmt::Result {
        match value {
            Some(value) => writeln!(self.out, "{key}={value};"),
            None => Ok(()),
        }
    }

    /// Comma-joined quoted sequence; omitted when empty, last element
    /// unterminated by the separator.
    fn list_field(&mut self, key: &str, values: &[String]) -> fmt::Result {
        if values.is_empty() {
            return Ok(());
        }
        write!(self.out, "{key}={{")?;
        for (idx, value) in values.iter().enumerate() {
            if idx > 0 {
                self.out.write_char(',')?;
            }
            write!(self.out, "\"{}\"", escape_wikitext(value))?;
        }
        self.out.write_str("};\n")
    }

    /// Nested ordered list of `{Date, Text}` pairs; omitted when empty.
    fn rulings_field(&mut self, rulings: &[Ruling]) -> fmt::Result {
        if rulings.is_empty() {
            return Ok(());
        }
        self.out.write_str("Rulings={\n")?;
        for ruling in rulings {
            writeln!(
                self.out,
                "\t{{Date=\"{}\";Text=[=[{}]=];}};",
                escape_wikitext(&ruling.date),
                escape_wikitext(&ruling.text)
            )?;
        }
        self.out.write_str("};\n")
    }
}
