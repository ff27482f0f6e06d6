//! Name normalization and wikitext escaping helpers.

use std::borrow::Cow;

use crate::constants::text::{LIGATURE, LIGATURE_ASCII, LINE_BREAK, TAP_COLLISION, TAP_MACRO};

/// Transliterate the `Æ` ligature so names compare and render consistently.
///
/// Applied to both stored and requested names before any equality check,
/// and as the final transform before a name is written out. Borrows the
/// input when no ligature is present.
pub fn normalize_name(name: &str) -> Cow<'_, str> {
    if name.contains(LIGATURE) {
        Cow::Owned(name.replace(LIGATURE, LIGATURE_ASCII))
    } else {
        Cow::Borrowed(name)
    }
}

/// Escape free text for the wiki's template engine.
///
/// In order: name normalization, doubling of every literal brace, the
/// doubled tap symbol renamed to `{{Tap}}` (the wiki already has an
/// unrelated `T` template), and every raw line break prefixed with an
/// explicit `<br/>` marker. Must be applied exactly once; a second pass
/// doubles the braces again.
pub fn escape_wikitext(text: &str) -> String {
    normalize_name(text)
        .replace('{', "{{")
        .replace('}', "}}")
        .replace(TAP_COLLISION, TAP_MACRO)
        .replace('\n', LINE_BREAK)
}
