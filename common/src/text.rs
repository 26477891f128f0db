//! Text helpers shared by the pricing rules and the console front end.

use tracing::trace;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Trims, lowercases and strips accents to get a comparable token.
///
/// Decomposes to NFD and drops the combining marks, so
/// "Miércoles", "MIERCOLES" and "miercoles" all become `miercoles`.
/// Any text is accepted.
pub fn normalize_text(text: &str) -> String {
    let normalized: String = text
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    trace!("normalized {text:?} into {normalized:?}");
    normalized
}
