//! Text normalization applied before any pattern matching.
//!
//! Every matcher in [`crate::resolver`] works on the output of
//! [`normalize_expression`]: trimmed, lowercase, single-spaced, and free of
//! combining diacritical marks, so "Miércoles", "miércoles" and "miercoles" compare
//! equal. "ñ" decomposes to "n" + U+0303, which is why "mañana" becomes
//! "manana".

use unicode_normalization::UnicodeNormalization;

/// Normalize a date expression: lowercase, decompose (NFD), drop combining
/// marks, and collapse every run of whitespace to a single space.
///
/// Whitespace-only input yields an empty string.
///
/// # Examples
///
/// ```
/// use fecha_engine::normalize_expression;
///
/// assert_eq!(normalize_expression("  Próxima Semana "), "proxima semana");
/// assert_eq!(normalize_expression("MIÉRCOLES"), "miercoles");
/// assert_eq!(normalize_expression("en  3\tdías"), "en 3 dias");
/// assert_eq!(normalize_expression("   "), "");
/// ```
pub fn normalize_expression(s: &str) -> String {
    let stripped: String = s
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Combining diacritical mark blocks (Unicode category Mn for Latin text).
const fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1AB0}'..='\u{1AFF}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}
