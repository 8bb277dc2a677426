//! Spanish weekday and month vocabulary.
//!
//! Lookups accept both normalized ("miercoles") and accented ("miércoles")
//! spellings; the resolver only ever passes normalized text.

use chrono::Weekday;

/// Regex alternation over the normalized weekday names, for embedding in
/// the resolver's patterns.
pub(crate) const WEEKDAY_ALTERNATION: &str =
    "lunes|martes|miercoles|jueves|viernes|sabado|domingo";

/// Regex alternation over the normalized month names.
pub(crate) const MONTH_ALTERNATION: &str =
    "enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|setiembre|octubre|noviembre|diciembre";

/// Parse a Spanish weekday name.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "lunes" => Some(Weekday::Mon),
        "martes" => Some(Weekday::Tue),
        "miercoles" | "miércoles" => Some(Weekday::Wed),
        "jueves" => Some(Weekday::Thu),
        "viernes" => Some(Weekday::Fri),
        "sabado" | "sábado" => Some(Weekday::Sat),
        "domingo" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Ordinal of a weekday with Sunday = 0 through Saturday = 6.
pub fn weekday_ordinal(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

/// Parse a Spanish month name to its number (1-12).
pub fn parse_month(s: &str) -> Option<u32> {
    match s {
        "enero" => Some(1),
        "febrero" => Some(2),
        "marzo" => Some(3),
        "abril" => Some(4),
        "mayo" => Some(5),
        "junio" => Some(6),
        "julio" => Some(7),
        "agosto" => Some(8),
        "septiembre" | "setiembre" => Some(9),
        "octubre" => Some(10),
        "noviembre" => Some(11),
        "diciembre" => Some(12),
        _ => None,
    }
}
