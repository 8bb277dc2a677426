//! Resolution of Spanish relative date phrases.
//!
//! Turns what people type into a due-date field ("mañana", "en 3 días",
//! "semana que viene para jueves", "el viernes", "15 de marzo de 2025")
//! into a calendar date. Every function here is pure: the reference date
//! ("today") is an explicit argument, and only [`resolve_relative_date`]
//! reads the system clock, once, before delegating.
//!
//! # Pipeline
//!
//! 1. [`normalize_expression`]: trim, lowercase, strip diacritics.
//! 2. An ordered table of matchers, each recognizing one construction.
//!    The first one that produces a date wins:
//!    - absolute dates (`2025-03-15`, `15/3/2025`, `15-3-2025`)
//!    - keywords (`hoy`, `mañana`, `pasado mañana`, `en N días`, `en N semanas`)
//!    - next-week forms (`próxima semana`, `semana que viene para jueves`)
//!    - `próximo <día>` / `<día> que viene`
//!    - a bare weekday (`jueves`, `el viernes`, `para lunes`)
//!    - written calendar dates (`15 de marzo de 2025`)
//! 3. If nothing matches, the phrase is unrecognized.
//!
//! Malformed input is never an error condition for [`resolve`]: it is simply
//! `None`. [`try_resolve`] runs the same pipeline and reports why nothing
//! matched.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::calendar::{
    add_days, add_weeks, days_from_week_start, next_weekday_after, next_weekday_on_or_after,
    start_of_next_week, WeekStartDay,
};
use crate::error::ResolveError;
use crate::normalize::normalize_expression;
use crate::vocab::{parse_month, parse_weekday, MONTH_ALTERNATION, WEEKDAY_ALTERNATION};

/// Output format of every resolved date.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

const NEXT_WEEK_PHRASE: &str = "(?:semana que viene|semana proxima|proxima semana)";

// ── Patterns ────────────────────────────────────────────────────────────────

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

static NUMERIC_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})([/-])(\d{1,2})([/-])(\d{4})$").expect("valid regex")
});

static HOY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bhoy\b").expect("valid regex"));

static MANANA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmanana\b").expect("valid regex"));

static PASADO_MANANA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bpasado[ -]?manana\b").expect("valid regex"));

static IN_DAYS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\ben (\d+) dias?\b").expect("valid regex"));

static IN_WEEKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\ben (\d+) semanas?\b").expect("valid regex"));

/// "(la) semana que viene (para|de)? (el)? <día>"
static NEXT_WEEK_SUFFIXED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:la )?{NEXT_WEEK_PHRASE}(?: (?:(?:para|de) )?(?:el )?({WEEKDAY_ALTERNATION})\b)?"
    ))
    .expect("valid regex")
});

/// "<día> (de) (la) semana que viene"
static NEXT_WEEK_PREFIXED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b({WEEKDAY_ALTERNATION}) (?:de )?(?:la )?{NEXT_WEEK_PHRASE}\b"
    ))
    .expect("valid regex")
});

/// "próximo <día>", "siguiente <día>", "<día> que viene", "<día> próximo"
static NEXT_WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:(?:proximo|siguiente) ({WEEKDAY_ALTERNATION})|({WEEKDAY_ALTERNATION}) (?:que viene|proximo|siguiente))\b"
    ))
    .expect("valid regex")
});

static BARE_WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b(?:(?:para|el) )?({WEEKDAY_ALTERNATION})\b")).expect("valid regex")
});

static DAY_DE_MONTH_DE_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(\d{{1,2}}) de ({MONTH_ALTERNATION}) de (\d{{4}})$"))
        .expect("valid regex")
});

static DAY_DE_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(\d{{1,2}}) de ({MONTH_ALTERNATION}) (\d{{4}})$"))
        .expect("valid regex")
});

// ── Public types ────────────────────────────────────────────────────────────

/// Which grammar recognized an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// `2025-03-15`
    IsoDate,
    /// `15/3/2025`, `15-3-2025`
    NumericDate,
    /// `hoy`
    Today,
    /// `mañana`
    Tomorrow,
    /// `pasado mañana`
    DayAfterTomorrow,
    /// `en 3 días`
    InDays,
    /// `en 2 semanas`
    InWeeks,
    /// `semana que viene para jueves`
    NextWeekWeekday,
    /// `próxima semana`
    NextWeek,
    /// `próximo lunes`
    NextWeekday,
    /// `jueves`, `el viernes`
    BareWeekday,
    /// `15 de marzo de 2025`
    CalendarFormat,
}

/// Options for [`resolve`] and [`try_resolve`].
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Which day starts the week for "semana que viene" computations.
    pub week_start: WeekStartDay,
}

/// A successfully resolved expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDate {
    /// The expression as given.
    pub input: String,
    /// The expression after normalization.
    pub normalized: String,
    /// The resolved date (serialized as `yyyy-MM-dd`).
    pub date: NaiveDate,
    /// The grammar that produced the date.
    pub rule: MatchRule,
}

impl ResolvedDate {
    /// The date as `yyyy-MM-dd`.
    pub fn iso(&self) -> String {
        self.date.format(ISO_FORMAT).to_string()
    }
}

// ── Entry points ────────────────────────────────────────────────────────────

/// The local calendar date, read once from the system clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolve a date phrase against today's date.
///
/// Returns the date as `yyyy-MM-dd`, or `None` if the phrase is not recognized.
///
/// # Examples
///
/// ```
/// use fecha_engine::resolve_relative_date;
///
/// assert_eq!(resolve_relative_date("2025-03-15").as_deref(), Some("2025-03-15"));
/// assert_eq!(resolve_relative_date("   "), None);
/// ```
pub fn resolve_relative_date(input: &str) -> Option<String> {
    resolve_relative_date_on(input, today())
}

/// Resolve a date phrase against an explicit reference date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fecha_engine::resolve_relative_date_on;
///
/// // Wednesday
/// let today = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
/// assert_eq!(
///     resolve_relative_date_on("semana que viene para jueves", today).as_deref(),
///     Some("2026-02-26")
/// );
/// ```
pub fn resolve_relative_date_on(input: &str, today: NaiveDate) -> Option<String> {
    resolve(input, today, &ResolveOptions::default()).map(|r| r.iso())
}

/// Resolve a date phrase with options, keeping the match details.
pub fn resolve(input: &str, today: NaiveDate, options: &ResolveOptions) -> Option<ResolvedDate> {
    try_resolve(input, today, options).ok()
}

/// Resolve a date phrase, reporting why it failed.
///
/// # Errors
///
/// Returns [`ResolveError::Empty`] if the input is blank after normalization,
/// or [`ResolveError::Unrecognized`] if no matcher recognizes it.
pub fn try_resolve(
    input: &str,
    today: NaiveDate,
    options: &ResolveOptions,
) -> Result<ResolvedDate, ResolveError> {
    let normalized = normalize_expression(input);
    if normalized.is_empty() {
        return Err(ResolveError::Empty);
    }
    tracing::trace!(expression = %normalized, %today, "resolving date expression");

    let (date, rule) = MATCHERS
        .iter()
        .find_map(|(rule, matcher)| {
            matcher(&normalized, today, options)
                .filter(is_iso_representable)
                .map(|date| (date, *rule))
        })
        .ok_or_else(|| ResolveError::Unrecognized(input.trim().to_string()))?;

    tracing::debug!(expression = %normalized, ?rule, %date, "resolved date expression");
    Ok(ResolvedDate {
        input: input.to_string(),
        normalized,
        date,
        rule,
    })
}

// ── Matcher table ───────────────────────────────────────────────────────────

type Matcher = fn(&str, NaiveDate, &ResolveOptions) -> Option<NaiveDate>;

/// Matchers in priority order. Absolute dates come first so numbers are never
/// reread as relative phrases; the next-week forms precede "próximo <día>",
/// which precedes the bare weekday, because each later pattern also matches
/// the text of the earlier ones.
const MATCHERS: &[(MatchRule, Matcher)] = &[
    (MatchRule::IsoDate, try_iso_date),
    (MatchRule::NumericDate, try_numeric_date),
    (MatchRule::Today, try_today),
    (MatchRule::DayAfterTomorrow, try_day_after_tomorrow),
    (MatchRule::Tomorrow, try_tomorrow),
    (MatchRule::InDays, try_in_days),
    (MatchRule::InWeeks, try_in_weeks),
    (MatchRule::NextWeekWeekday, try_next_week_weekday),
    (MatchRule::NextWeek, try_next_week),
    (MatchRule::NextWeekday, try_next_weekday),
    (MatchRule::BareWeekday, try_bare_weekday),
    (MatchRule::CalendarFormat, try_calendar_format),
];

/// Years outside 0000..=9999 cannot be written as `yyyy-MM-dd`.
fn is_iso_representable(date: &NaiveDate) -> bool {
    (0..=9999).contains(&date.year())
}

// ── Absolute dates ──────────────────────────────────────────────────────────

/// `yyyy-MM-dd`, echoed back unchanged. Strings of that shape that are not
/// real dates (`2023-02-29`, `2025-13-01`) are rejected, so no output is
/// ever an impossible date.
fn try_iso_date(s: &str, _today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    if !ISO_DATE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, ISO_FORMAT).ok()
}

/// `d/M/yyyy` or `d-M-yyyy`, day first. Mixed separators are not accepted.
fn try_numeric_date(s: &str, _today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    let caps = NUMERIC_DATE.captures(s)?;
    if caps[2] != caps[4] {
        return None;
    }
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[3].parse().ok()?;
    let year: i32 = caps[5].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day);
    if date.is_none() {
        tracing::debug!(day, month, year, "rejected invalid numeric date");
    }
    date
}

// ── Keywords ────────────────────────────────────────────────────────────────

// Keywords are searched anywhere in the text ("lo quiero mañana").

fn try_today(s: &str, today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    HOY.is_match(s).then_some(today)
}

/// Runs before [`try_tomorrow`]: "pasado mañana" also contains "mañana".
fn try_day_after_tomorrow(s: &str, today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    if !PASADO_MANANA.is_match(s) {
        return None;
    }
    add_days(today, 2)
}

fn try_tomorrow(s: &str, today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    if !MANANA.is_match(s) {
        return None;
    }
    add_days(today, 1)
}

fn try_in_days(s: &str, today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    let n = capture_count(IN_DAYS.captures(s)?)?;
    add_days(today, n)
}

fn try_in_weeks(s: &str, today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    let n = capture_count(IN_WEEKS.captures(s)?)?;
    add_weeks(today, n)
}

fn capture_count(caps: Captures<'_>) -> Option<u64> {
    caps[1].parse().ok()
}

// ── Next week and weekdays ──────────────────────────────────────────────────

/// A day inside the week after today's week, e.g. "semana que viene para
/// jueves" or "el jueves de la semana que viene". Lands in that week even if
/// the named day is still ahead in the current one.
fn try_next_week_weekday(s: &str, today: NaiveDate, options: &ResolveOptions) -> Option<NaiveDate> {
    let name = NEXT_WEEK_SUFFIXED
        .captures(s)
        .and_then(|caps| caps.get(1))
        .or_else(|| NEXT_WEEK_PREFIXED.captures(s).and_then(|caps| caps.get(1)))?;
    let weekday = parse_weekday(name.as_str())?;
    let week_start = start_of_next_week(today, options.week_start)?;
    add_days(week_start, days_from_week_start(weekday, options.week_start))
}

/// "próxima semana" alone: the first day of the following week.
fn try_next_week(s: &str, today: NaiveDate, options: &ResolveOptions) -> Option<NaiveDate> {
    if !NEXT_WEEK_SUFFIXED.is_match(s) {
        return None;
    }
    start_of_next_week(today, options.week_start)
}

/// "próximo lunes": strictly after today, so on a Monday it is a week away.
fn try_next_weekday(s: &str, today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    let caps = NEXT_WEEKDAY.captures(s)?;
    let name = caps.get(1).or_else(|| caps.get(2))?;
    next_weekday_after(today, parse_weekday(name.as_str())?)
}

/// "jueves", "el jueves": the nearest such day, today included.
fn try_bare_weekday(s: &str, today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    let caps = BARE_WEEKDAY.captures(s)?;
    next_weekday_on_or_after(today, parse_weekday(&caps[1])?)
}

// ── Calendar formats ────────────────────────────────────────────────────────

/// Written date formats tried, in order, when nothing relative matched.
#[derive(Debug, Clone, Copy)]
enum CalendarFormat {
    /// `15 de marzo de 2025`
    DayDeMonthDeYear,
    /// `15 de marzo 2025`
    DayDeMonthYear,
    /// `15/3/2025`
    DaySlashMonthYear,
    /// `15-3-2025`
    DayDashMonthYear,
}

const CALENDAR_FORMATS: [CalendarFormat; 4] = [
    CalendarFormat::DayDeMonthDeYear,
    CalendarFormat::DayDeMonthYear,
    CalendarFormat::DaySlashMonthYear,
    CalendarFormat::DayDashMonthYear,
];

impl CalendarFormat {
    fn parse(self, s: &str) -> Option<NaiveDate> {
        match self {
            CalendarFormat::DayDeMonthDeYear => parse_named_month(&DAY_DE_MONTH_DE_YEAR, s),
            CalendarFormat::DayDeMonthYear => parse_named_month(&DAY_DE_MONTH_YEAR, s),
            CalendarFormat::DaySlashMonthYear => NaiveDate::parse_from_str(s, "%d/%m/%Y").ok(),
            CalendarFormat::DayDashMonthYear => NaiveDate::parse_from_str(s, "%d-%m-%Y").ok(),
        }
    }
}

fn parse_named_month(pattern: &Regex, s: &str) -> Option<NaiveDate> {
    let caps = pattern.captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = parse_month(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn try_calendar_format(s: &str, _today: NaiveDate, _: &ResolveOptions) -> Option<NaiveDate> {
    CALENDAR_FORMATS.iter().find_map(|format| format.parse(s))
}

// ── Tests ───────────────────────────────────────────────────────────────────
