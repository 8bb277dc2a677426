//! Calendar arithmetic over [`NaiveDate`].
//!
//! All helpers are checked: they return `None` instead of panicking when a
//! result would leave chrono's representable range, so the resolver can
//! treat overflow as "no match".

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

/// Which day begins a week for "semana que viene" computations.
///
/// Does **not** affect named-weekday expressions like "próximo lunes" or "jueves".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStartDay {
    /// ISO 8601 standard (Monday = day 0 of the week).
    #[default]
    Monday,
    /// US convention (Sunday = day 0 of the week).
    Sunday,
}

/// How many days `weekday` is from the week-start day.
pub fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> u64 {
    match week_start {
        WeekStartDay::Monday => u64::from(weekday.num_days_from_monday()),
        WeekStartDay::Sunday => u64::from(weekday.num_days_from_sunday()),
    }
}

pub fn add_days(date: NaiveDate, n: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(n))
}

pub fn add_weeks(date: NaiveDate, n: u64) -> Option<NaiveDate> {
    add_days(date, n.checked_mul(7)?)
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStartDay) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(days_from_week_start(date.weekday(), week_start)))
}

/// First day of the week after the one containing `date`.
pub fn start_of_next_week(date: NaiveDate, week_start: WeekStartDay) -> Option<NaiveDate> {
    start_of_week(add_weeks(date, 1)?, week_start)
}

/// Next date with the given weekday strictly after `date` (1..=7 days ahead).
pub fn next_weekday_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let days_ahead = days_until(date.weekday(), weekday);
    add_days(date, if days_ahead == 0 { 7 } else { days_ahead })
}

/// Next date with the given weekday on or after `date` (0..=6 days ahead).
pub fn next_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    add_days(date, days_until(date.weekday(), weekday))
}

fn days_until(from: Weekday, to: Weekday) -> u64 {
    u64::from((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7)
}
