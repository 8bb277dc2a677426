//! # fecha-engine
//!
//! Deterministic resolution of Spanish date phrases for task and meeting
//! due dates.
//!
//! Users type things like "mañana", "en 3 días", "semana que viene para
//! jueves" or "15 de marzo de 2025"; this crate turns them into a calendar
//! date relative to a reference "today", or reports that the phrase was not
//! understood so the caller can fall back to a date picker.
//!
//! ## Modules
//!
//! - [`resolver`] — the matcher pipeline and public entry points
//! - [`normalize`] — lowercase + diacritic stripping applied before matching
//! - [`vocab`] — Spanish weekday and month names
//! - [`calendar`] — checked week/weekday arithmetic over `NaiveDate`
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod vocab;

pub use calendar::WeekStartDay;
pub use error::ResolveError;
pub use normalize::normalize_expression;
pub use resolver::{
    resolve, resolve_relative_date, resolve_relative_date_on, today, try_resolve, MatchRule,
    ResolveOptions, ResolvedDate, ISO_FORMAT,
};
