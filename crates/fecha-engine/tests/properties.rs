use chrono::{Datelike, Days, NaiveDate, Weekday};
use fecha_engine::{resolve, resolve_relative_date_on, MatchRule, ResolveOptions, ISO_FORMAT};
use proptest::prelude::*;

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("lunes", Weekday::Mon),
    ("martes", Weekday::Tue),
    ("miércoles", Weekday::Wed),
    ("jueves", Weekday::Thu),
    ("viernes", Weekday::Fri),
    ("sábado", Weekday::Sat),
    ("domingo", Weekday::Sun),
];

/// Any date from 1900 through 2099.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..73_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn any_weekday() -> impl Strategy<Value = (&'static str, Weekday)> {
    (0usize..7).prop_map(|i| WEEKDAYS[i])
}

fn iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

fn next_monday(today: NaiveDate) -> NaiveDate {
    let in_a_week = today + Days::new(7);
    in_a_week - Days::new(u64::from(in_a_week.weekday().num_days_from_monday()))
}

proptest! {
    #[test]
    fn iso_dates_pass_through(date in any_date(), today in any_date()) {
        let s = iso(date);
        prop_assert_eq!(resolve_relative_date_on(&s, today), Some(s.clone()));
    }

    #[test]
    fn day_first_numeric_dates(date in any_date(), today in any_date()) {
        let s = format!("{}/{}/{}", date.day(), date.month(), date.year());
        prop_assert_eq!(resolve_relative_date_on(&s, today), Some(iso(date)));
    }

    #[test]
    fn en_n_dias_adds_days(n in 0u64..5_000, today in any_date()) {
        let s = format!("en {n} días");
        prop_assert_eq!(resolve_relative_date_on(&s, today), Some(iso(today + Days::new(n))));
    }

    #[test]
    fn en_n_semanas_keeps_weekday(n in 0u64..500, today in any_date()) {
        let resolved = resolve(&format!("en {n} semanas"), today, &ResolveOptions::default()).unwrap();
        prop_assert_eq!(resolved.rule, MatchRule::InWeeks);
        prop_assert_eq!(resolved.date.weekday(), today.weekday());
        prop_assert_eq!((resolved.date - today).num_days(), 7 * n as i64);
    }

    #[test]
    fn proxima_semana_is_monday_of_following_week(today in any_date()) {
        let resolved = resolve("próxima semana", today, &ResolveOptions::default()).unwrap();
        prop_assert_eq!(resolved.date, next_monday(today));
        prop_assert_eq!(resolved.date.weekday(), Weekday::Mon);
        let days_ahead = (resolved.date - today).num_days();
        prop_assert!((1..=7).contains(&days_ahead), "days ahead: {}", days_ahead);
    }

    #[test]
    fn semana_que_viene_para_weekday_stays_in_next_week(
        today in any_date(),
        (name, weekday) in any_weekday(),
    ) {
        let s = format!("semana que viene para {name}");
        let resolved = resolve(&s, today, &ResolveOptions::default()).unwrap();
        prop_assert_eq!(resolved.date.weekday(), weekday);
        let monday = next_monday(today);
        prop_assert_eq!(
            resolved.date,
            monday + Days::new(u64::from(weekday.num_days_from_monday()))
        );
    }

    #[test]
    fn proximo_weekday_is_strictly_after_today(
        today in any_date(),
        (name, weekday) in any_weekday(),
    ) {
        let resolved = resolve(&format!("próximo {name}"), today, &ResolveOptions::default()).unwrap();
        prop_assert_eq!(resolved.date.weekday(), weekday);
        let days_ahead = (resolved.date - today).num_days();
        prop_assert!((1..=7).contains(&days_ahead), "days ahead: {}", days_ahead);
    }

    #[test]
    fn bare_weekday_is_within_the_coming_week(
        today in any_date(),
        (name, weekday) in any_weekday(),
    ) {
        let resolved = resolve(&format!("el {name}"), today, &ResolveOptions::default()).unwrap();
        prop_assert_eq!(resolved.rule, MatchRule::BareWeekday);
        prop_assert_eq!(resolved.date.weekday(), weekday);
        let days_ahead = (resolved.date - today).num_days();
        prop_assert!((0..=6).contains(&days_ahead), "days ahead: {}", days_ahead);
    }

    #[test]
    fn outputs_are_idempotent(
        today in any_date(),
        input in prop::sample::select(vec![
            "hoy", "mañana", "pasado mañana", "en 5 días", "en 3 semanas",
            "próxima semana", "semana que viene para viernes", "próximo domingo",
            "jueves", "2 de enero de 2030", "9-10-2031",
        ]),
    ) {
        let first = resolve_relative_date_on(input, today).unwrap();
        prop_assert_eq!(resolve_relative_date_on(&first, today), Some(first.clone()));
    }

    #[test]
    fn arbitrary_text_never_panics(input in "\\PC{0,40}", today in any_date()) {
        if let Some(out) = resolve_relative_date_on(&input, today) {
            prop_assert!(NaiveDate::parse_from_str(&out, ISO_FORMAT).is_ok(), "bad output: {}", out);
        }
    }
}

#[test]
fn weekday_asymmetry_on_matching_day() {
    // Monday, March 2, 2026
    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    assert_eq!(
        resolve_relative_date_on("próximo lunes", monday).as_deref(),
        Some("2026-03-09")
    );
    assert_eq!(resolve_relative_date_on("lunes", monday).as_deref(), Some("2026-03-02"));

    // Thursday, March 5, 2026
    let thursday = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
    assert_eq!(resolve_relative_date_on("jueves", thursday).as_deref(), Some("2026-03-05"));
    assert_eq!(
        resolve_relative_date_on("próximo jueves", thursday).as_deref(),
        Some("2026-03-12")
    );
}

#[test]
fn invalid_numeric_date_falls_through_everything() {
    let today = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
    assert_eq!(resolve_relative_date_on("32/13/2024", today), None);
}
