use std::collections::HashMap;

use chrono::{Duration, TimeZone, Utc};

use feriado_holidays::{CalendarProvider, Holiday};

/// Calendar provider backed by fixed per-country lists.
///
/// Stands in for the real calendar-rules source in tests/dev; data is
/// loaded once at construction and never recomputed.
#[derive(Debug, Default)]
pub struct FixtureCalendarProvider {
    countries: HashMap<String, Vec<Holiday>>,
}

impl FixtureCalendarProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a country's ordered holiday list.
    pub fn with_country(mut self, code: &str, holidays: Vec<Holiday>) -> Self {
        self.countries.insert(code.to_string(), holidays);
        self
    }

    /// Register a country with `count` synthetic one-day holidays, one
    /// per day from January 1st of `year`.
    pub fn with_synthetic_country(self, code: &str, year: i32, count: usize) -> Self {
        let base = Utc
            .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .expect("January 1st exists in every year");

        let holidays = (0..count)
            .map(|i| {
                let start = base + Duration::days(i as i64);

                Holiday {
                    date: start.format("%Y-%m-%d 00:00:00").to_string(),
                    start,
                    end: start + Duration::days(1),
                    name: format!("Fixture Holiday {i}"),
                    kind: "public".to_string(),
                    substitute: None,
                    note: None,
                }
            })
            .collect();

        self.with_country(code, holidays)
    }
}

impl CalendarProvider for FixtureCalendarProvider {
    fn holidays_for(&self, country: &str) -> Option<Vec<Holiday>> {
        self.countries.get(country).cloned()
    }
}
