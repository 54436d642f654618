//! Test doubles shared by this crate's unit tests.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{TimeZone, Utc};

use feriado_core::{SavedHolidayId, StoreError, UserId};

use crate::{CalendarProvider, Holiday, SavedHoliday, SavedHolidayStore};

/// Map-backed calendar provider.
pub(crate) struct MapProvider {
    countries: HashMap<String, Vec<Holiday>>,
}

impl CalendarProvider for MapProvider {
    fn holidays_for(&self, country: &str) -> Option<Vec<Holiday>> {
        self.countries.get(country).cloned()
    }
}

/// Provider knowing one country with `count` synthetic January holidays.
pub(crate) fn fixture_provider(country: &str, count: usize) -> MapProvider {
    let mut countries = HashMap::new();
    countries.insert(country.to_string(), (0..count).map(holiday).collect());
    MapProvider { countries }
}

/// The `i`-th synthetic holiday: one day each, starting 2026-01-01.
pub(crate) fn holiday(i: usize) -> Holiday {
    let day = (i + 1) as u32;
    let start = Utc.with_ymd_and_hms(2026, 1, day, 0, 0, 0).unwrap();

    Holiday {
        date: format!("2026-01-{day:02} 00:00:00"),
        start,
        end: start + chrono::Duration::days(1),
        name: format!("Holiday {i}"),
        kind: "public".to_string(),
        substitute: None,
        note: None,
    }
}

/// Vec-backed saved-holiday store for unit tests.
#[derive(Default)]
pub(crate) struct StubSavedHolidayStore {
    records: RwLock<Vec<SavedHoliday>>,
}

impl StubSavedHolidayStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

impl SavedHolidayStore for StubSavedHolidayStore {
    fn find_one(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<Option<SavedHoliday>, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records
            .iter()
            .find(|r| r.user_id == user_id && r.country == country && r.holiday_id == holiday_id)
            .cloned())
    }

    fn create(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<SavedHoliday, StoreError> {
        let record = SavedHoliday {
            id: SavedHolidayId::new(),
            user_id,
            country: country.to_string(),
            holiday_id: holiday_id.to_string(),
            saved_at: Utc::now(),
        };
        self.records.write().unwrap().push(record.clone());
        Ok(record)
    }

    fn delete_matching(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<usize, StoreError> {
        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|r| {
            !(r.user_id == user_id && r.country == country && r.holiday_id == holiday_id)
        });
        Ok(before - records.len())
    }

    fn count_by_user(&self, user_id: UserId) -> Result<usize, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records.iter().filter(|r| r.user_id == user_id).count())
    }

    fn fetch_page(
        &self,
        user_id: UserId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SavedHoliday>, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.user_id == user_id)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}
