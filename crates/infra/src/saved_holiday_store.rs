use std::sync::RwLock;

use chrono::Utc;

use feriado_core::{SavedHolidayId, StoreError, UserId};
use feriado_holidays::{SavedHoliday, SavedHolidayStore};

/// In-memory saved-holiday store.
///
/// Records keep insertion order, so `fetch_page` pages over them in the
/// order they were saved. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySavedHolidayStore {
    records: RwLock<Vec<SavedHoliday>>,
}

impl InMemorySavedHolidayStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SavedHolidayStore for InMemorySavedHolidayStore {
    fn find_one(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<Option<SavedHoliday>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

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
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        let record = SavedHoliday {
            id: SavedHolidayId::new(),
            user_id,
            country: country.to_string(),
            holiday_id: holiday_id.to_string(),
            saved_at: Utc::now(),
        };
        records.push(record.clone());

        Ok(record)
    }

    fn delete_matching(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<usize, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        let before = records.len();
        records.retain(|r| {
            !(r.user_id == user_id && r.country == country && r.holiday_id == holiday_id)
        });

        Ok(before - records.len())
    }

    fn count_by_user(&self, user_id: UserId) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        Ok(records.iter().filter(|r| r.user_id == user_id).count())
    }

    fn fetch_page(
        &self,
        user_id: UserId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SavedHoliday>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        Ok(records
            .iter()
            .filter(|r| r.user_id == user_id)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}
