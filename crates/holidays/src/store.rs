//! Saved-holiday records and the capability trait for persisting them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use feriado_core::{SavedHolidayId, StoreError, UserId};

/// One saved holiday: the `(user, country, holiday)` ownership tuple
/// plus record identity and the instant it was saved.
///
/// The tuple is unique per user; the saved-holiday service checks this
/// before creating, so storage need not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedHoliday {
    pub id: SavedHolidayId,
    pub user_id: UserId,
    pub country: String,
    pub holiday_id: String,
    pub saved_at: DateTime<Utc>,
}

/// Saved-holiday persistence capability.
///
/// `fetch_page` must return records in a stable order consistent with
/// `count_by_user`, so that window bounds computed from the count line
/// up with the fetched slice.
pub trait SavedHolidayStore: Send + Sync {
    fn find_one(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<Option<SavedHoliday>, StoreError>;

    fn create(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<SavedHoliday, StoreError>;

    /// Delete every record matching the tuple; returns how many went.
    fn delete_matching(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<usize, StoreError>;

    fn count_by_user(&self, user_id: UserId) -> Result<usize, StoreError>;

    fn fetch_page(
        &self,
        user_id: UserId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SavedHoliday>, StoreError>;
}

impl<S> SavedHolidayStore for Arc<S>
where
    S: SavedHolidayStore + ?Sized,
{
    fn find_one(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<Option<SavedHoliday>, StoreError> {
        (**self).find_one(user_id, country, holiday_id)
    }

    fn create(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<SavedHoliday, StoreError> {
        (**self).create(user_id, country, holiday_id)
    }

    fn delete_matching(
        &self,
        user_id: UserId,
        country: &str,
        holiday_id: &str,
    ) -> Result<usize, StoreError> {
        (**self).delete_matching(user_id, country, holiday_id)
    }

    fn count_by_user(&self, user_id: UserId) -> Result<usize, StoreError> {
        (**self).count_by_user(user_id)
    }

    fn fetch_page(
        &self,
        user_id: UserId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SavedHoliday>, StoreError> {
        (**self).fetch_page(user_id, limit, offset)
    }
}
