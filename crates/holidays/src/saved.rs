//! Saving, unsaving and listing a user's holidays.
//!
//! Every operation authorizes the caller against the target user before
//! touching the store; a denied call performs no store access at all.

use feriado_auth::{Credential, authorize};
use feriado_core::{ServiceError, ServiceResult, UserId};

use crate::{
    SavedHoliday, SavedHolidayStore,
    pagination::{PageRequest, PaginationWindow, count_window},
};

/// Operations on a user's saved holidays, over an injected store.
pub struct SavedHolidayService<S> {
    store: S,
}

impl<S: SavedHolidayStore> SavedHolidayService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Save a holiday under `target_user`.
    ///
    /// The `(user, country, holiday)` tuple is unique per user; saving
    /// it twice is a conflict.
    pub fn save(
        &self,
        actor: &Credential,
        target_user: UserId,
        country: &str,
        holiday_id: &str,
    ) -> ServiceResult<SavedHoliday> {
        ensure_can_act_for(actor, target_user)?;

        if self
            .store
            .find_one(target_user, country, holiday_id)?
            .is_some()
        {
            return Err(ServiceError::conflict(
                "this holiday is already saved for the user",
            ));
        }

        let record = self.store.create(target_user, country, holiday_id)?;
        tracing::info!(
            "saved holiday {} ({}) for user {}",
            record.holiday_id,
            record.country,
            record.user_id
        );

        Ok(record)
    }

    /// Remove a previously saved holiday; returns how many records went.
    ///
    /// Unsaving a tuple that was never saved is a conflict, not a
    /// not-found: the target collection exists, the state does not.
    pub fn unsave(
        &self,
        actor: &Credential,
        target_user: UserId,
        country: &str,
        holiday_id: &str,
    ) -> ServiceResult<usize> {
        ensure_can_act_for(actor, target_user)?;

        let deleted = self.store.delete_matching(target_user, country, holiday_id)?;
        if deleted == 0 {
            return Err(ServiceError::conflict(
                "this holiday is not saved for the user",
            ));
        }

        Ok(deleted)
    }

    /// One page of `target_user`'s saved holidays.
    ///
    /// Uses count+fetch so the user's whole collection is never
    /// materialized.
    pub fn list_for_user(
        &self,
        actor: &Credential,
        target_user: UserId,
        request: PageRequest,
    ) -> ServiceResult<PaginationWindow<SavedHoliday>> {
        ensure_can_act_for(actor, target_user)?;

        let total = self.store.count_by_user(target_user)?;
        let bounds = count_window(total, request);
        let current = self.store.fetch_page(target_user, bounds.limit, bounds.offset)?;

        Ok(PaginationWindow {
            current,
            next: bounds.next,
            prev: bounds.prev,
        })
    }
}

fn ensure_can_act_for(actor: &Credential, target_user: UserId) -> ServiceResult<()> {
    if !authorize(actor, target_user) {
        return Err(ServiceError::authorization(
            "caller may not act on this user's saved holidays",
        ));
    }

    Ok(())
}
