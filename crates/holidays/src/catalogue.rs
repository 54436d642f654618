//! Read-only holiday catalogue over an injected calendar provider.

use feriado_core::{ServiceError, ServiceResult};

use crate::{
    CalendarProvider, Holiday,
    pagination::{PageRequest, PaginationWindow, slice_window},
};

/// Lists and looks up holidays for a country.
pub struct HolidayCatalogue<C> {
    provider: C,
}

impl<C: CalendarProvider> HolidayCatalogue<C> {
    pub fn new(provider: C) -> Self {
        Self { provider }
    }

    /// One page of a country's holidays, in the provider's order.
    pub fn list(
        &self,
        country: &str,
        request: PageRequest,
    ) -> ServiceResult<PaginationWindow<Holiday>> {
        let holidays = self.lookup(country)?;
        Ok(slice_window(&holidays, request))
    }

    /// The first holiday whose `date` contains `holiday_id`.
    pub fn show(&self, country: &str, holiday_id: &str) -> ServiceResult<Holiday> {
        let holidays = self.lookup(country)?;

        holidays
            .into_iter()
            .find(|h| h.date.contains(holiday_id))
            .ok_or(ServiceError::NotFound)
    }

    fn lookup(&self, country: &str) -> ServiceResult<Vec<Holiday>> {
        let country = country.trim();
        if country.is_empty() {
            return Err(ServiceError::validation("country is not defined"));
        }

        self.provider
            .holidays_for(country)
            .ok_or(ServiceError::NotFound)
    }
}
