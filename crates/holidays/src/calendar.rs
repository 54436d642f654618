//! Calendar provider capability.

use std::sync::Arc;

use crate::Holiday;

/// External source of country-specific holiday data.
///
/// Rule computation is entirely the provider's concern; this core only
/// consumes the ordered list. `None` means the country code is unknown
/// to the provider.
pub trait CalendarProvider: Send + Sync {
    fn holidays_for(&self, country: &str) -> Option<Vec<Holiday>>;
}

impl<C> CalendarProvider for Arc<C>
where
    C: CalendarProvider + ?Sized,
{
    fn holidays_for(&self, country: &str) -> Option<Vec<Holiday>> {
        (**self).holidays_for(country)
    }
}
