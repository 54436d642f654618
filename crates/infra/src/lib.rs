//! Infrastructure layer: in-memory collaborator implementations.
//!
//! Everything here implements a capability trait owned by a domain
//! crate: credentials and saved holidays behind their store traits, the
//! calendar provider behind fixed fixture data. Production deployments
//! supply their own implementations; these are for tests/dev.

pub mod calendar;
pub mod credential_store;
pub mod saved_holiday_store;

#[cfg(test)]
mod integration_tests;

pub use calendar::FixtureCalendarProvider;
pub use credential_store::InMemoryCredentialStore;
pub use saved_holiday_store::InMemorySavedHolidayStore;
