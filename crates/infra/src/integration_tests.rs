//! End-to-end flows over the in-memory collaborators.

use std::sync::Arc;

use feriado_auth::{AuthService, Role, TokenIssuer};
use feriado_core::ServiceError;
use feriado_holidays::{HolidayCatalogue, PageRequest, SavedHolidayService};

use crate::{FixtureCalendarProvider, InMemoryCredentialStore, InMemorySavedHolidayStore};

struct World {
    auth: AuthService<Arc<InMemoryCredentialStore>>,
    saved: SavedHolidayService<Arc<InMemorySavedHolidayStore>>,
    catalogue: HolidayCatalogue<FixtureCalendarProvider>,
}

fn world() -> World {
    feriado_observability::logging::init_with_default_filter("debug");

    let credentials = Arc::new(InMemoryCredentialStore::new());
    let saved = Arc::new(InMemorySavedHolidayStore::new());
    let provider = FixtureCalendarProvider::new().with_synthetic_country("NL", 2026, 10);

    World {
        auth: AuthService::new(credentials, TokenIssuer::new("integration-secret")),
        saved: SavedHolidayService::new(saved),
        catalogue: HolidayCatalogue::new(provider),
    }
}

#[test]
fn signup_then_duplicate_signup() {
    let w = world();

    let created = w
        .auth
        .sign_up("alice@example.com", "hunter2", Role::Subscriber)
        .unwrap();
    assert_eq!(created.role, Role::Subscriber);

    let err = w
        .auth
        .sign_up("alice@example.com", "hunter2", Role::Admin)
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test]
fn login_resolves_back_to_the_subject() {
    let w = world();
    let created = w
        .auth
        .sign_up("alice@example.com", "hunter2", Role::Subscriber)
        .unwrap();

    let session = w.auth.log_in("alice@example.com", "hunter2").unwrap();
    let ctx = w
        .auth
        .authenticate_request(Some(&session.cookie), None)
        .unwrap();
    assert_eq!(ctx.identity.id, created.id);

    let err = w.auth.log_in("alice@example.com", "wrong").unwrap_err();
    assert!(matches!(err, ServiceError::Authentication(_)));
}

#[test]
fn bearer_header_works_as_fallback_transport() {
    let w = world();
    let created = w
        .auth
        .sign_up("alice@example.com", "hunter2", Role::Subscriber)
        .unwrap();
    let session = w.auth.log_in("alice@example.com", "hunter2").unwrap();

    // Pull the raw token out of the cookie and present it as a bearer
    // header instead.
    let token = session
        .cookie
        .trim_start_matches("Authorization=")
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let ctx = w
        .auth
        .authenticate_request(None, Some(&format!("Bearer {token}")))
        .unwrap();
    assert_eq!(ctx.identity.id, created.id);
}

#[test]
fn subscriber_is_confined_to_their_own_holidays() {
    let w = world();
    let alice = w
        .auth
        .sign_up("alice@example.com", "hunter2", Role::Subscriber)
        .unwrap();
    let bob = w
        .auth
        .sign_up("bob@example.com", "hunter2", Role::Subscriber)
        .unwrap();

    let err = w
        .saved
        .save(&alice, bob.id, "NL", "2026-01-01")
        .unwrap_err();
    assert!(matches!(err, ServiceError::Authorization(_)));

    // The same call made by an admin goes through.
    let admin = w
        .auth
        .sign_up("root@example.com", "hunter2", Role::Admin)
        .unwrap();
    let record = w.saved.save(&admin, bob.id, "NL", "2026-01-01").unwrap();
    assert_eq!(record.user_id, bob.id);
}

#[test]
fn save_unsave_lifecycle() {
    let w = world();
    let alice = w
        .auth
        .sign_up("alice@example.com", "hunter2", Role::Subscriber)
        .unwrap();

    // Pick a real holiday out of the catalogue to save.
    let holiday = w.catalogue.show("NL", "2026-01-03").unwrap();
    let holiday_id = holiday.date.split(' ').next().unwrap();

    w.saved.save(&alice, alice.id, "NL", holiday_id).unwrap();

    let err = w.saved.save(&alice, alice.id, "NL", holiday_id).unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    assert_eq!(w.saved.unsave(&alice, alice.id, "NL", holiday_id).unwrap(), 1);

    let err = w
        .saved
        .unsave(&alice, alice.id, "NL", holiday_id)
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test]
fn both_pagination_variants_agree_end_to_end() {
    let w = world();
    let alice = w
        .auth
        .sign_up("alice@example.com", "hunter2", Role::Subscriber)
        .unwrap();

    // Save every catalogue holiday, then page both collections the same
    // way.
    let all = w
        .catalogue
        .list("NL", PageRequest::new(10, 1).unwrap())
        .unwrap();
    for holiday in &all.current {
        let holiday_id = holiday.date.split(' ').next().unwrap();
        w.saved.save(&alice, alice.id, "NL", holiday_id).unwrap();
    }

    let request = PageRequest::new(3, 2).unwrap();
    let catalogue_page = w.catalogue.list("NL", request).unwrap();
    let saved_page = w.saved.list_for_user(&alice, alice.id, request).unwrap();

    assert_eq!(catalogue_page.current.len(), 3);
    assert_eq!(saved_page.current.len(), 3);
    assert_eq!(catalogue_page.next, saved_page.next);
    assert_eq!(catalogue_page.prev, saved_page.prev);

    let expected: Vec<String> = catalogue_page
        .current
        .iter()
        .map(|h| h.date.split(' ').next().unwrap().to_string())
        .collect();
    let got: Vec<String> = saved_page
        .current
        .iter()
        .map(|r| r.holiday_id.clone())
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn unknown_country_is_not_found_end_to_end() {
    let w = world();

    let err = w
        .catalogue
        .list("XX", PageRequest::new(3, 1).unwrap())
        .unwrap_err();
    assert_eq!(err, ServiceError::NotFound);
}
