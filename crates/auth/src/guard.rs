//! Identity resolution and role-scoped access decisions.
//!
//! Resolution turns an extracted token into a stored credential via the
//! injected store; the access decision itself is a pure policy check
//! with no IO and no side effects.

use chrono::{DateTime, Utc};

use feriado_core::{ServiceError, ServiceResult, UserId};

use crate::{Credential, CredentialStore, Role, TokenIssuer};

/// The identity attached to one authenticated request.
///
/// Request-scoped: built during resolution, dropped when the request
/// ends, never shared across requests.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub identity: Credential,
    pub resolved_at: DateTime<Utc>,
}

/// Resolve an extracted token into an authenticated identity.
///
/// - No token, a bad signature or an expired token -> `Authentication`.
/// - A verified subject with no stored credential -> `Authorization`
///   (the token is genuine but proves an identity this system no longer
///   knows).
pub fn resolve_identity(
    issuer: &TokenIssuer,
    store: &dyn CredentialStore,
    token: Option<&str>,
) -> ServiceResult<AuthContext> {
    let token =
        token.ok_or_else(|| ServiceError::authentication("no token presented; log in first"))?;

    let subject = issuer.verify(token)?;

    let identity = store
        .find_by_id(subject)?
        .ok_or_else(|| ServiceError::authorization("token subject is not a known credential"))?;

    Ok(AuthContext {
        identity,
        resolved_at: Utc::now(),
    })
}

/// Decide whether `identity` may act on `target`'s resources.
pub fn authorize(identity: &Credential, target: UserId) -> bool {
    match identity.role {
        Role::Admin => true,
        // Deny by default: subscribers reach only their own resources.
        Role::Subscriber => identity.id == target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubCredentialStore as StubStore, credential};

    #[test]
    fn admin_may_act_on_anyone() {
        let admin = credential(Role::Admin);
        assert!(authorize(&admin, admin.id));
        assert!(authorize(&admin, UserId::new()));
    }

    #[test]
    fn subscriber_may_act_only_on_self() {
        let subscriber = credential(Role::Subscriber);
        assert!(authorize(&subscriber, subscriber.id));
        assert!(!authorize(&subscriber, UserId::new()));
    }

    #[test]
    fn missing_token_is_unauthenticated() {
        let issuer = TokenIssuer::new("secret");
        let store = StubStore::with(vec![]);

        let err = resolve_identity(&issuer, &store, None).unwrap_err();
        assert!(matches!(err, ServiceError::Authentication(_)));
    }

    #[test]
    fn resolves_stored_credential() {
        let issuer = TokenIssuer::new("secret");
        let stored = credential(Role::Subscriber);
        let store = StubStore::with(vec![stored.clone()]);

        let issued = issuer.issue(stored.id).unwrap();
        let ctx = resolve_identity(&issuer, &store, Some(&issued.token)).unwrap();
        assert_eq!(ctx.identity, stored);
    }

    #[test]
    fn unknown_subject_is_unauthorized() {
        let issuer = TokenIssuer::new("secret");
        let store = StubStore::with(vec![]);

        let issued = issuer.issue(UserId::new()).unwrap();
        let err = resolve_identity(&issuer, &store, Some(&issued.token)).unwrap_err();
        assert!(matches!(err, ServiceError::Authorization(_)));
    }

    #[test]
    fn tampered_token_is_unauthenticated() {
        let issuer = TokenIssuer::new("secret");
        let stored = credential(Role::Subscriber);
        let store = StubStore::with(vec![stored.clone()]);

        let issued = TokenIssuer::new("other-secret").issue(stored.id).unwrap();
        let err = resolve_identity(&issuer, &store, Some(&issued.token)).unwrap_err();
        assert!(matches!(err, ServiceError::Authentication(_)));
    }
}
