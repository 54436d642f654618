//! Stored identity records and the capability trait for looking them up.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use feriado_core::{StoreError, UserId};

use crate::Role;

/// A stored identity record: email, password digest and role.
///
/// Created on signup and never mutated by this core; removal is an
/// external administrative concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Credential lookup/creation capability.
///
/// Implementations live outside the core (in-memory for tests/dev, a
/// database in production) and are injected wherever identities are
/// resolved or created. Email uniqueness is checked by the signup
/// service before `create` is called; implementations may additionally
/// enforce it but are not required to.
pub trait CredentialStore: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError>;

    fn find_by_id(&self, id: UserId) -> Result<Option<Credential>, StoreError>;

    fn create(
        &self,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<Credential, StoreError>;
}

impl<S> CredentialStore for Arc<S>
where
    S: CredentialStore + ?Sized,
{
    fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError> {
        (**self).find_by_email(email)
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<Credential>, StoreError> {
        (**self).find_by_id(id)
    }

    fn create(
        &self,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<Credential, StoreError> {
        (**self).create(email, password_hash, role)
    }
}
