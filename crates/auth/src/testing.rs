//! Test doubles shared by this crate's unit tests.

use std::sync::RwLock;

use feriado_core::{StoreError, UserId};

use crate::{Credential, CredentialStore, Role};

/// Vec-backed credential store for unit tests.
pub(crate) struct StubCredentialStore {
    records: RwLock<Vec<Credential>>,
}

impl StubCredentialStore {
    pub(crate) fn empty() -> Self {
        Self::with(Vec::new())
    }

    pub(crate) fn with(records: Vec<Credential>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl CredentialStore for StubCredentialStore {
    fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records.iter().find(|c| c.email == email).cloned())
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<Credential>, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records.iter().find(|c| c.id == id).cloned())
    }

    fn create(
        &self,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<Credential, StoreError> {
        let credential = Credential {
            id: UserId::new(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role,
        };
        self.records.write().unwrap().push(credential.clone());
        Ok(credential)
    }
}

pub(crate) fn credential(role: Role) -> Credential {
    Credential {
        id: UserId::new(),
        email: "alice@example.com".to_string(),
        password_hash: "$2b$10$fake".to_string(),
        role,
    }
}
