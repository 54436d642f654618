use std::sync::RwLock;

use feriado_auth::{Credential, CredentialStore, Role};
use feriado_core::{StoreError, UserId};

/// In-memory credential store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    records: RwLock<Vec<Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        Ok(records.iter().find(|c| c.email == email).cloned())
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<Credential>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        Ok(records.iter().find(|c| c.id == id).cloned())
    }

    fn create(
        &self,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<Credential, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        let credential = Credential {
            id: UserId::new(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role,
        };
        records.push(credential.clone());

        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_credentials_are_findable_both_ways() {
        let store = InMemoryCredentialStore::new();
        let created = store
            .create("alice@example.com", "$2b$10$fake", Role::Admin)
            .unwrap();

        assert_eq!(
            store.find_by_email("alice@example.com").unwrap(),
            Some(created.clone())
        );
        assert_eq!(store.find_by_id(created.id).unwrap(), Some(created));
    }

    #[test]
    fn missing_records_come_back_none() {
        let store = InMemoryCredentialStore::new();

        assert_eq!(store.find_by_email("nobody@example.com").unwrap(), None);
        assert_eq!(store.find_by_id(UserId::new()).unwrap(), None);
    }
}
