//! One-way password hashing.
//!
//! bcrypt with a fixed work factor; the salt is generated per call and
//! embedded in the digest, so hashing the same plaintext twice yields
//! different digests.

use feriado_core::{ServiceError, ServiceResult};

/// Fixed bcrypt cost. Part of the service contract, not tunable per call.
pub const WORK_FACTOR: u32 = 10;

/// Hash a plaintext password into a self-describing digest.
pub fn hash(plaintext: &str) -> ServiceResult<String> {
    bcrypt::hash(plaintext, WORK_FACTOR)
        .map_err(|e| ServiceError::internal(format!("password hashing failed: {e}")))
}

/// Check a plaintext password against a stored digest.
///
/// A mismatched password is `Ok(false)`, never an error; only a failure
/// of the primitive itself (e.g. a malformed digest) is an error.
pub fn verify(plaintext: &str, digest: &str) -> ServiceResult<bool> {
    bcrypt::verify(plaintext, digest)
        .map_err(|e| ServiceError::internal(format!("password verification failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_verifies() {
        let digest = hash("correct horse battery staple").unwrap();
        assert!(verify("correct horse battery staple", &digest).unwrap());
    }

    #[test]
    fn wrong_password_is_false_not_error() {
        let digest = hash("hunter2").unwrap();
        assert!(!verify("hunter2x", &digest).unwrap());
    }

    #[test]
    fn same_plaintext_yields_distinct_digests() {
        let a = hash("hunter2").unwrap();
        let b = hash("hunter2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_digest_is_an_error() {
        let result = verify("hunter2", "not-a-bcrypt-digest");
        assert!(matches!(
            result,
            Err(feriado_core::ServiceError::Internal(_))
        ));
    }
}
