//! Signed identity tokens (JWT, HS256).
//!
//! A token binds a subject id to an issuance instant and a fixed TTL.
//! Tokens are never persisted; verification reconstructs everything from
//! the process-wide signing secret.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use feriado_core::{ServiceError, UserId};

/// Fixed token time-to-live in seconds. Part of the service contract.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Claims carried inside a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Claims {
    /// Subject: the credential id the token proves.
    sub: UserId,
    /// Issuance timestamp (unix seconds).
    iat: i64,
    /// Expiry timestamp (unix seconds): `iat + TOKEN_TTL_SECS`.
    exp: i64,
}

/// An issued token plus its advertised lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature did not match the signing secret, or the token is not a
    /// well-formed JWT. Such a token is never treated as merely expired.
    #[error("invalid token")]
    Invalid,

    /// Signature checked out but the validity window has passed.
    #[error("token has expired")]
    Expired,

    /// The signing primitive itself failed.
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<TokenError> for ServiceError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid | TokenError::Expired => {
                ServiceError::Authentication(err.to_string())
            }
            TokenError::Signing(msg) => ServiceError::Internal(msg),
        }
    }
}

/// Issues and verifies identity tokens.
///
/// Holds the process-wide signing secret, loaded once at construction
/// and never mutated. Cheap to clone.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for `subject`, valid for [`TOKEN_TTL_SECS`] from now.
    pub fn issue(&self, subject: UserId) -> Result<TokenData, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue with an explicit issuance instant. Prefer this in tests for
    /// determinism.
    pub fn issue_at(
        &self,
        subject: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<TokenData, TokenError> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            sub: subject,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(TokenData {
            token,
            expires_in: TOKEN_TTL_SECS,
        })
    }

    /// Verify a token and return the subject id it binds.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify against an explicit clock reading.
    ///
    /// Expiry uses zero leeway: a token issued at `t` is valid strictly
    /// before `t + TOKEN_TTL_SECS` and expired from that instant on.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, TokenError> {
        // Expiry is checked below against the caller-supplied clock;
        // the library's own exp check (with its default leeway) is off.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|_| TokenError::Invalid)?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims.sub)
    }
}
