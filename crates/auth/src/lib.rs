//! `feriado-auth` — credential and token lifecycle, role-based access.
//!
//! This crate is intentionally decoupled from HTTP and storage: requests
//! appear as raw header values, stores as injected capability traits.

pub mod credential;
pub mod guard;
pub mod password;
pub mod role;
pub mod service;
pub mod token;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use credential::{Credential, CredentialStore};
pub use guard::{AuthContext, authorize, resolve_identity};
pub use role::Role;
pub use service::{AuthService, LoginSession};
pub use token::{TOKEN_TTL_SECS, TokenData, TokenError, TokenIssuer};
pub use transport::{extract_token, format_cookie};
