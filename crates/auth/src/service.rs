//! Signup and login operations over an injected credential store.

use feriado_core::{ServiceError, ServiceResult};

use crate::{
    AuthContext, Credential, CredentialStore, Role, TokenIssuer, guard, password, transport,
};

/// Outcome of a successful login: the authenticated identity and the
/// session cookie to hand back to the caller.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub identity: Credential,
    pub cookie: String,
}

/// Account operations: signup, login, request authentication.
///
/// The credential store is an explicit capability passed in at
/// construction, never ambient state.
pub struct AuthService<S> {
    store: S,
    issuer: TokenIssuer,
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(store: S, issuer: TokenIssuer) -> Self {
        Self { store, issuer }
    }

    /// Create a credential for a fresh email.
    ///
    /// The email is trimmed and lowercased before lookup and storage.
    /// A duplicate email is a conflict; nothing is written in that case.
    pub fn sign_up(&self, email: &str, password: &str, role: Role) -> ServiceResult<Credential> {
        let email = normalize_email(email)?;

        if password.is_empty() {
            return Err(ServiceError::validation("password must not be empty"));
        }

        if self.store.find_by_email(&email)?.is_some() {
            return Err(ServiceError::conflict(format!(
                "the email {email} is already registered"
            )));
        }

        let digest = password::hash(password)?;
        let credential = self.store.create(&email, &digest, role)?;

        tracing::info!("created credential {} with role {}", credential.id, role);
        Ok(credential)
    }

    /// Authenticate an email/password pair and open a session.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller.
    pub fn log_in(&self, email: &str, password: &str) -> ServiceResult<LoginSession> {
        let email = normalize_email(email)?;

        if password.is_empty() {
            return Err(ServiceError::validation("password must not be empty"));
        }

        let identity = self
            .store
            .find_by_email(&email)?
            .ok_or_else(|| ServiceError::authentication("unknown email or wrong password"))?;

        if !password::verify(password, &identity.password_hash)? {
            tracing::debug!("rejected login for credential {}", identity.id);
            return Err(ServiceError::authentication("unknown email or wrong password"));
        }

        let issued = self.issuer.issue(identity.id)?;
        let cookie = transport::format_cookie(&issued.token, issued.expires_in);

        Ok(LoginSession { identity, cookie })
    }

    /// Resolve the identity behind an inbound request's raw `Cookie` and
    /// `Authorization` header values.
    pub fn authenticate_request(
        &self,
        cookie_header: Option<&str>,
        authorization_header: Option<&str>,
    ) -> ServiceResult<AuthContext> {
        let token = transport::extract_token(cookie_header, authorization_header);
        guard::resolve_identity(&self.issuer, &self.store, token)
    }
}

fn normalize_email(email: &str) -> ServiceResult<String> {
    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(ServiceError::validation("invalid email format"));
    }

    Ok(email)
}
