use core::str::FromStr;

use serde::{Deserialize, Serialize};

use feriado_core::ServiceError;

/// Access class assigned to a credential at signup.
///
/// The set is closed: a stored role is always one of these two variants,
/// and signup input that names anything else is rejected up front.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// May act on any user's resources.
    Admin,
    /// May act only on their own resources.
    Subscriber,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Subscriber => "SUBSCRIBER",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "SUBSCRIBER" => Ok(Role::Subscriber),
            other => Err(ServiceError::validation(format!(
                "role must be ADMIN or SUBSCRIBER, got '{other}'"
            ))),
        }
    }
}
