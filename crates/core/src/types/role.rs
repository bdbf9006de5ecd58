//! User roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role assigned to a user in the directory.
///
/// Stored in the database as the uppercase strings `USER` / `ADMIN`, which is
/// also how an authenticating proxy presents them on inbound requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular shopper.
    User,
    /// Administrator. Has every permission a shopper has.
    Admin,
}

impl Role {
    /// Database / wire representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the Spring-style "ROLE_USER" prefix some proxies forward.
        let normalized = s.trim().to_ascii_uppercase();
        let normalized = normalized.strip_prefix("ROLE_").unwrap_or(&normalized);
        match normalized {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(ParseRoleError(s.to_owned())),
        }
    }
}
