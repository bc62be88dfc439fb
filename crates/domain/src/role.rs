// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role held by a directory user.
///
/// `User` is the couple account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Protocol,
    User,
    Vendor,
    Attendee,
}

impl Role {
    /// Returns the stored representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Protocol => "PROTOCOL",
            Self::User => "USER",
            Self::Vendor => "VENDOR",
            Self::Attendee => "ATTENDEE",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            "PROTOCOL" => Ok(Self::Protocol),
            "USER" => Ok(Self::User),
            "VENDOR" => Ok(Self::Vendor),
            "ATTENDEE" => Ok(Self::Attendee),
            _ => Err(DomainError::InvalidRoleName(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque external identity issued by the authentication provider.
///
/// Compared byte-for-byte; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wraps an identity string without validation.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Wraps an identity string, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentity` if the value is empty or whitespace.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidIdentity(String::from(
                "identity cannot be empty",
            )));
        }
        Ok(Self::new(value))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!("Protocol".parse::<Role>().unwrap(), Role::Protocol);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        let err = "couple_planner".parse::<Role>().unwrap_err();
        assert_eq!(err, DomainError::InvalidRoleName(String::from("couple_planner")));
    }

    #[test]
    fn test_identity_is_case_sensitive() {
        assert_ne!(Identity::new("mgr1"), Identity::new("MGR1"));
    }

    #[test]
    fn test_identity_parse_rejects_blank() {
        assert!(Identity::parse("   ").is_err());
        assert_eq!(Identity::parse("user_2x").unwrap().value(), "user_2x");
    }
}
