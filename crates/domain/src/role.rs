// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor privilege tiers.
//!
//! Roles come from the authenticated actor's profile. The transition
//! policy treats admin and manager as one privileged tier; staff get the
//! forward-only lifecycle.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Privilege tier of the acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full back-office access, including status rollback
    Admin,
    /// Same status-change rights as admin
    Manager,
    /// Front-desk operations, forward-only status changes
    Staff,
}

impl UserRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Staff => "staff",
        }
    }

    /// Parses a role from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUserRole` if the string is not a valid
    /// role.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "staff" => Ok(Self::Staff),
            _ => Err(DomainError::InvalidUserRole(s.to_string())),
        }
    }

    /// Returns true if this role may perform any status transition,
    /// including rollbacks.
    #[must_use]
    pub const fn is_privileged(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_round_trip() {
        for role in [UserRole::Admin, UserRole::Manager, UserRole::Staff] {
            let s = role.as_str();
            match UserRole::parse_str(s) {
                Ok(parsed) => assert_eq!(role, parsed),
                Err(e) => panic!("Failed to parse role string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_role_string() {
        assert!(UserRole::parse_str("owner").is_err());
        assert!("Admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_privileged_tiers() {
        assert!(UserRole::Admin.is_privileged());
        assert!(UserRole::Manager.is_privileged());
        assert!(!UserRole::Staff.is_privileged());
    }
}
