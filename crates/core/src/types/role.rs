//! The closed set of user roles.

use serde::{Deserialize, Serialize};

/// A user's role, determining dashboard and access scope.
///
/// The set is closed: every authenticated identity carries exactly one of
/// these values, and route gates are expressed as subsets of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administration: user management, moderation.
    Admin,
    /// Company accounts posting jobs and reviewing applications.
    Employer,
    /// Graduate accounts browsing jobs and applying.
    Itian,
}

impl Role {
    /// All roles, in a fixed order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Employer, Self::Itian];

    /// The dashboard path an authenticated user of this role lands on.
    ///
    /// Exhaustive over the closed role set, so adding a role forces a
    /// compile-time decision about its landing page rather than silently
    /// falling through to a default.
    #[must_use]
    pub const fn landing_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Employer => "/employer",
            Self::Itian => "/itian",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Employer => write!(f, "employer"),
            Self::Itian => write!(f, "itian"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "employer" => Ok(Self::Employer),
            "itian" => Ok(Self::Itian),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_display_from_str_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_str(&role.to_string()).unwrap(), role);
        }
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert!(Role::from_str("superuser").is_err());
        assert!(Role::from_str("Admin").is_err());
    }

    #[test]
    fn test_landing_paths() {
        assert_eq!(Role::Admin.landing_path(), "/admin");
        assert_eq!(Role::Employer.landing_path(), "/employer");
        assert_eq!(Role::Itian.landing_path(), "/itian");
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&Role::Employer).unwrap();
        assert_eq!(json, "\"employer\"");
        let back: Role = serde_json::from_str("\"itian\"").unwrap();
        assert_eq!(back, Role::Itian);
    }
}
