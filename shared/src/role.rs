//! Roles and role sets

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role carried by an authenticated session
///
/// A session without a role is modelled as `Option<Role>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Seller];

    /// Storage and wire form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Seller => "seller",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Role::Admin => 0b01,
            Role::Seller => 0b10,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role {:?}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "seller" => Ok(Role::Seller),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

// =========================================================
// RoleSet
// =========================================================

/// Non-empty set of roles accepted by a guarded route
///
/// There is no way to build an empty set: the `const` constructors always
/// carry a role and [`RoleSet::try_from_roles`] rejects an empty slice with
/// [`ConfigurationError::EmptyRoleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const ADMIN: RoleSet = RoleSet::only(Role::Admin);
    pub const SELLER: RoleSet = RoleSet::only(Role::Seller);

    pub const fn only(role: Role) -> Self {
        Self(role.bit())
    }

    pub const fn with(self, role: Role) -> Self {
        Self(self.0 | role.bit())
    }

    pub fn try_from_roles(roles: &[Role]) -> Result<Self, ConfigurationError> {
        let bits = roles.iter().fold(0u8, |acc, r| acc | r.bit());
        if bits == 0 {
            Err(ConfigurationError::EmptyRoleSet)
        } else {
            Ok(Self(bits))
        }
    }

    #[inline]
    pub const fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|r| self.contains(*r))
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|r| r.as_str()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_form() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("seller".parse::<Role>(), Ok(Role::Seller));
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"seller\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn empty_role_set_is_a_configuration_error() {
        assert_eq!(
            RoleSet::try_from_roles(&[]),
            Err(ConfigurationError::EmptyRoleSet)
        );
    }

    #[test]
    fn membership() {
        let both = RoleSet::ADMIN.with(Role::Seller);
        assert!(both.contains(Role::Admin) && both.contains(Role::Seller));
        assert!(!RoleSet::SELLER.contains(Role::Admin));
        assert_eq!(RoleSet::try_from_roles(&[Role::Seller, Role::Seller]), Ok(RoleSet::SELLER));
        assert_eq!(both.to_string(), "{admin, seller}");
    }
}
