//! Route guard
//!
//! A pure decision over `(is_authenticated, role, required roles)`. Callers
//! evaluate it on every navigation and whenever the session changes; nothing
//! here is cached.

use crate::role::RoleSet;
use crate::session::Session;

/// Outcome of guarding a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Render the guarded children
    Allow,
    /// No session: send the user to the login page
    RedirectToLogin,
    /// Session present but its role is not accepted here
    RedirectToUnauthorized,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decides whether `session` may enter a route accepting `required`.
///
/// Authentication is checked before authorization, so an anonymous session
/// is always sent to login whatever role it may still carry.
pub fn authorize(session: &Session, required: RoleSet) -> Decision {
    debug_assert!(!required.is_empty(), "guarded route declared without roles");

    if !session.is_authenticated() {
        return Decision::RedirectToLogin;
    }
    match session.role() {
        Some(role) if required.contains(role) => Decision::Allow,
        _ => {
            log::debug!(
                "authorization denied: role {:?} not in {required}",
                session.role()
            );
            Decision::RedirectToUnauthorized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use rstest::rstest;

    fn session(token: Option<&str>, role: Option<Role>) -> Session {
        Session::from_parts(token.map(str::to_string), role)
    }

    #[rstest]
    #[case(Some(Role::Seller), RoleSet::ADMIN, Decision::RedirectToUnauthorized)]
    #[case(Some(Role::Admin), RoleSet::ADMIN, Decision::Allow)]
    #[case(Some(Role::Seller), RoleSet::SELLER, Decision::Allow)]
    #[case(None, RoleSet::ADMIN, Decision::RedirectToUnauthorized)]
    #[case(Some(Role::Seller), RoleSet::ADMIN.with(Role::Seller), Decision::Allow)]
    fn authenticated_sessions(
        #[case] role: Option<Role>,
        #[case] required: RoleSet,
        #[case] expected: Decision,
    ) {
        assert_eq!(authorize(&session(Some("tok"), role), required), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Role::Admin))]
    #[case(Some(Role::Seller))]
    fn anonymous_always_goes_to_login(#[case] role: Option<Role>) {
        for required in [RoleSet::ADMIN, RoleSet::SELLER, RoleSet::ADMIN.with(Role::Seller)] {
            assert_eq!(
                authorize(&session(None, role), required),
                Decision::RedirectToLogin
            );
        }
    }

    #[test]
    fn decision_depends_only_on_auth_flag_role_and_required_set() {
        // Different tokens, same (authenticated, role): same decision.
        let a = session(Some("token-a"), Some(Role::Admin));
        let b = session(Some("token-b"), Some(Role::Admin));
        for required in [RoleSet::ADMIN, RoleSet::SELLER] {
            assert_eq!(authorize(&a, required), authorize(&b, required));
            assert_eq!(authorize(&a, required), authorize(&a, required));
        }
    }
}
