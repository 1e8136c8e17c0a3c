//! Token verification and the admin check.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{Principal, PrincipalId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing or invalid credentials")]
    Unauthenticated,

    #[error("admin access required")]
    NotAdmin,
}

/// `authenticate(token) -> principal`.
pub trait TokenVerifier: Send + Sync {
    fn authenticate(&self, token: &str) -> Result<PrincipalId, AuthError>;
}

/// `is_admin(principal)`. A principal with no admin record is not an admin.
pub trait AdminDirectory: Send + Sync {
    fn is_admin(&self, principal: &PrincipalId) -> bool;
}

/// Opaque bearer tokens mapped to principals, loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticTokens {
    tokens: HashMap<String, PrincipalId>,
}

impl StaticTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, principal: PrincipalId) -> Self {
        self.tokens.insert(token.into(), principal);
        self
    }
}

impl TokenVerifier for StaticTokens {
    fn authenticate(&self, token: &str) -> Result<PrincipalId, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::Unauthenticated);
        }
        self.tokens
            .get(token)
            .copied()
            .ok_or(AuthError::Unauthenticated)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryAdminDirectory {
    admins: HashSet<PrincipalId>,
}

impl InMemoryAdminDirectory {
    pub fn new(admins: impl IntoIterator<Item = PrincipalId>) -> Self {
        Self {
            admins: admins.into_iter().collect(),
        }
    }

    pub fn grant(&mut self, principal: PrincipalId) {
        self.admins.insert(principal);
    }

    pub fn revoke(&mut self, principal: &PrincipalId) {
        self.admins.remove(principal);
    }
}

impl AdminDirectory for InMemoryAdminDirectory {
    fn is_admin(&self, principal: &PrincipalId) -> bool {
        self.admins.contains(principal)
    }
}

/// Verifier + directory. [`IdentityGate::admit`] is the single check every
/// protected operation goes through.
pub struct IdentityGate<V, D> {
    verifier: V,
    directory: D,
}

impl<V: TokenVerifier, D: AdminDirectory> IdentityGate<V, D> {
    pub fn new(verifier: V, directory: D) -> Self {
        Self {
            verifier,
            directory,
        }
    }

    /// Resolve a token without requiring admin rights.
    pub fn resolve(&self, token: &str) -> Result<Principal, AuthError> {
        let principal_id = self.verifier.authenticate(token)?;
        Ok(Principal {
            principal_id,
            is_admin: self.directory.is_admin(&principal_id),
        })
    }

    /// Resolve a token and require an admin principal.
    pub fn admit(&self, token: &str) -> Result<Principal, AuthError> {
        let principal = self.resolve(token)?;
        if principal.is_admin {
            Ok(principal)
        } else {
            Err(AuthError::NotAdmin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> (IdentityGate<StaticTokens, InMemoryAdminDirectory>, PrincipalId, PrincipalId) {
        let admin = PrincipalId::new();
        let staff = PrincipalId::new();
        let tokens = StaticTokens::new()
            .with_token("admin-token", admin)
            .with_token("staff-token", staff);
        (
            IdentityGate::new(tokens, InMemoryAdminDirectory::new([admin])),
            admin,
            staff,
        )
    }

    #[test]
    fn admin_token_is_admitted() {
        let (gate, admin, _) = gate();
        let principal = gate.admit("admin-token").unwrap();
        assert_eq!(principal.principal_id, admin);
        assert!(principal.is_admin);
    }

    #[test]
    fn unknown_or_blank_token_is_unauthenticated() {
        let (gate, _, _) = gate();
        assert_eq!(gate.admit("nope"), Err(AuthError::Unauthenticated));
        assert_eq!(gate.admit("  "), Err(AuthError::Unauthenticated));
    }

    #[test]
    fn non_admin_is_rejected_after_authentication() {
        let (gate, _, staff) = gate();
        assert_eq!(gate.resolve("staff-token").unwrap().principal_id, staff);
        assert_eq!(gate.admit("staff-token"), Err(AuthError::NotAdmin));
    }

    #[test]
    fn revoked_admin_loses_access() {
        let admin = PrincipalId::new();
        let mut directory = InMemoryAdminDirectory::new([admin]);
        directory.revoke(&admin);
        assert!(!directory.is_admin(&admin));
        directory.grant(admin);
        assert!(directory.is_admin(&admin));
    }
}
