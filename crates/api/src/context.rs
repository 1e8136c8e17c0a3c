use cleanops_auth::{Principal, PrincipalId};

/// Principal context for a request (authenticated admin identity).
///
/// Inserted by the auth middleware; present on every protected route.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal_id: PrincipalId,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self {
            principal_id: principal.principal_id,
        }
    }

    pub fn principal_id(&self) -> PrincipalId {
        self.principal_id
    }
}
