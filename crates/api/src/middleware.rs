use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use cleanops_auth::{AuthError, IdentityGate, InMemoryAdminDirectory, StaticTokens};

use crate::app::errors::json_error;
use crate::context::PrincipalContext;

pub type Gate = IdentityGate<StaticTokens, InMemoryAdminDirectory>;

#[derive(Clone)]
pub struct AuthState {
    pub gate: Arc<Gate>,
}

/// Bearer token in, admin [`PrincipalContext`] out.
///
/// 401 when the credential is missing or unknown, 403 when it belongs to a
/// principal without admin rights.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer(req.headers()) else {
        return unauthenticated();
    };

    let principal = match state.gate.admit(token) {
        Ok(p) => p,
        Err(AuthError::Unauthenticated) => return unauthenticated(),
        Err(AuthError::NotAdmin) => {
            tracing::warn!("non-admin principal rejected");
            return json_error(StatusCode::FORBIDDEN, "forbidden", AuthError::NotAdmin.to_string());
        }
    };

    req.extensions_mut().insert(PrincipalContext::new(principal));
    next.run(req).await
}

fn unauthenticated() -> Response {
    json_error(
        StatusCode::UNAUTHORIZED,
        "unauthorized",
        AuthError::Unauthenticated.to_string(),
    )
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
