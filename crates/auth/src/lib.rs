//! `cleanops-auth`: the identity gate in front of the back office.
//!
//! Decoupled from HTTP and storage. A bearer token is resolved to a
//! [`Principal`]; only admin principals are admitted.

pub mod gate;
pub mod principal;

pub use gate::{AdminDirectory, AuthError, IdentityGate, InMemoryAdminDirectory, StaticTokens, TokenVerifier};
pub use principal::{Principal, PrincipalId};
