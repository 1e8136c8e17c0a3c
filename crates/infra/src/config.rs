//! Process configuration, read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `CLEANOPS_BIND_ADDR` | `0.0.0.0:8080` |
//! | `CLEANOPS_ADMIN_TOKENS` | a single dev token, with a warning |
//! | `CLEANOPS_LOG_FORMAT` | `json` |

use std::net::SocketAddr;

use thiserror::Error;
use tracing::warn;

use cleanops_auth::{InMemoryAdminDirectory, PrincipalId, StaticTokens};
use cleanops_observability::LogFormat;

pub const BIND_ADDR_ENV: &str = "CLEANOPS_BIND_ADDR";
pub const ADMIN_TOKENS_ENV: &str = "CLEANOPS_ADMIN_TOKENS";
pub const LOG_FORMAT_ENV: &str = cleanops_observability::logging::LOG_FORMAT_ENV;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEV_ADMIN_TOKEN: &str = "dev-admin-token";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CLEANOPS_BIND_ADDR: invalid bind address '{0}'")]
    BindAddr(String),

    #[error("CLEANOPS_ADMIN_TOKENS: invalid entry '{0}' (expected 'token' or 'token:principal-uuid')")]
    AdminToken(String),

    #[error("CLEANOPS_LOG_FORMAT: {0}")]
    LogFormat(String),
}

/// A bearer token granting admin access, bound to a principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminToken {
    pub token: String,
    pub principal: PrincipalId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub admin_tokens: Vec<AdminToken>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset and blank values take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr = match value(BIND_ADDR_ENV) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::BindAddr(raw.clone()))?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::BindAddr(DEFAULT_BIND_ADDR.to_string()))?,
        };

        let admin_tokens = match value(ADMIN_TOKENS_ENV) {
            Some(raw) => parse_admin_tokens(&raw)?,
            None => {
                warn!("CLEANOPS_ADMIN_TOKENS not set; using insecure dev token");
                vec![AdminToken {
                    token: DEV_ADMIN_TOKEN.to_string(),
                    principal: PrincipalId::new(),
                }]
            }
        };

        let log_format: LogFormat = match value(LOG_FORMAT_ENV) {
            Some(raw) => raw
                .parse()
                .map_err(|e: cleanops_observability::UnknownLogFormat| {
                    ConfigError::LogFormat(e.to_string())
                })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            admin_tokens,
            log_format,
        })
    }

    /// Token table and admin directory for the identity gate.
    pub fn identity(&self) -> (StaticTokens, InMemoryAdminDirectory) {
        let tokens = self
            .admin_tokens
            .iter()
            .fold(StaticTokens::new(), |tokens, t| {
                tokens.with_token(t.token.clone(), t.principal)
            });
        let admins = InMemoryAdminDirectory::new(self.admin_tokens.iter().map(|t| t.principal));
        (tokens, admins)
    }
}

/// Comma-separated `token` or `token:principal-uuid` entries. Tokens without
/// a principal get a fresh one.
fn parse_admin_tokens(raw: &str) -> Result<Vec<AdminToken>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (token, principal) = match entry.split_once(':') {
                Some((token, id)) => {
                    let principal = id
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::AdminToken(entry.to_string()))?;
                    (token.trim(), principal)
                }
                None => (entry, PrincipalId::new()),
            };
            if token.is_empty() {
                return Err(ConfigError::AdminToken(entry.to_string()));
            }
            Ok(AdminToken {
                token: token.to_string(),
                principal,
            })
        })
        .collect()
}
