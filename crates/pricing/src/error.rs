//! Errors raised by the validating pricing path.
//!
//! The lenient path ([`crate::quote`], [`crate::price`]) never produces these.

use cleanops_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("{field}: count must not be negative (got {value})")]
    NegativeCount { field: &'static str, value: String },

    #[error("{field}: count must be a finite number")]
    NonFiniteCount { field: &'static str },

    #[error("{field}: count must be a whole number (got {value})")]
    FractionalCount { field: &'static str, value: String },

    #[error("{field}: '{value}' is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("{field}: count {value} is too large")]
    CountTooLarge { field: &'static str, value: String },

    #[error("unknown cleaning type '{0}'")]
    UnknownCleaningType(String),

    #[error("unknown property type '{0}'")]
    UnknownPropertyType(String),

    #[error("unknown service '{0}'")]
    UnknownService(String),
}

impl From<PricingError> for DomainError {
    fn from(err: PricingError) -> Self {
        DomainError::validation(err.to_string())
    }
}
