//! `cleanops-core`: shared domain building blocks.
//!
//! Pure types only: identifiers, the domain error model, and a few value objects
//! used by more than one domain crate. No IO lives here.

pub mod entity;
pub mod error;
pub mod id;
pub mod labels;
pub mod value_object;
pub mod weekday;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use value_object::ValueObject;
pub use weekday::Weekday;
