//! Client cost estimation for cleaning service orders.
//!
//! The engine is a pure function from the priced fields of an order to a total
//! price in whole currency units. It performs no IO, holds no state, and is
//! safe to call from any thread.
//!
//! Two entry points exist for raw (form or JSON) input:
//! - [`quote`] coerces anything malformed to zero / unset and never fails.
//! - [`quote_strict`] surfaces a [`PricingError`] instead.

pub mod catalog;
pub mod count;
pub mod engine;
pub mod error;
pub mod fields;
pub mod rates;
pub mod request;

pub use catalog::{AddOnService, CleaningType, PropertyType};
pub use count::{CountInput, RoomCount};
pub use engine::{breakdown, breakdown_with, price, LineItem, Price, PriceBreakdown, PricingRule};
pub use error::PricingError;
pub use fields::PricedFields;
pub use rates::RateCard;
pub use request::{quote, quote_strict, QuoteRequest, ValidatedQuote};
