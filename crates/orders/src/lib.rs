//! Client service orders.
//!
//! A service order carries the client's contact details, the priced fields of
//! the requested job, and a cached `cost`. The cost has a single writer: every
//! constructor and every priced edit recomputes it through
//! [`cleanops_pricing::price`], so the cached value can never drift from the
//! fields it was derived from.
//!
//! Two form flows share that writer:
//! - [`OrderDraft`] for creating a new order,
//! - [`OrderEditor`] for editing a stored one.

pub mod details;
pub mod document;
pub mod draft;
pub mod edit;
pub mod editor;
pub mod options;
pub mod order;

pub use details::{ClientDetails, DetailsPatch};
pub use document::{CostCheck, ServiceOrderDocument};
pub use draft::OrderDraft;
pub use edit::{OrderEdit, Repriced, ServiceOrderPatch};
pub use editor::OrderEditor;
pub use options::{CleaningFrequency, JobStatus, Priority, SuperficialArea};
pub use order::{NewServiceOrder, ServiceOrder, ServiceOrderId};
