//! Read models computed from the current orders and workers.

pub mod dashboard;

pub use dashboard::{DashboardSummary, RevenueShare};
