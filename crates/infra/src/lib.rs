//! Infrastructure layer: record storage, application services, config.

pub mod config;
pub mod projections;
pub mod record_store;
pub mod service_orders;
pub mod workers;

pub use record_store::{InMemoryRecordStore, RecordStore, StoreError};
pub use service_orders::{OrderBookError, ServiceOrderBook};
pub use workers::{RosterError, WorkerRoster};
