use std::sync::Arc;

use cleanops_infra::{InMemoryRecordStore, ServiceOrderBook, WorkerRoster};
use cleanops_orders::{ServiceOrderDocument, ServiceOrderId};
use cleanops_workforce::{WorkerDocument, WorkerId};

pub type OrderStore = Arc<InMemoryRecordStore<ServiceOrderId, ServiceOrderDocument>>;
pub type WorkerStore = Arc<InMemoryRecordStore<WorkerId, WorkerDocument>>;

/// Services shared by every handler.
///
/// The order book and the roster share the worker store so assignments can
/// be checked against the roster.
pub struct AppServices {
    pub orders: ServiceOrderBook<OrderStore, WorkerStore>,
    pub workers: WorkerRoster<WorkerStore>,
}

pub fn build_services() -> AppServices {
    let orders: OrderStore = Arc::new(InMemoryRecordStore::new());
    let workers: WorkerStore = Arc::new(InMemoryRecordStore::new());

    AppServices {
        orders: ServiceOrderBook::new(orders, workers.clone()),
        workers: WorkerRoster::new(workers),
    }
}
