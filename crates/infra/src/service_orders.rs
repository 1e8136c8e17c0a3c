//! Order book: the application service behind the client order screens.
//!
//! Every write path reprices before the record is persisted: creation goes
//! through [`NewServiceOrder::into_document`], edits through [`OrderEditor`].
//! Reads recompute the cost of each stored record and log stale values.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use cleanops_core::DomainError;
use cleanops_orders::{
    CostCheck, NewServiceOrder, OrderEditor, ServiceOrder, ServiceOrderDocument, ServiceOrderId,
    ServiceOrderPatch,
};
use cleanops_pricing::{breakdown, PriceBreakdown, PricingError, QuoteRequest};
use cleanops_workforce::{WorkerDocument, WorkerId};

use crate::record_store::{RecordStore, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    #[error("service order {0} not found")]
    NotFound(ServiceOrderId),

    #[error("unknown worker {0}")]
    UnknownWorker(WorkerId),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ServiceOrderBook<O, W> {
    orders: O,
    workers: W,
}

impl<O, W> ServiceOrderBook<O, W>
where
    O: RecordStore<ServiceOrderId, ServiceOrderDocument>,
    W: RecordStore<WorkerId, WorkerDocument>,
{
    pub fn new(orders: O, workers: W) -> Self {
        Self { orders, workers }
    }

    /// Price a raw request without storing anything.
    ///
    /// `strict = false` coerces malformed input; `strict = true` rejects it.
    pub fn quote(&self, request: &QuoteRequest, strict: bool) -> Result<PriceBreakdown, OrderBookError> {
        let fields = if strict {
            request.validate()?.fields
        } else {
            request.to_fields()
        };
        let priced = breakdown(&fields);
        debug!(strict, total = %priced.total, "quote computed");
        Ok(priced)
    }

    pub async fn create(&self, new: NewServiceOrder) -> Result<ServiceOrder, OrderBookError> {
        self.create_at(new, Utc::now()).await
    }

    #[instrument(skip_all, err)]
    pub async fn create_at(
        &self,
        new: NewServiceOrder,
        now: DateTime<Utc>,
    ) -> Result<ServiceOrder, OrderBookError> {
        if let Some(worker) = new.details.assigned_worker_id {
            self.ensure_worker(worker).await?;
        }

        let doc = new.into_document(now);
        let id = self.orders.create(doc.clone()).await?;
        let (order, _) = ServiceOrder::from_document(id, doc)?;

        info!(order_id = %id, cost = %order.cost(), "service order created");
        Ok(order)
    }

    /// All orders, oldest first.
    pub async fn list(&self) -> Result<Vec<ServiceOrder>, OrderBookError> {
        let records = self.orders.list().await?;
        let mut orders = Vec::with_capacity(records.len());
        for (id, doc) in records {
            match ServiceOrder::from_document(id, doc) {
                Ok((order, check)) => {
                    log_stale(id, &check);
                    orders.push(order);
                }
                Err(e) => warn!(order_id = %id, error = %e, "skipping unreadable service order"),
            }
        }
        orders.sort_by_key(|o| (o.created_at(), o.id_typed()));
        Ok(orders)
    }

    pub async fn get(&self, id: ServiceOrderId) -> Result<ServiceOrder, OrderBookError> {
        self.load(id).await.map(|(order, _)| order)
    }

    /// Apply a partial update and persist the repriced order.
    #[instrument(skip(self, patch), fields(order_id = %id), err)]
    pub async fn update(
        &self,
        id: ServiceOrderId,
        patch: ServiceOrderPatch,
    ) -> Result<ServiceOrder, OrderBookError> {
        let edits = patch.priced_edits()?;
        if let Some(Some(worker)) = patch.details.assigned_worker_id {
            self.ensure_worker(worker).await?;
        }

        let (current, check) = self.load(id).await?;
        let mut editor = OrderEditor::open(current);
        let previous = editor.cost();
        for edit in edits {
            editor.edit(edit);
        }
        editor.update_details(patch.details);

        if !editor.is_dirty() && !check.is_stale() {
            debug!("no changes to persist");
            return Ok(editor.cancel());
        }

        let order = editor.save();
        self.orders
            .update(&id, ServiceOrderDocument::from(&order))
            .await
            .map_err(|e| not_found_as(id, e))?;

        info!(previous = %previous, cost = %order.cost(), "service order updated");
        Ok(order)
    }

    #[instrument(skip(self), fields(order_id = %id), err)]
    pub async fn delete(&self, id: ServiceOrderId) -> Result<(), OrderBookError> {
        self.orders
            .delete(&id)
            .await
            .map_err(|e| not_found_as(id, e))?;
        info!("service order deleted");
        Ok(())
    }

    /// Read one record, recomputing its cost.
    async fn load(&self, id: ServiceOrderId) -> Result<(ServiceOrder, CostCheck), OrderBookError> {
        let doc = self
            .orders
            .get(&id)
            .await?
            .ok_or(OrderBookError::NotFound(id))?;
        let (order, check) = ServiceOrder::from_document(id, doc)?;
        log_stale(id, &check);
        Ok((order, check))
    }

    async fn ensure_worker(&self, id: WorkerId) -> Result<(), OrderBookError> {
        match self.workers.get(&id).await? {
            Some(_) => Ok(()),
            None => Err(OrderBookError::UnknownWorker(id)),
        }
    }
}

fn not_found_as(id: ServiceOrderId, err: StoreError) -> OrderBookError {
    match err {
        StoreError::NotFound => OrderBookError::NotFound(id),
        other => other.into(),
    }
}

fn log_stale(id: ServiceOrderId, check: &CostCheck) {
    if let CostCheck::Stale { stored, recomputed } = check {
        warn!(order_id = %id, stored = %stored, recomputed = %recomputed, "stored cost is stale");
    }
}
