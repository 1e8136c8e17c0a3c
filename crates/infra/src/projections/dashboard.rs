//! Back-office dashboard figures.
//!
//! Computed on demand from the full order and worker lists; nothing is
//! cached, so the figures cannot drift from the records.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::NaiveDate;
use serde::Serialize;

use cleanops_orders::{JobStatus, ServiceOrder};
use cleanops_pricing::{CleaningType, Price};
use cleanops_workforce::{Worker, WorkerId};

const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueShare {
    pub label: String,
    /// Set on per-worker shares; two workers may share a display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<WorkerId>,
    pub orders: u32,
    pub revenue: Price,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub as_of: NaiveDate,
    pub bookings_today: u32,
    pub upcoming_bookings: u32,
    pub pending: u32,
    pub in_progress: u32,
    pub completed: u32,
    pub quoted_revenue: Price,
    pub completed_revenue: Price,
    pub active_workers: u32,
    pub suspended_workers: u32,
    pub revenue_by_cleaning_type: Vec<RevenueShare>,
    pub revenue_by_worker: Vec<RevenueShare>,
}

impl DashboardSummary {
    pub fn compute(orders: &[ServiceOrder], workers: &[Worker], today: NaiveDate) -> Self {
        let names: HashMap<WorkerId, &str> =
            workers.iter().map(|w| (w.id_typed(), w.name())).collect();

        let mut summary = DashboardSummary {
            as_of: today,
            bookings_today: 0,
            upcoming_bookings: 0,
            pending: 0,
            in_progress: 0,
            completed: 0,
            quoted_revenue: Price::ZERO,
            completed_revenue: Price::ZERO,
            active_workers: 0,
            suspended_workers: 0,
            revenue_by_cleaning_type: Vec::new(),
            revenue_by_worker: Vec::new(),
        };
        let mut by_type: HashMap<Option<CleaningType>, (u32, Price)> = HashMap::new();
        let mut by_worker: HashMap<Option<WorkerId>, (u32, Price)> = HashMap::new();

        for order in orders {
            let details = order.details();
            let cost = order.cost();

            if order.created_at().date_naive() == today {
                summary.bookings_today += 1;
            }
            let done = details.status == Some(JobStatus::Completed);
            if !done && details.deadline.is_some_and(|d| d >= today) {
                summary.upcoming_bookings += 1;
            }
            match details.status {
                Some(JobStatus::Pending) => summary.pending += 1,
                Some(JobStatus::InProgress) => summary.in_progress += 1,
                Some(JobStatus::Completed) => summary.completed += 1,
                None => {}
            }

            summary.quoted_revenue = summary.quoted_revenue + cost;
            if done {
                summary.completed_revenue = summary.completed_revenue + cost;
            }

            add(&mut by_type, order.fields().cleaning_type, cost);
            add(&mut by_worker, details.assigned_worker_id, cost);
        }

        for worker in workers {
            if worker.is_active() {
                summary.active_workers += 1;
            } else {
                summary.suspended_workers += 1;
            }
        }

        summary.revenue_by_cleaning_type = top(by_type, |ty| {
            (ty.map_or("Unspecified", |c| c.label()).to_string(), None)
        });
        summary.revenue_by_worker = top(by_worker, |id| match id {
            None => ("Unassigned".to_string(), None),
            Some(id) => {
                let label = names
                    .get(&id)
                    .map_or_else(|| id.to_string(), |name| name.to_string());
                (label, Some(id))
            }
        });
        summary
    }
}

fn add<K: Hash + Eq>(groups: &mut HashMap<K, (u32, Price)>, key: K, cost: Price) {
    let entry = groups.entry(key).or_insert((0, Price::ZERO));
    entry.0 += 1;
    entry.1 = entry.1 + cost;
}

/// Highest revenue first, ties by label.
fn top<K>(
    groups: HashMap<K, (u32, Price)>,
    describe: impl Fn(K) -> (String, Option<WorkerId>),
) -> Vec<RevenueShare> {
    let mut shares: Vec<RevenueShare> = groups
        .into_iter()
        .map(|(key, (orders, revenue))| {
            let (label, worker_id) = describe(key);
            RevenueShare {
                label,
                worker_id,
                orders,
                revenue,
            }
        })
        .collect();
    shares.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then_with(|| a.label.cmp(&b.label))
            .then_with(|| a.worker_id.cmp(&b.worker_id))
    });
    shares.truncate(TOP_N);
    shares
}
