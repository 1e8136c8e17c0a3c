use serde::{Deserialize, Serialize};

use cleanops_orders::{
    CleaningFrequency, ClientDetails, JobStatus, NewServiceOrder, Priority, ServiceOrder,
    SuperficialArea,
};
use cleanops_pricing::{
    AddOnService, CleaningType, LineItem, Price, PriceBreakdown, PricingError, PricingRule,
    PropertyType, QuoteRequest,
};
use cleanops_core::Weekday;
use cleanops_workforce::{time_options, WeeklyAvailability, Worker, WorkerProfile};

// -------------------------
// Request DTOs
// -------------------------

/// `POST /orders`: client details plus the raw priced fields.
///
/// Priced fields are validated strictly; any `cost` sent by the client is
/// ignored.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(flatten)]
    pub details: ClientDetails,
    #[serde(flatten)]
    pub quote: QuoteRequest,
}

impl CreateOrderRequest {
    pub fn into_new_order(self) -> Result<NewServiceOrder, PricingError> {
        let validated = self.quote.validate()?;
        Ok(NewServiceOrder {
            details: self.details,
            property_type: validated.property_type,
            fields: validated.fields,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteParams {
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterWorkerRequest {
    #[serde(flatten)]
    pub profile: WorkerProfile,
    #[serde(default)]
    pub availability: WeeklyAvailability,
}

// -------------------------
// Response DTOs
// -------------------------

/// One charged rule of a quote, labelled for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub rule: PricingRule,
    pub label: &'static str,
    pub quantity: u64,
    pub unit_amount: u64,
    pub amount: Price,
}

impl From<&LineItem> for QuoteLine {
    fn from(line: &LineItem) -> Self {
        Self {
            rule: line.rule,
            label: line.rule.label(),
            quantity: line.quantity,
            unit_amount: line.unit_amount,
            amount: line.amount,
        }
    }
}

/// `POST /quote`: the total and the rules that contributed to it.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub cost: Price,
    pub lines: Vec<QuoteLine>,
}

impl From<PriceBreakdown> for QuoteResponse {
    fn from(breakdown: PriceBreakdown) -> Self {
        Self {
            cost: breakdown.total,
            lines: breakdown.charged().map(QuoteLine::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerView<'a> {
    #[serde(flatten)]
    pub worker: &'a Worker,
    pub availability_summary: Vec<String>,
}

pub fn worker_view(worker: &Worker) -> WorkerView<'_> {
    WorkerView {
        worker,
        availability_summary: worker.availability().summary(),
    }
}

#[derive(Debug, Serialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

pub fn order_items(orders: &[ServiceOrder]) -> Items<&ServiceOrder> {
    Items {
        items: orders.iter().collect(),
    }
}

fn labels<T: Copy>(all: &[T], label: fn(T) -> &'static str) -> Vec<&'static str> {
    all.iter().copied().map(label).collect()
}

/// Option lists for the order and worker forms.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub services: Vec<&'static str>,
    pub cleaning_types: Vec<&'static str>,
    pub property_types: Vec<&'static str>,
    pub frequencies: Vec<&'static str>,
    pub superficial_areas: Vec<&'static str>,
    pub priorities: Vec<&'static str>,
    pub statuses: Vec<&'static str>,
    pub weekdays: Vec<&'static str>,
    pub time_options: Vec<String>,
}

impl Catalog {
    pub fn current() -> Self {
        Self {
            services: labels(AddOnService::ALL, AddOnService::label),
            cleaning_types: labels(CleaningType::ALL, CleaningType::label),
            property_types: labels(PropertyType::ALL, PropertyType::label),
            frequencies: labels(CleaningFrequency::ALL, CleaningFrequency::label),
            superficial_areas: labels(SuperficialArea::ALL, SuperficialArea::label),
            priorities: labels(Priority::ALL, Priority::label),
            statuses: labels(JobStatus::ALL, JobStatus::label),
            weekdays: labels(Weekday::ALL, Weekday::label),
            time_options: time_options(),
        }
    }
}
