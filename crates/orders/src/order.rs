//! The service order aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cleanops_core::{DomainError, Entity, RecordId};
use cleanops_pricing::{price, Price, PricedFields, PropertyType};

use crate::details::{ClientDetails, DetailsPatch};
use crate::edit::{OrderEdit, Repriced};

/// Service order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceOrderId(pub RecordId);

impl ServiceOrderId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl From<RecordId> for ServiceOrderId {
    fn from(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ServiceOrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ServiceOrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ServiceOrderId)
    }
}

/// Everything needed to open an order; the cost is derived, never supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewServiceOrder {
    pub details: ClientDetails,
    pub property_type: Option<PropertyType>,
    pub fields: PricedFields,
}

/// A client's cleaning order.
///
/// Invariant: `cost == price(fields)`. Fields are private and every mutator
/// that touches a rule input reprices before returning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    id: ServiceOrderId,
    #[serde(flatten)]
    details: ClientDetails,
    property_type: Option<PropertyType>,
    #[serde(flatten)]
    fields: PricedFields,
    cost: Price,
    created_at: DateTime<Utc>,
}

impl Entity for ServiceOrder {
    type Id = ServiceOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ServiceOrder {
    pub fn create(id: ServiceOrderId, new: NewServiceOrder, created_at: DateTime<Utc>) -> Self {
        let cost = price(&new.fields);
        Self {
            id,
            details: new.details,
            property_type: new.property_type,
            fields: new.fields,
            cost,
            created_at,
        }
    }

    /// Apply one priced edit and reprice.
    pub fn apply(&mut self, edit: OrderEdit) -> Repriced {
        self.apply_all(std::iter::once(edit))
    }

    /// Apply a batch of priced edits with a single repricing pass.
    pub fn apply_all(&mut self, edits: impl IntoIterator<Item = OrderEdit>) -> Repriced {
        let previous = self.cost;
        for edit in edits {
            edit.apply_to(&mut self.property_type, &mut self.fields);
        }
        self.cost = price(&self.fields);
        Repriced {
            previous,
            current: self.cost,
        }
    }

    /// Details carry no rule inputs, so the cost is untouched.
    pub fn update_details(&mut self, patch: DetailsPatch) {
        patch.apply_to(&mut self.details);
    }

    pub fn id_typed(&self) -> ServiceOrderId {
        self.id
    }

    pub fn details(&self) -> &ClientDetails {
        &self.details
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        self.property_type
    }

    pub fn fields(&self) -> &PricedFields {
        &self.fields
    }

    pub fn cost(&self) -> Price {
        self.cost
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
