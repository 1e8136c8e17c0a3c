//! The persisted shape of a service order.
//!
//! Stored records use flat camelCase keys, empty strings for unset options,
//! string-typed room counts and a string `cost`. Loading never trusts the
//! stored cost: it is recomputed from the priced fields and compared.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use cleanops_core::{DomainError, DomainResult};
use cleanops_pricing::{
    price, AddOnService, CleaningType, Price, PricedFields, PropertyType, RoomCount,
};

use crate::details::ClientDetails;
use crate::order::{NewServiceOrder, ServiceOrder, ServiceOrderId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceOrderDocument {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub title: String,
    pub assigned_worker_id: String,
    pub cleaning_type: String,
    pub cleaning_frequency: String,
    pub selected_services: Vec<String>,
    pub property_type: String,
    pub superficial_area: String,
    pub number_of_kitchens: RoomCount,
    pub number_of_rooms: RoomCount,
    pub number_of_living_rooms: RoomCount,
    pub number_of_bathrooms: RoomCount,
    pub number_of_walls: u32,
    pub number_of_windows: u32,
    pub number_of_balcony: u32,
    pub laundry_loads: u32,
    pub cost: String,
    pub created_at: String,
    pub deadline: String,
    pub preferred_day: String,
    pub priority: String,
    pub status: String,
}

/// Outcome of comparing a stored cost with the recomputed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostCheck {
    Current,
    Stale { stored: String, recomputed: Price },
}

impl CostCheck {
    pub fn is_stale(&self) -> bool {
        matches!(self, CostCheck::Stale { .. })
    }
}

fn label<T: core::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Unknown or blank labels load as unset.
fn option<T: core::str::FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

impl ServiceOrderDocument {
    fn compose(
        d: &ClientDetails,
        property_type: Option<PropertyType>,
        f: &PricedFields,
        cost: Price,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: d.name.clone(),
            email: d.email.clone(),
            phone: d.phone.clone(),
            address: d.address.clone(),
            title: d.title.clone(),
            assigned_worker_id: label(d.assigned_worker_id),
            cleaning_type: label(f.cleaning_type),
            cleaning_frequency: label(d.cleaning_frequency),
            selected_services: f
                .selected_services
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
            property_type: label(property_type),
            superficial_area: label(d.superficial_area),
            number_of_kitchens: f.number_of_kitchens.clone(),
            number_of_rooms: f.number_of_rooms.clone(),
            number_of_living_rooms: f.number_of_living_rooms.clone(),
            number_of_bathrooms: f.number_of_bathrooms.clone(),
            number_of_walls: f.number_of_walls,
            number_of_windows: f.number_of_windows,
            number_of_balcony: f.number_of_balcony,
            laundry_loads: f.laundry_loads,
            cost: cost.to_string(),
            created_at: created_at.to_rfc3339(),
            deadline: label(d.deadline),
            preferred_day: label(d.preferred_day),
            priority: label(d.priority),
            status: label(d.status),
        }
    }
}

impl From<&ServiceOrder> for ServiceOrderDocument {
    fn from(order: &ServiceOrder) -> Self {
        Self::compose(
            order.details(),
            order.property_type(),
            order.fields(),
            order.cost(),
            order.created_at(),
        )
    }
}

impl NewServiceOrder {
    /// The first persisted version of a new order, priced on the way in.
    /// Stores assign the id, so the document is built before the order.
    pub fn into_document(self, created_at: DateTime<Utc>) -> ServiceOrderDocument {
        let cost = price(&self.fields);
        ServiceOrderDocument::compose(
            &self.details,
            self.property_type,
            &self.fields,
            cost,
            created_at,
        )
    }
}

impl ServiceOrder {
    /// Rebuild an order from a stored document.
    ///
    /// Option labels are read leniently, the same way the pricing engine reads
    /// raw input. A malformed worker reference or creation timestamp is an
    /// error.
    pub fn from_document(
        id: ServiceOrderId,
        doc: ServiceOrderDocument,
    ) -> DomainResult<(ServiceOrder, CostCheck)> {
        let assigned_worker_id = match doc.assigned_worker_id.trim() {
            "" => None,
            raw => Some(raw.parse()?),
        };
        let created_at = DateTime::parse_from_rfc3339(doc.created_at.trim())
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| DomainError::validation(format!("createdAt: {e}")))?;

        let details = ClientDetails {
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            address: doc.address,
            title: doc.title,
            assigned_worker_id,
            cleaning_frequency: option(&doc.cleaning_frequency),
            superficial_area: option(&doc.superficial_area),
            deadline: doc.deadline.trim().parse::<NaiveDate>().ok(),
            preferred_day: option(&doc.preferred_day),
            priority: option(&doc.priority),
            status: option(&doc.status),
        };
        let fields = PricedFields {
            cleaning_type: CleaningType::parse_lenient(&doc.cleaning_type),
            selected_services: doc
                .selected_services
                .iter()
                .filter_map(|s| s.parse::<AddOnService>().ok())
                .collect(),
            number_of_rooms: doc.number_of_rooms,
            number_of_bathrooms: doc.number_of_bathrooms,
            number_of_kitchens: doc.number_of_kitchens,
            number_of_living_rooms: doc.number_of_living_rooms,
            number_of_walls: doc.number_of_walls,
            number_of_windows: doc.number_of_windows,
            number_of_balcony: doc.number_of_balcony,
            laundry_loads: doc.laundry_loads,
        };

        let order = ServiceOrder::create(
            id,
            NewServiceOrder {
                details,
                property_type: option(&doc.property_type),
                fields,
            },
            created_at,
        );

        let check = match Price::from_stored(&doc.cost) {
            Some(stored) if stored == order.cost() => CostCheck::Current,
            _ => CostCheck::Stale {
                stored: doc.cost,
                recomputed: order.cost(),
            },
        };
        Ok((order, check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::OrderEdit;
    use crate::options::{JobStatus, Priority};
    use cleanops_core::{RecordId, Weekday};
    use cleanops_workforce::WorkerId;

    fn id() -> ServiceOrderId {
        ServiceOrderId::new(RecordId::new())
    }

    fn stored_json() -> &'static str {
        r#"{
            "name": "Camille Roy",
            "email": "camille@example.com",
            "phone": "438-555-0199",
            "address": "5 Av. du Parc",
            "assignedWorkerId": "",
            "cleaningType": "Standard Cleaning",
            "cleaningFrequency": "Biweekly",
            "selectedServices": ["Inside the Oven", "Walls"],
            "propertyType": "House",
            "superficialArea": "1000-1500 ft²",
            "numberOfKitchens": "1",
            "numberOfRooms": "3",
            "numberOfLivingRooms": "",
            "numberOfBathrooms": "2",
            "numberOfWalls": 0,
            "numberOfWindows": 2,
            "numberOfBalcony": 0,
            "laundryLoads": 0,
            "cost": "470",
            "createdAt": "2026-10-01T14:30:00.000Z",
            "deadline": "2026-10-20",
            "preferredDay": "Friday",
            "priority": "High",
            "status": "Pending",
            "title": "Move-out"
        }"#
    }

    #[test]
    fn loads_a_stored_record() {
        let doc: ServiceOrderDocument = serde_json::from_str(stored_json()).unwrap();
        let (order, check) = ServiceOrder::from_document(id(), doc).unwrap();

        // 50 + 150 + 5*25 + 40 + 25 + 2*15
        assert_eq!(order.cost(), Price::new(420));
        assert_eq!(
            check,
            CostCheck::Stale {
                stored: "470".into(),
                recomputed: Price::new(420)
            }
        );
        assert_eq!(order.property_type(), Some(PropertyType::House));
        assert_eq!(order.details().priority, Some(Priority::High));
        assert_eq!(order.details().status, Some(JobStatus::Pending));
        assert_eq!(order.details().preferred_day, Some(Weekday::Friday));
        assert_eq!(order.details().assigned_worker_id, None);
    }

    #[test]
    fn reload_keeps_the_cost_and_shape() {
        let mut order = ServiceOrder::create(id(), NewServiceOrder::default(), Utc::now());
        order.apply(OrderEdit::CleaningType(Some(CleaningType::Deep)));
        order.apply(OrderEdit::Service {
            service: AddOnService::GarageFloor,
            selected: true,
        });
        order.update_details(crate::DetailsPatch {
            assigned_worker_id: Some(Some(WorkerId::new(RecordId::new()))),
            ..Default::default()
        });

        let doc = ServiceOrderDocument::from(&order);
        assert_eq!(doc.cost, "445");
        assert_eq!(doc.cleaning_type, "Deep Cleaning");
        assert_eq!(doc.priority, "");

        let json = serde_json::to_string(&doc).unwrap();
        let back: ServiceOrderDocument = serde_json::from_str(&json).unwrap();
        let (reloaded, check) = ServiceOrder::from_document(order.id_typed(), back).unwrap();

        assert_eq!(check, CostCheck::Current);
        assert_eq!(reloaded.cost(), order.cost());
        assert_eq!(reloaded.details(), order.details());
    }

    #[test]
    fn empty_stored_cost_is_stale() {
        let doc = ServiceOrderDocument {
            created_at: "2026-10-01T00:00:00Z".into(),
            ..Default::default()
        };
        let (order, check) = ServiceOrder::from_document(id(), doc).unwrap();
        assert_eq!(order.cost(), Price::new(50));
        assert!(check.is_stale());
    }

    #[test]
    fn unknown_labels_load_as_unset() {
        let doc = ServiceOrderDocument {
            cleaning_type: "Sparkle".into(),
            priority: "Urgent".into(),
            selected_services: vec!["Pool".into()],
            created_at: "2026-10-01T00:00:00Z".into(),
            cost: "50".into(),
            ..Default::default()
        };
        let (order, check) = ServiceOrder::from_document(id(), doc).unwrap();
        assert_eq!(order.fields().cleaning_type, None);
        assert_eq!(order.details().priority, None);
        assert!(order.fields().selected_services.is_empty());
        assert_eq!(check, CostCheck::Current);
    }

    #[test]
    fn new_order_document_reloads_as_current() {
        let mut fields = PricedFields::default();
        fields.number_of_walls = 3;
        let doc = NewServiceOrder {
            fields,
            ..NewServiceOrder::default()
        }
        .into_document(Utc::now());
        assert_eq!(doc.cost, "95");

        let (order, check) = ServiceOrder::from_document(id(), doc).unwrap();
        assert_eq!(check, CostCheck::Current);
        assert_eq!(order.cost(), Price::new(95));
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let doc = ServiceOrderDocument {
            created_at: "yesterday".into(),
            ..Default::default()
        };
        assert!(ServiceOrder::from_document(id(), doc).is_err());
    }
}
