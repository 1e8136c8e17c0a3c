//! The priced subset of a service order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use cleanops_core::ValueObject;

use crate::catalog::{AddOnService, CleaningType};
use crate::count::RoomCount;

/// Every input of the pricing rule table, and nothing else.
///
/// Field names follow the stored document (`numberOfRooms`, `numberOfBalcony`,
/// `laundryLoads`, ...). The default value is a fresh order: all counts zero,
/// no cleaning type, no add-ons.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricedFields {
    pub cleaning_type: Option<CleaningType>,
    pub selected_services: BTreeSet<AddOnService>,
    pub number_of_rooms: RoomCount,
    pub number_of_bathrooms: RoomCount,
    pub number_of_kitchens: RoomCount,
    pub number_of_living_rooms: RoomCount,
    pub number_of_walls: u32,
    pub number_of_windows: u32,
    pub number_of_balcony: u32,
    pub laundry_loads: u32,
}

impl ValueObject for PricedFields {}

impl PricedFields {
    pub fn has_service(&self, service: AddOnService) -> bool {
        self.selected_services.contains(&service)
    }

    /// Set or clear one add-on. Returns whether membership changed.
    pub fn set_service(&mut self, service: AddOnService, selected: bool) -> bool {
        if selected {
            self.selected_services.insert(service)
        } else {
            self.selected_services.remove(&service)
        }
    }

    pub fn rooms(&self) -> u32 {
        self.number_of_rooms.value()
    }

    pub fn bathrooms(&self) -> u32 {
        self.number_of_bathrooms.value()
    }

    pub fn kitchens(&self) -> u32 {
        self.number_of_kitchens.value()
    }

    pub fn living_rooms(&self) -> u32 {
        self.number_of_living_rooms.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_an_empty_order() {
        let fields = PricedFields::default();
        assert_eq!(fields.cleaning_type, None);
        assert!(fields.selected_services.is_empty());
        assert_eq!(fields.rooms() + fields.bathrooms() + fields.kitchens(), 0);
        assert_eq!(fields.laundry_loads, 0);
    }

    #[test]
    fn set_service_reports_membership_changes() {
        let mut fields = PricedFields::default();
        assert!(fields.set_service(AddOnService::Dishes, true));
        assert!(!fields.set_service(AddOnService::Dishes, true));
        assert!(fields.has_service(AddOnService::Dishes));
        assert!(fields.set_service(AddOnService::Dishes, false));
        assert!(!fields.has_service(AddOnService::Dishes));
    }

    #[test]
    fn deserializes_document_field_names() {
        let json = r#"{
            "cleaningType": "Deep Cleaning",
            "selectedServices": ["Dishes", "Garage Floor", "Dishes"],
            "numberOfRooms": "2",
            "numberOfBalcony": 1
        }"#;
        let fields: PricedFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.cleaning_type, Some(CleaningType::Deep));
        assert_eq!(fields.selected_services.len(), 2);
        assert_eq!(fields.rooms(), 2);
        assert_eq!(fields.number_of_balcony, 1);
        assert_eq!(fields.number_of_windows, 0);
    }
}
