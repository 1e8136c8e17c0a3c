//! Edits to the priced fields of an order.

use std::collections::BTreeSet;

use serde::Deserialize;

use cleanops_pricing::{
    AddOnService, CleaningType, CountInput, Price, PricedFields, PricingError, PropertyType,
    RoomCount,
};

use crate::details::{clear_on_blank, DetailsPatch};

/// One change to a rule input. Applying an edit never touches `cost`;
/// repricing is the caller's job (see [`crate::ServiceOrder::apply`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEdit {
    PropertyType(Option<PropertyType>),
    CleaningType(Option<CleaningType>),
    Service { service: AddOnService, selected: bool },
    ReplaceServices(BTreeSet<AddOnService>),
    Rooms(RoomCount),
    Bathrooms(RoomCount),
    Kitchens(RoomCount),
    LivingRooms(RoomCount),
    Walls(u32),
    Windows(u32),
    Balconies(u32),
    LaundryLoads(u32),
}

impl OrderEdit {
    pub fn apply_to(self, property_type: &mut Option<PropertyType>, fields: &mut PricedFields) {
        match self {
            OrderEdit::PropertyType(p) => *property_type = p,
            OrderEdit::CleaningType(c) => fields.cleaning_type = c,
            OrderEdit::Service { service, selected } => {
                fields.set_service(service, selected);
            }
            OrderEdit::ReplaceServices(services) => fields.selected_services = services,
            OrderEdit::Rooms(n) => fields.number_of_rooms = n,
            OrderEdit::Bathrooms(n) => fields.number_of_bathrooms = n,
            OrderEdit::Kitchens(n) => fields.number_of_kitchens = n,
            OrderEdit::LivingRooms(n) => fields.number_of_living_rooms = n,
            OrderEdit::Walls(n) => fields.number_of_walls = n,
            OrderEdit::Windows(n) => fields.number_of_windows = n,
            OrderEdit::Balconies(n) => fields.number_of_balcony = n,
            OrderEdit::LaundryLoads(n) => fields.laundry_loads = n,
        }
    }
}

/// Cost before and after a priced edit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Repriced {
    pub previous: Price,
    pub current: Price,
}

impl Repriced {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Partial update of a stored order, as sent by the edit form.
///
/// Absent keys are left alone. Counts accept numbers or numeric strings and
/// are validated strictly when lowered with [`ServiceOrderPatch::priced_edits`].
/// `cost` is not a field: it is always recomputed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceOrderPatch {
    #[serde(flatten)]
    pub details: DetailsPatch,
    #[serde(deserialize_with = "clear_on_blank")]
    pub property_type: Option<Option<PropertyType>>,
    #[serde(deserialize_with = "clear_on_blank")]
    pub cleaning_type: Option<Option<CleaningType>>,
    pub selected_services: Option<BTreeSet<AddOnService>>,
    pub number_of_rooms: Option<CountInput>,
    pub number_of_bathrooms: Option<CountInput>,
    pub number_of_kitchens: Option<CountInput>,
    pub number_of_living_rooms: Option<CountInput>,
    pub number_of_walls: Option<CountInput>,
    pub number_of_windows: Option<CountInput>,
    pub number_of_balcony: Option<CountInput>,
    pub laundry_loads: Option<CountInput>,
}

impl ServiceOrderPatch {
    /// Lower the priced part of the patch into edits, in rule-table order.
    pub fn priced_edits(&self) -> Result<Vec<OrderEdit>, PricingError> {
        let mut edits = Vec::new();

        if let Some(p) = self.property_type {
            edits.push(OrderEdit::PropertyType(p));
        }
        if let Some(c) = self.cleaning_type {
            edits.push(OrderEdit::CleaningType(c));
        }
        if let Some(services) = &self.selected_services {
            edits.push(OrderEdit::ReplaceServices(services.clone()));
        }

        let counts: [(&Option<CountInput>, &'static str, fn(u32) -> OrderEdit); 8] = [
            (&self.number_of_rooms, "numberOfRooms", |n| OrderEdit::Rooms(n.into())),
            (&self.number_of_bathrooms, "numberOfBathrooms", |n| {
                OrderEdit::Bathrooms(n.into())
            }),
            (&self.number_of_kitchens, "numberOfKitchens", |n| OrderEdit::Kitchens(n.into())),
            (&self.number_of_living_rooms, "numberOfLivingRooms", |n| {
                OrderEdit::LivingRooms(n.into())
            }),
            (&self.number_of_walls, "numberOfWalls", OrderEdit::Walls),
            (&self.number_of_windows, "numberOfWindows", OrderEdit::Windows),
            (&self.number_of_balcony, "numberOfBalcony", OrderEdit::Balconies),
            (&self.laundry_loads, "laundryLoads", OrderEdit::LaundryLoads),
        ];
        for (input, field, edit) in counts {
            if let Some(input) = input {
                edits.push(edit(input.strict(field)?));
            }
        }

        Ok(edits)
    }
}
