//! The pricing rule table as named amounts.

use crate::catalog::{AddOnService, CleaningType};

/// Amounts, in whole currency units, used by the thirteen pricing rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RateCard {
    pub base_fee: u64,
    pub standard_cleaning: u64,
    pub deep_cleaning: u64,
    pub per_room_or_bathroom: u64,
    pub inside_oven: u64,
    pub inside_fridge: u64,
    pub per_kitchen: u64,
    pub per_living_room: u64,
    pub per_wall: u64,
    pub per_window: u64,
    pub per_balcony: u64,
    pub per_laundry_load: u64,
    pub garage_floor: u64,
    pub dishes: u64,
}

impl RateCard {
    /// The rates quoted to clients.
    pub const STANDARD: RateCard = RateCard {
        base_fee: 50,
        standard_cleaning: 150,
        deep_cleaning: 350,
        per_room_or_bathroom: 25,
        inside_oven: 40,
        inside_fridge: 40,
        per_kitchen: 25,
        per_living_room: 15,
        per_wall: 15,
        per_window: 15,
        per_balcony: 45,
        per_laundry_load: 10,
        garage_floor: 45,
        dishes: 10,
    };

    /// Surcharge for a cleaning type; light and unset cost nothing extra.
    pub fn cleaning_surcharge(&self, cleaning_type: Option<CleaningType>) -> u64 {
        match cleaning_type {
            Some(CleaningType::Standard) => self.standard_cleaning,
            Some(CleaningType::Deep) => self.deep_cleaning,
            Some(CleaningType::Light) | None => 0,
        }
    }

    /// Flat surcharge for selecting an add-on.
    ///
    /// Walls, windows, balcony and laundry are zero here: they are charged per
    /// unit through their count fields.
    pub fn add_on(&self, service: AddOnService) -> u64 {
        match service {
            AddOnService::InsideOven => self.inside_oven,
            AddOnService::InsideFridge => self.inside_fridge,
            AddOnService::GarageFloor => self.garage_floor,
            AddOnService::Dishes => self.dishes,
            AddOnService::Walls
            | AddOnService::InsideWindows
            | AddOnService::BalconyPatio
            | AddOnService::LaundryDrying => 0,
        }
    }
}

impl Default for RateCard {
    fn default() -> Self {
        Self::STANDARD
    }
}
