//! Closed option sets used by the pricing rules.
//!
//! Every option round-trips through its human label ("Deep Cleaning",
//! "Inside the Oven", ...) because that label is what stored documents and
//! form submissions carry. Matching happens on the enum, never on the label.

use cleanops_core::labelled_enum;

use crate::error::PricingError;

labelled_enum! {
    /// Kind of property being cleaned.
    ///
    /// Office and Commercial hide the room and add-on inputs in the admin form,
    /// but the rule table does not branch on property type.
    pub enum PropertyType: PricingError = PricingError::UnknownPropertyType;
    {
        Apartment => "Apartment",
        House => "House",
        Office => "Office",
        Commercial => "Commercial",
    }
}

labelled_enum! {
    /// Cleaning intensity. "Unset" is modelled as `Option::None` by callers.
    pub enum CleaningType: PricingError = PricingError::UnknownCleaningType;
    {
        Light => "Light Cleaning",
        Standard => "Standard Cleaning",
        Deep => "Deep Cleaning",
    }
}

labelled_enum! {
    /// Optional add-on tags. Membership is a flag, never a count.
    ///
    /// Only oven, fridge, garage floor and dishes carry a fixed surcharge; the
    /// other four are priced through their matching count fields.
    pub enum AddOnService: PricingError = PricingError::UnknownService;
    {
        InsideOven => "Inside the Oven",
        InsideFridge => "Inside the Fridge",
        GarageFloor => "Garage Floor",
        Dishes => "Dishes",
        Walls => "Walls",
        InsideWindows => "Inside Windows (how many windows)",
        BalconyPatio => "Balcony / Patio",
        LaundryDrying => "Laundry & Drying",
    }
}

impl CleaningType {
    /// Lenient parse used for stored documents and form input: empty or
    /// unrecognized text means "unset".
    pub fn parse_lenient(s: &str) -> Option<CleaningType> {
        s.parse().ok()
    }
}
