//! Raw quote requests and their lenient / strict conversion into
//! [`PricedFields`].

use serde::{Deserialize, Serialize};

use crate::catalog::{AddOnService, CleaningType, PropertyType};
use crate::count::{CountInput, RoomCount};
use crate::engine::{price, Price};
use crate::error::PricingError;
use crate::fields::PricedFields;

/// A quote request as submitted by a form or API client.
///
/// Everything is optional and stringly typed; see [`QuoteRequest::to_fields`]
/// and [`QuoteRequest::validate`] for the two conversion policies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub property_type: Option<String>,
    pub cleaning_type: Option<String>,
    pub selected_services: Vec<String>,
    pub number_of_rooms: Option<CountInput>,
    pub number_of_bathrooms: Option<CountInput>,
    pub number_of_kitchens: Option<CountInput>,
    pub number_of_living_rooms: Option<CountInput>,
    pub number_of_walls: Option<CountInput>,
    pub number_of_windows: Option<CountInput>,
    pub number_of_balcony: Option<CountInput>,
    pub laundry_loads: Option<CountInput>,
}

/// Output of [`QuoteRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuote {
    pub property_type: Option<PropertyType>,
    pub fields: PricedFields,
}

fn lenient(input: &Option<CountInput>) -> u32 {
    input.as_ref().map(CountInput::lenient).unwrap_or(0)
}

fn strict(input: &Option<CountInput>, field: &'static str) -> Result<u32, PricingError> {
    input.as_ref().map_or(Ok(0), |v| v.strict(field))
}

/// Blank means "unset"; anything else must name a known option.
fn strict_option<T>(raw: &Option<String>) -> Result<Option<T>, PricingError>
where
    T: core::str::FromStr<Err = PricingError>,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

impl QuoteRequest {
    /// Lenient conversion. Never fails: bad counts are 0, unknown cleaning
    /// types are unset, unknown service tags are dropped.
    pub fn to_fields(&self) -> PricedFields {
        PricedFields {
            cleaning_type: self
                .cleaning_type
                .as_deref()
                .and_then(CleaningType::parse_lenient),
            selected_services: self
                .selected_services
                .iter()
                .filter_map(|s| s.parse::<AddOnService>().ok())
                .collect(),
            number_of_rooms: RoomCount::from(lenient(&self.number_of_rooms)),
            number_of_bathrooms: RoomCount::from(lenient(&self.number_of_bathrooms)),
            number_of_kitchens: RoomCount::from(lenient(&self.number_of_kitchens)),
            number_of_living_rooms: RoomCount::from(lenient(&self.number_of_living_rooms)),
            number_of_walls: lenient(&self.number_of_walls),
            number_of_windows: lenient(&self.number_of_windows),
            number_of_balcony: lenient(&self.number_of_balcony),
            laundry_loads: lenient(&self.laundry_loads),
        }
    }

    /// Strict conversion: the first problem found is returned.
    pub fn validate(&self) -> Result<ValidatedQuote, PricingError> {
        let property_type = strict_option::<PropertyType>(&self.property_type)?;
        let cleaning_type = strict_option::<CleaningType>(&self.cleaning_type)?;
        let selected_services = self
            .selected_services
            .iter()
            .map(|s| s.parse::<AddOnService>())
            .collect::<Result<_, _>>()?;

        let fields = PricedFields {
            cleaning_type,
            selected_services,
            number_of_rooms: RoomCount::from(strict(&self.number_of_rooms, "numberOfRooms")?),
            number_of_bathrooms: RoomCount::from(strict(
                &self.number_of_bathrooms,
                "numberOfBathrooms",
            )?),
            number_of_kitchens: RoomCount::from(strict(
                &self.number_of_kitchens,
                "numberOfKitchens",
            )?),
            number_of_living_rooms: RoomCount::from(strict(
                &self.number_of_living_rooms,
                "numberOfLivingRooms",
            )?),
            number_of_walls: strict(&self.number_of_walls, "numberOfWalls")?,
            number_of_windows: strict(&self.number_of_windows, "numberOfWindows")?,
            number_of_balcony: strict(&self.number_of_balcony, "numberOfBalcony")?,
            laundry_loads: strict(&self.laundry_loads, "laundryLoads")?,
        };

        Ok(ValidatedQuote {
            property_type,
            fields,
        })
    }
}

/// Price a raw request, coercing anything malformed.
pub fn quote(request: &QuoteRequest) -> Price {
    price(&request.to_fields())
}

/// Price a raw request, rejecting anything malformed.
pub fn quote_strict(request: &QuoteRequest) -> Result<Price, PricingError> {
    request.validate().map(|v| price(&v.fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> QuoteRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_request_is_the_base_fee() {
        let req = request("{}");
        assert_eq!(quote(&req), Price::new(50));
        assert_eq!(quote_strict(&req), Ok(Price::new(50)));
    }

    #[test]
    fn form_shaped_request_prices_like_scenario_b() {
        let req = request(
            r#"{
                "propertyType": "Apartment",
                "cleaningType": "Standard Cleaning",
                "numberOfRooms": "2",
                "numberOfBathrooms": "1",
                "numberOfWalls": 0,
                "selectedServices": ["Inside the Oven", "Dishes"]
            }"#,
        );
        assert_eq!(quote(&req), Price::new(325));
        assert_eq!(quote_strict(&req), Ok(Price::new(325)));
    }

    #[test]
    fn lenient_path_swallows_bad_input() {
        let req = request(
            r#"{
                "cleaningType": "Extreme Cleaning",
                "selectedServices": ["Inside the Oven", "Polishing"],
                "numberOfRooms": "two",
                "numberOfWalls": -3,
                "laundryLoads": 1.9
            }"#,
        );
        let fields = req.to_fields();
        assert_eq!(fields.cleaning_type, None);
        assert_eq!(fields.selected_services.len(), 1);
        assert_eq!(fields.rooms(), 0);
        assert_eq!(fields.number_of_walls, 0);
        assert_eq!(fields.laundry_loads, 1);
        assert_eq!(quote(&req), Price::new(50 + 40 + 10));
    }

    #[test]
    fn strict_path_reports_each_problem() {
        let cases = [
            (
                r#"{"cleaningType": "Extreme Cleaning"}"#,
                PricingError::UnknownCleaningType("Extreme Cleaning".into()),
            ),
            (
                r#"{"propertyType": "Castle"}"#,
                PricingError::UnknownPropertyType("Castle".into()),
            ),
            (
                r#"{"selectedServices": ["Polishing"]}"#,
                PricingError::UnknownService("Polishing".into()),
            ),
            (
                r#"{"numberOfWalls": -3}"#,
                PricingError::NegativeCount {
                    field: "numberOfWalls",
                    value: "-3".into(),
                },
            ),
            (
                r#"{"numberOfRooms": "two"}"#,
                PricingError::NotANumber {
                    field: "numberOfRooms",
                    value: "two".into(),
                },
            ),
        ];

        for (json, expected) in cases {
            assert_eq!(quote_strict(&request(json)), Err(expected), "input: {json}");
        }
    }

    #[test]
    fn strict_path_treats_blank_options_as_unset() {
        let req = request(r#"{"cleaningType": "", "propertyType": "  "}"#);
        let validated = req.validate().unwrap();
        assert_eq!(validated.property_type, None);
        assert_eq!(validated.fields.cleaning_type, None);
    }

    #[test]
    fn office_is_priced_by_the_same_rules() {
        let req = request(
            r#"{"propertyType": "Office", "cleaningType": "Deep Cleaning", "numberOfRooms": 4}"#,
        );
        assert_eq!(req.validate().unwrap().property_type, Some(PropertyType::Office));
        assert_eq!(quote(&req), Price::new(50 + 350 + 100));
    }
}
