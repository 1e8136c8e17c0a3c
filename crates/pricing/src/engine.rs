//! The pricing rule table and its evaluation.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::catalog::AddOnService;
use crate::fields::PricedFields;
use crate::rates::RateCard;

/// A total or partial price in whole currency units.
///
/// Formatting (currency symbol, separators) is left to the caller.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> u64 {
        self.0
    }

    /// Parse a stored `cost` string. Only plain digits are accepted; a stored
    /// cost is never coerced because it is compared against a recomputation.
    pub fn from_stored(raw: &str) -> Option<Price> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        trimmed.parse().ok().map(Price)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

/// The thirteen pricing rules, in evaluation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRule {
    BaseFee,
    CleaningType,
    RoomsAndBathrooms,
    InsideOven,
    InsideFridge,
    Kitchens,
    LivingRooms,
    Walls,
    Windows,
    Balconies,
    LaundryLoads,
    GarageFloor,
    Dishes,
}

impl PricingRule {
    pub fn label(self) -> &'static str {
        match self {
            PricingRule::BaseFee => "Base fee",
            PricingRule::CleaningType => "Cleaning type",
            PricingRule::RoomsAndBathrooms => "Rooms and bathrooms",
            PricingRule::InsideOven => "Inside the oven",
            PricingRule::InsideFridge => "Inside the fridge",
            PricingRule::Kitchens => "Kitchens",
            PricingRule::LivingRooms => "Living rooms",
            PricingRule::Walls => "Walls",
            PricingRule::Windows => "Windows",
            PricingRule::Balconies => "Balconies / patios",
            PricingRule::LaundryLoads => "Laundry loads",
            PricingRule::GarageFloor => "Garage floor",
            PricingRule::Dishes => "Dishes",
        }
    }
}

/// One evaluated rule: `amount == quantity * unit_amount`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub rule: PricingRule,
    pub quantity: u64,
    pub unit_amount: u64,
    pub amount: Price,
}

impl LineItem {
    fn per_unit(rule: PricingRule, quantity: u64, unit_amount: u64) -> Self {
        Self {
            rule,
            quantity,
            unit_amount,
            amount: Price(quantity.saturating_mul(unit_amount)),
        }
    }

    fn flag(rule: PricingRule, on: bool, unit_amount: u64) -> Self {
        Self::per_unit(rule, u64::from(on), unit_amount)
    }
}

/// All thirteen rule terms of one evaluation, zero terms included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub lines: Vec<LineItem>,
    pub total: Price,
}

impl PriceBreakdown {
    /// Terms that contributed a non-zero amount.
    pub fn charged(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.iter().filter(|l| l.amount != Price::ZERO)
    }
}

/// Evaluate the rule table against a rate card.
pub fn breakdown_with(rates: &RateCard, fields: &PricedFields) -> PriceBreakdown {
    let has = |s: AddOnService| fields.has_service(s);

    let lines = vec![
        LineItem::per_unit(PricingRule::BaseFee, 1, rates.base_fee),
        LineItem::per_unit(
            PricingRule::CleaningType,
            1,
            rates.cleaning_surcharge(fields.cleaning_type),
        ),
        LineItem::per_unit(
            PricingRule::RoomsAndBathrooms,
            u64::from(fields.rooms()) + u64::from(fields.bathrooms()),
            rates.per_room_or_bathroom,
        ),
        LineItem::flag(
            PricingRule::InsideOven,
            has(AddOnService::InsideOven),
            rates.add_on(AddOnService::InsideOven),
        ),
        LineItem::flag(
            PricingRule::InsideFridge,
            has(AddOnService::InsideFridge),
            rates.add_on(AddOnService::InsideFridge),
        ),
        LineItem::per_unit(
            PricingRule::Kitchens,
            u64::from(fields.kitchens()),
            rates.per_kitchen,
        ),
        LineItem::per_unit(
            PricingRule::LivingRooms,
            u64::from(fields.living_rooms()),
            rates.per_living_room,
        ),
        LineItem::per_unit(PricingRule::Walls, u64::from(fields.number_of_walls), rates.per_wall),
        LineItem::per_unit(
            PricingRule::Windows,
            u64::from(fields.number_of_windows),
            rates.per_window,
        ),
        LineItem::per_unit(
            PricingRule::Balconies,
            u64::from(fields.number_of_balcony),
            rates.per_balcony,
        ),
        LineItem::per_unit(
            PricingRule::LaundryLoads,
            u64::from(fields.laundry_loads),
            rates.per_laundry_load,
        ),
        LineItem::flag(
            PricingRule::GarageFloor,
            has(AddOnService::GarageFloor),
            rates.add_on(AddOnService::GarageFloor),
        ),
        LineItem::flag(
            PricingRule::Dishes,
            has(AddOnService::Dishes),
            rates.add_on(AddOnService::Dishes),
        ),
    ];

    let total = lines.iter().map(|l| l.amount).sum();
    PriceBreakdown { lines, total }
}

/// Evaluate the rule table at the standard rates.
pub fn breakdown(fields: &PricedFields) -> PriceBreakdown {
    breakdown_with(&RateCard::STANDARD, fields)
}

/// Total price of an order's priced fields at the standard rates.
///
/// Pure and total: the same fields always give the same price.
pub fn price(fields: &PricedFields) -> Price {
    breakdown(fields).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CleaningType;
    use crate::count::RoomCount;
    use proptest::prelude::*;

    fn fields_with(f: impl FnOnce(&mut PricedFields)) -> PricedFields {
        let mut fields = PricedFields::default();
        f(&mut fields);
        fields
    }

    #[test]
    fn empty_order_costs_the_base_fee() {
        assert_eq!(price(&PricedFields::default()), Price::new(50));
    }

    #[test]
    fn standard_apartment_with_three_rooms() {
        let fields = fields_with(|f| {
            f.cleaning_type = Some(CleaningType::Standard);
            f.number_of_rooms = RoomCount::from("2");
            f.number_of_bathrooms = RoomCount::from("1");
        });
        assert_eq!(price(&fields), Price::new(275));
    }

    #[test]
    fn oven_and_dishes_add_fifty() {
        let fields = fields_with(|f| {
            f.cleaning_type = Some(CleaningType::Standard);
            f.number_of_rooms = RoomCount::from("2");
            f.number_of_bathrooms = RoomCount::from("1");
            f.set_service(AddOnService::InsideOven, true);
            f.set_service(AddOnService::Dishes, true);
        });
        assert_eq!(price(&fields), Price::new(325));
    }

    #[test]
    fn deep_clean_with_every_per_unit_rule() {
        let fields = fields_with(|f| {
            f.cleaning_type = Some(CleaningType::Deep);
            f.number_of_rooms = RoomCount::from("0");
            f.number_of_bathrooms = RoomCount::from("0");
            f.number_of_kitchens = RoomCount::from("1");
            f.number_of_living_rooms = RoomCount::from("1");
            f.number_of_walls = 2;
            f.number_of_windows = 3;
            f.number_of_balcony = 1;
            f.laundry_loads = 2;
            f.set_service(AddOnService::GarageFloor, true);
        });
        assert_eq!(price(&fields), Price::new(625));
    }

    #[test]
    fn light_cleaning_is_free_of_surcharge() {
        let fields = fields_with(|f| f.cleaning_type = Some(CleaningType::Light));
        assert_eq!(price(&fields), Price::new(50));
    }

    #[test]
    fn malformed_room_text_counts_as_zero() {
        let fields = fields_with(|f| {
            f.number_of_rooms = RoomCount::from("lots");
            f.number_of_kitchens = RoomCount::from("");
            f.number_of_bathrooms = RoomCount::from("2 baths");
        });
        assert_eq!(price(&fields), Price::new(50 + 50));
    }

    #[test]
    fn count_gated_tags_add_nothing_on_their_own() {
        let fields = fields_with(|f| {
            f.set_service(AddOnService::Walls, true);
            f.set_service(AddOnService::InsideWindows, true);
            f.set_service(AddOnService::BalconyPatio, true);
            f.set_service(AddOnService::LaundryDrying, true);
        });
        assert_eq!(price(&fields), Price::new(50));
    }

    #[test]
    fn breakdown_lists_all_rules_in_order() {
        let b = breakdown(&PricedFields::default());
        let rules: Vec<PricingRule> = b.lines.iter().map(|l| l.rule).collect();
        assert_eq!(
            rules,
            vec![
                PricingRule::BaseFee,
                PricingRule::CleaningType,
                PricingRule::RoomsAndBathrooms,
                PricingRule::InsideOven,
                PricingRule::InsideFridge,
                PricingRule::Kitchens,
                PricingRule::LivingRooms,
                PricingRule::Walls,
                PricingRule::Windows,
                PricingRule::Balconies,
                PricingRule::LaundryLoads,
                PricingRule::GarageFloor,
                PricingRule::Dishes,
            ]
        );
        let charged: Vec<&str> = b.charged().map(|l| l.rule.label()).collect();
        assert_eq!(charged, vec!["Base fee"]);
    }

    #[test]
    fn custom_rate_card_is_honoured() {
        let rates = RateCard {
            base_fee: 80,
            ..RateCard::STANDARD
        };
        assert_eq!(breakdown_with(&rates, &PricedFields::default()).total, Price::new(80));
    }

    #[test]
    fn stored_cost_parsing_is_strict() {
        assert_eq!(Price::from_stored("275"), Some(Price::new(275)));
        assert_eq!(Price::from_stored(" 50 "), Some(Price::new(50)));
        assert_eq!(Price::from_stored(""), None);
        assert_eq!(Price::from_stored("275.00"), None);
        assert_eq!(Price::from_stored("-5"), None);
    }

    fn cleaning_strategy() -> impl Strategy<Value = Option<CleaningType>> {
        prop_oneof![
            Just(None),
            Just(Some(CleaningType::Light)),
            Just(Some(CleaningType::Standard)),
            Just(Some(CleaningType::Deep)),
        ]
    }

    prop_compose! {
        fn arb_fields()(
            cleaning_type in cleaning_strategy(),
            services in prop::sample::subsequence(AddOnService::ALL.to_vec(), 0..=AddOnService::ALL.len()),
            rooms in 0u32..50,
            bathrooms in 0u32..50,
            kitchens in 0u32..10,
            living_rooms in 0u32..10,
            walls in 0u32..100,
            windows in 0u32..100,
            balconies in 0u32..10,
            laundry in 0u32..20,
        ) -> PricedFields {
            PricedFields {
                cleaning_type,
                selected_services: services.into_iter().collect(),
                number_of_rooms: RoomCount::from(rooms),
                number_of_bathrooms: RoomCount::from(bathrooms),
                number_of_kitchens: RoomCount::from(kitchens),
                number_of_living_rooms: RoomCount::from(living_rooms),
                number_of_walls: walls,
                number_of_windows: windows,
                number_of_balcony: balconies,
                laundry_loads: laundry,
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: the base fee is a floor.
        #[test]
        fn price_never_drops_below_base_fee(fields in arb_fields()) {
            prop_assert!(price(&fields) >= Price::new(50));
        }

        /// Property: pricing is pure.
        #[test]
        fn price_is_idempotent(fields in arb_fields()) {
            let snapshot = fields.clone();
            let first = price(&fields);
            let second = price(&fields);
            prop_assert_eq!(first, second);
            prop_assert_eq!(&fields, &snapshot);
        }

        /// Property: bumping any one count never lowers the total.
        #[test]
        fn price_is_monotonic_in_every_count(fields in arb_fields(), which in 0usize..8) {
            let before = price(&fields);
            let mut bumped = fields.clone();
            match which {
                0 => bumped.number_of_rooms = RoomCount::from(fields.rooms() + 1),
                1 => bumped.number_of_bathrooms = RoomCount::from(fields.bathrooms() + 1),
                2 => bumped.number_of_kitchens = RoomCount::from(fields.kitchens() + 1),
                3 => bumped.number_of_living_rooms = RoomCount::from(fields.living_rooms() + 1),
                4 => bumped.number_of_walls += 1,
                5 => bumped.number_of_windows += 1,
                6 => bumped.number_of_balcony += 1,
                _ => bumped.laundry_loads += 1,
            }
            prop_assert!(price(&bumped) >= before);
        }

        /// Property: toggling an add-on on adds exactly its flat surcharge.
        #[test]
        fn add_ons_are_additive(fields in arb_fields(), idx in 0usize..AddOnService::ALL.len()) {
            let service = AddOnService::ALL[idx];
            let mut without = fields.clone();
            without.set_service(service, false);
            let mut with = without.clone();
            with.set_service(service, true);

            let expected = match service {
                AddOnService::InsideOven | AddOnService::InsideFridge => 40,
                AddOnService::GarageFloor => 45,
                AddOnService::Dishes => 10,
                _ => 0,
            };
            prop_assert_eq!(price(&with).amount(), price(&without).amount() + expected);
        }

        /// Property: cleaning types differ by fixed amounts.
        #[test]
        fn cleaning_types_are_exclusive(fields in arb_fields()) {
            let at = |ct: Option<CleaningType>| {
                let mut f = fields.clone();
                f.cleaning_type = ct;
                price(&f).amount()
            };
            prop_assert_eq!(at(Some(CleaningType::Deep)), at(Some(CleaningType::Standard)) + 200);
            prop_assert_eq!(at(Some(CleaningType::Standard)), at(None) + 150);
            prop_assert_eq!(at(Some(CleaningType::Light)), at(None));
        }

        /// Property: re-setting a field to its current value keeps the price.
        #[test]
        fn no_op_edit_keeps_price(fields in arb_fields()) {
            let before = price(&fields);
            let mut edited = fields.clone();
            edited.number_of_walls = fields.number_of_walls;
            edited.number_of_rooms = fields.number_of_rooms.clone();
            edited.cleaning_type = fields.cleaning_type;
            prop_assert_eq!(price(&edited), before);
        }

        /// Property: the total is the sum of the line items.
        #[test]
        fn breakdown_total_matches_lines(fields in arb_fields()) {
            let b = breakdown(&fields);
            let sum: u64 = b.lines.iter().map(|l| l.quantity * l.unit_amount).sum();
            prop_assert_eq!(b.total.amount(), sum);
        }
    }
}
