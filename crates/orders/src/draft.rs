//! Create-flow form state.

use chrono::{DateTime, Utc};

use cleanops_pricing::{price, Price, PricedFields, PropertyType};

use crate::details::ClientDetails;
use crate::edit::{OrderEdit, Repriced};
use crate::order::{NewServiceOrder, ServiceOrder, ServiceOrderId};

/// A new order being filled in. The displayed cost is repriced after every
/// priced edit, starting from the base fee of an empty form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    details: ClientDetails,
    property_type: Option<PropertyType>,
    fields: PricedFields,
    cost: Price,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDraft {
    pub fn new() -> Self {
        let fields = PricedFields::default();
        Self {
            details: ClientDetails::default(),
            property_type: None,
            cost: price(&fields),
            fields,
        }
    }

    pub fn edit(&mut self, edit: OrderEdit) -> Repriced {
        let previous = self.cost;
        edit.apply_to(&mut self.property_type, &mut self.fields);
        self.cost = price(&self.fields);
        Repriced {
            previous,
            current: self.cost,
        }
    }

    pub fn details_mut(&mut self) -> &mut ClientDetails {
        &mut self.details
    }

    pub fn details(&self) -> &ClientDetails {
        &self.details
    }

    pub fn fields(&self) -> &PricedFields {
        &self.fields
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        self.property_type
    }

    pub fn cost(&self) -> Price {
        self.cost
    }

    pub fn into_new_order(self) -> NewServiceOrder {
        NewServiceOrder {
            details: self.details,
            property_type: self.property_type,
            fields: self.fields,
        }
    }

    /// Turn the draft into an order and clear the form for the next client.
    pub fn submit(&mut self, id: ServiceOrderId, now: DateTime<Utc>) -> ServiceOrder {
        let draft = std::mem::take(self);
        ServiceOrder::create(id, draft.into_new_order(), now)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanops_core::RecordId;
    use cleanops_pricing::{AddOnService, CleaningType};

    #[test]
    fn empty_form_shows_the_base_fee() {
        assert_eq!(OrderDraft::new().cost(), Price::new(50));
    }

    #[test]
    fn every_edit_updates_the_shown_cost() {
        let mut draft = OrderDraft::new();
        draft.edit(OrderEdit::CleaningType(Some(CleaningType::Standard)));
        assert_eq!(draft.cost(), Price::new(200));
        draft.edit(OrderEdit::Service {
            service: AddOnService::InsideFridge,
            selected: true,
        });
        assert_eq!(draft.cost(), Price::new(240));
        let repriced = draft.edit(OrderEdit::Service {
            service: AddOnService::InsideFridge,
            selected: false,
        });
        assert_eq!(repriced.previous, Price::new(240));
        assert_eq!(draft.cost(), Price::new(200));
    }

    #[test]
    fn submit_hands_over_the_same_cost_and_clears_the_form() {
        let mut draft = OrderDraft::new();
        draft.details_mut().name = "Ines Roy".into();
        draft.edit(OrderEdit::Balconies(2));
        let shown = draft.cost();

        let order = draft.submit(ServiceOrderId::new(RecordId::new()), Utc::now());

        assert_eq!(order.cost(), shown);
        assert_eq!(order.details().name, "Ines Roy");
        assert_eq!(draft, OrderDraft::new());
    }

    #[test]
    fn reset_returns_to_the_base_fee() {
        let mut draft = OrderDraft::new();
        draft.edit(OrderEdit::LaundryLoads(3));
        draft.reset();
        assert_eq!(draft.cost(), Price::new(50));
    }
}
