//! Edit-flow form state for a stored order.

use cleanops_pricing::{price, Price};

use crate::details::DetailsPatch;
use crate::edit::{OrderEdit, Repriced};
use crate::order::ServiceOrder;

/// Working copy of a stored order.
///
/// Edits are applied to the copy, which reprices through the same engine as
/// the create flow. Nothing reaches the original until [`OrderEditor::save`].
#[derive(Debug, Clone)]
pub struct OrderEditor {
    original: ServiceOrder,
    working: ServiceOrder,
}

impl OrderEditor {
    pub fn open(order: ServiceOrder) -> Self {
        Self {
            working: order.clone(),
            original: order,
        }
    }

    pub fn edit(&mut self, edit: OrderEdit) -> Repriced {
        self.working.apply(edit)
    }

    pub fn update_details(&mut self, patch: DetailsPatch) {
        self.working.update_details(patch);
    }

    pub fn cost(&self) -> Price {
        self.working.cost()
    }

    pub fn working(&self) -> &ServiceOrder {
        &self.working
    }

    pub fn original(&self) -> &ServiceOrder {
        &self.original
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.original
    }

    /// Drop pending edits and return the untouched order.
    pub fn cancel(self) -> ServiceOrder {
        self.original
    }

    /// Return the edited order for persisting.
    pub fn save(self) -> ServiceOrder {
        let order = self.working;
        debug_assert_eq!(order.cost(), price(order.fields()));
        order
    }
}
