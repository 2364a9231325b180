use crate::model::{ExtraDefinition, ExtraId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An extra together with how many units the customer picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    pub unit_value: Decimal,
    pub quantity: u32,
}

impl Extra {
    /// Starts an extra at zero units.
    pub fn unselected(definition: &ExtraDefinition) -> Self {
        Self {
            id: definition.id,
            name: definition.name.clone(),
            unit_value: definition.unit_value,
            quantity: 0,
        }
    }

    /// `unit_value × quantity`, or `None` past [`Decimal::MAX`].
    pub fn subtotal(&self) -> Option<Decimal> {
        self.unit_value.checked_mul(Decimal::from(self.quantity))
    }
}
