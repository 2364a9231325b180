use crate::model::{Extra, Food};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// `food_quantity × unit_price + Σ(extra.quantity × extra.unit_value)`.
///
/// `None` when the result does not fit in a [`Decimal`].
pub fn order_total<'a>(
    unit_price: Decimal,
    food_quantity: u32,
    extras: impl IntoIterator<Item = &'a Extra>,
) -> Option<Decimal> {
    extras.into_iter().try_fold(
        unit_price.checked_mul(Decimal::from(food_quantity))?,
        |total, extra| total.checked_add(extra.subtotal()?),
    )
}

/// The composed order, ready for submission.
///
/// Every extra of the food is present, including the ones left at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub food: Food,
    pub extras: Vec<Extra>,
    pub food_quantity: u32,
}

impl OrderDraft {
    pub fn total(&self) -> Option<Decimal> {
        order_total(self.food.unit_price, self.food_quantity, &self.extras)
    }
}

/// An accepted order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
/// Its creation payload is the [`OrderDraft`] composed on the cart screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub draft: OrderDraft,
    pub total: Decimal,
}

impl Order {
    /// `None` when the draft's total overflows.
    pub fn new(id: OrderId, draft: OrderDraft) -> Option<Self> {
        let total = draft.total()?;
        Some(Self { id, draft, total })
    }
}
