//! # Order Composer
//!
//! The synchronous half of the cart: the loaded food, its extras ledger and
//! the food quantity. Remote loading and submission are driven by the
//! session, which hands fetched foods to [`OrderComposer::apply`].

use crate::cart::ExtrasLedger;
use crate::error::CartError;
use crate::model::{order_total, ExtraId, Food, OrderDraft};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderComposer {
    food: Option<Food>,
    ledger: ExtrasLedger,
    food_quantity: u32,
}

impl Default for OrderComposer {
    fn default() -> Self {
        Self {
            food: None,
            ledger: ExtrasLedger::default(),
            food_quantity: 1,
        }
    }
}

impl OrderComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the unloaded state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Installs a freshly fetched food: every extra at zero, quantity 1.
    pub fn apply(&mut self, food: Food) {
        self.ledger.initialize(&food.extras);
        self.food_quantity = 1;
        self.food = Some(food);
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.food.is_some()
    }

    pub fn ledger(&self) -> &ExtrasLedger {
        &self.ledger
    }

    pub fn food_quantity(&self) -> u32 {
        self.food_quantity
    }

    /// Adds one unit of an extra. `Ok(false)` when the food has no such
    /// extra; [`CartError::TotalOverflow`], with nothing changed, when the
    /// total would no longer fit.
    pub fn increment_extra(&mut self, id: ExtraId) -> Result<bool, CartError> {
        if !self.ledger.increment(id) {
            return Ok(false);
        }
        if self.checked_total().is_none() {
            self.ledger.decrement(id);
            return Err(CartError::TotalOverflow);
        }
        Ok(true)
    }

    pub fn decrement_extra(&mut self, id: ExtraId) -> bool {
        self.ledger.decrement(id)
    }

    pub fn increment_food_quantity(&mut self) -> Result<(), CartError> {
        let previous = self.food_quantity;
        self.food_quantity = previous.saturating_add(1);
        if self.checked_total().is_none() {
            self.food_quantity = previous;
            return Err(CartError::TotalOverflow);
        }
        Ok(())
    }

    /// Never goes below 1.
    pub fn decrement_food_quantity(&mut self) {
        self.food_quantity = self.food_quantity.saturating_sub(1).max(1);
    }

    /// Recomputed from the current state on every call. Zero while unloaded.
    ///
    /// Increments that would overflow are refused, and a freshly applied
    /// food totals its own unit price, so the fallback never shows.
    pub fn total(&self) -> Decimal {
        self.checked_total().unwrap_or(Decimal::MAX)
    }

    fn checked_total(&self) -> Option<Decimal> {
        match &self.food {
            Some(food) => order_total(food.unit_price, self.food_quantity, self.ledger.iter()),
            None => Some(Decimal::ZERO),
        }
    }

    /// Snapshot of the current order, zero-quantity extras included.
    /// `None` while no food is loaded.
    pub fn compose_order(&self) -> Option<OrderDraft> {
        let food = self.food.clone()?;
        Some(OrderDraft {
            food,
            extras: self.ledger.to_vec(),
            food_quantity: self.food_quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExtraDefinition, FoodId};
    use rust_decimal_macros::dec;

    fn food(id: u32, unit_price: Decimal, extras: Vec<ExtraDefinition>) -> Food {
        Food {
            id: FoodId(id),
            name: format!("Food {id}"),
            description: String::new(),
            unit_price,
            image_url: String::new(),
            extras,
        }
    }

    fn loaded() -> OrderComposer {
        let mut composer = OrderComposer::new();
        composer.apply(food(
            1,
            dec!(10.00),
            vec![ExtraDefinition::new(11, "Bacon", dec!(2.00))],
        ));
        composer
    }

    #[test]
    fn test_scenario_total() {
        let mut composer = loaded();
        for _ in 0..3 {
            assert_eq!(composer.increment_extra(ExtraId(11)), Ok(true));
        }
        composer.increment_food_quantity().unwrap();

        assert_eq!(composer.food_quantity(), 2);
        assert_eq!(composer.total(), dec!(26.00));
    }

    #[test]
    fn test_compose_order_carries_quantities() {
        let mut composer = loaded();
        for _ in 0..3 {
            composer.increment_extra(ExtraId(11)).unwrap();
        }
        composer.increment_food_quantity().unwrap();

        let draft = composer.compose_order().unwrap();
        assert_eq!(draft.food_quantity, 2);
        assert_eq!(draft.extras.len(), 1);
        assert_eq!(draft.extras[0].id, ExtraId(11));
        assert_eq!(draft.extras[0].quantity, 3);
        assert_eq!(draft.total(), Some(composer.total()));
    }

    #[test]
    fn test_zero_quantity_extras_are_kept() {
        let mut composer = OrderComposer::new();
        composer.apply(food(
            2,
            dec!(5),
            vec![
                ExtraDefinition::new(1, "Queijo", dec!(1)),
                ExtraDefinition::new(2, "Ovo", dec!(1.5)),
            ],
        ));
        composer.increment_extra(ExtraId(2)).unwrap();

        let draft = composer.compose_order().unwrap();
        let quantities: Vec<_> = draft.extras.iter().map(|e| (e.id.0, e.quantity)).collect();
        assert_eq!(quantities, vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn test_food_quantity_floor() {
        let mut composer = loaded();
        composer.decrement_food_quantity();
        assert_eq!(composer.food_quantity(), 1);

        composer.increment_food_quantity().unwrap();
        composer.increment_food_quantity().unwrap();
        composer.decrement_food_quantity();
        composer.decrement_food_quantity();
        composer.decrement_food_quantity();
        assert_eq!(composer.food_quantity(), 1);
    }

    #[test]
    fn test_total_follows_every_mutation() {
        let mut composer = loaded();
        let expected = |c: &OrderComposer| {
            let unit = c.food().unwrap().unit_price;
            unit * Decimal::from(c.food_quantity()) + c.ledger().subtotal().unwrap()
        };

        let steps: [fn(&mut OrderComposer); 5] = [
            |c| c.increment_food_quantity().unwrap(),
            |c| {
                c.increment_extra(ExtraId(11)).unwrap();
            },
            |c| {
                c.decrement_extra(ExtraId(11));
            },
            |c| c.decrement_food_quantity(),
            |c| {
                c.increment_extra(ExtraId(11)).unwrap();
            },
        ];
        for step in steps {
            step(&mut composer);
            assert_eq!(composer.total(), expected(&composer));
        }
        assert_eq!(composer.total(), dec!(12.00));
    }

    #[test]
    fn test_overflowing_gestures_are_refused() {
        let mut composer = OrderComposer::new();
        composer.apply(food(
            1,
            Decimal::MAX,
            vec![ExtraDefinition::new(11, "Ouro", Decimal::MAX)],
        ));
        assert_eq!(composer.total(), Decimal::MAX);

        assert_eq!(
            composer.increment_food_quantity(),
            Err(CartError::TotalOverflow)
        );
        assert_eq!(composer.food_quantity(), 1);

        assert_eq!(
            composer.increment_extra(ExtraId(11)),
            Err(CartError::TotalOverflow)
        );
        assert_eq!(composer.ledger().quantity(ExtraId(11)), Some(0));
        assert_eq!(composer.total(), Decimal::MAX);
        assert_eq!(composer.compose_order().unwrap().total(), Some(Decimal::MAX));
    }

    #[test]
    fn test_apply_resets_previous_session() {
        let mut composer = loaded();
        composer.increment_extra(ExtraId(11)).unwrap();
        composer.increment_food_quantity().unwrap();

        composer.apply(food(
            1,
            dec!(10.00),
            vec![ExtraDefinition::new(11, "Bacon", dec!(2.00))],
        ));
        assert_eq!(composer.food_quantity(), 1);
        assert_eq!(composer.ledger().quantity(ExtraId(11)), Some(0));
        assert_eq!(composer.total(), dec!(10.00));
    }

    #[test]
    fn test_unloaded_composer() {
        let mut composer = loaded();
        composer.reset();

        assert!(!composer.is_loaded());
        assert_eq!(composer.total(), Decimal::ZERO);
        assert!(composer.compose_order().is_none());
        assert_eq!(composer.increment_extra(ExtraId(11)), Ok(false));
    }
}
