use crate::cart::{FavoriteStatus, OrderComposer};
use crate::error::CartError;
use crate::model::{Extra, ExtraId, Food};
use crate::money::MoneyFormatter;
use rust_decimal::Decimal;

/// Immutable snapshot of a cart session, published after every change.
///
/// Only canonical numbers are stored. Display strings come from
/// [`formatted_total`](CartView::formatted_total) and
/// [`formatted_unit_price`](CartView::formatted_unit_price).
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub food: Option<Food>,
    /// Every extra of the food, in catalog order, with its chosen quantity.
    pub extras: Vec<Extra>,
    pub food_quantity: u32,
    pub total: Decimal,
    pub favorite: FavoriteStatus,
    pub loading: bool,
    pub submitting: bool,
    pub last_error: Option<CartError>,
}

impl CartView {
    pub(crate) fn capture(
        composer: &OrderComposer,
        favorite: FavoriteStatus,
        loading: bool,
        submitting: bool,
        last_error: Option<CartError>,
    ) -> Self {
        Self {
            food: composer.food().cloned(),
            extras: composer.ledger().to_vec(),
            food_quantity: composer.food_quantity(),
            total: composer.total(),
            favorite,
            loading,
            submitting,
            last_error,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.food.is_some()
    }

    pub fn quantity_of(&self, id: ExtraId) -> Option<u32> {
        self.extras.iter().find(|e| e.id == id).map(|e| e.quantity)
    }

    pub fn formatted_total(&self, formatter: &MoneyFormatter) -> String {
        formatter.format(self.total)
    }

    pub fn formatted_unit_price(&self, formatter: &MoneyFormatter) -> Option<String> {
        self.food.as_ref().map(|f| formatter.format(f.unit_price))
    }
}
