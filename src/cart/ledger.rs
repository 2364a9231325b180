//! # Extras Ledger
//!
//! Per-extra quantities for the food on screen, keyed by [`ExtraId`] and
//! kept in the catalog's display order.

use crate::model::{Extra, ExtraDefinition, ExtraId};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtrasLedger {
    extras: IndexMap<ExtraId, Extra>,
}

impl ExtrasLedger {
    /// One zero-quantity line per definition.
    ///
    /// Definitions repeating an id already seen are skipped, so two lines
    /// never share an id.
    pub fn new(definitions: &[ExtraDefinition]) -> Self {
        let mut extras = IndexMap::with_capacity(definitions.len());
        for definition in definitions {
            if extras.contains_key(&definition.id) {
                warn!(extra_id = %definition.id, "Duplicate extra definition skipped");
                continue;
            }
            extras.insert(definition.id, Extra::unselected(definition));
        }
        Self { extras }
    }

    /// Replaces the whole ledger; nothing carries over from the previous food.
    pub fn initialize(&mut self, definitions: &[ExtraDefinition]) {
        *self = Self::new(definitions);
    }

    /// Adds one unit. Returns `false`, changing nothing, when `id` is not
    /// in the ledger.
    pub fn increment(&mut self, id: ExtraId) -> bool {
        match self.extras.get_mut(&id) {
            Some(extra) => {
                extra.quantity = extra.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Removes one unit, stopping at zero. Returns `false` when `id` is not
    /// in the ledger; decrementing a zero line is still `true`.
    pub fn decrement(&mut self, id: ExtraId) -> bool {
        match self.extras.get_mut(&id) {
            Some(extra) => {
                extra.quantity = extra.quantity.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ExtraId) -> Option<&Extra> {
        self.extras.get(&id)
    }

    pub fn quantity(&self, id: ExtraId) -> Option<u32> {
        self.get(id).map(|extra| extra.quantity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Extra> {
        self.extras.values()
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    /// `Σ(quantity × unit_value)` over every line, `None` on overflow.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.iter()
            .try_fold(Decimal::ZERO, |sum, extra| sum.checked_add(extra.subtotal()?))
    }

    /// Every line, zero quantities included, in display order.
    pub fn to_vec(&self) -> Vec<Extra> {
        self.iter().cloned().collect()
    }
}
