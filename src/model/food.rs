use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoodId(pub u32);

impl From<u32> for FoodId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "food_{}", self.0)
    }
}

/// Identifier of an extra, unique within one food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExtraId(pub u32);

impl Display for ExtraId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extra_{}", self.0)
    }
}

/// An optional add-on offered with a food, priced per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraDefinition {
    pub id: ExtraId,
    pub name: String,
    pub unit_value: Decimal,
}

impl ExtraDefinition {
    pub fn new(id: u32, name: impl Into<String>, unit_value: Decimal) -> Self {
        Self {
            id: ExtraId(id),
            name: name.into(),
            unit_value,
        }
    }
}

/// A dish on the menu, as served by the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// Creation parameters are [`FoodCreate`]; foods are immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
    pub image_url: String,
    /// Display order is the catalog's order.
    pub extras: Vec<ExtraDefinition>,
}

impl Food {
    pub fn extra(&self, id: ExtraId) -> Option<&ExtraDefinition> {
        self.extras.iter().find(|extra| extra.id == id)
    }
}

/// Payload for adding a food to the catalog.
#[derive(Debug, Clone)]
pub struct FoodCreate {
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
    pub image_url: String,
    pub extras: Vec<ExtraDefinition>,
}
