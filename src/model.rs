//! Item records as stored and as sent over the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored item. The `id` is assigned by the registry and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

/// Request body for create and update.
///
/// There is no `id` field: any id a client sends is dropped during
/// deserialization, so ids can only come from the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemInput {
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl ItemInput {
    pub fn new(name: Option<&str>, price: Decimal) -> Self {
        Self {
            name: name.map(str::to_string),
            price,
        }
    }
}

impl Item {
    pub(crate) fn from_input(input: ItemInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            price: input.price,
        }
    }

    pub(crate) fn apply(&mut self, input: ItemInput) {
        self.name = input.name;
        self.price = input.price;
    }
}
