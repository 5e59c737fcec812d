//! Stock-keeping items.
//!
//! # Invariants
//! - Stock level is derived from `quantity` and `min_stock`; it is never
//!   persisted separately.

use crate::model::validation::{require_amount, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned inventory identifier.
pub type InventoryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryCategory {
    #[serde(rename = "Hair Products")]
    HairProducts,
    Shaving,
    Tools,
    Cleaning,
    Other,
}

impl InventoryCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HairProducts => "Hair Products",
            Self::Shaving => "Shaving",
            Self::Tools => "Tools",
            Self::Cleaning => "Cleaning",
            Self::Other => "Other",
        }
    }
}

/// Derived stock level for alerts and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryId,
    pub name: String,
    pub category: InventoryCategory,
    pub quantity: u32,
    pub min_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

impl InventoryItem {
    /// At or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.quantity == 0 {
            StockStatus::OutOfStock
        } else if self.is_low_stock() {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Inventory fields supplied by callers; the store owns `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryDraft {
    pub name: String,
    pub category: InventoryCategory,
    pub quantity: u32,
    pub min_stock: u32,
    pub unit_cost: Option<f64>,
    pub supplier: Option<String>,
}

impl InventoryDraft {
    pub fn new(
        name: impl Into<String>,
        category: InventoryCategory,
        quantity: u32,
        min_stock: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            quantity,
            min_stock,
            unit_cost: None,
            supplier: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        match self.unit_cost {
            Some(cost) => require_amount(cost),
            None => Ok(()),
        }
    }

    pub(crate) fn into_item(self, id: InventoryId) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            min_stock: self.min_stock,
            unit_cost: self.unit_cost,
            supplier: self.supplier,
        }
    }
}
