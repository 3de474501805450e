//! Cart line and table selection

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::line_amount;

/// Ceiling given to a re-opened line whose article is gone from the catalog
pub const FALLBACK_STOCK_CEILING: u32 = 999;

/// Table the draft order is for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedTable {
    pub id: i64,
    /// Label shown in the order header
    pub name: String,
}

/// One article in the draft order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub article_id: i64,
    pub name: String,
    /// Price snapshot taken when the line was created
    pub unit_price: Decimal,
    /// Always at least 1
    pub quantity: u32,
    /// Stock snapshot; `quantity` may not be raised above it
    pub stock_ceiling: u32,
}

impl CartLine {
    pub(crate) fn new(article_id: i64, name: String, unit_price: Decimal, stock_ceiling: u32) -> Self {
        Self {
            article_id,
            name,
            unit_price,
            quantity: 1,
            stock_ceiling,
        }
    }

    /// `unit_price × quantity`, unrounded
    pub fn subtotal(&self) -> Decimal {
        line_amount(self.unit_price, self.quantity)
    }

    /// Units that can still be added
    pub fn remaining(&self) -> u32 {
        self.stock_ceiling.saturating_sub(self.quantity)
    }
}
