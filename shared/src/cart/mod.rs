//! Draft order (cart) for one table visit
//!
//! [`Cart`] is a plain owned value: every operation is a synchronous method
//! that either applies the change or returns a [`CartError`] and leaves the
//! cart untouched. Catalog data (articles, live stock) is passed in by the
//! caller; the cart never reaches out for it.
//!
//! Invariants held by every method:
//! - no two lines share an `article_id`; lines keep insertion order
//! - every line has `1 <= quantity`, and adding or incrementing never takes
//!   `quantity` above `stock_ceiling`
//! - the selected table survives item edits and is only cleared by
//!   [`Cart::on_save_succeeded`] or [`Cart::reset`]

mod error;
mod line;

pub use error::CartError;
pub use line::{CartLine, FALLBACK_STOCK_CEILING, SelectedTable};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Article, OrderDetail, OrderPayload, OrderPayloadItem};
use crate::money::round_money;

/// Result of [`Cart::change_quantity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line for that article
    Missing,
    /// New quantity of the line
    Updated(u32),
    /// The line dropped to zero and was removed
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    selected_table: Option<SelectedTable>,
    lines: Vec<CartLine>,
    /// Set while amending a persisted order
    editing_order_id: Option<i64>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    pub fn selected_table(&self) -> Option<&SelectedTable> {
        self.selected_table.as_ref()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, article_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.article_id == article_id)
    }

    pub fn editing_order_id(&self) -> Option<i64> {
        self.editing_order_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_order_id.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities, the figure shown on the cart badge
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Σ `unit_price × quantity`, unrounded
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// A table is selected and there is at least one line
    pub fn can_save(&self) -> bool {
        self.selected_table.is_some() && !self.lines.is_empty()
    }

    fn position(&self, article_id: i64) -> Option<usize> {
        self.lines.iter().position(|l| l.article_id == article_id)
    }

    // ========== Mutations ==========

    /// Select the table the order is for. Selecting the same table again
    /// changes nothing.
    pub fn select_table(&mut self, table_id: i64, name: impl Into<String>) {
        self.selected_table = Some(SelectedTable {
            id: table_id,
            name: name.into(),
        });
    }

    /// Add one unit of an article
    ///
    /// A new line takes `available_stock` as its ceiling. An existing line
    /// is incremented against the ceiling it already has.
    ///
    /// Returns the line's new quantity.
    pub fn add_item(
        &mut self,
        article_id: i64,
        name: &str,
        unit_price: Decimal,
        available_stock: i64,
    ) -> Result<u32, CartError> {
        if available_stock <= 0 {
            return Err(CartError::OutOfStock {
                article_id,
                name: name.to_string(),
            });
        }

        if let Some(idx) = self.position(article_id) {
            let line = &mut self.lines[idx];
            if line.quantity >= line.stock_ceiling {
                return Err(CartError::StockLimit {
                    article_id,
                    name: line.name.clone(),
                    available: line.stock_ceiling,
                });
            }
            line.quantity += 1;
            tracing::debug!(article_id, quantity = line.quantity, "Cart line incremented");
            return Ok(line.quantity);
        }

        let ceiling = u32::try_from(available_stock).unwrap_or(u32::MAX);
        self.lines
            .push(CartLine::new(article_id, name.to_string(), unit_price, ceiling));
        tracing::debug!(article_id, stock_ceiling = ceiling, "Cart line added");
        Ok(1)
    }

    /// [`Cart::add_item`] with the fields of a catalog article
    pub fn add_article(&mut self, article: &Article) -> Result<u32, CartError> {
        self.add_item(article.id, &article.name, article.price, article.stock)
    }

    /// Apply a signed quantity step to a line
    ///
    /// Reaching zero or below removes the line; going above the ceiling is
    /// refused.
    pub fn change_quantity(
        &mut self,
        article_id: i64,
        delta: i64,
    ) -> Result<QuantityChange, CartError> {
        let Some(idx) = self.position(article_id) else {
            return Ok(QuantityChange::Missing);
        };

        let line = &mut self.lines[idx];
        let new_quantity = i64::from(line.quantity).saturating_add(delta);

        if new_quantity <= 0 {
            self.lines.remove(idx);
            tracing::debug!(article_id, "Cart line removed (quantity reached zero)");
            return Ok(QuantityChange::Removed);
        }
        if new_quantity > i64::from(line.stock_ceiling) {
            return Err(CartError::StockLimit {
                article_id,
                name: line.name.clone(),
                available: line.stock_ceiling,
            });
        }

        // bounded by stock_ceiling, which is a u32
        line.quantity = new_quantity as u32;
        Ok(QuantityChange::Updated(line.quantity))
    }

    /// Drop the line for an article, if any
    pub fn remove_item(&mut self, article_id: i64) -> Option<CartLine> {
        let idx = self.position(article_id)?;
        Some(self.lines.remove(idx))
    }

    /// Snapshot of the order for `POST /api/pedidos`
    pub fn prepare_save_payload(&self) -> Result<OrderPayload, CartError> {
        let table = self
            .selected_table
            .as_ref()
            .ok_or(CartError::NoTableSelected)?;
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        Ok(OrderPayload {
            table_id: table.id,
            items: self
                .lines
                .iter()
                .map(|l| OrderPayloadItem {
                    article_id: l.article_id,
                    name: l.name.clone(),
                    unit_price: l.unit_price,
                    quantity: l.quantity,
                })
                .collect(),
            total: round_money(self.total()),
            order_id: self.editing_order_id,
        })
    }

    /// The server accepted the order: start over with an empty draft
    pub fn on_save_succeeded(&mut self) {
        self.clear();
    }

    /// Abandon the draft (cancel button)
    pub fn reset(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.selected_table = None;
        self.editing_order_id = None;
    }

    /// Replace the whole cart with a persisted order so it can be amended
    ///
    /// Each line's ceiling is re-read from `catalog`. Articles no longer in
    /// the catalog get [`FALLBACK_STOCK_CEILING`]. The ceiling is never
    /// below the persisted quantity, so a re-opened line can always be
    /// decremented.
    pub fn load_for_editing(&mut self, order: &OrderDetail, catalog: &[Article]) {
        self.clear();
        self.editing_order_id = Some(order.id);

        match order.table_id {
            Some(table_id) => self.select_table(table_id, order.table_name.clone()),
            None => tracing::warn!(order_id = order.id, "Order has no table reference"),
        }

        for item in &order.items {
            let Some(article_id) = item.article_id else {
                tracing::warn!(
                    order_id = order.id,
                    name = %item.name,
                    "Skipping order line without article reference"
                );
                continue;
            };
            if item.quantity <= 0 {
                continue;
            }
            let quantity = u32::try_from(item.quantity).unwrap_or(u32::MAX);

            let live_stock = catalog
                .iter()
                .find(|a| a.id == article_id)
                .map(|a| u32::try_from(a.stock.max(0)).unwrap_or(u32::MAX));
            if live_stock.is_none() {
                tracing::debug!(article_id, "Article missing from catalog, using fallback ceiling");
            }
            let ceiling = live_stock.unwrap_or(FALLBACK_STOCK_CEILING);

            match self.position(article_id) {
                Some(idx) => {
                    let line = &mut self.lines[idx];
                    line.quantity = line.quantity.saturating_add(quantity);
                    line.stock_ceiling = line.stock_ceiling.max(line.quantity);
                }
                None => self.lines.push(CartLine {
                    article_id,
                    name: item.name.clone(),
                    unit_price: item.unit_price,
                    quantity,
                    stock_ceiling: ceiling.max(quantity),
                }),
            }
        }
    }
}
