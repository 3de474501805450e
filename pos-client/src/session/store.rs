//! Observable cart
//!
//! [`CartStore`] wraps a [`Cart`] behind a lock and broadcasts a
//! [`CartEvent`] after every mutation, so any number of views can re-render
//! from the same state.

use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::cart::QuantityChange;
use shared::models::{Article, OrderDetail, OrderPayload};
use shared::money::{format_currency, round_money};
use shared::{Cart, CartError, CartLine, SelectedTable};
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 64;

/// Render-ready snapshot of the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub selected_table: Option<SelectedTable>,
    pub lines: Vec<CartLine>,
    /// Rounded to two decimals
    pub total: Decimal,
    pub item_count: u32,
    pub can_save: bool,
    pub editing_order_id: Option<i64>,
}

impl CartView {
    pub fn total_label(&self) -> String {
        format_currency(self.total)
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            selected_table: cart.selected_table().cloned(),
            lines: cart.lines().to_vec(),
            total: round_money(cart.total()),
            item_count: cart.item_count(),
            can_save: cart.can_save(),
            editing_order_id: cart.editing_order_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// Cart state after a mutation
    Changed(CartView),
    /// Message for the user (rejection, save result)
    Notice(String),
}

#[derive(Debug)]
pub struct CartStore {
    cart: Mutex<Cart>,
    events: broadcast::Sender<CartEvent>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            cart: Mutex::new(Cart::new()),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    pub fn snapshot(&self) -> Cart {
        self.cart.lock().clone()
    }

    pub fn view(&self) -> CartView {
        CartView::from(&*self.cart.lock())
    }

    pub fn can_save(&self) -> bool {
        self.cart.lock().can_save()
    }

    pub fn selected_table(&self) -> Option<SelectedTable> {
        self.cart.lock().selected_table().cloned()
    }

    pub fn editing_order_id(&self) -> Option<i64> {
        self.cart.lock().editing_order_id()
    }

    /// Publish a user notice
    pub fn notify(&self, message: impl Into<String>) {
        // no subscribers is fine
        let _ = self.events.send(CartEvent::Notice(message.into()));
    }

    /// Run a mutation under the lock, then publish
    ///
    /// A rejection is published as a notice followed by the unchanged view.
    fn mutate<R>(
        &self,
        op: impl FnOnce(&mut Cart) -> Result<R, CartError>,
    ) -> Result<R, CartError> {
        let (result, view) = {
            let mut cart = self.cart.lock();
            let result = op(&mut cart);
            (result, CartView::from(&*cart))
        };

        if let Err(e) = &result {
            tracing::warn!(error = %e, "Cart change rejected");
            self.notify(e.to_string());
        }
        let _ = self.events.send(CartEvent::Changed(view));
        result
    }

    pub fn select_table(&self, table_id: i64, name: impl Into<String>) {
        let name = name.into();
        let _ = self.mutate(|cart| {
            cart.select_table(table_id, name);
            Ok(())
        });
    }

    /// Select a table only while none is selected
    ///
    /// The check and the selection happen under one lock, so a table set
    /// concurrently (for instance by loading an order) is never overwritten.
    /// Publishes only when it selects.
    pub fn select_table_if_none(&self, table_id: i64, name: impl Into<String>) -> bool {
        let view = {
            let mut cart = self.cart.lock();
            if cart.selected_table().is_some() {
                return false;
            }
            cart.select_table(table_id, name);
            CartView::from(&*cart)
        };
        let _ = self.events.send(CartEvent::Changed(view));
        true
    }

    pub fn add_item(
        &self,
        article_id: i64,
        name: &str,
        unit_price: Decimal,
        available_stock: i64,
    ) -> Result<u32, CartError> {
        self.mutate(|cart| cart.add_item(article_id, name, unit_price, available_stock))
    }

    pub fn add_article(&self, article: &Article) -> Result<u32, CartError> {
        self.mutate(|cart| cart.add_article(article))
    }

    pub fn change_quantity(&self, article_id: i64, delta: i64) -> Result<QuantityChange, CartError> {
        self.mutate(|cart| cart.change_quantity(article_id, delta))
    }

    pub fn remove_item(&self, article_id: i64) -> Option<CartLine> {
        self.mutate(|cart| Ok(cart.remove_item(article_id)))
            .ok()
            .flatten()
    }

    /// Does not publish; a refused save is reported by the caller
    pub fn prepare_save_payload(&self) -> Result<OrderPayload, CartError> {
        self.cart.lock().prepare_save_payload()
    }

    pub fn on_save_succeeded(&self) {
        let _ = self.mutate(|cart| {
            cart.on_save_succeeded();
            Ok(())
        });
    }

    pub fn reset(&self) {
        let _ = self.mutate(|cart| {
            cart.reset();
            Ok(())
        });
    }

    pub fn load_for_editing(&self, order: &OrderDetail, catalog: &[Article]) {
        let _ = self.mutate(|cart| {
            cart.load_for_editing(order, catalog);
            Ok(())
        });
    }
}
