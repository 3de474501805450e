//! Session layer
//!
//! Glue between the pure [`shared::Cart`] and the network: an observable
//! cart, the catalog snapshot it is checked against, and the session that
//! saves and re-opens orders.

mod catalog;
mod pos;
mod store;

pub use catalog::Catalog;
pub use pos::PosSession;
pub use store::{CartEvent, CartStore, CartView};
