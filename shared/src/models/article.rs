//! Article Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sellable menu item (artículo) with live stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unit price in currency unit
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units left; zero or less means sold out
    pub stock: i64,
    #[serde(rename = "categoria_id", default)]
    pub category_id: Option<i64>,
    /// Joined by the server on list queries
    #[serde(
        rename = "categoria_nombre",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_name: Option<String>,
}

impl Article {
    /// Whether at least one unit can be ordered
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

/// Create / update article payload
///
/// The update endpoint replaces every field, so both operations share it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i64,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
}
