//! Order Model
//!
//! Wire shapes of the `pedidos` endpoints: the save payload built from the
//! cart, the history rows, and the detail used to re-open an order.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Order status as stored by the server
///
/// Unknown values are kept verbatim so a newer server does not break the
/// history view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    InPreparation,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDIENTE",
            Self::InPreparation => "EN PREPARACION",
            Self::Completed => "COMPLETADO",
            Self::Cancelled => "CANCELADO",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDIENTE" => Self::Pending,
            "EN PREPARACION" => Self::InPreparation,
            "COMPLETADO" => Self::Completed,
            "CANCELADO" => Self::Cancelled,
            _ => Self::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

/// `YYYY-MM-DD HH:MM:SS`, the timestamp format of the orders table
pub mod order_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Save payload
// ============================================================================

/// One line of the save payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayloadItem {
    #[serde(rename = "id")]
    pub article_id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Create-or-amend request for `POST /api/pedidos`
///
/// `order_id` is `null` for a new order and names the amended order
/// otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayload {
    #[serde(rename = "mesa_id")]
    pub table_id: i64,
    pub items: Vec<OrderPayloadItem>,
    /// Rounded to two decimals, sent as a decimal string
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(rename = "pedido_id")]
    pub order_id: Option<i64>,
}

/// Answer of `POST /api/pedidos`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveOrderResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "pedido_id", default)]
    pub order_id: Option<i64>,
}

// ============================================================================
// History and detail
// ============================================================================

/// Row of the order history (`GET /api/pedidos`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    pub id: i64,
    #[serde(rename = "fecha", with = "order_timestamp")]
    pub placed_at: NaiveDateTime,
    #[serde(rename = "mesa_nombre")]
    pub table_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(rename = "estado", default)]
    pub status: OrderStatus,
}

/// Persisted order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetailItem {
    /// Null when the article row was removed from the database
    #[serde(rename = "articulo_id", default)]
    pub article_id: Option<i64>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

/// Full order as returned by `GET /api/pedidos/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    pub id: i64,
    #[serde(rename = "fecha", with = "order_timestamp")]
    pub placed_at: NaiveDateTime,
    /// Table reference; the column kept its historical name
    #[serde(rename = "proveedor_id", default)]
    pub table_id: Option<i64>,
    #[serde(rename = "mesa_nombre", default)]
    pub table_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(rename = "estado", default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderDetailItem>,
}

/// `{success, pedido}` envelope of the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "pedido", default)]
    pub order: Option<OrderDetail>,
}

impl OrderDetailResponse {
    pub fn into_result(self) -> Result<OrderDetail, AppError> {
        match (self.success, self.order) {
            (true, Some(order)) => Ok(order),
            (true, None) => Err(AppError::new(ErrorCode::OrderNotFound)),
            (false, _) => Err(AppError::with_message(
                ErrorCode::OrderNotFound,
                self.message
                    .unwrap_or_else(|| ErrorCode::OrderNotFound.message().to_string()),
            )),
        }
    }
}

// ============================================================================
// Filters
// ============================================================================

/// History / export filters; empty fields are left out of the query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub table_id: Option<i64>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn table(mut self, table_id: i64) -> Self {
        self.table_id = Some(table_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.table_id.is_none()
    }

    /// Query pairs in the server's parameter names
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(d) = self.start_date {
            pairs.push(("fecha_inicio", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.end_date {
            pairs.push(("fecha_fin", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(id) = self.table_id {
            pairs.push(("mesa_id", id.to_string()));
        }
        pairs
    }

    /// `?a=1&b=2`, or an empty string when no filter is set
    ///
    /// Values are dates and integers, so no percent-encoding is needed.
    pub fn to_query_string(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}
