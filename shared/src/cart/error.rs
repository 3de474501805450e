//! Cart rejections
//!
//! Every variant is a user-facing notice: the mutation was refused and the
//! cart is unchanged.

use thiserror::Error;

use crate::error::{AppError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("{name} is sold out")]
    OutOfStock { article_id: i64, name: String },

    #[error("Only {available} units of {name} left")]
    StockLimit {
        article_id: i64,
        name: String,
        available: u32,
    },

    #[error("Select a table before saving the order")]
    NoTableSelected,

    #[error("The order has no items")]
    EmptyCart,
}

impl CartError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::OutOfStock { .. } => ErrorCode::ArticleOutOfStock,
            Self::StockLimit { .. } => ErrorCode::ArticleStockLimit,
            Self::NoTableSelected => ErrorCode::OrderNoTable,
            Self::EmptyCart => ErrorCode::OrderEmpty,
        }
    }
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            CartError::OutOfStock { article_id, .. } => app.with_detail("article_id", article_id),
            CartError::StockLimit {
                article_id,
                available,
                ..
            } => app
                .with_detail("article_id", article_id)
                .with_detail("available", available),
            CartError::NoTableSelected | CartError::EmptyCart => app,
        }
    }
}
