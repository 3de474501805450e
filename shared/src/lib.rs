//! Shared types for the Mesa POS client
//!
//! Wire models for the restaurant API, the error code system, money helpers
//! and the in-memory order cart. Nothing in this crate performs I/O.

pub mod cart;
pub mod error;
pub mod models;
pub mod money;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartError, CartLine, QuantityChange, SelectedTable};
pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
