//! POS Client - order taking against the restaurant API
//!
//! Provides the HTTP client for the restaurant backend, typed endpoints, and
//! the order-taking session built on [`shared::Cart`].

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod session;

pub use api::PosApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::{CartEvent, CartStore, CartView, Catalog, PosSession};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{AppError, Cart, CartError, ErrorCode, QuantityChange};
