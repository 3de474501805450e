//! Data models
//!
//! Wire types of the restaurant API. Rust field names are English; the
//! Spanish column names of the server live only in `serde` attributes.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod article;
pub mod category;
pub mod dining_table;
pub mod order;
pub mod statistics;

// Re-exports
pub use article::*;
pub use category::*;
pub use dining_table::*;
pub use order::*;
pub use statistics::*;
