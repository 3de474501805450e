//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category (categoría)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    #[serde(rename = "nombre")]
    pub name: String,
}
