//! Sales statistics (`GET /api/estadisticas`)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::round_money;

/// Sales total for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySales {
    #[serde(rename = "dia")]
    pub day: NaiveDate,
    #[serde(rename = "total_ventas", with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Sales total for one month (`YYYY-MM`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySales {
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "total_ventas", with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Ranking row: units sold and revenue per article name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleSales {
    #[serde(rename = "producto")]
    pub name: String,
    #[serde(rename = "cantidad_vendida")]
    pub quantity: i64,
    #[serde(rename = "ingresos_totales", with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// Revenue per category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySales {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "total_vendido", with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Direction of the month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Current month against the previous one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthComparison {
    #[serde(rename = "mesActual", with = "rust_decimal::serde::float")]
    pub current: Decimal,
    #[serde(rename = "mesAnterior", with = "rust_decimal::serde::float")]
    pub previous: Decimal,
}

impl MonthComparison {
    /// Percentage change, rounded to two decimals
    ///
    /// A previous month without sales counts as +100% when the current month
    /// sold anything, and 0% otherwise.
    pub fn percent_change(&self) -> Decimal {
        let pct = if self.previous > Decimal::ZERO {
            (self.current - self.previous) / self.previous * Decimal::ONE_HUNDRED
        } else if self.current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        round_money(pct)
    }

    pub fn trend(&self) -> Trend {
        let pct = self.percent_change();
        if pct > Decimal::ZERO {
            Trend::Up
        } else if pct < Decimal::ZERO {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Aggregate returned by the statistics endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesStatistics {
    /// Last 30 days, oldest first
    #[serde(rename = "ventasDiarias", default)]
    pub daily: Vec<DailySales>,
    /// Last 12 months, newest first
    #[serde(rename = "ventasMensuales", default)]
    pub monthly: Vec<MonthlySales>,
    #[serde(rename = "topProductos", default)]
    pub best_sellers: Vec<ArticleSales>,
    #[serde(rename = "menosVendidos", default)]
    pub worst_sellers: Vec<ArticleSales>,
    #[serde(rename = "ventasPorCategoria", default)]
    pub by_category: Vec<CategorySales>,
    #[serde(rename = "comparativaMes")]
    pub month_comparison: MonthComparison,
}
