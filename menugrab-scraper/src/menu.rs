use serde::{Deserialize, Serialize};

/// One flattened menu record, in document order.
///
/// `price` is `None` when the price element is absent or its text does
/// not parse as a number; category and name are never empty because a
/// missing heading or name element aborts extraction upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRow {
    pub category: String,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
}

/// Per-entry fields before the parent category name is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
}
