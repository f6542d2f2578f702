//! Products Data

use jiff::Timestamp;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub code: String,
    pub image: Option<String>,
    pub stock: i64,

    /// Creation time; the store stamps the insertion time when omitted.
    pub timestamp: Option<Timestamp>,
}

/// Product Update Data
///
/// Only the fields that are `Some` are changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub code: Option<String>,

    /// `Some(None)` removes the image.
    pub image: Option<Option<String>>,

    pub stock: Option<i64>,
}
