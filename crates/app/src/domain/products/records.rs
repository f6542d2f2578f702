//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub code: String,
    pub image: Option<String>,
    pub stock: i64,
    pub timestamp: Timestamp,
}
