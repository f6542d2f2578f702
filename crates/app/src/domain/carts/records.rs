//! Cart Records

use jiff::Timestamp;

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
///
/// `products` keeps insertion order and may hold the same product more than
/// once. References are not checked against the products table, so entries
/// can outlive the product they point to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub products: Vec<ProductUuid>,
    pub created_at: Timestamp,
}
