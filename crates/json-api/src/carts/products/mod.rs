//! Cart Product Handlers
//!
//! A cart holds product references. Listing resolves them to current product
//! records.

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
