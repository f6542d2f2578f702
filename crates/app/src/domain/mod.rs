//! Storefront Domain Concerns

pub mod cart_products;
pub mod carts;
pub mod products;
