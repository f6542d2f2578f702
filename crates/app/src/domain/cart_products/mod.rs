//! Cart Products
//!
//! Manages the product references embedded in a cart.

pub mod service;

pub use service::*;
