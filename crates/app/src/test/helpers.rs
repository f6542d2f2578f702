//! Test Helpers

use crate::domain::products::data::NewProduct;

/// A valid product payload with the given code.
pub(crate) fn pen(code: &str) -> NewProduct {
    NewProduct {
        title: "Pen".to_string(),
        description: "Blue pen".to_string(),
        price: 1.5,
        code: code.to_string(),
        image: None,
        stock: 100,
        timestamp: None,
    }
}
