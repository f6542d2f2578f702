//! Product schema validation.
//!
//! Lengths are counted in characters, not bytes.

use thiserror::Error;

use crate::domain::products::data::{NewProduct, ProductUpdate};

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
pub const CODE_MAX_CHARS: usize = 8;
pub const IMAGE_MAX_CHARS: usize = 400;
pub const STOCK_MAX: i64 = 8000;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{field}` is required")]
    Required { field: &'static str },

    #[error("`{field}` must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("`{field}` must not exceed {max}")]
    OutOfRange { field: &'static str, max: i64 },

    #[error("`{field}` must be a finite number")]
    NotFinite { field: &'static str },
}

impl NewProduct {
    /// Check every field against the product schema.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("title", &self.title, TITLE_MAX_CHARS)?;
        required_text("description", &self.description, DESCRIPTION_MAX_CHARS)?;
        required_text("code", &self.code, CODE_MAX_CHARS)?;
        finite("price", self.price)?;
        at_most("stock", self.stock, STOCK_MAX)?;

        if let Some(image) = &self.image {
            max_chars("image", image, IMAGE_MAX_CHARS)?;
        }

        Ok(())
    }
}

impl ProductUpdate {
    /// Check the fields present in this update against the product schema.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            required_text("title", title, TITLE_MAX_CHARS)?;
        }

        if let Some(description) = &self.description {
            required_text("description", description, DESCRIPTION_MAX_CHARS)?;
        }

        if let Some(code) = &self.code {
            required_text("code", code, CODE_MAX_CHARS)?;
        }

        if let Some(price) = self.price {
            finite("price", price)?;
        }

        if let Some(stock) = self.stock {
            at_most("stock", stock, STOCK_MAX)?;
        }

        if let Some(Some(image)) = &self.image {
            max_chars("image", image, IMAGE_MAX_CHARS)?;
        }

        Ok(())
    }
}

fn required_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    max_chars(field, value, max)
}

fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }

    Ok(())
}

fn at_most(field: &'static str, value: i64, max: i64) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::OutOfRange { field, max });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> NewProduct {
        NewProduct {
            title: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 1.5,
            code: "PEN001".to_string(),
            image: None,
            stock: 100,
            timestamp: None,
        }
    }

    #[test]
    fn valid_product_passes() {
        assert_eq!(pen().validate(), Ok(()));
    }

    #[test]
    fn blank_title_is_required() {
        let product = NewProduct {
            title: "  ".to_string(),
            ..pen()
        };

        assert_eq!(
            product.validate(),
            Err(ValidationError::Required { field: "title" })
        );
    }

    #[test]
    fn code_longer_than_eight_characters_is_rejected() {
        let product = NewProduct {
            code: "PEN000001".to_string(),
            ..pen()
        };

        assert_eq!(
            product.validate(),
            Err(ValidationError::TooLong {
                field: "code",
                max: CODE_MAX_CHARS
            })
        );
    }

    #[test]
    fn lengths_are_counted_in_characters() {
        let product = NewProduct {
            code: "ÑÑÑÑÑÑÑÑ".to_string(),
            ..pen()
        };

        assert_eq!(product.validate(), Ok(()));
    }

    #[test]
    fn stock_boundary_is_inclusive() {
        let at_limit = NewProduct {
            stock: STOCK_MAX,
            ..pen()
        };
        let over_limit = NewProduct {
            stock: STOCK_MAX + 1,
            ..pen()
        };

        assert_eq!(at_limit.validate(), Ok(()));
        assert_eq!(
            over_limit.validate(),
            Err(ValidationError::OutOfRange {
                field: "stock",
                max: STOCK_MAX
            })
        );
    }

    #[test]
    fn oversized_image_is_rejected() {
        let product = NewProduct {
            image: Some("x".repeat(IMAGE_MAX_CHARS + 1)),
            ..pen()
        };

        assert_eq!(
            product.validate(),
            Err(ValidationError::TooLong {
                field: "image",
                max: IMAGE_MAX_CHARS
            })
        );
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let product = NewProduct {
            price: f64::NAN,
            ..pen()
        };

        assert_eq!(
            product.validate(),
            Err(ValidationError::NotFinite { field: "price" })
        );
    }

    #[test]
    fn empty_update_is_valid() {
        assert_eq!(ProductUpdate::default().validate(), Ok(()));
    }

    #[test]
    fn update_checks_only_present_fields() {
        let update = ProductUpdate {
            stock: Some(9000),
            ..ProductUpdate::default()
        };

        assert_eq!(
            update.validate(),
            Err(ValidationError::OutOfRange {
                field: "stock",
                max: STOCK_MAX
            })
        );

        let update = ProductUpdate {
            title: Some(String::new()),
            ..ProductUpdate::default()
        };

        assert_eq!(
            update.validate(),
            Err(ValidationError::Required { field: "title" })
        );
    }

    #[test]
    fn clearing_the_image_is_valid_but_oversized_replacement_is_not() {
        let clear = ProductUpdate {
            image: Some(None),
            ..ProductUpdate::default()
        };

        assert_eq!(clear.validate(), Ok(()));

        let oversized = ProductUpdate {
            image: Some(Some("x".repeat(IMAGE_MAX_CHARS + 1))),
            ..ProductUpdate::default()
        };

        assert_eq!(
            oversized.validate(),
            Err(ValidationError::TooLong {
                field: "image",
                max: IMAGE_MAX_CHARS
            })
        );
    }
}
