//! Product request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::ProductRecord,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub code: String,
    #[serde(default)]
    pub image: Option<String>,
    pub stock: i64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            title: request.title,
            description: request.description,
            price: request.price,
            code: request.code,
            image: request.image,
            stock: request.stock,
            timestamp: None,
        }
    }
}

/// Update Product Request
///
/// Absent fields are left unchanged. An explicit `"image": null` removes the
/// image.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub code: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[salvo(schema(value_type = Option<String>))]
    pub image: Option<Option<String>>,
    pub stock: Option<i64>,
}

/// Wrap any value that is present, `null` included, so it can be told apart
/// from an absent key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            title: request.title,
            description: request.description,
            price: request.price,
            code: request.code,
            image: request.image,
            stock: request.stock,
        }
    }
}

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub price: f64,

    /// Unique product code
    pub code: String,

    /// Image URL, if any
    pub image: Option<String>,

    /// Units in stock
    pub stock: i64,

    /// When the product was created (RFC 3339)
    pub timestamp: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into_uuid(),
            title: product.title,
            description: product.description,
            price: product.price,
            code: product.code,
            image: product.image,
            stock: product.stock,
            timestamp: product.timestamp.to_string(),
        }
    }
}
