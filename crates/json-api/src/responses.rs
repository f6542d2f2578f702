//! JSON success responses.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Success body returned by mutating endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SuccessResponse {
    /// Human-readable outcome
    pub success: String,

    /// Identity of the created record, when one was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl SuccessResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            success: message.into(),
            id: None,
        }
    }

    pub(crate) fn created(message: &str, id: Uuid) -> Self {
        Self {
            success: format!("{message}: {id}"),
            id: Some(id),
        }
    }
}
