//! Path parameter parsing helpers.

use salvo::oapi::extract::PathParam;
use tracing::debug;

use storefront_app::uuids::TypedUuid;

use crate::errors::ApiError;

pub(crate) trait PathParamExt {
    /// Parse the raw segment as an identity, answering with `rejection` when it
    /// is malformed.
    fn into_typed_uuid<T>(self, rejection: ApiError) -> Result<TypedUuid<T>, ApiError>;
}

impl PathParamExt for PathParam<String> {
    fn into_typed_uuid<T>(self, rejection: ApiError) -> Result<TypedUuid<T>, ApiError> {
        self.into_inner().parse().map_err(|source| {
            debug!("rejected path parameter: {source}");

            rejection
        })
    }
}
