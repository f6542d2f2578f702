//! State

use std::sync::Arc;

use storefront_app::context::AppContext;

/// Shared handler state: the service handles built at startup.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
