//! App Router

use salvo::Router;

use crate::{auth, carts, products};

/// Routes under `/api`. Product mutations sit behind the shared-secret check;
/// product reads and every cart route are public.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("productos")
                .get(products::handlers::index::handler)
                .push(Router::with_path("{id}").get(products::handlers::get::handler))
                .push(
                    Router::new()
                        .hoop(auth::middleware::handler)
                        .post(products::handlers::create::handler)
                        .push(
                            Router::with_path("{id}")
                                .put(products::handlers::update::handler)
                                .delete(products::handlers::delete::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("carrito")
                .post(carts::handlers::create::handler)
                .push(
                    Router::with_path("{id}")
                        .delete(carts::handlers::delete::handler)
                        .push(
                            Router::with_path("productos")
                                .get(carts::products::index::handler)
                                .post(carts::products::create::handler)
                                .push(
                                    Router::with_path("{id_prod}")
                                        .delete(carts::products::delete::handler),
                                ),
                        ),
                ),
        )
}
