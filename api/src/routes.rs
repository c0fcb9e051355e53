//! Route table
//!
//! Everything except `/` and `/health` lives under `/api/v1`. Account
//! mutation routes sit behind the bearer middleware; login routes can be
//! rate limited per peer IP.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;

use crate::auth;
use crate::handlers;
use crate::AppState;

/// Build the application router.
///
/// Rate limiting keys on the peer address, so the server must be started
/// with `into_make_service_with_connect_info` when `rate_limit_login` is on.
pub fn build_router(state: AppState, rate_limit_login: bool) -> anyhow::Result<Router> {
    let login_routes = Router::new()
        .route("/token", post(handlers::token))
        .route("/login", post(handlers::login));

    let login_routes = if rate_limit_login {
        // 2 req/sec sustained, burst of 5
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(2)
                .burst_size(5)
                .finish()
                .context("Failed to build governor config")?,
        );
        login_routes.layer(GovernorLayer {
            config: governor_config,
        })
    } else {
        login_routes
    };

    let protected_routes = Router::new()
        .route("/users/me", get(handlers::get_me))
        .route(
            "/users/:id",
            put(handlers::update_user).delete(handlers::delete_user),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    let api = Router::new()
        // Users
        .route(
            "/users",
            post(handlers::create_user).get(handlers::list_users),
        )
        .route("/users/:id", get(handlers::get_user))
        .route("/users/:id/orders", get(handlers::list_user_orders))
        // Categories
        .route(
            "/categories",
            post(handlers::create_category).get(handlers::list_categories),
        )
        .route(
            "/categories/:id",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        // Products
        .route(
            "/products",
            post(handlers::create_product).get(handlers::list_products),
        )
        .route("/products/search", get(handlers::search_products))
        .route(
            "/products/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        // Orders
        .route(
            "/orders",
            post(handlers::create_order).get(handlers::list_orders),
        )
        .route(
            "/orders/:id",
            get(handlers::get_order).put(handlers::update_order),
        )
        .route("/orders/:id/cancel", put(handlers::cancel_order))
        .route("/orders/:id/items", post(handlers::add_order_item))
        .route(
            "/orders/items/:item_id",
            put(handlers::update_order_item).delete(handlers::remove_order_item),
        )
        .merge(protected_routes)
        .merge(login_routes);

    Ok(Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/api/v1", api)
        .with_state(state))
}
