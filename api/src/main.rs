//! Storefront API Server
//!
//! Commercial storefront backend: users, categories, products and orders.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns,
//! with writes and reads dispatched as commands and queries.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use sea_orm::{Database, DatabaseConnection};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod routes;

#[cfg(test)]
mod test_utils;


use adapters::{
    create_missing_tables, PostgresCategoryRepository, PostgresOrderRepository,
    PostgresProductRepository, PostgresUserRepository,
};
use app::{AuthService, CategoryService, OrderService, ProductService, UserService};
use auth::TokenKeys;
use config::Config;
use domain::ports::{CategoryRepository, OrderRepository, ProductRepository, UserRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository>>,
    pub category_service: Arc<CategoryService<dyn CategoryRepository>>,
    pub product_service: Arc<ProductService<dyn ProductRepository>>,
    pub order_service: Arc<OrderService<dyn OrderRepository>>,
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    /// Pool handle, used directly only by the health check
    pub db: DatabaseConnection,
}

impl AppState {
    /// Wire every service to its repository
    pub fn new(
        users: Arc<dyn UserRepository>,
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        keys: TokenKeys,
        db: DatabaseConnection,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users.clone())),
            category_service: Arc::new(CategoryService::new(categories)),
            product_service: Arc::new(ProductService::new(products)),
            order_service: Arc::new(OrderService::new(orders)),
            auth_service: Arc::new(AuthService::new(users, keys)),
            db,
        }
    }
}

fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", o))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Storefront API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    create_missing_tables(&db)
        .await
        .context("Failed to create tables")?;

    // Create adapters
    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));
    let category_repo = Arc::new(PostgresCategoryRepository::new(db.clone()));
    let product_repo = Arc::new(PostgresProductRepository::new(db.clone()));
    let order_repo = Arc::new(PostgresOrderRepository::new(db.clone()));

    // Create app state
    let state = AppState::new(
        user_repo,
        category_repo,
        product_repo,
        order_repo,
        TokenKeys::new(&config.secret_key, config.access_token_expire_minutes),
        db,
    );

    // Build router
    let app = routes::build_router(state, config.login_rate_limit)?
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
