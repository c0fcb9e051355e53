//! Product handlers
//!
//! Catalog CRUD plus `GET /products/search?query=...`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::{ValidatedJson, ValidatedQuery};
use crate::app::commands::{CreateProduct, DeleteProduct, ProductPatch, UpdateProduct};
use crate::app::dto::{MessageDto, ProductDto};
use crate::app::queries::{GetProduct, ListProducts, SearchProducts};
use crate::app::{CommandHandler, QueryHandler};
use crate::domain::entities::ProductId;
use crate::error::AppError;
use crate::AppState;

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(command): ValidatedJson<CreateProduct>,
) -> Result<(StatusCode, Json<ProductDto>), AppError> {
    let product = state.product_service.execute(command).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListProducts>,
) -> Result<Json<Vec<ProductDto>>, AppError> {
    Ok(Json(state.product_service.fetch(query).await?))
}

/// GET /products/search
pub async fn search_products(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchProducts>,
) -> Result<Json<Vec<ProductDto>>, AppError> {
    Ok(Json(state.product_service.fetch(query).await?))
}

/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDto>, AppError> {
    let query = GetProduct { id: ProductId(id) };
    Ok(Json(state.product_service.fetch(query).await?))
}

/// PUT /products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(patch): ValidatedJson<ProductPatch>,
) -> Result<Json<ProductDto>, AppError> {
    let command = UpdateProduct {
        id: ProductId(id),
        patch,
    };
    Ok(Json(state.product_service.execute(command).await?))
}

/// DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageDto>, AppError> {
    state
        .product_service
        .execute(DeleteProduct { id: ProductId(id) })
        .await?;
    Ok(Json(MessageDto::new("Product deleted successfully")))
}
