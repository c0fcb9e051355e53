//! Order handlers
//!
//! Orders and their line items, plus the per-user order listing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::extract::{ValidatedJson, ValidatedQuery};
use crate::app::commands::{
    AddOrderItem, CancelOrder, CreateOrder, OrderItemInput, OrderItemPatch, OrderPatch,
    RemoveOrderItem, UpdateOrder, UpdateOrderItem,
};
use crate::app::dto::{MessageDto, OrderDto, OrderItemDto};
use crate::app::queries::{GetOrder, ListOrders, ListUserOrders, PageParams};
use crate::app::{CommandHandler, QueryHandler};
use crate::domain::entities::{OrderId, OrderItemId, UserId};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for cancelling an order
#[derive(Debug, Deserialize)]
pub struct CancelParams {
    pub reason: Option<String>,
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(command): ValidatedJson<CreateOrder>,
) -> Result<(StatusCode, Json<OrderDto>), AppError> {
    let order = state.order_service.execute(command).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListOrders>,
) -> Result<Json<Vec<OrderDto>>, AppError> {
    Ok(Json(state.order_service.fetch(query).await?))
}

/// GET /orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrderDto>, AppError> {
    let query = GetOrder { id: OrderId(id) };
    Ok(Json(state.order_service.fetch(query).await?))
}

/// PUT /orders/:id
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(patch): ValidatedJson<OrderPatch>,
) -> Result<Json<OrderDto>, AppError> {
    let command = UpdateOrder {
        id: OrderId(id),
        patch,
    };
    Ok(Json(state.order_service.execute(command).await?))
}

/// PUT /orders/:id/cancel
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<CancelParams>,
) -> Result<Json<OrderDto>, AppError> {
    let command = CancelOrder {
        id: OrderId(id),
        reason: params.reason,
    };
    Ok(Json(state.order_service.execute(command).await?))
}

/// POST /orders/:id/items
///
/// Returns the whole order with the new line included.
pub async fn add_order_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(item): ValidatedJson<OrderItemInput>,
) -> Result<(StatusCode, Json<OrderDto>), AppError> {
    let command = AddOrderItem {
        order_id: OrderId(id),
        item,
    };
    let order = state.order_service.execute(command).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /orders/items/:item_id
pub async fn update_order_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
    ValidatedJson(patch): ValidatedJson<OrderItemPatch>,
) -> Result<Json<OrderItemDto>, AppError> {
    let command = UpdateOrderItem {
        id: OrderItemId(item_id),
        patch,
    };
    Ok(Json(state.order_service.execute(command).await?))
}

/// DELETE /orders/items/:item_id
pub async fn remove_order_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<Json<MessageDto>, AppError> {
    state
        .order_service
        .execute(RemoveOrderItem {
            id: OrderItemId(item_id),
        })
        .await?;
    Ok(Json(MessageDto::new("Order item removed successfully")))
}

/// GET /users/:id/orders
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> Result<Json<Vec<OrderDto>>, AppError> {
    let query = ListUserOrders {
        user_id: UserId(user_id),
        page: params.into(),
    };
    Ok(Json(state.order_service.fetch(query).await?))
}
