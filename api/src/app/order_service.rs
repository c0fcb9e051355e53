//! Order service
//!
//! Order placement with derived totals, status changes and line item
//! maintenance. Item mutations after placement recompute the line's own
//! total but leave the order's monetary fields as they were at creation.

use std::sync::Arc;

use async_trait::async_trait;

use super::commands::{
    AddOrderItem, CancelOrder, CreateOrder, RemoveOrderItem, UpdateOrder, UpdateOrderItem,
};
use super::dispatch::{CommandHandler, QueryHandler};
use super::dto::{OrderDto, OrderItemDto};
use super::queries::{GetOrder, ListOrders, ListUserOrders};
use super::validation::Paged;
use crate::domain::entities::{
    NewOrder, NewOrderItem, OrderChanges, OrderFilter, OrderId, OrderItemChanges, OrderItemId,
    OrderStatus, OrderTotals, UserId,
};
use crate::domain::ports::OrderRepository;
use crate::error::{AppError, DomainError};

/// Service for placing and maintaining orders
pub struct OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    orders: Arc<R>,
}

impl<R> OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    pub fn new(orders: Arc<R>) -> Self {
        Self { orders }
    }

    async fn load(&self, id: OrderId) -> Result<OrderDto, AppError> {
        let order = self
            .orders
            .find_by_id(&id)
            .await?
            .ok_or_else(|| order_not_found(id))?;

        Ok(order.into())
    }
}

fn order_not_found(id: OrderId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "Order with id {} not found",
        id
    )))
}

fn item_not_found(id: OrderItemId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "Order item with id {} not found",
        id
    )))
}

#[async_trait]
impl<R> CommandHandler<CreateOrder> for OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    type Output = OrderDto;

    async fn execute(&self, command: CreateOrder) -> Result<OrderDto, AppError> {
        let items = command
            .items
            .iter()
            .map(NewOrderItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let totals = OrderTotals::compute(&items)?;

        let new_order = NewOrder {
            user_id: UserId(command.user_id),
            payment_method: command.payment_method,
            totals,
            shipping_address: command.shipping_address,
            billing_address: command.billing_address,
            notes: command.notes,
            items,
        };

        let order = self.orders.create(&new_order).await?;
        tracing::info!(
            order_id = %order.id,
            order_number = %order.order_number,
            user_id = %order.user_id,
            total = %order.total_amount,
            "Order created"
        );

        Ok(order.into())
    }
}

#[async_trait]
impl<R> CommandHandler<UpdateOrder> for OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    type Output = OrderDto;

    async fn execute(&self, command: UpdateOrder) -> Result<OrderDto, AppError> {
        let changes = OrderChanges::from(command.patch);
        let order = self
            .orders
            .update(&command.id, &changes)
            .await?
            .ok_or_else(|| order_not_found(command.id))?;

        Ok(order.into())
    }
}

#[async_trait]
impl<R> CommandHandler<CancelOrder> for OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    type Output = OrderDto;

    async fn execute(&self, command: CancelOrder) -> Result<OrderDto, AppError> {
        let order = self
            .orders
            .update_status(&command.id, OrderStatus::Cancelled)
            .await?
            .ok_or_else(|| order_not_found(command.id))?;

        tracing::info!(
            order_id = %order.id,
            reason = command.reason.as_deref().unwrap_or("none given"),
            "Order cancelled"
        );

        Ok(order.into())
    }
}

#[async_trait]
impl<R> CommandHandler<AddOrderItem> for OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    type Output = OrderDto;

    async fn execute(&self, command: AddOrderItem) -> Result<OrderDto, AppError> {
        let item = NewOrderItem::try_from(&command.item)?;
        self.orders
            .add_item(&command.order_id, &item)
            .await?
            .ok_or_else(|| order_not_found(command.order_id))?;

        self.load(command.order_id).await
    }
}

#[async_trait]
impl<R> CommandHandler<UpdateOrderItem> for OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    type Output = OrderItemDto;

    async fn execute(&self, command: UpdateOrderItem) -> Result<OrderItemDto, AppError> {
        let changes = OrderItemChanges::from(command.patch);
        let item = self
            .orders
            .update_item(&command.id, &changes)
            .await?
            .ok_or_else(|| item_not_found(command.id))?;

        Ok(item.into())
    }
}

#[async_trait]
impl<R> CommandHandler<RemoveOrderItem> for OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    type Output = ();

    async fn execute(&self, command: RemoveOrderItem) -> Result<(), AppError> {
        if !self.orders.delete_item(&command.id).await? {
            return Err(item_not_found(command.id));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> QueryHandler<GetOrder> for OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    type Output = OrderDto;

    async fn fetch(&self, query: GetOrder) -> Result<OrderDto, AppError> {
        self.load(query.id).await
    }
}

#[async_trait]
impl<R> QueryHandler<ListOrders> for OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    type Output = Vec<OrderDto>;

    async fn fetch(&self, query: ListOrders) -> Result<Vec<OrderDto>, AppError> {
        let filter = OrderFilter {
            status: query.status,
            user_id: None,
        };
        let orders = self.orders.list(&filter, query.page()).await?;

        Ok(orders.into_iter().map(OrderDto::from).collect())
    }
}

#[async_trait]
impl<R> QueryHandler<ListUserOrders> for OrderService<R>
where
    R: OrderRepository + ?Sized,
{
    type Output = Vec<OrderDto>;

    async fn fetch(&self, query: ListUserOrders) -> Result<Vec<OrderDto>, AppError> {
        let filter = OrderFilter {
            status: None,
            user_id: Some(query.user_id),
        };
        let orders = self.orders.list(&filter, query.page).await?;

        Ok(orders.into_iter().map(OrderDto::from).collect())
    }
}
