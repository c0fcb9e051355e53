//! PostgreSQL adapter for OrderRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use crate::domain::entities::{
    line_total, new_order_number, NewOrder, NewOrderItem, Order, OrderChanges, OrderFilter,
    OrderId, OrderItem, OrderItemChanges, OrderItemId, OrderStatus, Page, PaymentMethod,
    ProductId, UserId,
};
use crate::domain::ports::OrderRepository;
use crate::entity::{order_items, orders};
use crate::error::DomainError;

/// PostgreSQL implementation of OrderRepository
pub struct PostgresOrderRepository {
    db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the items of every given order and nest them
    async fn with_items(&self, models: Vec<orders::Model>) -> Result<Vec<Order>, DomainError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let items = order_items::Entity::find()
            .filter(order_items::Column::OrderId.is_in(ids))
            .order_by_asc(order_items::Column::Id)
            .all(&self.db)
            .await?;

        let mut by_order: HashMap<i32, Vec<OrderItem>> = HashMap::new();
        for item in items {
            by_order.entry(item.order_id).or_default().push(item.into());
        }

        models
            .into_iter()
            .map(|m| {
                let items = by_order.remove(&m.id).unwrap_or_default();
                into_order(m, items)
            })
            .collect()
    }

    async fn with_items_one(&self, model: orders::Model) -> Result<Order, DomainError> {
        let items = order_items::Entity::find()
            .filter(order_items::Column::OrderId.eq(model.id))
            .order_by_asc(order_items::Column::Id)
            .all(&self.db)
            .await?;

        into_order(model, items.into_iter().map(|i| i.into()).collect())
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        match orders::Entity::find_by_id(id.0).one(&self.db).await? {
            Some(model) => Ok(Some(self.with_items_one(model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &OrderFilter, page: Page) -> Result<Vec<Order>, DomainError> {
        let mut query = orders::Entity::find();
        if let Some(status) = filter.status {
            query = query.filter(orders::Column::Status.eq(status.to_string()));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(orders::Column::UserId.eq(user_id.0));
        }

        let results = query
            .order_by_asc(orders::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await?;

        self.with_items(results).await
    }

    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let order_model = orders::ActiveModel {
            order_number: Set(new_order_number(now)),
            user_id: Set(order.user_id.0),
            status: Set(OrderStatus::Pending.to_string()),
            payment_method: Set(order.payment_method.to_string()),
            subtotal: Set(order.totals.subtotal),
            tax_amount: Set(order.totals.tax_amount),
            shipping_cost: Set(order.totals.shipping_cost),
            total_amount: Set(order.totals.total_amount),
            shipping_address: Set(order.shipping_address.clone()),
            billing_address: Set(order.billing_address.clone()),
            notes: Set(order.notes.clone()),
            created_at: Set(now.fixed_offset()),
            updated_at: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut items = Vec::with_capacity(order.items.len());
        for item in &order.items {
            let item_model = item_active_model(order_model.id, item).insert(&txn).await?;
            items.push(item_model.into());
        }

        txn.commit().await?;

        into_order(order_model, items)
    }

    async fn update(
        &self,
        id: &OrderId,
        changes: &OrderChanges,
    ) -> Result<Option<Order>, DomainError> {
        let Some(existing) = orders::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: orders::ActiveModel = existing.into();
        if let Some(status) = changes.status {
            model.status = Set(status.to_string());
        }
        if let Some(payment_method) = changes.payment_method {
            model.payment_method = Set(payment_method.to_string());
        }
        if let Some(notes) = &changes.notes {
            model.notes = Set(notes.clone());
        }
        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let result = model.update(&self.db).await?;

        Ok(Some(self.with_items_one(result).await?))
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let changes = OrderChanges {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, &changes).await
    }

    async fn add_item(
        &self,
        order_id: &OrderId,
        item: &NewOrderItem,
    ) -> Result<Option<OrderItem>, DomainError> {
        if orders::Entity::find_by_id(order_id.0)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let result = item_active_model(order_id.0, item).insert(&self.db).await?;

        Ok(Some(result.into()))
    }

    async fn update_item(
        &self,
        id: &OrderItemId,
        changes: &OrderItemChanges,
    ) -> Result<Option<OrderItem>, DomainError> {
        let Some(existing) = order_items::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let quantity = changes.quantity.unwrap_or(existing.quantity);
        let unit_price = changes.unit_price.unwrap_or(existing.unit_price);
        let total_price = line_total(quantity, unit_price)?;

        let mut model: order_items::ActiveModel = existing.into();
        model.quantity = Set(quantity);
        model.unit_price = Set(unit_price);
        model.total_price = Set(total_price);

        let result = model.update(&self.db).await?;

        Ok(Some(result.into()))
    }

    async fn delete_item(&self, id: &OrderItemId) -> Result<bool, DomainError> {
        let result = order_items::Entity::delete_by_id(id.0).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

fn item_active_model(order_id: i32, item: &NewOrderItem) -> order_items::ActiveModel {
    order_items::ActiveModel {
        order_id: Set(order_id),
        product_id: Set(item.product_id.0),
        quantity: Set(item.quantity),
        unit_price: Set(item.unit_price),
        total_price: Set(item.total_price),
        ..Default::default()
    }
}

/// Convert SeaORM order row plus its items to the domain entity.
///
/// Status and payment method are stored as text; a value outside the enum is
/// reported rather than guessed.
fn into_order(model: orders::Model, items: Vec<OrderItem>) -> Result<Order, DomainError> {
    let status = model.status.parse::<OrderStatus>().map_err(|e| {
        DomainError::Internal(format!("order {} has a corrupt status: {}", model.id, e))
    })?;
    let payment_method = model.payment_method.parse::<PaymentMethod>().map_err(|e| {
        DomainError::Internal(format!(
            "order {} has a corrupt payment method: {}",
            model.id, e
        ))
    })?;

    Ok(Order {
        id: OrderId(model.id),
        order_number: model.order_number,
        user_id: UserId(model.user_id),
        status,
        payment_method,
        subtotal: model.subtotal,
        tax_amount: model.tax_amount,
        shipping_cost: model.shipping_cost,
        total_amount: model.total_amount,
        shipping_address: model.shipping_address,
        billing_address: model.billing_address,
        notes: model.notes,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.map(|dt| dt.with_timezone(&Utc)),
        items,
    })
}

impl From<order_items::Model> for OrderItem {
    fn from(model: order_items::Model) -> Self {
        OrderItem {
            id: OrderItemId(model.id),
            order_id: OrderId(model.order_id),
            product_id: ProductId(model.product_id),
            quantity: model.quantity,
            unit_price: model.unit_price,
            total_price: model.total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn row(status: &str, payment_method: &str) -> orders::Model {
        orders::Model {
            id: 7,
            order_number: "ORD-20250101-0000abcd".to_string(),
            user_id: 1,
            status: status.to_string(),
            payment_method: payment_method.to_string(),
            subtotal: Decimal::new(39998, 2),
            tax_amount: Decimal::new(319984, 4),
            shipping_cost: Decimal::new(1000, 2),
            total_amount: Decimal::new(4419784, 4),
            shipping_address: "123 Main St".to_string(),
            billing_address: "123 Main St".to_string(),
            notes: None,
            created_at: Utc::now().fixed_offset(),
            updated_at: None,
        }
    }

    #[test]
    fn stored_enums_are_parsed() {
        let order = into_order(row("shipped", "paypal"), Vec::new()).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.payment_method, PaymentMethod::Paypal);
    }

    #[test]
    fn corrupt_status_is_an_error() {
        let result = into_order(row("lost-in-transit", "paypal"), Vec::new());
        assert!(matches!(result, Err(DomainError::Internal(msg)) if msg.contains("order 7")));
    }

    #[test]
    fn corrupt_payment_method_is_an_error() {
        let result = into_order(row("pending", "barter"), Vec::new());
        assert!(matches!(result, Err(DomainError::Internal(_))));
    }
}
