//! PostgreSQL adapter for ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::entities::{
    CategoryId, NewProduct, Page, Product, ProductChanges, ProductFilter, ProductId,
};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(
        &self,
        filter: &ProductFilter,
        page: Page,
    ) -> Result<Vec<Product>, DomainError> {
        let mut query = products::Entity::find();
        if let Some(category_id) = filter.category_id {
            query = query.filter(products::Column::CategoryId.eq(category_id.0));
        }
        if filter.active_only {
            query = query.filter(products::Column::IsActive.eq(true));
        }

        let results = query
            .order_by_asc(products::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn search(&self, query: &str, page: Page) -> Result<Vec<Product>, DomainError> {
        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));
        let lower = |column: products::Column| Expr::expr(Func::lower(Expr::col(column)));

        let results = products::Entity::find()
            .filter(
                Condition::any()
                    .add(lower(products::Column::Name).like(pattern.as_str()))
                    .add(lower(products::Column::Description).like(pattern.as_str())),
            )
            .order_by_asc(products::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let model = products::ActiveModel {
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            stock_quantity: Set(product.stock_quantity),
            sku: Set(product.sku.clone()),
            is_active: Set(product.is_active),
            category_id: Set(product.category_id.0),
            created_at: Set(Utc::now().fixed_offset()),
            updated_at: Set(None),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, DomainError> {
        let Some(existing) = products::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: products::ActiveModel = existing.into();
        if let Some(name) = &changes.name {
            model.name = Set(name.clone());
        }
        if let Some(description) = &changes.description {
            model.description = Set(description.clone());
        }
        if let Some(price) = changes.price {
            model.price = Set(price);
        }
        if let Some(stock_quantity) = changes.stock_quantity {
            model.stock_quantity = Set(stock_quantity);
        }
        if let Some(sku) = &changes.sku {
            model.sku = Set(sku.clone());
        }
        if let Some(category_id) = changes.category_id {
            model.category_id = Set(category_id.0);
        }
        if let Some(is_active) = changes.is_active {
            model.is_active = Set(is_active);
        }
        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let result = model.update(&self.db).await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError> {
        let result = products::Entity::delete_by_id(id.0).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

/// Escape LIKE wildcards so user input matches literally
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: ProductId(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            stock_quantity: model.stock_quantity,
            sku: model.sku,
            is_active: model.is_active,
            category_id: CategoryId(model.category_id),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("wireless"), "wireless");
    }
}
