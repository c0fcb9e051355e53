//! PostgreSQL adapter for CategoryRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::domain::entities::{Category, CategoryChanges, CategoryId, NewCategory, Page};
use crate::domain::ports::CategoryRepository;
use crate::entity::categories;
use crate::error::DomainError;

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(
        &self,
        parent_id: Option<CategoryId>,
        page: Page,
    ) -> Result<Vec<Category>, DomainError> {
        let mut query = categories::Entity::find();
        if let Some(parent_id) = parent_id {
            query = query.filter(categories::Column::ParentId.eq(parent_id.0));
        }

        let results = query
            .order_by_asc(categories::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError> {
        let model = categories::ActiveModel {
            name: Set(category.name.clone()),
            slug: Set(category.slug.clone()),
            description: Set(category.description.clone()),
            parent_id: Set(category.parent_id.map(|p| p.0)),
            created_at: Set(Utc::now().fixed_offset()),
            updated_at: Set(None),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &CategoryId,
        changes: &CategoryChanges,
    ) -> Result<Option<Category>, DomainError> {
        let Some(existing) = categories::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: categories::ActiveModel = existing.into();
        if let Some(name) = &changes.name {
            model.name = Set(name.clone());
        }
        if let Some(slug) = &changes.slug {
            model.slug = Set(slug.clone());
        }
        if let Some(description) = &changes.description {
            model.description = Set(description.clone());
        }
        if let Some(parent_id) = changes.parent_id {
            model.parent_id = Set(parent_id.map(|p| p.0));
        }
        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let result = model.update(&self.db).await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool, DomainError> {
        let result = categories::Entity::delete_by_id(id.0).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Category {
            id: CategoryId(model.id),
            name: model.name,
            slug: model.slug,
            description: model.description,
            parent_id: model.parent_id.map(CategoryId),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}
