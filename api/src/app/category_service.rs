//! Category service

use std::sync::Arc;

use async_trait::async_trait;

use super::commands::{CreateCategory, DeleteCategory, UpdateCategory};
use super::dispatch::{CommandHandler, QueryHandler};
use super::dto::CategoryDto;
use super::queries::{GetCategory, ListCategories};
use super::validation::Paged;
use crate::domain::entities::{CategoryChanges, CategoryId, NewCategory};
use crate::domain::ports::CategoryRepository;
use crate::error::{AppError, DomainError};

/// Service for managing categories
pub struct CategoryService<R>
where
    R: CategoryRepository + ?Sized,
{
    categories: Arc<R>,
}

impl<R> CategoryService<R>
where
    R: CategoryRepository + ?Sized,
{
    pub fn new(categories: Arc<R>) -> Self {
        Self { categories }
    }
}

fn category_not_found(id: CategoryId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "Category with id {} not found",
        id
    )))
}

#[async_trait]
impl<R> CommandHandler<CreateCategory> for CategoryService<R>
where
    R: CategoryRepository + ?Sized,
{
    type Output = CategoryDto;

    async fn execute(&self, command: CreateCategory) -> Result<CategoryDto, AppError> {
        let category = self
            .categories
            .create(&NewCategory::from(command))
            .await?;
        tracing::info!(category_id = %category.id, slug = %category.slug, "Category created");

        Ok(category.into())
    }
}

#[async_trait]
impl<R> CommandHandler<UpdateCategory> for CategoryService<R>
where
    R: CategoryRepository + ?Sized,
{
    type Output = CategoryDto;

    async fn execute(&self, command: UpdateCategory) -> Result<CategoryDto, AppError> {
        let changes = CategoryChanges::from(command.patch);
        let category = self
            .categories
            .update(&command.id, &changes)
            .await?
            .ok_or_else(|| category_not_found(command.id))?;

        Ok(category.into())
    }
}

#[async_trait]
impl<R> CommandHandler<DeleteCategory> for CategoryService<R>
where
    R: CategoryRepository + ?Sized,
{
    type Output = ();

    async fn execute(&self, command: DeleteCategory) -> Result<(), AppError> {
        if !self.categories.delete(&command.id).await? {
            return Err(category_not_found(command.id));
        }
        tracing::info!(category_id = %command.id, "Category deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> QueryHandler<GetCategory> for CategoryService<R>
where
    R: CategoryRepository + ?Sized,
{
    type Output = CategoryDto;

    async fn fetch(&self, query: GetCategory) -> Result<CategoryDto, AppError> {
        let category = self
            .categories
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| category_not_found(query.id))?;

        Ok(category.into())
    }
}

#[async_trait]
impl<R> QueryHandler<ListCategories> for CategoryService<R>
where
    R: CategoryRepository + ?Sized,
{
    type Output = Vec<CategoryDto>;

    async fn fetch(&self, query: ListCategories) -> Result<Vec<CategoryDto>, AppError> {
        let parent = query.parent_id.map(CategoryId);
        let categories = self.categories.list(parent, query.page()).await?;

        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
