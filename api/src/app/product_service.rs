//! Product service
//!
//! Catalog CRUD and text search.

use std::sync::Arc;

use async_trait::async_trait;

use super::commands::{CreateProduct, DeleteProduct, UpdateProduct};
use super::dispatch::{CommandHandler, QueryHandler};
use super::dto::ProductDto;
use super::queries::{GetProduct, ListProducts, SearchProducts};
use super::validation::Paged;
use crate::domain::entities::{NewProduct, ProductChanges, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::{AppError, DomainError};

/// Service for managing products
pub struct ProductService<R>
where
    R: ProductRepository + ?Sized,
{
    products: Arc<R>,
}

impl<R> ProductService<R>
where
    R: ProductRepository + ?Sized,
{
    pub fn new(products: Arc<R>) -> Self {
        Self { products }
    }
}

fn product_not_found(id: ProductId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "Product with id {} not found",
        id
    )))
}

#[async_trait]
impl<R> CommandHandler<CreateProduct> for ProductService<R>
where
    R: ProductRepository + ?Sized,
{
    type Output = ProductDto;

    async fn execute(&self, command: CreateProduct) -> Result<ProductDto, AppError> {
        let product = self.products.create(&NewProduct::from(command)).await?;
        tracing::info!(product_id = %product.id, sku = %product.sku, "Product created");

        Ok(product.into())
    }
}

#[async_trait]
impl<R> CommandHandler<UpdateProduct> for ProductService<R>
where
    R: ProductRepository + ?Sized,
{
    type Output = ProductDto;

    async fn execute(&self, command: UpdateProduct) -> Result<ProductDto, AppError> {
        let changes = ProductChanges::from(command.patch);
        let product = self
            .products
            .update(&command.id, &changes)
            .await?
            .ok_or_else(|| product_not_found(command.id))?;

        Ok(product.into())
    }
}

#[async_trait]
impl<R> CommandHandler<DeleteProduct> for ProductService<R>
where
    R: ProductRepository + ?Sized,
{
    type Output = ();

    async fn execute(&self, command: DeleteProduct) -> Result<(), AppError> {
        if !self.products.delete(&command.id).await? {
            return Err(product_not_found(command.id));
        }
        tracing::info!(product_id = %command.id, "Product deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> QueryHandler<GetProduct> for ProductService<R>
where
    R: ProductRepository + ?Sized,
{
    type Output = ProductDto;

    async fn fetch(&self, query: GetProduct) -> Result<ProductDto, AppError> {
        let product = self
            .products
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| product_not_found(query.id))?;

        Ok(product.into())
    }
}

#[async_trait]
impl<R> QueryHandler<ListProducts> for ProductService<R>
where
    R: ProductRepository + ?Sized,
{
    type Output = Vec<ProductDto>;

    async fn fetch(&self, query: ListProducts) -> Result<Vec<ProductDto>, AppError> {
        let products = self.products.list(&query.filter(), query.page()).await?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }
}

#[async_trait]
impl<R> QueryHandler<SearchProducts> for ProductService<R>
where
    R: ProductRepository + ?Sized,
{
    type Output = Vec<ProductDto>;

    async fn fetch(&self, query: SearchProducts) -> Result<Vec<ProductDto>, AppError> {
        let products = self.products.search(&query.query, query.page()).await?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;
    use crate::app::commands::ProductPatch;
    use crate::domain::entities::CategoryId;
    use crate::test_utils::{test_product, InMemoryProductRepository};

    fn create_service(repo: InMemoryProductRepository) -> ProductService<InMemoryProductRepository> {
        ProductService::new(Arc::new(repo))
    }

    fn search(text: &str) -> SearchProducts {
        SearchProducts {
            query: text.to_string(),
            skip: 0,
            limit: 20,
        }
    }

    #[tokio::test]
    async fn search_matches_name_or_description_ignoring_case() {
        let mut headphones = test_product(1, "Wireless Headphones");
        headphones.description = None;
        let mut speaker = test_product(2, "Speaker");
        speaker.description = Some("Pairs with WIRELESS earbuds".to_string());
        let cable = test_product(3, "Cable");
        let service = create_service(
            InMemoryProductRepository::new()
                .with_product(headphones)
                .with_product(speaker)
                .with_product(cable),
        );

        let results = service.fetch(search("wireless")).await.unwrap();

        let ids: Vec<i32> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn search_respects_pagination() {
        let repo = (1..=5).fold(InMemoryProductRepository::new(), |repo, i| {
            repo.with_product(test_product(i, &format!("Widget {}", i)))
        });
        let service = create_service(repo);

        let query = SearchProducts {
            skip: 1,
            limit: 2,
            ..search("widget")
        };
        let results = service.fetch(query).await.unwrap();

        let ids: Vec<i32> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn list_filters_category_and_activity() {
        let mut other_category = test_product(1, "Lamp");
        other_category.category_id = CategoryId(2);
        let mut inactive = test_product(2, "Old Radio");
        inactive.is_active = false;
        let service = create_service(
            InMemoryProductRepository::new()
                .with_product(other_category)
                .with_product(inactive)
                .with_product(test_product(3, "Radio")),
        );

        let query = ListProducts {
            skip: 0,
            limit: 20,
            category_id: Some(1),
            is_active: true,
        };
        let results = service.fetch(query.clone()).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Radio");

        let with_inactive = ListProducts {
            is_active: false,
            ..query
        };
        let results = service.fetch(with_inactive).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn price_update_keeps_stock_and_sku() {
        let product = test_product(1, "Headphones");
        let service = create_service(InMemoryProductRepository::new().with_product(product.clone()));

        let patch: ProductPatch = serde_json::from_str(r#"{"price": 249.99}"#).unwrap();
        let dto = service
            .execute(UpdateProduct {
                id: product.id,
                patch,
            })
            .await
            .unwrap();

        assert_eq!(dto.price, Decimal::from_str("249.99").unwrap());
        assert_eq!(dto.stock_quantity, product.stock_quantity);
        assert_eq!(dto.sku, product.sku);
        assert_eq!(dto.name, product.name);
    }

    #[tokio::test]
    async fn delete_missing_product_is_not_found() {
        let service = create_service(InMemoryProductRepository::new());

        let result = service.execute(DeleteProduct { id: ProductId(3) }).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }
}
