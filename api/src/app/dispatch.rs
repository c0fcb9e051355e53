//! Command/query dispatch
//!
//! Writes go through [`CommandHandler`], reads through [`QueryHandler`]. Each
//! service implements one of these per command or query it owns, so route
//! handlers never touch repositories directly.

use async_trait::async_trait;

use crate::error::AppError;

#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Send + 'static,
{
    type Output;

    async fn execute(&self, command: C) -> Result<Self::Output, AppError>;
}

#[async_trait]
pub trait QueryHandler<Q>: Send + Sync
where
    Q: Send + 'static,
{
    type Output;

    async fn fetch(&self, query: Q) -> Result<Self::Output, AppError>;
}
