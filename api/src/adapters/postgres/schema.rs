//! Schema bootstrap
//!
//! Creates any missing tables from the SeaORM entity definitions, parents
//! before children so foreign keys resolve.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{categories, order_items, orders, products, users};

pub async fn create_missing_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, categories::Entity).await?;
    create_table(db, users::Entity).await?;
    create_table(db, products::Entity).await?;
    create_table(db, orders::Entity).await?;
    create_table(db, order_items::Entity).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let table = entity.table_name().to_string();
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;

    tracing::debug!(table = %table, "Ensured table exists");
    Ok(())
}
