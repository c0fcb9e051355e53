//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::domain::entities::{
    NewUser, Page, User, UserChanges, UserFilter, UserId, UserRole,
};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find_by_id(id.0).one(&self.db).await?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        result.map(User::try_from).transpose()
    }

    async fn list(&self, filter: &UserFilter, page: Page) -> Result<Vec<User>, DomainError> {
        let mut query = users::Entity::find();
        if let Some(role) = filter.role {
            query = query.filter(users::Column::Role.eq(role.to_string()));
        }
        if filter.active_only {
            query = query.filter(users::Column::IsActive.eq(true));
        }

        let results = query
            .order_by_asc(users::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await?;

        results.into_iter().map(User::try_from).collect()
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = users::ActiveModel {
            email: Set(user.email.clone()),
            username: Set(user.username.clone()),
            full_name: Set(user.full_name.clone()),
            hashed_password: Set(user.hashed_password.clone()),
            phone: Set(user.phone.clone()),
            address: Set(user.address.clone()),
            city: Set(user.city.clone()),
            country: Set(user.country.clone()),
            role: Set(user.role.to_string()),
            is_active: Set(true),
            is_verified: Set(false),
            created_at: Set(now),
            updated_at: Set(None),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        User::try_from(result)
    }

    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, DomainError> {
        let Some(existing) = users::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: users::ActiveModel = existing.into();
        if let Some(email) = &changes.email {
            model.email = Set(email.clone());
        }
        if let Some(username) = &changes.username {
            model.username = Set(username.clone());
        }
        if let Some(full_name) = &changes.full_name {
            model.full_name = Set(full_name.clone());
        }
        if let Some(phone) = &changes.phone {
            model.phone = Set(phone.clone());
        }
        if let Some(address) = &changes.address {
            model.address = Set(address.clone());
        }
        if let Some(city) = &changes.city {
            model.city = Set(city.clone());
        }
        if let Some(country) = &changes.country {
            model.country = Set(country.clone());
        }
        if let Some(is_active) = changes.is_active {
            model.is_active = Set(is_active);
        }
        model.updated_at = Set(Some(Utc::now().fixed_offset()));

        let result = model.update(&self.db).await?;

        User::try_from(result).map(Some)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let result = users::Entity::delete_by_id(id.0).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<users::Model> for User {
    type Error = DomainError;

    fn try_from(model: users::Model) -> Result<Self, Self::Error> {
        let role = model.role.parse::<UserRole>().map_err(|e| {
            DomainError::Internal(format!("user {} has a corrupt role: {}", model.id, e))
        })?;

        Ok(User {
            id: UserId(model.id),
            email: model.email,
            username: model.username,
            full_name: model.full_name,
            hashed_password: model.hashed_password,
            phone: model.phone,
            address: model.address,
            city: model.city,
            country: model.country,
            role,
            is_active: model.is_active,
            is_verified: model.is_verified,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.map(|dt| dt.with_timezone(&Utc)),
        })
    }
}
