//! User service
//!
//! Registration, profile updates and account lookups.

use std::sync::Arc;

use async_trait::async_trait;

use super::commands::{CreateUser, DeleteUser, UpdateUser};
use super::dispatch::{CommandHandler, QueryHandler};
use super::dto::UserDto;
use super::queries::{GetUser, ListUsers};
use super::validation::Paged;
use crate::auth::hash_password;
use crate::domain::entities::{NewUser, UserChanges};
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

/// Service for managing users
pub struct UserService<R>
where
    R: UserRepository + ?Sized,
{
    users: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn user_not_found(id: impl std::fmt::Display) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("User with id {} not found", id)))
}

#[async_trait]
impl<R> CommandHandler<CreateUser> for UserService<R>
where
    R: UserRepository + ?Sized,
{
    type Output = UserDto;

    async fn execute(&self, command: CreateUser) -> Result<UserDto, AppError> {
        let new_user = NewUser {
            hashed_password: hash_password(&command.password)?,
            email: command.email,
            username: command.username,
            full_name: command.full_name,
            phone: command.phone,
            address: command.address,
            city: command.city,
            country: command.country,
            role: command.role,
        };

        let user = self.users.create(&new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User created");

        Ok(user.into())
    }
}

#[async_trait]
impl<R> CommandHandler<UpdateUser> for UserService<R>
where
    R: UserRepository + ?Sized,
{
    type Output = UserDto;

    async fn execute(&self, command: UpdateUser) -> Result<UserDto, AppError> {
        let changes = UserChanges::from(command.patch);
        let user = self
            .users
            .update(&command.id, &changes)
            .await?
            .ok_or_else(|| user_not_found(command.id))?;

        Ok(user.into())
    }
}

#[async_trait]
impl<R> CommandHandler<DeleteUser> for UserService<R>
where
    R: UserRepository + ?Sized,
{
    type Output = ();

    async fn execute(&self, command: DeleteUser) -> Result<(), AppError> {
        if !self.users.delete(&command.id).await? {
            return Err(user_not_found(command.id));
        }
        tracing::info!(user_id = %command.id, "User deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> QueryHandler<GetUser> for UserService<R>
where
    R: UserRepository + ?Sized,
{
    type Output = UserDto;

    async fn fetch(&self, query: GetUser) -> Result<UserDto, AppError> {
        let user = self
            .users
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| user_not_found(query.id))?;

        Ok(user.into())
    }
}

#[async_trait]
impl<R> QueryHandler<ListUsers> for UserService<R>
where
    R: UserRepository + ?Sized,
{
    type Output = Vec<UserDto>;

    async fn fetch(&self, query: ListUsers) -> Result<Vec<UserDto>, AppError> {
        let users = self.users.list(&query.filter(), query.page()).await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::UserPatch;
    use crate::auth::verify_password;
    use crate::domain::entities::{UserId, UserRole};
    use crate::test_utils::{test_user, InMemoryUserRepository};

    fn create_service(repo: InMemoryUserRepository) -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(repo))
    }

    fn list_all(is_active: bool) -> ListUsers {
        ListUsers {
            skip: 0,
            limit: 20,
            role: None,
            is_active,
        }
    }

    #[tokio::test]
    async fn create_hashes_password() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone());

        let command = CreateUser {
            email: "john@example.com".to_string(),
            username: "john_doe".to_string(),
            full_name: "John Doe".to_string(),
            password: "securepassword123".to_string(),
            phone: None,
            address: None,
            city: None,
            country: None,
            role: UserRole::Customer,
        };
        let dto = service.execute(command).await.unwrap();
        assert_eq!(dto.username, "john_doe");
        assert!(dto.is_active);

        let stored = repo.find_by_username("john_doe").await.unwrap().unwrap();
        assert_ne!(stored.hashed_password, "securepassword123");
        assert!(verify_password("securepassword123", &stored.hashed_password));
    }

    #[tokio::test]
    async fn update_leaves_absent_fields_alone() {
        let mut user = test_user(1, "john_doe");
        user.phone = Some("+1234567890".to_string());
        user.city = Some("Springfield".to_string());
        let service = create_service(InMemoryUserRepository::new().with_user(user.clone()));

        let patch: UserPatch = serde_json::from_str(r#"{"full_name": "John Smith"}"#).unwrap();
        let dto = service
            .execute(UpdateUser {
                id: user.id,
                patch,
            })
            .await
            .unwrap();

        assert_eq!(dto.full_name, "John Smith");
        assert_eq!(dto.email, user.email);
        assert_eq!(dto.phone, user.phone);
        assert_eq!(dto.city, user.city);
        assert!(dto.is_active);
    }

    #[tokio::test]
    async fn update_can_clear_nullable_field() {
        let mut user = test_user(1, "john_doe");
        user.phone = Some("+1234567890".to_string());
        let service = create_service(InMemoryUserRepository::new().with_user(user.clone()));

        let patch: UserPatch = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        let dto = service
            .execute(UpdateUser {
                id: user.id,
                patch,
            })
            .await
            .unwrap();

        assert_eq!(dto.phone, None);
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let service = create_service(InMemoryUserRepository::new());

        let result = service
            .execute(UpdateUser {
                id: UserId(42),
                patch: UserPatch::default(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let service = create_service(InMemoryUserRepository::new());

        let result = service.execute(DeleteUser { id: UserId(42) }).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let user = test_user(1, "john_doe");
        let service = create_service(InMemoryUserRepository::new().with_user(user.clone()));

        service.execute(DeleteUser { id: user.id }).await.unwrap();
        let result = service.fetch(GetUser { id: user.id }).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn list_hides_inactive_users_unless_asked() {
        let active = test_user(1, "active");
        let mut inactive = test_user(2, "inactive");
        inactive.is_active = false;
        let service = create_service(
            InMemoryUserRepository::new()
                .with_user(active)
                .with_user(inactive),
        );

        let only_active = service.fetch(list_all(true)).await.unwrap();
        assert_eq!(only_active.len(), 1);
        assert_eq!(only_active[0].username, "active");

        let everyone = service.fetch(list_all(false)).await.unwrap();
        assert_eq!(everyone.len(), 2);
    }

    #[tokio::test]
    async fn list_filters_by_role() {
        let mut admin = test_user(1, "admin");
        admin.role = UserRole::Admin;
        let service = create_service(
            InMemoryUserRepository::new()
                .with_user(admin)
                .with_user(test_user(2, "customer")),
        );

        let query = ListUsers {
            role: Some(UserRole::Admin),
            ..list_all(true)
        };
        let admins = service.fetch(query).await.unwrap();

        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].role, UserRole::Admin);
    }
}
