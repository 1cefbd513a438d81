//! User business logic.

use std::sync::Arc;

use tracing::debug;

use crate::api::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::error::{AppError, AppResult};
use crate::repositories::UserRepository;

/// Service for user operations, including the nested credential lifecycle.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<UserResponse>> {
        let records = self.repo.find_all().await?;
        Ok(records.into_iter().map(UserResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<UserResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::not_found("User", id))
    }

    /// Looks a user up by their credential's username. Absence is not an
    /// error at this level; the handler decides how to surface it.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<UserResponse>> {
        let record = self.repo.find_by_credential_username(username).await?;
        Ok(record.map(UserResponse::from))
    }

    pub async fn save(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let (new_user, new_credential) = request.into_parts()?;
        debug!(email = %new_user.email, with_credential = new_credential.is_some(), "creating user");
        let record = self.repo.create(new_user, new_credential).await?;
        Ok(UserResponse::from(record))
    }

    pub async fn update(&self, id: i32, request: UpdateUserRequest) -> AppResult<UserResponse> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("User", id));
        }
        let (user_changes, credential_changes) = request.into_changesets()?;
        let record = self.repo.update(id, user_changes, credential_changes).await?;
        Ok(UserResponse::from(record))
    }

    /// Returns true iff a row existed. A missing id is not an error.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.delete_by_id(id).await?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{Credential, RoleBasedAuthority, User};
    use crate::repositories::UserRecord;
    use crate::repositories::memory::InMemoryUserRepo;

    fn sample_record(id: i32, username: &str) -> UserRecord {
        (
            User {
                user_id: id,
                first_name: "Ada".to_string(),
                last_name: "Byron".to_string(),
                email: format!("user{}@example.com", id),
                phone: None,
            },
            Some(Credential {
                credential_id: id,
                user_id: id,
                username: username.to_string(),
                password: "hashed".to_string(),
                role_based_authority: RoleBasedAuthority::RoleUser,
                is_enabled: true,
                is_account_non_expired: true,
                is_account_non_locked: true,
                is_credentials_non_expired: true,
            }),
        )
    }

    #[tokio::test]
    async fn find_by_id_misses_with_not_found() {
        let service = UserService::new(InMemoryUserRepo::with_rows(vec![]));
        let err = service.find_by_id(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { ref entity, .. } if entity == "User"));
    }

    #[tokio::test]
    async fn find_by_username_returns_none_without_error() {
        let service =
            UserService::new(InMemoryUserRepo::with_rows(vec![sample_record(1, "ada")]));
        assert!(service.find_by_username("missing").await.unwrap().is_none());
        let found = service.find_by_username("ada").await.unwrap().unwrap();
        assert_eq!(found.user_id, 1);
    }

    #[tokio::test]
    async fn save_assigns_id_and_maps_credential() {
        let service = UserService::new(InMemoryUserRepo::with_rows(vec![]));
        let request: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Byron",
            "email": "ada@example.com",
            "credentialDto": {
                "username": "ada",
                "password": "secret",
                "roleBasedAuthority": "ROLE_ADMIN"
            }
        }))
        .unwrap();
        let response = service.save(request).await.unwrap();
        assert_eq!(response.user_id, 1);
        let credential = response.credential_dto.unwrap();
        assert_eq!(
            credential.role_based_authority,
            RoleBasedAuthority::RoleAdmin
        );
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let service = UserService::new(InMemoryUserRepo::with_rows(vec![]));
        let request: UpdateUserRequest =
            serde_json::from_value(serde_json::json!({"firstName": "Grace"})).unwrap();
        assert!(matches!(
            service.update(9, request).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn delete_twice_returns_true_then_false() {
        let service =
            UserService::new(InMemoryUserRepo::with_rows(vec![sample_record(1, "ada")]));
        assert!(service.delete_by_id(1).await.unwrap());
        assert!(!service.delete_by_id(1).await.unwrap());
    }
}
