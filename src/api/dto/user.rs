//! User and credential DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{
    Credential, NewCredential, NewUser, RoleBasedAuthority, UpdateCredential, UpdateUser, User,
};
use crate::repositories::UserRecord;

// ============================================================================
// Request DTOs
// ============================================================================

/// Nested credential payload accepted on user creation.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCredentialRequest {
    #[validate(length(min = 1, max = 255, message = "Username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
    pub role_based_authority: String,
    #[serde(default = "default_true")]
    pub is_enabled: bool,
    #[serde(default = "default_true")]
    pub is_account_non_expired: bool,
    #[serde(default = "default_true")]
    pub is_account_non_locked: bool,
    #[serde(default = "default_true")]
    pub is_credentials_non_expired: bool,
}

fn default_true() -> bool {
    true
}

impl CreateCredentialRequest {
    fn into_new_credential(self) -> AppResult<NewCredential> {
        Ok(NewCredential {
            username: self.username,
            password: self.password,
            role_based_authority: self.role_based_authority.parse::<RoleBasedAuthority>()?,
            is_enabled: self.is_enabled,
            is_account_non_expired: self.is_account_non_expired,
            is_account_non_locked: self.is_account_non_locked,
            is_credentials_non_expired: self.is_credentials_non_expired,
        })
    }
}

/// Request body for creating a new user, optionally with their credential.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "First name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255, message = "Last name must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(nested)]
    pub credential_dto: Option<CreateCredentialRequest>,
}

impl CreateUserRequest {
    /// Splits the request into the user insert and the optional credential
    /// insert, rejecting unknown role spellings up front.
    pub fn into_parts(self) -> AppResult<(NewUser, Option<NewCredential>)> {
        let new_user = NewUser {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        };
        let new_credential = match self.credential_dto {
            Some(credential) => Some(credential.into_new_credential()?),
            None => None,
        };
        Ok((new_user, new_credential))
    }
}

/// Nested credential payload accepted on user update.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCredentialRequest {
    #[validate(length(min = 1, max = 255, message = "Username must not be empty"))]
    pub username: Option<String>,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
    pub role_based_authority: Option<String>,
    pub is_enabled: Option<bool>,
    pub is_account_non_expired: Option<bool>,
    pub is_account_non_locked: Option<bool>,
    pub is_credentials_non_expired: Option<bool>,
}

impl UpdateCredentialRequest {
    fn into_changeset(self) -> AppResult<UpdateCredential> {
        let role_based_authority = match self.role_based_authority.as_deref() {
            Some(raw) => Some(raw.parse::<RoleBasedAuthority>()?),
            None => None,
        };
        Ok(UpdateCredential {
            username: self.username,
            password: self.password,
            role_based_authority,
            is_enabled: self.is_enabled,
            is_account_non_expired: self.is_account_non_expired,
            is_account_non_locked: self.is_account_non_locked,
            is_credentials_non_expired: self.is_credentials_non_expired,
        })
    }
}

/// Request body for updating a user and, optionally, their credential.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "First name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Last name must not be empty"))]
    pub last_name: Option<String>,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(nested)]
    pub credential_dto: Option<UpdateCredentialRequest>,
}

impl UpdateUserRequest {
    /// Splits the request into the user changeset and the optional credential
    /// changeset.
    pub fn into_changesets(self) -> AppResult<(UpdateUser, Option<UpdateCredential>)> {
        let user_changes = UpdateUser {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        };
        let credential_changes = match self.credential_dto {
            Some(credential) => Some(credential.into_changeset()?),
            None => None,
        };
        Ok((user_changes, credential_changes))
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for credential data nested under a user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialResponse {
    pub credential_id: i32,
    pub username: String,
    pub password: String,
    pub role_based_authority: RoleBasedAuthority,
    pub is_enabled: bool,
    pub is_account_non_expired: bool,
    pub is_account_non_locked: bool,
    pub is_credentials_non_expired: bool,
}

impl From<Credential> for CredentialResponse {
    fn from(credential: Credential) -> Self {
        Self {
            credential_id: credential.credential_id,
            username: credential.username,
            password: credential.password,
            role_based_authority: credential.role_based_authority,
            is_enabled: credential.is_enabled,
            is_account_non_expired: credential.is_account_non_expired,
            is_account_non_locked: credential.is_account_non_locked,
            is_credentials_non_expired: credential.is_credentials_non_expired,
        }
    }
}

/// Response body for user data with the optional nested credential.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub credential_dto: Option<CredentialResponse>,
}

impl From<UserRecord> for UserResponse {
    fn from((user, credential): UserRecord) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            credential_dto: credential.map(CredentialResponse::from),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from((user, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn sample_user() -> User {
        User {
            user_id: 7,
            first_name: "Selam".to_string(),
            last_name: "Horne".to_string(),
            email: "selam@example.com".to_string(),
            phone: Some("+12025550123".to_string()),
        }
    }

    #[test]
    fn response_nests_credential_under_camel_case_key() {
        let credential = Credential {
            credential_id: 3,
            user_id: 7,
            username: "selam".to_string(),
            password: "hashed".to_string(),
            role_based_authority: RoleBasedAuthority::RoleUser,
            is_enabled: true,
            is_account_non_expired: true,
            is_account_non_locked: true,
            is_credentials_non_expired: true,
        };
        let response = UserResponse::from((sample_user(), Some(credential)));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userId"], 7);
        assert_eq!(json["credentialDto"]["username"], "selam");
        assert_eq!(json["credentialDto"]["roleBasedAuthority"], "ROLE_USER");
    }

    #[test]
    fn response_without_credential_serializes_null() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["credentialDto"].is_null());
    }

    #[test]
    fn create_request_rejects_unknown_role() {
        let request = CreateUserRequest {
            first_name: "Selam".to_string(),
            last_name: "Horne".to_string(),
            email: "selam@example.com".to_string(),
            phone: None,
            credential_dto: Some(CreateCredentialRequest {
                username: "selam".to_string(),
                password: "secret".to_string(),
                role_based_authority: "ROLE_OWNER".to_string(),
                is_enabled: true,
                is_account_non_expired: true,
                is_account_non_locked: true,
                is_credentials_non_expired: true,
            }),
        };
        assert!(matches!(
            request.into_parts(),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn update_request_splits_user_and_credential_changes() {
        let request = UpdateUserRequest {
            first_name: Some("Renamed".to_string()),
            last_name: None,
            email: None,
            phone: None,
            credential_dto: Some(UpdateCredentialRequest {
                username: None,
                password: Some("rotated".to_string()),
                role_based_authority: None,
                is_enabled: None,
                is_account_non_expired: None,
                is_account_non_locked: None,
                is_credentials_non_expired: None,
            }),
        };
        let (user_changes, credential_changes) = request.into_changesets().unwrap();
        assert_eq!(user_changes.first_name.as_deref(), Some("Renamed"));
        assert!(user_changes.email.is_none());
        let credential_changes = credential_changes.unwrap();
        assert_eq!(credential_changes.password.as_deref(), Some("rotated"));
        assert!(!credential_changes.is_empty());
    }
}
