//! User and credential models.
//!
//! A credential belongs to exactly one user (1:1, owned by the user row);
//! it is only ever deleted through its parent via the FK cascade.

use std::io::Write;
use std::str::FromStr;

use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authorization role attached to a credential.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleBasedAuthority {
    RoleUser,
    RoleAdmin,
}

impl RoleBasedAuthority {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleBasedAuthority::RoleUser => "ROLE_USER",
            RoleBasedAuthority::RoleAdmin => "ROLE_ADMIN",
        }
    }
}

impl FromStr for RoleBasedAuthority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_USER" => Ok(RoleBasedAuthority::RoleUser),
            "ROLE_ADMIN" => Ok(RoleBasedAuthority::RoleAdmin),
            other => Err(AppError::Validation {
                field: "roleBasedAuthority".to_string(),
                reason: format!(
                    "Unknown role '{}'. Valid values: ROLE_USER, ROLE_ADMIN",
                    other
                ),
            }),
        }
    }
}

impl diesel::query_builder::QueryId for RoleBasedAuthority {
    type QueryId = RoleBasedAuthority;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for RoleBasedAuthority {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for RoleBasedAuthority {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        RoleBasedAuthority::from_str(&s).map_err(|_| format!("Unrecognized role: {}", s).into())
    }
}

/// User model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// NewUser model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// UpdateUser model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateUser {
    /// True when no field is set; diesel rejects empty changesets.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

/// Credential model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::credentials)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Credential {
    pub credential_id: i32,
    pub user_id: i32,
    pub username: String,
    pub password: String,
    pub role_based_authority: RoleBasedAuthority,
    pub is_enabled: bool,
    pub is_account_non_expired: bool,
    pub is_account_non_locked: bool,
    pub is_credentials_non_expired: bool,
}

/// NewCredential values for inserting a credential under a user.
///
/// The parent `user_id` is supplied by the repository once the user row
/// exists, so it is not part of this struct.
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub username: String,
    pub password: String,
    pub role_based_authority: RoleBasedAuthority,
    pub is_enabled: bool,
    pub is_account_non_expired: bool,
    pub is_account_non_locked: bool,
    pub is_credentials_non_expired: bool,
}

/// UpdateCredential model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::credentials)]
pub struct UpdateCredential {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role_based_authority: Option<RoleBasedAuthority>,
    pub is_enabled: Option<bool>,
    pub is_account_non_expired: Option<bool>,
    pub is_account_non_locked: Option<bool>,
    pub is_credentials_non_expired: Option<bool>,
}

impl UpdateCredential {
    /// True when no field is set; diesel rejects empty changesets.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.role_based_authority.is_none()
            && self.is_enabled.is_none()
            && self.is_account_non_expired.is_none()
            && self.is_account_non_locked.is_none()
            && self.is_credentials_non_expired.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!(
            "ROLE_USER".parse::<RoleBasedAuthority>().unwrap(),
            RoleBasedAuthority::RoleUser
        );
        assert_eq!(
            "ROLE_ADMIN".parse::<RoleBasedAuthority>().unwrap(),
            RoleBasedAuthority::RoleAdmin
        );
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "ROLE_SUPERUSER".parse::<RoleBasedAuthority>().unwrap_err();
        assert!(
            matches!(err, AppError::Validation { ref field, .. } if field == "roleBasedAuthority")
        );
    }
}
