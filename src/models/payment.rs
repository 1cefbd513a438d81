//! Payment models and the payment status value set.

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

/// Payment progress status.
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
pub enum PaymentStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::NotStarted => "NOT_STARTED",
            PaymentStatus::InProgress => "IN_PROGRESS",
            PaymentStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(PaymentStatus::NotStarted),
            "IN_PROGRESS" => Ok(PaymentStatus::InProgress),
            "COMPLETED" => Ok(PaymentStatus::Completed),
            other => Err(AppError::Validation {
                field: "paymentStatus".to_string(),
                reason: format!(
                    "Unknown payment status '{}'. Valid values: NOT_STARTED, IN_PROGRESS, COMPLETED",
                    other
                ),
            }),
        }
    }
}

impl diesel::query_builder::QueryId for PaymentStatus {
    type QueryId = PaymentStatus;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for PaymentStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for PaymentStatus {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        PaymentStatus::from_str(&s)
            .map_err(|_| format!("Unrecognized payment status: {}", s).into())
    }
}

/// Payment model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payment {
    pub payment_id: i32,
    pub order_id: i32,
    pub is_payed: bool,
    pub payment_status: PaymentStatus,
}

/// NewPayment model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment {
    pub order_id: i32,
    pub is_payed: bool,
    pub payment_status: PaymentStatus,
}

/// UpdatePayment model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::payments)]
pub struct UpdatePayment {
    pub is_payed: Option<bool>,
    pub payment_status: Option<PaymentStatus>,
}

impl UpdatePayment {
    /// True when no field is set; diesel rejects empty changesets.
    pub fn is_empty(&self) -> bool {
        self.is_payed.is_none() && self.payment_status.is_none()
    }
}
