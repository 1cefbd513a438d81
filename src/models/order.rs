//! Order models and the order status value set.

use std::io::Write;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use jiff_diesel::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Order lifecycle status.
///
/// Closed set; unrecognized values are rejected at the mapping boundary
/// before anything reaches the database. Transitions are intentionally
/// unguarded beyond set membership.
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
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(AppError::Validation {
                field: "status".to_string(),
                reason: format!(
                    "Unknown order status '{}'. Valid values: PENDING, CONFIRMED, SHIPPED, DELIVERED, CANCELLED",
                    other
                ),
            }),
        }
    }
}

impl diesel::query_builder::QueryId for OrderStatus {
    type QueryId = OrderStatus;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for OrderStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for OrderStatus {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        OrderStatus::from_str(&s).map_err(|_| format!("Unrecognized order status: {}", s).into())
    }
}

/// Order model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub total_amount: BigDecimal,
    pub status: OrderStatus,
    pub order_date: DateTime,
}

/// NewOrder model for inserting new records
///
/// `order_id` and `order_date` are assigned by the database.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub user_id: i32,
    pub total_amount: BigDecimal,
    pub status: OrderStatus,
}

/// UpdateOrder model for partial updates (None fields are left untouched)
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder {
    pub user_id: Option<i32>,
    pub total_amount: Option<BigDecimal>,
    pub status: Option<OrderStatus>,
}

impl UpdateOrder {
    /// True when no field is set; diesel rejects empty changesets.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.total_amount.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_member_of_the_status_set() {
        for (raw, expected) in [
            ("PENDING", OrderStatus::Pending),
            ("CONFIRMED", OrderStatus::Confirmed),
            ("SHIPPED", OrderStatus::Shipped),
            ("DELIVERED", OrderStatus::Delivered),
            ("CANCELLED", OrderStatus::Cancelled),
        ] {
            assert_eq!(raw.parse::<OrderStatus>().unwrap(), expected);
            assert_eq!(expected.as_str(), raw);
        }
    }

    #[test]
    fn rejects_unknown_status_values() {
        let err = "REFUNDED".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "status"));
    }

    #[test]
    fn rejects_lowercase_spellings() {
        assert!("confirmed".parse::<OrderStatus>().is_err());
    }
}
