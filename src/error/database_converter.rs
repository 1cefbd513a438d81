use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::{AppError, ConstraintParser};

/// Utility for converting database errors to structured AppError variants.
///
/// Constraint violations are parsed into the entity/field/value triples the
/// storefront error bodies carry; anything unparseable degrades to a
/// `Database` error tagged with the failing operation.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: operation.to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();
        let constraint_name = info.constraint_name();

        let converted = match kind {
            DatabaseErrorKind::UniqueViolation => {
                ConstraintParser::parse_unique_violation(message, constraint_name).map(
                    |(entity, field, value)| AppError::Duplicate {
                        entity,
                        field,
                        value,
                    },
                )
            }
            DatabaseErrorKind::NotNullViolation => {
                ConstraintParser::parse_not_null_violation(message, constraint_name).map(
                    |(entity, field)| AppError::Validation {
                        field,
                        reason: format!("Field is required for {}", entity),
                    },
                )
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                ConstraintParser::parse_foreign_key_violation(message, constraint_name).map(
                    |(entity, field, referenced_value)| AppError::Validation {
                        field,
                        reason: format!(
                            "Invalid reference to {} with value '{}'",
                            entity, referenced_value
                        ),
                    },
                )
            }
            DatabaseErrorKind::CheckViolation => {
                ConstraintParser::parse_check_violation(message, constraint_name).map(
                    |(entity, field)| AppError::Validation {
                        field,
                        reason: format!("Check constraint failed for {} field", entity),
                    },
                )
            }
            _ => None,
        };

        converted.unwrap_or_else(|| Self::fallback(kind, message, operation))
    }

    fn fallback(kind: DatabaseErrorKind, message: &str, operation: &str) -> AppError {
        let label = match kind {
            DatabaseErrorKind::UniqueViolation => "Unique constraint violation",
            DatabaseErrorKind::NotNullViolation => "Not null constraint violation",
            DatabaseErrorKind::ForeignKeyViolation => "Foreign key constraint violation",
            DatabaseErrorKind::CheckViolation => "Check constraint violation",
            _ => "Database error",
        };
        AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::msg(format!("{}: {}", label, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for FakeErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(
        kind: DatabaseErrorKind,
        message: &str,
        constraint_name: Option<&str>,
    ) -> DieselError {
        DieselError::DatabaseError(
            kind,
            Box::new(FakeErrorInfo {
                message: message.to_string(),
                constraint_name: constraint_name.map(String::from),
            }),
        )
    }

    #[test]
    fn duplicate_username_converts_to_duplicate_with_parsed_triple() {
        let err = database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"credentials_username_key\"\nDETAIL: Key (username)=(ada) already exists.",
            Some("credentials_username_key"),
        );
        let converted = DatabaseErrorConverter::convert_diesel_error(err, "create user");
        assert!(matches!(
            converted,
            AppError::Duplicate { ref entity, ref field, ref value }
                if entity == "credentials" && field == "username" && value == "ada"
        ));
    }

    #[test]
    fn missing_order_reference_converts_to_validation() {
        let err = database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "insert or update on table \"payments\" violates foreign key constraint \"payments_order_id_fkey\"\nDETAIL: Key (order_id)=(7) is not present in table \"orders\".",
            Some("payments_order_id_fkey"),
        );
        let converted = DatabaseErrorConverter::convert_diesel_error(err, "create payment");
        assert!(matches!(
            converted,
            AppError::Validation { ref field, ref reason }
                if field == "order_id" && reason.contains("orders") && reason.contains("'7'")
        ));
    }

    #[test]
    fn unparseable_violation_falls_back_to_database_error() {
        let err = database_error(DatabaseErrorKind::UniqueViolation, "garbled", None);
        let converted = DatabaseErrorConverter::convert_diesel_error(err, "create user");
        assert!(matches!(
            converted,
            AppError::Database { ref operation, .. } if operation == "create user"
        ));
    }

    #[test]
    fn diesel_not_found_converts_to_not_found_with_operation_context() {
        let err = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "order");
        assert!(matches!(
            err,
            AppError::NotFound { ref entity, .. } if entity == "order"
        ));
    }

    #[test]
    fn other_diesel_errors_convert_to_database_error() {
        let err = DatabaseErrorConverter::convert_diesel_error(
            DieselError::RollbackTransaction,
            "transaction",
        );
        assert!(matches!(err, AppError::Database { ref operation, .. } if operation == "transaction"));
    }
}
