/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts structured (entity, field, value) information from constraint
/// names like `credentials_username_key` and from the `Key (field)=(value)`
/// detail lines Postgres attaches to violation messages.
pub struct ConstraintParser;

impl ConstraintParser {
    /// Parses a unique constraint violation into (entity, field, value).
    ///
    /// The constraint name is preferred since Postgres names unique indexes
    /// `{table}_{column}_key` by convention; the duplicate value itself is
    /// recovered from the message detail when present.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                let value = Self::extract_key_value(message)
                    .map(|(_, v)| v)
                    .unwrap_or_else(|| "duplicate_value".to_string());
                return Some((entity, field, value));
            }
        }

        let (field, value) = Self::extract_key_value(message)?;
        Some(("resource".to_string(), field, value))
    }

    /// Parses a not-null violation into (entity, field).
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        let field = Self::extract_quoted(message, "column \"")?;
        let entity = Self::extract_quoted(message, "relation \"")
            .or_else(|| {
                constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e))
            })
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Parses a foreign key violation into (referenced entity, field, value).
    ///
    /// The referenced table comes from the `is not present in table "..."`
    /// DETAIL line; the leading `on table "..."` names the violating table,
    /// not the referenced one.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let (field, value) = Self::extract_key_value(message)
            .unwrap_or_else(|| ("reference".to_string(), "unknown".to_string()));
        let entity = Self::extract_quoted(message, "in table \"")
            .or_else(|| {
                constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e))
            })?;
        Some((entity, field, value))
    }

    /// Parses a check violation into (entity, constraint field).
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some((entity, field)) = constraint_name.and_then(Self::parse_check_constraint_name) {
            return Some((entity, field));
        }
        let entity = Self::extract_quoted(message, "relation \"")?;
        Some((entity, "check".to_string()))
    }

    /// Splits a conventional `{table}_{column}_key` constraint name.
    ///
    /// Column names may themselves contain underscores, so everything between
    /// the first segment and the trailing `_key`/`_unique` suffix is treated
    /// as the column.
    fn parse_constraint_name(constraint: &str) -> Option<(String, String)> {
        let rest = constraint
            .strip_suffix("_key")
            .or_else(|| constraint.strip_suffix("_unique"))
            .or_else(|| constraint.strip_suffix("_fkey"))?;
        let (table, column) = rest.split_once('_')?;
        if table.is_empty() || column.is_empty() {
            return None;
        }
        Some((table.to_string(), column.to_string()))
    }

    /// Splits a `{table}_{column}_check` constraint name.
    fn parse_check_constraint_name(constraint: &str) -> Option<(String, String)> {
        let rest = constraint.strip_suffix("_check")?;
        let (table, column) = rest.split_once('_')?;
        if table.is_empty() || column.is_empty() {
            return None;
        }
        Some((table.to_string(), column.to_string()))
    }

    /// Extracts `(field, value)` from a `Key (field)=(value)` detail line.
    fn extract_key_value(message: &str) -> Option<(String, String)> {
        let rest = message.split("Key (").nth(1)?;
        let (field, rest) = rest.split_once(")=(")?;
        let (value, _) = rest.split_once(')')?;
        Some((field.to_string(), value.to_string()))
    }

    /// Extracts the token following `prefix` up to the closing quote.
    fn extract_quoted(message: &str, prefix: &str) -> Option<String> {
        let rest = message.split(prefix).nth(1)?;
        let (token, _) = rest.split_once('"')?;
        Some(token.to_string())
    }
}
