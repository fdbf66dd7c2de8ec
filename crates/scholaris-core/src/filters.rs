//! Query-string filter construction.
//!
//! List endpoints accept filters as plain query parameters. Each resource
//! declares an allow-list of filterable columns with their SQL type; keys
//! outside the allow-list are ignored. Values follow a prefix convention:
//!
//! - `gt:<v>` / `lt:<v>` — greater-than / less-than comparison
//! - `like:<v>` — case-insensitive prefix match (text columns only)
//! - `a,b,c` — set membership
//! - anything else — equality
//!
//! Filters combine with implicit AND. The resulting [`FilterSet`] appends
//! parameterized fragments to a [`sqlx::QueryBuilder`]; values are always
//! bound, never interpolated into the SQL text.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::errors::AppError;

/// SQL type of a filterable column, used to parse and bind values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Date,
    Uuid,
    Boolean,
}

/// A column a resource allows filtering on. The query-string key is the
/// column name.
#[derive(Debug, Clone, Copy)]
pub struct AllowedField {
    pub column: &'static str,
    pub kind: FieldKind,
}

impl AllowedField {
    pub const fn text(column: &'static str) -> Self {
        Self {
            column,
            kind: FieldKind::Text,
        }
    }

    pub const fn integer(column: &'static str) -> Self {
        Self {
            column,
            kind: FieldKind::Integer,
        }
    }

    pub const fn date(column: &'static str) -> Self {
        Self {
            column,
            kind: FieldKind::Date,
        }
    }

    pub const fn uuid(column: &'static str) -> Self {
        Self {
            column,
            kind: FieldKind::Uuid,
        }
    }

    pub const fn boolean(column: &'static str) -> Self {
        Self {
            column,
            kind: FieldKind::Boolean,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    Uuid(Uuid),
    Boolean(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gt,
    Lt,
    Like,
    In,
}

/// A single predicate on one column.
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: &'static str,
    pub op: FilterOp,
    /// One value for Eq/Gt/Lt/Like, one or more for In.
    pub values: Vec<FilterValue>,
}

/// The structured predicate set built from a request's query string.
#[derive(Debug, Default)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Build a filter set from raw query parameters against an allow-list.
    ///
    /// Keys absent from the allow-list (including `page`/`limit`) are
    /// silently ignored. A value that fails typed parsing, or an operator
    /// that is invalid for the column's kind, yields a 400.
    pub fn parse(
        query: &HashMap<String, String>,
        allowed: &[AllowedField],
    ) -> Result<Self, AppError> {
        let mut filters = Vec::new();

        for field in allowed {
            let Some(raw) = query.get(field.column) else {
                continue;
            };

            let filter = if let Some(value) = raw.strip_prefix("gt:") {
                Self::comparison(field, FilterOp::Gt, value)?
            } else if let Some(value) = raw.strip_prefix("lt:") {
                Self::comparison(field, FilterOp::Lt, value)?
            } else if let Some(value) = raw.strip_prefix("like:") {
                if field.kind != FieldKind::Text {
                    return Err(AppError::bad_request(anyhow::anyhow!(
                        "like: filter is only valid on text field, got '{}'",
                        field.column
                    )));
                }
                Filter {
                    column: field.column,
                    op: FilterOp::Like,
                    values: vec![FilterValue::Text(value.to_string())],
                }
            } else if raw.contains(',') {
                let values = raw
                    .split(',')
                    .filter(|part| !part.is_empty())
                    .map(|part| parse_value(field, part))
                    .collect::<Result<Vec<_>, _>>()?;
                if values.is_empty() {
                    continue;
                }
                Filter {
                    column: field.column,
                    op: FilterOp::In,
                    values,
                }
            } else {
                Filter {
                    column: field.column,
                    op: FilterOp::Eq,
                    values: vec![parse_value(field, raw)?],
                }
            };

            filters.push(filter);
        }

        Ok(Self { filters })
    }

    fn comparison(field: &AllowedField, op: FilterOp, value: &str) -> Result<Filter, AppError> {
        match field.kind {
            FieldKind::Uuid | FieldKind::Boolean => Err(AppError::bad_request(anyhow::anyhow!(
                "ordering filter is not valid on field '{}'",
                field.column
            ))),
            _ => Ok(Filter {
                column: field.column,
                op,
                values: vec![parse_value(field, value)?],
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Append ` AND <col> <op> $n` fragments for every filter.
    ///
    /// The caller's query must already contain a WHERE clause (typically
    /// `WHERE TRUE` or `WHERE 1=1`). Column names come from the static
    /// allow-list, so pushing them into the SQL text is safe.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for filter in &self.filters {
            qb.push(" AND ");
            qb.push(filter.column);
            match filter.op {
                FilterOp::Eq => {
                    qb.push(" = ");
                    push_value(qb, &filter.values[0]);
                }
                FilterOp::Gt => {
                    qb.push(" > ");
                    push_value(qb, &filter.values[0]);
                }
                FilterOp::Lt => {
                    qb.push(" < ");
                    push_value(qb, &filter.values[0]);
                }
                FilterOp::Like => {
                    qb.push(" ILIKE ");
                    if let FilterValue::Text(text) = &filter.values[0] {
                        qb.push_bind(format!("{}%", text));
                    }
                }
                FilterOp::In => {
                    qb.push(" = ANY(");
                    push_array(qb, &filter.values);
                    qb.push(")");
                }
            }
        }
    }
}

fn parse_value(field: &AllowedField, raw: &str) -> Result<FilterValue, AppError> {
    match field.kind {
        FieldKind::Text => Ok(FilterValue::Text(raw.to_string())),
        FieldKind::Integer => raw.parse::<i64>().map(FilterValue::Integer).map_err(|_| {
            AppError::bad_request(anyhow::anyhow!(
                "invalid integer value '{}' for field '{}'",
                raw,
                field.column
            ))
        }),
        FieldKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(FilterValue::Date)
            .map_err(|_| {
                AppError::bad_request(anyhow::anyhow!(
                    "invalid date value '{}' for field '{}', expected YYYY-MM-DD",
                    raw,
                    field.column
                ))
            }),
        FieldKind::Uuid => Uuid::parse_str(raw).map(FilterValue::Uuid).map_err(|_| {
            AppError::bad_request(anyhow::anyhow!(
                "invalid id value '{}' for field '{}'",
                raw,
                field.column
            ))
        }),
        FieldKind::Boolean => match raw {
            "true" | "1" => Ok(FilterValue::Boolean(true)),
            "false" | "0" => Ok(FilterValue::Boolean(false)),
            _ => Err(AppError::bad_request(anyhow::anyhow!(
                "invalid boolean value '{}' for field '{}'",
                raw,
                field.column
            ))),
        },
    }
}

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: &FilterValue) {
    match value {
        FilterValue::Text(v) => qb.push_bind(v.clone()),
        FilterValue::Integer(v) => qb.push_bind(*v),
        FilterValue::Date(v) => qb.push_bind(*v),
        FilterValue::Uuid(v) => qb.push_bind(*v),
        FilterValue::Boolean(v) => qb.push_bind(*v),
    };
}

fn push_array(qb: &mut QueryBuilder<'_, Postgres>, values: &[FilterValue]) {
    // All values in one filter share the column's kind.
    match &values[0] {
        FilterValue::Text(_) => {
            let items: Vec<String> = values
                .iter()
                .filter_map(|v| match v {
                    FilterValue::Text(s) => Some(s.clone()),
                    _ => None,
                })
                .collect();
            qb.push_bind(items);
        }
        FilterValue::Integer(_) => {
            let items: Vec<i64> = values
                .iter()
                .filter_map(|v| match v {
                    FilterValue::Integer(n) => Some(*n),
                    _ => None,
                })
                .collect();
            qb.push_bind(items);
        }
        FilterValue::Date(_) => {
            let items: Vec<NaiveDate> = values
                .iter()
                .filter_map(|v| match v {
                    FilterValue::Date(d) => Some(*d),
                    _ => None,
                })
                .collect();
            qb.push_bind(items);
        }
        FilterValue::Uuid(_) => {
            let items: Vec<Uuid> = values
                .iter()
                .filter_map(|v| match v {
                    FilterValue::Uuid(u) => Some(*u),
                    _ => None,
                })
                .collect();
            qb.push_bind(items);
        }
        FilterValue::Boolean(_) => {
            let items: Vec<bool> = values
                .iter()
                .filter_map(|v| match v {
                    FilterValue::Boolean(b) => Some(*b),
                    _ => None,
                })
                .collect();
            qb.push_bind(items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[AllowedField] = &[
        AllowedField::text("first_name"),
        AllowedField::text("email"),
        AllowedField::integer("amount"),
        AllowedField::date("due_date"),
        AllowedField::uuid("branch_id"),
        AllowedField::boolean("paid"),
    ];

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_equality_filter() {
        let set = FilterSet::parse(&query(&[("first_name", "Ada")]), FIELDS).unwrap();
        assert_eq!(set.len(), 1);
        let filter = &set.filters()[0];
        assert_eq!(filter.op, FilterOp::Eq);
        assert_eq!(filter.values[0], FilterValue::Text("Ada".to_string()));
    }

    #[test]
    fn test_gt_and_lt_filters() {
        let set = FilterSet::parse(
            &query(&[("amount", "gt:5000"), ("due_date", "lt:2025-01-01")]),
            FIELDS,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        let by_col = |col: &str| set.filters().iter().find(|f| f.column == col).unwrap();
        assert_eq!(by_col("amount").op, FilterOp::Gt);
        assert_eq!(by_col("amount").values[0], FilterValue::Integer(5000));
        assert_eq!(by_col("due_date").op, FilterOp::Lt);
    }

    #[test]
    fn test_like_filter() {
        let set = FilterSet::parse(&query(&[("email", "like:ada@")]), FIELDS).unwrap();
        let filter = &set.filters()[0];
        assert_eq!(filter.op, FilterOp::Like);
        assert_eq!(filter.values[0], FilterValue::Text("ada@".to_string()));
    }

    #[test]
    fn test_like_rejected_on_non_text() {
        let err = FilterSet::parse(&query(&[("amount", "like:50")]), FIELDS).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_in_filter_from_comma_list() {
        let set = FilterSet::parse(&query(&[("first_name", "Ada,Grace,Edsger")]), FIELDS).unwrap();
        let filter = &set.filters()[0];
        assert_eq!(filter.op, FilterOp::In);
        assert_eq!(filter.values.len(), 3);
    }

    #[test]
    fn test_in_filter_typed_values() {
        let set = FilterSet::parse(&query(&[("amount", "100,200")]), FIELDS).unwrap();
        let filter = &set.filters()[0];
        assert_eq!(filter.op, FilterOp::In);
        assert_eq!(filter.values[1], FilterValue::Integer(200));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let set = FilterSet::parse(
            &query(&[("page", "2"), ("limit", "5"), ("not_a_field", "x")]),
            FIELDS,
        )
        .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_invalid_integer_rejected() {
        let err = FilterSet::parse(&query(&[("amount", "lots")]), FIELDS).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = FilterSet::parse(&query(&[("due_date", "01/02/2025")]), FIELDS).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_uuid_rejected() {
        let err = FilterSet::parse(&query(&[("branch_id", "not-a-uuid")]), FIELDS).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ordering_rejected_on_uuid_and_boolean() {
        assert!(FilterSet::parse(&query(&[("branch_id", "gt:x")]), FIELDS).is_err());
        assert!(FilterSet::parse(&query(&[("paid", "lt:true")]), FIELDS).is_err());
    }

    #[test]
    fn test_boolean_values() {
        let set = FilterSet::parse(&query(&[("paid", "true")]), FIELDS).unwrap();
        assert_eq!(set.filters()[0].values[0], FilterValue::Boolean(true));

        let set = FilterSet::parse(&query(&[("paid", "0")]), FIELDS).unwrap();
        assert_eq!(set.filters()[0].values[0], FilterValue::Boolean(false));

        assert!(FilterSet::parse(&query(&[("paid", "yes")]), FIELDS).is_err());
    }

    #[test]
    fn test_push_where_sql_shape() {
        let set = FilterSet::parse(
            &query(&[("email", "like:ada@"), ("amount", "gt:100")]),
            FIELDS,
        )
        .unwrap();
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM fees WHERE TRUE");
        set.push_where(&mut qb);
        let sql = qb.sql();
        assert!(sql.contains("email ILIKE $"));
        assert!(sql.contains("amount > $"));
        assert!(!sql.contains("ada@"), "values must be bound, not inlined");
    }

    #[test]
    fn test_push_where_in_uses_any() {
        let set = FilterSet::parse(&query(&[("first_name", "Ada,Grace")]), FIELDS).unwrap();
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM students WHERE TRUE");
        set.push_where(&mut qb);
        assert!(qb.sql().contains("first_name = ANY($"));
    }

    #[test]
    fn test_empty_query_yields_empty_set() {
        let set = FilterSet::parse(&HashMap::new(), FIELDS).unwrap();
        assert!(set.is_empty());
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM students WHERE TRUE");
        set.push_where(&mut qb);
        assert_eq!(qb.sql(), "SELECT * FROM students WHERE TRUE");
    }
}
