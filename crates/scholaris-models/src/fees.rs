//! Fee and fee type models and DTOs.
//!
//! Amounts are stored as BIGINT minor units (e.g. kobo/cents) to avoid
//! floating-point money.

use scholaris_core::filters::AllowedField;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Columns the fees list endpoint accepts as filters.
pub const FEE_FILTER_FIELDS: &[AllowedField] = &[
    AllowedField::uuid("student_id"),
    AllowedField::uuid("fee_type_id"),
    AllowedField::integer("amount"),
    AllowedField::date("due_date"),
    AllowedField::boolean("paid"),
];

/// Columns the fee types list endpoint accepts as filters.
pub const FEE_TYPE_FILTER_FIELDS: &[AllowedField] = &[AllowedField::text("name")];

/// A fee charged to a student.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct Fee {
    pub id: Uuid,
    pub student_id: Uuid,
    pub fee_type_id: Uuid,
    /// Amount in minor currency units.
    pub amount: i64,
    pub due_date: Option<chrono::NaiveDate>,
    pub paid: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A category of fee (tuition, transport, ...).
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct FeeType {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreateFeeDto {
    pub student_id: Uuid,
    pub fee_type_id: Uuid,
    #[validate(range(min = 0))]
    pub amount: i64,
    pub due_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub paid: bool,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateFeeDto {
    pub student_id: Option<Uuid>,
    pub fee_type_id: Option<Uuid>,
    #[validate(range(min = 0))]
    pub amount: Option<i64>,
    pub due_date: Option<chrono::NaiveDate>,
    pub paid: Option<bool>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreateFeeTypeDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateFeeTypeDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fee_rejects_negative_amount() {
        let dto = CreateFeeDto {
            student_id: Uuid::new_v4(),
            fee_type_id: Uuid::new_v4(),
            amount: -100,
            due_date: None,
            paid: false,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_fee_valid() {
        let dto = CreateFeeDto {
            student_id: Uuid::new_v4(),
            fee_type_id: Uuid::new_v4(),
            amount: 150_000,
            due_date: Some(chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()),
            paid: false,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_paid_defaults_to_false() {
        let dto: CreateFeeDto = serde_json::from_str(
            r#"{"student_id":"00000000-0000-0000-0000-000000000001",
                "fee_type_id":"00000000-0000-0000-0000-000000000002",
                "amount":5000}"#,
        )
        .unwrap();
        assert!(!dto.paid);
    }

    #[test]
    fn test_fee_filter_fields_support_amount_ordering() {
        let amount = FEE_FILTER_FIELDS
            .iter()
            .find(|f| f.column == "amount")
            .unwrap();
        assert_eq!(amount.kind, scholaris_core::filters::FieldKind::Integer);
    }
}
