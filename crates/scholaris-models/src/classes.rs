//! Class models and DTOs.

use scholaris_core::filters::AllowedField;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Columns the classes list endpoint accepts as filters.
pub const CLASS_FILTER_FIELDS: &[AllowedField] =
    &[AllowedField::text("name"), AllowedField::uuid("branch_id")];

/// A class (grade/form) within a branch.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    pub branch_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreateClassDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub branch_id: Uuid,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateClassDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub branch_id: Option<Uuid>,
}
