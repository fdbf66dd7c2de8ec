//! Section models and DTOs.

use scholaris_core::filters::AllowedField;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Columns the sections list endpoint accepts as filters.
pub const SECTION_FILTER_FIELDS: &[AllowedField] =
    &[AllowedField::text("name"), AllowedField::uuid("class_id")];

/// A section (arm) within a class.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct Section {
    pub id: Uuid,
    pub name: String,
    pub class_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreateSectionDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub class_id: Uuid,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateSectionDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub class_id: Option<Uuid>,
}
