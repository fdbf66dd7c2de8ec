//! Branch (campus) models and DTOs.

use scholaris_core::filters::AllowedField;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Columns the branches list endpoint accepts as filters.
pub const BRANCH_FILTER_FIELDS: &[AllowedField] = &[
    AllowedField::text("name"),
    AllowedField::text("address"),
    AllowedField::text("phone"),
];

/// A school branch (campus).
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct Branch {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreateBranchDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateBranchDto {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_branch_requires_name() {
        let dto = CreateBranchDto {
            name: "".to_string(),
            address: None,
            phone: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_branch_valid() {
        let dto = CreateBranchDto {
            name: "North Campus".to_string(),
            address: Some("12 Hill Road".to_string()),
            phone: Some("+2348000000000".to_string()),
        };
        assert!(dto.validate().is_ok());
    }
}
