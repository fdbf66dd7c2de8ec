//! Student domain models and DTOs.
//!
//! This module contains all data structures related to student management,
//! including the student entity, request/response DTOs, and the filter
//! allow-list for the list endpoint.

use scholaris_core::filters::AllowedField;
use scholaris_core::serde::deserialize_optional_uuid;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Columns the students list endpoint accepts as filters.
pub const STUDENT_FILTER_FIELDS: &[AllowedField] = &[
    AllowedField::text("first_name"),
    AllowedField::text("last_name"),
    AllowedField::text("email"),
    AllowedField::uuid("branch_id"),
    AllowedField::uuid("class_id"),
    AllowedField::uuid("section_id"),
    AllowedField::date("date_of_birth"),
];

/// A student record.
///
/// Students belong to a branch and are optionally placed in a class and
/// section within it.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub branch_id: Option<Uuid>,
    pub class_id: Option<Uuid>,
    pub section_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a new student.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub branch_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub class_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub section_id: Option<Uuid>,
}

/// DTO for updating an existing student.
///
/// All fields are optional; only provided fields will be updated.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub branch_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub class_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub section_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_student_dto_validation() {
        let valid_dto = CreateStudentDto {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            date_of_birth: None,
            branch_id: None,
            class_id: None,
            section_id: None,
        };
        assert!(valid_dto.validate().is_ok());
    }

    #[test]
    fn test_create_student_dto_invalid_email() {
        let invalid_dto = CreateStudentDto {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "invalid-email".to_string(),
            date_of_birth: None,
            branch_id: None,
            class_id: None,
            section_id: None,
        };
        assert!(invalid_dto.validate().is_err());
    }

    #[test]
    fn test_create_student_dto_empty_name() {
        let invalid_dto = CreateStudentDto {
            first_name: "".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            date_of_birth: None,
            branch_id: None,
            class_id: None,
            section_id: None,
        };
        assert!(invalid_dto.validate().is_err());
    }

    #[test]
    fn test_create_student_dto_long_name() {
        let invalid_dto = CreateStudentDto {
            first_name: "x".repeat(101),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            date_of_birth: None,
            branch_id: None,
            class_id: None,
            section_id: None,
        };
        assert!(invalid_dto.validate().is_err());
    }

    #[test]
    fn test_update_student_dto_empty_is_valid() {
        let empty_dto = UpdateStudentDto {
            first_name: None,
            last_name: None,
            email: None,
            date_of_birth: None,
            branch_id: None,
            class_id: None,
            section_id: None,
        };
        assert!(empty_dto.validate().is_ok());
    }

    #[test]
    fn test_update_student_dto_invalid_email() {
        let invalid_dto = UpdateStudentDto {
            first_name: None,
            last_name: None,
            email: Some("invalid-email".to_string()),
            date_of_birth: None,
            branch_id: None,
            class_id: None,
            section_id: None,
        };
        assert!(invalid_dto.validate().is_err());
    }

    #[test]
    fn test_empty_string_ids_deserialize_to_none() {
        let dto: CreateStudentDto = serde_json::from_str(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com","branch_id":"","class_id":"","section_id":""}"#,
        )
        .unwrap();
        assert!(dto.branch_id.is_none());
        assert!(dto.class_id.is_none());
        assert!(dto.section_id.is_none());
    }

    #[test]
    fn test_filter_fields_cover_foreign_keys() {
        let columns: Vec<&str> = STUDENT_FILTER_FIELDS.iter().map(|f| f.column).collect();
        assert!(columns.contains(&"branch_id"));
        assert!(columns.contains(&"class_id"));
        assert!(columns.contains(&"section_id"));
    }
}
