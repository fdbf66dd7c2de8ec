//! User account models and DTOs.
//!
//! Users are staff/admin accounts that authenticate against the API. Each
//! carries a single flat role slug consumed by the authorization predicates.

use scholaris_core::filters::AllowedField;
use scholaris_core::serde::deserialize_optional_uuid;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Columns the users list endpoint accepts as filters.
pub const USER_FILTER_FIELDS: &[AllowedField] = &[
    AllowedField::text("first_name"),
    AllowedField::text("last_name"),
    AllowedField::text("email"),
    AllowedField::text("role"),
    AllowedField::uuid("branch_id"),
];

/// A user account. The password hash never leaves the service layer.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Role slug: `super_admin`, `admin`, `teacher`, or `student`.
    pub role: String,
    pub branch_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// User row including the bcrypt hash, used only inside the auth service.
#[derive(FromRow, Debug, Clone)]
pub struct UserWithPassword {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub branch_id: Option<Uuid>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 50))]
    pub role: String,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub branch_id: Option<Uuid>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub branch_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_dto_valid() {
        let dto = CreateUserDto {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "password123".to_string(),
            role: "admin".to_string(),
            branch_id: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_user_dto_short_password() {
        let dto = CreateUserDto {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "short".to_string(),
            role: "admin".to_string(),
            branch_id: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_user_serialization_has_no_password_field() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            role: "teacher".to_string(),
            branch_id: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
    }
}
