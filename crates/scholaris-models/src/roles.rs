//! Role and role group models and DTOs.
//!
//! Roles here are administrative records; the authorization middleware works
//! off the flat role slug carried in the JWT, not these rows.

use scholaris_core::filters::AllowedField;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Columns the roles list endpoint accepts as filters.
pub const ROLE_FILTER_FIELDS: &[AllowedField] = &[
    AllowedField::text("name"),
    AllowedField::uuid("role_group_id"),
];

/// Columns the role groups list endpoint accepts as filters.
pub const ROLE_GROUP_FILTER_FIELDS: &[AllowedField] = &[AllowedField::text("name")];

/// Generate a slug from a name.
/// Converts to lowercase, replaces spaces and hyphens with underscores,
/// removes invalid characters, and collapses repeats.
pub fn generate_slug(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c == ' ' || c == '-' {
                '_'
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut result = String::new();
    let mut prev_underscore = false;
    for c in slug.chars() {
        if c == '_' {
            if !prev_underscore && !result.is_empty() {
                result.push(c);
            }
            prev_underscore = true;
        } else {
            result.push(c);
            prev_underscore = false;
        }
    }

    result.trim_end_matches('_').to_string()
}

/// A role record.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub role_group_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A grouping of related roles (e.g. "Academic Staff").
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct RoleGroup {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreateRoleDto {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
    pub role_group_id: Option<Uuid>,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateRoleDto {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,
    pub role_group_id: Option<Uuid>,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreateRoleGroupDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateRoleGroupDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slug_basic() {
        assert_eq!(generate_slug("Super Admin"), "super_admin");
        assert_eq!(generate_slug("head-teacher"), "head_teacher");
    }

    #[test]
    fn test_generate_slug_collapses_repeats() {
        assert_eq!(generate_slug("Front  Desk"), "front_desk");
        assert_eq!(generate_slug("A -- B"), "a_b");
    }

    #[test]
    fn test_generate_slug_strips_invalid_chars() {
        assert_eq!(generate_slug("Bursar (Senior)"), "bursar_senior");
        assert_eq!(generate_slug("Class 1A!"), "class_1a");
    }

    #[test]
    fn test_generate_slug_trims_edges() {
        assert_eq!(generate_slug("  Admin  "), "admin");
        assert_eq!(generate_slug("_admin_"), "admin");
    }
}
