//! Role-based authorization middleware.
//!
//! Authorization is a flat comparison of the role slug carried in the JWT
//! against the roles a route allows. There is no hierarchy graph and no
//! database lookup on this path; the single special case is that a super
//! admin passes every check.
//!
//! Two usage styles are provided, matching how routes consume them:
//!
//! 1. Layer-based middleware via [`require_admin`] / [`require_super_admin`]
//!    with `axum::middleware::from_fn_with_state`
//! 2. The [`check_role`] helper for manual checks inside controllers

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use scholaris_core::errors::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The flat set of roles the authorization predicates understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Teacher,
    Student,
}

impl UserRole {
    /// Parse a role slug from a token. An unknown slug is treated as a
    /// forbidden caller, not a server error: the token is valid, the role
    /// just grants nothing.
    pub fn parse(slug: &str) -> Result<Self, AppError> {
        match slug {
            "super_admin" => Ok(UserRole::SuperAdmin),
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            _ => Err(AppError::forbidden(format!(
                "Access denied. Unknown role: {}",
                slug
            ))),
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }
}

/// Middleware that checks the authenticated caller against a set of allowed
/// roles. Super admins pass unconditionally.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/students", get(handler))
///     .layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_roles(state, req, next, vec![UserRole::Admin]),
///     ));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    let user_role = UserRole::parse(&auth_user.0.role)?;

    if user_role != UserRole::SuperAdmin && !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles, user_role
        )));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Middleware for super-admin-only routes.
pub async fn require_super_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::SuperAdmin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Middleware for admin routes (super admin implicitly included).
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Check a single required role in controller logic.
///
/// ```rust,ignore
/// check_role(&auth_user, UserRole::Admin)?;
/// ```
pub fn check_role(auth_user: &AuthUser, required_role: UserRole) -> Result<(), AppError> {
    let user_role = UserRole::parse(&auth_user.0.role)?;

    if user_role == UserRole::SuperAdmin || user_role == required_role {
        return Ok(());
    }

    Err(AppError::forbidden(format!(
        "Access denied. Required role: {:?}, but user has role: {:?}",
        required_role, user_role
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_slugs() {
        assert_eq!(UserRole::parse("super_admin").unwrap(), UserRole::SuperAdmin);
        assert_eq!(UserRole::parse("admin").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::parse("teacher").unwrap(), UserRole::Teacher);
        assert_eq!(UserRole::parse("student").unwrap(), UserRole::Student);
    }

    #[test]
    fn test_parse_unknown_slug_is_forbidden() {
        let err = UserRole::parse("janitor").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_slug_roundtrip() {
        for role in [
            UserRole::SuperAdmin,
            UserRole::Admin,
            UserRole::Teacher,
            UserRole::Student,
        ] {
            assert_eq!(UserRole::parse(role.slug()).unwrap(), role);
        }
    }
}
