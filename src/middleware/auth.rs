use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use scholaris_auth::{Claims, verify_token};
use scholaris_core::errors::AppError;

use crate::state::AppState;

/// Extractor that validates the JWT and provides the authenticated caller's
/// claims.
///
/// The token is read from `Authorization: Bearer <token>` or, failing that,
/// the legacy `x-access-token` header. Either a missing or invalid token
/// rejects the request with 401 before any handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the user ID as UUID
    pub fn user_id(&self) -> Result<uuid::Uuid, AppError> {
        uuid::Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token".to_string()))
    }

    /// Get the user's email
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Get the user's role slug
    pub fn role(&self) -> &str {
        &self.0.role
    }
}

/// Pull the raw token out of the request headers.
///
/// `Authorization: Bearer <token>` wins; `x-access-token: <token>` is the
/// fallback kept for older clients.
pub fn extract_token(parts: &Parts) -> Option<&str> {
    if let Some(value) = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    {
        return value.strip_prefix("Bearer ");
    }

    parts
        .headers
        .get("x-access-token")
        .and_then(|value| value.to_str().ok())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)
            .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use uuid::Uuid;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/api/students");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn test_extract_token_bearer() {
        let parts = parts_with_headers(&[("authorization", "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&parts), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_token_x_access_token() {
        let parts = parts_with_headers(&[("x-access-token", "abc.def.ghi")]);
        assert_eq!(extract_token(&parts), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_token_bearer_wins() {
        let parts = parts_with_headers(&[
            ("authorization", "Bearer from-bearer"),
            ("x-access-token", "from-legacy"),
        ]);
        assert_eq!(extract_token(&parts), Some("from-bearer"));
    }

    #[test]
    fn test_extract_token_missing() {
        let parts = parts_with_headers(&[]);
        assert_eq!(extract_token(&parts), None);
    }

    #[test]
    fn test_extract_token_malformed_scheme() {
        let parts = parts_with_headers(&[("authorization", "Basic abc")]);
        assert_eq!(extract_token(&parts), None);
    }

    #[test]
    fn test_user_id() {
        let user_id = Uuid::new_v4();
        let auth_user = AuthUser(Claims {
            sub: user_id.to_string(),
            email: "test@example.com".to_string(),
            role: "admin".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        });
        assert_eq!(auth_user.user_id().unwrap(), user_id);
        assert_eq!(auth_user.email(), "test@example.com");
        assert_eq!(auth_user.role(), "admin");
    }

    #[test]
    fn test_user_id_invalid() {
        let auth_user = AuthUser(Claims {
            sub: "not-a-uuid".to_string(),
            email: "test@example.com".to_string(),
            role: "admin".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        });
        assert!(auth_user.user_id().is_err());
    }
}
