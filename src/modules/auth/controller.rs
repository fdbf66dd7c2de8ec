use axum::{Json, extract::State};
use tracing::instrument;

use scholaris_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, User};
use super::service::AuthService;

/// Authenticate with email and password, returning an access/refresh token
/// pair and the user's profile.
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.db, &state.jwt_config, dto).await?;

    Ok(Json(response))
}

/// Exchange a refresh token for a fresh access token.
#[instrument(skip(state, dto))]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    let response = AuthService::refresh(&state.db, &state.jwt_config, dto).await?;

    Ok(Json(response))
}

/// Return the authenticated caller's profile.
#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user_id = auth_user.user_id()?;

    let user = AuthService::load_user(&state.db, user_id).await?;

    Ok(Json(user))
}
