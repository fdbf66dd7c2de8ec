use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use scholaris_core::{AppError, FilterSet, Paginated, PaginationParams};
use scholaris_models::auth::MessageResponse;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{UserRole, check_role};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateUserDto, USER_FILTER_FIELDS, UpdateUserDto, User};
use super::service::UserService;

#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(raw_filters): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<User>>, AppError> {
    let filters = FilterSet::parse(&raw_filters, USER_FILTER_FIELDS)?;

    let users = UserService::list(&state.db, &pagination, &filters).await?;

    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_by_id(&state.db, id).await?;

    Ok(Json(user))
}

/// Create a user account. Only a super admin may assign the `super_admin`
/// role; admins create accounts with any other role.
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    if dto.role == "super_admin" {
        check_role(&auth_user, UserRole::SuperAdmin)?;
    }

    let user = UserService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<User>, AppError> {
    if dto.role.as_deref() == Some("super_admin") {
        check_role(&auth_user, UserRole::SuperAdmin)?;
    }

    let user = UserService::update(&state.db, id, dto).await?;

    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    if auth_user.user_id()? == id {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Cannot delete your own account"
        )));
    }

    UserService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
