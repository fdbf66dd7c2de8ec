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

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    CreateRoleDto, CreateRoleGroupDto, ROLE_FILTER_FIELDS, ROLE_GROUP_FILTER_FIELDS, Role,
    RoleGroup, UpdateRoleDto, UpdateRoleGroupDto,
};
use super::service::{RoleGroupService, RoleService};

#[instrument(skip(state))]
pub async fn get_roles(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(raw_filters): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<Role>>, AppError> {
    let filters = FilterSet::parse(&raw_filters, ROLE_FILTER_FIELDS)?;

    let roles = RoleService::list(&state.db, &pagination, &filters).await?;

    Ok(Json(roles))
}

#[instrument(skip(state))]
pub async fn get_role_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Role>, AppError> {
    let role = RoleService::get_by_id(&state.db, id).await?;

    Ok(Json(role))
}

#[instrument(skip(state, dto))]
pub async fn create_role(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateRoleDto>,
) -> Result<(StatusCode, Json<Role>), AppError> {
    let role = RoleService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(role)))
}

#[instrument(skip(state, dto))]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateRoleDto>,
) -> Result<Json<Role>, AppError> {
    let role = RoleService::update(&state.db, id, dto).await?;

    Ok(Json(role))
}

#[instrument(skip(state))]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    RoleService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Role deleted successfully".to_string(),
    }))
}

#[instrument(skip(state))]
pub async fn get_role_groups(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(raw_filters): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<RoleGroup>>, AppError> {
    let filters = FilterSet::parse(&raw_filters, ROLE_GROUP_FILTER_FIELDS)?;

    let role_groups = RoleGroupService::list(&state.db, &pagination, &filters).await?;

    Ok(Json(role_groups))
}

#[instrument(skip(state))]
pub async fn get_role_group_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoleGroup>, AppError> {
    let role_group = RoleGroupService::get_by_id(&state.db, id).await?;

    Ok(Json(role_group))
}

#[instrument(skip(state, dto))]
pub async fn create_role_group(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateRoleGroupDto>,
) -> Result<(StatusCode, Json<RoleGroup>), AppError> {
    let role_group = RoleGroupService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(role_group)))
}

#[instrument(skip(state, dto))]
pub async fn update_role_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateRoleGroupDto>,
) -> Result<Json<RoleGroup>, AppError> {
    let role_group = RoleGroupService::update(&state.db, id, dto).await?;

    Ok(Json(role_group))
}

#[instrument(skip(state))]
pub async fn delete_role_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    RoleGroupService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Role group deleted successfully".to_string(),
    }))
}
