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

use super::model::{BRANCH_FILTER_FIELDS, Branch, CreateBranchDto, UpdateBranchDto};
use super::service::BranchService;

#[instrument(skip(state))]
pub async fn get_branches(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(raw_filters): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<Branch>>, AppError> {
    let filters = FilterSet::parse(&raw_filters, BRANCH_FILTER_FIELDS)?;

    let branches = BranchService::list(&state.db, &pagination, &filters).await?;

    Ok(Json(branches))
}

#[instrument(skip(state))]
pub async fn get_branch_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Branch>, AppError> {
    let branch = BranchService::get_by_id(&state.db, id).await?;

    Ok(Json(branch))
}

#[instrument(skip(state, dto))]
pub async fn create_branch(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateBranchDto>,
) -> Result<(StatusCode, Json<Branch>), AppError> {
    let branch = BranchService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(branch)))
}

#[instrument(skip(state, dto))]
pub async fn update_branch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateBranchDto>,
) -> Result<Json<Branch>, AppError> {
    let branch = BranchService::update(&state.db, id, dto).await?;

    Ok(Json(branch))
}

#[instrument(skip(state))]
pub async fn delete_branch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    BranchService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Branch deleted successfully".to_string(),
    }))
}
