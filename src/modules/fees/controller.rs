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
    CreateFeeDto, CreateFeeTypeDto, FEE_FILTER_FIELDS, FEE_TYPE_FILTER_FIELDS, Fee, FeeType,
    UpdateFeeDto, UpdateFeeTypeDto,
};
use super::service::{FeeService, FeeTypeService};

/// List fees with pagination and allow-listed filters.
///
/// Amount and due date support `gt:`/`lt:` prefixes, e.g.
/// `?amount=gt:50000&due_date=lt:2026-01-01&paid=false`.
#[instrument(skip(state))]
pub async fn get_fees(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(raw_filters): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<Fee>>, AppError> {
    let filters = FilterSet::parse(&raw_filters, FEE_FILTER_FIELDS)?;

    let fees = FeeService::list(&state.db, &pagination, &filters).await?;

    Ok(Json(fees))
}

#[instrument(skip(state))]
pub async fn get_fee_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Fee>, AppError> {
    let fee = FeeService::get_by_id(&state.db, id).await?;

    Ok(Json(fee))
}

#[instrument(skip(state, dto))]
pub async fn create_fee(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateFeeDto>,
) -> Result<(StatusCode, Json<Fee>), AppError> {
    let fee = FeeService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(fee)))
}

#[instrument(skip(state, dto))]
pub async fn update_fee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateFeeDto>,
) -> Result<Json<Fee>, AppError> {
    let fee = FeeService::update(&state.db, id, dto).await?;

    Ok(Json(fee))
}

#[instrument(skip(state))]
pub async fn delete_fee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    FeeService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Fee deleted successfully".to_string(),
    }))
}

#[instrument(skip(state))]
pub async fn get_fee_types(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(raw_filters): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<FeeType>>, AppError> {
    let filters = FilterSet::parse(&raw_filters, FEE_TYPE_FILTER_FIELDS)?;

    let fee_types = FeeTypeService::list(&state.db, &pagination, &filters).await?;

    Ok(Json(fee_types))
}

#[instrument(skip(state))]
pub async fn get_fee_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeeType>, AppError> {
    let fee_type = FeeTypeService::get_by_id(&state.db, id).await?;

    Ok(Json(fee_type))
}

#[instrument(skip(state, dto))]
pub async fn create_fee_type(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateFeeTypeDto>,
) -> Result<(StatusCode, Json<FeeType>), AppError> {
    let fee_type = FeeTypeService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(fee_type)))
}

#[instrument(skip(state, dto))]
pub async fn update_fee_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateFeeTypeDto>,
) -> Result<Json<FeeType>, AppError> {
    let fee_type = FeeTypeService::update(&state.db, id, dto).await?;

    Ok(Json(fee_type))
}

#[instrument(skip(state))]
pub async fn delete_fee_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    FeeTypeService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Fee type deleted successfully".to_string(),
    }))
}
