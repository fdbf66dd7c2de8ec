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

use super::model::{CLASS_FILTER_FIELDS, Class, CreateClassDto, UpdateClassDto};
use super::service::ClassService;

#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(raw_filters): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<Class>>, AppError> {
    let filters = FilterSet::parse(&raw_filters, CLASS_FILTER_FIELDS)?;

    let classes = ClassService::list(&state.db, &pagination, &filters).await?;

    Ok(Json(classes))
}

#[instrument(skip(state))]
pub async fn get_class_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::get_by_id(&state.db, id).await?;

    Ok(Json(class))
}

#[instrument(skip(state, dto))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let class = ClassService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(class)))
}

#[instrument(skip(state, dto))]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateClassDto>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::update(&state.db, id, dto).await?;

    Ok(Json(class))
}

#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ClassService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Class deleted successfully".to_string(),
    }))
}
