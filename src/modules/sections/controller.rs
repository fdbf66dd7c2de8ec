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

use super::model::{CreateSectionDto, SECTION_FILTER_FIELDS, Section, UpdateSectionDto};
use super::service::SectionService;

#[instrument(skip(state))]
pub async fn get_sections(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(raw_filters): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<Section>>, AppError> {
    let filters = FilterSet::parse(&raw_filters, SECTION_FILTER_FIELDS)?;

    let sections = SectionService::list(&state.db, &pagination, &filters).await?;

    Ok(Json(sections))
}

#[instrument(skip(state))]
pub async fn get_section_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Section>, AppError> {
    let section = SectionService::get_by_id(&state.db, id).await?;

    Ok(Json(section))
}

#[instrument(skip(state, dto))]
pub async fn create_section(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSectionDto>,
) -> Result<(StatusCode, Json<Section>), AppError> {
    let section = SectionService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(section)))
}

#[instrument(skip(state, dto))]
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateSectionDto>,
) -> Result<Json<Section>, AppError> {
    let section = SectionService::update(&state.db, id, dto).await?;

    Ok(Json(section))
}

#[instrument(skip(state))]
pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    SectionService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Section deleted successfully".to_string(),
    }))
}
