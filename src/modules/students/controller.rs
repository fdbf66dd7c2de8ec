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

use super::model::{CreateStudentDto, STUDENT_FILTER_FIELDS, Student, UpdateStudentDto};
use super::service::StudentService;

/// List students with pagination and allow-listed filters.
///
/// Filter keys outside [`STUDENT_FILTER_FIELDS`] are ignored; a value that
/// fails typed parsing rejects the request with 400 before any query runs.
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(raw_filters): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<Student>>, AppError> {
    let filters = FilterSet::parse(&raw_filters, STUDENT_FILTER_FIELDS)?;

    let students = StudentService::list(&state.db, &pagination, &filters).await?;

    Ok(Json(students))
}

#[instrument(skip(state))]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_by_id(&state.db, id).await?;

    Ok(Json(student))
}

#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::update(&state.db, id, dto).await?;

    Ok(Json(student))
}

#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    StudentService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Student deleted successfully".to_string(),
    }))
}
