//! HTTP handlers for the students module.
//!
//! Handlers do nothing beyond extracting parameters, invoking one service
//! operation, and returning its envelope unchanged.

use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;

use crate::modules::students::model::{FilterParams, Student, StudentDto};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::response::{ApiError, PortalResponse};

#[utoipa::path(
    post,
    path = "/student/register",
    request_body = StudentDto,
    responses(
        (status = 200, description = "Stored student, wrapped in the response envelope", body = Student),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn register_student(
    State(state): State<AppState>,
    Json(dto): Json<StudentDto>,
) -> PortalResponse<Student> {
    StudentService::register_student(&state.db, dto).await
}

#[utoipa::path(
    get,
    path = "/student/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student, wrapped in the response envelope", body = StudentDto),
        (status = 404, description = "Student not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> PortalResponse<StudentDto> {
    StudentService::get_student_by_id(&state.db, id).await
}

#[utoipa::path(
    get,
    path = "/student/filter/{studentClass}",
    params(
        ("studentClass" = String, Path, description = "Class label to filter by"),
        FilterParams
    ),
    responses(
        (status = 200, description = "Page of students, wrapped in the response envelope", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_by_class(
    State(state): State<AppState>,
    Path(student_class): Path<String>,
    Query(params): Query<FilterParams>,
) -> PortalResponse<Vec<StudentDto>> {
    StudentService::get_students_by_class(&state.db, &student_class, params.page(), params.size())
        .await
}

#[utoipa::path(
    get,
    path = "/student/findAll",
    responses(
        (status = 200, description = "All students, wrapped in the response envelope", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_all_students(State(state): State<AppState>) -> PortalResponse<Vec<StudentDto>> {
    StudentService::get_all_students(&state.db).await
}

#[utoipa::path(
    put,
    path = "/student/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Updated student, wrapped in the response envelope", body = StudentDto),
        (status = 404, description = "Student not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<StudentDto>,
) -> PortalResponse<StudentDto> {
    StudentService::update_student(&state.db, id, dto).await
}

#[utoipa::path(
    delete,
    path = "/student/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Confirmation message, wrapped in the response envelope", body = String),
        (status = 404, description = "Student not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> PortalResponse<String> {
    StudentService::delete_student(&state.db, id).await
}
