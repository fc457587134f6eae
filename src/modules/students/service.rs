//! Student operations.
//!
//! Each operation is a single unit of work against the repository, resolved
//! into the uniform [`PortalResponse`] envelope. Failures never cross this
//! boundary: not-found conditions map to a 404 envelope, everything else to a
//! generic 500 envelope.

use axum::http::StatusCode;
use sqlx::PgPool;
use tracing::{error, info, instrument};

use crate::modules::students::model::{Address, Student, StudentDto};
use crate::modules::students::repository::StudentRepository;
use crate::utils::response::{PortalResponse, codes};

pub struct StudentService;

impl StudentService {
    /// Registers a student together with its addresses and echoes back the
    /// stored entity, identities included.
    #[instrument(skip(db, dto), fields(name = %dto.name))]
    pub async fn register_student(db: &PgPool, dto: StudentDto) -> PortalResponse<Student> {
        match StudentRepository::save(db, &Student::from_dto(&dto)).await {
            Ok(stored) => {
                info!(id = stored.id, "student registered");
                PortalResponse::success(stored)
            }
            Err(e) => {
                error!(error = %e, "failed to register student");
                PortalResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error registering student",
                    codes::STUDENT_REGISTER,
                )
            }
        }
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &PgPool, id: i64) -> PortalResponse<StudentDto> {
        match StudentRepository::find_by_id(db, id).await {
            Ok(Some(student)) => PortalResponse::success(StudentDto::from(student)),
            Ok(None) => PortalResponse::error(
                StatusCode::NOT_FOUND,
                "Student not found",
                codes::STUDENT_NOT_FOUND,
            ),
            Err(e) => {
                error!(error = %e, "failed to fetch student");
                PortalResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error fetching student",
                    codes::INTERNAL,
                )
            }
        }
    }

    /// Lists students of a class. `page` is 1-based and converted to a
    /// 0-based offset here; an out-of-range page yields an empty success
    /// list.
    #[instrument(skip(db))]
    pub async fn get_students_by_class(
        db: &PgPool,
        student_class: &str,
        page: i64,
        size: i64,
    ) -> PortalResponse<Vec<StudentDto>> {
        let offset = (page - 1) * size;
        match StudentRepository::find_by_class(db, student_class, size, offset).await {
            Ok(students) => {
                PortalResponse::success(students.into_iter().map(StudentDto::from).collect())
            }
            Err(e) => {
                error!(error = %e, "failed to fetch students by class");
                PortalResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error fetching students by class",
                    codes::INTERNAL,
                )
            }
        }
    }

    #[instrument(skip(db))]
    pub async fn get_all_students(db: &PgPool) -> PortalResponse<Vec<StudentDto>> {
        match StudentRepository::find_all(db).await {
            Ok(students) => {
                PortalResponse::success(students.into_iter().map(StudentDto::from).collect())
            }
            Err(e) => {
                error!(error = %e, "failed to fetch students");
                PortalResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error fetching students",
                    codes::INTERNAL,
                )
            }
        }
    }

    /// Overwrites every scalar field and replaces the whole address
    /// collection. Previous address identities are discarded, not reused.
    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: i64,
        dto: StudentDto,
    ) -> PortalResponse<StudentDto> {
        let existing = match StudentRepository::find_by_id(db, id).await {
            Ok(Some(existing)) => existing,
            Ok(None) => {
                return PortalResponse::error(
                    StatusCode::NOT_FOUND,
                    "Student not found",
                    codes::STUDENT_NOT_FOUND,
                );
            }
            Err(e) => {
                error!(error = %e, "failed to load student for update");
                return PortalResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error updating student",
                    codes::INTERNAL,
                );
            }
        };

        let replacement = Student {
            name: dto.name.clone(),
            student_class: dto.student_class.clone(),
            age: dto.age,
            addresses: dto.addresses.iter().map(Address::from_dto).collect(),
            ..existing
        };

        match StudentRepository::save(db, &replacement).await {
            Ok(updated) => {
                info!("student updated");
                PortalResponse::success(StudentDto::from(updated))
            }
            Err(e) => {
                error!(error = %e, "failed to update student");
                PortalResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error updating student",
                    codes::INTERNAL,
                )
            }
        }
    }

    /// Deletes a student and, through the cascade, its addresses. Existence
    /// is checked first so deleting an absent key has no side effects.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: i64) -> PortalResponse<String> {
        match StudentRepository::exists_by_id(db, id).await {
            Ok(false) => {
                return PortalResponse::error(
                    StatusCode::NOT_FOUND,
                    "Student not found",
                    codes::STUDENT_NOT_FOUND,
                );
            }
            Ok(true) => {}
            Err(e) => {
                error!(error = %e, "failed to check student existence");
                return PortalResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error deleting student",
                    codes::INTERNAL,
                );
            }
        }

        match StudentRepository::delete_by_id(db, id).await {
            Ok(()) => {
                info!("student deleted");
                PortalResponse::success(format!("Student deleted with ID: {id}"))
            }
            Err(e) => {
                error!(error = %e, "failed to delete student");
                PortalResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error deleting student",
                    codes::INTERNAL,
                )
            }
        }
    }
}
