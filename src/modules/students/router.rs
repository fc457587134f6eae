use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::students::controller::{
    delete_student, get_all_students, get_student_by_id, get_students_by_class, register_student,
    update_student,
};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_student))
        .route("/findAll", get(get_all_students))
        .route("/filter/{studentClass}", get(get_students_by_class))
        .route(
            "/{id}",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student),
        )
}
