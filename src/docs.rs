use utoipa::OpenApi;

use crate::modules::students::model::{Address, AddressDto, Student, StudentDto};
use crate::utils::response::ApiError;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::register_student,
        crate::modules::students::controller::get_student_by_id,
        crate::modules::students::controller::get_students_by_class,
        crate::modules::students::controller::get_all_students,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(schemas(Student, Address, StudentDto, AddressDto, ApiError)),
    tags(
        (name = "Students", description = "Student record management endpoints")
    )
)]
pub struct ApiDoc;
