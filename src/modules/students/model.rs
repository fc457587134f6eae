//! Student domain models and DTOs.
//!
//! Two shapes exist for the same data: the storage shape ([`Student`],
//! [`Address`]) that maps to table rows, and the transfer shape
//! ([`StudentDto`], [`AddressDto`]) that crosses the HTTP boundary. Both
//! serialize camelCase on the wire.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A student row together with its owned address rows.
///
/// `id` is `None` until the database assigns a key. The address collection is
/// loaded separately by the repository; once loaded it holds exactly the rows
/// whose `student_id` equals this student's key.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Option<i64>,
    pub name: String,
    pub student_class: String,
    pub age: i32,
    #[sqlx(skip)]
    pub addresses: Vec<Address>,
}

/// An address row owned by a student.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: Option<i64>,
    pub flat_no: String,
    pub city: String,
    pub state: String,
    /// Owning student's key. Kept out of the serialized output so the
    /// parent/child cycle never reaches the wire.
    #[serde(skip)]
    pub student_id: Option<i64>,
}

/// Wire-facing student representation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub student_class: String,
    pub age: i32,
    #[serde(default)]
    pub addresses: Vec<AddressDto>,
}

/// Wire-facing address representation. Carries no identity and no
/// back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub flat_no: String,
    pub city: String,
    pub state: String,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            student_class: student.student_class,
            age: student.age,
            addresses: student
                .addresses
                .into_iter()
                .map(AddressDto::from)
                .collect(),
        }
    }
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            flat_no: address.flat_no,
            city: address.city,
            state: address.state,
        }
    }
}

impl Student {
    /// Builds a fresh, unsaved entity from the transfer shape. Identities stay
    /// unassigned; the repository wires each address to the owning row when it
    /// persists them.
    pub fn from_dto(dto: &StudentDto) -> Self {
        Self {
            id: None,
            name: dto.name.clone(),
            student_class: dto.student_class.clone(),
            age: dto.age,
            addresses: dto.addresses.iter().map(Address::from_dto).collect(),
        }
    }
}

impl Address {
    pub fn from_dto(dto: &AddressDto) -> Self {
        Self {
            id: None,
            flat_no: dto.flat_no.clone(),
            city: dto.city.clone(),
            state: dto.state.clone(),
            student_id: None,
        }
    }
}

/// Query parameters for the class filter endpoint. `page` is 1-based at this
/// boundary.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FilterParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl FilterParams {
    /// Page number, defaulting to 1 and clamped to at least 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, defaulting to 10. Deliberately uncapped.
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(10).max(0)
    }
}
