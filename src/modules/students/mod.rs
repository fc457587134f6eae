//! Students module.
//!
//! Registration, lookup, class filtering, update, and deletion of student
//! records, each owning a collection of addresses.

pub mod controller;
pub mod model;
pub mod repository;
pub mod router;
pub mod service;
