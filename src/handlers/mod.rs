//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod families;
pub mod family_members;
pub mod parents;
pub mod streaming;
pub mod students;

pub use families::{create_family, delete_family, get_family, list_families, update_family};
pub use family_members::{
    create_family_member, delete_family_member, get_family_member, list_family_members,
    update_family_member,
};
pub use parents::{create_parent, delete_parent, get_parent, list_parents, update_parent};
pub use students::{create_student, delete_student, get_student, list_students, update_student};
