//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::domain::entities::{Family, Gender, Parent, Student};

/// Create a test parent without an identity (as submitted by a client)
pub fn test_parent() -> Parent {
    Parent {
        parent_id: None,
        gender: Gender::Male,
        first_name: "Lucio".to_string(),
        middle_name: "Andres".to_string(),
        last_name: "Gonzales".to_string(),
        other_parent_details: "Nice Parent".to_string(),
    }
}

/// Create a test parent with a specific identity
pub fn test_parent_with_id(id: &str) -> Parent {
    Parent {
        parent_id: Some(id.to_string()),
        ..test_parent()
    }
}

/// Create a test student without an identity
pub fn test_student() -> Student {
    Student {
        student_id: None,
        gender: Gender::Male,
        first_name: "Alejandro".to_string(),
        middle_name: "Mateo".to_string(),
        last_name: "Gonzales".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1994, 6, 6).unwrap(),
        other_student_details: "Nice Student".to_string(),
    }
}

/// Create a test student with a specific identity
pub fn test_student_with_id(id: &str) -> Student {
    Student {
        student_id: Some(id.to_string()),
        ..test_student()
    }
}

/// Create a test family headed by the given parent, without an identity
pub fn test_family(head_of_family: Parent) -> Family {
    Family {
        family_id: None,
        head_of_family,
        family_name: "Los Gonzales".to_string(),
    }
}

/// Create a test family with a specific identity and a stored head parent
pub fn test_family_with_id(id: &str) -> Family {
    Family {
        family_id: Some(id.to_string()),
        ..test_family(test_parent_with_id("65f0aa10c3d2b8a4e1f00001"))
    }
}
