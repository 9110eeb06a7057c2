//! Student domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::gender::Gender;

/// A student record
///
/// The date of birth carries no time component and travels as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub gender: Gender,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub other_student_details: String,
}
