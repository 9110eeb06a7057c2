//! MongoDB document models
//!
//! These mirror the domain entities with a store-native `_id: ObjectId`
//! identity. Domain identities are the ObjectId's hex form, so the
//! domain-to-document direction can fail on a malformed identity while the
//! reverse direction cannot.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Family, FamilyMember, Gender, Membership, Parent, Student};
use crate::error::DomainError;

/// Parse a domain identity into a store identity.
pub(crate) fn object_id(id: &str) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(id).map_err(|_| DomainError::Validation(format!("invalid identity: {}", id)))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParentDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub gender: Gender,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub other_details: String,
}

impl TryFrom<&Parent> for ParentDocument {
    type Error = DomainError;

    fn try_from(parent: &Parent) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parent.parent_id.as_deref().map(object_id).transpose()?,
            gender: parent.gender,
            first_name: parent.first_name.clone(),
            middle_name: parent.middle_name.clone(),
            last_name: parent.last_name.clone(),
            other_details: parent.other_parent_details.clone(),
        })
    }
}

impl From<ParentDocument> for Parent {
    fn from(document: ParentDocument) -> Self {
        Self {
            parent_id: document.id.map(|id| id.to_hex()),
            gender: document.gender,
            first_name: document.first_name,
            middle_name: document.middle_name,
            last_name: document.last_name,
            other_parent_details: document.other_details,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub gender: Gender,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub date_of_birth: chrono::NaiveDate,
    pub other_details: String,
}

impl TryFrom<&Student> for StudentDocument {
    type Error = DomainError;

    fn try_from(student: &Student) -> Result<Self, Self::Error> {
        Ok(Self {
            id: student.student_id.as_deref().map(object_id).transpose()?,
            gender: student.gender,
            first_name: student.first_name.clone(),
            middle_name: student.middle_name.clone(),
            last_name: student.last_name.clone(),
            date_of_birth: student.date_of_birth,
            other_details: student.other_student_details.clone(),
        })
    }
}

impl From<StudentDocument> for Student {
    fn from(document: StudentDocument) -> Self {
        Self {
            student_id: document.id.map(|id| id.to_hex()),
            gender: document.gender,
            first_name: document.first_name,
            middle_name: document.middle_name,
            last_name: document.last_name,
            date_of_birth: document.date_of_birth,
            other_student_details: document.other_details,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FamilyDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub head_of_family: ParentDocument,
    pub family_name: String,
}

impl TryFrom<&Family> for FamilyDocument {
    type Error = DomainError;

    fn try_from(family: &Family) -> Result<Self, Self::Error> {
        Ok(Self {
            id: family.family_id.as_deref().map(object_id).transpose()?,
            head_of_family: ParentDocument::try_from(&family.head_of_family)?,
            family_name: family.family_name.clone(),
        })
    }
}

impl From<FamilyDocument> for Family {
    fn from(document: FamilyDocument) -> Self {
        Self {
            family_id: document.id.map(|id| id.to_hex()),
            head_of_family: document.head_of_family.into(),
            family_name: document.family_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FamilyMemberDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub family: FamilyDocument,
    /// Stored in the flat role/parent/student shape; the tagged union is
    /// re-validated when the document is read back.
    #[serde(flatten)]
    pub membership: Membership,
}

impl TryFrom<&FamilyMember> for FamilyMemberDocument {
    type Error = DomainError;

    fn try_from(member: &FamilyMember) -> Result<Self, Self::Error> {
        Ok(Self {
            id: member.family_member_id.as_deref().map(object_id).transpose()?,
            family: FamilyDocument::try_from(&member.family)?,
            membership: member.membership.clone(),
        })
    }
}

impl From<FamilyMemberDocument> for FamilyMember {
    fn from(document: FamilyMemberDocument) -> Self {
        Self {
            family_member_id: document.id.map(|id| id.to_hex()),
            family: document.family.into(),
            membership: document.membership,
        }
    }
}
