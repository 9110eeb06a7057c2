//! FamilyMember domain entity
//!
//! A family member links a Family to exactly one Parent or Student payload,
//! selected by a role discriminator. The role/payload pair is modeled as a
//! sum type so that "both populated" or "both absent" records are
//! unrepresentable; the two-nullable-slot wire shape is validated at
//! deserialization time.

use serde::{Deserialize, Serialize};

use super::family::Family;
use super::parent::Parent;
use super::student::Student;

/// Role discriminator for a family member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Parent,
    Student,
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Parent => write!(f, "Parent"),
            MemberRole::Student => write!(f, "Student"),
        }
    }
}

impl std::str::FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Parent" => Ok(MemberRole::Parent),
            "Student" => Ok(MemberRole::Student),
            _ => Err(format!("Unknown member role: {}", s)),
        }
    }
}

/// The payload of a family member, tagged by role
///
/// Serializes to the flat `{role, parent, student}` shape with exactly one
/// payload slot populated; any other combination fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MembershipShape", into = "MembershipShape")]
pub enum Membership {
    Parent(Parent),
    Student(Student),
}

impl Membership {
    pub fn role(&self) -> MemberRole {
        match self {
            Membership::Parent(_) => MemberRole::Parent,
            Membership::Student(_) => MemberRole::Student,
        }
    }
}

/// Wire shape of a membership: role discriminator plus two nullable slots
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MembershipShape {
    role: MemberRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Parent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    student: Option<Student>,
}

impl TryFrom<MembershipShape> for Membership {
    type Error = String;

    fn try_from(shape: MembershipShape) -> Result<Self, Self::Error> {
        match (shape.role, shape.parent, shape.student) {
            (MemberRole::Parent, Some(parent), None) => Ok(Membership::Parent(parent)),
            (MemberRole::Student, None, Some(student)) => Ok(Membership::Student(student)),
            (role, parent, student) => Err(format!(
                "member with role {} must carry exactly the matching payload (parent: {}, student: {})",
                role,
                if parent.is_some() { "present" } else { "absent" },
                if student.is_some() { "present" } else { "absent" },
            )),
        }
    }
}

impl From<Membership> for MembershipShape {
    fn from(membership: Membership) -> Self {
        match membership {
            Membership::Parent(parent) => MembershipShape {
                role: MemberRole::Parent,
                parent: Some(parent),
                student: None,
            },
            Membership::Student(student) => MembershipShape {
                role: MemberRole::Student,
                parent: None,
                student: Some(student),
            },
        }
    }
}

/// A family member record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_member_id: Option<String>,
    pub family: Family,
    #[serde(flatten)]
    pub membership: Membership,
}
