//! Parent domain entity

use serde::{Deserialize, Serialize};

use super::gender::Gender;

/// A parent record
///
/// The identity is absent until the store assigns it on first save and is
/// never overwritten by a caller-supplied value afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub gender: Gender,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub other_parent_details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_identity() {
        let parent: Parent = serde_json::from_str(
            r#"{
                "gender": "M",
                "firstName": "Lucio",
                "middleName": "Andres",
                "lastName": "Gonzales",
                "otherParentDetails": "Nice Parent"
            }"#,
        )
        .unwrap();

        assert!(parent.parent_id.is_none());
        assert_eq!(parent.first_name, "Lucio");
        assert_eq!(parent.gender, Gender::Male);
    }

    #[test]
    fn identity_is_omitted_when_absent() {
        let parent = Parent {
            parent_id: None,
            gender: Gender::Female,
            first_name: "Maria".to_string(),
            middle_name: "Luisa".to_string(),
            last_name: "Gonzales".to_string(),
            other_parent_details: String::new(),
        };

        let json = serde_json::to_value(&parent).unwrap();
        assert!(json.get("parentId").is_none());
        assert_eq!(json["firstName"], "Maria");
    }

    #[test]
    fn identity_roundtrips_when_present() {
        let json = r#"{
            "parentId": "65f0aa10c3d2b8a4e1f00001",
            "gender": "F",
            "firstName": "Maria",
            "middleName": "Luisa",
            "lastName": "Gonzales",
            "otherParentDetails": ""
        }"#;

        let parent: Parent = serde_json::from_str(json).unwrap();
        assert_eq!(
            parent.parent_id.as_deref(),
            Some("65f0aa10c3d2b8a4e1f00001")
        );

        let back = serde_json::to_value(&parent).unwrap();
        assert_eq!(back["parentId"], "65f0aa10c3d2b8a4e1f00001");
    }
}
