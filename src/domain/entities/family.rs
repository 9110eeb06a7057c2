//! Family domain entity

use serde::{Deserialize, Serialize};

use super::parent::Parent;

/// A family record
///
/// Carries a materialized copy of the Parent acting as head of family. The
/// family references the parent by identity but does not own it; deleting the
/// parent later leaves this reference dangling (document-store semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_id: Option<String>,
    pub head_of_family: Parent,
    pub family_name: String,
}
