use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serializable representation of an in-toto statement.
///
/// Generic over the predicate body so typed predicates (such as the VSA
/// predicate) serialize without a detour through [`Value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement<P = Value> {
    /// The statement type identifier
    #[serde(rename = "_type")]
    pub type_: String,
    /// List of subjects (artifacts) this statement refers to
    pub subject: Vec<Subject>,
    /// The predicate (claim) being made about the subjects
    #[serde(flatten)]
    pub predicate: Predicate<P>,
}

/// Represents a subject (artifact) in an in-toto statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Name or identifier of the artifact
    pub name: String,
    /// Map of digest algorithm names to their digest values
    pub digest: BTreeMap<String, String>,
}

/// Represents a predicate (claim) in an in-toto statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Predicate<P = Value> {
    /// URI identifying the predicate type
    pub predicate_type: String,
    /// The predicate content
    pub predicate: P,
}
