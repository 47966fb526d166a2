/// Education, patent, award and certification records
use crate::types::EntryId;
use serde::{Deserialize, Serialize};

/// One education entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub duration: String,

    /// Grade as printed: CGPA or percentage
    pub score: String,

    /// Optional status tag, e.g. "Current"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A published patent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patent {
    pub id: EntryId,
    pub title: String,
    pub patent_number: String,
    pub publish_date: String,
    pub description: String,
}

/// An award or achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub year: String,
}

/// A completed certification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: EntryId,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}
