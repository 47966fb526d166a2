/// Work history domain types
use crate::error::FolioError;
use crate::types::EntryId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category tag on an experience entry, used for display styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceKind {
    Internship,
    Leadership,
}

impl ExperienceKind {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            ExperienceKind::Internship => "Internship",
            ExperienceKind::Leadership => "Leadership",
        }
    }

    /// CSS modifier used by the timeline badge
    pub fn css_class(self) -> &'static str {
        match self {
            ExperienceKind::Internship => "badge-blue",
            ExperienceKind::Leadership => "badge-purple",
        }
    }
}

impl fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExperienceKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Internship" => Ok(ExperienceKind::Internship),
            "Leadership" => Ok(ExperienceKind::Leadership),
            other => Err(FolioError::UnknownExperienceKind(other.to_string())),
        }
    }
}

/// One position on the experience timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub position: String,
    pub company: String,
    pub location: String,
    pub duration: String,

    /// Category tag
    #[serde(rename = "type")]
    pub kind: ExperienceKind,

    /// Achievements in display order
    pub achievements: Vec<String>,
}
