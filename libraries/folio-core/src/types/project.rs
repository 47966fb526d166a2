/// Project gallery domain types
use crate::error::FolioError;
use crate::types::EntryId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category tag used to filter the project gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Research")]
    Research,
    #[serde(rename = "Data Science")]
    DataScience,
}

impl ProjectCategory {
    /// Every category, in filter-bar order
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::AiMl,
        ProjectCategory::Research,
        ProjectCategory::DataScience,
    ];

    /// Display label, also the wire value
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::AiMl => "AI/ML",
            ProjectCategory::Research => "Research",
            ProjectCategory::DataScience => "Data Science",
        }
    }

    /// CSS modifier used by the category badge
    pub fn css_class(self) -> &'static str {
        match self {
            ProjectCategory::AiMl => "badge-blue",
            ProjectCategory::Research => "badge-purple",
            ProjectCategory::DataScience => "badge-green",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectCategory {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| FolioError::UnknownCategory(s.to_string()))
    }
}

/// One entry of the project gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: EntryId,
    pub title: String,
    pub duration: String,
    pub category: ProjectCategory,
    pub description: String,

    /// Technology names in display order
    pub technologies: Vec<String>,

    /// Achievements in display order
    pub achievements: Vec<String>,

    /// Highlighted on the gallery
    #[serde(default)]
    pub featured: bool,
}
