/// Skills domain type
use serde::{Deserialize, Serialize};

/// Skill lists, grouped the way the skills grid shows them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub developer_tools: Vec<String>,
    pub libraries: Vec<String>,
    pub cloud_infrastructure: Vec<String>,
    pub hardware: Vec<String>,
}

/// A titled skill group as rendered in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup<'a> {
    pub title: &'static str,
    pub skills: &'a [String],
}

impl Skills {
    /// The five groups in display order
    pub fn groups(&self) -> [SkillGroup<'_>; 5] {
        [
            SkillGroup {
                title: "Programming Languages",
                skills: &self.languages,
            },
            SkillGroup {
                title: "Developer Tools",
                skills: &self.developer_tools,
            },
            SkillGroup {
                title: "Libraries & Frameworks",
                skills: &self.libraries,
            },
            SkillGroup {
                title: "Cloud & Infrastructure",
                skills: &self.cloud_infrastructure,
            },
            SkillGroup {
                title: "Hardware",
                skills: &self.hardware,
            },
        ]
    }

    /// Total number of listed skills
    pub fn total(&self) -> usize {
        self.groups().iter().map(|group| group.skills.len()).sum()
    }
}
