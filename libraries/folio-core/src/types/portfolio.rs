/// The aggregate portfolio record
use crate::types::{
    Award, Certification, EducationEntry, ExperienceEntry, Patent, Profile, ProjectEntry, Skills,
};
use serde::{Deserialize, Serialize};

/// Everything the page renders, read by every section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub personal: Profile,
    pub education: Vec<EducationEntry>,
    pub patents: Vec<Patent>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
    pub certifications: Vec<Certification>,
    pub awards: Vec<Award>,
}

/// Summary counters shown in the experience, skills and footer sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub projects: usize,
    pub experiences: usize,
    pub languages: usize,
    pub libraries: usize,
    pub developer_tools: usize,
    pub certifications: usize,
}

impl PortfolioRecord {
    /// Find an experience entry by id
    pub fn experience_by_id(&self, id: &str) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|entry| entry.id == *id)
    }

    /// Find a project by id
    pub fn project_by_id(&self, id: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|project| project.id == *id)
    }

    /// Compute the summary counters
    pub fn stats(&self) -> PortfolioStats {
        PortfolioStats {
            projects: self.projects.len(),
            experiences: self.experience.len(),
            languages: self.skills.languages.len(),
            libraries: self.skills.libraries.len(),
            developer_tools: self.skills.developer_tools.len(),
            certifications: self.certifications.len(),
        }
    }
}
