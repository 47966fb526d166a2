//! Project gallery filter.
//!
//! Selection is a fixed category or the "All" sentinel. It lives only as
//! long as the page view; every new view starts from "All".

use crate::error::{FolioError, Result};
use crate::types::{ProjectCategory, ProjectEntry};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Label of the sentinel that shows every project
pub const ALL_LABEL: &str = "All";

/// Current selection of the filter bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No narrowing
    #[default]
    All,
    /// Only projects tagged with this category
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Filter-bar options: the sentinel followed by every category
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProjectCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Whether a project passes this filter
    pub fn matches(self, project: &ProjectEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }

    /// Parse an optional query value; absent or empty means "All"
    pub fn from_query(value: Option<&str>) -> Result<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(CategoryFilter::All),
            Some(label) => label.parse(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        if s == ALL_LABEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Filter bar state of the project gallery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: CategoryFilter,
}

impl ProjectFilter {
    /// Start from a given selection
    pub fn new(selected: CategoryFilter) -> Self {
        Self { selected }
    }

    /// Change the selection
    pub fn select(&mut self, filter: CategoryFilter) {
        tracing::debug!(category = filter.label(), "Project filter changed");
        self.selected = filter;
    }

    /// Current selection
    pub fn selected(&self) -> CategoryFilter {
        self.selected
    }

    /// Projects to display, in source order.
    ///
    /// A selection with no matching entries yields an empty list.
    pub fn apply<'a>(&self, projects: &'a [ProjectEntry]) -> Vec<&'a ProjectEntry> {
        projects
            .iter()
            .filter(|project| self.selected.matches(project))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::portfolio;

    fn titles(projects: &[&ProjectEntry]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let filter = ProjectFilter::default();
        assert_eq!(filter.selected(), CategoryFilter::All);
        assert_eq!(filter.apply(&portfolio().projects).len(), 3);
    }

    #[test]
    fn test_select_ai_ml_then_all() {
        let projects = &portfolio().projects;
        let mut filter = ProjectFilter::default();

        filter.select(CategoryFilter::Only(ProjectCategory::AiMl));
        assert_eq!(
            titles(&filter.apply(projects)),
            vec!["Automated Short News Video Production System"]
        );

        filter.select(CategoryFilter::All);
        assert_eq!(filter.apply(projects).len(), 3);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let only_research: Vec<ProjectEntry> = portfolio()
            .projects
            .iter()
            .filter(|p| p.category == ProjectCategory::Research)
            .cloned()
            .collect();

        let filter = ProjectFilter::new(CategoryFilter::Only(ProjectCategory::DataScience));
        assert!(filter.apply(&only_research).is_empty());
    }

    #[test]
    fn test_options_order() {
        let labels: Vec<&str> = CategoryFilter::options().map(CategoryFilter::label).collect();
        assert_eq!(labels, vec!["All", "AI/ML", "Research", "Data Science"]);
    }

    #[test]
    fn test_from_query() {
        assert_eq!(CategoryFilter::from_query(None), Ok(CategoryFilter::All));
        assert_eq!(CategoryFilter::from_query(Some("")), Ok(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_query(Some("Research")),
            Ok(CategoryFilter::Only(ProjectCategory::Research))
        );
        assert!(CategoryFilter::from_query(Some("Games")).is_err());
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&CategoryFilter::Only(ProjectCategory::AiMl)).unwrap();
        assert_eq!(json, "\"AI/ML\"");
        let parsed: CategoryFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(parsed, CategoryFilter::All);
    }
}
