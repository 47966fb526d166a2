/// Profile domain type
use crate::shell::links;
use serde::{Deserialize, Serialize};

/// Personal details shown in the hero, contact and footer sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name
    pub name: String,

    /// Professional title
    pub title: String,

    /// Contact email
    pub email: String,

    /// Contact phone, free-form
    pub phone: String,

    /// City and region
    pub location: String,

    /// LinkedIn profile URL
    pub linkedin: String,

    /// GitHub profile URL
    pub github: String,

    /// Short biography
    pub bio: String,

    /// Availability text, e.g. "Available for full-time opportunities"
    pub availability: String,
}

/// An external profile link, opened in a new browsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink<'a> {
    /// Display label
    pub label: &'static str,

    /// Target URL
    pub url: &'a str,
}

impl Profile {
    /// `mailto:` URI for the profile email
    pub fn mailto(&self) -> String {
        links::mailto(&self.email)
    }

    /// `tel:` URI for the profile phone
    pub fn tel(&self) -> String {
        links::tel(&self.phone)
    }

    /// Social links in display order
    pub fn social_links(&self) -> [SocialLink<'_>; 2] {
        [
            SocialLink {
                label: "LinkedIn",
                url: &self.linkedin,
            },
            SocialLink {
                label: "GitHub",
                url: &self.github,
            },
        ]
    }

    /// Whether the availability text advertises openness to offers
    pub fn is_available(&self) -> bool {
        self.availability.to_lowercase().starts_with("available")
    }
}
