//! Folio Core
//!
//! Platform-agnostic building blocks for the Folio portfolio site.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Profile`, `ExperienceEntry`, `ProjectEntry`, etc.
//! - **Static Record**: [`record::portfolio`], built once and never mutated
//! - **Project Filter**: category selection over the project list
//! - **Contact Form**: the idle/submitting/succeeded/failed cycle and the
//!   [`ContactSender`] boundary it submits through
//! - **Page Shell**: navigation anchors, mobile menu and scroll state
//! - **Views**: HTML renderers for every page section
//!
//! # Example
//!
//! ```rust
//! use folio_core::{record, CategoryFilter, ProjectCategory, ProjectFilter};
//!
//! let portfolio = record::portfolio();
//!
//! let mut filter = ProjectFilter::default();
//! filter.select(CategoryFilter::Only(ProjectCategory::AiMl));
//!
//! let shown = filter.apply(&portfolio.projects);
//! assert_eq!(shown.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod contact;
pub mod error;
pub mod filter;
pub mod record;
pub mod shell;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use contact::{
    ContactAck, ContactForm, ContactSender, ContactSubmission, FormField, FormStatus, Inbox,
    SimulatedSender, StoredSubmission,
};
pub use error::{FolioError, Result};
pub use filter::{CategoryFilter, ProjectFilter};
pub use shell::{HeaderState, NavItem, NAV_ITEMS, SCROLL_THRESHOLD};
pub use types::{
    Award, Certification, EducationEntry, EntryId, ExperienceEntry, ExperienceKind, Patent,
    PortfolioRecord, PortfolioStats, Profile, ProjectCategory, ProjectEntry, SkillGroup, Skills,
    SocialLink,
};
pub use view::{render_page, PageState};
