mod experience;
mod ids;
mod portfolio;
mod profile;
mod project;
mod resume;
mod skills;

pub use experience::{ExperienceEntry, ExperienceKind};
pub use ids::EntryId;
pub use portfolio::{PortfolioRecord, PortfolioStats};
pub use profile::{Profile, SocialLink};
pub use project::{ProjectCategory, ProjectEntry};
pub use resume::{Award, Certification, EducationEntry, Patent};
pub use skills::{SkillGroup, Skills};
