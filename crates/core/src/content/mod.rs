pub mod profile;
pub mod project;
pub mod store;

pub use profile::{Experience, Profile, Skill, SkillCategory, SocialLink};
pub use project::{Project, ProjectCategory, TechStack};
pub use store::{ContentStore, IntegrityError};
