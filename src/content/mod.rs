//! Portfolio content: model, loading and rich-text rendering

pub mod loader;
pub mod markdown;
pub mod model;

pub use loader::load;
pub use model::{
    Availability, Career, Certification, Education, Links, Profile, Project, ProjectLinks,
    SiteData, Skill, SkillGroups,
};
