//! Career profile catalog and the skill matching engine built on top of it.

mod catalog;
pub mod domain;
mod engine;
mod factors;
mod similarity;
pub mod weights;

pub use catalog::{catalog, ProfileCatalog};
pub use domain::{
    CareerProfile, CatalogError, MatchResult, SkillCategory, SkillRequirement, SkillScore,
};
pub use engine::{CareerMatcher, ScoreBreakdown, UserSkills};
pub use factors::{
    education_factor, experience_years, DEFAULT_EDUCATION_FACTOR, DEFAULT_EXPERIENCE_YEARS,
    EDUCATION_FACTORS, EXPERIENCE_MIDPOINTS,
};
pub use similarity::cosine_similarity;
