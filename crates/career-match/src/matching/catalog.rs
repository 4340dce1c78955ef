use std::sync::OnceLock;

use super::domain::{
    CareerProfile, CatalogError,
    SkillCategory::{DomainKnowledge, SoftSkills, Technical},
    SkillRequirement,
};

#[derive(Debug)]
pub struct ProfileCatalog {
    profiles: Vec<CareerProfile>,
}

/// Process-wide catalog, built on first use and never mutated afterwards.
pub fn catalog() -> &'static ProfileCatalog {
    static CATALOG: OnceLock<ProfileCatalog> = OnceLock::new();
    CATALOG.get_or_init(ProfileCatalog::standard)
}

impl ProfileCatalog {
    pub fn standard() -> Self {
        Self::new(standard_profiles())
    }

    pub fn new(profiles: Vec<CareerProfile>) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &[CareerProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&CareerProfile, CatalogError> {
        self.profiles
            .iter()
            .find(|profile| profile.id == id)
            .ok_or_else(|| CatalogError::UnknownProfile(id.to_string()))
    }
}

// Skill names are shared with the front-end's career data; keep them byte-identical.
fn standard_profiles() -> Vec<CareerProfile> {
    vec![
        CareerProfile::new(
            "senior-frontend",
            vec![
                SkillRequirement::new("TypeScript", 9, Technical),
                SkillRequirement::new("React", 9, Technical),
                SkillRequirement::new("System Design", 8, Technical),
                SkillRequirement::new("Team Leadership", 7, SoftSkills),
                SkillRequirement::new("Performance Optimization", 8, Technical),
                SkillRequirement::new("Accessibility (a11y)", 8, DomainKnowledge),
            ],
            5.0,
        ),
        CareerProfile::new(
            "ui-ux-engineer",
            vec![
                SkillRequirement::new("Figma / Design Tools", 8, Technical),
                SkillRequirement::new("CSS & Animations", 9, Technical),
                SkillRequirement::new("User Research", 7, DomainKnowledge),
                SkillRequirement::new("Prototyping", 8, Technical),
                SkillRequirement::new("Design Systems", 8, Technical),
                SkillRequirement::new("Communication", 8, SoftSkills),
            ],
            4.0,
        ),
        CareerProfile::new(
            "fullstack-developer",
            vec![
                SkillRequirement::new("Node.js / Backend", 8, Technical),
                SkillRequirement::new("Databases (SQL/NoSQL)", 8, Technical),
                SkillRequirement::new("API Design (REST/GraphQL)", 8, Technical),
                SkillRequirement::new("DevOps & CI/CD", 7, Technical),
                SkillRequirement::new("Cloud Services (AWS/GCP)", 7, Technical),
                SkillRequirement::new("Problem Solving", 8, SoftSkills),
            ],
            4.0,
        ),
        CareerProfile::new(
            "devops-engineer",
            vec![
                SkillRequirement::new("Linux & Scripting", 9, Technical),
                SkillRequirement::new("Docker & Kubernetes", 9, Technical),
                SkillRequirement::new("CI/CD Pipelines", 8, Technical),
                SkillRequirement::new("Cloud Platforms", 9, Technical),
                SkillRequirement::new("Monitoring & Logging", 7, Technical),
                SkillRequirement::new("Collaboration", 8, SoftSkills),
            ],
            5.0,
        ),
        CareerProfile::new(
            "data-engineer",
            vec![
                SkillRequirement::new("Python", 9, Technical),
                SkillRequirement::new("SQL & Data Modeling", 9, Technical),
                SkillRequirement::new("ETL / Data Pipelines", 8, Technical),
                SkillRequirement::new("Cloud Data Services", 8, Technical),
                SkillRequirement::new("Spark / Big Data", 7, Technical),
                SkillRequirement::new("Analytical Thinking", 8, SoftSkills),
            ],
            4.0,
        ),
    ]
}
