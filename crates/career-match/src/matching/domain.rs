use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkillCategory {
    Technical,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    #[serde(rename = "Domain Knowledge")]
    DomainKnowledge,
}

impl SkillCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Technical, Self::SoftSkills, Self::DomainKnowledge]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::SoftSkills => "Soft Skills",
            Self::DomainKnowledge => "Domain Knowledge",
        }
    }
}

/// Proficiency a career expects for one skill, on a 1-10 scale.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRequirement {
    pub name: &'static str,
    pub required: u8,
    pub category: SkillCategory,
}

impl SkillRequirement {
    pub const fn new(name: &'static str, required: u8, category: SkillCategory) -> Self {
        Self {
            name,
            required,
            category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CareerProfile {
    pub id: &'static str,
    pub skills: Vec<SkillRequirement>,
    pub ideal_experience: f64,
    normalized_names: Vec<String>,
}

impl CareerProfile {
    /// Builds a profile and caches the lower-cased skill names used for matching.
    ///
    /// `ideal_experience` is expressed in years and must be positive.
    pub fn new(id: &'static str, skills: Vec<SkillRequirement>, ideal_experience: f64) -> Self {
        debug_assert!(ideal_experience > 0.0, "ideal experience must be positive");
        let normalized_names = skills
            .iter()
            .map(|skill| skill.name.trim().to_lowercase())
            .collect();

        Self {
            id,
            skills,
            ideal_experience,
            normalized_names,
        }
    }

    pub fn skill_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.skills.iter().map(|skill| skill.name)
    }

    pub(crate) fn normalized_names(&self) -> &[String] {
        &self.normalized_names
    }

    pub fn skills_in(&self, category: SkillCategory) -> Vec<&SkillRequirement> {
        self.skills
            .iter()
            .filter(|skill| skill.category == category)
            .collect()
    }
}

/// Per-skill row rendered by the front-end next to each career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillScore {
    pub name: String,
    pub level: u8,
    pub required: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: String,
    pub match_score: u8,
    pub skills: Vec<SkillScore>,
}

impl MatchResult {
    pub fn held_skills(&self) -> impl Iterator<Item = &SkillScore> {
        self.skills.iter().filter(|skill| skill.level > 0)
    }

    pub fn missing_skills(&self) -> impl Iterator<Item = &SkillScore> {
        self.skills.iter().filter(|skill| skill.level == 0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown career profile '{0}'")]
    UnknownProfile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_serialize_with_display_labels() {
        for category in SkillCategory::ordered() {
            let encoded = serde_json::to_value(category).expect("category serializes");
            assert_eq!(encoded, serde_json::json!(category.label()));
        }
    }

    #[test]
    fn profile_caches_lowercase_names() {
        let profile = CareerProfile::new(
            "example",
            vec![
                SkillRequirement::new("TypeScript", 9, SkillCategory::Technical),
                SkillRequirement::new("Accessibility (a11y)", 8, SkillCategory::DomainKnowledge),
            ],
            5.0,
        );

        assert_eq!(
            profile.normalized_names(),
            &["typescript".to_string(), "accessibility (a11y)".to_string()]
        );
        assert_eq!(
            profile.skill_names().collect::<Vec<_>>(),
            vec!["TypeScript", "Accessibility (a11y)"]
        );
    }

    #[test]
    fn match_result_uses_camel_case_on_the_wire() {
        let result = MatchResult {
            id: "senior-frontend".to_string(),
            match_score: 72,
            skills: vec![SkillScore {
                name: "React".to_string(),
                level: 6,
                required: 9,
                category: SkillCategory::Technical,
            }],
        };

        let encoded = serde_json::to_value(&result).expect("result serializes");
        assert_eq!(encoded["matchScore"], 72);
        assert_eq!(encoded["skills"][0]["category"], "Technical");
        assert!(encoded.get("match_score").is_none());
    }
}
