use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::catalog::{catalog, ProfileCatalog};
use super::domain::{CareerProfile, MatchResult, SkillScore};
use super::factors::{education_factor, experience_years};
use super::similarity::cosine_similarity;
use super::weights::{
    bounded_score, HELD_SKILL_DISPLAY_LEVEL, HELD_SKILL_SIGNAL, MATCH_WEIGHTS,
    REQUIRED_LEVEL_SCALE,
};

/// Normalized set of skill names reported by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSkills {
    names: HashSet<String>,
}

impl UserSkills {
    /// Trims and lower-cases every entry; duplicates collapse.
    pub fn from_raw<S: AsRef<str>>(skills: &[S]) -> Self {
        let names = skills
            .iter()
            .map(|skill| skill.as_ref().trim().to_lowercase())
            .collect();
        Self { names }
    }

    pub fn holds(&self, normalized_name: &str) -> bool {
        self.names.contains(normalized_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Intermediate factors behind a profile's match score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub profile_id: &'static str,
    pub similarity: f64,
    pub experience_factor: f64,
    pub education_factor: f64,
    pub raw_score: f64,
    pub match_score: u8,
}

/// Stateless matcher ranking every catalog profile against a user's inputs.
#[derive(Debug, Clone, Copy)]
pub struct CareerMatcher<'a> {
    catalog: &'a ProfileCatalog,
}

impl CareerMatcher<'static> {
    pub fn standard() -> Self {
        Self::new(catalog())
    }
}

impl<'a> CareerMatcher<'a> {
    pub fn new(catalog: &'a ProfileCatalog) -> Self {
        Self { catalog }
    }

    /// Scores every profile and returns them ordered by match score, highest first.
    ///
    /// Profiles with equal scores keep their catalog order. Unknown experience or
    /// education tokens fall back to the table defaults.
    pub fn match_skills<S: AsRef<str>>(
        &self,
        skills: &[S],
        experience: &str,
        education: &str,
    ) -> Vec<MatchResult> {
        let user = UserSkills::from_raw(skills);
        let years = experience_years(experience);
        let edu_factor = education_factor(education);

        let mut results: Vec<MatchResult> = self
            .catalog
            .profiles()
            .iter()
            .map(|profile| {
                let breakdown = score_profile(profile, &user, years, edu_factor);
                MatchResult {
                    id: profile.id.to_string(),
                    match_score: breakdown.match_score,
                    skills: skill_scores(profile, &user),
                }
            })
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results
    }

    /// Per-profile factor breakdown, in catalog order.
    pub fn explain<S: AsRef<str>>(
        &self,
        skills: &[S],
        experience: &str,
        education: &str,
    ) -> Vec<ScoreBreakdown> {
        let user = UserSkills::from_raw(skills);
        let years = experience_years(experience);
        let edu_factor = education_factor(education);

        self.catalog
            .profiles()
            .iter()
            .map(|profile| score_profile(profile, &user, years, edu_factor))
            .collect()
    }
}

fn score_profile(
    profile: &CareerProfile,
    user: &UserSkills,
    experience_years: f64,
    education_factor: f64,
) -> ScoreBreakdown {
    let user_vec: Vec<f64> = profile
        .normalized_names()
        .iter()
        .map(|name| {
            if user.holds(name) {
                HELD_SKILL_SIGNAL
            } else {
                0.0
            }
        })
        .collect();

    // No overlap leaves the user vector at zero, where cosine similarity is undefined.
    let similarity = if user_vec.iter().all(|value| *value == 0.0) {
        0.0
    } else {
        let career_vec: Vec<f64> = profile
            .skills
            .iter()
            .map(|skill| f64::from(skill.required) / REQUIRED_LEVEL_SCALE)
            .collect();
        cosine_similarity(&user_vec, &career_vec)
    };

    let experience_factor = (experience_years / profile.ideal_experience).min(1.0);
    let raw_score = MATCH_WEIGHTS.blend(similarity, experience_factor, education_factor);
    let match_score = bounded_score(raw_score);

    debug!(
        profile = profile.id,
        similarity, experience_factor, education_factor, match_score, "scored career profile"
    );

    ScoreBreakdown {
        profile_id: profile.id,
        similarity,
        experience_factor,
        education_factor,
        raw_score,
        match_score,
    }
}

fn skill_scores(profile: &CareerProfile, user: &UserSkills) -> Vec<SkillScore> {
    profile
        .skills
        .iter()
        .zip(profile.normalized_names())
        .map(|(skill, normalized)| SkillScore {
            name: skill.name.to_string(),
            level: if user.holds(normalized) {
                HELD_SKILL_DISPLAY_LEVEL
            } else {
                0
            },
            required: skill.required,
            category: skill.category,
        })
        .collect()
}
