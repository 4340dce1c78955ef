//! Decoding of the analyze payload posted by the front-end.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::matching::{CareerMatcher, MatchResult};

pub const DEFAULT_EXPERIENCE: &str = "2-5";
pub const DEFAULT_EDUCATION: &str = "bachelors";

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("'skills' must be a list")]
    SkillsNotList,
}

/// Inputs for one analysis run with transport defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
}

impl Default for AnalyzeRequest {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            experience: DEFAULT_EXPERIENCE.to_string(),
            education: DEFAULT_EDUCATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeResponse {
    pub careers: Vec<MatchResult>,
}

impl AnalyzeRequest {
    /// Parses a raw request body.
    ///
    /// The body must be a JSON object. Missing fields take their defaults; a
    /// `skills` value that is not a list of strings is rejected. Token fields
    /// that are not strings are kept as their JSON text, so they miss the
    /// lookup tables and fall back like any other unknown token.
    pub fn from_slice(body: &[u8]) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| RequestError::InvalidJson)?;
        let Value::Object(mut fields) = value else {
            return Err(RequestError::InvalidJson);
        };

        let skills = match fields.remove("skills") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(skill) => Ok(skill),
                    _ => Err(RequestError::SkillsNotList),
                })
                .collect::<Result<_, _>>()?,
            Some(_) => return Err(RequestError::SkillsNotList),
        };

        Ok(Self {
            skills,
            experience: token_field(&mut fields, "experience", DEFAULT_EXPERIENCE),
            education: token_field(&mut fields, "education", DEFAULT_EDUCATION),
        })
    }

    pub fn analyze(&self, matcher: &CareerMatcher<'_>) -> AnalyzeResponse {
        AnalyzeResponse {
            careers: matcher.match_skills(&self.skills, &self.experience, &self.education),
        }
    }
}

fn token_field(fields: &mut Map<String, Value>, key: &str, default: &str) -> String {
    match fields.remove(key) {
        None => default.to_string(),
        Some(Value::String(token)) => token,
        Some(other) => other.to_string(),
    }
}
