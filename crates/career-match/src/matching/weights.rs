//! Fixed scoring constants. These are design choices, not fitted values.

/// Vector entry for a skill the user listed; no proficiency is collected.
pub const HELD_SKILL_SIGNAL: f64 = 0.6;
/// Level shown to the front-end for a held skill.
pub const HELD_SKILL_DISPLAY_LEVEL: u8 = 6;
/// Divisor mapping the 1-10 requirement scale onto 0.0-1.0.
pub const REQUIRED_LEVEL_SCALE: f64 = 10.0;

pub const SCORE_FLOOR: u8 = 40;
pub const SCORE_CEILING: u8 = 95;

pub const MATCH_WEIGHTS: Weights = Weights {
    similarity: 0.70,
    experience: 0.20,
    education: 0.10,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub similarity: f64,
    pub experience: f64,
    pub education: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.similarity + self.experience + self.education
    }

    pub fn blend(&self, similarity: f64, experience: f64, education: f64) -> f64 {
        similarity * self.similarity + experience * self.experience + education * self.education
    }
}

/// Scales a raw 0-1 score to a percentage, rounding half to even before clamping.
pub fn bounded_score(raw_score: f64) -> u8 {
    let percent = (raw_score * 100.0).round_ties_even();
    percent.clamp(f64::from(SCORE_FLOOR), f64::from(SCORE_CEILING)) as u8
}
