//! Lookup tables translating the front-end's education and experience tokens.

pub const DEFAULT_EDUCATION_FACTOR: f64 = 0.75;
pub const DEFAULT_EXPERIENCE_YEARS: f64 = 3.5;

pub const EDUCATION_FACTORS: [(&str, f64); 6] = [
    ("phd", 1.0),
    ("masters", 0.9),
    ("bachelors", 0.8),
    ("associates", 0.75),
    ("bootcamp", 0.7),
    ("self-taught", 0.7),
];

/// Representative years for each experience range offered by the intake form.
pub const EXPERIENCE_MIDPOINTS: [(&str, f64); 4] = [
    ("0-2", 1.0),
    ("2-5", 3.5),
    ("5-10", 7.5),
    ("10+", 12.0),
];

/// Tokens are matched exactly; unknown ones fall back to the default factor.
pub fn education_factor(token: &str) -> f64 {
    lookup(&EDUCATION_FACTORS, token).unwrap_or(DEFAULT_EDUCATION_FACTOR)
}

pub fn experience_years(token: &str) -> f64 {
    lookup(&EXPERIENCE_MIDPOINTS, token).unwrap_or(DEFAULT_EXPERIENCE_YEARS)
}

fn lookup(table: &[(&str, f64)], token: &str) -> Option<f64> {
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_education_tokens_resolve() {
        assert_eq!(education_factor("phd"), 1.0);
        assert_eq!(education_factor("bachelors"), 0.8);
        assert_eq!(education_factor("self-taught"), 0.7);
    }

    #[test]
    fn unknown_tokens_use_defaults() {
        assert_eq!(education_factor("bogus"), DEFAULT_EDUCATION_FACTOR);
        assert_eq!(education_factor(""), DEFAULT_EDUCATION_FACTOR);
        assert_eq!(experience_years("bogus"), DEFAULT_EXPERIENCE_YEARS);
        assert_eq!(experience_years("2-5"), DEFAULT_EXPERIENCE_YEARS);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert_eq!(education_factor("PhD"), DEFAULT_EDUCATION_FACTOR);
        assert_eq!(experience_years("10+"), 12.0);
        assert_eq!(experience_years(" 10+"), DEFAULT_EXPERIENCE_YEARS);
    }

    #[test]
    fn factors_stay_within_unit_range() {
        assert!(EDUCATION_FACTORS
            .iter()
            .all(|(_, factor)| (0.0..=1.0).contains(factor)));
    }
}
