use career_match::analysis::{AnalyzeRequest, DEFAULT_EDUCATION, DEFAULT_EXPERIENCE};
use career_match::error::AppError;
use career_match::matching::{
    catalog, CareerMatcher, CareerProfile, MatchResult, ScoreBreakdown, SkillCategory,
};
use clap::Args;
use std::fmt::Write;

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Skill the user has; repeat for several skills
    #[arg(long = "skill", value_name = "SKILL")]
    pub(crate) skills: Vec<String>,
    /// Experience range token (0-2, 2-5, 5-10, 10+)
    #[arg(long, default_value = DEFAULT_EXPERIENCE)]
    pub(crate) experience: String,
    /// Education level token (phd, masters, bachelors, associates, bootcamp, self-taught)
    #[arg(long, default_value = DEFAULT_EDUCATION)]
    pub(crate) education: String,
    /// Show the similarity, experience, and education factors per profile
    #[arg(long)]
    pub(crate) explain: bool,
    /// Print the same JSON payload the HTTP endpoint returns; with --explain, the breakdowns
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Only print the profile with this identifier
    #[arg(long)]
    pub(crate) profile: Option<String>,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        skills,
        experience,
        education,
        explain,
        json,
    } = args;

    let request = AnalyzeRequest {
        skills,
        experience,
        education,
    };
    let matcher = CareerMatcher::standard();

    if json {
        println!("{}", render_json(&request, &matcher, explain));
        return Ok(());
    }

    let response = request.analyze(&matcher);
    print!("{}", render_matches(&request, &response.careers));

    if explain {
        let breakdowns = matcher.explain(&request.skills, &request.experience, &request.education);
        print!("{}", render_breakdowns(&breakdowns));
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = catalog();
    let profiles: Vec<&CareerProfile> = match args.profile {
        Some(id) => vec![catalog.get(&id)?],
        None => catalog.profiles().iter().collect(),
    };

    for profile in profiles {
        print!("{}", render_profile(profile));
    }
    Ok(())
}

fn render_json(request: &AnalyzeRequest, matcher: &CareerMatcher<'_>, explain: bool) -> String {
    let payload = if explain {
        let breakdowns = matcher.explain(&request.skills, &request.experience, &request.education);
        serde_json::to_string_pretty(&breakdowns)
    } else {
        serde_json::to_string_pretty(&request.analyze(matcher))
    };

    payload.unwrap_or_else(|err| format!("JSON payload unavailable: {err}"))
}

fn render_matches(request: &AnalyzeRequest, careers: &[MatchResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Career match results");
    let _ = writeln!(
        out,
        "Inputs: {} skill(s), experience {}, education {}",
        request.skills.len(),
        request.experience,
        request.education
    );

    for (rank, career) in careers.iter().enumerate() {
        let held: Vec<&str> = career
            .held_skills()
            .map(|skill| skill.name.as_str())
            .collect();
        let _ = writeln!(
            out,
            "\n{}. {} ({}%)",
            rank + 1,
            career.id,
            career.match_score
        );
        if held.is_empty() {
            let _ = writeln!(out, "   Matched skills: none");
        } else {
            let _ = writeln!(out, "   Matched skills: {}", held.join(", "));
        }

        let gaps: Vec<String> = career
            .missing_skills()
            .map(|skill| format!("{} (needs {})", skill.name, skill.required))
            .collect();
        if !gaps.is_empty() {
            let _ = writeln!(out, "   Skill gaps: {}", gaps.join(", "));
        }
    }
    out
}

fn render_breakdowns(breakdowns: &[ScoreBreakdown]) -> String {
    let mut out = String::from("\nScore breakdown (catalog order)\n");
    for breakdown in breakdowns {
        let _ = writeln!(
            out,
            "- {}: similarity {:.3} | experience {:.3} | education {:.2} | raw {:.4} -> {}",
            breakdown.profile_id,
            breakdown.similarity,
            breakdown.experience_factor,
            breakdown.education_factor,
            breakdown.raw_score,
            breakdown.match_score
        );
    }
    out
}

fn render_profile(profile: &CareerProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (ideal experience {} years)",
        profile.id, profile.ideal_experience
    );
    for category in SkillCategory::ordered() {
        for skill in profile.skills_in(category) {
            let _ = writeln!(
                out,
                "  - {} | level {} | {}",
                skill.name,
                skill.required,
                category.label()
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_rendering_lists_ranked_careers() {
        let request = AnalyzeRequest {
            skills: vec!["TypeScript".into(), "React".into(), "System Design".into()],
            experience: "5-10".into(),
            education: "bachelors".into(),
        };
        let response = request.analyze(&CareerMatcher::standard());

        let rendered = render_matches(&request, &response.careers);

        assert!(rendered.contains("1. senior-frontend (80%)"));
        assert!(rendered.contains("Matched skills: TypeScript, React, System Design"));
        assert!(rendered.contains("Team Leadership (needs 7)"));
        assert!(rendered.contains("Matched skills: none"));
    }

    #[test]
    fn breakdown_rendering_covers_every_profile() {
        let breakdowns = CareerMatcher::standard().explain(&["Python"], "2-5", "phd");
        let rendered = render_breakdowns(&breakdowns);

        assert_eq!(rendered.lines().filter(|line| line.starts_with("- ")).count(), 5);
        assert!(rendered.contains("- data-engineer: similarity 0.448"));
    }

    #[test]
    fn json_output_switches_to_breakdowns_when_explaining() {
        let request = AnalyzeRequest {
            skills: vec!["Python".into()],
            experience: "2-5".into(),
            education: "phd".into(),
        };
        let matcher = CareerMatcher::standard();

        let careers: serde_json::Value =
            serde_json::from_str(&render_json(&request, &matcher, false)).expect("careers json");
        assert_eq!(careers["careers"].as_array().map(Vec::len), Some(5));
        assert_eq!(careers["careers"][0]["id"], "data-engineer");

        let breakdowns: serde_json::Value =
            serde_json::from_str(&render_json(&request, &matcher, true)).expect("breakdown json");
        let rows = breakdowns.as_array().expect("breakdown list");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["profile_id"], "senior-frontend");
        let data_engineer = rows
            .iter()
            .find(|row| row["profile_id"] == "data-engineer")
            .expect("data-engineer breakdown");
        assert_eq!(data_engineer["match_score"], careers["careers"][0]["matchScore"]);
        assert!(data_engineer["similarity"].as_f64().expect("similarity") > 0.44);
    }

    #[test]
    fn profile_rendering_groups_skills_by_category() {
        let profile = catalog().get("senior-frontend").expect("profile exists");
        let rendered = render_profile(profile);

        let technical = rendered.find("TypeScript").expect("technical skill listed");
        let soft = rendered.find("Team Leadership").expect("soft skill listed");
        let domain = rendered.find("Accessibility (a11y)").expect("domain skill listed");
        assert!(technical < soft && soft < domain);
        assert!(rendered.starts_with("senior-frontend (ideal experience 5 years)"));
    }

    #[test]
    fn unknown_catalog_profile_is_an_error() {
        let err = run_catalog(CatalogArgs {
            profile: Some("astronaut".to_string()),
        })
        .expect_err("unknown profile rejected");
        assert!(matches!(err, AppError::Catalog(_)));
    }
}
