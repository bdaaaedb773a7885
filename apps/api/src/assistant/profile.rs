//! Profile signals derived from a resume before the objective prompt is built.
//!
//! Both heuristics are deliberately shallow keyword/regex scans; their labels
//! are embedded into the prompt verbatim.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::{Experience, Skills};

static YEARS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*year").expect("years pattern is valid"));

/// Seniority tier, mapped from cumulative years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn from_years(total_years: f64) -> Self {
        if total_years < 1.0 {
            ExperienceLevel::Entry
        } else if total_years < 3.0 {
            ExperienceLevel::Junior
        } else if total_years < 6.0 {
            ExperienceLevel::Mid
        } else if total_years < 10.0 {
            ExperienceLevel::Senior
        } else {
            ExperienceLevel::Executive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry-level professional",
            ExperienceLevel::Junior => "Junior-level professional",
            ExperienceLevel::Mid => "Mid-level professional",
            ExperienceLevel::Senior => "Senior professional",
            ExperienceLevel::Executive => "Executive-level professional",
        }
    }
}

/// Years contributed by a single duration string.
///
/// "year" present: first integer before "year", or 1 when none is written.
/// Anything else ("Jan 2022 - Present", "6 months") counts as half a year.
pub fn duration_years(duration: &str) -> f64 {
    let duration = duration.to_lowercase();
    if duration.contains("year") {
        YEARS_PATTERN
            .captures(&duration)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(1.0)
    } else {
        0.5
    }
}

pub fn total_years(experience: &[Experience]) -> f64 {
    experience.iter().map(|e| duration_years(&e.duration)).sum()
}

pub fn determine_experience_level(experience: &[Experience]) -> ExperienceLevel {
    ExperienceLevel::from_years(total_years(experience))
}

/// Industry label from technical skills first, then role/description text.
pub fn detect_industry_focus(experience: &[Experience], skills: &Skills) -> &'static str {
    let tech = skills.technical.join(" ").to_lowercase();
    let exp_text = experience
        .iter()
        .map(|e| format!("{} {}", e.role, e.description))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if contains_any(&tech, &["react", "frontend", "javascript"]) {
        "Frontend Development"
    } else if contains_any(&tech, &["backend", "api", "server"]) {
        "Backend Development"
    } else if contains_any(&tech, &["data", "python", "sql"]) {
        "Data Science/Analytics"
    } else if contains_any(&exp_text, &["marketing", "campaign"]) {
        "Digital Marketing"
    } else {
        "Technology"
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
