//! Prompt builders — pure functions from task input to prompt text plus
//! generation-option overrides. No I/O happens here.

use serde::Serialize;
use serde_json::Value;

use crate::assistant::profile::{determine_experience_level, detect_industry_focus};
use crate::assistant::prompts::{
    fill_template, CHAT_CONTEXT_HEADING, CHAT_PROMPT_TEMPLATE, COMPREHENSIVE_PROMPT_TEMPLATE,
    CUSTOM_CONTENT_PROMPT_TEMPLATE, GENERATE_RESUME_PROMPT_TEMPLATE,
    JOB_DESCRIPTION_PROMPT_TEMPLATE, OBJECTIVE_PROMPT_TEMPLATE, PARSE_PDF_PROMPT_TEMPLATE,
    PORTFOLIO_PROMPT_TEMPLATE, PROJECT_DESCRIPTION_PROMPT_TEMPLATE, SKILLS_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, RESUME_JSON_SCHEMA};
use crate::llm_client::GenerationOptions;
use crate::models::resume::{Experience, PersonalInfo, ResumeData, Skills};

/// Output cap for tasks that return a whole record or a page of copy.
pub const LONG_FORM_MAX_TOKENS: u32 = 2048;

/// Number of technical skills quoted in the objective prompt.
const PRIMARY_SKILL_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub prompt: String,
    pub options: GenerationOptions,
}

impl PromptRequest {
    fn new(prompt: String) -> Self {
        Self {
            prompt,
            options: GenerationOptions::default(),
        }
    }

    fn long_form(prompt: String) -> Self {
        Self {
            prompt,
            options: GenerationOptions::with_max_output_tokens(LONG_FORM_MAX_TOKENS),
        }
    }
}

pub fn build_objective_prompt(
    personal_info: &PersonalInfo,
    experience: &[Experience],
    skills: &Skills,
) -> PromptRequest {
    let experience_level = determine_experience_level(experience);
    let industry_focus = detect_industry_focus(experience, skills);

    let experience_lines = experience
        .iter()
        .map(|e| {
            format!(
                "• {} at {} ({})\n  Achievements: {}",
                e.role, e.company, e.duration, e.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let primary_skills = skills
        .technical
        .iter()
        .take(PRIMARY_SKILL_COUNT)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let soft_skills = skills.soft.join(", ");

    PromptRequest::new(fill_template(
        OBJECTIVE_PROMPT_TEMPLATE,
        &[
            ("full_name", personal_info.full_name.as_str()),
            ("experience_level", experience_level.label()),
            ("location", personal_info.location.as_str()),
            ("industry_focus", industry_focus),
            ("experience_lines", experience_lines.as_str()),
            ("primary_skills", primary_skills.as_str()),
            ("soft_skills", soft_skills.as_str()),
        ],
    ))
}

pub fn build_job_description_prompt(role: &str, company: &str, description: &str) -> PromptRequest {
    PromptRequest::new(fill_template(
        JOB_DESCRIPTION_PROMPT_TEMPLATE,
        &[("role", role), ("company", company), ("description", description)],
    ))
}

pub fn build_project_description_prompt(
    title: &str,
    description: &str,
    technologies: Option<&[String]>,
) -> PromptRequest {
    let technologies = match technologies {
        Some(list) if !list.is_empty() => list.join(", "),
        _ => "Not specified".to_string(),
    };
    PromptRequest::new(fill_template(
        PROJECT_DESCRIPTION_PROMPT_TEMPLATE,
        &[
            ("title", title),
            ("description", description),
            ("technologies", technologies.as_str()),
        ],
    ))
}

pub fn build_custom_content_prompt(content: &str, section_type: &str, title: &str) -> PromptRequest {
    PromptRequest::new(fill_template(
        CUSTOM_CONTENT_PROMPT_TEMPLATE,
        &[("section_type", section_type), ("title", title), ("content", content)],
    ))
}

/// `year` is injected so the builder stays deterministic.
pub fn build_skills_prompt(experience: &[Experience], existing: &Skills, year: i32) -> PromptRequest {
    let experience_summary = experience
        .iter()
        .map(|e| format!("{}: {}", e.role, e.description))
        .collect::<Vec<_>>()
        .join(" ");
    let year = year.to_string();

    PromptRequest::new(fill_template(
        SKILLS_PROMPT_TEMPLATE,
        &[
            ("experience_summary", experience_summary.as_str()),
            ("technical_skills", existing.technical.join(", ").as_str()),
            ("soft_skills", existing.soft.join(", ").as_str()),
            ("year", year.as_str()),
        ],
    ))
}

pub fn build_generate_resume_prompt(user_prompt: &str) -> PromptRequest {
    PromptRequest::long_form(fill_template(
        GENERATE_RESUME_PROMPT_TEMPLATE,
        &[
            ("user_prompt", user_prompt),
            ("schema", RESUME_JSON_SCHEMA),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    ))
}

pub fn build_parse_pdf_prompt(pdf_text: &str) -> PromptRequest {
    PromptRequest::long_form(fill_template(
        PARSE_PDF_PROMPT_TEMPLATE,
        &[
            ("pdf_text", pdf_text),
            ("schema", RESUME_JSON_SCHEMA),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    ))
}

pub fn build_portfolio_prompt(resume: &ResumeData) -> PromptRequest {
    PromptRequest::long_form(fill_template(
        PORTFOLIO_PROMPT_TEMPLATE,
        &[("resume_json", pretty_json(resume).as_str())],
    ))
}

pub fn build_chat_prompt(user_message: &str, resume: Option<&ResumeData>) -> PromptRequest {
    let context = resume
        .map(|r| format!("{CHAT_CONTEXT_HEADING}{}", pretty_json(r)))
        .unwrap_or_default();
    PromptRequest::new(fill_template(
        CHAT_PROMPT_TEMPLATE,
        &[("user_message", user_message), ("context", context.as_str())],
    ))
}

pub fn build_comprehensive_prompt(user_input: &Value) -> PromptRequest {
    PromptRequest::long_form(fill_template(
        COMPREHENSIVE_PROMPT_TEMPLATE,
        &[
            ("user_input", pretty_json(user_input).as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    ))
}

// Map keys in these records are always strings, so serialization cannot fail.
fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
