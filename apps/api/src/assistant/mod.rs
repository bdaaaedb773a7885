//! AI content mediation: the stable, method-per-task surface the rest of the
//! service calls. Each method is builder → transport → normalizer; handlers
//! never build prompts or parse model output themselves.

pub mod builders;
pub mod fallback;
pub mod handlers;
pub mod normalize;
pub mod profile;
pub mod prompts;

use std::sync::Arc;

use chrono::Datelike;
use serde_json::Value;
use tracing::{debug, warn};

use crate::assistant::builders::PromptRequest;
use crate::assistant::normalize::{ChatReply, ComprehensiveEnhancement};
use crate::llm_client::{GenerationError, TextGenerator};
use crate::models::resume::{Experience, PersonalInfo, ResumeData, ResumePatch, Skills};

/// Constructed once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct ResumeAssistant {
    generator: Arc<dyn TextGenerator>,
}

impl ResumeAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    async fn run(&self, task: &str, request: PromptRequest) -> Result<String, GenerationError> {
        debug!("Assistant task '{}' dispatched", task);
        let text = self
            .generator
            .generate(&request.prompt, &request.options)
            .await?;
        debug!("Assistant task '{}' returned {} chars", task, text.len());
        Ok(text)
    }

    // ── Plain-text enhancement ──────────────────────────────────────────────

    pub async fn enhance_career_objective(
        &self,
        personal_info: &PersonalInfo,
        experience: &[Experience],
        skills: &Skills,
    ) -> Result<String, GenerationError> {
        let request = builders::build_objective_prompt(personal_info, experience, skills);
        self.run("career_objective", request).await
    }

    pub async fn enhance_job_description(
        &self,
        role: &str,
        company: &str,
        description: &str,
    ) -> Result<String, GenerationError> {
        let request = builders::build_job_description_prompt(role, company, description);
        self.run("job_description", request).await
    }

    pub async fn enhance_project_description(
        &self,
        title: &str,
        description: &str,
        technologies: Option<&[String]>,
    ) -> Result<String, GenerationError> {
        let request = builders::build_project_description_prompt(title, description, technologies);
        self.run("project_description", request).await
    }

    pub async fn enhance_custom_content(
        &self,
        content: &str,
        section_type: &str,
        title: &str,
    ) -> Result<String, GenerationError> {
        let request = builders::build_custom_content_prompt(content, section_type, title);
        self.run("custom_content", request).await
    }

    // ── Structured tasks ────────────────────────────────────────────────────

    /// Never fails: any transport or parse error yields empty lists.
    pub async fn suggest_skills(&self, experience: &[Experience], existing: &Skills) -> Skills {
        let year = chrono::Utc::now().year();
        let request = builders::build_skills_prompt(experience, existing, year);

        let suggested = match self.run("skills", request).await {
            Ok(raw) => normalize::parse_skill_suggestions(&raw),
            Err(e) => Err(e),
        };

        match suggested {
            Ok(suggested) => normalize::filter_existing_skills(suggested, existing),
            Err(e) => {
                warn!("Skill suggestion failed ({:?}): {}", e.kind(), e);
                Skills::default()
            }
        }
    }

    pub async fn generate_resume_from_prompt(
        &self,
        user_prompt: &str,
    ) -> Result<ResumePatch, GenerationError> {
        let request = builders::build_generate_resume_prompt(user_prompt);
        let raw = self.run("generate_resume", request).await?;
        normalize::parse_resume(&raw)
    }

    pub async fn parse_resume_from_pdf_text(
        &self,
        pdf_text: &str,
    ) -> Result<ResumePatch, GenerationError> {
        let request = builders::build_parse_pdf_prompt(pdf_text);
        let raw = self.run("parse_pdf", request).await?;
        normalize::parse_resume(&raw)
    }

    pub async fn comprehensive_enhancement(
        &self,
        user_input: &Value,
    ) -> Result<ComprehensiveEnhancement, GenerationError> {
        let request = builders::build_comprehensive_prompt(user_input);
        let raw = self.run("comprehensive", request).await?;
        normalize::parse_comprehensive(&raw)
    }

    // ── Free-form copy ──────────────────────────────────────────────────────

    pub async fn generate_portfolio_content(
        &self,
        resume: &ResumeData,
    ) -> Result<String, GenerationError> {
        let request = builders::build_portfolio_prompt(resume);
        self.run("portfolio", request).await
    }

    pub async fn chat(
        &self,
        user_message: &str,
        resume: Option<&ResumeData>,
    ) -> Result<ChatReply, GenerationError> {
        let request = builders::build_chat_prompt(user_message, resume);
        let text = self.run("chat", request).await?;
        Ok(normalize::normalize_chat_reply(text))
    }
}
