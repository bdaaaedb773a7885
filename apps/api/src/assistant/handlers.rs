//! HTTP handlers for the assistant endpoints.
//!
//! These play the part of the form steps: each one decides what the user sees
//! when generation fails (the unchanged text, deterministic mock data, or a
//! generic 502).

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::assistant::fallback;
use crate::assistant::normalize::{ChatReply, ComprehensiveEnhancement};
use crate::errors::AppError;
use crate::llm_client::GenerationError;
use crate::models::resume::{ResumeData, SectionType, Skills};
use crate::render::portfolio_url;
use crate::state::AppState;
use crate::upload::extract_upload_text;

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    #[serde(default)]
    pub resume: ResumeData,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub role: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectDescriptionRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSectionRequest {
    pub content: String,
    #[serde(default)]
    pub section_type: SectionType,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub resume: Option<ResumeData>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub resume: Option<ResumeData>,
}

#[derive(Debug, Deserialize)]
pub struct ComprehensiveRequest {
    #[serde(default)]
    pub input: Value,
}

/// `enhanced` is false when the original text came back because generation failed.
#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub text: String,
    pub enhanced: bool,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub suggestions: Skills,
    /// Existing skills with the suggestions merged in.
    pub skills: Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSource {
    Ai,
    Fallback,
}

#[derive(Debug, Serialize)]
pub struct GeneratedResumeResponse {
    pub resume: ResumeData,
    pub source: ResumeSource,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub content: String,
    pub url: String,
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("'{field}' must not be empty")));
    }
    Ok(())
}

/// Enhancement failures are never surfaced: the caller keeps the text it sent.
fn enhanced_or_original(
    task: &str,
    result: Result<String, GenerationError>,
    original: &str,
) -> EnhanceResponse {
    match result {
        Ok(text) => EnhanceResponse {
            text,
            enhanced: true,
        },
        Err(e) => {
            warn!("{task} enhancement failed ({:?}): {e}", e.kind());
            EnhanceResponse {
                text: original.to_string(),
                enhanced: false,
            }
        }
    }
}

/// POST /api/v1/assist/objective
pub async fn handle_enhance_objective(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Json<EnhanceResponse> {
    let resume = &req.resume;
    let result = state
        .assistant
        .enhance_career_objective(&resume.personal_info, &resume.experience, &resume.skills)
        .await;
    Json(enhanced_or_original(
        "Career objective",
        result,
        &resume.career_objective,
    ))
}

/// POST /api/v1/assist/job-description
pub async fn handle_enhance_job_description(
    State(state): State<AppState>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    require_text("description", &req.description)?;
    let result = state
        .assistant
        .enhance_job_description(&req.role, &req.company, &req.description)
        .await;
    Ok(Json(enhanced_or_original(
        "Job description",
        result,
        &req.description,
    )))
}

/// POST /api/v1/assist/project-description
pub async fn handle_enhance_project_description(
    State(state): State<AppState>,
    Json(req): Json<ProjectDescriptionRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    require_text("description", &req.description)?;
    let result = state
        .assistant
        .enhance_project_description(&req.title, &req.description, req.technologies.as_deref())
        .await;
    Ok(Json(enhanced_or_original(
        "Project description",
        result,
        &req.description,
    )))
}

/// POST /api/v1/assist/custom-section
pub async fn handle_enhance_custom_section(
    State(state): State<AppState>,
    Json(req): Json<CustomSectionRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    require_text("content", &req.content)?;
    let result = state
        .assistant
        .enhance_custom_content(&req.content, req.section_type.as_str(), &req.title)
        .await;
    Ok(Json(enhanced_or_original(
        "Custom section",
        result,
        &req.content,
    )))
}

/// POST /api/v1/assist/skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Json<SkillsResponse> {
    let existing = &req.resume.skills;
    let suggestions = state
        .assistant
        .suggest_skills(&req.resume.experience, existing)
        .await;
    let skills = existing.merge_suggestions(&suggestions);
    Json(SkillsResponse {
        suggestions,
        skills,
    })
}

/// POST /api/v1/assist/generate
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GeneratedResumeResponse>, AppError> {
    require_text("prompt", &req.prompt)?;
    let base = req.resume.unwrap_or_default();

    let (patch, source) = match state.assistant.generate_resume_from_prompt(&req.prompt).await {
        Ok(generated) => (generated, ResumeSource::Ai),
        Err(e) => {
            warn!("Resume generation failed ({:?}): {e}; using mock data", e.kind());
            (fallback::resume_from_prompt(&req.prompt), ResumeSource::Fallback)
        }
    };

    Ok(Json(GeneratedResumeResponse {
        resume: base.merge(patch),
        source,
    }))
}

/// POST /api/v1/assist/upload
///
/// Multipart fields: `file` (the PDF, required) and `resume` (JSON, optional).
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GeneratedResumeResponse>, AppError> {
    let mut file: Option<(Option<String>, Vec<u8>)> = None;
    let mut base = ResumeData::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("resume") => {
                let text = field.text().await?;
                base = serde_json::from_str(&text)
                    .map_err(|e| AppError::Validation(format!("invalid 'resume' field: {e}")))?;
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;
    info!(
        "Upload received: {} ({} bytes)",
        filename.as_deref().unwrap_or("<unnamed>"),
        bytes.len()
    );

    let text = extract_upload_text(bytes).await;
    let parsed = if text.trim().is_empty() {
        Err(GenerationError::Malformed(
            "no text could be recovered from the upload".to_string(),
        ))
    } else {
        state.assistant.parse_resume_from_pdf_text(&text).await
    };

    let (patch, source) = match parsed {
        Ok(parsed) => (parsed, ResumeSource::Ai),
        Err(e) => {
            warn!("Upload parsing failed ({:?}): {e}; using mock data", e.kind());
            (
                fallback::resume_from_filename(filename.as_deref()),
                ResumeSource::Fallback,
            )
        }
    };

    Ok(Json(GeneratedResumeResponse {
        resume: base.merge(patch),
        source,
    }))
}

/// POST /api/v1/assist/portfolio
pub async fn handle_generate_portfolio(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let content = state
        .assistant
        .generate_portfolio_content(&req.resume)
        .await?;
    Ok(Json(PortfolioResponse {
        content,
        url: portfolio_url(&state.config.portfolio_base_url),
    }))
}

/// POST /api/v1/assist/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    require_text("message", &req.message)?;
    let reply = state
        .assistant
        .chat(&req.message, req.resume.as_ref())
        .await?;
    Ok(Json(reply))
}

/// POST /api/v1/assist/comprehensive
pub async fn handle_comprehensive(
    State(state): State<AppState>,
    Json(req): Json<ComprehensiveRequest>,
) -> Result<Json<ComprehensiveEnhancement>, AppError> {
    if req.input.is_null() {
        return Err(AppError::Validation("'input' is required".to_string()));
    }
    let enhancement = state.assistant.comprehensive_enhancement(&req.input).await?;
    Ok(Json(enhancement))
}
