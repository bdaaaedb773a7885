//! Response normalizers: raw model text into the shape each task promises.
//!
//! Structured tasks go through an explicit untyped stage (`serde_json::Value`)
//! and are only then converted into the strict record, so a wrong shape is
//! rejected here instead of leaking into callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm_client::{strip_json_fences, GenerationError};
use crate::models::resume::{ResumePatch, Skills};

/// Words that mark a chat reply as carrying actionable advice.
const SUGGESTION_MARKERS: &[&str] = &["suggest", "recommend", "add", "improve"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

/// Chat answer plus an advisory flag; the flag is metadata, not parsed structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

/// Whole-resume rewrite returned by the comprehensive enhancement task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComprehensiveEnhancement {
    pub career_summary: String,
    pub fixed_skills: Vec<String>,
    pub project_descriptions: Vec<String>,
    pub experience_descriptions: Vec<String>,
    pub portfolio_intro: String,
    pub fixed_resume_body: String,
    pub shareable_slug: String,
}

// Both keys are required: a reply missing either one is malformed.
#[derive(Debug, Deserialize)]
struct RawSkillSuggestions {
    technical: Vec<String>,
    soft: Vec<String>,
}

/// Strips fences and parses the first JSON object in `raw`.
///
/// Falls back to the outermost `{...}` span when the model wrapped the object
/// in prose.
pub fn extract_json_object(raw: &str) -> Result<Value, GenerationError> {
    let text = strip_json_fences(raw);

    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(first_err) => {
            let span = text
                .find('{')
                .zip(text.rfind('}'))
                .filter(|(start, end)| start < end)
                .map(|(start, end)| &text[start..=end]);
            match span {
                Some(candidate) => serde_json::from_str::<Value>(candidate)
                    .map_err(|e| GenerationError::Malformed(format!("invalid JSON: {e}")))?,
                None => {
                    return Err(GenerationError::Malformed(format!(
                        "no JSON object in response: {first_err}"
                    )))
                }
            }
        }
    };

    if !value.is_object() {
        return Err(GenerationError::Malformed(format!(
            "expected a JSON object, got {}",
            json_type_name(&value)
        )));
    }
    Ok(value)
}

pub fn parse_skill_suggestions(raw: &str) -> Result<Skills, GenerationError> {
    let value = extract_json_object(raw)?;
    let parsed: RawSkillSuggestions = serde_json::from_value(value)
        .map_err(|e| GenerationError::Malformed(format!("unexpected skills shape: {e}")))?;
    Ok(Skills {
        technical: parsed.technical,
        soft: parsed.soft,
    })
}

/// Drops (case-insensitively) every suggestion already present in `existing`.
/// Response order is preserved.
pub fn filter_existing_skills(suggested: Skills, existing: &Skills) -> Skills {
    Skills {
        technical: retain_new(suggested.technical, &existing.technical),
        soft: retain_new(suggested.soft, &existing.soft),
    }
}

fn retain_new(candidates: Vec<String>, existing: &[String]) -> Vec<String> {
    let existing: Vec<String> = existing.iter().map(|s| s.to_lowercase()).collect();
    candidates
        .into_iter()
        .filter(|skill| !existing.contains(&skill.to_lowercase()))
        .collect()
}

/// Shared by free-text generation and PDF-text parsing.
///
/// Yields a patch: only the top-level keys the model actually returned are set,
/// so merging it never clears sections the reply left out.
pub fn parse_resume(raw: &str) -> Result<ResumePatch, GenerationError> {
    let value = extract_json_object(raw)?;
    serde_json::from_value(value)
        .map_err(|e| GenerationError::Malformed(format!("unexpected resume shape: {e}")))
}

pub fn parse_comprehensive(raw: &str) -> Result<ComprehensiveEnhancement, GenerationError> {
    let value = extract_json_object(raw)?;
    serde_json::from_value(value)
        .map_err(|e| GenerationError::Malformed(format!("unexpected enhancement shape: {e}")))
}

pub fn normalize_chat_reply(message: String) -> ChatReply {
    let lowered = message.to_lowercase();
    let has_suggestion = SUGGESTION_MARKERS.iter().any(|m| lowered.contains(m));
    let suggestion = has_suggestion.then(|| Suggestion {
        kind: "general".to_string(),
        content: message.clone(),
    });
    ChatReply {
        message,
        suggestion,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
