// Shared prompt fragments.
// Each task's full template lives in assistant::prompts; this file holds the
// pieces more than one task embeds verbatim.

/// Target schema requested by both free-text generation and PDF-text parsing,
/// so a single normalizer can serve both.
pub const RESUME_JSON_SCHEMA: &str = r#"{
  "personalInfo": {
    "fullName": "",
    "email": "",
    "phone": "",
    "location": ""
  },
  "careerObjective": "",
  "education": [{"degree": "", "college": "", "year": "", "grade": ""}],
  "experience": [{"company": "", "role": "", "duration": "", "description": ""}],
  "skills": {"technical": [], "soft": []},
  "projects": [{"title": "", "description": "", "technologies": []}],
  "certifications": [{"name": "", "issuer": "", "date": ""}],
  "languages": []
}"#;

/// Closing instruction for every structured task.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Respond with valid JSON only, no additional text or formatting.";
