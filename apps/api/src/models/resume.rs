//! The canonical resume record shared by every form step, AI task and renderer.
//!
//! Every sequence defaults to empty so renderers never need null checks.
//! Entities have no identity beyond their position in the containing sequence.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient_string")]
    pub college: String,
    #[serde(deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
    /// Unstructured, e.g. "Jan 2022 - Present" or "2 years".
    #[serde(deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    #[default]
    Text,
    List,
    Achievements,
    Awards,
    Publications,
    Volunteer,
    References,
    Interests,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Text => "text",
            SectionType::List => "list",
            SectionType::Achievements => "achievements",
            SectionType::Awards => "awards",
            SectionType::Publications => "publications",
            SectionType::Volunteer => "volunteer",
            SectionType::References => "references",
            SectionType::Interests => "interests",
        }
    }
}

/// A user-defined section appended after the standard ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "lenient_string")]
    pub career_objective: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_sections: Vec<CustomSection>,
}

/// Partial update of a `ResumeData`. Present fields replace the old value wholly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub career_objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Skills>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_sections: Option<Vec<CustomSection>>,
}

impl From<ResumeData> for ResumePatch {
    fn from(data: ResumeData) -> Self {
        ResumePatch {
            personal_info: Some(data.personal_info),
            career_objective: Some(data.career_objective),
            education: Some(data.education),
            experience: Some(data.experience),
            skills: Some(data.skills),
            projects: Some(data.projects),
            certifications: Some(data.certifications),
            languages: Some(data.languages),
            custom_sections: Some(data.custom_sections),
        }
    }
}

impl ResumeData {
    /// Shallow top-level merge: produces a new record, never edits shared state.
    pub fn merge(&self, patch: ResumePatch) -> ResumeData {
        ResumeData {
            personal_info: patch
                .personal_info
                .unwrap_or_else(|| self.personal_info.clone()),
            career_objective: patch
                .career_objective
                .unwrap_or_else(|| self.career_objective.clone()),
            education: patch.education.unwrap_or_else(|| self.education.clone()),
            experience: patch.experience.unwrap_or_else(|| self.experience.clone()),
            skills: patch.skills.unwrap_or_else(|| self.skills.clone()),
            projects: patch.projects.unwrap_or_else(|| self.projects.clone()),
            certifications: patch
                .certifications
                .unwrap_or_else(|| self.certifications.clone()),
            languages: patch.languages.unwrap_or_else(|| self.languages.clone()),
            custom_sections: patch
                .custom_sections
                .unwrap_or_else(|| self.custom_sections.clone()),
        }
    }
}

impl Skills {
    /// Appends suggestions, dropping exact duplicates and keeping first-occurrence order.
    pub fn merge_suggestions(&self, suggestions: &Skills) -> Skills {
        Skills {
            technical: union(&self.technical, &suggestions.technical),
            soft: union(&self.soft, &suggestions.soft),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }
}

fn union(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(existing.len() + incoming.len());
    for skill in existing.iter().chain(incoming) {
        if !merged.contains(skill) {
            merged.push(skill.clone());
        }
    }
    merged
}

// Model output often encodes years, grades and phone numbers as bare numbers.

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(_) | Value::Object(_) => Err(serde::de::Error::custom(
            "expected a string, number, boolean or null",
        )),
        scalar => Ok(scalar_to_string(scalar).unwrap_or_default()),
    }
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(_) | Value::Object(_) => Err(serde::de::Error::custom(
            "expected a string, number, boolean or null",
        )),
        scalar => Ok(scalar_to_string(scalar)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+44 20 0000 0000".to_string(),
                location: "London".to_string(),
            },
            career_objective: "Analytical engine programmer".to_string(),
            education: vec![Education {
                degree: "Mathematics".to_string(),
                college: "Private tutoring".to_string(),
                year: "1833".to_string(),
                grade: None,
            }],
            experience: vec![Experience {
                company: "Babbage & Co".to_string(),
                role: "Programmer".to_string(),
                duration: "2 years".to_string(),
                description: "Wrote the first algorithm".to_string(),
            }],
            skills: Skills {
                technical: vec!["Mathematics".to_string()],
                soft: vec!["Writing".to_string()],
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let data: ResumeData = serde_json::from_str(r#"{"careerObjective": "x"}"#).unwrap();
        assert_eq!(data.career_objective, "x");
        assert!(data.education.is_empty());
        assert!(data.skills.technical.is_empty());
        assert!(data.languages.is_empty());
        assert!(data.custom_sections.is_empty());
    }

    #[test]
    fn test_numeric_scalars_are_accepted_as_strings() {
        let json = r#"{
            "personalInfo": {"fullName": "Bo", "phone": 5551234},
            "education": [{"degree": "BSc", "college": "MIT", "year": 2020, "grade": 3.8}],
            "experience": [{"company": "X", "role": "Y", "duration": null, "description": "Z"}]
        }"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.personal_info.phone, "5551234");
        assert_eq!(data.education[0].year, "2020");
        assert_eq!(data.education[0].grade.as_deref(), Some("3.8"));
        assert_eq!(data.experience[0].duration, "");
    }

    #[test]
    fn test_nested_object_in_scalar_field_is_rejected() {
        let json = r#"{"careerObjective": {"text": "nope"}}"#;
        assert!(serde_json::from_str::<ResumeData>(json).is_err());
    }

    #[test]
    fn test_serializes_camel_case_and_hides_empty_custom_sections() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("personalInfo").is_some());
        assert!(value["personalInfo"].get("fullName").is_some());
        assert!(value.get("careerObjective").is_some());
        assert!(value.get("customSections").is_none());
        assert!(value["education"][0].get("grade").is_none());
    }

    #[test]
    fn test_merge_replaces_only_present_fields() {
        let base = sample();
        let merged = base.merge(ResumePatch {
            career_objective: Some("New objective".to_string()),
            languages: Some(vec!["English".to_string()]),
            ..Default::default()
        });
        assert_eq!(merged.career_objective, "New objective");
        assert_eq!(merged.languages, vec!["English".to_string()]);
        assert_eq!(merged.experience, base.experience);
        assert_eq!(merged.personal_info, base.personal_info);
        // The source record is untouched.
        assert_eq!(base.career_objective, "Analytical engine programmer");
    }

    #[test]
    fn test_merge_replaces_nested_objects_wholly() {
        let base = sample();
        let merged = base.merge(ResumePatch {
            personal_info: Some(PersonalInfo {
                full_name: "Grace Hopper".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(merged.personal_info.full_name, "Grace Hopper");
        assert_eq!(merged.personal_info.email, "");
    }

    #[test]
    fn test_full_record_patch_overwrites_everything() {
        let merged = sample().merge(ResumeData::default().into());
        assert_eq!(merged, ResumeData::default());
    }

    #[test]
    fn test_patch_from_partial_json_keeps_absent_fields() {
        let mut base = sample();
        base.languages = vec!["Italian".to_string()];
        let patch: ResumePatch =
            serde_json::from_str(r#"{"personalInfo": {"fullName": "Rae"}, "careerObjective": 42}"#)
                .unwrap();
        assert!(patch.languages.is_none());
        assert_eq!(patch.career_objective.as_deref(), Some("42"));

        let merged = base.merge(patch);
        assert_eq!(merged.personal_info.full_name, "Rae");
        assert_eq!(merged.languages, vec!["Italian"]);
        assert_eq!(merged.experience, base.experience);
    }

    #[test]
    fn test_skill_merge_is_set_union_preserving_order() {
        let existing = Skills {
            technical: vec!["React".to_string(), "Go".to_string()],
            soft: vec![],
        };
        let suggestions = Skills {
            technical: vec!["Go".to_string(), "Vue".to_string(), "Vue".to_string()],
            soft: vec!["Leadership".to_string()],
        };
        let merged = existing.merge_suggestions(&suggestions);
        assert_eq!(merged.technical, vec!["React", "Go", "Vue"]);
        assert_eq!(merged.soft, vec!["Leadership"]);
    }

    #[test]
    fn test_custom_section_type_round_trips_as_snake_case() {
        let json = r#"{"customSections": [{"title": "Awards", "content": "Dean's List", "type": "achievements"}]}"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.custom_sections[0].section_type, SectionType::Achievements);
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["customSections"][0]["type"], "achievements");
    }
}
