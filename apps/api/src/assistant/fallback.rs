//! Deterministic stand-in records used when a structured generation task fails.
//! Both builders return a `ResumePatch` so untouched sections survive the merge.

use std::path::Path;

use crate::models::resume::{Education, Experience, PersonalInfo, Project, ResumePatch, Skills};

const NAME_PLACEHOLDER: &str = "John Doe";

/// Mock resume keyed off a few phrases in the user's free-text prompt.
pub fn resume_from_prompt(prompt: &str) -> ResumePatch {
    ResumePatch {
        personal_info: Some(PersonalInfo {
            full_name: "AI Generated User".to_string(),
            email: "user@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
        }),
        career_objective: Some(objective_for(prompt).to_string()),
        education: Some(vec![Education {
            degree: "Bachelor of Computer Science".to_string(),
            college: "Tech University".to_string(),
            year: "2021".to_string(),
            grade: None,
        }]),
        experience: Some(vec![experience_for(prompt)]),
        skills: Some(skills_for(prompt)),
        projects: Some(vec![Project {
            title: "E-commerce Web Application".to_string(),
            description: "Built a full-stack e-commerce platform with user authentication, \
                          product catalog, and payment integration."
                .to_string(),
            technologies: Some(strings(&["React", "Node.js", "MongoDB", "Stripe API"])),
        }]),
        ..Default::default()
    }
}

/// Mock resume for an upload whose text could not be structured.
pub fn resume_from_filename(filename: Option<&str>) -> ResumePatch {
    ResumePatch {
        personal_info: Some(PersonalInfo {
            full_name: filename
                .and_then(name_from_filename)
                .unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
            email: "john.doe@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
        }),
        career_objective: Some("Experienced software developer seeking new opportunities".to_string()),
        education: Some(vec![Education {
            degree: "Bachelor of Computer Science".to_string(),
            college: "State University".to_string(),
            year: "2020".to_string(),
            grade: None,
        }]),
        experience: Some(vec![Experience {
            company: "Tech Corp".to_string(),
            role: "Software Developer".to_string(),
            duration: "2020 - Present".to_string(),
            description: "Developed web applications using React and Node.js".to_string(),
        }]),
        skills: Some(Skills {
            technical: strings(&["JavaScript", "React", "Node.js", "Python"]),
            soft: strings(&["Communication", "Team Leadership"]),
        }),
        ..Default::default()
    }
}

fn objective_for(prompt: &str) -> &'static str {
    if prompt.contains("software engineer") {
        "Passionate software engineer with expertise in modern web technologies, seeking to \
         leverage technical skills and collaborative mindset to drive innovation in a senior \
         development role."
    } else if prompt.contains("graduate") {
        "Recent computer science graduate with strong foundation in programming and eagerness to \
         contribute to dynamic development teams while continuing to grow technical expertise."
    } else {
        "Dedicated professional seeking to apply skills and experience in a challenging role that \
         offers growth opportunities and meaningful impact."
    }
}

fn experience_for(prompt: &str) -> Experience {
    if prompt.contains("3 years") {
        Experience {
            company: "Tech Solutions Inc.".to_string(),
            role: "Software Engineer".to_string(),
            duration: "2021 - Present".to_string(),
            description: "Developed and maintained web applications using React and Node.js, \
                          collaborated with cross-functional teams, and improved system \
                          performance by 30%."
                .to_string(),
        }
    } else {
        Experience {
            company: "StartupXYZ".to_string(),
            role: "Software Development Intern".to_string(),
            duration: "Summer 2023".to_string(),
            description: "Contributed to front-end development projects, learned modern \
                          development practices, and supported senior developers in code reviews."
                .to_string(),
        }
    }
}

fn skills_for(prompt: &str) -> Skills {
    if prompt.contains("React") && prompt.contains("Node.js") {
        Skills {
            technical: strings(&["React", "Node.js", "JavaScript", "TypeScript", "MongoDB", "Git"]),
            soft: strings(&["Problem Solving", "Team Collaboration", "Communication", "Adaptability"]),
        }
    } else {
        Skills {
            technical: strings(&["JavaScript", "HTML", "CSS", "Python", "Git"]),
            soft: strings(&["Quick Learning", "Attention to Detail", "Communication"]),
        }
    }
}

/// "jane_smith-resume.pdf" -> "Jane Smith". `None` when no name tokens remain.
fn name_from_filename(filename: &str) -> Option<String> {
    let stem = Path::new(filename).file_stem()?.to_str()?;
    let words: Vec<String> = stem
        .split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter(|token| {
            let lowered = token.to_lowercase();
            lowered != "resume" && lowered != "cv"
        })
        .map(title_case)
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
