//! HTML rendering of a resume record, as a printable resume page and as a
//! public portfolio page. Every piece of user or model text is escaped.

use uuid::Uuid;

use crate::models::resume::{CustomSection, ResumeData};

const RESUME_STYLE: &str = r#"
body { font-family: 'Inter', Arial, sans-serif; color: #1f2937; max-width: 800px; margin: 0 auto; padding: 40px; line-height: 1.5; }
header { text-align: center; border-bottom: 2px solid #2563eb; padding-bottom: 16px; margin-bottom: 24px; }
h1 { margin: 0; font-size: 28px; }
h2 { color: #2563eb; font-size: 16px; text-transform: uppercase; letter-spacing: 0.05em; border-bottom: 1px solid #e5e7eb; padding-bottom: 4px; }
.contact { color: #4b5563; font-size: 14px; margin-top: 8px; }
.entry { margin-bottom: 12px; }
.entry-head { display: flex; justify-content: space-between; font-weight: 600; }
.muted { color: #6b7280; font-size: 14px; }
.tags span { display: inline-block; background: #eff6ff; color: #1d4ed8; border-radius: 4px; padding: 2px 8px; margin: 2px; font-size: 13px; }
@media print { body { padding: 0; } h2 { break-after: avoid; } .entry { break-inside: avoid; } }
"#;

const PORTFOLIO_STYLE: &str = r#"
body { font-family: 'Inter', Arial, sans-serif; margin: 0; color: #111827; line-height: 1.6; }
.hero { background: linear-gradient(135deg, #1e3a8a, #7c3aed); color: #fff; padding: 80px 24px; text-align: center; }
.hero h1 { font-size: 44px; margin: 0 0 8px; }
section { max-width: 900px; margin: 0 auto; padding: 40px 24px; }
h2 { font-size: 24px; border-left: 4px solid #7c3aed; padding-left: 12px; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 16px; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; }
.tags span { display: inline-block; background: #f3e8ff; color: #6d28d9; border-radius: 999px; padding: 2px 10px; margin: 2px; font-size: 13px; }
"#;

const FEATURED_PROJECT_LIMIT: usize = 3;

const DEFAULT_ABOUT: &str =
    "Passionate professional dedicated to delivering high-quality work and continuous growth.";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Placeholder share link: `<base>/portfolio/<6 hex chars>`.
pub fn portfolio_url(base_url: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}/portfolio/{}", base_url.trim_end_matches('/'), &id[..6])
}

fn display_name(resume: &ResumeData) -> &str {
    let name = resume.personal_info.full_name.trim();
    if name.is_empty() {
        "Your Name"
    } else {
        name
    }
}

fn contact_line(resume: &ResumeData) -> String {
    let info = &resume.personal_info;
    [&info.email, &info.phone, &info.location]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(escape_html)
        .collect::<Vec<_>>()
        .join(" • ")
}

fn section(title: &str, body: &str) -> String {
    format!("<section>\n<h2>{title}</h2>\n{body}\n</section>\n")
}

fn tags(items: &[String]) -> String {
    let spans: String = items
        .iter()
        .map(|t| format!("<span>{}</span>", escape_html(t)))
        .collect();
    format!("<div class=\"tags\">{spans}</div>")
}

fn paragraphs(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| format!("<p>{}</p>", escape_html(l)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn document(title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        style,
        body
    )
}

fn custom_section_html(custom: &CustomSection) -> Option<String> {
    if custom.title.trim().is_empty() && custom.content.trim().is_empty() {
        return None;
    }
    let title = if custom.title.trim().is_empty() {
        custom.section_type.as_str()
    } else {
        custom.title.as_str()
    };
    Some(section(&escape_html(title), &paragraphs(&custom.content)))
}

pub fn render_resume_html(resume: &ResumeData) -> String {
    let name = display_name(resume);
    let mut body = format!(
        "<header>\n<h1>{}</h1>\n<div class=\"contact\">{}</div>\n</header>\n",
        escape_html(name),
        contact_line(resume)
    );

    if !resume.career_objective.trim().is_empty() {
        body.push_str(&section("Career Objective", &paragraphs(&resume.career_objective)));
    }

    if !resume.education.is_empty() {
        let entries: String = resume
            .education
            .iter()
            .map(|e| {
                let grade = e
                    .grade
                    .as_deref()
                    .filter(|g| !g.trim().is_empty())
                    .map(|g| format!(" · {}", escape_html(g)))
                    .unwrap_or_default();
                format!(
                    "<div class=\"entry\"><div class=\"entry-head\"><span>{}</span><span>{}</span></div>\
                     <div class=\"muted\">{}{}</div></div>\n",
                    escape_html(&e.degree),
                    escape_html(&e.year),
                    escape_html(&e.college),
                    grade
                )
            })
            .collect();
        body.push_str(&section("Education", &entries));
    }

    if !resume.experience.is_empty() {
        let entries: String = resume
            .experience
            .iter()
            .map(|e| {
                format!(
                    "<div class=\"entry\"><div class=\"entry-head\"><span>{} · {}</span><span>{}</span></div>\
                     {}</div>\n",
                    escape_html(&e.role),
                    escape_html(&e.company),
                    escape_html(&e.duration),
                    paragraphs(&e.description)
                )
            })
            .collect();
        body.push_str(&section("Professional Experience", &entries));
    }

    if !resume.skills.is_empty() {
        let mut skills = String::new();
        if !resume.skills.technical.is_empty() {
            skills.push_str(&format!(
                "<div><strong>Technical:</strong> {}</div>\n",
                tags(&resume.skills.technical)
            ));
        }
        if !resume.skills.soft.is_empty() {
            skills.push_str(&format!(
                "<div><strong>Soft skills:</strong> {}</div>\n",
                tags(&resume.skills.soft)
            ));
        }
        body.push_str(&section("Skills", &skills));
    }

    if !resume.projects.is_empty() {
        let entries: String = resume
            .projects
            .iter()
            .map(|p| {
                let tech = p
                    .technologies
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .map(tags)
                    .unwrap_or_default();
                format!(
                    "<div class=\"entry\"><div class=\"entry-head\"><span>{}</span></div>{}{}</div>\n",
                    escape_html(&p.title),
                    paragraphs(&p.description),
                    tech
                )
            })
            .collect();
        body.push_str(&section("Projects", &entries));
    }

    if !resume.certifications.is_empty() {
        let entries: String = resume
            .certifications
            .iter()
            .map(|c| {
                format!(
                    "<div class=\"entry\"><div class=\"entry-head\"><span>{}</span><span>{}</span></div>\
                     <div class=\"muted\">{}</div></div>\n",
                    escape_html(&c.name),
                    escape_html(&c.date),
                    escape_html(&c.issuer)
                )
            })
            .collect();
        body.push_str(&section("Certifications", &entries));
    }

    if !resume.languages.is_empty() {
        body.push_str(&section("Languages", &tags(&resume.languages)));
    }

    for custom in &resume.custom_sections {
        if let Some(html) = custom_section_html(custom) {
            body.push_str(&html);
        }
    }

    document(&format!("{name} - Resume"), RESUME_STYLE, &body)
}

/// `generated_copy` is the model's portfolio text; it is shown escaped, never
/// injected as markup.
pub fn render_portfolio_html(resume: &ResumeData, generated_copy: Option<&str>) -> String {
    let name = display_name(resume);
    let headline = resume
        .experience
        .first()
        .map(|e| e.role.trim())
        .filter(|r| !r.is_empty())
        .unwrap_or("Professional");

    let mut body = format!(
        "<div class=\"hero\">\n<h1>{}</h1>\n<p>{}</p>\n<p>{}</p>\n</div>\n",
        escape_html(name),
        escape_html(headline),
        contact_line(resume)
    );

    let about = if resume.career_objective.trim().is_empty() {
        DEFAULT_ABOUT
    } else {
        resume.career_objective.as_str()
    };
    body.push_str(&section("About Me", &paragraphs(about)));

    let all_skills: Vec<String> = resume
        .skills
        .technical
        .iter()
        .chain(&resume.skills.soft)
        .cloned()
        .collect();
    if !all_skills.is_empty() {
        body.push_str(&section("Skills", &tags(&all_skills)));
    }

    if !resume.projects.is_empty() {
        let cards: String = resume
            .projects
            .iter()
            .take(FEATURED_PROJECT_LIMIT)
            .map(|p| {
                format!(
                    "<div class=\"card\"><h3>{}</h3>{}{}</div>\n",
                    escape_html(&p.title),
                    paragraphs(&p.description),
                    p.technologies.as_deref().map(tags).unwrap_or_default()
                )
            })
            .collect();
        body.push_str(&section(
            "Featured Projects",
            &format!("<div class=\"cards\">\n{cards}</div>"),
        ));
    }

    if !resume.experience.is_empty() {
        let entries: String = resume
            .experience
            .iter()
            .map(|e| {
                format!(
                    "<div class=\"card\"><h3>{} at {}</h3><div>{}</div>{}</div>\n",
                    escape_html(&e.role),
                    escape_html(&e.company),
                    escape_html(&e.duration),
                    paragraphs(&e.description)
                )
            })
            .collect();
        body.push_str(&section("Experience", &entries));
    }

    if let Some(copy) = generated_copy.filter(|c| !c.trim().is_empty()) {
        body.push_str(&section("Highlights", &paragraphs(copy)));
    }

    document(&format!("{name} - Portfolio"), PORTFOLIO_STYLE, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, PersonalInfo, Project, SectionType, Skills};

    fn sample() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Linus <T>".to_string(),
                email: "linus@example.com".to_string(),
                phone: String::new(),
                location: "Portland".to_string(),
            },
            experience: vec![Experience {
                company: "OSDL".to_string(),
                role: "Fellow".to_string(),
                duration: "2003 - 2007".to_string(),
                description: "Kernel & git".to_string(),
            }],
            skills: Skills {
                technical: vec!["C".to_string()],
                soft: vec![],
            },
            projects: (1..=5)
                .map(|i| Project {
                    title: format!("Project {i}"),
                    description: "Thing".to_string(),
                    technologies: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_resume_escapes_and_joins_contact() {
        let html = render_resume_html(&sample());
        assert!(html.contains("<h1>Linus &lt;T&gt;</h1>"));
        assert!(html.contains("linus@example.com • Portland"));
        assert!(html.contains("Kernel &amp; git"));
        assert!(html.contains("Professional Experience"));
    }

    #[test]
    fn test_resume_omits_empty_sections() {
        let html = render_resume_html(&ResumeData::default());
        assert!(html.contains("Your Name"));
        assert!(!html.contains("Career Objective"));
        assert!(!html.contains("Certifications"));
        assert!(!html.contains("Languages"));
    }

    #[test]
    fn test_resume_renders_custom_sections() {
        let mut resume = sample();
        resume.custom_sections.push(CustomSection {
            title: String::new(),
            content: "Best paper 2021".to_string(),
            section_type: SectionType::Awards,
        });
        let html = render_resume_html(&resume);
        assert!(html.contains("<h2>awards</h2>"));
        assert!(html.contains("<p>Best paper 2021</p>"));
    }

    #[test]
    fn test_portfolio_features_at_most_three_projects() {
        let html = render_portfolio_html(&sample(), Some("<script>x</script>"));
        assert!(html.contains("Project 3"));
        assert!(!html.contains("Project 4"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(DEFAULT_ABOUT));
    }

    #[test]
    fn test_portfolio_url_shape() {
        let url = portfolio_url("https://folio.example/");
        let id = url.strip_prefix("https://folio.example/portfolio/").unwrap();
        assert_eq!(id.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
