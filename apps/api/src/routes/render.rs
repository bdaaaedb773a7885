use axum::{response::Html, Json};
use serde::Deserialize;

use crate::models::resume::ResumeData;
use crate::render::{render_portfolio_html, render_resume_html};

#[derive(Debug, Deserialize)]
pub struct RenderResumeRequest {
    #[serde(default)]
    pub resume: ResumeData,
}

#[derive(Debug, Deserialize)]
pub struct RenderPortfolioRequest {
    #[serde(default)]
    pub resume: ResumeData,
    /// Copy previously returned by the portfolio assist endpoint.
    #[serde(default)]
    pub content: Option<String>,
}

/// POST /api/v1/render/resume
pub async fn handle_render_resume(Json(req): Json<RenderResumeRequest>) -> Html<String> {
    Html(render_resume_html(&req.resume))
}

/// POST /api/v1/render/portfolio
pub async fn handle_render_portfolio(Json(req): Json<RenderPortfolioRequest>) -> Html<String> {
    Html(render_portfolio_html(&req.resume, req.content.as_deref()))
}
