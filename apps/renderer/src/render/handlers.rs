use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::report::SectionReport;
use crate::render::{render_document, PageHeight, RenderedDocument};
use crate::state::AppState;

const LATEX_CONTENT_TYPE: &str = "application/x-latex; charset=utf-8";

/// Request body for both render endpoints.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub resume: Value,
    /// Page height in inches. Omit for the default letter height.
    #[serde(default)]
    pub page_height: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub render_id: Uuid,
    pub latex: String,
    pub sections: Vec<SectionReport>,
    pub generated_at: DateTime<Utc>,
}

/// Validates the page height against the configured ceiling.
fn page_height(state: &AppState, requested: Option<f64>) -> Result<Option<PageHeight>, AppError> {
    let Some(inches) = requested else {
        return Ok(None);
    };
    if inches > state.config.max_page_height_in {
        return Err(AppError::Validation(format!(
            "page_height {inches} exceeds the maximum of {} inches",
            state.config.max_page_height_in
        )));
    }
    PageHeight::new(inches)
        .map(Some)
        .map_err(|e| AppError::Validation(e.to_string()))
}

fn render(state: &AppState, req: &RenderRequest) -> Result<RenderedDocument, AppError> {
    let height = page_height(state, req.page_height)?;
    let doc = render_document(&req.resume, height)?;
    Ok(doc)
}

/// POST /api/v1/render
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let render_id = Uuid::new_v4();
    let doc = render(&state, &req)?;
    info!(%render_id, bytes = doc.latex.len(), "Rendered classic resume");

    Ok(Json(RenderResponse {
        render_id,
        latex: doc.latex,
        sections: doc.sections,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/render/tex
/// Same input; returns the document itself as a `.tex` body.
pub async fn handle_render_tex(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let doc = render(&state, &req)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, LATEX_CONTENT_TYPE)],
        doc.latex,
    ))
}
