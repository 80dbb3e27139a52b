//! Axum route handlers for the Plan API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::generate;
use crate::models::bundle::GeneratedBundle;
use crate::models::profile::{Channel, InputProfile, PricePoint, ProfileForm, Voice};
use crate::render::compose;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The generated sections, the inputs they came from, and the markdown export.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub inputs: InputProfile,
    #[serde(flatten)]
    pub bundle: GeneratedBundle,
    pub markdown: String,
}

/// Starting form and the closed option lists the UI renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsResponse {
    pub form: ProfileForm,
    pub voice_options: Vec<&'static str>,
    pub price_point_options: Vec<&'static str>,
    pub channel_options: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/plans/defaults
pub async fn handle_defaults() -> Json<DefaultsResponse> {
    Json(DefaultsResponse {
        form: ProfileForm::from(&InputProfile::default()),
        voice_options: Voice::ALL.iter().map(|v| v.label()).collect(),
        price_point_options: PricePoint::ALL.iter().map(|p| p.label()).collect(),
        channel_options: Channel::ALL.iter().map(|c| c.label()).collect(),
    })
}

/// POST /api/v1/plans
///
/// Validates the form, runs the generation pipeline and returns every section
/// together with the rendered markdown.
pub async fn handle_generate(
    Json(form): Json<ProfileForm>,
) -> Result<Json<PlanResponse>, AppError> {
    let profile = InputProfile::try_from(form)?;
    info!(
        "Generating plan for niche {:?} on {} channels",
        profile.niche,
        profile.channels.len()
    );

    let bundle = generate(&profile);
    let markdown = compose(&profile, &bundle);

    Ok(Json(PlanResponse {
        inputs: profile,
        bundle,
        markdown,
    }))
}

/// POST /api/v1/plans/markdown
///
/// Same pipeline, returned as a markdown file download.
pub async fn handle_markdown(
    State(state): State<AppState>,
    Json(form): Json<ProfileForm>,
) -> Result<Response, AppError> {
    let profile = InputProfile::try_from(form)?;
    let markdown = compose(&profile, &generate(&profile));
    info!(
        "Exported {} bytes of markdown as {}",
        markdown.len(),
        state.config.markdown_filename
    );

    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.config.markdown_filename.replace('"', "")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        markdown,
    )
        .into_response())
}
