//! Axum route handlers for the catalog and Render API.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::{LayoutTree, SectionKind};
use crate::models::profile::ProfileData;
use crate::render::export::sanitize_filename;
use crate::render::jobs::{fingerprint, ExportJobView, ExportStatus};
use crate::render::preview::PreviewDocument;
use crate::render::thumbnail::thumbnail;
use crate::state::AppState;
use crate::templates::{registry, Arrangement, TemplateId};
use crate::theme::{resolve, AccentId, ResolvedTheme};

const MAX_FILENAME_LEN: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub profile: ProfileData,
    pub template: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(flatten)]
    pub render: RenderRequest,
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub number: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub arrangement: Arrangement,
}

#[derive(Debug, Serialize)]
pub struct AccentSummary {
    pub id: &'static str,
    pub theme: ResolvedTheme,
}

#[derive(Debug, Deserialize)]
pub struct ThumbnailQuery {
    pub accent: Option<String>,
    pub scale: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct ExportAccepted {
    pub job_id: Uuid,
    pub status: ExportStatus,
    /// `None` when the neutral fallback theme was used.
    pub accent: Option<AccentId>,
    pub theme: ResolvedTheme,
    pub sections: Vec<SectionKind>,
    pub preview: PreviewDocument,
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateSummary>> {
    Json(
        registry::all()
            .map(|t| TemplateSummary {
                id: t.id(),
                number: t.id().number(),
                name: t.name(),
                description: t.description(),
                arrangement: t.arrangement(),
            })
            .collect(),
    )
}

/// GET /api/v1/templates/:id/thumbnail
///
/// Unlike render requests, an unknown id here is a 404: there is no
/// thumbnail to fall back to for a template the client invented.
pub async fn handle_thumbnail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ThumbnailQuery>,
) -> Result<Json<LayoutTree>, AppError> {
    let template = TemplateId::parse(&id)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))?;
    let accent = query
        .accent
        .as_deref()
        .unwrap_or(&state.config.default_accent);

    Ok(Json(thumbnail(template, accent, query.scale)))
}

/// GET /api/v1/accents
pub async fn handle_list_accents() -> Json<Vec<AccentSummary>> {
    let mut accents: Vec<AccentSummary> = AccentId::ALL
        .into_iter()
        .map(|accent| AccentSummary {
            id: accent.as_str(),
            theme: resolve(accent),
        })
        .collect();
    accents.push(AccentSummary {
        id: "neutral",
        theme: ResolvedTheme::NEUTRAL,
    });
    Json(accents)
}

// ────────────────────────────────────────────────────────────────────────────
// Render
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/render/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Json<PreviewDocument> {
    let (template, accent) = choices(&state, &request);
    let pass = state.renderer.prepare(&request.profile, template, accent);
    Json(state.renderer.preview(&pass))
}

/// POST /api/v1/render/export
///
/// Builds one render pass, returns its preview immediately and runs the
/// export of the same tree in the background.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<(StatusCode, Json<ExportAccepted>), AppError> {
    let raw_filename = request.filename.as_deref().unwrap_or_default();
    if raw_filename.chars().count() > MAX_FILENAME_LEN {
        return Err(AppError::Validation(format!(
            "filename must be at most {MAX_FILENAME_LEN} characters"
        )));
    }
    let filename = sanitize_filename(raw_filename);

    let render = &request.render;
    let (template, accent) = choices(&state, render);
    let pass = state.renderer.prepare(&render.profile, template, accent);
    let preview = state.renderer.preview(&pass);

    let job_id = state
        .exports
        .submit(
            fingerprint(&render.profile, &pass, &filename),
            pass.template,
            &filename,
        )
        .await?;
    info!(job_id = %job_id, template = pass.template.as_str(), "Export job queued");
    let accepted = ExportAccepted {
        job_id,
        status: ExportStatus::Pending,
        accent: pass.accent,
        theme: pass.theme,
        sections: pass.sections.clone(),
        preview,
    };

    let renderer = state.renderer.clone();
    let exports = state.exports.clone();
    tokio::spawn(async move {
        let outcome = match renderer.export(&pass, &filename).await {
            Ok(artifact) => {
                info!(job_id = %job_id, pages = artifact.page_count, "Export job succeeded");
                Ok(artifact)
            }
            Err(e) => {
                warn!(job_id = %job_id, "Export job failed: {e}");
                Err(e.to_string())
            }
        };
        exports.finish(job_id, outcome).await;
    });

    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

/// GET /api/v1/render/export/:job_id/status
pub async fn handle_export_status(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ExportJobView>, AppError> {
    state
        .exports
        .view(job_id)
        .await
        .map(Json)
        .ok_or_else(|| job_not_found(job_id))
}

/// GET /api/v1/render/export/:job_id
pub async fn handle_export_download(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let job = state
        .exports
        .get(job_id)
        .await
        .ok_or_else(|| job_not_found(job_id))?;

    match (job.status, job.artifact) {
        (ExportStatus::Succeeded, Some(artifact)) => {
            let disposition = format!("attachment; filename=\"{}\"", artifact.filename);
            Ok((
                [
                    (header::CONTENT_TYPE, artifact.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                artifact.bytes,
            )
                .into_response())
        }
        (ExportStatus::Pending, _) => Err(AppError::Conflict(format!(
            "Export job {job_id} is still pending"
        ))),
        (ExportStatus::Failed, _) | (ExportStatus::Succeeded, None) => {
            Err(AppError::UnprocessableEntity(job.error_message.unwrap_or_else(|| {
                format!("Export job {job_id} produced no document")
            })))
        }
    }
}

fn choices<'a>(state: &'a AppState, request: &'a RenderRequest) -> (&'a str, &'a str) {
    (
        request
            .template
            .as_deref()
            .unwrap_or(&state.config.default_template),
        request
            .accent
            .as_deref()
            .unwrap_or(&state.config.default_accent),
    )
}

fn job_not_found(job_id: Uuid) -> AppError {
    AppError::NotFound(format!("Export job {job_id} not found"))
}
