use std::sync::Arc;

use crate::config::Config;
use crate::layout::default_page_config;
use crate::render::export::PageFlowExporter;
use crate::render::jobs::ExportJobs;
use crate::render::preview::ViewportPreview;
use crate::render::DualSurfaceRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Viewport preview + A4 page-flow export by default. Swap the backends
    /// here to plug in a real rasterizer.
    pub renderer: Arc<DualSurfaceRenderer>,
    pub exports: ExportJobs,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let page = default_page_config();
        let renderer = DualSurfaceRenderer::new(
            Arc::new(ViewportPreview::new(config.preview_viewport_px, page)),
            Arc::new(PageFlowExporter::new(page, config.export_max_pages)),
            config.export_timeout,
        );
        Self {
            exports: ExportJobs::new(config.export_job_ttl),
            renderer: Arc::new(renderer),
            config,
        }
    }
}
