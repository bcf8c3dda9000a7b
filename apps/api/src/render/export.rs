//! Paginated export surface.
//!
//! `ExportBackend` is the seam for a real rasterizer. The bundled
//! `PageFlowExporter` paginates the tree onto A4 pages and emits the paged
//! layout as JSON, which a downstream rasterizer turns into print output.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::layout::paginate::{PaginateError, Paginator};
use crate::layout::{LayoutNode, LayoutTree, PageConfig};
use crate::templates::TemplateId;

pub const DEFAULT_FILENAME: &str = "resume";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Document needs more than {limit} pages")]
    PageLimitExceeded { limit: usize },

    #[error("Export timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Export worker failed: {0}")]
    Worker(String),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<PaginateError> for ExportError {
    fn from(e: PaginateError) -> Self {
        match e {
            PaginateError::TooManyPages { limit } => ExportError::PageLimitExceeded { limit },
            PaginateError::Cancelled => ExportError::Worker(e.to_string()),
        }
    }
}

/// A finished export, ready for download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub page_count: usize,
    pub bytes: Bytes,
}

#[async_trait]
pub trait ExportBackend: Send + Sync {
    async fn export(
        &self,
        tree: Arc<LayoutTree>,
        filename: &str,
    ) -> Result<ExportArtifact, ExportError>;
}

/// Wire format of the paged document.
#[derive(Debug, Serialize)]
struct PagedDocument<'a> {
    filename: &'a str,
    template: TemplateId,
    page: PageConfig,
    page_count: usize,
    pages: &'a [LayoutNode],
}

pub struct PageFlowExporter {
    page: PageConfig,
    max_pages: usize,
}

impl PageFlowExporter {
    pub fn new(page: PageConfig, max_pages: usize) -> Self {
        Self { page, max_pages }
    }
}

#[async_trait]
impl ExportBackend for PageFlowExporter {
    async fn export(
        &self,
        tree: Arc<LayoutTree>,
        filename: &str,
    ) -> Result<ExportArtifact, ExportError> {
        let page = self.page;
        let max_pages = self.max_pages;
        let filename = sanitize_filename(filename);
        let cancel = Arc::new(AtomicBool::new(false));
        let _guard = CancelOnDrop(Arc::clone(&cancel));

        // Pagination is CPU-bound; keep it off the async workers.
        tokio::task::spawn_blocking(move || {
            build_document(&tree, &page, max_pages, &cancel, filename)
        })
        .await
        .map_err(|e| ExportError::Worker(e.to_string()))?
    }
}

/// Raises the flag when the export future is dropped (e.g. on timeout), so
/// the blocking pagination stops instead of running to completion.
struct CancelOnDrop(Arc<AtomicBool>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

fn build_document(
    tree: &LayoutTree,
    page: &PageConfig,
    max_pages: usize,
    cancel: &AtomicBool,
    filename: String,
) -> Result<ExportArtifact, ExportError> {
    let pages = Paginator::new(page)
        .max_pages(max_pages)
        .cancel_on(cancel)
        .run(tree)?;

    let document = PagedDocument {
        filename: &filename,
        template: tree.template,
        page: *page,
        page_count: pages.len(),
        pages: &pages,
    };
    let bytes = serde_json::to_vec(&document)?;
    debug!(
        filename = %filename,
        pages = pages.len(),
        bytes = bytes.len(),
        "Paged document built"
    );

    Ok(ExportArtifact {
        page_count: pages.len(),
        filename,
        content_type: "application/json",
        bytes: Bytes::from(bytes),
    })
}

/// Keeps only the final path component, drops quotes and control characters.
/// Blank names become [`DEFAULT_FILENAME`].
pub fn sanitize_filename(raw: &str) -> String {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = last
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.');
    if cleaned.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        cleaned.to_string()
    }
}
