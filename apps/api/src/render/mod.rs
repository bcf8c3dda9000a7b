//! Dual-surface rendering.
//!
//! One `RenderPass` resolves the theme, looks the template up and builds the
//! layout tree exactly once. Preview and export both consume `pass.tree`,
//! so the two surfaces can never drift apart for a single request.

pub mod export;
pub mod handlers;
pub mod jobs;
pub mod preview;
pub mod thumbnail;

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::layout::visibility::visible_sections;
use crate::layout::{LayoutTree, SectionKind};
use crate::models::profile::ProfileData;
use crate::templates::{lookup_name, TemplateId};
use crate::theme::{resolve_name, AccentId, ResolvedTheme};

use self::export::{ExportArtifact, ExportBackend, ExportError};
use self::preview::{PreviewBackend, PreviewDocument};

/// One (data, template, accent) triple resolved into a single shared tree.
#[derive(Debug, Clone)]
pub struct RenderPass {
    pub template: TemplateId,
    /// `None` when the requested accent was unknown and the neutral theme was used.
    pub accent: Option<AccentId>,
    pub theme: ResolvedTheme,
    /// Sections the profile fills, in canonical order.
    pub sections: Vec<SectionKind>,
    pub tree: Arc<LayoutTree>,
}

pub struct DualSurfaceRenderer {
    preview: Arc<dyn PreviewBackend>,
    export: Arc<dyn ExportBackend>,
    export_timeout: Duration,
}

impl DualSurfaceRenderer {
    pub fn new(
        preview: Arc<dyn PreviewBackend>,
        export: Arc<dyn ExportBackend>,
        export_timeout: Duration,
    ) -> Self {
        Self {
            preview,
            export,
            export_timeout,
        }
    }

    /// Builds the tree for one request. Unknown names fall back rather than fail.
    pub fn prepare(&self, profile: &ProfileData, template: &str, accent: &str) -> RenderPass {
        let theme = resolve_name(accent);
        let layout = lookup_name(template);
        let tree = Arc::new(layout.render(profile, &theme));
        let sections = visible_sections(profile);

        debug!(
            template = layout.id().as_str(),
            accent = accent,
            nodes = tree.node_count(),
            sections = ?sections,
            "Render pass prepared"
        );

        RenderPass {
            template: layout.id(),
            accent: AccentId::parse(accent),
            theme,
            sections,
            tree,
        }
    }

    pub fn preview(&self, pass: &RenderPass) -> PreviewDocument {
        self.preview.present(Arc::clone(&pass.tree))
    }

    pub async fn export(
        &self,
        pass: &RenderPass,
        filename: &str,
    ) -> Result<ExportArtifact, ExportError> {
        let tree = Arc::clone(&pass.tree);
        match tokio::time::timeout(self.export_timeout, self.export.export(tree, filename)).await {
            Ok(result) => result,
            Err(_) => Err(ExportError::TimedOut(self.export_timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::layout::default_page_config;
    use crate::render::preview::ViewportPreview;
    use crate::theme::resolve;

    /// Records every tree handed to it, then delegates to the real backend.
    struct RecordingPreview {
        inner: ViewportPreview,
        seen: Mutex<Vec<Arc<LayoutTree>>>,
    }

    impl PreviewBackend for RecordingPreview {
        fn present(&self, tree: Arc<LayoutTree>) -> PreviewDocument {
            self.seen.lock().unwrap().push(Arc::clone(&tree));
            self.inner.present(tree)
        }
    }

    #[derive(Default)]
    struct RecordingExport {
        seen: Mutex<Vec<Arc<LayoutTree>>>,
    }

    #[async_trait]
    impl ExportBackend for RecordingExport {
        async fn export(
            &self,
            tree: Arc<LayoutTree>,
            filename: &str,
        ) -> Result<ExportArtifact, ExportError> {
            self.seen.lock().unwrap().push(tree);
            Ok(ExportArtifact {
                filename: filename.to_string(),
                content_type: "application/json",
                page_count: 1,
                bytes: Bytes::from_static(b"{}"),
            })
        }
    }

    struct StalledExport;

    #[async_trait]
    impl ExportBackend for StalledExport {
        async fn export(
            &self,
            _tree: Arc<LayoutTree>,
            _filename: &str,
        ) -> Result<ExportArtifact, ExportError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(ExportError::Worker("unreachable".to_string()))
        }
    }

    fn recording() -> (Arc<RecordingPreview>, Arc<RecordingExport>, DualSurfaceRenderer) {
        let preview = Arc::new(RecordingPreview {
            inner: ViewportPreview::new(816, default_page_config()),
            seen: Mutex::new(Vec::new()),
        });
        let export = Arc::new(RecordingExport::default());
        let renderer = DualSurfaceRenderer::new(
            preview.clone(),
            export.clone(),
            Duration::from_secs(5),
        );
        (preview, export, renderer)
    }

    #[tokio::test]
    async fn test_both_surfaces_receive_the_same_tree() {
        let (preview, export, renderer) = recording();
        let pass = renderer.prepare(&ProfileData::sample(), "modern", "teal");
        let doc = renderer.preview(&pass);
        assert!(renderer.export(&pass, "cv").await.is_ok());

        let previewed = preview.seen.lock().unwrap();
        let exported = export.seen.lock().unwrap();
        assert_eq!(previewed.len(), 1);
        assert_eq!(exported.len(), 1);
        assert!(Arc::ptr_eq(&previewed[0], &exported[0]));
        assert!(Arc::ptr_eq(&doc.tree, &exported[0]));
    }

    #[test]
    fn test_prepare_resolves_names_and_falls_back() {
        let (_, _, renderer) = recording();
        let pass = renderer.prepare(&ProfileData::sample(), "bold", "PINK");
        assert_eq!(pass.template, TemplateId::Bold);
        assert_eq!(pass.accent, Some(AccentId::Pink));
        assert_eq!(pass.theme, resolve(AccentId::Pink));
        assert_eq!(pass.sections, SectionKind::ALL.to_vec());
        let mut drawn = pass.tree.section_kinds();
        drawn.sort();
        assert_eq!(drawn, pass.sections);

        let pass = renderer.prepare(&ProfileData::sample(), "nope", "chartreuse");
        assert_eq!(pass.template, TemplateId::Classic);
        assert_eq!(pass.accent, None);
        assert_eq!(pass.theme, ResolvedTheme::NEUTRAL);
    }

    #[test]
    fn test_each_prepare_builds_a_fresh_equal_tree() {
        let (_, _, renderer) = recording();
        let profile = ProfileData::sample();
        let a = renderer.prepare(&profile, "elegant", "amber");
        let b = renderer.prepare(&profile, "elegant", "amber");
        assert!(!Arc::ptr_eq(&a.tree, &b.tree));
        assert_eq!(a.tree, b.tree);
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_past_deadline_times_out() {
        let renderer = DualSurfaceRenderer::new(
            Arc::new(ViewportPreview::new(816, default_page_config())),
            Arc::new(StalledExport),
            Duration::from_secs(2),
        );
        let pass = renderer.prepare(&ProfileData::sample(), "classic", "blue");
        let err = renderer.export(&pass, "cv").await.unwrap_err();
        assert!(matches!(err, ExportError::TimedOut(d) if d == Duration::from_secs(2)));
    }
}
