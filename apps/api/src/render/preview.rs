//! Interactive preview surface — presents a tree in a scrollable,
//! non-paginated viewport.

use std::sync::Arc;

use serde::Serialize;

use crate::layout::paginate::measure;
use crate::layout::{LayoutTree, PageConfig};
use crate::templates::TemplateId;

/// What the preview client receives: the shared tree plus viewport geometry.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewDocument {
    pub template: TemplateId,
    pub viewport_width_px: u32,
    /// Pixels per point, mapping the page width onto the viewport.
    pub scale: f32,
    pub estimated_height_px: f32,
    pub tree: Arc<LayoutTree>,
}

pub trait PreviewBackend: Send + Sync {
    fn present(&self, tree: Arc<LayoutTree>) -> PreviewDocument;
}

/// Default preview backend: one continuous sheet as wide as the viewport.
pub struct ViewportPreview {
    pub viewport_width_px: u32,
    pub page: PageConfig,
}

impl ViewportPreview {
    pub fn new(viewport_width_px: u32, page: PageConfig) -> Self {
        Self {
            viewport_width_px,
            page,
        }
    }
}

impl PreviewBackend for ViewportPreview {
    fn present(&self, tree: Arc<LayoutTree>) -> PreviewDocument {
        let scale = self.viewport_width_px as f32 / self.page.width_pt;
        let content = measure(&tree.root, self.page.content_width(), &self.page);
        PreviewDocument {
            template: tree.template,
            viewport_width_px: self.viewport_width_px,
            scale,
            estimated_height_px: (content + 2.0 * self.page.margin_pt) * scale,
            tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_page_config;
    use crate::models::profile::ProfileData;
    use crate::templates::lookup;
    use crate::theme::{resolve, AccentId};

    #[test]
    fn test_preview_keeps_the_same_tree() {
        let tree = Arc::new(
            lookup(TemplateId::Modern).render(&ProfileData::sample(), &resolve(AccentId::Blue)),
        );
        let preview = ViewportPreview::new(816, default_page_config());
        let doc = preview.present(Arc::clone(&tree));
        assert!(Arc::ptr_eq(&doc.tree, &tree));
        assert_eq!(doc.template, TemplateId::Modern);
    }

    #[test]
    fn test_scale_maps_page_width_to_viewport() {
        let page = default_page_config();
        let tree = Arc::new(
            lookup(TemplateId::Classic).render(&ProfileData::sample(), &resolve(AccentId::Red)),
        );
        let doc = ViewportPreview::new(816, page).present(tree);
        assert!((doc.scale * page.width_pt - 816.0).abs() < 0.01);
        assert!(doc.estimated_height_px > 0.0);
    }
}
