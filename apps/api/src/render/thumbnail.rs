use crate::layout::LayoutTree;
use crate::models::profile::ProfileData;
use crate::templates::{lookup, TemplateId};
use crate::theme::resolve_name;

pub const DEFAULT_SCALE: f32 = 0.25;
pub const MIN_SCALE: f32 = 0.05;
pub const MAX_SCALE: f32 = 1.0;

/// Miniature of a template: the real template rendered over the sample
/// profile, then scaled down.
pub fn thumbnail(template: TemplateId, accent: &str, scale: Option<f32>) -> LayoutTree {
    let theme = resolve_name(accent);
    lookup(template)
        .render(&ProfileData::sample(), &theme)
        .scaled(clamp_scale(scale))
}

fn clamp_scale(scale: Option<f32>) -> f32 {
    match scale {
        Some(s) if s.is_finite() => s.clamp(MIN_SCALE, MAX_SCALE),
        _ => DEFAULT_SCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tree::NodeRole;
    use crate::theme::{resolve, AccentId};

    #[test]
    fn test_scale_is_clamped() {
        assert_eq!(clamp_scale(None), DEFAULT_SCALE);
        assert_eq!(clamp_scale(Some(f32::NAN)), DEFAULT_SCALE);
        assert_eq!(clamp_scale(Some(0.0)), MIN_SCALE);
        assert_eq!(clamp_scale(Some(4.0)), MAX_SCALE);
        assert_eq!(clamp_scale(Some(0.5)), 0.5);
    }

    #[test]
    fn test_thumbnail_is_the_real_template_scaled() {
        for id in TemplateId::ALL {
            let full = lookup(id).render(&ProfileData::sample(), &resolve(AccentId::Orange));
            let thumb = thumbnail(id, "orange", Some(1.0));
            assert_eq!(thumb, full);

            let small = thumbnail(id, "orange", None);
            assert_eq!(small.node_count(), full.node_count());
            assert_eq!(small.section_kinds(), full.section_kinds());
            assert_eq!(
                small.texts_with_role(NodeRole::Name),
                full.texts_with_role(NodeRole::Name)
            );
        }
    }
}
