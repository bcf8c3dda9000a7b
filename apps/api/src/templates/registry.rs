//! Template registry — total lookup from identifier to implementation.
//!
//! Both render surfaces go through this lookup, so a template id always maps
//! to the same code path for preview and export.

use tracing::debug;

use super::bold::Bold;
use super::classic::Classic;
use super::compact::Compact;
use super::creative::Creative;
use super::elegant::Elegant;
use super::executive::Executive;
use super::minimal::Minimal;
use super::modern::Modern;
use super::professional::Professional;
use super::timeline::Timeline;
use super::{LayoutTemplate, TemplateId};

static CLASSIC: Classic = Classic;
static MODERN: Modern = Modern;
static EXECUTIVE: Executive = Executive;
static MINIMAL: Minimal = Minimal;
static CREATIVE: Creative = Creative;
static PROFESSIONAL: Professional = Professional;
static ELEGANT: Elegant = Elegant;
static COMPACT: Compact = Compact;
static TIMELINE: Timeline = Timeline;
static BOLD: Bold = Bold;

pub fn lookup(id: TemplateId) -> &'static dyn LayoutTemplate {
    match id {
        TemplateId::Classic => &CLASSIC,
        TemplateId::Modern => &MODERN,
        TemplateId::Executive => &EXECUTIVE,
        TemplateId::Minimal => &MINIMAL,
        TemplateId::Creative => &CREATIVE,
        TemplateId::Professional => &PROFESSIONAL,
        TemplateId::Elegant => &ELEGANT,
        TemplateId::Compact => &COMPACT,
        TemplateId::Timeline => &TIMELINE,
        TemplateId::Bold => &BOLD,
    }
}

/// Looks a template up by name or number, falling back to the default
/// template for anything unrecognized.
pub fn lookup_name(name: &str) -> &'static dyn LayoutTemplate {
    match TemplateId::parse(name) {
        Some(id) => lookup(id),
        None => {
            debug!(template = name, "Unknown template, using default");
            lookup(TemplateId::DEFAULT)
        }
    }
}

/// Every registered template in catalog order.
pub fn all() -> impl Iterator<Item = &'static dyn LayoutTemplate> {
    TemplateId::ALL.into_iter().map(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tree::{LayoutNode, NodeRole};
    use crate::layout::SectionKind;
    use crate::models::profile::{ExperienceEntry, ProfileData};
    use crate::theme::{resolve, resolve_name, AccentId};

    #[test]
    fn test_lookup_is_total_and_ids_match() {
        for id in TemplateId::ALL {
            assert_eq!(lookup(id).id(), id);
        }
        assert_eq!(all().count(), 10);
    }

    #[test]
    fn test_unknown_name_falls_back_to_default_template() {
        assert_eq!(lookup_name("does-not-exist").id(), TemplateId::Classic);
        assert_eq!(lookup_name("").id(), TemplateId::Classic);
        assert_eq!(lookup_name("executive").id(), TemplateId::Executive);
    }

    #[test]
    fn test_descriptions_are_present() {
        for template in all() {
            assert!(!template.description().is_empty(), "{}", template.name());
        }
    }

    #[test]
    fn test_every_template_shows_the_same_sections() {
        let profile = ProfileData::sample();
        let theme = resolve(AccentId::Teal);
        for template in all() {
            let mut kinds = template.render(&profile, &theme).section_kinds();
            kinds.sort();
            assert_eq!(kinds, SectionKind::ALL.to_vec(), "{}", template.name());
        }
    }

    #[test]
    fn test_partial_profile_shows_same_sections_in_every_template() {
        let profile = ProfileData {
            skills: Some("Rust, SQL".to_string()),
            experience: vec![
                ExperienceEntry::default(),
                ExperienceEntry {
                    title: "Engineer".to_string(),
                    description: Some("Line1\nLine2".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let theme = resolve_name("unknown");
        for template in all() {
            let tree = template.render(&profile, &theme);
            let mut kinds = tree.section_kinds();
            kinds.sort();
            assert_eq!(
                kinds,
                vec![SectionKind::Experience, SectionKind::Skills],
                "{}",
                template.name()
            );
            assert_eq!(tree.texts_with_role(NodeRole::RecordTitle), vec!["Engineer"]);
            assert_eq!(tree.texts_with_role(NodeRole::Bullet), vec!["Line1", "Line2"]);
            assert_eq!(tree.texts_with_role(NodeRole::Token), vec!["Rust", "SQL"]);
        }
    }

    #[test]
    fn test_blank_profile_renders_no_sections_and_no_header_text() {
        let profile = ProfileData::default();
        let theme = resolve(AccentId::Blue);
        for template in all() {
            let tree = template.render(&profile, &theme);
            assert!(tree.section_kinds().is_empty(), "{}", template.name());
            assert!(tree.texts_with_role(NodeRole::Name).is_empty());
            assert!(tree.texts_with_role(NodeRole::Contact).is_empty());
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let profile = ProfileData::sample();
        let theme = resolve(AccentId::Purple);
        for template in all() {
            assert_eq!(
                template.render(&profile, &theme),
                template.render(&profile, &theme),
                "{}",
                template.name()
            );
        }
    }

    #[test]
    fn test_header_content_is_shared_across_templates() {
        let profile = ProfileData::sample();
        let theme = resolve(AccentId::Green);
        for template in all() {
            let tree = template.render(&profile, &theme);
            assert_eq!(tree.texts_with_role(NodeRole::Name), vec!["Alex Morgan"]);
            assert_eq!(
                tree.texts_with_role(NodeRole::Profession),
                vec!["Senior Software Engineer"]
            );
            assert_eq!(tree.texts_with_role(NodeRole::Contact).len(), 5);
            assert_eq!(tree.template, template.id());
        }
    }

    #[test]
    fn test_contact_links_carry_their_url_in_every_template() {
        let profile = ProfileData::sample();
        let theme = resolve(AccentId::Indigo);
        for template in all() {
            let mut links = Vec::new();
            template.render(&profile, &theme).root.walk(&mut |node| {
                if let LayoutNode::Text(text) = node {
                    if text.role == NodeRole::Contact && text.href.is_some() {
                        links.push((text.content.clone(), text.href.clone()));
                    }
                }
            });
            assert_eq!(
                links,
                vec![
                    ("GitHub".to_string(), Some("https://github.com/alexmorgan".to_string())),
                    ("Portfolio".to_string(), Some("https://alexmorgan.dev".to_string())),
                ],
                "{}",
                template.name()
            );
        }
    }

    #[test]
    fn test_each_template_has_one_header_at_most() {
        fn headers(node: &LayoutNode) -> usize {
            let own = usize::from(node.role() == NodeRole::Header);
            match node {
                LayoutNode::Container(c) => own + c.children.iter().map(headers).sum::<usize>(),
                _ => own,
            }
        }
        let profile = ProfileData::sample();
        let theme = resolve(AccentId::Amber);
        for template in all() {
            let tree = template.render(&profile, &theme);
            assert!(headers(&tree.root) <= 1, "{} nests headers", template.name());
        }
    }

    #[test]
    fn test_accent_changes_colors_not_structure() {
        let profile = ProfileData::sample();
        for template in all() {
            let blue = template.render(&profile, &resolve(AccentId::Blue));
            let red = template.render(&profile, &resolve(AccentId::Red));
            assert_ne!(blue, red, "{} ignores the accent", template.name());
            assert_eq!(blue.node_count(), red.node_count());
            assert_eq!(blue.section_kinds(), red.section_kinds());
        }
    }
}
