//! Header building blocks shared by all templates: name, profession, contact
//! line and avatar placeholder. Each returns `None` when its source fields are
//! blank, so templates never emit empty header elements.

use crate::layout::tree::{BoxStyle, Container, ImageNode, LayoutNode, NodeRole, TextStyle};
use crate::layout::typography::{scale_for_display_name, NameCurve};
use crate::layout::visibility::non_blank;
use crate::models::profile::PersonalInfo;
use crate::theme::Color;

/// The person's name, sized by the name scaler on the given curve. `style`
/// supplies everything but the size.
pub fn name(personal: &PersonalInfo, curve: NameCurve, style: TextStyle) -> Option<LayoutNode> {
    let name = personal.name.as_deref().and_then(non_blank)?;
    let size = scale_for_display_name(Some(name), curve);
    Some(LayoutNode::text(
        NodeRole::Name,
        name,
        TextStyle {
            size_pt: size.points(),
            ..style
        },
    ))
}

pub fn profession(personal: &PersonalInfo, style: TextStyle) -> Option<LayoutNode> {
    let profession = personal.profession.as_deref().and_then(non_blank)?;
    Some(LayoutNode::text(NodeRole::Profession, profession, style))
}

/// One contact entry. Links keep their target next to the shown text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactItem<'a> {
    pub text: &'a str,
    pub href: Option<&'a str>,
}

impl ContactItem<'_> {
    fn node(&self, style: TextStyle) -> LayoutNode {
        LayoutNode::link(NodeRole::Contact, self.text, self.href, style)
    }
}

/// Email, phone, location, then links, blanks dropped.
pub fn contact_items(personal: &PersonalInfo) -> Vec<ContactItem<'_>> {
    let plain = [&personal.email, &personal.phone, &personal.location]
        .into_iter()
        .filter_map(|field| field.as_deref().and_then(non_blank))
        .map(|text| ContactItem { text, href: None });
    let links = personal.links.iter().filter_map(|link| {
        Some(ContactItem {
            text: link.display_text()?,
            href: link.href(),
        })
    });
    plain.chain(links).collect()
}

/// Contact items on one wrapping line, joined by `separator`.
pub fn contact_line(
    personal: &PersonalInfo,
    style: TextStyle,
    separator: &'static str,
    box_style: BoxStyle,
) -> Option<LayoutNode> {
    let items = contact_items(personal);
    if items.is_empty() {
        return None;
    }
    let mut row = Container::row(NodeRole::Contact).style(box_style.wrapping());
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            row = row.child(LayoutNode::text(NodeRole::Decoration, separator, style));
        }
        row = row.child(item.node(style));
    }
    Some(row.into())
}

/// Contact items one per line, for sidebars.
pub fn contact_stack(personal: &PersonalInfo, style: TextStyle) -> Option<LayoutNode> {
    let items = contact_items(personal);
    if items.is_empty() {
        return None;
    }
    Some(
        Container::column(NodeRole::Contact)
            .style(BoxStyle::default().gap(3.0))
            .children(items.iter().map(|item| item.node(style)))
            .into(),
    )
}

/// Up to two initials: first letter of the first and last words of the name.
pub fn initials(personal: &PersonalInfo) -> Option<String> {
    let name = personal.name.as_deref().and_then(non_blank)?;
    let words: Vec<&str> = name.split_whitespace().collect();
    let first = words.first()?.chars().next()?;
    let mut out: String = first.to_uppercase().collect();
    if words.len() > 1 {
        if let Some(last) = words.last().and_then(|w| w.chars().next()) {
            out.extend(last.to_uppercase());
        }
    }
    Some(out)
}

pub fn avatar(
    personal: &PersonalInfo,
    size_pt: f32,
    background: Color,
    foreground: Color,
) -> Option<LayoutNode> {
    Some(LayoutNode::Image(ImageNode {
        role: NodeRole::Avatar,
        initials: initials(personal)?,
        size_pt,
        background,
        foreground,
        round: true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::typography::{FontFamily, FontSize};
    use crate::models::profile::Link;
    use crate::theme::neutral;

    fn style() -> TextStyle {
        TextStyle::new(FontFamily::Sans, FontSize::Base, neutral::TEXT)
    }

    fn person(name: &str) -> PersonalInfo {
        PersonalInfo {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_uses_scaled_size() {
        let long = person("Maximilian Alexander von Hohenberg-Str");
        let LayoutNode::Text(node) = name(&long, NameCurve::Standard, style()).unwrap() else {
            panic!("name should be text");
        };
        assert_eq!(node.style.size_pt, FontSize::Xl.points());
        assert_eq!(node.style.color, neutral::TEXT);
    }

    #[test]
    fn test_blank_name_and_profession_emit_nothing() {
        let blank = person("   ");
        assert!(name(&blank, NameCurve::Large, style()).is_none());
        assert!(profession(&blank, style()).is_none());
        assert!(avatar(&blank, 48.0, Color::WHITE, neutral::TEXT).is_none());
    }

    #[test]
    fn test_contact_items_order_and_blank_filtering() {
        let personal = PersonalInfo {
            email: Some("a@b.c".to_string()),
            phone: Some(" ".to_string()),
            location: Some("Porto".to_string()),
            links: vec![
                Link {
                    label: "GitHub".to_string(),
                    url: "https://github.com/a".to_string(),
                },
                Link::default(),
            ],
            ..Default::default()
        };
        let texts: Vec<&str> = contact_items(&personal).iter().map(|i| i.text).collect();
        assert_eq!(texts, vec!["a@b.c", "Porto", "GitHub"]);
    }

    #[test]
    fn test_labelled_link_keeps_its_url() {
        let personal = PersonalInfo {
            email: Some("a@b.c".to_string()),
            links: vec![Link {
                label: "GitHub".to_string(),
                url: "https://github.com/a".to_string(),
            }],
            ..Default::default()
        };
        let items = contact_items(&personal);
        assert_eq!(items[0].href, None);
        assert_eq!(
            items[1],
            ContactItem {
                text: "GitHub",
                href: Some("https://github.com/a"),
            }
        );

        let Some(LayoutNode::Container(row)) =
            contact_line(&personal, style(), "|", BoxStyle::default())
        else {
            panic!("contact line should be a container");
        };
        let LayoutNode::Text(link) = &row.children[2] else {
            panic!("third child should be the link text");
        };
        assert_eq!(link.content, "GitHub");
        assert_eq!(link.href.as_deref(), Some("https://github.com/a"));
    }

    #[test]
    fn test_contact_line_absent_without_items() {
        assert!(contact_line(&person("Ada"), style(), "|", BoxStyle::default()).is_none());
        assert!(contact_stack(&person("Ada"), style()).is_none());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials(&person("ada lovelace")).as_deref(), Some("AL"));
        assert_eq!(initials(&person("Plato")).as_deref(), Some("P"));
        assert_eq!(
            initials(&person("Jean Luc Picard")).as_deref(),
            Some("JP")
        );
    }
}
