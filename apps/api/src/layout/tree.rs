//! The layout tree — the style-concrete document every template produces and
//! every backend consumes.
//!
//! All style values are resolved: points, hex colors, enum font families.
//! Nothing symbolic survives into the tree, so a backend never needs to know
//! which accent or template produced it.

use serde::Serialize;

use crate::layout::typography::{FontFamily, FontSize, FontWeight};
use crate::layout::visibility::SectionKind;
use crate::templates::TemplateId;
use crate::theme::Color;

// ────────────────────────────────────────────────────────────────────────────
// Tree
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutTree {
    pub template: TemplateId,
    pub root: LayoutNode,
}

impl LayoutTree {
    pub fn new(template: TemplateId, root: impl Into<LayoutNode>) -> Self {
        Self {
            template,
            root: root.into(),
        }
    }

    /// Sections present in the tree, in document order.
    #[cfg(test)]
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        let mut kinds = Vec::new();
        self.root.walk(&mut |node| {
            if let NodeRole::Section(kind) = node.role() {
                kinds.push(kind);
            }
        });
        kinds
    }

    /// Text content of every node with the given role, in document order.
    #[cfg(test)]
    pub fn texts_with_role(&self, role: NodeRole) -> Vec<&str> {
        let mut texts = Vec::new();
        collect_texts(&self.root, role, &mut texts);
        texts
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.walk(&mut |_| count += 1);
        count
    }

    /// A copy of the tree with every length multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> LayoutTree {
        LayoutTree {
            template: self.template,
            root: self.root.scaled(factor),
        }
    }
}

#[cfg(test)]
fn collect_texts<'a>(node: &'a LayoutNode, role: NodeRole, out: &mut Vec<&'a str>) {
    match node {
        LayoutNode::Text(text) if text.role == role => out.push(&text.content),
        LayoutNode::Container(container) => {
            for child in &container.children {
                collect_texts(child, role, out);
            }
        }
        _ => {}
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Nodes
// ────────────────────────────────────────────────────────────────────────────

/// What a node represents in the document, independent of how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Page,
    Header,
    /// Name and profession grouped inside a wider header.
    Identity,
    Banner,
    Sidebar,
    Main,
    Avatar,
    Name,
    Profession,
    Contact,
    Section(SectionKind),
    SectionTitle,
    Record,
    RecordTitle,
    RecordMeta,
    Paragraph,
    BulletList,
    Bullet,
    TokenList,
    Token,
    Decoration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutNode {
    Container(Container),
    Text(TextNode),
    Image(ImageNode),
}

impl LayoutNode {
    pub fn role(&self) -> NodeRole {
        match self {
            LayoutNode::Container(c) => c.role,
            LayoutNode::Text(t) => t.role,
            LayoutNode::Image(i) => i.role,
        }
    }

    pub fn text(role: NodeRole, content: impl Into<String>, style: TextStyle) -> LayoutNode {
        LayoutNode::Text(TextNode {
            role,
            content: content.into(),
            style,
            href: None,
        })
    }

    /// Text that links to `href` when the backend can render links.
    pub fn link(
        role: NodeRole,
        content: impl Into<String>,
        href: Option<&str>,
        style: TextStyle,
    ) -> LayoutNode {
        LayoutNode::Text(TextNode {
            role,
            content: content.into(),
            style,
            href: href.map(str::to_string),
        })
    }

    /// Pre-order traversal.
    pub fn walk(&self, f: &mut impl FnMut(&LayoutNode)) {
        f(self);
        if let LayoutNode::Container(container) = self {
            for child in &container.children {
                child.walk(f);
            }
        }
    }

    fn scaled(&self, factor: f32) -> LayoutNode {
        match self {
            LayoutNode::Container(c) => LayoutNode::Container(Container {
                role: c.role,
                direction: c.direction,
                style: c.style.scaled(factor),
                children: c.children.iter().map(|n| n.scaled(factor)).collect(),
            }),
            LayoutNode::Text(t) => LayoutNode::Text(TextNode {
                role: t.role,
                content: t.content.clone(),
                style: t.style.scaled(factor),
                href: t.href.clone(),
            }),
            LayoutNode::Image(i) => LayoutNode::Image(ImageNode {
                size_pt: i.size_pt * factor,
                ..i.clone()
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Column,
    Row,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub role: NodeRole,
    pub direction: Direction,
    pub style: BoxStyle,
    pub children: Vec<LayoutNode>,
}

impl Container {
    pub fn column(role: NodeRole) -> Self {
        Self {
            role,
            direction: Direction::Column,
            style: BoxStyle::default(),
            children: Vec::new(),
        }
    }

    pub fn row(role: NodeRole) -> Self {
        Self {
            direction: Direction::Row,
            ..Self::column(role)
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, node: impl Into<LayoutNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = LayoutNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Adds `node` only when it has children.
    pub fn child_nonempty(self, node: Container) -> Self {
        if node.is_empty() {
            self
        } else {
            self.child(node)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<Container> for LayoutNode {
    fn from(container: Container) -> Self {
        LayoutNode::Container(container)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    pub role: NodeRole,
    pub content: String,
    pub style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Avatar placeholder showing the person's initials. The export and preview
/// backends substitute a photo when one is available to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageNode {
    pub role: NodeRole,
    pub initials: String,
    pub size_pt: f32,
    pub background: Color,
    pub foreground: Color,
    pub round: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Styles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub family: FontFamily,
    pub size_pt: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub italic: bool,
    pub uppercase: bool,
    pub letter_spacing_pt: f32,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(family: FontFamily, size: FontSize, color: Color) -> Self {
        Self {
            family,
            size_pt: size.points(),
            weight: FontWeight::Normal,
            color,
            italic: false,
            uppercase: false,
            letter_spacing_pt: 0.0,
            align: TextAlign::Left,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn tracking(mut self, letter_spacing_pt: f32) -> Self {
        self.letter_spacing_pt = letter_spacing_pt;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn scaled(&self, factor: f32) -> TextStyle {
        TextStyle {
            size_pt: self.size_pt * factor,
            letter_spacing_pt: self.letter_spacing_pt * factor,
            ..*self
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    fn scaled(&self, factor: f32) -> Edges {
        Edges {
            top: self.top * factor,
            right: self.right * factor,
            bottom: self.bottom * factor,
            left: self.left * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderSides {
    Bottom,
    Left,
    TopBottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Border {
    pub color: Color,
    pub width_pt: f32,
    pub sides: BorderSides,
}

impl Border {
    pub fn new(color: Color, width_pt: f32, sides: BorderSides) -> Self {
        Self {
            color,
            width_pt,
            sides,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Start,
    Center,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxStyle {
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub padding: Edges,
    /// Space between consecutive children.
    pub gap_pt: f32,
    /// Share of the parent row's width; `None` splits evenly.
    pub width_fraction: Option<f32>,
    pub align: Alignment,
    /// Never split across pages.
    pub keep_together: bool,
    /// Row children flow onto further lines when they run out of width.
    pub wrap: bool,
}

impl BoxStyle {
    pub fn gap(mut self, gap_pt: f32) -> Self {
        self.gap_pt = gap_pt;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn width(mut self, fraction: f32) -> Self {
        self.width_fraction = Some(fraction);
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Alignment::Center;
        self
    }

    pub fn keep_together(mut self) -> Self {
        self.keep_together = true;
        self
    }

    pub fn wrapping(mut self) -> Self {
        self.wrap = true;
        self
    }

    fn scaled(&self, factor: f32) -> BoxStyle {
        BoxStyle {
            border: self.border.map(|b| Border {
                width_pt: b.width_pt * factor,
                ..b
            }),
            padding: self.padding.scaled(factor),
            gap_pt: self.gap_pt * factor,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::neutral;

    fn body() -> TextStyle {
        TextStyle::new(FontFamily::Sans, FontSize::Base, neutral::TEXT)
    }

    fn sample_tree() -> LayoutTree {
        let section = Container::column(NodeRole::Section(SectionKind::Skills))
            .child(LayoutNode::text(NodeRole::SectionTitle, "Skills", body()))
            .child(LayoutNode::text(NodeRole::Token, "Rust", body()));
        let root = Container::column(NodeRole::Page)
            .style(BoxStyle::default().gap(12.0).padding(Edges::all(10.0)))
            .child(LayoutNode::text(NodeRole::Name, "Ada", body()))
            .child(section);
        LayoutTree::new(TemplateId::Classic, root)
    }

    #[test]
    fn test_section_kinds_in_document_order() {
        assert_eq!(sample_tree().section_kinds(), vec![SectionKind::Skills]);
    }

    #[test]
    fn test_texts_with_role() {
        let tree = sample_tree();
        assert_eq!(tree.texts_with_role(NodeRole::Token), vec!["Rust"]);
        assert_eq!(tree.texts_with_role(NodeRole::Name), vec!["Ada"]);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_scaled_multiplies_lengths_and_keeps_content() {
        let tree = sample_tree();
        let small = tree.scaled(0.5);
        assert_eq!(small.texts_with_role(NodeRole::Name), vec!["Ada"]);
        let LayoutNode::Container(root) = &small.root else {
            panic!("root should be a container");
        };
        assert_eq!(root.style.gap_pt, 6.0);
        assert_eq!(root.style.padding, Edges::all(5.0));
        let LayoutNode::Text(name) = &root.children[0] else {
            panic!("first child should be text");
        };
        assert_eq!(name.style.size_pt, FontSize::Base.points() * 0.5);
    }

    #[test]
    fn test_node_serializes_with_kind_tag() {
        let node = LayoutNode::text(NodeRole::Name, "Ada", body());
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["role"], "name");
        assert_eq!(json["style"]["color"], "#1f2937");
        assert!(json.get("href").is_none());
    }

    #[test]
    fn test_link_keeps_href_through_scaling() {
        let node = LayoutNode::link(NodeRole::Contact, "GitHub", Some("https://x.dev"), body());
        let root = Container::column(NodeRole::Page).child(node);
        let tree = LayoutTree::new(TemplateId::Classic, root);
        let LayoutNode::Container(root) = &tree.scaled(0.5).root else {
            panic!("root should be a container");
        };
        let LayoutNode::Text(link) = &root.children[0] else {
            panic!("child should be text");
        };
        assert_eq!(link.href.as_deref(), Some("https://x.dev"));
        let json = serde_json::to_value(&root.children[0]).unwrap();
        assert_eq!(json["href"], "https://x.dev");
    }
}
