//! Shared section composer.
//!
//! Every template renders its sections through this module so that content
//! selection (visibility, record filtering, bullet and token splitting) is
//! identical across templates. A template only supplies a [`Dialect`] — the
//! typographic and decorative choices — and decides where the resulting
//! section nodes go.

use crate::layout::tree::{
    Border, BorderSides, BoxStyle, Container, Edges, LayoutNode, NodeRole, TextStyle,
};
use crate::layout::typography::{FontFamily, FontSize, FontWeight};
use crate::layout::visibility::{
    non_blank, section_visible, split_bullets, split_tokens, visible_records, SectionKind,
};
use crate::models::profile::ProfileData;
use crate::theme::{neutral, Color, ResolvedTheme};

// ────────────────────────────────────────────────────────────────────────────
// Dialect
// ────────────────────────────────────────────────────────────────────────────

/// How skill and language tokens are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenStyle {
    /// Rounded chips on a filled background.
    Chips { background: Color, text: Color },
    /// One line of text with a separator between tokens.
    Inline { separator: &'static str },
    /// One token per line.
    Stacked,
}

/// How a record's dates relate to the rest of the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordLayout {
    /// Title, subtitle, dates, bullets top to bottom.
    Stacked,
    /// Dates in a narrow leading column, the record body beside them.
    DatesAside { dates_width: f32, rail: Option<Border> },
}

/// A template's visual vocabulary for sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dialect {
    pub title: TextStyle,
    /// Decoration on the box holding the section title.
    pub title_box: BoxStyle,
    pub record_title: TextStyle,
    pub record_subtitle: TextStyle,
    pub meta: TextStyle,
    pub body: TextStyle,
    pub bullet_marker: &'static str,
    pub bullet_color: Color,
    pub tokens: TokenStyle,
    pub record_box: BoxStyle,
    pub record_layout: RecordLayout,
    /// Space between the title and records, and between records.
    pub record_gap: f32,
}

impl Dialect {
    /// Baseline dialect: accent-colored uppercase titles over a hairline rule,
    /// bullets in the accent color.
    pub fn standard(family: FontFamily, theme: &ResolvedTheme) -> Self {
        Self {
            title: TextStyle::new(family, FontSize::Lg, theme.emphasis_color)
                .bold()
                .uppercase()
                .tracking(0.8),
            title_box: BoxStyle::default()
                .padding(Edges {
                    bottom: 3.0,
                    ..Edges::ZERO
                })
                .border(Border::new(theme.border_color, 0.75, BorderSides::Bottom)),
            record_title: TextStyle::new(family, FontSize::Md, neutral::TEXT)
                .weight(FontWeight::Semibold),
            record_subtitle: TextStyle::new(family, FontSize::Base, theme.emphasis_color)
                .weight(FontWeight::Medium),
            meta: TextStyle::new(family, FontSize::Sm, neutral::MUTED),
            body: TextStyle::new(family, FontSize::Base, neutral::TEXT),
            bullet_marker: "•",
            bullet_color: theme.emphasis_color,
            tokens: TokenStyle::Chips {
                background: theme.tint_color,
                text: theme.emphasis_color,
            },
            record_box: BoxStyle::default().gap(2.0).keep_together(),
            record_layout: RecordLayout::Stacked,
            record_gap: 8.0,
        }
    }

    /// Recolors every text style for use on a dark fill.
    pub fn on_fill(mut self, text: Color, muted: Color) -> Self {
        self.title = self.title.color(text);
        self.record_title = self.record_title.color(text);
        self.record_subtitle = self.record_subtitle.color(text);
        self.meta = self.meta.color(muted);
        self.body = self.body.color(text);
        self.bullet_color = text;
        self.title_box.border = self
            .title_box
            .border
            .map(|b| Border::new(muted, b.width_pt, b.sides));
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Renders the given sections in order, skipping those without content.
pub fn sections(profile: &ProfileData, kinds: &[SectionKind], dialect: &Dialect) -> Vec<LayoutNode> {
    kinds
        .iter()
        .filter_map(|kind| section(profile, *kind, dialect))
        .collect()
}

/// A section as title followed by its records, or `None` when it has no
/// renderable content.
pub fn section(profile: &ProfileData, kind: SectionKind, dialect: &Dialect) -> Option<LayoutNode> {
    let (title, body) = section_parts(profile, kind, dialect)?;
    Some(
        Container::column(NodeRole::Section(kind))
            .style(BoxStyle::default().gap(dialect.record_gap))
            .child(title)
            .children(body)
            .into(),
    )
}

/// Title node and body nodes of a section, for templates that place the
/// title apart from the records.
pub fn section_parts(
    profile: &ProfileData,
    kind: SectionKind,
    dialect: &Dialect,
) -> Option<(LayoutNode, Vec<LayoutNode>)> {
    if !section_visible(profile, kind) {
        return None;
    }
    Some((section_title(kind, dialect), section_body(profile, kind, dialect)))
}

pub fn section_title(kind: SectionKind, dialect: &Dialect) -> LayoutNode {
    Container::column(NodeRole::Decoration)
        .style(dialect.title_box)
        .child(LayoutNode::text(
            NodeRole::SectionTitle,
            kind.title(),
            dialect.title,
        ))
        .into()
}

fn section_body(profile: &ProfileData, kind: SectionKind, dialect: &Dialect) -> Vec<LayoutNode> {
    match kind {
        SectionKind::Summary => profile
            .personal
            .summary
            .as_deref()
            .and_then(non_blank)
            .map(|s| LayoutNode::text(NodeRole::Paragraph, s, dialect.body))
            .into_iter()
            .collect(),
        SectionKind::Skills => token_list(split_tokens(profile.skills.as_deref()), dialect),
        SectionKind::Languages => token_list(split_tokens(profile.languages.as_deref()), dialect),
        SectionKind::Experience => visible_records(&profile.experience)
            .map(|e| {
                RecordParts {
                    title: &e.title,
                    subtitle: joined(&[e.company.as_str(), e.location.as_str()], " · "),
                    dates: non_blank(&e.dates),
                    details: Vec::new(),
                    bullets: split_bullets(e.description.as_deref()),
                }
                .render(dialect)
            })
            .collect(),
        SectionKind::Education => visible_records(&profile.education)
            .map(|e| {
                let grade = non_blank(&e.grade).map(|g| format!("Grade: {g}"));
                RecordParts {
                    title: &e.institution,
                    subtitle: joined(&[e.degree.as_str(), e.field_of_study.as_str()], ", "),
                    dates: non_blank(&e.dates),
                    details: grade.into_iter().collect(),
                    bullets: split_bullets(e.description.as_deref()),
                }
                .render(dialect)
            })
            .collect(),
        SectionKind::Projects => visible_records(&profile.projects)
            .map(|p| {
                RecordParts {
                    title: &p.title,
                    subtitle: non_blank(&p.technologies).map(str::to_string),
                    dates: non_blank(&p.dates),
                    details: non_blank(&p.link).map(str::to_string).into_iter().collect(),
                    bullets: split_bullets(p.description.as_deref()),
                }
                .render(dialect)
            })
            .collect(),
        SectionKind::Certifications => visible_records(&profile.certifications)
            .map(|c| {
                RecordParts {
                    title: &c.name,
                    subtitle: non_blank(&c.issuer).map(str::to_string),
                    dates: non_blank(&c.date),
                    details: non_blank(&c.credential_url)
                        .map(str::to_string)
                        .into_iter()
                        .collect(),
                    bullets: Vec::new(),
                }
                .render(dialect)
            })
            .collect(),
        SectionKind::Awards => visible_records(&profile.awards)
            .map(|a| {
                RecordParts {
                    title: &a.name,
                    subtitle: non_blank(&a.issuer).map(str::to_string),
                    dates: non_blank(&a.date),
                    details: Vec::new(),
                    bullets: split_bullets(a.description.as_deref()),
                }
                .render(dialect)
            })
            .collect(),
    }
}

/// Joins the non-blank parts, or `None` when all are blank.
fn joined(parts: &[&str], separator: &str) -> Option<String> {
    let kept: Vec<&str> = parts.iter().filter_map(|p| non_blank(p)).collect();
    (!kept.is_empty()).then(|| kept.join(separator))
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

struct RecordParts<'a> {
    title: &'a str,
    subtitle: Option<String>,
    dates: Option<&'a str>,
    /// Extra single-line facts (grade, link, credential URL).
    details: Vec<String>,
    bullets: Vec<&'a str>,
}

impl RecordParts<'_> {
    fn render(self, dialect: &Dialect) -> LayoutNode {
        let mut body = Container::column(NodeRole::Main)
            .style(BoxStyle::default().gap(2.0))
            .child(LayoutNode::text(
                NodeRole::RecordTitle,
                self.title.trim(),
                dialect.record_title,
            ));
        if let Some(subtitle) = self.subtitle {
            body = body.child(LayoutNode::text(
                NodeRole::RecordMeta,
                subtitle,
                dialect.record_subtitle,
            ));
        }

        match dialect.record_layout {
            RecordLayout::Stacked => {
                if let Some(dates) = self.dates {
                    body = body.child(LayoutNode::text(NodeRole::RecordMeta, dates, dialect.meta));
                }
                body = with_details_and_bullets(body, self.details, &self.bullets, dialect);
                Container::column(NodeRole::Record)
                    .style(dialect.record_box)
                    .children(body.children)
                    .into()
            }
            RecordLayout::DatesAside { dates_width, rail } => {
                body = with_details_and_bullets(body, self.details, &self.bullets, dialect);
                let mut body_style = BoxStyle::default().gap(2.0).width(1.0 - dates_width);
                if let Some(rail) = rail {
                    body_style = body_style.border(rail).padding(Edges {
                        left: 10.0,
                        ..Edges::ZERO
                    });
                }
                let dates = Container::column(NodeRole::Decoration)
                    .style(BoxStyle::default().width(dates_width))
                    .children(
                        self.dates
                            .map(|d| LayoutNode::text(NodeRole::RecordMeta, d, dialect.meta)),
                    );
                Container::row(NodeRole::Record)
                    .style(dialect.record_box)
                    .child(dates)
                    .child(body.style(body_style))
                    .into()
            }
        }
    }
}

fn with_details_and_bullets(
    mut body: Container,
    details: Vec<String>,
    bullets: &[&str],
    dialect: &Dialect,
) -> Container {
    for detail in details {
        body = body.child(LayoutNode::text(NodeRole::RecordMeta, detail, dialect.meta));
    }
    if !bullets.is_empty() {
        body = body.child(bullet_list(bullets, dialect));
    }
    body
}

fn bullet_list(bullets: &[&str], dialect: &Dialect) -> LayoutNode {
    let marker_style = dialect.body.color(dialect.bullet_color);
    Container::column(NodeRole::BulletList)
        .style(BoxStyle::default().gap(1.5).padding(Edges {
            left: 4.0,
            ..Edges::ZERO
        }))
        .children(bullets.iter().map(|line| {
            Container::row(NodeRole::Decoration)
                .style(BoxStyle::default().gap(4.0))
                .child(
                    Container::column(NodeRole::Decoration)
                        .style(BoxStyle::default().width(0.04))
                        .child(LayoutNode::text(
                            NodeRole::Decoration,
                            dialect.bullet_marker,
                            marker_style,
                        )),
                )
                .child(
                    Container::column(NodeRole::Decoration)
                        .style(BoxStyle::default().width(0.96))
                        .child(LayoutNode::text(NodeRole::Bullet, *line, dialect.body)),
                )
                .into()
        }))
        .into()
}

// ────────────────────────────────────────────────────────────────────────────
// Tokens
// ────────────────────────────────────────────────────────────────────────────

fn token_list(tokens: Vec<&str>, dialect: &Dialect) -> Vec<LayoutNode> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let list = match dialect.tokens {
        TokenStyle::Chips { background, text } => {
            let chip_text = dialect.meta.color(text).weight(FontWeight::Medium);
            Container::row(NodeRole::TokenList)
                .style(BoxStyle::default().gap(4.0).wrapping())
                .children(tokens.into_iter().map(|token| {
                    Container::column(NodeRole::Decoration)
                        .style(
                            BoxStyle::default()
                                .background(background)
                                .padding(Edges::symmetric(2.0, 6.0)),
                        )
                        .child(LayoutNode::text(NodeRole::Token, token, chip_text))
                        .into()
                }))
        }
        TokenStyle::Inline { separator } => {
            let separator_style = dialect.body.color(dialect.bullet_color);
            let mut row = Container::row(NodeRole::TokenList)
                .style(BoxStyle::default().gap(3.0).wrapping());
            for (i, token) in tokens.into_iter().enumerate() {
                if i > 0 {
                    row = row.child(LayoutNode::text(
                        NodeRole::Decoration,
                        separator,
                        separator_style,
                    ));
                }
                row = row.child(LayoutNode::text(NodeRole::Token, token, dialect.body));
            }
            row
        }
        TokenStyle::Stacked => Container::column(NodeRole::TokenList)
            .style(BoxStyle::default().gap(2.0))
            .children(
                tokens
                    .into_iter()
                    .map(|token| LayoutNode::text(NodeRole::Token, token, dialect.body)),
            ),
    };
    vec![list.into()]
}
