use crate::layout::header;
use crate::layout::sections::{section_parts, Dialect, TokenStyle};
use crate::layout::tree::{
    Border, BorderSides, BoxStyle, Container, Edges, LayoutNode, NodeRole, TextAlign, TextStyle,
};
use crate::layout::typography::{FontFamily, FontSize, FontWeight, NameCurve};
use crate::layout::{LayoutTree, SectionKind};
use crate::models::profile::ProfileData;
use crate::theme::{neutral, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId};

const TITLE_WIDTH: f32 = 0.2;

/// Dense grid: each section title sits in a narrow left column beside its
/// records, fitting long histories on fewer pages.
pub struct Compact;

impl LayoutTemplate for Compact {
    fn id(&self) -> TemplateId {
        TemplateId::Compact
    }

    fn description(&self) -> &'static str {
        "Dense side-heading grid that fits long histories on fewer pages"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::SideHeading
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Sans;
        let personal = &profile.personal;
        let base = Dialect::standard(family, theme);
        let dialect = Dialect {
            title: TextStyle::new(family, FontSize::Base, theme.emphasis_color)
                .bold()
                .uppercase()
                .tracking(0.6)
                .align(TextAlign::Right),
            title_box: BoxStyle::default(),
            record_title: TextStyle::new(family, FontSize::Base, neutral::TEXT)
                .weight(FontWeight::Semibold),
            record_subtitle: TextStyle::new(family, FontSize::Sm, theme.emphasis_color),
            meta: TextStyle::new(family, FontSize::Xs, neutral::MUTED),
            body: TextStyle::new(family, FontSize::Sm, neutral::TEXT),
            tokens: TokenStyle::Inline { separator: "·" },
            record_gap: 4.0,
            ..base
        };

        let identity = Container::column(NodeRole::Identity)
            .style(BoxStyle::default().width(0.5))
            .children(header::name(
                personal,
                NameCurve::Standard,
                TextStyle::new(family, FontSize::Xxl, theme.name_color).bold(),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Base, neutral::MUTED),
            ));
        let contact = Container::column(NodeRole::Decoration)
            .style(BoxStyle::default().width(0.5))
            .children(header::contact_line(
                personal,
                TextStyle::new(family, FontSize::Xs, neutral::TEXT).align(TextAlign::Right),
                "·",
                BoxStyle::default().gap(3.0),
            ));
        let header = Container::row(NodeRole::Header)
            .style(
                BoxStyle::default()
                    .padding(Edges {
                        bottom: 6.0,
                        ..Edges::ZERO
                    })
                    .border(Border::new(theme.border_color, 0.75, BorderSides::Bottom)),
            )
            .child_nonempty(identity)
            .child_nonempty(contact);

        let rows = SectionKind::ALL
            .iter()
            .filter_map(|kind| side_heading_row(profile, *kind, &dialect));

        let page = Container::column(NodeRole::Page)
            .style(BoxStyle::default().gap(9.0).padding(Edges::all(4.0)))
            .child_nonempty(header)
            .children(rows);
        LayoutTree::new(self.id(), page)
    }
}

fn side_heading_row(profile: &ProfileData, kind: SectionKind, dialect: &Dialect) -> Option<LayoutNode> {
    let (title, body) = section_parts(profile, kind, dialect)?;
    Some(
        Container::row(NodeRole::Section(kind))
            .style(BoxStyle::default().gap(10.0))
            .child(
                Container::column(NodeRole::Decoration)
                    .style(BoxStyle::default().width(TITLE_WIDTH))
                    .child(title),
            )
            .child(
                Container::column(NodeRole::Main)
                    .style(BoxStyle::default().width(1.0 - TITLE_WIDTH).gap(dialect.record_gap))
                    .children(body),
            )
            .into(),
    )
}
