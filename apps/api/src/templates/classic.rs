use crate::layout::header;
use crate::layout::sections::{sections, Dialect, TokenStyle};
use crate::layout::tree::{BoxStyle, Container, Edges, NodeRole, TextAlign, TextStyle};
use crate::layout::typography::{FontFamily, FontSize, NameCurve};
use crate::layout::{LayoutTree, SectionKind};
use crate::models::profile::ProfileData;
use crate::theme::{neutral, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId};

/// Template #1: single column, centered serif header, ruled section titles.
pub struct Classic;

impl LayoutTemplate for Classic {
    fn id(&self) -> TemplateId {
        TemplateId::Classic
    }

    fn description(&self) -> &'static str {
        "Traditional single-column resume with a centered serif header"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::SingleColumn
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Serif;
        let personal = &profile.personal;
        let dialect = Dialect {
            tokens: TokenStyle::Inline { separator: "·" },
            ..Dialect::standard(family, theme)
        };

        let header = Container::column(NodeRole::Header)
            .style(BoxStyle::default().gap(4.0).centered())
            .children(header::name(
                personal,
                NameCurve::Standard,
                TextStyle::new(family, FontSize::Xxxl, theme.name_color)
                    .bold()
                    .align(TextAlign::Center),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Lg, neutral::MUTED)
                    .italic()
                    .align(TextAlign::Center),
            ))
            .children(header::contact_line(
                personal,
                TextStyle::new(family, FontSize::Sm, neutral::TEXT),
                "|",
                BoxStyle::default().gap(4.0).centered(),
            ));

        let page = Container::column(NodeRole::Page)
            .style(BoxStyle::default().gap(14.0).padding(Edges::all(8.0)))
            .child_nonempty(header)
            .children(sections(profile, &SectionKind::ALL, &dialect));

        LayoutTree::new(self.id(), page)
    }
}
