use crate::layout::header;
use crate::layout::sections::{sections, Dialect, TokenStyle};
use crate::layout::tree::{
    Border, BorderSides, BoxStyle, Container, Edges, NodeRole, TextAlign, TextStyle,
};
use crate::layout::typography::{FontFamily, FontSize, FontWeight, NameCurve};
use crate::layout::{LayoutTree, SectionKind};
use crate::models::profile::ProfileData;
use crate::theme::{neutral, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId};

/// Centered serif layout with titles framed between two rules.
pub struct Elegant;

impl LayoutTemplate for Elegant {
    fn id(&self) -> TemplateId {
        TemplateId::Elegant
    }

    fn description(&self) -> &'static str {
        "Centered serif layout with double-ruled section titles"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::SingleColumn
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Serif;
        let personal = &profile.personal;
        let base = Dialect::standard(family, theme);
        let dialect = Dialect {
            title: TextStyle::new(family, FontSize::Md, theme.emphasis_color)
                .weight(FontWeight::Semibold)
                .uppercase()
                .tracking(2.5)
                .align(TextAlign::Center),
            title_box: BoxStyle::default()
                .centered()
                .padding(Edges::symmetric(3.0, 0.0))
                .border(Border::new(theme.border_color, 0.5, BorderSides::TopBottom)),
            record_subtitle: base.record_subtitle.italic(),
            bullet_marker: "◦",
            tokens: TokenStyle::Inline { separator: "◆" },
            ..base
        };

        let header = Container::column(NodeRole::Header)
            .style(BoxStyle::default().gap(5.0).centered())
            .children(header::name(
                personal,
                NameCurve::Standard,
                TextStyle::new(family, FontSize::Xxxl, theme.name_color)
                    .weight(FontWeight::Medium)
                    .uppercase()
                    .tracking(3.0)
                    .align(TextAlign::Center),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Md, neutral::MUTED)
                    .italic()
                    .align(TextAlign::Center),
            ))
            .children(header::contact_line(
                personal,
                TextStyle::new(family, FontSize::Sm, neutral::TEXT),
                "◆",
                BoxStyle::default().gap(5.0).centered(),
            ));

        let page = Container::column(NodeRole::Page)
            .style(BoxStyle::default().gap(16.0).padding(Edges::symmetric(12.0, 24.0)))
            .child_nonempty(header)
            .children(sections(profile, &SectionKind::ALL, &dialect));
        LayoutTree::new(self.id(), page)
    }
}
