use crate::layout::header;
use crate::layout::sections::{sections, Dialect, TokenStyle};
use crate::layout::tree::{BoxStyle, Container, Edges, NodeRole, TextStyle};
use crate::layout::typography::{FontFamily, FontSize, FontWeight, NameCurve};
use crate::layout::{LayoutTree, SectionKind};
use crate::models::profile::ProfileData;
use crate::theme::{neutral, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId};

/// Generous whitespace, unruled small titles, large light name.
pub struct Minimal;

impl LayoutTemplate for Minimal {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
    }

    fn description(&self) -> &'static str {
        "Quiet single column with generous whitespace and no rules"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::SingleColumn
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Sans;
        let personal = &profile.personal;
        let base = Dialect::standard(family, theme);
        let dialect = Dialect {
            title: TextStyle::new(family, FontSize::Sm, theme.emphasis_color)
                .weight(FontWeight::Semibold)
                .uppercase()
                .tracking(2.0),
            title_box: BoxStyle::default(),
            record_subtitle: base.record_subtitle.color(neutral::MUTED),
            bullet_marker: "–",
            bullet_color: neutral::MUTED,
            tokens: TokenStyle::Inline { separator: "," },
            record_gap: 10.0,
            ..base
        };

        let header = Container::column(NodeRole::Header)
            .style(BoxStyle::default().gap(6.0))
            .children(header::name(
                personal,
                NameCurve::Large,
                TextStyle::new(family, FontSize::Xxxxl, theme.name_color)
                    .weight(FontWeight::Normal)
                    .tracking(-0.5),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Md, neutral::MUTED),
            ))
            .children(header::contact_line(
                personal,
                TextStyle::new(family, FontSize::Sm, neutral::MUTED),
                " ",
                BoxStyle::default().gap(8.0),
            ));

        let page = Container::column(NodeRole::Page)
            .style(BoxStyle::default().gap(22.0).padding(Edges::all(16.0)))
            .child_nonempty(header)
            .children(sections(profile, &SectionKind::ALL, &dialect));
        LayoutTree::new(self.id(), page)
    }
}
