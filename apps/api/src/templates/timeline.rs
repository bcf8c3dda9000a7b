use crate::layout::header;
use crate::layout::sections::{sections, Dialect, RecordLayout};
use crate::layout::tree::{Border, BorderSides, BoxStyle, Container, Edges, NodeRole, TextStyle};
use crate::layout::typography::{FontFamily, FontSize, NameCurve};
use crate::layout::{LayoutTree, SectionKind};
use crate::models::profile::ProfileData;
use crate::theme::{neutral, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId};

/// Single column with every dated record hung on a vertical accent rail.
pub struct Timeline;

impl LayoutTemplate for Timeline {
    fn id(&self) -> TemplateId {
        TemplateId::Timeline
    }

    fn description(&self) -> &'static str {
        "Chronological layout with dates beside an accent timeline rail"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::Timeline
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Sans;
        let personal = &profile.personal;
        let base = Dialect::standard(family, theme);
        let dialect = Dialect {
            meta: TextStyle::new(FontFamily::Mono, FontSize::Xs, neutral::MUTED),
            record_layout: RecordLayout::DatesAside {
                dates_width: 0.18,
                rail: Some(Border::new(theme.emphasis_color, 1.5, BorderSides::Left)),
            },
            record_gap: 10.0,
            ..base
        };

        let header = Container::column(NodeRole::Header)
            .style(
                BoxStyle::default()
                    .gap(3.0)
                    .padding(Edges {
                        bottom: 8.0,
                        ..Edges::ZERO
                    })
                    .border(Border::new(theme.border_color, 1.0, BorderSides::Bottom)),
            )
            .children(header::name(
                personal,
                NameCurve::Standard,
                TextStyle::new(family, FontSize::Xxxl, theme.name_color).bold(),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Lg, theme.emphasis_color),
            ))
            .children(header::contact_line(
                personal,
                TextStyle::new(FontFamily::Mono, FontSize::Xs, neutral::MUTED),
                "/",
                BoxStyle::default().gap(4.0),
            ));

        let page = Container::column(NodeRole::Page)
            .style(BoxStyle::default().gap(16.0).padding(Edges::all(8.0)))
            .child_nonempty(header)
            .children(sections(profile, &SectionKind::ALL, &dialect));
        LayoutTree::new(self.id(), page)
    }
}
