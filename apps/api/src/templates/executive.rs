use crate::layout::header;
use crate::layout::sections::{sections, Dialect};
use crate::layout::tree::{BoxStyle, Container, Edges, NodeRole, TextStyle};
use crate::layout::typography::{FontFamily, FontSize, NameCurve};
use crate::layout::{LayoutTree, SectionKind};
use crate::models::profile::ProfileData;
use crate::theme::{Color, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId};

/// Full-width accent banner carrying the header, single column below.
pub struct Executive;

impl LayoutTemplate for Executive {
    fn id(&self) -> TemplateId {
        TemplateId::Executive
    }

    fn description(&self) -> &'static str {
        "Bold accent banner header above a single content column"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::Banner
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Sans;
        let personal = &profile.personal;
        let dialect = Dialect::standard(family, theme);

        let banner = Container::column(NodeRole::Banner)
            .style(
                BoxStyle::default()
                    .background(theme.emphasis_color)
                    .padding(Edges::symmetric(24.0, 28.0))
                    .gap(4.0),
            )
            .children(header::name(
                personal,
                NameCurve::Large,
                TextStyle::new(family, FontSize::Xxxxl, Color::WHITE).bold(),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Lg, theme.tint_color).uppercase().tracking(1.2),
            ))
            .children(header::contact_line(
                personal,
                TextStyle::new(family, FontSize::Sm, theme.tint_color),
                "•",
                BoxStyle::default().gap(5.0).padding(Edges {
                    top: 6.0,
                    ..Edges::ZERO
                }),
            ));

        let body = Container::column(NodeRole::Main)
            .style(
                BoxStyle::default()
                    .padding(Edges::symmetric(0.0, 28.0))
                    .gap(14.0),
            )
            .children(sections(profile, &SectionKind::ALL, &dialect));

        let page = Container::column(NodeRole::Page)
            .style(BoxStyle::default().gap(18.0))
            .child_nonempty(banner)
            .child_nonempty(body);
        LayoutTree::new(self.id(), page)
    }
}
