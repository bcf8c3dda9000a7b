use crate::layout::header;
use crate::layout::sections::{sections, Dialect, TokenStyle};
use crate::layout::tree::{
    Border, BorderSides, BoxStyle, Container, Edges, NodeRole, TextAlign, TextStyle,
};
use crate::layout::typography::{FontFamily, FontSize, FontWeight, NameCurve};
use crate::layout::LayoutTree;
use crate::models::profile::ProfileData;
use crate::theme::{neutral, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId, MAIN_SECTIONS, SIDE_SECTIONS};

/// Header underlined in the accent color, then a wide and a narrow column
/// without backgrounds.
pub struct Professional;

impl LayoutTemplate for Professional {
    fn id(&self) -> TemplateId {
        TemplateId::Professional
    }

    fn description(&self) -> &'static str {
        "Accent-underlined header over a wide main column and a narrow side column"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::SidebarRight
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Sans;
        let personal = &profile.personal;
        let main_dialect = Dialect::standard(family, theme);
        let side_dialect = Dialect {
            tokens: TokenStyle::Stacked,
            record_gap: 6.0,
            ..main_dialect
        };

        let identity = Container::column(NodeRole::Identity)
            .style(BoxStyle::default().gap(2.0).width(0.62))
            .children(header::name(
                personal,
                NameCurve::Standard,
                TextStyle::new(family, FontSize::Xxxl, theme.name_color).bold(),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Lg, neutral::TEXT).weight(FontWeight::Medium),
            ));
        let contact = Container::column(NodeRole::Decoration)
            .style(BoxStyle::default().width(0.38))
            .children(header::contact_stack(
                personal,
                TextStyle::new(family, FontSize::Sm, neutral::MUTED).align(TextAlign::Right),
            ));
        let header = Container::row(NodeRole::Header)
            .style(
                BoxStyle::default()
                    .padding(Edges {
                        bottom: 10.0,
                        ..Edges::ZERO
                    })
                    .border(Border::new(theme.emphasis_color, 2.0, BorderSides::Bottom)),
            )
            .child_nonempty(identity)
            .child_nonempty(contact);

        let main = Container::column(NodeRole::Main)
            .style(BoxStyle::default().width(0.64).gap(14.0))
            .children(sections(profile, &MAIN_SECTIONS, &main_dialect));
        let side = Container::column(NodeRole::Sidebar)
            .style(BoxStyle::default().width(0.36).gap(14.0))
            .children(sections(profile, &SIDE_SECTIONS, &side_dialect));
        let body = Container::row(NodeRole::Main)
            .style(BoxStyle::default().gap(18.0))
            .child(main)
            .child(side);

        let page = Container::column(NodeRole::Page)
            .style(BoxStyle::default().gap(16.0).padding(Edges::all(8.0)))
            .child_nonempty(header)
            .child(body);
        LayoutTree::new(self.id(), page)
    }
}
