use crate::layout::header;
use crate::layout::sections::{sections, Dialect, TokenStyle};
use crate::layout::tree::{BoxStyle, Container, Edges, NodeRole, TextStyle};
use crate::layout::typography::{FontFamily, FontSize, FontWeight, NameCurve};
use crate::layout::LayoutTree;
use crate::models::profile::ProfileData;
use crate::theme::{neutral, Color, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId, MAIN_SECTIONS, SIDE_SECTIONS};

/// Tinted sidebar on the left with avatar, contact details and short lists.
pub struct Modern;

impl LayoutTemplate for Modern {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn description(&self) -> &'static str {
        "Two columns with a tinted left sidebar for contact details and skills"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::SidebarLeft
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Sans;
        let personal = &profile.personal;
        let main_dialect = Dialect::standard(family, theme);
        let side_dialect = Dialect {
            title: main_dialect.title.tracking(0.5),
            tokens: TokenStyle::Chips {
                background: Color::WHITE,
                text: theme.emphasis_color,
            },
            record_gap: 6.0,
            ..main_dialect
        };

        let sidebar = Container::column(NodeRole::Sidebar)
            .style(
                BoxStyle::default()
                    .width(0.32)
                    .background(theme.tint_color)
                    .padding(Edges::all(18.0))
                    .gap(16.0),
            )
            .children(header::avatar(
                personal,
                64.0,
                theme.emphasis_color,
                Color::WHITE,
            ))
            .children(header::contact_stack(
                personal,
                TextStyle::new(family, FontSize::Sm, neutral::TEXT),
            ))
            .children(sections(profile, &SIDE_SECTIONS, &side_dialect));

        let header = Container::column(NodeRole::Header)
            .style(BoxStyle::default().gap(2.0))
            .children(header::name(
                personal,
                NameCurve::Standard,
                TextStyle::new(family, FontSize::Xxxl, theme.name_color).bold(),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Lg, theme.emphasis_color)
                    .weight(FontWeight::Medium),
            ));

        let main = Container::column(NodeRole::Main)
            .style(
                BoxStyle::default()
                    .width(0.68)
                    .padding(Edges::all(18.0))
                    .gap(14.0),
            )
            .child_nonempty(header)
            .children(sections(profile, &MAIN_SECTIONS, &main_dialect));

        let page = Container::row(NodeRole::Page).child(sidebar).child(main);
        LayoutTree::new(self.id(), page)
    }
}
