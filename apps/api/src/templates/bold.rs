use crate::layout::header;
use crate::layout::sections::{sections, Dialect, TokenStyle};
use crate::layout::tree::{Border, BorderSides, BoxStyle, Container, Edges, NodeRole, TextStyle};
use crate::layout::typography::{FontFamily, FontSize, FontWeight, NameCurve};
use crate::layout::LayoutTree;
use crate::models::profile::ProfileData;
use crate::theme::{Color, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId, MAIN_SECTIONS, SIDE_SECTIONS};

/// Solid accent sidebar on the left carrying the header in white.
pub struct Bold;

impl LayoutTemplate for Bold {
    fn id(&self) -> TemplateId {
        TemplateId::Bold
    }

    fn description(&self) -> &'static str {
        "Solid accent sidebar with the name and contact details in white"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::SidebarLeft
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Sans;
        let personal = &profile.personal;
        let base = Dialect::standard(family, theme);
        let main_dialect = Dialect {
            title_box: base
                .title_box
                .border(Border::new(theme.emphasis_color, 2.0, BorderSides::Bottom)),
            ..base
        };
        let side_dialect = Dialect {
            tokens: TokenStyle::Stacked,
            record_gap: 6.0,
            ..base
        }
        .on_fill(Color::WHITE, theme.tint_color);

        let sidebar = Container::column(NodeRole::Sidebar)
            .style(
                BoxStyle::default()
                    .width(0.34)
                    .background(theme.emphasis_color)
                    .padding(Edges::all(20.0))
                    .gap(16.0),
            )
            .children(header::avatar(
                personal,
                80.0,
                Color::WHITE,
                theme.emphasis_color,
            ))
            .children(header::name(
                personal,
                NameCurve::Large,
                TextStyle::new(family, FontSize::Xxxxl, Color::WHITE).weight(FontWeight::Bold),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Md, theme.tint_color).uppercase().tracking(1.0),
            ))
            .children(header::contact_stack(
                personal,
                TextStyle::new(family, FontSize::Sm, Color::WHITE),
            ))
            .children(sections(profile, &SIDE_SECTIONS, &side_dialect));

        let main = Container::column(NodeRole::Main)
            .style(
                BoxStyle::default()
                    .width(0.66)
                    .padding(Edges::all(22.0))
                    .gap(16.0),
            )
            .children(sections(profile, &MAIN_SECTIONS, &main_dialect));

        let page = Container::row(NodeRole::Page).child(sidebar).child(main);
        LayoutTree::new(self.id(), page)
    }
}
