use crate::layout::header;
use crate::layout::sections::{sections, Dialect, TokenStyle};
use crate::layout::tree::{Border, BorderSides, BoxStyle, Container, Edges, NodeRole, TextStyle};
use crate::layout::typography::{FontFamily, FontSize, FontWeight, NameCurve};
use crate::layout::LayoutTree;
use crate::models::profile::ProfileData;
use crate::theme::{neutral, Color, ResolvedTheme};

use super::{Arrangement, LayoutTemplate, TemplateId, MAIN_SECTIONS, SIDE_SECTIONS};

/// Main column first, accent-edged sidebar on the right; records hang off an
/// accent stripe.
pub struct Creative;

impl LayoutTemplate for Creative {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn description(&self) -> &'static str {
        "Right-hand sidebar and accent-striped records for a livelier look"
    }

    fn arrangement(&self) -> Arrangement {
        Arrangement::SidebarRight
    }

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree {
        let family = FontFamily::Sans;
        let personal = &profile.personal;
        let base = Dialect::standard(family, theme);
        let main_dialect = Dialect {
            title_box: BoxStyle::default(),
            bullet_marker: "▸",
            record_box: base
                .record_box
                .border(Border::new(theme.emphasis_color, 2.0, BorderSides::Left))
                .padding(Edges {
                    left: 8.0,
                    ..Edges::ZERO
                }),
            ..base
        };
        let side_dialect = Dialect {
            title_box: BoxStyle::default(),
            tokens: TokenStyle::Stacked,
            record_gap: 6.0,
            ..base
        };

        let header = Container::column(NodeRole::Header)
            .style(BoxStyle::default().gap(3.0))
            .children(header::name(
                personal,
                NameCurve::Standard,
                TextStyle::new(family, FontSize::Xxxl, theme.name_color).bold(),
            ))
            .children(header::profession(
                personal,
                TextStyle::new(family, FontSize::Lg, neutral::MUTED).weight(FontWeight::Medium),
            ));

        let main = Container::column(NodeRole::Main)
            .style(
                BoxStyle::default()
                    .width(0.66)
                    .padding(Edges::all(18.0))
                    .gap(16.0),
            )
            .child_nonempty(header)
            .children(sections(profile, &MAIN_SECTIONS, &main_dialect));

        let sidebar = Container::column(NodeRole::Sidebar)
            .style(
                BoxStyle::default()
                    .width(0.34)
                    .background(theme.tint_color)
                    .border(Border::new(theme.emphasis_color, 4.0, BorderSides::Left))
                    .padding(Edges::all(16.0))
                    .gap(14.0),
            )
            .children(header::avatar(
                personal,
                72.0,
                theme.emphasis_color,
                Color::WHITE,
            ))
            .children(header::contact_stack(
                personal,
                TextStyle::new(family, FontSize::Sm, neutral::TEXT),
            ))
            .children(sections(profile, &SIDE_SECTIONS, &side_dialect));

        let page = Container::row(NodeRole::Page).child(main).child(sidebar);
        LayoutTree::new(self.id(), page)
    }
}
