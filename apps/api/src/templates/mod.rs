//! Layout templates — ten structurally different arrangements of the same
//! profile content.
//!
//! A template is a pure function from `(ProfileData, ResolvedTheme)` to a
//! `LayoutTree`. Content selection is delegated to `layout::sections`, so a
//! template only decides where sections go and how they look; switching
//! templates never changes which sections appear.

use serde::Serialize;

use crate::layout::{LayoutTree, SectionKind};
use crate::models::profile::ProfileData;
use crate::theme::ResolvedTheme;

mod bold;
mod classic;
mod compact;
mod creative;
mod elegant;
mod executive;
mod minimal;
mod modern;
mod professional;
pub mod registry;
mod timeline;

pub use registry::{lookup, lookup_name};

// ────────────────────────────────────────────────────────────────────────────
// Template identifiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    Classic,
    Modern,
    Executive,
    Minimal,
    Creative,
    Professional,
    Elegant,
    Compact,
    Timeline,
    Bold,
}

impl TemplateId {
    pub const ALL: [TemplateId; 10] = [
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Executive,
        TemplateId::Minimal,
        TemplateId::Creative,
        TemplateId::Professional,
        TemplateId::Elegant,
        TemplateId::Compact,
        TemplateId::Timeline,
        TemplateId::Bold,
    ];

    /// Template #1, used when a requested template is unknown.
    pub const DEFAULT: TemplateId = TemplateId::Classic;

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Executive => "executive",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
            TemplateId::Professional => "professional",
            TemplateId::Elegant => "elegant",
            TemplateId::Compact => "compact",
            TemplateId::Timeline => "timeline",
            TemplateId::Bold => "bold",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Classic => "Classic",
            TemplateId::Modern => "Modern",
            TemplateId::Executive => "Executive",
            TemplateId::Minimal => "Minimal",
            TemplateId::Creative => "Creative",
            TemplateId::Professional => "Professional",
            TemplateId::Elegant => "Elegant",
            TemplateId::Compact => "Compact",
            TemplateId::Timeline => "Timeline",
            TemplateId::Bold => "Bold",
        }
    }

    /// 1-based position in the catalog.
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|id| id == self)
            .map_or(1, |i| i + 1)
    }

    /// Accepts the name (`"modern"`), the number (`"2"`) or `"template2"`,
    /// case-insensitively.
    pub fn parse(value: &str) -> Option<TemplateId> {
        let value = value.trim().to_ascii_lowercase();
        let digits = value.strip_prefix("template").unwrap_or(&value);
        if let Ok(n) = digits.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

/// Structural family of a template, reported in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    SingleColumn,
    SidebarLeft,
    SidebarRight,
    Banner,
    SideHeading,
    Timeline,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait
// ────────────────────────────────────────────────────────────────────────────

/// One visual style. Implementations are stateless unit structs held as
/// `&'static dyn LayoutTemplate` by the registry.
pub trait LayoutTemplate: Send + Sync {
    fn id(&self) -> TemplateId;

    fn description(&self) -> &'static str;

    fn arrangement(&self) -> Arrangement;

    fn render(&self, profile: &ProfileData, theme: &ResolvedTheme) -> LayoutTree;

    fn name(&self) -> &'static str {
        self.id().display_name()
    }
}

/// Sections placed in the main column of two-column templates.
const MAIN_SECTIONS: [SectionKind; 5] = [
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Projects,
    SectionKind::Education,
    SectionKind::Awards,
];

/// Sections placed in the sidebar of two-column templates.
const SIDE_SECTIONS: [SectionKind; 3] = [
    SectionKind::Skills,
    SectionKind::Languages,
    SectionKind::Certifications,
];
