//! Section visibility — decides which blocks and records are renderable.
//!
//! One rule for every template: a record is visible when its primary field is
//! non-blank, a block is visible when it holds at least one visible record, and
//! a scalar block is visible when its text is non-blank. Blank records keep
//! their slot in the input but never produce output.

use serde::Serialize;

use crate::models::profile::{
    AwardEntry, CertificationEntry, EducationEntry, ExperienceEntry, ProfileData, ProjectEntry,
};

// ────────────────────────────────────────────────────────────────────────────
// Section kinds
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    Languages,
    Certifications,
    Awards,
}

impl SectionKind {
    /// Canonical order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::Certifications,
        SectionKind::Awards,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Profile",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
            SectionKind::Languages => "Languages",
            SectionKind::Certifications => "Certifications",
            SectionKind::Awards => "Awards",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record predicate
// ────────────────────────────────────────────────────────────────────────────

/// A repeatable-block record identified by one primary field.
pub trait Record {
    fn primary_field(&self) -> &str;

    fn is_visible(&self) -> bool {
        !self.primary_field().trim().is_empty()
    }
}

impl Record for EducationEntry {
    fn primary_field(&self) -> &str {
        &self.institution
    }
}

impl Record for ExperienceEntry {
    fn primary_field(&self) -> &str {
        &self.title
    }
}

impl Record for ProjectEntry {
    fn primary_field(&self) -> &str {
        &self.title
    }
}

impl Record for CertificationEntry {
    fn primary_field(&self) -> &str {
        &self.name
    }
}

impl Record for AwardEntry {
    fn primary_field(&self) -> &str {
        &self.name
    }
}

pub fn has_content<R: Record>(records: &[R]) -> bool {
    records.iter().any(Record::is_visible)
}

/// Visible records in input order.
pub fn visible_records<R: Record>(records: &[R]) -> impl Iterator<Item = &R> {
    records.iter().filter(|r| r.is_visible())
}

pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Trimmed text, or `None` when blank.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

// ────────────────────────────────────────────────────────────────────────────
// Splitting
// ────────────────────────────────────────────────────────────────────────────

/// One bullet per non-blank description line, trimmed, in input order.
pub fn split_bullets(description: Option<&str>) -> Vec<&str> {
    description
        .map(|d| d.split('\n').map(str::trim).filter(|l| !l.is_empty()).collect())
        .unwrap_or_default()
}

/// Comma-separated tokens, trimmed, blanks dropped.
pub fn split_tokens(list: Option<&str>) -> Vec<&str> {
    list.map(|l| l.split(',').map(str::trim).filter(|t| !t.is_empty()).collect())
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Profile-level checks
// ────────────────────────────────────────────────────────────────────────────

pub fn section_visible(profile: &ProfileData, kind: SectionKind) -> bool {
    match kind {
        SectionKind::Summary => has_text(profile.personal.summary.as_deref()),
        SectionKind::Experience => has_content(&profile.experience),
        SectionKind::Education => has_content(&profile.education),
        SectionKind::Projects => has_content(&profile.projects),
        SectionKind::Skills => !split_tokens(profile.skills.as_deref()).is_empty(),
        SectionKind::Languages => !split_tokens(profile.languages.as_deref()).is_empty(),
        SectionKind::Certifications => has_content(&profile.certifications),
        SectionKind::Awards => has_content(&profile.awards),
    }
}

/// Visible sections in canonical order.
pub fn visible_sections(profile: &ProfileData) -> Vec<SectionKind> {
    SectionKind::ALL
        .into_iter()
        .filter(|kind| section_visible(profile, *kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(title: &str) -> ExperienceEntry {
        ExperienceEntry {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_blank_block_has_no_content() {
        assert!(!has_content(&[ExperienceEntry::default()]));
        assert!(!has_content::<ExperienceEntry>(&[]));
        assert!(!has_content(&[experience("   ")]));
    }

    #[test]
    fn test_block_with_one_titled_record_has_content() {
        assert!(has_content(&[experience(""), experience("Engineer")]));
    }

    #[test]
    fn test_primary_field_decides_visibility() {
        // Company alone does not make an experience record visible.
        let record = ExperienceEntry {
            company: "Acme".to_string(),
            ..Default::default()
        };
        assert!(!record.is_visible());

        let education = EducationEntry {
            institution: "MIT".to_string(),
            ..Default::default()
        };
        assert!(education.is_visible());
        let cert = CertificationEntry {
            issuer: "AWS".to_string(),
            ..Default::default()
        };
        assert!(!cert.is_visible());
    }

    #[test]
    fn test_visible_records_skip_blank_middle_entry() {
        let records = [experience("A"), experience(""), experience("B")];
        let titles: Vec<&str> = visible_records(&records).map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_split_bullets_trims_and_drops_blank_lines() {
        assert_eq!(
            split_bullets(Some("  Line1 \n\n   \nLine2\r\n")),
            vec!["Line1", "Line2"]
        );
        assert!(split_bullets(None).is_empty());
        assert!(split_bullets(Some("\n \n")).is_empty());
    }

    #[test]
    fn test_split_tokens() {
        assert_eq!(
            split_tokens(Some("Rust, Go,, ,SQL ")),
            vec!["Rust", "Go", "SQL"]
        );
        assert!(split_tokens(Some(" , ")).is_empty());
        assert!(split_tokens(None).is_empty());
    }

    #[test]
    fn test_visible_sections_for_default_profile_is_empty() {
        assert!(visible_sections(&ProfileData::default()).is_empty());
    }

    #[test]
    fn test_visible_sections_for_sample_profile_is_complete() {
        assert_eq!(visible_sections(&ProfileData::sample()), SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_comma_only_skills_are_not_visible() {
        let profile = ProfileData {
            skills: Some(" , ,".to_string()),
            languages: Some("English".to_string()),
            ..Default::default()
        };
        assert_eq!(visible_sections(&profile), vec![SectionKind::Languages]);
    }
}
