use serde::{Deserialize, Serialize};

/// The full resume record handed to the engine for one render pass.
///
/// Every repeatable block defaults to a single blank record so callers can
/// submit a partially filled form without special-casing missing arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default = "one_blank")]
    pub education: Vec<EducationEntry>,
    #[serde(default = "one_blank")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default = "one_blank")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default = "one_blank")]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default = "one_blank")]
    pub awards: Vec<AwardEntry>,
    /// Comma-separated skill tokens.
    #[serde(default)]
    pub skills: Option<String>,
    /// Comma-separated language tokens.
    #[serde(default)]
    pub languages: Option<String>,
}

fn one_blank<T: Default>() -> Vec<T> {
    vec![T::default()]
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            education: one_blank(),
            experience: one_blank(),
            projects: one_blank(),
            certifications: one_blank(),
            awards: one_blank(),
            skills: None,
            languages: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub profession: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub links: Vec<Link>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    /// Text shown for the link: the label when present, otherwise the URL.
    pub fn display_text(&self) -> Option<&str> {
        [self.label.trim(), self.url.trim()]
            .into_iter()
            .find(|s| !s.is_empty())
    }

    /// Link target, when one is set.
    pub fn href(&self) -> Option<&str> {
        Some(self.url.trim()).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub dates: String,
    pub grade: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub link: String,
    pub technologies: String,
    pub dates: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub description: Option<String>,
}

impl ProfileData {
    /// A fully populated profile used to render template thumbnails.
    pub fn sample() -> Self {
        Self {
            personal: PersonalInfo {
                name: Some("Alex Morgan".to_string()),
                profession: Some("Senior Software Engineer".to_string()),
                email: Some("alex.morgan@example.com".to_string()),
                phone: Some("+1 555 0100".to_string()),
                location: Some("Lisbon, Portugal".to_string()),
                links: vec![
                    Link {
                        label: "GitHub".to_string(),
                        url: "https://github.com/alexmorgan".to_string(),
                    },
                    Link {
                        label: "Portfolio".to_string(),
                        url: "https://alexmorgan.dev".to_string(),
                    },
                ],
                summary: Some(
                    "Backend engineer with eight years of experience building \
                     reliable distributed systems and developer tooling."
                        .to_string(),
                ),
            },
            education: vec![EducationEntry {
                institution: "University of Porto".to_string(),
                degree: "MSc".to_string(),
                field_of_study: "Computer Science".to_string(),
                dates: "2012 - 2014".to_string(),
                grade: "17/20".to_string(),
                description: None,
            }],
            experience: vec![
                ExperienceEntry {
                    title: "Senior Software Engineer".to_string(),
                    company: "Northwind Labs".to_string(),
                    location: "Remote".to_string(),
                    dates: "2019 - Present".to_string(),
                    description: Some(
                        "Led the migration of the billing platform to an event-driven design\n\
                         Cut p99 API latency by 40% through query and cache redesign\n\
                         Mentored five engineers across two teams"
                            .to_string(),
                    ),
                },
                ExperienceEntry {
                    title: "Software Engineer".to_string(),
                    company: "Contoso".to_string(),
                    location: "Porto".to_string(),
                    dates: "2014 - 2019".to_string(),
                    description: Some(
                        "Built the internal deployment pipeline used by 30 services\n\
                         Owned on-call tooling and incident reviews"
                            .to_string(),
                    ),
                },
            ],
            projects: vec![ProjectEntry {
                title: "tidewatch".to_string(),
                link: "https://github.com/alexmorgan/tidewatch".to_string(),
                technologies: "Rust, Tokio, PostgreSQL".to_string(),
                dates: "2022".to_string(),
                description: Some(
                    "Open-source uptime monitor with sub-second alerting".to_string(),
                ),
            }],
            certifications: vec![CertificationEntry {
                name: "AWS Certified Solutions Architect".to_string(),
                issuer: "Amazon Web Services".to_string(),
                date: "2021".to_string(),
                credential_url: String::new(),
            }],
            awards: vec![AwardEntry {
                name: "Engineering Excellence Award".to_string(),
                issuer: "Northwind Labs".to_string(),
                date: "2023".to_string(),
                description: None,
            }],
            skills: Some("Rust, Go, PostgreSQL, Kafka, Kubernetes, Terraform".to_string()),
            languages: Some("English, Portuguese, Spanish".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_blocks_default_to_one_blank_record() {
        let profile: ProfileData = serde_json::from_str(r#"{"personal": {"name": "Ada"}}"#)
            .expect("minimal profile should deserialize");
        assert_eq!(profile.personal.name.as_deref(), Some("Ada"));
        assert_eq!(profile.experience, vec![ExperienceEntry::default()]);
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.awards.len(), 1);
        assert!(profile.skills.is_none());
    }

    #[test]
    fn test_default_profile_keeps_one_slot_per_block() {
        let profile = ProfileData::default();
        assert_eq!(profile.projects.len(), 1);
        assert_eq!(profile.certifications.len(), 1);
    }

    #[test]
    fn test_record_fields_default_when_absent() {
        let profile: ProfileData =
            serde_json::from_str(r#"{"experience": [{"title": "Engineer"}]}"#).unwrap();
        assert_eq!(profile.experience[0].title, "Engineer");
        assert!(profile.experience[0].company.is_empty());
        assert!(profile.experience[0].description.is_none());
    }

    #[test]
    fn test_link_display_text_prefers_label() {
        let link = Link {
            label: "  ".to_string(),
            url: "https://example.com".to_string(),
        };
        assert_eq!(link.display_text(), Some("https://example.com"));
        assert_eq!(Link::default().display_text(), None);
    }

    #[test]
    fn test_link_href_is_trimmed_url() {
        let link = Link {
            label: "GitHub".to_string(),
            url: " https://github.com/a ".to_string(),
        };
        assert_eq!(link.href(), Some("https://github.com/a"));
        assert_eq!(Link::default().href(), None);
    }
}
