//! Content model for the portfolio
//!
//! Mirrors the site content schema: a profile plus optional collections
//! for projects, career history, education and certifications. All
//! collections default to empty so a sparse content file still loads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Contact and social links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub phone: Option<String>,
}

impl Links {
    /// Label/value pairs for every link that is present
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::new();
        if let Some(email) = &self.email {
            entries.push(("Email", email.as_str()));
        }
        if let Some(linkedin) = &self.linkedin {
            entries.push(("LinkedIn", linkedin.as_str()));
        }
        if let Some(github) = &self.github {
            entries.push(("GitHub", github.as_str()));
        }
        if let Some(portfolio) = &self.portfolio {
            entries.push(("Portfolio", portfolio.as_str()));
        }
        if let Some(phone) = &self.phone {
            entries.push(("Phone", phone.as_str()));
        }
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// A single skill with a 0-100 proficiency level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// Skill groups as presented on the skills section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGroups {
    #[serde(default)]
    pub languages: Vec<Skill>,
    #[serde(default)]
    pub platforms: Vec<Skill>,
    #[serde(default)]
    pub design: Vec<Skill>,
}

impl SkillGroups {
    /// Group title/items pairs, skipping empty groups
    pub fn groups(&self) -> Vec<(&'static str, &[Skill])> {
        let mut groups: Vec<(&'static str, &[Skill])> = Vec::new();
        if !self.languages.is_empty() {
            groups.push(("Languages & Frameworks", &self.languages));
        }
        if !self.platforms.is_empty() {
            groups.push(("Platforms & Tools", &self.platforms));
        }
        if !self.design.is_empty() {
            groups.push(("Design", &self.design));
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups().is_empty()
    }
}

/// Where and how the person currently works
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub base: String,
    #[serde(default)]
    pub work_regions: Vec<String>,
    pub status: String,
}

/// The person behind the portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    pub long_summary: Option<String>,
    pub location: Option<String>,
    pub availability: Option<Availability>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub social: Links,
    #[serde(default)]
    pub contacts: Links,
    /// Spoken languages: name -> proficiency
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub skills: SkillGroups,
}

/// Outbound links for a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub code: Option<String>,
    pub demo: Option<String>,
}

/// A portfolio project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub impact: Option<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

/// One role in the career timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
    pub period: String,
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// A degree or diploma
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub years: String,
}

/// A professional certification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: u16,
    pub url: Option<String>,
}

/// The complete portfolio content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteData {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Career>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_profile_deserializes() {
        let json = r#"{"profile":{"name":"Ada","title":"Engineer"}}"#;
        let data: SiteData = serde_json::from_str(json).unwrap();

        assert_eq!(data.profile.name, "Ada");
        assert!(data.projects.is_empty());
        assert!(data.profile.skills.is_empty());
        assert!(data.profile.contacts.is_empty());
    }

    #[test]
    fn links_entries_skip_absent_fields() {
        let links = Links {
            email: Some("ada@example.com".into()),
            github: Some("https://github.com/ada".into()),
            ..Default::default()
        };

        let entries = links.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("Email", "ada@example.com"));
    }

    #[test]
    fn skill_groups_skip_empty_groups() {
        let skills = SkillGroups {
            languages: vec![Skill { name: "Rust".into(), level: 90 }],
            ..Default::default()
        };

        let groups = skills.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Languages & Frameworks");
    }

    #[test]
    fn full_schema_deserializes() {
        let json = r#"{
            "profile": {
                "name": "Ada",
                "title": "Engineer",
                "summary": "Builds things.",
                "tags": ["systems", "tui"],
                "languages": {"English": "Native"},
                "skills": {"languages": [{"name": "Rust", "level": 95}]},
                "contacts": {"email": "ada@example.com"}
            },
            "projects": [{"id": "p1", "title": "Folio", "summary": "A TUI."}],
            "experience": [{"period": "2020-2024", "role": "Lead", "company": "Acme"}],
            "education": [{"degree": "BSc", "institution": "MIT", "years": "2012-2016"}],
            "certifications": [{"name": "Cert", "issuer": "Org", "year": 2021}]
        }"#;

        let data: SiteData = serde_json::from_str(json).unwrap();
        assert_eq!(data.projects.len(), 1);
        assert_eq!(data.experience[0].company, "Acme");
        assert_eq!(data.certifications[0].year, 2021);
    }
}
