//! # Profile Data
//!
//! The static personal dataset: biography, skills, work experience, and
//! social links. Read-only after startup.

use serde::{Deserialize, Serialize};

/// Skill grouping shown in the about section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Mobile,
    Tools,
    Other,
}

impl SkillCategory {
    /// Fixed display order for the about section
    pub fn all() -> [SkillCategory; 5] {
        [
            Self::Frontend,
            Self::Backend,
            Self::Mobile,
            Self::Tools,
            Self::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
            Self::Tools => "Tools",
            Self::Other => "Other",
        }
    }
}

/// A named skill with a 0-100 proficiency level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

/// One entry in the experience timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Link to an external profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// The complete personal dataset bundled with the site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Profile {
    /// Skills grouped by category in fixed display order; empty groups are
    /// dropped so the about section renders nothing for them.
    pub fn skills_by_category(&self) -> Vec<(SkillCategory, Vec<Skill>)> {
        SkillCategory::all()
            .into_iter()
            .filter_map(|category| {
                let group: Vec<Skill> = self
                    .skills
                    .iter()
                    .filter(|skill| skill.category == category)
                    .cloned()
                    .collect();
                if group.is_empty() {
                    None
                } else {
                    Some((category, group))
                }
            })
            .collect()
    }

    /// Look up a social link by its icon key (e.g. "github")
    pub fn social(&self, icon: &str) -> Option<&SocialLink> {
        self.social_links.iter().find(|link| link.icon == icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> Profile {
        Profile {
            name: "Test Person".to_string(),
            headline: "Developer".to_string(),
            bio: "bio".to_string(),
            email: "test@example.com".to_string(),
            location: "Somewhere".to_string(),
            social_links: vec![SocialLink {
                name: "GitHub".to_string(),
                url: "https://github.com/test".to_string(),
                icon: "github".to_string(),
            }],
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    level: 80,
                    category: SkillCategory::Backend,
                },
                Skill {
                    name: "React".to_string(),
                    level: 85,
                    category: SkillCategory::Frontend,
                },
                Skill {
                    name: "TypeScript".to_string(),
                    level: 90,
                    category: SkillCategory::Frontend,
                },
            ],
            experience: vec![],
        }
    }

    #[test]
    fn test_skills_grouped_in_display_order() {
        let groups = test_profile().skills_by_category();
        // Frontend first, then backend; empty categories dropped entirely.
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, SkillCategory::Frontend);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, SkillCategory::Backend);
        assert_eq!(groups[1].1[0].name, "Rust");
    }

    #[test]
    fn test_social_lookup() {
        let profile = test_profile();
        assert_eq!(
            profile.social("github").map(|l| l.url.as_str()),
            Some("https://github.com/test")
        );
        assert!(profile.social("mastodon").is_none());
    }

    #[test]
    fn test_skill_category_serialization() {
        let json = serde_json::to_string(&SkillCategory::Frontend).unwrap();
        assert_eq!(json, "\"frontend\"");
    }
}
