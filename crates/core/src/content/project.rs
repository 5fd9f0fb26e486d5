//! # Project Records
//!
//! Types for the portfolio's showcase entries. Projects are immutable and
//! sourced entirely from the bundled dataset at startup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category a project is filed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Api,
    Other,
}

impl ProjectCategory {
    /// URL/query token for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Api => "api",
            Self::Other => "other",
        }
    }

    /// Display name for the UI
    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
            Self::Api => "API",
            Self::Other => "Other",
        }
    }

    /// Parse a query token. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "web" => Some(Self::Web),
            "mobile" => Some(Self::Mobile),
            "desktop" => Some(Self::Desktop),
            "api" => Some(Self::Api),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A single named technology annotation attached to a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TechStack {
    pub name: String,
    /// Icon glyph shown next to the name
    pub icon: String,
    /// Display color (CSS value)
    pub color: String,
}

/// One portfolio entry with metadata, links, and narrative fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub tech_stack: Vec<TechStack>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    pub featured: bool,
    pub created_at: NaiveDate,
    pub category: ProjectCategory,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    pub inspiration: String,
    pub purpose: String,
}

impl Project {
    /// Human-readable creation date, e.g. "March 2024"
    pub fn created_label(&self) -> String {
        self.created_at.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tokens_round_trip() {
        for category in [
            ProjectCategory::Web,
            ProjectCategory::Mobile,
            ProjectCategory::Desktop,
            ProjectCategory::Api,
            ProjectCategory::Other,
        ] {
            assert_eq!(ProjectCategory::from_token(category.as_str()), Some(category));
        }
        assert_eq!(ProjectCategory::from_token("uiux"), None);
        assert_eq!(ProjectCategory::from_token(""), None);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&ProjectCategory::Api).unwrap();
        assert_eq!(json, "\"api\"");
        let parsed: ProjectCategory = serde_json::from_str("\"mobile\"").unwrap();
        assert_eq!(parsed, ProjectCategory::Mobile);
    }

    #[test]
    fn test_created_label() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": "demo",
            "title": "Demo",
            "description": "d",
            "long_description": "ld",
            "thumbnail": "/assets/images/placeholder-1.svg",
            "tech_stack": [],
            "featured": false,
            "created_at": "2024-03-15",
            "category": "web",
            "inspiration": "i",
            "purpose": "p"
        }))
        .unwrap();
        assert_eq!(project.created_label(), "March 2024");
        assert!(project.images.is_empty());
        assert!(project.live_url.is_none());
    }
}
