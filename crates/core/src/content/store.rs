//! # Content Store
//!
//! Startup-loaded, immutable aggregate of the two bundled datasets. The
//! compiled-in JSON can be overridden with an on-disk content directory.

use super::{Profile, Project};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");
const BUNDLED_PROFILE: &str = include_str!("../../data/profile.json");

/// A dataset integrity violation found by [`ContentStore::verify`]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum IntegrityError {
    #[error("project \"{0}\" has an empty id")]
    EmptyProjectId(String),
    #[error("duplicate project id: {0}")]
    DuplicateProjectId(String),
    #[error("skill \"{name}\" has level {level}, expected 0-100")]
    SkillLevelOutOfRange { name: String, level: u8 },
}

/// Immutable site content shared across all requests
#[derive(Debug, Clone)]
pub struct ContentStore {
    projects: Vec<Project>,
    profile: Profile,
}

impl ContentStore {
    pub fn new(projects: Vec<Project>, profile: Profile) -> Self {
        Self { projects, profile }
    }

    /// Parse the datasets compiled into the binary
    pub fn bundled() -> Result<Self> {
        let projects: Vec<Project> =
            serde_json::from_str(BUNDLED_PROJECTS).context("Failed to parse bundled projects.json")?;
        let profile: Profile =
            serde_json::from_str(BUNDLED_PROFILE).context("Failed to parse bundled profile.json")?;
        tracing::info!(projects = projects.len(), "loaded bundled content");
        Ok(Self::new(projects, profile))
    }

    /// Load `projects.json` and `profile.json` from a content directory
    pub fn load(dir: &Path) -> Result<Self> {
        let projects_path = dir.join("projects.json");
        let content = std::fs::read_to_string(&projects_path)
            .with_context(|| format!("Failed to read {}", projects_path.display()))?;
        let projects: Vec<Project> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", projects_path.display()))?;

        let profile_path = dir.join("profile.json");
        let content = std::fs::read_to_string(&profile_path)
            .with_context(|| format!("Failed to read {}", profile_path.display()))?;
        let profile: Profile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", profile_path.display()))?;

        tracing::info!(projects = projects.len(), dir = %dir.display(), "loaded content directory");
        Ok(Self::new(projects, profile))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Look up a project by identifier. Absent ids yield `None`, never a
    /// partial or default record.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Check the datasets for violations a page could not render around
    pub fn verify(&self) -> Result<(), IntegrityError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.is_empty() {
                return Err(IntegrityError::EmptyProjectId(project.title.clone()));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(IntegrityError::DuplicateProjectId(project.id.clone()));
            }
        }
        for skill in &self.profile.skills {
            if skill.level > 100 {
                return Err(IntegrityError::SkillLevelOutOfRange {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ProjectCategory;

    fn project(id: &str) -> Project {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Project {id}"),
            "description": "d",
            "long_description": "ld",
            "thumbnail": "/assets/images/placeholder-1.svg",
            "tech_stack": [],
            "featured": false,
            "created_at": "2024-01-01",
            "category": "web",
            "inspiration": "i",
            "purpose": "p"
        }))
        .unwrap()
    }

    fn profile() -> Profile {
        serde_json::from_value(serde_json::json!({
            "name": "Test",
            "headline": "Dev",
            "bio": "bio",
            "email": "t@example.com",
            "location": "Here"
        }))
        .unwrap()
    }

    #[test]
    fn test_bundled_datasets_parse_and_verify() {
        let store = ContentStore::bundled().unwrap();
        assert!(!store.projects().is_empty());
        assert!(!store.profile().skills.is_empty());
        store.verify().unwrap();
    }

    #[test]
    fn test_lookup_present_and_absent() {
        let store = ContentStore::new(vec![project("alpha"), project("beta")], profile());
        let found = store.project("beta").unwrap();
        assert_eq!(found.id, "beta");
        assert_eq!(found.category, ProjectCategory::Web);
        assert!(store.project("gamma").is_none());
    }

    #[test]
    fn test_verify_rejects_duplicate_ids() {
        let store = ContentStore::new(vec![project("alpha"), project("alpha")], profile());
        assert_eq!(
            store.verify(),
            Err(IntegrityError::DuplicateProjectId("alpha".to_string()))
        );
    }

    #[test]
    fn test_verify_rejects_out_of_range_skill() {
        let mut p = profile();
        p.skills.push(crate::content::Skill {
            name: "Overflow".to_string(),
            level: 101,
            category: crate::content::SkillCategory::Other,
        });
        let store = ContentStore::new(vec![], p);
        assert!(matches!(
            store.verify(),
            Err(IntegrityError::SkillLevelOutOfRange { level: 101, .. })
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("projects.json"),
            serde_json::to_string(&vec![project("disk")]).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("profile.json"),
            serde_json::to_string(&profile()).unwrap(),
        )
        .unwrap();

        let store = ContentStore::load(dir.path()).unwrap();
        assert!(store.project("disk").is_some());

        let missing = ContentStore::load(&dir.path().join("nope"));
        assert!(missing.is_err());
    }
}
