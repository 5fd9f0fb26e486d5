//! # Showcase Filtering
//!
//! Category selection for the project grid. Filtering is a pure function of
//! (project, selection) and preserves dataset order; the featured partition
//! keeps the relative order of the filtered set.

use crate::content::{Project, ProjectCategory};

/// Keywords that mark a web project's description as design-focused
const DESIGN_DESCRIPTION_KEYWORDS: [&str; 2] = ["ui", "design"];

/// Design-tool names matched against tech-stack entries
const DESIGN_TOOL_KEYWORDS: [&str; 3] = ["figma", "sketch", "design"];

/// The category filter selected in the showcase filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every project, in dataset order
    #[default]
    All,
    /// Projects whose category equals the token
    Category(ProjectCategory),
    /// Derived category: design-focused web work, matched by keyword
    /// heuristics over the description and tech stack. Best-effort.
    DesignFocused,
}

impl Selection {
    /// Parse a query token. Unknown tokens fall back to `All` so a stale
    /// or hand-edited URL never errors.
    pub fn from_token(token: &str) -> Self {
        match token {
            "all" => Self::All,
            "uiux" => Self::DesignFocused,
            other => ProjectCategory::from_token(other)
                .map(Self::Category)
                .unwrap_or(Self::All),
        }
    }

    /// Query token for this selection
    pub fn token(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.as_str(),
            Self::DesignFocused => "uiux",
        }
    }

    /// Label shown on the filter button
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(category) => category.label(),
            Self::DesignFocused => "UI/UX",
        }
    }

    /// The category predicate. Pure function of (project, selection).
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == *category,
            Self::DesignFocused => design_focused(project),
        }
    }
}

/// Selections offered in the filter bar, in display order
pub const FILTER_OPTIONS: [Selection; 5] = [
    Selection::All,
    Selection::Category(ProjectCategory::Web),
    Selection::Category(ProjectCategory::Mobile),
    Selection::DesignFocused,
    Selection::Category(ProjectCategory::Other),
];

/// Web projects whose description mentions a design keyword or whose tech
/// stack names a design tool, case-insensitive substring match.
fn design_focused(project: &Project) -> bool {
    if project.category != ProjectCategory::Web {
        return false;
    }
    let description = project.description.to_lowercase();
    if DESIGN_DESCRIPTION_KEYWORDS
        .iter()
        .any(|keyword| description.contains(keyword))
    {
        return true;
    }
    project.tech_stack.iter().any(|tech| {
        let name = tech.name.to_lowercase();
        DESIGN_TOOL_KEYWORDS
            .iter()
            .any(|keyword| name.contains(keyword))
    })
}

/// Ordered subsequence of `projects` matching `selection`. An unmatched
/// category yields an empty list, not an error.
pub fn filter(projects: &[Project], selection: Selection) -> Vec<&Project> {
    let filtered: Vec<&Project> = projects
        .iter()
        .filter(|project| selection.matches(project))
        .collect();
    tracing::debug!(
        selection = selection.token(),
        matched = filtered.len(),
        "showcase filter recomputed"
    );
    filtered
}

/// Split a filtered list into (featured, other) display groups, each
/// preserving the source order of the filtered set.
pub fn partition<'a>(filtered: &[&'a Project]) -> (Vec<&'a Project>, Vec<&'a Project>) {
    filtered.iter().copied().partition(|project| project.featured)
}
