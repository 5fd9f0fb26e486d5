//! # Rendered Views
//!
//! Leptos components rendered to static HTML, one render per request.
//! Pages are pure functions of the content store and the request state.

mod home;
mod layout;
mod project;

pub use layout::Notice;

use leptos::*;
use portfolio_core::contact::{ContactSubmission, FieldErrors};
use portfolio_core::content::{ContentStore, Project};
use portfolio_core::showcase::{self, Selection};

use home::{AboutSection, ContactSection, HeroSection, ProjectsSection};
use layout::PageShell;
use project::{NotFound, ProjectDetail};

/// Contact form values and per-field errors carried into a re-render
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub values: ContactSubmission,
    pub errors: FieldErrors,
}

fn render_page<F, V>(page: F) -> String
where
    F: FnOnce() -> V + 'static,
    V: IntoView,
{
    format!("<!DOCTYPE html>{}", ssr::render_to_string(page))
}

/// The landing page: navigation, hero, about, projects, contact, footer
pub fn home_page(
    content: &ContentStore,
    selection: Selection,
    form: ContactFormState,
    notice: Option<Notice>,
) -> String {
    let profile = content.profile().clone();
    let filtered = showcase::filter(content.projects(), selection);
    let (featured, other) = showcase::partition(&filtered);
    let featured: Vec<Project> = featured.into_iter().cloned().collect();
    let other: Vec<Project> = other.into_iter().cloned().collect();
    let title = format!("{} | Developer Portfolio", profile.name);

    render_page(move || {
        view! {
            <PageShell title=title profile=profile.clone() notice=notice>
                <HeroSection profile=profile.clone()/>
                <AboutSection profile=profile.clone()/>
                <ProjectsSection selection=selection featured=featured other=other/>
                <ContactSection profile=profile form=form/>
            </PageShell>
        }
    })
}

/// Detail page for one project
pub fn project_page(content: &ContentStore, project: &Project) -> String {
    let profile = content.profile().clone();
    let project = project.clone();
    let title = format!("{} | {}", project.title, profile.name);

    render_page(move || {
        view! {
            <PageShell title=title profile=profile notice=None>
                <ProjectDetail project=project/>
            </PageShell>
        }
    })
}

/// Generic not-found page, used for unknown project ids and unknown paths
pub fn not_found_page(content: &ContentStore) -> String {
    let profile = content.profile().clone();

    render_page(move || {
        view! {
            <PageShell title="Page Not Found" profile=profile notice=None>
                <NotFound/>
            </PageShell>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::bundled().unwrap()
    }

    #[test]
    fn test_home_page_sections_in_order() {
        let html = home_page(&store(), Selection::All, ContactFormState::default(), None);
        let hero = html.find("id=\"hero\"").unwrap();
        let about = html.find("id=\"about\"").unwrap();
        let projects = html.find("id=\"projects\"").unwrap();
        let contact = html.find("id=\"contact\"").unwrap();
        assert!(hero < about);
        assert!(about < projects);
        assert!(projects < contact);
        assert!(html.contains("Featured Work"));
        assert!(html.contains("More Projects"));
    }

    #[test]
    fn test_empty_filter_renders_no_results_message() {
        // The bundled dataset has no desktop projects.
        let html = home_page(
            &store(),
            Selection::from_token("desktop"),
            ContactFormState::default(),
            None,
        );
        assert!(html.contains("No projects found"));
        assert!(!html.contains("Featured Work"));
    }

    #[test]
    fn test_home_page_retains_form_values_and_errors() {
        let store = store();
        let values = ContactSubmission {
            name: "Ada".to_string(),
            email: "bad".to_string(),
            subject: "short".to_string(),
            message: "short".to_string(),
        };
        let errors = portfolio_core::contact::validate(&values).unwrap_err();
        let html = home_page(
            &store,
            Selection::All,
            ContactFormState { values, errors },
            None,
        );
        assert!(html.contains("value=\"Ada\""));
        assert!(html.contains("Please enter a valid email address"));
        assert!(html.contains("Message must be at least 10 characters"));
    }

    #[test]
    fn test_notice_banner_renders() {
        let html = home_page(
            &store(),
            Selection::All,
            ContactFormState::default(),
            Some(Notice::success("Message sent successfully!")),
        );
        assert!(html.contains("notice-success"));
        assert!(html.contains("Message sent successfully!"));
    }

    #[test]
    fn test_project_page_renders_narrative_fields() {
        let store = store();
        let project = store.project("nimbus-board").unwrap();
        let html = project_page(&store, project);
        assert!(html.contains("Nimbus Board"));
        assert!(html.contains("Project Overview"));
        assert!(html.contains("Challenges &amp; Solutions") || html.contains("Challenges & Solutions"));
        assert!(html.contains("Tech Stack"));
    }

    #[test]
    fn test_not_found_page() {
        let html = not_found_page(&store());
        assert!(html.contains("404"));
        assert!(html.contains("Page not found"));
    }
}
