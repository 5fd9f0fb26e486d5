//! # Page Handlers
//!
//! Route handlers for the rendered pages and the contact form flow.

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use portfolio_core::contact::{self, ContactSubmission, FieldErrors};
use portfolio_core::showcase::Selection;
use serde::Deserialize;

use crate::views::{self, ContactFormState, Notice};
use crate::SharedState;

/// Query parameters accepted by the landing page
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Showcase filter token, e.g. "web" or "uiux"
    pub category: Option<String>,
    /// Set by the post-submit redirect to show the success notice
    pub sent: Option<u8>,
}

/// Landing page. The showcase is recomputed from the category token on
/// every request.
pub async fn home(
    State(state): State<SharedState>,
    Query(query): Query<HomeQuery>,
) -> Html<String> {
    let selection = query
        .category
        .as_deref()
        .map(Selection::from_token)
        .unwrap_or_default();
    let notice = (query.sent == Some(1))
        .then(|| Notice::success("Message sent successfully! I'll get back to you soon."));

    Html(views::home_page(
        &state.content,
        selection,
        ContactFormState::default(),
        notice,
    ))
}

/// Detail page keyed by project id. Absent ids get the not-found page,
/// never a partial record.
pub async fn project_detail(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match state.content.project(&id) {
        Some(project) => Html(views::project_page(&state.content, project)).into_response(),
        None => not_found(&state),
    }
}

/// Shared not-found response for unknown project ids and unknown paths
pub fn not_found(state: &SharedState) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(views::not_found_page(&state.content)),
    )
        .into_response()
}

/// Contact form submission. Validation failure re-renders the page with
/// per-field errors and the entered data retained; a successful delivery
/// redirects so a refresh cannot resubmit, and the form resets.
pub async fn submit_contact(
    State(state): State<SharedState>,
    Form(form): Form<ContactSubmission>,
) -> Response {
    let validated = match contact::validate(&form) {
        Ok(validated) => validated,
        Err(errors) => {
            let page = views::home_page(
                &state.content,
                Selection::All,
                ContactFormState {
                    values: form,
                    errors,
                },
                None,
            );
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response();
        }
    };

    match contact::deliver(&validated).await {
        Ok(()) => Redirect::to("/?sent=1#contact").into_response(),
        Err(err) => {
            eprintln!("Contact delivery failed: {err}");
            // Keep the entered data so the user can retry.
            let page = views::home_page(
                &state.content,
                Selection::All,
                ContactFormState {
                    values: form,
                    errors: FieldErrors::default(),
                },
                Some(Notice::failure("Failed to send message. Please try again.")),
            );
            Html(page).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppState;
    use portfolio_core::content::ContentStore;
    use std::sync::Arc;

    fn state() -> SharedState {
        Arc::new(AppState {
            content: ContentStore::bundled().unwrap(),
        })
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_renders_profile_and_projects() {
        let response = home(State(state()), Query(HomeQuery::default()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Dana Reyes"));
        assert!(body.contains("Nimbus Board"));
    }

    #[tokio::test]
    async fn test_home_success_notice_from_query() {
        let query = HomeQuery {
            category: None,
            sent: Some(1),
        };
        let response = home(State(state()), Query(query)).await.into_response();
        let body = body_string(response).await;
        assert!(body.contains("notice-success"));
    }

    #[tokio::test]
    async fn test_detail_known_and_unknown_id() {
        let response = project_detail(State(state()), Path("trailmate".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("TrailMate"));

        let response = project_detail(State(state()), Path("missing".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_string(response).await;
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_contact_validation_failure_retains_input() {
        let form = ContactSubmission {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            subject: "Hi".to_string(),
            message: "Too short".to_string(),
        };
        let response = submit_contact(State(state()), Form(form)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(body.contains("value=\"Ada\""));
        assert!(body.contains("Please enter a valid email address"));
        assert!(body.contains("Subject must be at least 5 characters"));
    }

    #[tokio::test]
    async fn test_contact_success_redirects() {
        let form = ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "I have a project you might enjoy.".to_string(),
        };
        let response = submit_contact(State(state()), Form(form)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(axum::http::header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(location, "/?sent=1#contact");
    }
}
