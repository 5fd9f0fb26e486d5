//! # Page Shell
//!
//! The document shell shared by every rendered page: head, navigation,
//! notice banner, and footer.

use chrono::Datelike;
use leptos::*;
use portfolio_core::content::Profile;

/// Transient banner replacing client-side toasts
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

impl Notice {
    pub fn success(text: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.to_string(),
        }
    }

    pub fn failure(text: &str) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.to_string(),
        }
    }
}

#[component]
pub fn PageShell(
    #[prop(into)] title: String,
    profile: Profile,
    notice: Option<Notice>,
    children: Children,
) -> impl IntoView {
    let description = profile.headline.clone();
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=description/>
                <title>{title}</title>
                <link rel="stylesheet" href="/style.css"/>
            </head>
            <body>
                <Navigation profile=profile.clone()/>
                {notice.map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice-success",
                        NoticeKind::Failure => "notice notice-failure",
                    };
                    view! { <div class=class role="status">{notice.text}</div> }
                })}
                <main>{children()}</main>
                <Footer profile=profile/>
                <script src="/app.js"></script>
            </body>
        </html>
    }
}

#[component]
fn Navigation(profile: Profile) -> impl IntoView {
    view! {
        <header class="site-nav">
            <a class="brand" href="/">{profile.name}</a>
            <nav>
                <a href="/#about">"About"</a>
                <a href="/#projects">"Projects"</a>
                <a href="/#contact">"Contact"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer(profile: Profile) -> impl IntoView {
    let year = chrono::Utc::now().year();
    view! {
        <footer class="site-footer">
            <div class="footer-message">
                <h2>"The Journey Never Ends"</h2>
                <p>
                    "Every project here taught me something I didn't know I was missing. "
                    "I'm currently digging into systems programming, local-first sync, and "
                    "making deploys boring enough to forget about."
                </p>
            </div>
            <div class="footer-bottom">
                <p>"Crafted with ♥ by " {profile.name.clone()} " © " {year}</p>
            </div>
        </footer>
    }
}
