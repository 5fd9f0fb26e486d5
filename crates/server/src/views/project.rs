//! # Project Views
//!
//! The showcase card, the detail page body, and the not-found page.

use leptos::*;
use portfolio_core::content::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let extra_tech = project.tech_stack.len().saturating_sub(4);
    view! {
        <article class="project-card">
            <div class="card-media">
                <img src=project.thumbnail.clone() alt=project.title.clone()/>
                {project
                    .featured
                    .then(|| view! { <span class="badge badge-featured">"Featured"</span> })}
            </div>
            <div class="card-body">
                <div class="card-head">
                    <h3>{project.title.clone()}</h3>
                    <span class="badge badge-category">{project.category.label()}</span>
                </div>
                <p class="card-description">{project.description.clone()}</p>
                <div class="tag-list">
                    {project
                        .tech_stack
                        .iter()
                        .take(4)
                        .map(|tech| {
                            view! {
                                <span class="tag">{tech.icon.clone()} " " {tech.name.clone()}</span>
                            }
                        })
                        .collect_view()}
                    {(extra_tech > 0)
                        .then(|| view! { <span class="tag tag-muted">{format!("+{extra_tech} more")}</span> })}
                </div>
                <p class="card-date">{project.created_label()}</p>
                <div class="card-actions">
                    <a class="btn btn-primary" href=format!("/projects/{}", project.id)>
                        "View Details"
                    </a>
                    {project
                        .live_url
                        .clone()
                        .map(|url| {
                            view! {
                                <a class="btn btn-outline" href=url rel="noopener noreferrer">
                                    "Live"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectDetail(project: Project) -> impl IntoView {
    view! {
        <article class="project-detail">
            <section class="detail-hero">
                <a class="back-link" href="/#projects">"← Back to Projects"</a>
                <div class="detail-hero-grid">
                    <div>
                        <div class="badge-row">
                            <span class="badge badge-category">{project.category.label()}</span>
                            {project
                                .featured
                                .then(|| view! { <span class="badge badge-featured">"Featured"</span> })}
                        </div>
                        <h1>{project.title.clone()}</h1>
                        <p class="detail-description">{project.description.clone()}</p>
                        <p class="card-date">{project.created_label()}</p>
                        <div class="card-actions">
                            {project
                                .live_url
                                .clone()
                                .map(|url| {
                                    view! {
                                        <a class="btn btn-primary" href=url rel="noopener noreferrer">
                                            "Live Demo"
                                        </a>
                                    }
                                })}
                            {project
                                .source_url
                                .clone()
                                .map(|url| {
                                    view! {
                                        <a class="btn btn-outline" href=url rel="noopener noreferrer">
                                            "View Code"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                    <img class="detail-thumbnail" src=project.thumbnail.clone() alt=project.title.clone()/>
                </div>
            </section>
            <section class="detail-content">
                <div class="detail-main">
                    <div class="detail-block">
                        <h2>"Project Overview"</h2>
                        <p>{project.long_description.clone()}</p>
                    </div>
                    <div class="detail-block">
                        <h2>"Purpose & Inspiration"</h2>
                        <h3>"Purpose"</h3>
                        <p>{project.purpose.clone()}</p>
                        <h3>"Inspiration"</h3>
                        <p>{project.inspiration.clone()}</p>
                    </div>
                    <div class="detail-block">
                        <h2>"Challenges & Solutions"</h2>
                        <div class="challenge-grid">
                            <div>
                                <h3 class="challenge-title">"Challenges Faced"</h3>
                                <ul>
                                    {project
                                        .challenges
                                        .iter()
                                        .map(|challenge| view! { <li>{challenge.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                            <div>
                                <h3 class="solution-title">"Solutions Implemented"</h3>
                                <ul class="solution-list">
                                    {project
                                        .solutions
                                        .iter()
                                        .map(|solution| view! { <li>{solution.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>
                    </div>
                    {(!project.images.is_empty())
                        .then(|| {
                            view! {
                                <div class="detail-block">
                                    <h2>"Gallery"</h2>
                                    <div class="gallery-grid">
                                        {project
                                            .images
                                            .iter()
                                            .enumerate()
                                            .map(|(index, image)| {
                                                view! {
                                                    <img
                                                        src=image.clone()
                                                        alt=format!("{} screenshot {}", project.title, index + 1)
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })}
                </div>
                <aside class="detail-sidebar">
                    <div class="sidebar-card">
                        <h3>"Tech Stack"</h3>
                        <ul class="stack-list">
                            {project
                                .tech_stack
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <li style=format!("border-left-color: {}", tech.color)>
                                            {tech.icon.clone()} " " {tech.name.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="sidebar-card">
                        <h3>"Project Links"</h3>
                        {project
                            .live_url
                            .clone()
                            .map(|url| {
                                view! {
                                    <a href=url rel="noopener noreferrer">"Live Demo"</a>
                                }
                            })}
                        {project
                            .source_url
                            .clone()
                            .map(|url| {
                                view! {
                                    <a href=url rel="noopener noreferrer">"Source Code"</a>
                                }
                            })}
                    </div>
                    <div class="sidebar-card">
                        <h3>"Project Info"</h3>
                        <p>"Category: " {project.category.label()}</p>
                        <p>"Date: " {project.created_label()}</p>
                        <p>"Status: " <span class="status-done">"Completed"</span></p>
                    </div>
                </aside>
            </section>
        </article>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <h2>"Page not found"</h2>
            <p>"The page you're looking for doesn't exist or may have been moved."</p>
            <a class="btn btn-primary" href="/">"Back to Home"</a>
        </section>
    }
}
