//! # Landing Page Sections
//!
//! Hero, about, projects, and contact sections composed by the landing
//! page, in that order.

use leptos::*;
use portfolio_core::content::{Profile, Project};
use portfolio_core::showcase::{Selection, FILTER_OPTIONS};

use super::project::ProjectCard;
use super::ContactFormState;

#[component]
pub fn HeroSection(profile: Profile) -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <p class="hero-kicker">{profile.headline.clone()}</p>
            <h1>"Hi, I'm " <span class="accent">{profile.name.clone()}</span></h1>
            <p class="hero-tagline">
                "I build digital products end to end, from the data model to the last pixel."
            </p>
            <div class="hero-actions">
                <a class="btn btn-primary" href="/#projects">"View My Work"</a>
                <a class="btn btn-outline" href="/#contact">"Get In Touch"</a>
            </div>
            <div class="hero-social">
                {profile
                    .social_links
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.url.clone() rel="noopener noreferrer">
                                {link.name.clone()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(profile: Profile) -> impl IntoView {
    let groups = profile.skills_by_category();
    view! {
        <section id="about" class="section">
            <div class="section-header">
                <h2>"About " <span class="accent">"Me"</span></h2>
                <p>"Get to know my background, skills, and the work that got me here."</p>
            </div>
            <div class="about-grid">
                <div class="about-bio">
                    <h3>"Hello, I'm " {profile.name.clone()}</h3>
                    <p>{profile.bio.clone()}</p>
                    <div class="quick-info">
                        <div class="info-card">
                            <p class="info-label">"Location"</p>
                            <p>{profile.location.clone()}</p>
                        </div>
                        <div class="info-card">
                            <p class="info-label">"Experience"</p>
                            <p>"6+ years"</p>
                        </div>
                    </div>
                    <div class="skills">
                        <h4>"Skills & Technologies"</h4>
                        {groups
                            .into_iter()
                            .map(|(category, skills)| {
                                view! {
                                    <div class="skill-group">
                                        <h5>{category.label()}</h5>
                                        {skills
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="skill-row">
                                                        <span class="skill-name">{skill.name.clone()}</span>
                                                        <div class="skill-meter">
                                                            <div
                                                                class="skill-meter-fill"
                                                                style=format!("width: {}%", skill.level)
                                                            ></div>
                                                        </div>
                                                        <span class="skill-level">{skill.level} "%"</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="about-experience">
                    <h3>"Experience"</h3>
                    <div class="timeline">
                        {profile
                            .experience
                            .iter()
                            .map(|entry| {
                                view! {
                                    <div class="timeline-entry">
                                        <div class="timeline-head">
                                            <h4>{entry.title.clone()}</h4>
                                            <span class="timeline-period">{entry.period.clone()}</span>
                                        </div>
                                        <p class="timeline-company">{entry.company.clone()}</p>
                                        <p>{entry.description.clone()}</p>
                                        <div class="tag-list">
                                            {entry
                                                .technologies
                                                .iter()
                                                .map(|tech| view! { <span class="tag">{tech.clone()}</span> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection(
    selection: Selection,
    featured: Vec<Project>,
    other: Vec<Project>,
) -> impl IntoView {
    let empty = featured.is_empty() && other.is_empty();
    view! {
        <section id="projects" class="section section-alt">
            <div class="section-header">
                <h2>"Featured " <span class="accent">"Projects"</span></h2>
                <p>
                    "A showcase of recent work: full-stack applications, developer tools, "
                    "and the occasional experiment that escaped the lab."
                </p>
            </div>
            <div class="filter-bar">
                {FILTER_OPTIONS
                    .iter()
                    .map(|option| {
                        let class = if *option == selection {
                            "filter-btn active"
                        } else {
                            "filter-btn"
                        };
                        view! {
                            <a class=class href=format!("/?category={}#projects", option.token())>
                                {option.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            {(!featured.is_empty())
                .then(|| {
                    view! {
                        <div class="project-group">
                            <h3 class="group-title">"Featured Work"</h3>
                            <div class="project-grid">
                                {featured
                                    .iter()
                                    .map(|project| view! { <ProjectCard project=project.clone()/> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
            {(!other.is_empty())
                .then(|| {
                    view! {
                        <div class="project-group">
                            <h3 class="group-title">"More Projects"</h3>
                            <div class="project-grid">
                                {other
                                    .iter()
                                    .map(|project| view! { <ProjectCard project=project.clone()/> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
            {empty
                .then(|| {
                    view! {
                        <div class="no-results">
                            <h3>"No projects found"</h3>
                            <p>"Try adjusting your filter criteria."</p>
                        </div>
                    }
                })}
        </section>
    }
}

#[component]
pub fn ContactSection(profile: Profile, form: ContactFormState) -> impl IntoView {
    let github = profile.social("github").cloned();
    view! {
        <section id="contact" class="section">
            <div class="section-header">
                <h2>"Get In " <span class="accent">"Touch"</span></h2>
                <p>
                    "Have a project in mind or want to collaborate? I'd love to hear from you."
                </p>
            </div>
            <div class="contact-grid">
                <div class="contact-info">
                    <h3>"Let's Connect"</h3>
                    <p>
                        "I'm always open to discussing new opportunities, ideas, or "
                        "potential collaborations."
                    </p>
                    <div class="info-card">
                        <p class="info-label">"Email"</p>
                        <a href=format!("mailto:{}", profile.email)>{profile.email.clone()}</a>
                    </div>
                    <div class="info-card">
                        <p class="info-label">"Location"</p>
                        <p>{profile.location.clone()}</p>
                    </div>
                    {github
                        .map(|link| {
                            view! {
                                <div class="info-card">
                                    <p class="info-label">"GitHub"</p>
                                    <a href=link.url rel="noopener noreferrer">
                                        "View my repositories"
                                    </a>
                                </div>
                            }
                        })}
                </div>
                <form class="contact-form" method="post" action="/contact" data-contact-form="true">
                    <div class="form-row">
                        <div class="form-field">
                            <label for="name">"Name *"</label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                placeholder="Your name"
                                value=form.values.name.clone()
                            />
                            {form
                                .errors
                                .name
                                .clone()
                                .map(|message| view! { <p class="field-error">{message}</p> })}
                        </div>
                        <div class="form-field">
                            <label for="email">"Email *"</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                placeholder="your.email@example.com"
                                value=form.values.email.clone()
                            />
                            {form
                                .errors
                                .email
                                .clone()
                                .map(|message| view! { <p class="field-error">{message}</p> })}
                        </div>
                    </div>
                    <div class="form-field">
                        <label for="subject">"Subject *"</label>
                        <input
                            type="text"
                            id="subject"
                            name="subject"
                            placeholder="What's this about?"
                            value=form.values.subject.clone()
                        />
                        {form
                            .errors
                            .subject
                            .clone()
                            .map(|message| view! { <p class="field-error">{message}</p> })}
                    </div>
                    <div class="form-field">
                        <label for="message">"Message *"</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            placeholder="Tell me about your project or idea..."
                        >
                            {form.values.message.clone()}
                        </textarea>
                        {form
                            .errors
                            .message
                            .clone()
                            .map(|message| view! { <p class="field-error">{message}</p> })}
                    </div>
                    <button type="submit" class="btn btn-primary btn-wide">
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}
