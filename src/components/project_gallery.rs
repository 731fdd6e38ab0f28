//! Project Gallery Component
//!
//! Filter buttons, project cards and the shown/total counters.

use leptos::prelude::*;
use log::debug;

use crate::models::Project;
use crate::seed;
use crate::state::gallery::{GalleryAction, GalleryState, ProjectFilter, FILTER_BUTTONS};

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let icon = format!("fas fa-{}", project.category.icon());
    let category = project.category.as_str();

    view! {
        <div class="project-card" data-category=category>
            <div class="project-image">
                <i class=icon></i>
            </div>
            <div class="project-info">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tech">
                    {project.technologies.into_iter().map(|tech| view! {
                        <span class="tech-tag">{tech}</span>
                    }).collect_view()}
                </div>
                <a href=project.url target="_blank" class="btn btn-small" rel="noopener noreferrer">
                    <i class="fab fa-github"></i>
                    " GitHub"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::new(seed::projects()));

    let render_projects = move |filter: ProjectFilter| {
        gallery.update(|g| g.apply(GalleryAction::SelectFilter(filter)));
        debug!(
            "[GALLERY] Filter {} shows {} projects",
            filter.as_str(),
            gallery.with_untracked(|g| g.shown())
        );
    };

    view! {
        <div class="projects-filter">
            {FILTER_BUTTONS.iter().map(|(value, label)| {
                let filter = ProjectFilter::parse(value);
                let is_active = move || gallery.with(|g| g.filter == filter);
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter={*value}
                        on:click=move |_| render_projects(filter)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>

        <div class="projects-grid" id="projectsGrid">
            {move || gallery.with(|g| g.visible()).into_iter().map(|project| view! {
                <ProjectCard project=project />
            }).collect_view()}
        </div>

        <p class="projects-count">
            "Показано "
            <span id="shownProjects">{move || gallery.with(|g| g.shown())}</span>
            " из "
            <span id="totalProjects">{move || gallery.with(|g| g.total())}</span>
        </p>
    }
}
