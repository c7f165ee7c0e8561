use yew::prelude::*;

use crate::content::{Project, PROJECTS};
use crate::icons::SafeIcon;
use crate::motion::{preview_style, FADE, FADE_IN_UP, STAGGER};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct ProjectRowProps {
    pub project: &'static Project,
    pub index: usize,
    pub visible: bool,
    pub hovered: bool,
    pub on_hover: Callback<Option<&'static str>>,
}

#[function_component(ProjectRow)]
pub fn project_row(props: &ProjectRowProps) -> Html {
    let project = props.project;

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(project.id)))
    };
    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };

    html! {
        <div
            class={classes!("project-row", props.hovered.then_some("project-row--hovered"))}
            style={STAGGER.child_style(&FADE_IN_UP, props.visible, props.index)}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="project-row__body">
                <div class="project-row__name">
                    <span class="project-row__id">{format!("{}.", project.id)}</span>
                    <h3 class="project-row__title">{project.title}</h3>
                </div>
                <div class="project-row__meta">
                    <span class="project-row__location">{project.location}</span>
                    <span class="project-row__year">{project.year}</span>
                    <div class="project-row__arrow">
                        <SafeIcon name="arrow-up-right" size={16} />
                    </div>
                </div>
            </div>

            <div
                class="project-row__preview"
                style={preview_style(props.hovered)}
                aria-hidden={(!props.hovered).to_string()}
            >
                <div class="project-row__preview-frame">
                    <img src={project.image} alt={project.title} loading="lazy" />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectIndexProps {
    pub node_ref: NodeRef,
    pub visible: bool,
    pub hovered: Option<&'static str>,
    pub on_hover: Callback<Option<&'static str>>,
}

#[function_component(ProjectIndex)]
pub fn project_index(props: &ProjectIndexProps) -> Html {
    html! {
        <section id={Section::Projects.anchor()} ref={props.node_ref.clone()} class="projects">
            <div class="container">
                <div class="projects__header" style={FADE_IN_UP.style(props.visible, 0)}>
                    <span class="eyebrow">{"Selected Works"}</span>
                    <h2 class="section-title">{"PROJECT"}<br />{"INDEX"}</h2>
                </div>

                <div class="projects__list" style={STAGGER.container_style(props.visible)}>
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectRow
                            key={project.id}
                            {project}
                            {index}
                            visible={props.visible}
                            hovered={props.hovered == Some(project.id)}
                            on_hover={props.on_hover.clone()}
                        />
                    }) }
                </div>

                <div class="projects__more" style={FADE.style(props.visible, 0)}>
                    <button class="projects__more-link">
                        {"View All Projects"}
                        <span class="projects__more-icon">
                            <SafeIcon name="arrow-right" size={18} />
                        </span>
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .projects {
                    min-height: 100vh;
                    padding: 8rem 0;
                }

                .projects__header { margin-bottom: 6rem; }

                .project-row {
                    position: relative;
                    border-bottom: 1px solid #d4d4d8;
                    cursor: pointer;
                }

                .project-row__body {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 3rem 0;
                    transition: padding-left 0.5s;
                }

                .project-row--hovered .project-row__body { padding-left: 2rem; }

                .project-row__name {
                    display: flex;
                    align-items: baseline;
                    gap: 2rem;
                }

                .project-row__id,
                .project-row__year {
                    font-family: ui-monospace, monospace;
                    color: #a1a1aa;
                }

                .project-row__title {
                    margin: 0;
                    font-size: 3rem;
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    text-transform: uppercase;
                    color: #18181b;
                }

                .project-row__meta {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }

                .project-row__location {
                    font-size: 0.875rem;
                    color: #71717a;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }

                .project-row__year { font-size: 0.875rem; }

                .project-row__arrow,
                .projects__more-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid #d4d4d8;
                    color: #18181b;
                    transition: all 0.2s;
                }

                .project-row--hovered .project-row__arrow {
                    background: #18181b;
                    border-color: #18181b;
                    color: #fafaf9;
                }

                .project-row__preview {
                    position: absolute;
                    right: 12rem;
                    top: 50%;
                    z-index: 20;
                    pointer-events: none;
                }

                .project-row__preview-frame {
                    width: 20rem;
                    height: 12rem;
                    overflow: hidden;
                    border: 1px solid #d4d4d8;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    filter: grayscale(1);
                }

                .project-row__preview-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .projects__more {
                    margin-top: 4rem;
                    display: flex;
                    justify-content: flex-end;
                }

                .projects__more-link {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #18181b;
                }

                .projects__more-link:hover .projects__more-icon {
                    background: #18181b;
                    border-color: #18181b;
                    color: #fafaf9;
                }

                @media (max-width: 1023px) {
                    .project-row__preview { display: none; }
                    .project-row__title { font-size: 2.25rem; }
                }

                @media (max-width: 767px) {
                    .projects { padding: 6rem 0; }
                    .projects__header { margin-bottom: 4rem; }
                    .project-row__body { padding: 2rem 0; }
                    .project-row--hovered .project-row__body { padding-left: 1rem; }
                    .project-row__name { gap: 1rem; }
                    .project-row__title { font-size: 1.5rem; }
                    .project-row__meta { gap: 1rem; }
                    .project-row__location { display: none; }
                    .project-row__arrow { width: 2rem; height: 2rem; }
                }
                "#}
            </style>
        </section>
    }
}
