use log::warn;
use yew::prelude::*;

use crate::components::{
    footer::Footer, hero::Hero, nav::Nav, philosophy::Philosophy, project_index::ProjectIndex,
};
use crate::dom;
use crate::reveal::{use_reveal, RevealMargin};
use crate::state::{jump, Section, UiAction, UiState};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(UiState::default);

    let hero_ref = use_node_ref();
    let projects_ref = use_node_ref();
    let philosophy_ref = use_node_ref();
    let footer_ref = use_node_ref();

    let reveal = |section: Section| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(UiAction::Reveal(section)))
    };
    use_reveal(hero_ref.clone(), RevealMargin::SECTION, reveal(Section::Hero));
    use_reveal(projects_ref.clone(), RevealMargin::SECTION, reveal(Section::Projects));
    use_reveal(philosophy_ref.clone(), RevealMargin::SECTION, reveal(Section::Philosophy));
    use_reveal(footer_ref.clone(), RevealMargin::FOOTER, reveal(Section::Contact));

    let on_jump = {
        let state = state.clone();
        Callback::from(move |anchor: &'static str| {
            match jump(anchor, dom::scroll_to_anchor) {
                Some(action) => state.dispatch(action),
                None => warn!("ignoring jump to unknown section #{}", anchor),
            }
        })
    };

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(UiAction::ToggleMenu))
    };

    // Any click on the page below the header dismisses the mobile menu.
    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(UiAction::CloseMenu))
    };

    let on_hover = {
        let state = state.clone();
        Callback::from(move |project: Option<&'static str>| match project {
            Some(id) => state.dispatch(UiAction::HoverProject(id)),
            None => state.dispatch(UiAction::ClearHover),
        })
    };

    html! {
        <div class="page">
            <Nav
                menu_open={state.mobile_menu_open}
                on_jump={on_jump.clone()}
                {on_toggle_menu}
            />
            <main onclick={close_menu}>
                <Hero
                    node_ref={hero_ref}
                    visible={state.is_visible(Section::Hero)}
                    {on_jump}
                />
                <ProjectIndex
                    node_ref={projects_ref}
                    visible={state.is_visible(Section::Projects)}
                    hovered={state.hovered_project}
                    {on_hover}
                />
                <Philosophy
                    node_ref={philosophy_ref}
                    visible={state.is_visible(Section::Philosophy)}
                />
                <Footer
                    node_ref={footer_ref}
                    visible={state.is_visible(Section::Contact)}
                />
            </main>

            <style>
                {r#"
                *, *::before, *::after { box-sizing: border-box; }

                html { scroll-behavior: smooth; }

                body {
                    margin: 0;
                    background: #fafaf9;
                    font-family: "Inter", ui-sans-serif, system-ui, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }

                .page {
                    min-height: 100vh;
                    background: #fafaf9;
                    overflow-x: hidden;
                }

                .page ::selection {
                    background: #18181b;
                    color: #fafaf9;
                }

                .container {
                    width: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-left: 1.5rem;
                    padding-right: 1.5rem;
                }

                .eyebrow {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #71717a;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    padding-bottom: 0.25rem;
                    border-bottom: 1px solid #d4d4d8;
                }

                .eyebrow--dark { border-bottom-color: #27272a; }

                .section-title {
                    margin: 1.5rem 0 0;
                    font-size: 4.5rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                    color: #18181b;
                }

                .icon { display: inline-block; vertical-align: middle; }

                .mobile-only { display: none; }

                @media (max-width: 767px) {
                    .container { padding-left: 1rem; padding-right: 1rem; }
                    .section-title { font-size: 3rem; }
                    .mobile-only { display: inline-block; }
                    .desktop-only { display: none; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::FADE_IN_UP;

    #[tokio::test]
    async fn page_exposes_jump_anchors() {
        let html = yew::ServerRenderer::<App>::new().render().await;
        for section in Section::ALL {
            if let Some(anchor) = section.anchor() {
                assert!(html.contains(&format!("id=\"{}\"", anchor)), "#{} missing", anchor);
            }
        }
    }

    #[tokio::test]
    async fn sections_start_hidden() {
        let html = yew::ServerRenderer::<App>::new().render().await;
        assert!(html.contains(FADE_IN_UP.style(false, 0).as_str()));
        assert!(!html.contains(FADE_IN_UP.style(true, 0).as_str()));
    }
}
