use yew::prelude::*;

use crate::content::hero;
use crate::icons::SafeIcon;
use crate::motion::{FADE_IN_LEFT, FADE_IN_UP};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub node_ref: NodeRef,
    pub visible: bool,
    pub on_jump: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let explore = {
        let on_jump = props.on_jump.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(anchor) = Section::Projects.anchor() {
                on_jump.emit(anchor);
            }
        })
    };

    html! {
        <section ref={props.node_ref.clone()} class="hero">
            <div class="container hero__grid">
                <div class="hero__copy" style={FADE_IN_UP.style(props.visible, 0)}>
                    <div class="hero__label">
                        <span class="eyebrow">{hero::LABEL}</span>
                    </div>
                    <h1 class="hero__title">
                        { for hero::HEADLINE.iter().map(|line| html! { <>{*line}<br /></> }) }
                    </h1>
                    <p class="hero__lead">{hero::LEAD}</p>
                    <button class="hero__cta" onclick={explore}>
                        {"Explore"}
                        <span class="hero__cta-icon">
                            <SafeIcon name="plus" size={20} />
                        </span>
                    </button>
                </div>

                <div class="hero__media" style={FADE_IN_LEFT.style(props.visible, 0)}>
                    <div class="hero__frame">
                        <img src={hero::IMAGE} alt={hero::IMAGE_ALT} />
                        <div class="hero__tint"></div>
                    </div>
                    <div class="hero__overlay">
                        <span>{hero::REFERENCE}</span>
                        <span>{hero::COORDINATES}</span>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    padding-top: 5rem;
                    display: flex;
                    align-items: center;
                }

                .hero__grid {
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 4rem;
                    align-items: center;
                }

                .hero__label { margin-bottom: 1.5rem; }

                .hero__title {
                    font-size: 8rem;
                    font-weight: 900;
                    line-height: 1;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                    color: #18181b;
                    margin: 0 0 2rem;
                }

                .hero__lead {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: #52525b;
                    max-width: 32rem;
                    margin: 0 0 2.5rem;
                }

                .hero__cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 1rem;
                    background: #18181b;
                    color: #fafaf9;
                    border: none;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                    transition: background 0.2s;
                }

                .hero__cta:hover { background: #27272a; }

                .hero__cta-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border: 1px solid rgba(250, 250, 249, 0.3);
                    transition: border-color 0.2s;
                }

                .hero__cta:hover .hero__cta-icon { border-color: #fafaf9; }

                .hero__media { position: relative; }

                .hero__frame {
                    position: relative;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                }

                .hero__frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(1) contrast(1.25);
                }

                .hero__tint {
                    position: absolute;
                    inset: 0;
                    background: rgba(24, 24, 27, 0.1);
                }

                .hero__overlay {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    background: #18181b;
                    color: #fafaf9;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                @media (max-width: 1023px) {
                    .hero__grid { grid-template-columns: 1fr; gap: 2rem; }
                    .hero__title { font-size: 6rem; }
                }

                @media (max-width: 767px) {
                    .hero__title { font-size: 4.5rem; }
                    .hero__lead { font-size: 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(visible: bool) -> String {
        yew::ServerRenderer::<Hero>::with_props(move || HeroProps {
            node_ref: NodeRef::default(),
            visible,
            on_jump: Callback::noop(),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn starts_offset_and_transparent() {
        let html = render(false).await;
        assert!(html.contains("opacity: 0; transform: translate3d(0px, 60px, 0)"));
        assert!(html.contains("opacity: 0; transform: translate3d(60px, 0px, 0)"));
        assert!(!html.contains("opacity: 1;"));
    }

    #[tokio::test]
    async fn settles_once_revealed() {
        let html = render(true).await;
        assert!(!html.contains("opacity: 0;"));
        assert_eq!(html.matches("opacity: 1; transform: translate3d(0, 0, 0)").count(), 2);
    }
}
