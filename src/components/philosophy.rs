use yew::prelude::*;

use crate::content::manifesto;
use crate::motion::{FADE_IN_UP, STAGGER};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct PhilosophyProps {
    pub node_ref: NodeRef,
    pub visible: bool,
}

#[function_component(Philosophy)]
pub fn philosophy(props: &PhilosophyProps) -> Html {
    let visible = props.visible;

    html! {
        <section id={Section::Philosophy.anchor()} ref={props.node_ref.clone()} class="philosophy">
            <div class="container philosophy__grid">
                <div class="philosophy__heading" style={FADE_IN_UP.style(visible, 0)}>
                    <span class="eyebrow eyebrow--dark">{manifesto::LABEL}</span>
                    <h2 class="section-title philosophy__title">
                        { for manifesto::TITLE.iter().map(|line| html! { <>{*line}<br /></> }) }
                    </h2>
                </div>

                <div class="philosophy__body" style={STAGGER.container_style(visible)}>
                    <div class="philosophy__text" style={STAGGER.child_style(&FADE_IN_UP, visible, 0)}>
                        <p class="philosophy__lead">{manifesto::LEAD}</p>
                        { for manifesto::BODY.iter().map(|paragraph| html! {
                            <p class="philosophy__paragraph">{*paragraph}</p>
                        }) }
                    </div>

                    <div class="philosophy__stats" style={STAGGER.child_style(&FADE_IN_UP, visible, 1)}>
                        { for manifesto::STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat__value">{stat.value}</div>
                                <div class="stat__label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .philosophy {
                    min-height: 100vh;
                    padding: 8rem 0;
                    background: #09090b;
                }

                .philosophy__grid {
                    display: grid;
                    grid-template-columns: 4fr 8fr;
                    gap: 6rem;
                }

                .philosophy__title {
                    color: #e7e5e4;
                    line-height: 1;
                }

                .philosophy__body {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .philosophy__text {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .philosophy__text p { margin: 0; }

                .philosophy__lead {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: #e7e5e4;
                }

                .philosophy__paragraph {
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: #a8a29e;
                }

                .philosophy__stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid #27272a;
                }

                .stat__value {
                    font-size: 2.25rem;
                    font-weight: 900;
                    color: #e7e5e4;
                }

                .stat__label {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: #71717a;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }

                @media (max-width: 1023px) {
                    .philosophy__grid { grid-template-columns: 1fr; gap: 3rem; }
                }

                @media (max-width: 767px) {
                    .philosophy { padding: 6rem 0; }
                    .philosophy__lead { font-size: 1.25rem; }
                    .philosophy__stats { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manifesto_and_stats_stagger_inside_a_fading_group() {
        let html = yew::ServerRenderer::<Philosophy>::with_props(|| PhilosophyProps {
            node_ref: NodeRef::default(),
            visible: false,
        })
        .render()
        .await;

        assert!(html.contains("id=\"philosophy\""));
        let group = html.find(STAGGER.container_style(false).as_str()).unwrap();
        let text = html.find(STAGGER.child_style(&FADE_IN_UP, false, 0).as_str()).unwrap();
        let stats = html.find(STAGGER.child_style(&FADE_IN_UP, false, 1).as_str()).unwrap();
        assert!(group < text && text < stats);
        for stat in manifesto::STATS {
            assert!(html.contains(stat.label));
        }
    }
}
