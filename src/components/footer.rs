use yew::prelude::*;

use crate::content::contact;
use crate::icons::SafeIcon;
use crate::motion::{FADE_IN_UP, STAGGER};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub node_ref: NodeRef,
    pub visible: bool,
}

fn lines(rows: &[&'static str]) -> Html {
    rows.iter().map(|line| html! { <>{*line}<br /></> }).collect()
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let visible = props.visible;
    let detail_style = |index: usize| STAGGER.child_style(&FADE_IN_UP, visible, index);

    html! {
        <footer id={Section::Contact.anchor()} ref={props.node_ref.clone()} class="footer">
            <div class="container footer__inner">
                <div class="footer__mail" style={FADE_IN_UP.style(visible, 0)}>
                    <a href={contact::mailto()} class="footer__mail-link">
                        {"HELLO@"}<br class="mobile-only" />{"MONOLITH.STUDIO"}
                        <span class="footer__mail-arrow">
                            <SafeIcon name="arrow-up-right" size={48} class={classes!("desktop-only")} />
                            <SafeIcon name="arrow-up-right" size={24} class={classes!("mobile-only")} />
                        </span>
                    </a>
                </div>

                <div class="footer__details" style={STAGGER.container_style(visible)}>
                    <div style={detail_style(0)}>
                        <div class="footer__label">{"Office"}</div>
                        <div class="footer__value">{ lines(contact::OFFICE) }</div>
                    </div>

                    <div style={detail_style(1)}>
                        <div class="footer__label">{"Coordinates"}</div>
                        <div class="footer__value footer__value--mono">{ lines(contact::COORDINATES) }</div>
                    </div>

                    <div style={detail_style(2)}>
                        <div class="footer__label">{"Social"}</div>
                        <div class="footer__social">
                            { for contact::SOCIAL.iter().map(|link| html! {
                                <a href={link.href} class="footer__social-link">{link.label}</a>
                            }) }
                        </div>
                    </div>

                    <div style={detail_style(3)}>
                        <div class="footer__label">{"Legal"}</div>
                        <div class="footer__value">
                            { lines(contact::LEGAL) }
                            <span class="footer__muted">{contact::REGISTRATION}</span>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    border-top: 1px solid #d4d4d8;
                }

                .footer__inner { padding-top: 6rem; padding-bottom: 6rem; }

                .footer__mail { margin-bottom: 6rem; }

                .footer__mail-link {
                    display: block;
                    font-size: 6rem;
                    font-weight: 900;
                    line-height: 1;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                    color: #18181b;
                    text-decoration: none;
                    transition: color 0.2s;
                }

                .footer__mail-link:hover { color: #52525b; }

                .footer__mail-arrow {
                    display: inline-block;
                    margin-left: 1rem;
                    transition: transform 0.2s;
                }

                .footer__mail-link:hover .footer__mail-arrow {
                    transform: translate(0.5rem, -0.5rem);
                }

                .footer__details {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                    padding-top: 3rem;
                    border-top: 1px solid #d4d4d8;
                }

                .footer__label {
                    margin-bottom: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #71717a;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .footer__value {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: #18181b;
                }

                .footer__value--mono { font-family: ui-monospace, monospace; }

                .footer__social {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }

                .footer__social-link {
                    font-size: 0.875rem;
                    color: #18181b;
                    text-decoration: none;
                    transition: color 0.2s;
                }

                .footer__social-link:hover { color: #52525b; }

                .footer__muted { color: #71717a; }

                @media (max-width: 1023px) {
                    .footer__mail-link { font-size: 3.75rem; }
                }

                @media (max-width: 767px) {
                    .footer__inner { padding-top: 4rem; padding-bottom: 4rem; }
                    .footer__mail { margin-bottom: 4rem; }
                    .footer__mail-link { font-size: 2.25rem; }
                    .footer__details { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(visible: bool) -> String {
        yew::ServerRenderer::<Footer>::with_props(move || FooterProps {
            node_ref: NodeRef::default(),
            visible,
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn contact_details_render_line_by_line() {
        let html = render(true).await;
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("href=\"mailto:hello@monolith.studio\""));
        for line in contact::OFFICE.iter().chain(contact::COORDINATES) {
            assert!(html.contains(line), "{}", line);
        }
    }

    #[tokio::test]
    async fn details_grid_fades_in_before_its_tiles() {
        let html = render(false).await;
        let grid = html.find(STAGGER.container_style(false).as_str()).unwrap();
        let first_tile = html.find(STAGGER.child_style(&FADE_IN_UP, false, 0).as_str()).unwrap();
        assert!(grid < first_tile);
    }
}
