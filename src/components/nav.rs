use yew::prelude::*;

use crate::content::STUDIO_NAME;
use crate::icons::SafeIcon;
use crate::state::Section;

const LINKS: [Section; 3] = [Section::Projects, Section::Philosophy, Section::Contact];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_jump: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
}

fn jump_buttons(on_jump: &Callback<&'static str>, class: &'static str, focusable: bool) -> Html {
    LINKS
        .iter()
        .filter_map(|section| section.anchor().map(|anchor| (section.label(), anchor)))
        .map(|(label, anchor)| {
            let onclick = {
                let on_jump = on_jump.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_jump.emit(anchor);
                })
            };
            html! {
                <button class={class} tabindex={(!focusable).then_some("-1")} {onclick}>
                    {label}
                </button>
            }
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_jump, on_toggle_menu } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <header class="top-nav">
            <nav class="top-nav__bar container">
                <div class="top-nav__brand">{STUDIO_NAME}</div>

                <div class="top-nav__links">
                    { jump_buttons(on_jump, "top-nav__link", true) }
                </div>

                <button
                    class="top-nav__burger"
                    onclick={toggle_menu}
                    aria-expanded={menu_open.to_string()}
                    aria-label="Toggle menu"
                >
                    <SafeIcon name={if *menu_open { "x" } else { "menu" }} size={28} />
                </button>
            </nav>

            // Stays mounted so closing animates as well as opening; while closed
            // it is hidden from focus and assistive tech.
            <div
                class={classes!("mobile-menu", menu_open.then_some("mobile-menu--open"))}
                aria-hidden={(!*menu_open).to_string()}
            >
                <div class="mobile-menu__inner">
                    { jump_buttons(on_jump, "mobile-menu__link", *menu_open) }
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(250, 250, 249, 0.9);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid #d4d4d8;
                }

                .top-nav__bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }

                .top-nav__brand {
                    font-size: 1.875rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                    color: #18181b;
                }

                .top-nav__links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .top-nav__link,
                .mobile-menu__link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #18181b;
                    transition: color 0.2s;
                }

                .top-nav__link { font-size: 0.875rem; }
                .top-nav__link:hover { color: #52525b; }

                .top-nav__burger {
                    display: none;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    color: #18181b;
                    cursor: pointer;
                }

                .mobile-menu {
                    display: none;
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    visibility: hidden;
                    background: #fafaf9;
                    transition: max-height 0.3s ease, opacity 0.3s ease, visibility 0s linear 0.3s;
                }

                .mobile-menu--open {
                    max-height: 20rem;
                    opacity: 1;
                    visibility: visible;
                    transition-delay: 0s;
                    border-bottom: 1px solid #d4d4d8;
                }

                .mobile-menu__inner {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem 1rem;
                }

                .mobile-menu__link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    font-size: 1.125rem;
                    padding: 0.5rem 0;
                }

                @media (max-width: 767px) {
                    .top-nav__brand { font-size: 1.5rem; }
                    .top-nav__links { display: none; }
                    .top-nav__burger { display: block; }
                    .mobile-menu { display: block; }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(menu_open: bool) -> String {
        yew::ServerRenderer::<Nav>::with_props(move || NavProps {
            menu_open,
            on_jump: Callback::noop(),
            on_toggle_menu: Callback::noop(),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn closed_menu_is_out_of_tab_order() {
        let html = render(false).await;
        assert_eq!(html.matches("tabindex=\"-1\"").count(), LINKS.len());
        // Burger icon plus the collapsed panel.
        assert_eq!(html.matches("aria-hidden=\"true\"").count(), 2);
        assert!(!html.contains("mobile-menu--open"));
    }

    #[tokio::test]
    async fn open_menu_is_focusable() {
        let html = render(true).await;
        assert!(!html.contains("tabindex=\"-1\""));
        assert_eq!(html.matches("aria-hidden=\"true\"").count(), 1);
        assert!(html.contains("mobile-menu--open"));
    }
}
