use yew::prelude::*;

/// Glyphs the page knows how to draw. `Circle` doubles as the fallback for
/// any name that is not in the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Plus,
    ArrowDownRight,
    Menu,
    X,
    ArrowRight,
    ArrowUpRight,
    Mail,
    MapPin,
    Phone,
    Instagram,
    Twitter,
    Linkedin,
    Circle,
}

impl Icon {
    pub const DEFAULT: Icon = Icon::Circle;

    pub fn resolve(name: &str) -> Icon {
        match name {
            "plus" => Icon::Plus,
            "arrow-down-right" => Icon::ArrowDownRight,
            "menu" => Icon::Menu,
            "x" => Icon::X,
            "arrow-right" => Icon::ArrowRight,
            "arrow-up-right" => Icon::ArrowUpRight,
            "mail" => Icon::Mail,
            "map-pin" => Icon::MapPin,
            "phone" => Icon::Phone,
            "instagram" => Icon::Instagram,
            "twitter" => Icon::Twitter,
            "linkedin" => Icon::Linkedin,
            _ => Icon::DEFAULT,
        }
    }

    /// Stroke paths on a 24x24 view box.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Plus => &["M5 12h14", "M12 5v14"],
            Icon::ArrowDownRight => &["m7 7 10 10", "M17 7v10H7"],
            Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Icon::X => &["M18 6 6 18", "m6 6 12 12"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M15 10a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
            ],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            Icon::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M8 4a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
            ],
            Icon::Circle => &["M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SafeIconProps {
    pub name: AttrValue,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SafeIcon)]
pub fn safe_icon(props: &SafeIconProps) -> Html {
    let icon = Icon::resolve(&props.name);
    let size = props.size.to_string();

    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
