use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use crate::reveal::Visibility;

/// Major page sections. Everything but the hero can be jumped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Projects,
    Philosophy,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Projects,
        Section::Philosophy,
        Section::Contact,
    ];

    /// DOM id used as the scroll-jump target.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Hero => None,
            Section::Projects => Some("projects"),
            Section::Philosophy => Some("philosophy"),
            Section::Contact => Some("contact"),
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == Some(anchor))
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Projects => "Projects",
            Section::Philosophy => "Philosophy",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionFlags {
    pub hero: Visibility,
    pub projects: Visibility,
    pub philosophy: Visibility,
    pub contact: Visibility,
}

impl SectionFlags {
    pub fn get(&self, section: Section) -> Visibility {
        match section {
            Section::Hero => self.hero,
            Section::Projects => self.projects,
            Section::Philosophy => self.philosophy,
            Section::Contact => self.contact,
        }
    }

    fn slot(&mut self, section: Section) -> &mut Visibility {
        match section {
            Section::Hero => &mut self.hero,
            Section::Projects => &mut self.projects,
            Section::Philosophy => &mut self.philosophy,
            Section::Contact => &mut self.contact,
        }
    }
}

/// Transient UI state owned by the top-level view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub hovered_project: Option<&'static str>,
    pub mobile_menu_open: bool,
    pub sections: SectionFlags,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    HoverProject(&'static str),
    ClearHover,
    ToggleMenu,
    CloseMenu,
    Reveal(Section),
    /// A scroll-jump landed on `Section`.
    Jumped(Section),
}

impl UiState {
    pub fn is_visible(&self, section: Section) -> bool {
        self.sections.get(section).is_visible()
    }
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            UiAction::HoverProject(id) => {
                debug!("hover project {}", id);
                next.hovered_project = Some(id);
            }
            UiAction::ClearHover => next.hovered_project = None,
            UiAction::ToggleMenu => next.mobile_menu_open = !next.mobile_menu_open,
            UiAction::CloseMenu => next.mobile_menu_open = false,
            UiAction::Reveal(section) => {
                let slot = next.sections.slot(section);
                if !slot.is_visible() {
                    info!("{} section revealed", section.label());
                }
                *slot = slot.reveal();
            }
            UiAction::Jumped(section) => {
                debug!("jumped to {}", section.label());
                next.mobile_menu_open = false;
            }
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Resolves a scroll-jump request for `anchor`.
///
/// `scroll` performs the actual scroll and reports whether the anchor exists
/// in the document. Unknown or missing anchors yield no action, so the UI
/// state stays exactly as it was.
pub fn jump(anchor: &str, scroll: impl FnOnce(&str) -> bool) -> Option<UiAction> {
    let section = Section::from_anchor(anchor)?;
    scroll(anchor).then_some(UiAction::Jumped(section))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<UiState>, actions: &[UiAction]) -> Rc<UiState> {
        actions
            .iter()
            .cloned()
            .fold(state, |state, action| state.reduce(action))
    }

    #[test]
    fn initial_state() {
        let state = UiState::default();
        assert_eq!(state.hovered_project, None);
        assert!(!state.mobile_menu_open);
        for section in Section::ALL {
            assert!(!state.is_visible(section));
        }
    }

    #[test]
    fn hover_is_last_write_wins() {
        let state = apply(
            Rc::new(UiState::default()),
            &[UiAction::HoverProject("02"), UiAction::HoverProject("04")],
        );
        assert_eq!(state.hovered_project, Some("04"));
        assert_ne!(state.hovered_project, Some("02"));
    }

    #[test]
    fn leaving_then_entering_shows_only_the_new_row() {
        let state = Rc::new(UiState::default()).reduce(UiAction::HoverProject("02"));
        assert_eq!(state.hovered_project, Some("02"));

        let state = state.reduce(UiAction::ClearHover);
        assert_eq!(state.hovered_project, None);

        let state = state.reduce(UiAction::HoverProject("04"));
        let shown: Vec<&str> = crate::content::PROJECTS
            .iter()
            .map(|p| p.id)
            .filter(|id| state.hovered_project == Some(*id))
            .collect();
        assert_eq!(shown, vec!["04"]);
    }

    #[test]
    fn reveal_is_monotonic_and_independent() {
        let state = Rc::new(UiState::default()).reduce(UiAction::Reveal(Section::Hero));
        assert!(state.is_visible(Section::Hero));
        assert!(!state.is_visible(Section::Projects));
        assert!(!state.is_visible(Section::Philosophy));
        assert!(!state.is_visible(Section::Contact));

        // Scrolling in and out again must not change anything.
        let again = state.clone().reduce(UiAction::Reveal(Section::Hero));
        assert!(Rc::ptr_eq(&state, &again));

        let state = apply(
            again,
            &[
                UiAction::HoverProject("01"),
                UiAction::ToggleMenu,
                UiAction::ClearHover,
                UiAction::CloseMenu,
            ],
        );
        assert!(state.is_visible(Section::Hero));
    }

    #[test]
    fn toggle_menu_flips() {
        let state = Rc::new(UiState::default()).reduce(UiAction::ToggleMenu);
        assert!(state.mobile_menu_open);
        let state = state.reduce(UiAction::ToggleMenu);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn click_outside_closes_menu_once() {
        let open = Rc::new(UiState::default()).reduce(UiAction::ToggleMenu);
        let closed = open.reduce(UiAction::CloseMenu);
        assert!(!closed.mobile_menu_open);

        // Further clicks on the page with the menu already closed change nothing.
        let again = closed.clone().reduce(UiAction::CloseMenu);
        assert!(Rc::ptr_eq(&closed, &again));
    }

    #[test]
    fn jump_closes_open_menu() {
        let state = apply(
            Rc::new(UiState::default()),
            &[UiAction::ToggleMenu, UiAction::Jumped(Section::Philosophy)],
        );
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn jump_with_closed_menu_keeps_state() {
        let state = Rc::new(UiState::default()).reduce(UiAction::HoverProject("03"));
        let after = state.clone().reduce(UiAction::Jumped(Section::Contact));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn jump_to_unknown_anchor_is_a_no_op() {
        let mut scrolled = false;
        let action = jump("pricing", |_| {
            scrolled = true;
            true
        });
        assert_eq!(action, None);
        assert!(!scrolled);
    }

    #[test]
    fn jump_to_anchor_missing_from_document_is_a_no_op() {
        let state = Rc::new(UiState::default()).reduce(UiAction::ToggleMenu);
        let action = jump("contact", |_| false);
        assert_eq!(action, None);
        let after = action.into_iter().fold(state.clone(), |s, a| s.reduce(a));
        assert!(Rc::ptr_eq(&state, &after));
        assert!(after.mobile_menu_open);
    }

    #[test]
    fn jump_from_open_menu() {
        let state = Rc::new(UiState::default()).reduce(UiAction::ToggleMenu);
        let action = jump("projects", |anchor| anchor == "projects");
        assert_eq!(action, Some(UiAction::Jumped(Section::Projects)));
        let state = state.reduce(action.unwrap());
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn anchors_round_trip() {
        assert_eq!(Section::from_anchor("projects"), Some(Section::Projects));
        assert_eq!(Section::from_anchor("philosophy"), Some(Section::Philosophy));
        assert_eq!(Section::from_anchor("contact"), Some(Section::Contact));
        assert_eq!(Section::from_anchor("services"), None);
        assert_eq!(Section::from_anchor(""), None);
        assert_eq!(Section::Hero.anchor(), None);
    }

    #[test]
    fn hero_reveals_exactly_once() {
        let hidden = Rc::new(UiState::default());
        assert!(!hidden.is_visible(Section::Hero));

        let shown = hidden.clone().reduce(UiAction::Reveal(Section::Hero));
        assert!(!Rc::ptr_eq(&hidden, &shown));
        assert!(shown.is_visible(Section::Hero));

        let repeated = (0..3).fold(shown.clone(), |s, _| s.reduce(UiAction::Reveal(Section::Hero)));
        assert!(Rc::ptr_eq(&shown, &repeated));
    }
}
