use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-shot latch gating a section's entrance animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    NotYetVisible,
    Visible,
}

impl Visibility {
    /// The only transition. Revealing an already visible section keeps it visible.
    pub fn reveal(self) -> Visibility {
        Visibility::Visible
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// How far inside the viewport edge (in pixels) a section has to travel
/// before it counts as seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealMargin(pub u32);

impl RevealMargin {
    pub const SECTION: RevealMargin = RevealMargin(100);
    pub const FOOTER: RevealMargin = RevealMargin(50);

    /// CSS `rootMargin` value; negative so the viewport shrinks inward.
    pub fn root_margin(self) -> String {
        if self.0 == 0 {
            "0px".to_string()
        } else {
            format!("-{}px", self.0)
        }
    }
}

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(target: &Element, margin: RevealMargin, on_reveal: Callback<()>) -> Option<Observation> {
    let fired = Rc::new(Cell::new(false));

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        if fired.get() {
            return;
        }
        let crossed = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if crossed {
            fired.set(true);
            observer.disconnect();
            on_reveal.emit(());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&margin.root_margin());

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            Some(Observation { observer, _callback: callback })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}

/// Emits `on_reveal` the first time `node` crosses `margin` into the viewport.
///
/// Fires at most once per mount. When the host cannot observe the node the
/// callback fires straight away so the content is never left hidden.
#[hook]
pub fn use_reveal(node: NodeRef, margin: RevealMargin, on_reveal: Callback<()>) {
    use_effect_with_deps(
        move |(node, margin)| {
            let observation = match node.cast::<Element>() {
                Some(target) => {
                    debug!("observing section with rootMargin {}", margin.root_margin());
                    observe_once(&target, *margin, on_reveal.clone())
                }
                None => {
                    warn!("reveal target is not mounted");
                    None
                }
            };
            if observation.is_none() {
                on_reveal.emit(());
            }
            move || drop(observation)
        },
        (node, margin),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        assert_eq!(Visibility::default(), Visibility::NotYetVisible);
        assert!(!Visibility::default().is_visible());
    }

    #[test]
    fn latch_never_reverts() {
        let mut v = Visibility::NotYetVisible.reveal();
        for _ in 0..5 {
            v = v.reveal();
            assert!(v.is_visible());
        }
    }

    #[test]
    fn margins_shrink_the_viewport() {
        assert_eq!(RevealMargin::SECTION.root_margin(), "-100px");
        assert_eq!(RevealMargin::FOOTER.root_margin(), "-50px");
        assert_eq!(RevealMargin(0).root_margin(), "0px");
    }
}
