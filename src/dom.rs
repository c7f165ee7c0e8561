use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smoothly scrolls the element with DOM id `anchor` into view.
///
/// Returns `false`, and leaves the page untouched, when there is no such
/// element (or no document at all).
pub fn scroll_to_anchor(anchor: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("no document to scroll");
        return false;
    };
    let Some(element) = document.get_element_by_id(anchor) else {
        debug!("scroll target #{} not found", anchor);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
