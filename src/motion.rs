//! Timing contracts for entrance, preview and menu transitions, rendered as
//! inline styles so the start state and the resting state share one source.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Fast start, long settle.
    Expo,
    Ease,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Expo => "cubic-bezier(0.22, 1, 0.36, 1)",
            Easing::Ease => "ease",
        }
    }
}

/// A one-time reveal: from `offset` (and transparent) to the resting position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub offset_x: i32,
    pub offset_y: i32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

pub const FADE_IN_UP: Entrance = Entrance {
    offset_x: 0,
    offset_y: 60,
    duration_ms: 800,
    delay_ms: 0,
    easing: Easing::Expo,
};

pub const FADE_IN_LEFT: Entrance = Entrance {
    offset_x: 60,
    offset_y: 0,
    duration_ms: 800,
    delay_ms: 200,
    easing: Easing::Expo,
};

pub const FADE: Entrance = Entrance {
    offset_x: 0,
    offset_y: 0,
    duration_ms: 600,
    delay_ms: 600,
    easing: Easing::Ease,
};

impl Entrance {
    pub fn style(&self, visible: bool, extra_delay_ms: u32) -> String {
        let transition = format!(
            "transition: opacity {d}ms {e} {w}ms, transform {d}ms {e} {w}ms;",
            d = self.duration_ms,
            e = self.easing.css(),
            w = self.delay_ms + extra_delay_ms,
        );
        if visible {
            format!("opacity: 1; transform: translate3d(0, 0, 0); {}", transition)
        } else {
            format!(
                "opacity: 0; transform: translate3d({}px, {}px, 0); {}",
                self.offset_x, self.offset_y, transition
            )
        }
    }
}

/// The group container fades in with `parent`; children start
/// `delay_children_ms` after it, then one every `stagger_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub parent: Entrance,
    pub delay_children_ms: u32,
    pub stagger_ms: u32,
}

pub const STAGGER: Stagger = Stagger {
    parent: Entrance {
        offset_x: 0,
        offset_y: 0,
        duration_ms: 300,
        delay_ms: 0,
        easing: Easing::Ease,
    },
    delay_children_ms: 200,
    stagger_ms: 100,
};

impl Stagger {
    pub fn container_style(&self, visible: bool) -> String {
        self.parent.style(visible, 0)
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_children_ms + self.stagger_ms * index as u32
    }

    /// Inline style for child `index` of a staggered group using `entrance`.
    pub fn child_style(&self, entrance: &Entrance, visible: bool, index: usize) -> String {
        entrance.style(visible, self.delay_for(index))
    }
}

pub const PREVIEW_DURATION_MS: u32 = 300;

/// Floating project preview: scales and slides in while its row is hovered,
/// reverses on leave.
pub fn preview_style(shown: bool) -> String {
    let transition = format!(
        "transition: opacity {d}ms ease, transform {d}ms ease;",
        d = PREVIEW_DURATION_MS
    );
    if shown {
        format!("opacity: 1; transform: translate(0, -50%) scale(1); {}", transition)
    } else {
        format!("opacity: 0; transform: translate(20px, -50%) scale(0.9); {}", transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_is_offset_and_transparent() {
        let style = FADE_IN_UP.style(false, 0);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translate3d(0px, 60px, 0)"));
    }

    #[test]
    fn resting_state_has_no_offset() {
        let style = FADE_IN_LEFT.style(true, 0);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("translate3d(0, 0, 0)"));
        assert!(style.contains("800ms cubic-bezier(0.22, 1, 0.36, 1) 200ms"));
    }

    #[test]
    fn stagger_offsets_each_child() {
        assert_eq!(STAGGER.delay_for(0), 200);
        assert_eq!(STAGGER.delay_for(1), 300);
        assert_eq!(STAGGER.delay_for(4), 600);
        assert!(STAGGER.child_style(&FADE_IN_UP, true, 2).contains(" 400ms"));
    }

    #[test]
    fn container_fades_before_children() {
        let hidden = STAGGER.container_style(false);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translate3d(0px, 0px, 0)"));
        assert!(STAGGER.container_style(true).contains("opacity 300ms ease 0ms"));
        assert!(STAGGER.parent.delay_ms < STAGGER.delay_for(0));
    }

    #[test]
    fn preview_scales_in() {
        assert!(preview_style(true).contains("scale(1)"));
        assert!(preview_style(false).contains("scale(0.9)"));
        assert!(preview_style(false).contains("opacity: 0"));
    }
}
