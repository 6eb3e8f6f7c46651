//! View model for page and section navigation
//!
//! The active [`Page`] has exactly one writer, [`ViewModel::navigate`]. Every
//! navigation yields a [`ScrollPlan`] so the viewport always ends at a
//! deterministic position: the document top, or the requested section.

use crate::types::{NavigationRequest, Page};
use std::time::Duration;
use tracing::debug;

/// Distance kept between the viewport top and a scrolled-to section (fixed navbar height)
pub const SCROLL_OFFSET: f64 = 100.0;

/// Time given to the new page's content to mount before scrolling to a section
pub const SECTION_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Scroll depth after which the home page navbar turns opaque
pub const NAVBAR_SOLID_AFTER: f64 = 20.0;

/// Whether the navbar draws its solid background. Pages other than home
/// have no hero behind the bar, so it is always solid there.
pub fn navbar_is_solid(page: Page, scroll_y: f64) -> bool {
    page != Page::Home || scroll_y > NAVBAR_SOLID_AFTER
}

/// Scrollable document surface
///
/// Implemented over the DOM in the ui crate and by in-memory fakes in tests.
pub trait Viewport {
    /// Document-relative top of the element with the given id, if mounted
    fn section_top(&self, id: &str) -> Option<f64>;

    /// Smooth-scroll the document to the given vertical position
    fn scroll_to(&self, top: f64);
}

/// Scroll side effect requested by a navigation
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollPlan {
    /// Scroll to the document top right away
    Top,
    /// Scroll to a section once `delay` has elapsed
    Section { id: String, delay: Duration },
}

impl ScrollPlan {
    /// How long the caller should wait before calling [`ScrollPlan::apply`]
    pub fn delay(&self) -> Duration {
        match self {
            ScrollPlan::Top => Duration::ZERO,
            ScrollPlan::Section { delay, .. } => *delay,
        }
    }

    /// Perform the scroll, returning the position scrolled to.
    ///
    /// A section that does not exist on the current page is a silent no-op.
    pub fn apply(&self, viewport: &dyn Viewport) -> Option<f64> {
        match self {
            ScrollPlan::Top => {
                viewport.scroll_to(0.0);
                Some(0.0)
            }
            ScrollPlan::Section { id, .. } => match viewport.section_top(id) {
                Some(top) => {
                    let target = top - SCROLL_OFFSET;
                    viewport.scroll_to(target);
                    Some(target)
                }
                None => {
                    debug!(section = %id, "Navigation target not mounted, skipping scroll");
                    None
                }
            },
        }
    }
}

/// Holds the active page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewModel {
    active: Page,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Page {
        self.active
    }

    /// Switch to the requested page and describe where the viewport must land
    pub fn navigate(&mut self, request: impl Into<NavigationRequest>) -> ScrollPlan {
        let NavigationRequest { target, section_id } = request.into();
        if self.active != target {
            debug!(from = %self.active, to = %target, "Switching page");
        }
        self.active = target;

        match section_id {
            Some(id) => ScrollPlan::Section {
                id,
                delay: SECTION_SCROLL_DELAY,
            },
            None => ScrollPlan::Top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Section;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeViewport {
        sections: HashMap<&'static str, f64>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl FakeViewport {
        fn with_section(mut self, id: &'static str, top: f64) -> Self {
            self.sections.insert(id, top);
            self
        }
    }

    impl Viewport for FakeViewport {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }

        fn scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn test_navigate_without_section_scrolls_to_top() {
        let mut vm = ViewModel::new();
        let viewport = FakeViewport::default();

        let plan = vm.navigate(Page::Directory);

        assert_eq!(vm.active(), Page::Directory);
        assert_eq!(plan, ScrollPlan::Top);
        assert_eq!(plan.delay(), Duration::ZERO);
        assert_eq!(plan.apply(&viewport), Some(0.0));
        assert_eq!(*viewport.scrolls.borrow(), vec![0.0]);
    }

    #[test]
    fn test_missing_section_does_not_scroll() {
        let mut vm = ViewModel::new();
        let viewport = FakeViewport::default().with_section("about", 900.0);

        let plan = vm.navigate(NavigationRequest::section(Page::Home, "pricing"));

        assert_eq!(plan.apply(&viewport), None);
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_contact_lands_on_join_community_minus_offset() {
        let mut vm = ViewModel::new();
        let viewport = FakeViewport::default()
            .with_section("about", 800.0)
            .with_section("join-community", 3200.0);

        let plan = vm.navigate(Section::JoinCommunity);

        assert_eq!(vm.active(), Page::Home);
        assert_eq!(plan.delay(), SECTION_SCROLL_DELAY);
        assert_eq!(plan.apply(&viewport), Some(3100.0));
        assert_eq!(*viewport.scrolls.borrow(), vec![3100.0]);
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let mut vm = ViewModel::new();
        let first = vm.navigate(NavigationRequest::section(Page::Home, "gallery"));
        let state = vm;
        let second = vm.navigate(NavigationRequest::section(Page::Home, "gallery"));

        assert_eq!(first, second);
        assert_eq!(vm, state);
    }

    #[test]
    fn test_navbar_solid_threshold() {
        assert!(!navbar_is_solid(Page::Home, 0.0));
        assert!(!navbar_is_solid(Page::Home, 20.0));
        assert!(navbar_is_solid(Page::Home, 21.0));
        assert!(navbar_is_solid(Page::Directory, 0.0));
    }

    #[test]
    fn test_legal_page_navigation() {
        let mut vm = ViewModel::new();
        vm.navigate(Page::Cookies);
        assert_eq!(vm.active(), Page::Cookies);
        assert_eq!(vm.navigate(Page::Home), ScrollPlan::Top);
        assert_eq!(vm.active(), Page::Home);
    }
}
