//! Global application state

use crate::settings::Settings;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::prelude::*;
use rejuvana::navigation::Viewport;
use rejuvana::{NavigationRequest, Page, ViewModel};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Window-backed [`Viewport`]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn section_top(&self, id: &str) -> Option<f64> {
        let element = document().get_element_by_id(id)?;
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        Some(element.get_bounding_client_rect().top() + scroll_y)
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct SiteState {
    /// Active page; written only through [`SiteState::navigate`]
    view: RwSignal<ViewModel>,
    /// Notifies only when the page actually changes
    active: Memo<Page>,
    /// Current window scroll depth, fed by the navbar's scroll listener
    pub scroll_y: RwSignal<f64>,
    pub settings: StoredValue<Settings>,
    /// Section scroll waiting for the new page to mount
    pending_scroll: StoredValue<Option<TimeoutHandle>>,
}

impl SiteState {
    pub fn new() -> Self {
        let view = RwSignal::new(ViewModel::new());
        Self {
            view,
            active: Memo::new(move |_| view.with(|vm| vm.active())),
            scroll_y: RwSignal::new(0.0),
            settings: StoredValue::new(Settings::from_build_env()),
            pending_scroll: StoredValue::new(None),
        }
    }

    /// Active page (tracked)
    pub fn page(&self) -> Page {
        self.active.get()
    }

    pub fn settings(&self) -> Settings {
        self.settings.get_value()
    }

    /// Switch page and schedule the scroll the view model asks for
    pub fn navigate(&self, request: impl Into<NavigationRequest>) {
        let request = request.into();
        let fragment = request.fragment().to_string();

        let Some(plan) = self.view.try_update(|vm| vm.navigate(request)) else {
            return;
        };
        replace_fragment(&fragment);

        // The latest navigation decides where the viewport lands
        self.cancel_pending_scroll();
        let delay = plan.delay();
        if delay.is_zero() {
            plan.apply(&DomViewport);
            return;
        }
        let pending_scroll = self.pending_scroll;
        let scheduled = set_timeout_with_handle(
            move || {
                pending_scroll.try_update_value(|slot| *slot = None);
                plan.apply(&DomViewport);
            },
            delay,
        );
        match scheduled {
            Ok(handle) => self.pending_scroll.set_value(Some(handle)),
            Err(e) => tracing::warn!("Could not schedule section scroll: {:?}", e),
        }
    }

    /// Drop a section scroll that has not fired yet
    pub fn cancel_pending_scroll(&self) {
        if let Some(handle) = self.pending_scroll.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }

    /// Land on whatever the address bar points at
    pub fn navigate_to_location(&self) {
        let hash = window().location().hash().unwrap_or_default();
        self.navigate(NavigationRequest::from_fragment(&hash));
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

/// Mirror the view in the URL without adding a history entry or jumping
fn replace_fragment(fragment: &str) {
    let location = window().location();
    let url = if fragment.is_empty() {
        location.pathname().unwrap_or_else(|_| "/".to_string())
    } else {
        format!("#{}", fragment)
    };
    if let Ok(history) = window().history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
            tracing::debug!("Could not update location: {:?}", e);
        }
    }
}
