use crate::layout::pages::{default_page, find_page, NavigationSessions, SessionToken};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// `?page=<key>` query
#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the page shown in the content area
    pub active: RwSignal<String>,
    sessions: StoredValue<NavigationSessions>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(default_page().key.to_string()),
            sessions: StoredValue::new(NavigationSessions::new()),
        }
    }

    /// Show `page`. Navigating to the page already shown reloads it.
    pub fn navigate(&self, page: &str) {
        leptos::logging::log!("🔷 navigate: page='{}'", page);
        if find_page(page).is_none() {
            leptos::logging::log!("ℹ️ '{}' has no controller, loading assets only", page);
        }
        self.active.set(page.to_string());
    }

    pub fn begin_navigation(&self, page: &str) -> SessionToken {
        if let Some(previous) = self
            .sessions
            .with_value(|s| s.current_page().map(str::to_string))
        {
            leptos::logging::log!("📄 leaving '{}' for '{}'", previous, page);
        }
        self.sessions.update_value(|s| {
            s.begin(page);
        });
        self.sessions.with_value(|s| s.current_token())
    }

    /// Runs `f` on the sessions; `false` once the context is disposed.
    pub fn with_sessions(&self, f: impl FnOnce(&NavigationSessions) -> bool) -> bool {
        self.sessions.try_with_value(f).unwrap_or(false)
    }

    pub fn is_current(&self, token: SessionToken) -> bool {
        self.with_sessions(|s| s.is_current(token))
    }

    /// Pick the initial page from `?page=` and keep the query in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: PageQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = query.page.filter(|p| !p.is_empty()) {
            self.navigate(&page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string = serde_qs::to_string(&PageQuery { page: Some(page) })
                .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
