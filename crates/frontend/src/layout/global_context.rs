use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActivePage {
    #[default]
    Dashboard,
    Analytics,
    DataImport,
}

impl ActivePage {
    pub const ALL: [ActivePage; 3] = [
        ActivePage::Dashboard,
        ActivePage::Analytics,
        ActivePage::DataImport,
    ];

    /// Value of the `?active=` query parameter
    pub fn key(self) -> &'static str {
        match self {
            ActivePage::Dashboard => "d600_executive",
            ActivePage::Analytics => "d601_analytics",
            ActivePage::DataImport => "u601_data_import",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ActivePage::Dashboard => "Executive Dashboard",
            ActivePage::Analytics => "Advanced Analytics",
            ActivePage::DataImport => "Data Management",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<ActivePage>,
    /// Bumped after an upload that changes dashboard data
    pub data_version: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ActivePage::default()),
            data_version: RwSignal::new(0),
        }
    }

    /// Restores the active page from `?active=` and keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("active").and_then(|k| ActivePage::from_key(k)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active", page.key())])).unwrap_or_default();
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

    pub fn navigate(&self, page: ActivePage) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn notify_data_changed(&self) {
        self.data_version.update(|v| *v += 1);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Global context provided by [`crate::app::App`]
pub fn use_app_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_roundtrip() {
        for page in ActivePage::ALL {
            assert_eq!(ActivePage::from_key(page.key()), Some(page));
        }
        assert_eq!(ActivePage::from_key("settings"), None);
    }
}
