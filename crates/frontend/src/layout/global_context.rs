use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Tab key carried by the `?active=` query string.
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|key| !key.is_empty()).cloned()
}

/// `?active=<key>`
pub fn query_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active".to_string(), key.to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Opens the tab named in the URL, then keeps the URL in sync with the
    /// active tab.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_query(&search) {
            match tab_label_for_key(&active_key) {
                "" => log::warn!("unknown tab key in URL: {}", active_key),
                title => self.open_tab(&active_key, title),
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = query_for_active(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                });
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closing the active tab activates the last remaining one.
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ctx: &AppGlobalContext) -> Vec<String> {
        ctx.opened
            .get_untracked()
            .into_iter()
            .map(|t| t.key)
            .collect()
    }

    #[test]
    fn test_open_existing_tab_only_activates() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new();

        ctx.open_tab("a001_supplier", "Suppliers");
        ctx.open_tab("a003_bank", "Banks");
        ctx.open_tab("a001_supplier", "Suppliers");

        assert_eq!(keys(&ctx), vec!["a001_supplier", "a003_bank"]);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a001_supplier"));
    }

    #[test]
    fn test_close_active_tab_falls_back_to_last() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new();

        ctx.open_tab("a001_supplier", "Suppliers");
        ctx.open_tab("a003_bank", "Banks");
        ctx.open_tab("a009_arrival", "Arrivals");
        ctx.activate_tab("a003_bank");

        ctx.close_tab("a001_supplier");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a003_bank"));

        ctx.close_tab("a003_bank");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a009_arrival"));

        ctx.close_tab("a009_arrival");
        assert!(keys(&ctx).is_empty());
        assert_eq!(ctx.active.get_untracked(), None);
    }

    #[test]
    fn test_active_query_round_trip() {
        assert_eq!(active_from_query("?active=a009_arrival_planning").as_deref(), Some("a009_arrival_planning"));
        assert_eq!(active_from_query(&query_for_active("a002_country")).as_deref(), Some("a002_country"));
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query("?other=1"), None);
    }
}
