use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::pages::PageKey;

const PAGE_PARAM: &str = "page";

/// Shell state shared by header, sidebar and content
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
    /// Sidebar visibility on narrow screens; any component may toggle it
    pub menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::default()),
            menu_open: RwSignal::new(false),
        }
    }

    pub fn open_page(&self, key: PageKey) {
        log::debug!("open page: {}", key.as_str());
        self.active.set(key);
        self.menu_open.set(false);
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Restores the page from `?page=` and keeps the query in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = page_from_query(&search) {
            self.active.set(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(PAGE_PARAM, key.as_str())]))
                .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

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

fn page_from_query(search: &str) -> Option<PageKey> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(PAGE_PARAM).and_then(|value| PageKey::parse(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?page=on-calls"), Some(PageKey::OnCalls));
        assert_eq!(page_from_query("page=staffs&x=1"), Some(PageKey::Staffs));
        assert_eq!(page_from_query("?page=unknown"), None);
        assert_eq!(page_from_query(""), None);
    }
}
