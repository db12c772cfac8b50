use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Экраны консоли администратора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    ProductAdd,
    CategorySetup,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::ProductAdd => "product-add",
            Page::CategorySetup => "category-setup",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "product-add" => Some(Page::ProductAdd),
            "category-setup" => Some(Page::CategorySetup),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::ProductAdd => "Новый товар",
            Page::CategorySetup => "Категории",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::ProductAdd),
        }
    }

    /// Восстановить активный экран из query-строки и дальше держать её в синхроне
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|k| Page::from_key(k)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                this.active.get().key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            // Use untracked reads of the location to avoid reactive dependencies
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

    pub fn activate(&self, page: Page) {
        self.active.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
