use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::catalog_cache::CatalogCache;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Общий кэш справочников: внедряется через контекст, а не через глобальное состояние
    provide_context(CatalogCache::new());

    // Centralized toast notifications
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
