use crate::domain::a001_category::ui::setup::CategorySetup;
use crate::domain::a002_product::ui::add::ProductAdd;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use leptos::prelude::*;
// Navigation is driven by AppGlobalContext + URL query sync, no Router components

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize URL integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell>
            {move || match ctx.active.get() {
                Page::ProductAdd => view! { <ProductAdd /> }.into_any(),
                Page::CategorySetup => view! { <CategorySetup /> }.into_any(),
            }}
        </Shell>
    }
}
