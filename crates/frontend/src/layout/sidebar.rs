use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

const PAGES: [Page; 2] = [Page::ProductAdd, Page::CategorySetup];

fn page_icon(page: Page) -> &'static str {
    match page {
        Page::ProductAdd => "products",
        Page::CategorySetup => "categories",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">{"Каталог"}</div>
            {PAGES
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            class="sidebar__item"
                            class:sidebar__item--active=move || ctx.active.get() == page
                            on:click=move |_| ctx.activate(page)
                        >
                            {icon(page_icon(page))}
                            <span>{page.title()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
