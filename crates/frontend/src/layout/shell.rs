use crate::layout::sidebar::Sidebar;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;

/// Каркас приложения: боковая навигация + рабочая область + тосты
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <main class="shell__content">{children()}</main>
            <ToastHost />
        </div>
    }
}
