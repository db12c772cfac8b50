use super::view_model::CategorySetupVm;
use crate::shared::catalog_cache::CatalogCache;
use crate::shared::files::first_file_from_event;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn CategorySetup() -> impl IntoView {
    let cache = use_context::<CatalogCache>().expect("CatalogCache not provided in context");
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let vm = CategorySetupVm::new(cache, toasts);
    vm.load();

    view! {
        <div class="list-container category-setup">
            <div class="list-header">
                <h3>{"Категории"}</h3>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| vm.load()
                >
                    {icon("refresh")}
                    {"Обновить"}
                </button>
            </div>

            // ------------------------------------------------------
            // Форма создания
            // ------------------------------------------------------
            <div class="details-form category-create-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="category-name">{"Наименование"}</label>
                        <input
                            type="text"
                            id="category-name"
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                            placeholder="Введите наименование категории"
                        />
                    </div>

                    <div class="form-group">
                        <label for="category-priority">{"Приоритет"}</label>
                        <input
                            type="text"
                            id="category-priority"
                            prop:value=move || vm.form.get().priority
                            on:input=move |ev| {
                                vm.form.update(|f| f.priority = event_target_value(&ev));
                            }
                            placeholder="0"
                        />
                    </div>

                    <div class="form-group">
                        <label for="category-logo">{"Логотип"}</label>
                        <input
                            type="file"
                            id="category-logo"
                            accept="image/*"
                            on:change=move |ev| {
                                if let Some(file) = first_file_from_event(&ev) {
                                    vm.set_logo(file);
                                }
                            }
                        />
                    </div>

                    <div class="form-group form-group--actions">
                        <button
                            type="button"
                            class="btn btn-primary"
                            prop:disabled=move || vm.saving.get()
                            on:click=move |_| vm.create()
                        >
                            {icon("plus")}
                            {"Создать"}
                        </button>
                    </div>
                </div>
            </div>

            // ------------------------------------------------------
            // Поиск и список
            // ------------------------------------------------------
            <div class="form-group search-box">
                {icon("search")}
                <input
                    type="text"
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                    placeholder="Поиск по наименованию"
                />
            </div>

            {move || {
                if vm.loading.get() {
                    view! { <div class="loading">{"Загрузка..."}</div> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Логотип"}</th>
                                    <th>{"Наименование"}</th>
                                    <th>{"Приоритет"}</th>
                                    <th>{"Создана"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {vm
                                    .filtered_rows()
                                    .into_iter()
                                    .map(|row| {
                                        let id = row.id.clone();
                                        let name = row.name.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    {(!row.logo.is_empty())
                                                        .then(|| {
                                                            view! {
                                                                <img class="category-logo" src={row.logo.clone()} />
                                                            }
                                                        })}
                                                </td>
                                                <td>{row.name.clone()}</td>
                                                <td>{row.priority}</td>
                                                <td>{row.created_at.format("%d.%m.%Y").to_string()}</td>
                                                <td>
                                                    <button
                                                        type="button"
                                                        class="btn btn-danger"
                                                        on:click=move |_| vm.delete(id.clone(), &name)
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
