use super::selection::ChainState;
use super::view_model::ProductAddVm;
use crate::shared::catalog_cache::CatalogCache;
use crate::shared::files::first_file_from_event;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::common::ReferenceEntity;
use leptos::prelude::*;

fn options(items: Vec<ReferenceEntity>) -> impl IntoView {
    items
        .into_iter()
        .map(|item| {
            view! { <option value={item.id.clone()}>{item.name.clone()}</option> }
        })
        .collect_view()
}

#[component]
pub fn ProductAdd() -> impl IntoView {
    let cache = use_context::<CatalogCache>().expect("CatalogCache not provided in context");
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let vm = ProductAddVm::new(cache, toasts);
    vm.load_reference_data();

    view! {
        <div class="details-container product-add">
            <div class="details-header">
                <h3>{"Новый товар"}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                // ------------------------------------------------------
                // Основная информация
                // ------------------------------------------------------
                <h4>{"Основная информация"}</h4>

                <div class="form-group">
                    <label for="name">{"Наименование"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.draft.get().name
                        on:input=move |ev| {
                            vm.draft.update(|d| d.name = event_target_value(&ev));
                        }
                        placeholder="Введите наименование товара"
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Описание"}</label>
                    <textarea
                        id="description"
                        prop:value=move || vm.draft.get().description
                        on:input=move |ev| {
                            vm.draft.update(|d| d.description = event_target_value(&ev));
                        }
                        placeholder="Подробное описание товара"
                        rows="4"
                    ></textarea>
                </div>

                // ------------------------------------------------------
                // Категория: зависимый каскад из трёх уровней
                // ------------------------------------------------------
                <h4>{"Категория"}</h4>

                <div class="form-row">
                    <div class="form-group">
                        <label for="category">{"Категория"}</label>
                        <select
                            id="category"
                            prop:value=move || {
                                vm.draft
                                    .with(|d| d.selection.path().category_id.clone())
                                    .unwrap_or_default()
                            }
                            on:change=move |ev| vm.select_category(event_target_value(&ev))
                        >
                            <option value="">{"Выберите категорию"}</option>
                            {move || options(vm.categories())}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="sub-category">{"Подкатегория"}</label>
                        <select
                            id="sub-category"
                            prop:value=move || {
                                vm.draft
                                    .with(|d| d.selection.path().sub_category_id.clone())
                                    .unwrap_or_default()
                            }
                            prop:disabled=move || vm.chain_state() == ChainState::None
                            on:change=move |ev| vm.select_sub_category(event_target_value(&ev))
                        >
                            <option value="">{"Выберите подкатегорию"}</option>
                            {move || options(vm.sub_categories())}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="sub-sub-category">{"Под-подкатегория"}</label>
                        <select
                            id="sub-sub-category"
                            prop:value=move || {
                                vm.draft
                                    .with(|d| d.selection.path().sub_sub_category_id.clone())
                                    .unwrap_or_default()
                            }
                            prop:disabled=move || {
                                matches!(
                                    vm.chain_state(),
                                    ChainState::None | ChainState::CategorySelected
                                )
                            }
                            on:change=move |ev| vm.select_sub_sub_category(event_target_value(&ev))
                        >
                            <option value="">{"Выберите под-подкатегорию"}</option>
                            {move || options(vm.sub_sub_categories())}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="brand">{"Бренд"}</label>
                        <select
                            id="brand"
                            prop:value=move || vm.draft.get().brand_id.unwrap_or_default()
                            on:change=move |ev| vm.select_brand(event_target_value(&ev))
                        >
                            <option value="">{"Без бренда"}</option>
                            {move || options(vm.brands())}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="unit">{"Единица измерения"}</label>
                        <input
                            type="text"
                            id="unit"
                            prop:value=move || vm.draft.get().unit
                            on:input=move |ev| {
                                vm.draft.update(|d| d.unit = event_target_value(&ev));
                            }
                            placeholder="шт, кг, м"
                        />
                    </div>

                    <div class="form-group">
                        <label for="sku">{"Артикул (SKU)"}</label>
                        <input
                            type="text"
                            id="sku"
                            prop:value=move || vm.draft.get().sku
                            on:input=move |ev| {
                                vm.draft.update(|d| d.sku = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="tags">{"Теги"}</label>
                    <input
                        type="text"
                        id="tags"
                        prop:value=move || vm.draft.get().tags
                        on:input=move |ev| {
                            vm.draft.update(|d| d.tags = event_target_value(&ev));
                        }
                        placeholder="Через запятую"
                    />
                </div>

                // ------------------------------------------------------
                // Цены и запасы
                // ------------------------------------------------------
                <h4>{"Цены и запасы"}</h4>

                <div class="form-row">
                    <div class="form-group">
                        <label for="price">{"Цена"}</label>
                        <input
                            type="text"
                            id="price"
                            prop:value=move || vm.draft.get().price
                            on:input=move |ev| {
                                vm.draft.update(|d| d.price = event_target_value(&ev));
                            }
                            placeholder="0.00"
                        />
                    </div>

                    <div class="form-group">
                        <label for="discount-type">{"Тип скидки"}</label>
                        <select
                            id="discount-type"
                            prop:value=move || vm.draft.get().discount_type
                            on:change=move |ev| {
                                vm.draft.update(|d| d.discount_type = event_target_value(&ev));
                            }
                        >
                            <option value="percent">{"Процент"}</option>
                            <option value="flat">{"Фиксированная"}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="discount-amount">{"Размер скидки"}</label>
                        <input
                            type="text"
                            id="discount-amount"
                            prop:value=move || vm.draft.get().discount_amount
                            on:input=move |ev| {
                                vm.draft.update(|d| d.discount_amount = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="tax-amount">{"Налог, %"}</label>
                        <input
                            type="text"
                            id="tax-amount"
                            prop:value=move || vm.draft.get().tax_amount
                            on:input=move |ev| {
                                vm.draft.update(|d| d.tax_amount = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group form-group--checkbox">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || vm.draft.get().tax_included
                                on:change=move |ev| {
                                    vm.draft.update(|d| d.tax_included = event_target_checked(&ev));
                                }
                            />
                            {"Налог включён в цену"}
                        </label>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="minimum-order-qty">{"Минимальный заказ"}</label>
                        <input
                            type="text"
                            id="minimum-order-qty"
                            prop:value=move || vm.draft.get().minimum_order_qty
                            on:input=move |ev| {
                                vm.draft.update(|d| d.minimum_order_qty = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="shipping-cost">{"Стоимость доставки"}</label>
                        <input
                            type="text"
                            id="shipping-cost"
                            prop:value=move || vm.draft.get().shipping_cost
                            on:input=move |ev| {
                                vm.draft.update(|d| d.shipping_cost = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="stock">{"Остаток"}</label>
                        <input
                            type="text"
                            id="stock"
                            prop:value=move || vm.draft.get().stock
                            on:input=move |ev| {
                                vm.draft.update(|d| d.stock = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="form-group form-group--checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.draft.get().is_featured
                            on:change=move |ev| {
                                vm.draft.update(|d| d.is_featured = event_target_checked(&ev));
                            }
                        />
                        {"Показывать на главной"}
                    </label>
                </div>

                // ------------------------------------------------------
                // Характеристики
                // ------------------------------------------------------
                <h4>{"Характеристики"}</h4>

                <div class="form-group">
                    <label for="colors">{"Цвета"}</label>
                    <select
                        id="colors"
                        prop:value=""
                        on:change=move |ev| vm.add_color(event_target_value(&ev))
                    >
                        <option value="">{"Добавить цвет"}</option>
                        {move || options(vm.colors())}
                    </select>
                    <div class="chips">
                        {move || {
                            vm.draft
                                .with(|d| d.colors.items().to_vec())
                                .into_iter()
                                .map(|color| {
                                    let id = color.id.clone();
                                    view! {
                                        <span class="chip">
                                            {color.name.clone()}
                                            <button
                                                type="button"
                                                class="chip-remove"
                                                on:click=move |_| vm.remove_color(&id)
                                            >
                                                {icon("close")}
                                            </button>
                                        </span>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="form-group">
                    <label for="attributes">{"Атрибуты"}</label>
                    <div class="form-row">
                        <select
                            id="attributes"
                            prop:value=move || vm.pending_attribute.get()
                            on:change=move |ev| vm.pending_attribute.set(event_target_value(&ev))
                        >
                            <option value="">{"Выберите атрибут"}</option>
                            {move || options(vm.attributes())}
                        </select>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| vm.add_pending_attribute()
                        >
                            {icon("plus")}
                            {"Добавить"}
                        </button>
                    </div>
                    <div class="chips">
                        {move || {
                            vm.draft
                                .with(|d| d.attributes.items().to_vec())
                                .into_iter()
                                .map(|attribute| {
                                    let id = attribute.id.clone();
                                    view! {
                                        <span class="chip">
                                            {attribute.name.clone()}
                                            <button
                                                type="button"
                                                class="chip-remove"
                                                on:click=move |_| vm.remove_attribute(&id)
                                            >
                                                {icon("close")}
                                            </button>
                                        </span>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                // ------------------------------------------------------
                // Изображения и видео
                // ------------------------------------------------------
                <h4>{"Изображения"}</h4>

                <div class="form-group">
                    <label for="thumbnail">{"Миниатюра"}</label>
                    <input
                        type="file"
                        id="thumbnail"
                        accept="image/*"
                        on:change=move |ev| {
                            if let Some(file) = first_file_from_event(&ev) {
                                vm.set_thumbnail(file);
                            }
                        }
                    />
                    {move || {
                        vm.draft
                            .get()
                            .thumbnail
                            .map(|src| view! { <img class="thumbnail-preview" src={src} /> })
                    }}
                </div>

                <div class="form-group">
                    <label for="gallery">{"Галерея"}</label>
                    <input
                        type="file"
                        id="gallery"
                        accept="image/*"
                        on:change=move |ev| {
                            if let Some(file) = first_file_from_event(&ev) {
                                vm.add_gallery_image(file);
                            }
                        }
                    />
                    <div class="gallery-previews">
                        {move || {
                            vm.draft
                                .get()
                                .images
                                .into_iter()
                                .map(|src| view! { <img class="gallery-preview" src={src} /> })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="form-group">
                    <label for="video-link">{"Ссылка на видео"}</label>
                    <input
                        type="text"
                        id="video-link"
                        prop:value=move || vm.draft.get().video_link
                        on:input=move |ev| {
                            vm.draft.update(|d| d.video_link = event_target_value(&ev));
                        }
                        placeholder="https://"
                    />
                </div>

                // ------------------------------------------------------
                // Отправка
                // ------------------------------------------------------
                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-primary"
                        prop:disabled=vm.is_save_disabled()
                        on:click=move |_| vm.submit()
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
