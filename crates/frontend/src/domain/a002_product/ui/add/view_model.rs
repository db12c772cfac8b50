use super::draft::ProductDraft;
use super::model;
use super::selection::ChainState;
use super::submit::{settle_draft, submit_product, SubmitError};
use crate::shared::catalog_cache::CatalogCache;
use crate::shared::files::read_file_as_data_url;
use crate::shared::toast::ToastService;
use contracts::domain::common::{CatalogKind, ReferenceEntity};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы создания товара.
///
/// Весь черновик живёт в одном сигнале; команды мутируют его через update.
/// Ответы зависимых справочников применяются только по актуальному талону.
#[derive(Clone, Copy)]
pub struct ProductAddVm {
    pub draft: RwSignal<ProductDraft>,
    pub pending_attribute: RwSignal<String>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    cache: CatalogCache,
    toasts: ToastService,
}

impl ProductAddVm {
    pub fn new(cache: CatalogCache, toasts: ToastService) -> Self {
        Self {
            draft: RwSignal::new(ProductDraft::new()),
            pending_attribute: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            cache,
            toasts,
        }
    }

    /// Загрузка независимых справочников при открытии формы
    pub fn load_reference_data(&self) {
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match model::fetch_categories().await {
                Ok(items) => cache.store(CatalogKind::Category, None, items),
                Err(e) => toasts.error(format!("Не удалось загрузить категории: {}", e)),
            }
        });
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match model::fetch_brands().await {
                Ok(items) => cache.store(CatalogKind::Brand, None, items),
                Err(e) => toasts.error(format!("Не удалось загрузить бренды: {}", e)),
            }
        });
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match model::fetch_colors().await {
                Ok(items) => cache.store(CatalogKind::Color, None, items),
                Err(e) => toasts.error(format!("Не удалось загрузить цвета: {}", e)),
            }
        });
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match model::fetch_attributes().await {
                Ok(items) => cache.store(CatalogKind::Attribute, None, items),
                Err(e) => toasts.error(format!("Не удалось загрузить атрибуты: {}", e)),
            }
        });
    }

    // ------------------------------------------------------------------
    // Каскад категорий
    // ------------------------------------------------------------------

    pub fn select_category(&self, id: String) {
        if id.is_empty() {
            self.draft.update(|d| d.selection.reset());
            return;
        }
        let Some(ticket) = self.draft.try_update(|d| d.selection.select_category(id)) else {
            return;
        };

        let vm = *self;
        spawn_local(async move {
            match model::fetch_sub_categories(&ticket.parent_id).await {
                Ok(items) => {
                    let current = vm.draft.with_untracked(|d| d.selection.is_current(&ticket));
                    if current {
                        vm.cache
                            .store(CatalogKind::SubCategory, Some(&ticket.parent_id), items);
                    } else {
                        log::warn!(
                            "отброшен устаревший список подкатегорий (родитель {})",
                            ticket.parent_id
                        );
                    }
                }
                Err(e) => vm
                    .toasts
                    .error(format!("Не удалось загрузить подкатегории: {}", e)),
            }
        });
    }

    pub fn select_sub_category(&self, id: String) {
        if id.is_empty() {
            return;
        }
        let result = self.draft.try_update(|d| d.selection.select_sub_category(id));
        let ticket = match result {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                self.toasts.error(e.to_string());
                return;
            }
            None => return,
        };

        let vm = *self;
        spawn_local(async move {
            match model::fetch_sub_sub_categories(&ticket.parent_id).await {
                Ok(items) => {
                    let current = vm.draft.with_untracked(|d| d.selection.is_current(&ticket));
                    if current {
                        vm.cache
                            .store(CatalogKind::SubSubCategory, Some(&ticket.parent_id), items);
                    } else {
                        log::warn!(
                            "отброшен устаревший список под-подкатегорий (родитель {})",
                            ticket.parent_id
                        );
                    }
                }
                Err(e) => vm
                    .toasts
                    .error(format!("Не удалось загрузить под-подкатегории: {}", e)),
            }
        });
    }

    pub fn select_sub_sub_category(&self, id: String) {
        if id.is_empty() {
            return;
        }
        if let Some(Err(e)) = self
            .draft
            .try_update(|d| d.selection.select_sub_sub_category(id))
        {
            self.toasts.error(e.to_string());
        }
    }

    pub fn select_brand(&self, id: String) {
        self.draft.update(|d| {
            d.brand_id = if id.is_empty() { None } else { Some(id) };
        });
    }

    /// Положение на лестнице выбора; зависимые списки недоступны, пока
    /// цепочка не дошла до их родителя
    pub fn chain_state(&self) -> ChainState {
        self.draft.with(|d| d.selection.state())
    }

    // ------------------------------------------------------------------
    // Списки для выпадающих элементов (реактивны при чтении в представлении)
    // ------------------------------------------------------------------

    pub fn categories(&self) -> Vec<ReferenceEntity> {
        self.cache.snapshot(CatalogKind::Category, None)
    }

    pub fn sub_categories(&self) -> Vec<ReferenceEntity> {
        match self.draft.with(|d| d.selection.path().category_id.clone()) {
            Some(parent) => self.cache.snapshot(CatalogKind::SubCategory, Some(&parent)),
            None => Vec::new(),
        }
    }

    pub fn sub_sub_categories(&self) -> Vec<ReferenceEntity> {
        match self
            .draft
            .with(|d| d.selection.path().sub_category_id.clone())
        {
            Some(parent) => self
                .cache
                .snapshot(CatalogKind::SubSubCategory, Some(&parent)),
            None => Vec::new(),
        }
    }

    pub fn brands(&self) -> Vec<ReferenceEntity> {
        self.cache.snapshot(CatalogKind::Brand, None)
    }

    pub fn colors(&self) -> Vec<ReferenceEntity> {
        self.cache.snapshot(CatalogKind::Color, None)
    }

    pub fn attributes(&self) -> Vec<ReferenceEntity> {
        self.cache.snapshot(CatalogKind::Attribute, None)
    }

    // ------------------------------------------------------------------
    // Накопители
    // ------------------------------------------------------------------

    /// Цвет добавляется сразу при выборе в списке
    pub fn add_color(&self, id: String) {
        if id.is_empty() {
            return;
        }
        let colors = self.cache.snapshot(CatalogKind::Color, None);
        if let Some(color) = colors.into_iter().find(|c| c.id == id) {
            self.draft.update(|d| {
                d.add_color(color);
            });
        }
    }

    pub fn remove_color(&self, id: &str) {
        self.draft.update(|d| d.remove_color(id));
    }

    /// Атрибут добавляется кнопкой из отложенного выбора
    pub fn add_pending_attribute(&self) {
        let id = self.pending_attribute.get_untracked();
        if id.is_empty() {
            return;
        }
        let attributes = self.cache.snapshot(CatalogKind::Attribute, None);
        if let Some(attribute) = attributes.into_iter().find(|a| a.id == id) {
            self.draft.update(|d| {
                d.add_attribute(attribute);
            });
            self.pending_attribute.set(String::new());
        }
    }

    pub fn remove_attribute(&self, id: &str) {
        self.draft.update(|d| d.remove_attribute(id));
    }

    // ------------------------------------------------------------------
    // Медиа
    // ------------------------------------------------------------------

    pub fn set_thumbnail(&self, file: web_sys::File) {
        let vm = *self;
        spawn_local(async move {
            match read_file_as_data_url(file).await {
                Ok(data_url) => vm.draft.update(|d| d.set_thumbnail(data_url)),
                Err(e) => vm.toasts.error(e),
            }
        });
    }

    pub fn add_gallery_image(&self, file: web_sys::File) {
        let vm = *self;
        spawn_local(async move {
            match read_file_as_data_url(file).await {
                Ok(data_url) => vm.draft.update(|d| d.push_image(data_url)),
                Err(e) => vm.toasts.error(e),
            }
        });
    }

    // ------------------------------------------------------------------
    // Отправка
    // ------------------------------------------------------------------

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let draft = self.draft;
        Signal::derive(move || saving.get() || draft.with(|d| d.name.trim().is_empty()))
    }

    pub fn submit(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let request = self.draft.with_untracked(|d| d.to_request());
        self.saving.set(true);
        self.error.set(None);

        let vm = *self;
        spawn_local(async move {
            let sent = submit_product(request, |req| async move {
                model::create_product(&req).await
            })
            .await;
            vm.draft.update(|d| settle_draft(d, &sent));
            match sent {
                Ok(_id) => {
                    vm.pending_attribute.set(String::new());
                    vm.toasts.success("Товар создан");
                }
                // при любой ошибке черновик сохраняется для исправления
                Err(SubmitError::Validation(msg)) => {
                    vm.error.set(Some(msg.clone()));
                    vm.toasts.error(msg);
                }
                Err(SubmitError::Failed(msg)) => {
                    log::warn!("создание товара отклонено: {}", msg);
                    vm.error.set(Some(msg.clone()));
                    vm.toasts.error(msg);
                }
            }
            vm.saving.set(false);
        });
    }
}
