use super::model;
use crate::shared::catalog_cache::CatalogCache;
use crate::shared::confirm::confirm;
use crate::shared::files::read_file_as_data_url;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::{Category, CategoryCreateDto};
use contracts::domain::common::{CatalogKind, ReferenceEntity};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Подстрочный поиск по наименованию, без учёта регистра
pub fn filter_categories(rows: &[Category], query: &str) -> Vec<Category> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// ViewModel экрана настройки категорий.
///
/// Политика согласованности — refresh-after-write: после создания или
/// удаления список перечитывается с сервера и кэш справочника обновляется.
#[derive(Clone, Copy)]
pub struct CategorySetupVm {
    pub rows: RwSignal<Vec<Category>>,
    pub search: RwSignal<String>,
    pub form: RwSignal<CategoryCreateDto>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    cache: CatalogCache,
    toasts: ToastService,
}

impl CategorySetupVm {
    pub fn new(cache: CatalogCache, toasts: ToastService) -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            search: RwSignal::new(String::new()),
            form: RwSignal::new(CategoryCreateDto::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            cache,
            toasts,
        }
    }

    pub fn load(&self) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match model::fetch_categories().await {
                Ok(categories) => {
                    let refs: Vec<ReferenceEntity> = categories
                        .iter()
                        .map(|c| ReferenceEntity::new(&c.id, &c.name))
                        .collect();
                    vm.cache.store(CatalogKind::Category, None, refs);
                    vm.rows.set(categories);
                }
                Err(e) => vm
                    .toasts
                    .error(format!("Не удалось загрузить категории: {}", e)),
            }
            vm.loading.set(false);
        });
    }

    pub fn filtered_rows(&self) -> Vec<Category> {
        let query = self.search.get();
        self.rows.with(|rows| filter_categories(rows, &query))
    }

    pub fn set_logo(&self, file: web_sys::File) {
        let vm = *self;
        spawn_local(async move {
            match read_file_as_data_url(file).await {
                Ok(data_url) => vm.form.update(|f| f.logo = data_url),
                Err(e) => vm.toasts.error(e),
            }
        });
    }

    pub fn create(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = self.form.get_untracked();
        if let Err(msg) = dto.validate() {
            self.toasts.error(msg);
            return;
        }
        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            match model::create_category(&dto).await {
                Ok(_) => {
                    vm.form.set(CategoryCreateDto::default());
                    vm.toasts.success("Категория создана");
                    vm.load();
                }
                Err(e) => vm.toasts.error(e),
            }
            vm.saving.set(false);
        });
    }

    pub fn delete(&self, id: String, name: &str) {
        if !confirm(&format!("Удалить категорию \"{}\"?", name)) {
            return;
        }
        let vm = *self;
        spawn_local(async move {
            match model::delete_category(&id).await {
                Ok(()) => {
                    vm.toasts.success("Категория удалена");
                    vm.load();
                }
                Err(e) => vm.toasts.error(e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            priority: 0,
            logo: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let rows = vec![category("1", "Электроника"), category("2", "Мебель")];
        assert_eq!(filter_categories(&rows, "").len(), 2);
        assert_eq!(filter_categories(&rows, "   ").len(), 2);
    }

    #[test]
    fn test_filter_substring_case_insensitive() {
        let rows = vec![category("1", "Электроника"), category("2", "Мебель")];
        let found = filter_categories(&rows, "мебель");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
        assert_eq!(filter_categories(&rows, "тро").len(), 1);
        assert!(filter_categories(&rows, "обувь").is_empty());
    }
}
