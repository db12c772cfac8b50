use contracts::domain::common::{CatalogKind, ReferenceEntity};
use leptos::prelude::*;
use std::collections::HashMap;

/// Ключ кэша: вид справочника + ключ родителя (для зависимых уровней)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogKey {
    pub kind: CatalogKind,
    pub parent: Option<String>,
}

impl CatalogKey {
    fn new(kind: CatalogKind, parent: Option<&str>) -> Self {
        Self {
            kind,
            parent: parent.map(str::to_string),
        }
    }
}

/// Кэш справочников уровня процесса, внедряется через контекст.
///
/// Повторная загрузка по тому же ключу целиком заменяет снимок — никаких
/// инкрементальных слияний. Кэш не сверяет ключ с текущим выбором формы;
/// это забота цепочки зависимого выбора. Политика согласованности всей
/// системы — refresh-after-write.
#[derive(Clone, Copy)]
pub struct CatalogCache {
    entries: RwSignal<HashMap<CatalogKey, Vec<ReferenceEntity>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(HashMap::new()),
        }
    }

    /// Заменить снимок справочника по ключу
    pub fn store(&self, kind: CatalogKind, parent: Option<&str>, items: Vec<ReferenceEntity>) {
        let key = CatalogKey::new(kind, parent);
        self.entries.update(|map| {
            map.insert(key, items);
        });
    }

    /// Текущий снимок (пустой, если по ключу ещё ничего не загружено).
    /// Реактивен: чтение в представлении подписывает его на обновления.
    pub fn snapshot(&self, kind: CatalogKind, parent: Option<&str>) -> Vec<ReferenceEntity> {
        let key = CatalogKey::new(kind, parent);
        self.entries
            .with(|map| map.get(&key).cloned().unwrap_or_default())
    }

    /// Сбросить снимок; следующий потребитель обязан перечитать с сервера
    pub fn invalidate(&self, kind: CatalogKind, parent: Option<&str>) {
        let key = CatalogKey::new(kind, parent);
        self.entries.update(|map| {
            map.remove(&key);
        });
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_empty_until_stored() {
        let cache = CatalogCache::new();
        assert!(cache.snapshot(CatalogKind::Brand, None).is_empty());
    }

    #[test]
    fn test_store_replaces_wholesale() {
        let cache = CatalogCache::new();
        cache.store(
            CatalogKind::SubCategory,
            Some("cat1"),
            vec![ReferenceEntity::with_parent("s1", "Ноутбуки", "cat1")],
        );
        cache.store(
            CatalogKind::SubCategory,
            Some("cat1"),
            vec![ReferenceEntity::with_parent("s2", "Планшеты", "cat1")],
        );
        let snapshot = cache.snapshot(CatalogKind::SubCategory, Some("cat1"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "s2");
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = CatalogCache::new();
        cache.store(
            CatalogKind::SubCategory,
            Some("cat1"),
            vec![ReferenceEntity::with_parent("s1", "Ноутбуки", "cat1")],
        );
        cache.store(
            CatalogKind::SubCategory,
            Some("cat2"),
            vec![ReferenceEntity::with_parent("s9", "Диваны", "cat2")],
        );
        assert_eq!(
            cache.snapshot(CatalogKind::SubCategory, Some("cat1"))[0].id,
            "s1"
        );
        assert_eq!(
            cache.snapshot(CatalogKind::SubCategory, Some("cat2"))[0].id,
            "s9"
        );
    }

    #[test]
    fn test_invalidate() {
        let cache = CatalogCache::new();
        cache.store(
            CatalogKind::Color,
            None,
            vec![ReferenceEntity::new("c1", "Красный")],
        );
        cache.invalidate(CatalogKind::Color, None);
        assert!(cache.snapshot(CatalogKind::Color, None).is_empty());
    }
}
