use std::collections::HashSet;

/// Элемент с устойчивой идентичностью
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for contracts::domain::common::ReferenceEntity {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Накопитель мультивыбора: сохраняет порядок добавления, дедуплицирует по id.
///
/// Order is user-visible (chips render in insertion order) and survives
/// removal. Membership is checked against an id index, not by scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedSet<T> {
    items: Vec<T>,
    ids: HashSet<String>,
}

impl<T: HasId> CollectedSet<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// Добавить элемент в конец. Повторный id — тихий no-op.
    /// Возвращает true, если элемент был добавлен.
    pub fn add(&mut self, item: T) -> bool {
        if self.ids.contains(item.id()) {
            return false;
        }
        self.ids.insert(item.id().to_string());
        self.items.push(item);
        true
    }

    /// Удалить элемент по id; отсутствие — не ошибка
    pub fn remove(&mut self, id: &str) {
        if self.ids.remove(id) {
            self.items.retain(|item| item.id() != id);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Идентификаторы в порядке добавления
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: HasId> Default for CollectedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ReferenceEntity;

    fn entity(id: &str, name: &str) -> ReferenceEntity {
        ReferenceEntity::new(id, name)
    }

    #[test]
    fn test_add_deduplicates_by_id() {
        let mut set = CollectedSet::new();
        assert!(set.add(entity("c1", "Red")));
        assert!(!set.add(entity("c1", "Red")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_add_then_remove_yields_empty() {
        let mut set = CollectedSet::new();
        set.add(entity("c1", "Red"));
        set.remove("c1");
        assert!(set.is_empty());
        assert!(!set.contains("c1"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = CollectedSet::new();
        set.add(entity("c1", "Red"));
        set.remove("никого");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut set = CollectedSet::new();
        set.add(entity("a", "A"));
        set.add(entity("b", "B"));
        set.add(entity("c", "C"));
        set.remove("a");
        assert_eq!(set.ids(), vec!["b".to_string(), "c".to_string()]);

        // повторное добавление идёт в конец
        set.add(entity("a", "A"));
        assert_eq!(
            set.ids(),
            vec!["b".to_string(), "c".to_string(), "a".to_string()]
        );
    }

    #[test]
    fn test_clear() {
        let mut set = CollectedSet::new();
        set.add(entity("a", "A"));
        set.add(entity("b", "B"));
        set.clear();
        assert!(set.is_empty());
        assert!(set.add(entity("a", "A")));
    }
}
