use contracts::domain::common::CatalogKind;

/// Текущая позиция в трёхуровневой иерархии категорий
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    pub category_id: Option<String>,
    pub sub_category_id: Option<String>,
    pub sub_sub_category_id: Option<String>,
}

/// Положение на лестнице выбора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    None,
    CategorySelected,
    SubCategorySelected,
    SubSubCategorySelected,
}

/// Недопустимый переход: выбор уровня при незаданном родителе.
///
/// The UI disables dependent selects, but the chain still rejects the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    CategoryNotSelected,
    SubCategoryNotSelected,
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::CategoryNotSelected => write!(f, "Сначала выберите категорию"),
            SelectionError::SubCategoryNotSelected => write!(f, "Сначала выберите подкатегорию"),
        }
    }
}

/// Талон загрузки зависимого уровня.
///
/// Каждый выбор родителя выдаёт новый талон со свежим поколением; ответ
/// сервера применяется только если талон всё ещё актуален
/// ([`SelectionChain::is_current`]). Так ответы, пришедшие не по порядку,
/// не затирают список, относящийся к более позднему выбору.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub kind: CatalogKind,
    pub parent_id: String,
    generation: u64,
}

/// Цепочка зависимого выбора: категория → подкатегория → под-подкатегория.
///
/// Инвариант: дочерний уровень осмыслен только пока ссылается на ребёнка
/// текущего родителя, поэтому любое изменение выше по цепочке очищает всё,
/// что ниже. Инвариант живёт здесь, а не в разрозненных проверках UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChain {
    path: SelectionPath,
    sub_generation: u64,
    sub_sub_generation: u64,
}

impl SelectionChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    pub fn state(&self) -> ChainState {
        if self.path.sub_sub_category_id.is_some() {
            ChainState::SubSubCategorySelected
        } else if self.path.sub_category_id.is_some() {
            ChainState::SubCategorySelected
        } else if self.path.category_id.is_some() {
            ChainState::CategorySelected
        } else {
            ChainState::None
        }
    }

    /// Выбрать категорию: нижние уровни очищаются, выдаётся талон на
    /// загрузку подкатегорий. Повторный выбор того же id заново выдаёт талон.
    pub fn select_category(&mut self, id: impl Into<String>) -> FetchTicket {
        let id = id.into();
        self.path.category_id = Some(id.clone());
        self.path.sub_category_id = None;
        self.path.sub_sub_category_id = None;
        self.sub_generation += 1;
        // ответы нижнего уровня, выданные до смены категории, тоже устарели
        self.sub_sub_generation += 1;
        FetchTicket {
            kind: CatalogKind::SubCategory,
            parent_id: id,
            generation: self.sub_generation,
        }
    }

    pub fn select_sub_category(
        &mut self,
        id: impl Into<String>,
    ) -> Result<FetchTicket, SelectionError> {
        if self.path.category_id.is_none() {
            return Err(SelectionError::CategoryNotSelected);
        }
        let id = id.into();
        self.path.sub_category_id = Some(id.clone());
        self.path.sub_sub_category_id = None;
        self.sub_sub_generation += 1;
        Ok(FetchTicket {
            kind: CatalogKind::SubSubCategory,
            parent_id: id,
            generation: self.sub_sub_generation,
        })
    }

    pub fn select_sub_sub_category(&mut self, id: impl Into<String>) -> Result<(), SelectionError> {
        if self.path.sub_category_id.is_none() {
            return Err(SelectionError::SubCategoryNotSelected);
        }
        self.path.sub_sub_category_id = Some(id.into());
        Ok(())
    }

    /// Очистить все три уровня. Уже выданные талоны при этом устаревают.
    pub fn reset(&mut self) {
        self.path = SelectionPath::default();
        self.sub_generation += 1;
        self.sub_sub_generation += 1;
    }

    /// Актуален ли талон: поколение совпадает и родитель всё ещё выбран
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        match ticket.kind {
            CatalogKind::SubCategory => {
                ticket.generation == self.sub_generation
                    && self.path.category_id.as_deref() == Some(ticket.parent_id.as_str())
            }
            CatalogKind::SubSubCategory => {
                ticket.generation == self.sub_sub_generation
                    && self.path.sub_category_id.as_deref() == Some(ticket.parent_id.as_str())
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_category_clears_children() {
        let mut chain = SelectionChain::new();
        chain.select_category("cat1");
        chain.select_sub_category("sub1").unwrap();
        chain.select_sub_sub_category("subsub1").unwrap();
        assert_eq!(chain.state(), ChainState::SubSubCategorySelected);

        chain.select_category("cat2");
        assert_eq!(chain.path().category_id.as_deref(), Some("cat2"));
        assert_eq!(chain.path().sub_category_id, None);
        assert_eq!(chain.path().sub_sub_category_id, None);
        assert_eq!(chain.state(), ChainState::CategorySelected);
    }

    #[test]
    fn test_select_sub_category_clears_grandchild() {
        let mut chain = SelectionChain::new();
        chain.select_category("cat1");
        chain.select_sub_category("sub1").unwrap();
        chain.select_sub_sub_category("subsub1").unwrap();

        chain.select_sub_category("sub2").unwrap();
        assert_eq!(chain.path().sub_category_id.as_deref(), Some("sub2"));
        assert_eq!(chain.path().sub_sub_category_id, None);
    }

    #[test]
    fn test_sub_category_requires_category() {
        let mut chain = SelectionChain::new();
        let before = chain.clone();
        assert_eq!(
            chain.select_sub_category("sub1"),
            Err(SelectionError::CategoryNotSelected)
        );
        // путь не изменился
        assert_eq!(chain, before);
    }

    #[test]
    fn test_sub_sub_category_requires_sub_category() {
        let mut chain = SelectionChain::new();
        chain.select_category("cat1");
        assert_eq!(
            chain.select_sub_sub_category("subsub1"),
            Err(SelectionError::SubCategoryNotSelected)
        );
        assert_eq!(chain.path().sub_sub_category_id, None);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut chain = SelectionChain::new();
        let ticket_cat1 = chain.select_category("cat1");
        // пользователь передумал до прихода ответа
        let ticket_cat2 = chain.select_category("cat2");

        assert!(!chain.is_current(&ticket_cat1));
        assert!(chain.is_current(&ticket_cat2));
    }

    #[test]
    fn test_reselecting_same_category_reissues_ticket() {
        let mut chain = SelectionChain::new();
        let first = chain.select_category("cat1");
        let second = chain.select_category("cat1");
        assert!(!chain.is_current(&first));
        assert!(chain.is_current(&second));
        assert_eq!(chain.path().category_id.as_deref(), Some("cat1"));
    }

    #[test]
    fn test_category_change_invalidates_sub_sub_ticket() {
        let mut chain = SelectionChain::new();
        chain.select_category("cat1");
        let sub_ticket = chain.select_sub_category("sub1").unwrap();
        chain.select_category("cat2");
        assert!(!chain.is_current(&sub_ticket));
    }

    #[test]
    fn test_reset_returns_to_initial_state_and_invalidates_tickets() {
        let mut chain = SelectionChain::new();
        let ticket = chain.select_category("cat1");
        chain.reset();
        assert_eq!(chain.state(), ChainState::None);
        assert_eq!(chain.path(), &SelectionPath::default());
        assert!(!chain.is_current(&ticket));
        // цепочка переиспользуется после reset
        let ticket = chain.select_category("cat3");
        assert!(chain.is_current(&ticket));
    }
}
