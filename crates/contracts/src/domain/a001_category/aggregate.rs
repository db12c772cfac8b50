use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Категория каталога (верхний уровень трёхуровневой иерархии).
///
/// Sub- and sub-sub-categories travel as `ReferenceEntity` rows keyed by
/// their parent; only the top level carries setup-screen fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub logo: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// DTO
// ============================================================================

/// Форма создания категории. Числовые поля формы приходят строками.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryCreateDto {
    pub name: String,
    #[serde(default)]
    pub priority: String,
    /// Логотип в виде data-URL
    #[serde(default)]
    pub logo: String,
}

impl CategoryCreateDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование обязательно для заполнения".into());
        }
        if !self.priority.trim().is_empty() && self.priority.trim().parse::<i32>().is_err() {
            return Err("Приоритет должен быть целым числом".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name() {
        let dto = CategoryCreateDto {
            name: "  ".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_validate_priority_numeric() {
        let mut dto = CategoryCreateDto {
            name: "Электроника".into(),
            priority: "abc".into(),
            logo: String::new(),
        };
        assert!(dto.validate().is_err());
        dto.priority = "10".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_priority_allowed() {
        let dto = CategoryCreateDto {
            name: "Электроника".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
