use serde::{Deserialize, Serialize};

/// Одна строка справочника (категория, бренд, цвет, характеристика).
///
/// Snapshot-only: the row is immutable once fetched and is replaced wholesale
/// by the next fetch of its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl ReferenceEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn with_parent(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: Some(parent_id.into()),
        }
    }
}

/// Вид справочника. Вместе с ключом родителя образует ключ кэша.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    Category,
    SubCategory,
    SubSubCategory,
    Brand,
    Color,
    Attribute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_entity_wire_shape() {
        let row = ReferenceEntity::with_parent("sub1", "Ноутбуки", "cat1");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["_id"], "sub1");
        assert_eq!(json["name"], "Ноутбуки");
        assert_eq!(json["parentId"], "cat1");
    }

    #[test]
    fn test_reference_entity_parent_optional() {
        let row: ReferenceEntity =
            serde_json::from_str(r#"{"_id":"cat1","name":"Электроника"}"#).unwrap();
        assert_eq!(row.parent_id, None);
        // parentId отсутствует в сериализации, если не задан
        let json = serde_json::to_string(&row).unwrap();
        assert!(!json.contains("parentId"));
    }
}
