use serde::{Deserialize, Serialize};

// ============================================================================
// Creation request
// ============================================================================

/// Запрос на создание товара — неизменяемая проекция черновика формы.
///
/// The shape matches what the catalog API accepts: form-entered numerics
/// travel as the raw strings the user typed (the API parses them), media as
/// data-URL strings, colors/attributes as ordered id sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    pub name: String,
    pub description: String,

    // Путь по иерархии категорий, разрешённый на момент отправки
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "subCategory", skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(rename = "subSubCategory", skip_serializing_if = "Option::is_none")]
    pub sub_sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(rename = "productType")]
    pub product_type: String,
    #[serde(rename = "digitalProductType")]
    pub digital_product_type: String,
    pub sku: String,
    pub unit: String,
    pub tags: String,

    pub price: String,
    #[serde(rename = "discountType")]
    pub discount_type: String,
    #[serde(rename = "discountAmount")]
    pub discount_amount: String,
    #[serde(rename = "taxAmount")]
    pub tax_amount: String,
    #[serde(rename = "taxIncluded")]
    pub tax_included: bool,
    #[serde(rename = "minimumOrderQty")]
    pub minimum_order_qty: String,
    #[serde(rename = "shippingCost")]
    pub shipping_cost: String,
    pub stock: String,
    #[serde(rename = "isFeatured")]
    pub is_featured: bool,
    #[serde(rename = "videoLink")]
    pub video_link: String,

    // Медиа (data-URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub images: Vec<String>,

    // Идентификаторы из мультивыбора, в порядке добавления
    pub colors: Vec<String>,
    pub attributes: Vec<String>,
}

impl ProductCreateRequest {
    /// Предотправочная проверка. Сетевой вызов не выполняется, если она падает.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование обязательно для заполнения".into());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Цена должна быть числом".to_string())?;
        if price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        Ok(())
    }
}

/// Ответ API при успешном создании товара
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedProduct {
    #[serde(rename = "_id")]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, price: &str) -> ProductCreateRequest {
        ProductCreateRequest {
            name: name.into(),
            description: String::new(),
            category: None,
            sub_category: None,
            sub_sub_category: None,
            brand: None,
            product_type: String::new(),
            digital_product_type: "physical".into(),
            sku: String::new(),
            unit: String::new(),
            tags: String::new(),
            price: price.into(),
            discount_type: "percent".into(),
            discount_amount: String::new(),
            tax_amount: String::new(),
            tax_included: false,
            minimum_order_qty: String::new(),
            shipping_cost: String::new(),
            stock: String::new(),
            is_featured: false,
            video_link: String::new(),
            thumbnail: None,
            images: Vec::new(),
            colors: Vec::new(),
            attributes: Vec::new(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(request("Red Shoe", "19.99").validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        assert!(request("", "19.99").validate().is_err());
        assert!(request("   ", "19.99").validate().is_err());
    }

    #[test]
    fn test_validate_price_must_parse() {
        assert!(request("Red Shoe", "").validate().is_err());
        assert!(request("Red Shoe", "дорого").validate().is_err());
    }

    #[test]
    fn test_validate_price_non_negative() {
        assert!(request("Red Shoe", "-1").validate().is_err());
        assert!(request("Red Shoe", "0").validate().is_ok());
    }

    #[test]
    fn test_wire_shape_camel_case() {
        let mut req = request("Red Shoe", "19.99");
        req.sub_category = Some("sub1".into());
        req.colors = vec!["c1".into(), "c2".into()];
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["subCategory"], "sub1");
        assert_eq!(json["isFeatured"], false);
        assert_eq!(json["colors"][0], "c1");
        // незаданный путь не сериализуется
        assert!(json.get("category").is_none());
    }
}
