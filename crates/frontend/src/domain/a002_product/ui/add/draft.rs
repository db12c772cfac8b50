use super::selection::SelectionChain;
use crate::shared::collected_set::CollectedSet;
use contracts::domain::a002_product::ProductCreateRequest;
use contracts::domain::common::ReferenceEntity;

/// Черновик нового товара: всё изменяемое состояние одной сессии создания.
///
/// Живёт от открытия формы до успешной отправки (после которой уничтожается)
/// или ухода со страницы. При ошибке отправки черновик сохраняется целиком.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub selection: SelectionChain,
    pub brand_id: Option<String>,
    pub product_type: String,
    pub digital_product_type: String,
    pub sku: String,
    pub unit: String,
    pub tags: String,
    pub price: String,
    pub discount_type: String,
    pub discount_amount: String,
    pub tax_amount: String,
    pub tax_included: bool,
    pub minimum_order_qty: String,
    pub shipping_cost: String,
    pub stock: String,
    pub is_featured: bool,
    pub video_link: String,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
    pub colors: CollectedSet<ReferenceEntity>,
    pub attributes: CollectedSet<ReferenceEntity>,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            selection: SelectionChain::new(),
            brand_id: None,
            product_type: String::new(),
            digital_product_type: "physical".to_string(),
            sku: String::new(),
            unit: String::new(),
            tags: String::new(),
            price: String::new(),
            discount_type: "percent".to_string(),
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
            colors: CollectedSet::new(),
            attributes: CollectedSet::new(),
        }
    }

    /// Миниатюра — единственный слот: новая загрузка заменяет прежнюю
    pub fn set_thumbnail(&mut self, data_url: String) {
        self.thumbnail = Some(data_url);
    }

    /// Галерея только растёт: добавление в конец
    pub fn push_image(&mut self, data_url: String) {
        self.images.push(data_url);
    }

    pub fn add_color(&mut self, color: ReferenceEntity) -> bool {
        self.colors.add(color)
    }

    pub fn remove_color(&mut self, id: &str) {
        self.colors.remove(id);
    }

    pub fn add_attribute(&mut self, attribute: ReferenceEntity) -> bool {
        self.attributes.add(attribute)
    }

    pub fn remove_attribute(&mut self, id: &str) {
        self.attributes.remove(id);
    }

    /// Чистая проекция черновика в запрос на создание.
    ///
    /// Ничего не валидирует и не меняет — проверка выполняется конвейером
    /// отправки. Накопители разворачиваются в массивы id в порядке добавления.
    pub fn to_request(&self) -> ProductCreateRequest {
        let path = self.selection.path();
        ProductCreateRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            category: path.category_id.clone(),
            sub_category: path.sub_category_id.clone(),
            sub_sub_category: path.sub_sub_category_id.clone(),
            brand: self.brand_id.clone(),
            product_type: self.product_type.clone(),
            digital_product_type: self.digital_product_type.clone(),
            sku: self.sku.clone(),
            unit: self.unit.clone(),
            tags: self.tags.clone(),
            price: self.price.clone(),
            discount_type: self.discount_type.clone(),
            discount_amount: self.discount_amount.clone(),
            tax_amount: self.tax_amount.clone(),
            tax_included: self.tax_included,
            minimum_order_qty: self.minimum_order_qty.clone(),
            shipping_cost: self.shipping_cost.clone(),
            stock: self.stock.clone(),
            is_featured: self.is_featured,
            video_link: self.video_link.clone(),
            thumbnail: self.thumbnail.clone(),
            images: self.images.clone(),
            colors: self.colors.ids(),
            attributes: self.attributes.ids(),
        }
    }
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self::new()
    }
}
