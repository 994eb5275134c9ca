use crate::model::Product;
use crate::utils::parse_datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductResponse {
    pub id: String,
    pub brand: String,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    pub stock: i32,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// response to model
impl From<ProductResponse> for Product {
    fn from(value: ProductResponse) -> Self {
        Product {
            id: value.id,
            brand: value.brand,
            category: value.category,
            title: value.title,
            description: value.description,
            price: value.price,
            discount_percentage: value.discount_percentage,
            stock: value.stock,
            images: value.images,
            created_at: value.created_at.as_deref().and_then(parse_datetime),
            updated_at: value.updated_at.as_deref().and_then(parse_datetime),
        }
    }
}
