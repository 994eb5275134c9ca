use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub brand: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub stock: i32,
    pub images: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Product {
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }

    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount_percentage / 100.0)
    }
}
