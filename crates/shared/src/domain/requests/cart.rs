use crate::model::Size;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCartRequest {
    #[validate(length(min = 1, message = "Product ID is required"))]
    pub product_id: String,

    pub size: Size,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCartRequest {
    #[serde(skip_serializing, default)]
    pub cart_id: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCartRequest {
    pub id: String,
    pub delete_all: bool,
}

impl DeleteCartRequest {
    pub fn single(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            delete_all: false,
        }
    }

    pub fn bulk() -> Self {
        Self {
            id: String::new(),
            delete_all: true,
        }
    }
}
