use crate::domain::responses::product::ProductResponse;
use crate::model::{CartItem, Size};
use crate::utils::parse_datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartItemResponse {
    pub id: String,
    pub product: ProductResponse,
    pub size: Size,
    pub quantity: u32,
    #[serde(default)]
    pub user_id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartListResponse {
    pub cart: Vec<CartItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeletedCart {
    pub id: String,
}

/// Single deletes echo the removed row; the bulk variant acknowledges with
/// no cart payload.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeletedCartResponse {
    #[serde(default)]
    pub cart: Option<DeletedCart>,
}

// response to model
impl From<CartItemResponse> for CartItem {
    fn from(value: CartItemResponse) -> Self {
        CartItem {
            id: value.id,
            product: value.product.into(),
            size: value.size,
            quantity: value.quantity,
            user_id: value.user_id,
            created_at: value.created_at.as_deref().and_then(parse_datetime),
            updated_at: value.updated_at.as_deref().and_then(parse_datetime),
        }
    }
}
