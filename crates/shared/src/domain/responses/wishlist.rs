use crate::domain::responses::product::ProductResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WishlistItemResponse {
    pub id: String,
    pub product: ProductResponse,
    #[serde(default)]
    pub user_id: String,
    pub created_at: Option<String>,
}
