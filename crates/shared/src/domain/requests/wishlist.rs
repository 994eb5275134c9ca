use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddWishlistRequest {
    #[validate(length(min = 1, message = "Product ID is required"))]
    pub product_id: String,
}
