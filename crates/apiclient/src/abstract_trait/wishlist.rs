use async_trait::async_trait;
use shared::{
    domain::{
        requests::wishlist::AddWishlistRequest,
        responses::{ApiResponse, WishlistItemResponse},
    },
    errors::ClientError,
};
use std::sync::Arc;

pub type DynWishlistApi = Arc<dyn WishlistApiTrait + Send + Sync>;

#[async_trait]
pub trait WishlistApiTrait {
    async fn add_wishlist(
        &self,
        req: &AddWishlistRequest,
    ) -> Result<ApiResponse<WishlistItemResponse>, ClientError>;
    async fn fetch_wishlist(&self) -> Result<ApiResponse<Vec<WishlistItemResponse>>, ClientError>;
}
