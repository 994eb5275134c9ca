use async_trait::async_trait;
use shared::{
    domain::{
        requests::cart::{CreateCartRequest, DeleteCartRequest, UpdateCartRequest},
        responses::{ApiResponse, CartItemResponse, CartListResponse, DeletedCartResponse},
    },
    errors::ClientError,
};
use std::sync::Arc;

pub type DynCartApi = Arc<dyn CartApiTrait + Send + Sync>;

#[async_trait]
pub trait CartApiTrait {
    async fn fetch_carts(&self) -> Result<ApiResponse<CartListResponse>, ClientError>;
    async fn create_cart(
        &self,
        req: &CreateCartRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ClientError>;
    async fn update_cart(
        &self,
        req: &UpdateCartRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ClientError>;
    async fn delete_cart(
        &self,
        req: &DeleteCartRequest,
    ) -> Result<ApiResponse<DeletedCartResponse>, ClientError>;
}
