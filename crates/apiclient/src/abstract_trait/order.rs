use async_trait::async_trait;
use shared::{
    domain::{
        requests::order::CreateOrderRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::ClientError,
};
use std::sync::Arc;

pub type DynOrderApi = Arc<dyn OrderApiTrait + Send + Sync>;

#[async_trait]
pub trait OrderApiTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ClientError>;
    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ClientError>;
}
