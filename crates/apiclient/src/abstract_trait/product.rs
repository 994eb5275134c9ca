use async_trait::async_trait;
use shared::{
    domain::{
        requests::product::FindAllProducts,
        responses::{ApiResponse, ApiResponsePagination, ProductResponse},
    },
    errors::ClientError,
};
use std::sync::Arc;

pub type DynProductApi = Arc<dyn ProductApiTrait + Send + Sync>;

#[async_trait]
pub trait ProductApiTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ClientError>;
    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<ProductResponse>, ClientError>;
    async fn recents(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ClientError>;
    async fn discounts(
        &self,
        page: i32,
        limit: i32,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ClientError>;
}
