use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ProductResponse},
    errors::ClientError,
};
use std::sync::Arc;

pub type DynSearchApi = Arc<dyn SearchApiTrait + Send + Sync>;

#[async_trait]
pub trait SearchApiTrait {
    async fn search(&self, query: &str) -> Result<ApiResponse<Vec<ProductResponse>>, ClientError>;
}
