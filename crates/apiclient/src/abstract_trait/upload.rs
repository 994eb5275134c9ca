use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, UploadResponse},
    errors::ClientError,
};
use std::sync::Arc;

pub type DynUploadApi = Arc<dyn UploadApiTrait + Send + Sync>;

#[async_trait]
pub trait UploadApiTrait {
    async fn upload_image(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiResponse<UploadResponse>, ClientError>;
}
