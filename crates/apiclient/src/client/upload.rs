use crate::{
    abstract_trait::UploadApiTrait,
    client::{HttpClient, parse_json},
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use shared::{
    domain::responses::{ApiResponse, UploadResponse},
    errors::ClientError,
};

pub struct UploadApiService {
    http: HttpClient,
}

impl UploadApiService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl UploadApiTrait for UploadApiService {
    async fn upload_image(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiResponse<UploadResponse>, ClientError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;

        let form = Form::new().part("file", part);

        let response = self
            .http
            .inner()
            .post(self.http.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;

        parse_json(response).await
    }
}
