use crate::{
    abstract_trait::SearchApiTrait,
    client::{HttpClient, parse_json},
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ProductResponse},
    errors::ClientError,
};

pub const MIN_QUERY_CHARS: usize = 2;

pub struct SearchApiService {
    http: HttpClient,
}

impl SearchApiService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl SearchApiTrait for SearchApiService {
    async fn search(&self, query: &str) -> Result<ApiResponse<Vec<ProductResponse>>, ClientError> {
        // Short queries are treated as an empty result set, never sent.
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "OK".to_string(),
                data: Vec::new(),
            });
        }

        let response = self
            .http
            .inner()
            .get(self.http.url("/search"))
            .query(&[("q", query)])
            .send()
            .await?;

        parse_json(response).await
    }
}
