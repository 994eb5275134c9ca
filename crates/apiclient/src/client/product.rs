use crate::{
    abstract_trait::ProductApiTrait,
    client::{HttpClient, parse_json},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::product::FindAllProducts,
        responses::{ApiResponse, ApiResponsePagination, ProductResponse},
    },
    errors::ClientError,
};

pub struct ProductApiService {
    http: HttpClient,
}

impl ProductApiService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ProductApiTrait for ProductApiService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ClientError> {
        let response = self
            .http
            .inner()
            .get(self.http.url("/products"))
            .query(&req.to_query_pairs())
            .send()
            .await?;

        parse_json(response).await
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<ProductResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .get(self.http.url(&format!("/products/{id}")))
            .send()
            .await?;

        parse_json(response).await
    }

    async fn recents(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ClientError> {
        let response = self
            .http
            .inner()
            .get(self.http.url("/products/recents"))
            .send()
            .await?;

        parse_json(response).await
    }

    async fn discounts(
        &self,
        page: i32,
        limit: i32,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ClientError> {
        let response = self
            .http
            .inner()
            .get(self.http.url("/products/discounts"))
            .query(&[("page", page.to_string()), ("limit", limit.to_string())])
            .send()
            .await?;

        parse_json(response).await
    }
}
