use crate::{
    abstract_trait::OrderApiTrait,
    client::{HttpClient, parse_json},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::order::CreateOrderRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::ClientError,
};

pub struct OrderApiService {
    http: HttpClient,
}

impl OrderApiService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl OrderApiTrait for OrderApiService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .post(self.http.url("/orders"))
            .json(req)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ClientError> {
        let response = self
            .http
            .inner()
            .get(self.http.url(&format!("/orders/{user_id}")))
            .send()
            .await?;

        parse_json(response).await
    }
}
