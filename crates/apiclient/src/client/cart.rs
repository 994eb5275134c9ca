use crate::{
    abstract_trait::CartApiTrait,
    client::{HttpClient, parse_json},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::cart::{CreateCartRequest, DeleteCartRequest, UpdateCartRequest},
        responses::{ApiResponse, CartItemResponse, CartListResponse, DeletedCartResponse},
    },
    errors::ClientError,
};

pub struct CartApiService {
    http: HttpClient,
}

impl CartApiService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CartApiTrait for CartApiService {
    async fn fetch_carts(&self) -> Result<ApiResponse<CartListResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .get(self.http.url("/carts"))
            .send()
            .await?;

        parse_json(response).await
    }

    async fn create_cart(
        &self,
        req: &CreateCartRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .post(self.http.url("/carts"))
            .json(req)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn update_cart(
        &self,
        req: &UpdateCartRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .put(self.http.url(&format!("/carts/{}", req.cart_id)))
            .json(req)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn delete_cart(
        &self,
        req: &DeleteCartRequest,
    ) -> Result<ApiResponse<DeletedCartResponse>, ClientError> {
        let path = if req.delete_all {
            "/carts".to_string()
        } else {
            format!("/carts/{}", req.id)
        };

        let response = self
            .http
            .inner()
            .delete(self.http.url(&path))
            .query(&[("deleteAll", req.delete_all.to_string())])
            .send()
            .await?;

        parse_json(response).await
    }
}
