use crate::{
    abstract_trait::WishlistApiTrait,
    client::{HttpClient, parse_json},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::wishlist::AddWishlistRequest,
        responses::{ApiResponse, WishlistItemResponse},
    },
    errors::ClientError,
};

pub struct WishlistApiService {
    http: HttpClient,
}

impl WishlistApiService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl WishlistApiTrait for WishlistApiService {
    async fn add_wishlist(
        &self,
        req: &AddWishlistRequest,
    ) -> Result<ApiResponse<WishlistItemResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .post(self.http.url("/wishlist"))
            .json(req)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn fetch_wishlist(&self) -> Result<ApiResponse<Vec<WishlistItemResponse>>, ClientError> {
        let response = self
            .http
            .inner()
            .get(self.http.url("/wishlist"))
            .send()
            .await?;

        parse_json(response).await
    }
}
