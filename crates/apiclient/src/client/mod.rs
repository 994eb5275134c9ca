mod auth;
mod cart;
mod order;
mod product;
mod search;
mod upload;
mod user;
mod wishlist;

pub use self::auth::AuthApiService;
pub use self::cart::CartApiService;
pub use self::order::OrderApiService;
pub use self::product::ProductApiService;
pub use self::search::{MIN_QUERY_CHARS, SearchApiService};
pub use self::upload::UploadApiService;
pub use self::user::UserApiService;
pub use self::wishlist::WishlistApiService;

use crate::abstract_trait::{
    DynAuthApi, DynCartApi, DynOrderApi, DynProductApi, DynSearchApi, DynUploadApi, DynUserApi,
    DynWishlistApi,
};
use serde::de::DeserializeOwned;
use shared::{config::Config, errors::ClientError, errors::ErrorResponse};
use std::{sync::Arc, time::Duration};

/// Shared reqwest wrapper: base URL resolution plus the cookie jar that
/// carries the session across every resource client.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(ClientError::from)?;

        Ok(Self {
            inner,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

pub(crate) async fn parse_json<T>(response: reqwest::Response) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }

    if !status.is_success() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    response.json::<T>().await.map_err(ClientError::from)
}

#[derive(Clone)]
pub struct ApiClients {
    pub products: DynProductApi,
    pub carts: DynCartApi,
    pub orders: DynOrderApi,
    pub auth: DynAuthApi,
    pub user: DynUserApi,
    pub wishlist: DynWishlistApi,
    pub search: DynSearchApi,
    pub upload: DynUploadApi,
}

impl ApiClients {
    pub fn init(config: &Config) -> Result<Self, ClientError> {
        let http = HttpClient::new(config)?;

        Ok(Self {
            products: Arc::new(ProductApiService::new(http.clone())),
            carts: Arc::new(CartApiService::new(http.clone())),
            orders: Arc::new(OrderApiService::new(http.clone())),
            auth: Arc::new(AuthApiService::new(http.clone())),
            user: Arc::new(UserApiService::new(http.clone())),
            wishlist: Arc::new(WishlistApiService::new(http.clone())),
            search: Arc::new(SearchApiService::new(http.clone())),
            upload: Arc::new(UploadApiService::new(http)),
        })
    }
}
