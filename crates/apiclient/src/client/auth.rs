use crate::{
    abstract_trait::AuthApiTrait,
    client::{HttpClient, parse_json},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::auth::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, StatusResponse, UserProfileResponse},
    },
    errors::ClientError,
};

pub struct AuthApiService {
    http: HttpClient,
}

impl AuthApiService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AuthApiTrait for AuthApiService {
    async fn sign_up(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .post(self.http.url("/auth/signUp"))
            .json(req)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn sign_in(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .post(self.http.url("/auth/signIn"))
            .json(req)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn logout(&self) -> Result<StatusResponse, ClientError> {
        let response = self
            .http
            .inner()
            .post(self.http.url("/user/logout"))
            .send()
            .await?;

        parse_json(response).await
    }
}
