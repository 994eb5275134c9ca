use crate::{
    abstract_trait::UserApiTrait,
    client::{HttpClient, parse_json},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::user::{ChangePasswordRequest, ResetPasswordRequest, UpdateProfileRequest},
        responses::{ApiResponse, StatusResponse, UserProfileResponse},
    },
    errors::ClientError,
};

pub struct UserApiService {
    http: HttpClient,
}

impl UserApiService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl UserApiTrait for UserApiService {
    async fn profile(&self) -> Result<ApiResponse<UserProfileResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .get(self.http.url("/user/profile"))
            .send()
            .await?;

        parse_json(response).await
    }

    async fn update_profile(
        &self,
        req: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ClientError> {
        let response = self
            .http
            .inner()
            .patch(self.http.url("/user/update"))
            .json(req)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn change_password(
        &self,
        req: &ChangePasswordRequest,
    ) -> Result<StatusResponse, ClientError> {
        let response = self
            .http
            .inner()
            .post(self.http.url("/user/changePassword"))
            .json(req)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn reset_password(
        &self,
        req: &ResetPasswordRequest,
    ) -> Result<StatusResponse, ClientError> {
        let response = self
            .http
            .inner()
            .post(self.http.url("/user/resetPassword"))
            .json(req)
            .send()
            .await?;

        parse_json(response).await
    }
}
