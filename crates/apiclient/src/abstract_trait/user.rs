use async_trait::async_trait;
use shared::{
    domain::{
        requests::user::{ChangePasswordRequest, ResetPasswordRequest, UpdateProfileRequest},
        responses::{ApiResponse, StatusResponse, UserProfileResponse},
    },
    errors::ClientError,
};
use std::sync::Arc;

pub type DynUserApi = Arc<dyn UserApiTrait + Send + Sync>;

#[async_trait]
pub trait UserApiTrait {
    async fn profile(&self) -> Result<ApiResponse<UserProfileResponse>, ClientError>;
    async fn update_profile(
        &self,
        req: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ClientError>;
    async fn change_password(
        &self,
        req: &ChangePasswordRequest,
    ) -> Result<StatusResponse, ClientError>;
    async fn reset_password(&self, req: &ResetPasswordRequest)
    -> Result<StatusResponse, ClientError>;
}
