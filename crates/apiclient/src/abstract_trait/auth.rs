use async_trait::async_trait;
use shared::{
    domain::{
        requests::auth::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, StatusResponse, UserProfileResponse},
    },
    errors::ClientError,
};
use std::sync::Arc;

pub type DynAuthApi = Arc<dyn AuthApiTrait + Send + Sync>;

#[async_trait]
pub trait AuthApiTrait {
    async fn sign_up(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ClientError>;
    async fn sign_in(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ClientError>;
    async fn logout(&self) -> Result<StatusResponse, ClientError>;
}
