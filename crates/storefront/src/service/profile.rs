use crate::{notification::Notifier, store::UserStore};
use apiclient::abstract_trait::{DynUploadApi, DynUserApi};
use shared::{
    domain::requests::user::{ChangePasswordRequest, ResetPasswordRequest, UpdateProfileRequest},
    errors::ServiceError,
    model::UserProfile,
    utils::validation_messages,
};
use tracing::{error, info};
use validator::Validate;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Clone)]
pub struct ProfileService {
    user_api: DynUserApi,
    upload_api: DynUploadApi,
    user_store: UserStore,
    notifier: Notifier,
}

pub struct ProfileServiceDeps {
    pub user_api: DynUserApi,
    pub upload_api: DynUploadApi,
    pub user_store: UserStore,
    pub notifier: Notifier,
}

impl ProfileService {
    pub fn new(deps: ProfileServiceDeps) -> Self {
        let ProfileServiceDeps {
            user_api,
            upload_api,
            user_store,
            notifier,
        } = deps;

        Self {
            user_api,
            upload_api,
            user_store,
            notifier,
        }
    }

    pub async fn fetch_profile(&self) -> Result<UserProfile, ServiceError> {
        let response = self.user_api.profile().await?;
        let profile: UserProfile = response.data.into();

        self.user_store.set_user(profile.clone());
        Ok(profile)
    }

    pub async fn update_profile(
        &self,
        req: &UpdateProfileRequest,
    ) -> Result<UserProfile, ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        match self.user_api.update_profile(req).await {
            Ok(response) => {
                let profile: UserProfile = response.data.into();
                self.user_store.set_user(profile.clone());
                self.notifier.success(response.message);
                Ok(profile)
            }
            Err(e) => {
                error!("❌ Profile update failed: {e:?}");
                self.notifier
                    .error("Failed to update profile. Please try again.");
                Err(e.into())
            }
        }
    }

    pub async fn change_password(&self, req: &ChangePasswordRequest) -> Result<(), ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        match self.user_api.change_password(req).await {
            Ok(response) => {
                self.notifier.success(response.message);
                Ok(())
            }
            Err(e) => {
                error!("❌ Password change failed: {e:?}");
                self.notifier
                    .error("Failed to change password. Please try again.");
                Err(e.into())
            }
        }
    }

    pub async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<(), ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        match self.user_api.reset_password(req).await {
            Ok(response) => {
                self.notifier.success(response.message);
                Ok(())
            }
            Err(e) => {
                error!("❌ Password reset failed: {e:?}");
                self.notifier
                    .error("Failed to reset password. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Client-side guard before the multipart upload: 5 MB ceiling, image
    /// types only. The server re-validates; this only saves the round trip.
    pub async fn upload_avatar(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ServiceError> {
        if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
            self.notifier
                .error("Only JPEG, PNG, GIF and WebP images are allowed");
            return Err(ServiceError::Validation(vec![format!(
                "Unsupported image type: {content_type}"
            )]));
        }

        if bytes.len() > MAX_UPLOAD_BYTES {
            self.notifier.error("Image exceeds 5MB limit.");
            return Err(ServiceError::Validation(vec![
                "Image exceeds 5MB limit".to_string(),
            ]));
        }

        match self
            .upload_api
            .upload_image(file_name, content_type, bytes)
            .await
        {
            Ok(response) => {
                let url = response.data.url;
                info!("✅ Uploaded profile picture to {url}");

                let snapshot = self.user_store.snapshot();
                if let Some(mut user) = snapshot.user {
                    user.avatar = Some(url.clone());
                    self.user_store.set_user(user);
                }

                self.notifier.success("Profile picture updated");
                Ok(url)
            }
            Err(e) => {
                error!("❌ Upload failed: {e:?}");
                self.notifier.error("Failed to upload image");
                Err(e.into())
            }
        }
    }
}
