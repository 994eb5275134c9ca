use crate::model::UserProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfileResponse {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub avatar: Option<String>,
}

// response to model
impl From<UserProfileResponse> for UserProfile {
    fn from(value: UserProfileResponse) -> Self {
        UserProfile {
            id: value.id,
            firstname: value.firstname,
            lastname: value.lastname,
            email: value.email,
            avatar: value.avatar,
        }
    }
}
