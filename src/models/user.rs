// src/models/user.rs

use serde::{Deserialize, Serialize};

/// Profile returned by the upstream `GET /Admin/user/{id}` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_no: String,
}

impl UserProfile {
    /// First word of the username, used as a short greeting in the header.
    ///
    /// A username without spaces is returned whole; the old UI's
    /// `substring(0, indexOf(' '))` showed an empty name in that case.
    pub fn display_name(&self) -> &str {
        self.username.split_whitespace().next().unwrap_or("")
    }
}

/// Session user's profile as served to the UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: i64,
    pub display_name: String,
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl MeResponse {
    pub fn new(user_id: i64, profile: UserProfile) -> Self {
        Self {
            user_id,
            display_name: profile.display_name().to_string(),
            profile,
        }
    }
}
