use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub id_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}
