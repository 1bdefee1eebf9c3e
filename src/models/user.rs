use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::FavoriteResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub favorites: Vec<FavoriteResponse>,
}
