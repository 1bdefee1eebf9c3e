use crate::api::favorites::resolve_favorite;
use crate::db::DbPool;
use crate::entities::{favorite, user};
use crate::error::ApiError;
use crate::models::{CreateUserRequest, UserResponse};
use crate::password::hash_password;
use actix_web::{web, HttpResponse};
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Missing required field"),
        (status = 409, description = "Email or username already taken")
    ),
    tag = "users"
)]
pub async fn create_user(
    req: web::Json<CreateUserRequest>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    let email = match req.email {
        Some(email) => email,
        None => return Err(ApiError::Validation("email is required".to_string())),
    };
    let username = match req.username {
        Some(username) => username,
        None => return Err(ApiError::Validation("username is required".to_string())),
    };
    let password = match req.password {
        Some(password) => password,
        None => return Err(ApiError::Validation("password is required".to_string())),
    };

    let existing_email = user::Entity::find()
        .filter(user::Column::Email.eq(&email))
        .one(pool.get_ref())
        .await?;
    if existing_email.is_some() {
        return Err(ApiError::Conflict("email already exists".to_string()));
    }

    let existing_username = user::Entity::find()
        .filter(user::Column::Username.eq(&username))
        .one(pool.get_ref())
        .await?;
    if existing_username.is_some() {
        return Err(ApiError::Conflict("username already exists".to_string()));
    }

    let password_hash = hash_password(&password)?;

    let new_user = user::ActiveModel {
        email: sea_orm::Set(email),
        username: sea_orm::Set(username),
        password_hash: sea_orm::Set(password_hash),
        name: sea_orm::Set(req.name),
        last_name: sea_orm::Set(req.last_name),
        ..Default::default()
    };

    let user = user::Entity::insert(new_user)
        .exec_with_returning(pool.get_ref())
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "new user created",
        "user_id": user.id
    })))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All registered users with their favorites", body = Vec<UserResponse>)
    ),
    tag = "users"
)]
pub async fn list_users(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let users = user::Entity::find().all(pool.get_ref()).await?;

    let mut responses = Vec::with_capacity(users.len());
    for user in users {
        let favorites = user
            .find_related(favorite::Entity)
            .all(pool.get_ref())
            .await?;

        let mut resolved = Vec::with_capacity(favorites.len());
        for favorite in &favorites {
            resolved.push(resolve_favorite(pool.get_ref(), favorite).await?);
        }

        responses.push(UserResponse {
            id: user.id,
            email: user.email,
            username: user.username,
            name: user.name,
            last_name: user.last_name,
            favorites: resolved,
        });
    }

    Ok(HttpResponse::Ok().json(responses))
}
