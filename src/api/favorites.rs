use crate::db::DbPool;
use crate::entities::favorite::{self, FavoriteKind};
use crate::entities::{character, film, planet, species, starship, user, vehicle};
use crate::error::ApiError;
use crate::models::{AddFavoriteRequest, FavoriteResponse};
use actix_web::{web, HttpResponse};
use sea_orm::{ColumnTrait, Condition, EntityTrait, ModelTrait, QueryFilter};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesQuery {
    #[schema(example = 1)]
    pub user_id: Option<i64>,
}

/// Display name of the row a bookmark points at, if that row still exists.
pub(crate) async fn target_label(
    db: &DbPool,
    kind: FavoriteKind,
    target_id: i64,
) -> Result<Option<String>, ApiError> {
    let label = match kind {
        FavoriteKind::Film => film::Entity::find_by_id(target_id)
            .one(db)
            .await?
            .map(|film| film.title),
        FavoriteKind::Species => species::Entity::find_by_id(target_id)
            .one(db)
            .await?
            .map(|species| species.name),
        FavoriteKind::Starship => starship::Entity::find_by_id(target_id)
            .one(db)
            .await?
            .map(|starship| starship.name),
        FavoriteKind::Vehicle => vehicle::Entity::find_by_id(target_id)
            .one(db)
            .await?
            .map(|vehicle| vehicle.name),
        FavoriteKind::Character => character::Entity::find_by_id(target_id)
            .one(db)
            .await?
            .map(|character| character.name),
        FavoriteKind::Planet => planet::Entity::find_by_id(target_id)
            .one(db)
            .await?
            .map(|planet| planet.name),
    };
    Ok(label)
}

pub(crate) async fn resolve_favorite(
    db: &DbPool,
    favorite: &favorite::Model,
) -> Result<FavoriteResponse, ApiError> {
    let label = target_label(db, favorite.kind, favorite.target_id).await?;
    Ok(FavoriteResponse::new(favorite, label))
}

fn parse_kind(raw: &str) -> Result<FavoriteKind, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("unknown favorite kind '{}'", raw)))
}

#[utoipa::path(
    get,
    path = "/favorites",
    responses(
        (status = 200, description = "All favorites across all users", body = Vec<FavoriteResponse>)
    ),
    tag = "favorites"
)]
pub async fn list_favorites(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let favorites = favorite::Entity::find().all(pool.get_ref()).await?;

    let mut responses = Vec::with_capacity(favorites.len());
    for favorite in &favorites {
        responses.push(resolve_favorite(pool.get_ref(), favorite).await?);
    }

    Ok(HttpResponse::Ok().json(responses))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    params(
        ("user_id" = Option<i64>, Query, description = "Owner of the favorites")
    ),
    responses(
        (status = 200, description = "Favorites of one user", body = Vec<FavoriteResponse>),
        (status = 400, description = "Missing user_id"),
        (status = 404, description = "User not found")
    ),
    tag = "favorites"
)]
pub async fn list_user_favorites(
    query: web::Query<UserFavoritesQuery>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let user_id = match query.user_id {
        Some(id) => id,
        None => return Err(ApiError::Validation("user_id is required".to_string())),
    };

    let user = user::Entity::find_by_id(user_id).one(pool.get_ref()).await?;
    let user = match user {
        Some(u) => u,
        None => return Err(ApiError::NotFound("user not found".to_string())),
    };

    let favorites = user
        .find_related(favorite::Entity)
        .all(pool.get_ref())
        .await?;

    let mut responses = Vec::with_capacity(favorites.len());
    for favorite in &favorites {
        responses.push(resolve_favorite(pool.get_ref(), favorite).await?);
    }

    Ok(HttpResponse::Ok().json(responses))
}

#[utoipa::path(
    post,
    path = "/favorite/{kind}/{target_id}",
    request_body = AddFavoriteRequest,
    params(
        ("kind" = String, Path, description = "film, species, starship, vehicle, character or planet"),
        ("target_id" = i64, Path, description = "Id of the catalog row to bookmark")
    ),
    responses(
        (status = 201, description = "Favorite recorded"),
        (status = 400, description = "Unknown kind or missing user_id"),
        (status = 404, description = "User or target not found")
    ),
    tag = "favorites"
)]
pub async fn add_favorite(
    path: web::Path<(String, i64)>,
    req: web::Json<AddFavoriteRequest>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let (raw_kind, target_id) = path.into_inner();
    let kind = parse_kind(&raw_kind)?;

    let user_id = match req.user_id {
        Some(id) => id,
        None => return Err(ApiError::Validation("user_id is required".to_string())),
    };

    let user = user::Entity::find_by_id(user_id).one(pool.get_ref()).await?;
    if user.is_none() {
        return Err(ApiError::NotFound("user not found".to_string()));
    }

    let target = target_label(pool.get_ref(), kind, target_id).await?;
    if target.is_none() {
        return Err(ApiError::NotFound(format!("{} not found", kind)));
    }

    let new_favorite = favorite::ActiveModel {
        user_id: sea_orm::Set(user_id),
        kind: sea_orm::Set(kind),
        target_id: sea_orm::Set(target_id),
        ..Default::default()
    };

    favorite::Entity::insert(new_favorite)
        .exec(pool.get_ref())
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": format!("{} added to favorites", kind)
    })))
}

#[utoipa::path(
    delete,
    path = "/favorite/{kind}/{target_id}",
    request_body = AddFavoriteRequest,
    params(
        ("kind" = String, Path, description = "film, species, starship, vehicle, character or planet"),
        ("target_id" = i64, Path, description = "Id of the bookmarked catalog row")
    ),
    responses(
        (status = 200, description = "Favorite removed"),
        (status = 400, description = "Unknown kind or missing user_id"),
        (status = 404, description = "User or favorite not found")
    ),
    tag = "favorites"
)]
pub async fn remove_favorite(
    path: web::Path<(String, i64)>,
    req: web::Json<AddFavoriteRequest>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let (raw_kind, target_id) = path.into_inner();
    let kind = parse_kind(&raw_kind)?;

    let user_id = match req.user_id {
        Some(id) => id,
        None => return Err(ApiError::Validation("user_id is required".to_string())),
    };

    let user = user::Entity::find_by_id(user_id).one(pool.get_ref()).await?;
    if user.is_none() {
        return Err(ApiError::NotFound("user not found".to_string()));
    }

    // Duplicates are allowed on insert, so delete exactly the first match.
    let favorite_row = favorite::Entity::find()
        .filter(
            Condition::all()
                .add(favorite::Column::UserId.eq(user_id))
                .add(favorite::Column::Kind.eq(kind))
                .add(favorite::Column::TargetId.eq(target_id)),
        )
        .one(pool.get_ref())
        .await?;

    let favorite_row = match favorite_row {
        Some(row) => row,
        None => return Err(ApiError::NotFound("favorite not found".to_string())),
    };

    favorite_row.delete(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("favorite {} removed", kind)
    })))
}
