use crate::db::DbPool;
use crate::entities::favorite::{self, FavoriteKind};
use crate::entities::{film_starship, starship};
use crate::error::ApiError;
use crate::models::{StarshipPayload, StarshipResponse};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, TransactionTrait};
use serde_json::json;

async fn url_taken(db: &DbPool, url: &str, exclude_id: Option<i64>) -> Result<bool, ApiError> {
    let mut condition = Condition::all().add(starship::Column::Url.eq(url));
    if let Some(id) = exclude_id {
        condition = condition.add(starship::Column::Id.ne(id));
    }
    let existing = starship::Entity::find().filter(condition).one(db).await?;
    Ok(existing.is_some())
}

#[utoipa::path(
    get,
    path = "/starships",
    responses(
        (status = 200, description = "All starships", body = Vec<StarshipResponse>)
    ),
    tag = "starships"
)]
pub async fn list_starships(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let starships = starship::Entity::find().all(pool.get_ref()).await?;

    let responses: Vec<StarshipResponse> =
        starships.into_iter().map(StarshipResponse::from).collect();

    Ok(HttpResponse::Ok().json(responses))
}

#[utoipa::path(
    get,
    path = "/starship/{starship_id}",
    params(
        ("starship_id" = i64, Path, description = "Starship id")
    ),
    responses(
        (status = 200, description = "One starship", body = StarshipResponse),
        (status = 404, description = "Starship not found")
    ),
    tag = "starships"
)]
pub async fn get_starship(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let starship_id = path.into_inner();

    let starship = starship::Entity::find_by_id(starship_id)
        .one(pool.get_ref())
        .await?;
    let starship = match starship {
        Some(s) => s,
        None => return Err(ApiError::NotFound("starship not found".to_string())),
    };

    Ok(HttpResponse::Ok().json(StarshipResponse::from(starship)))
}

#[utoipa::path(
    post,
    path = "/starships",
    request_body = StarshipPayload,
    responses(
        (status = 201, description = "Starship created"),
        (status = 400, description = "Missing name"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "starships"
)]
pub async fn create_starship(
    req: web::Json<StarshipPayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let payload = req.into_inner();

    if payload.name.is_none() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    if let Some(url) = payload.url.as_deref() {
        if url_taken(pool.get_ref(), url, None).await? {
            return Err(ApiError::Conflict("url already exists".to_string()));
        }
    }

    let now = Utc::now();
    let mut starship = starship::ActiveModel {
        created: sea_orm::Set(Some(now)),
        edited: sea_orm::Set(Some(now)),
        ..Default::default()
    };
    payload.apply(&mut starship);

    let inserted = starship::Entity::insert(starship)
        .exec(pool.get_ref())
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "starship created",
        "starship_id": inserted.last_insert_id
    })))
}

#[utoipa::path(
    put,
    path = "/starship/{starship_id}",
    request_body = StarshipPayload,
    params(
        ("starship_id" = i64, Path, description = "Starship id")
    ),
    responses(
        (status = 200, description = "Starship updated"),
        (status = 404, description = "Starship not found"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "starships"
)]
pub async fn update_starship(
    path: web::Path<i64>,
    req: web::Json<StarshipPayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let starship_id = path.into_inner();

    let existing = starship::Entity::find_by_id(starship_id)
        .one(pool.get_ref())
        .await?;
    let existing = match existing {
        Some(s) => s,
        None => return Err(ApiError::NotFound("starship not found".to_string())),
    };

    let payload = req.into_inner();
    if payload.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({ "message": "starship updated" })));
    }

    if let Some(url) = payload.url.as_deref() {
        if url_taken(pool.get_ref(), url, Some(starship_id)).await? {
            return Err(ApiError::Conflict("url already exists".to_string()));
        }
    }

    let mut starship: starship::ActiveModel = existing.into();
    payload.apply(&mut starship);
    starship.edited = sea_orm::Set(Some(Utc::now()));
    starship.update(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "starship updated" })))
}

#[utoipa::path(
    delete,
    path = "/starship/{starship_id}",
    params(
        ("starship_id" = i64, Path, description = "Starship id")
    ),
    responses(
        (status = 200, description = "Starship deleted"),
        (status = 404, description = "Starship not found")
    ),
    tag = "starships"
)]
pub async fn delete_starship(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let starship_id = path.into_inner();

    let existing = starship::Entity::find_by_id(starship_id)
        .one(pool.get_ref())
        .await?;
    if existing.is_none() {
        return Err(ApiError::NotFound("starship not found".to_string()));
    }

    let txn = pool.begin().await?;
    favorite::Entity::delete_many()
        .filter(
            Condition::all()
                .add(favorite::Column::Kind.eq(FavoriteKind::Starship))
                .add(favorite::Column::TargetId.eq(starship_id)),
        )
        .exec(&txn)
        .await?;
    film_starship::Entity::delete_many()
        .filter(film_starship::Column::StarshipId.eq(starship_id))
        .exec(&txn)
        .await?;
    starship::Entity::delete_by_id(starship_id)
        .exec(&txn)
        .await?;
    txn.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "starship deleted" })))
}
