use crate::db::DbPool;
use crate::entities::favorite::{self, FavoriteKind};
use crate::entities::{character, film, film_planet, film_species, film_starship, film_vehicle};
use crate::error::ApiError;
use crate::models::{FilmPayload, FilmResponse};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, TransactionTrait};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/films",
    responses(
        (status = 200, description = "All films", body = Vec<FilmResponse>)
    ),
    tag = "films"
)]
pub async fn list_films(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let films = film::Entity::find().all(pool.get_ref()).await?;

    let responses: Vec<FilmResponse> = films.into_iter().map(FilmResponse::from).collect();

    Ok(HttpResponse::Ok().json(responses))
}

#[utoipa::path(
    get,
    path = "/film/{film_id}",
    params(
        ("film_id" = i64, Path, description = "Film id")
    ),
    responses(
        (status = 200, description = "One film", body = FilmResponse),
        (status = 404, description = "Film not found")
    ),
    tag = "films"
)]
pub async fn get_film(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let film_id = path.into_inner();

    let film = film::Entity::find_by_id(film_id).one(pool.get_ref()).await?;
    let film = match film {
        Some(f) => f,
        None => return Err(ApiError::NotFound("film not found".to_string())),
    };

    Ok(HttpResponse::Ok().json(FilmResponse::from(film)))
}

#[utoipa::path(
    post,
    path = "/films",
    request_body = FilmPayload,
    responses(
        (status = 201, description = "Film created"),
        (status = 400, description = "Missing title, episode_id or url"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "films"
)]
pub async fn create_film(
    req: web::Json<FilmPayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let payload = req.into_inner();

    if payload.title.is_none() {
        return Err(ApiError::Validation("title is required".to_string()));
    }
    if payload.episode_id.is_none() {
        return Err(ApiError::Validation("episode_id is required".to_string()));
    }
    let url = match payload.url.clone() {
        Some(url) => url,
        None => return Err(ApiError::Validation("url is required".to_string())),
    };

    let existing = film::Entity::find()
        .filter(film::Column::Url.eq(&url))
        .one(pool.get_ref())
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict("url already exists".to_string()));
    }

    let now = Utc::now();
    let mut film = film::ActiveModel {
        created: sea_orm::Set(Some(now)),
        edited: sea_orm::Set(Some(now)),
        ..Default::default()
    };
    payload.apply(&mut film);

    let inserted = film::Entity::insert(film).exec(pool.get_ref()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "film created",
        "film_id": inserted.last_insert_id
    })))
}

#[utoipa::path(
    put,
    path = "/film/{film_id}",
    request_body = FilmPayload,
    params(
        ("film_id" = i64, Path, description = "Film id")
    ),
    responses(
        (status = 200, description = "Film updated"),
        (status = 404, description = "Film not found"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "films"
)]
pub async fn update_film(
    path: web::Path<i64>,
    req: web::Json<FilmPayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let film_id = path.into_inner();

    let existing = film::Entity::find_by_id(film_id).one(pool.get_ref()).await?;
    let existing = match existing {
        Some(f) => f,
        None => return Err(ApiError::NotFound("film not found".to_string())),
    };

    let payload = req.into_inner();
    if payload.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({ "message": "film updated" })));
    }

    if let Some(url) = payload.url.clone() {
        let taken = film::Entity::find()
            .filter(
                Condition::all()
                    .add(film::Column::Url.eq(&url))
                    .add(film::Column::Id.ne(film_id)),
            )
            .one(pool.get_ref())
            .await?;
        if taken.is_some() {
            return Err(ApiError::Conflict("url already exists".to_string()));
        }
    }

    let mut film: film::ActiveModel = existing.into();
    payload.apply(&mut film);
    film.edited = sea_orm::Set(Some(Utc::now()));
    film.update(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "film updated" })))
}

#[utoipa::path(
    delete,
    path = "/film/{film_id}",
    params(
        ("film_id" = i64, Path, description = "Film id")
    ),
    responses(
        (status = 200, description = "Film deleted"),
        (status = 404, description = "Film not found")
    ),
    tag = "films"
)]
pub async fn delete_film(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let film_id = path.into_inner();

    let existing = film::Entity::find_by_id(film_id).one(pool.get_ref()).await?;
    if existing.is_none() {
        return Err(ApiError::NotFound("film not found".to_string()));
    }

    // Bookmarks and cast links go with the film; characters keep their row
    // but lose the film reference.
    let txn = pool.begin().await?;
    favorite::Entity::delete_many()
        .filter(
            Condition::all()
                .add(favorite::Column::Kind.eq(FavoriteKind::Film))
                .add(favorite::Column::TargetId.eq(film_id)),
        )
        .exec(&txn)
        .await?;
    film_starship::Entity::delete_many()
        .filter(film_starship::Column::FilmId.eq(film_id))
        .exec(&txn)
        .await?;
    film_vehicle::Entity::delete_many()
        .filter(film_vehicle::Column::FilmId.eq(film_id))
        .exec(&txn)
        .await?;
    film_species::Entity::delete_many()
        .filter(film_species::Column::FilmId.eq(film_id))
        .exec(&txn)
        .await?;
    film_planet::Entity::delete_many()
        .filter(film_planet::Column::FilmId.eq(film_id))
        .exec(&txn)
        .await?;
    character::Entity::update_many()
        .col_expr(character::Column::FilmId, Expr::value(Option::<i64>::None))
        .filter(character::Column::FilmId.eq(film_id))
        .exec(&txn)
        .await?;
    film::Entity::delete_by_id(film_id).exec(&txn).await?;
    txn.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "film deleted" })))
}
