use crate::db::DbPool;
use crate::entities::favorite::{self, FavoriteKind};
use crate::entities::{character, film, planet};
use crate::error::ApiError;
use crate::models::{CharacterPayload, CharacterResponse};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, TransactionTrait};
use serde_json::json;

async fn character_response(
    db: &DbPool,
    character: character::Model,
) -> Result<CharacterResponse, ApiError> {
    let homeworld = match character.homeworld_id {
        Some(id) => planet::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|planet| planet.name),
        None => None,
    };
    let film = match character.film_id {
        Some(id) => film::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|film| film.title),
        None => None,
    };
    Ok(CharacterResponse::from_model(character, homeworld, film))
}

// Referenced rows must exist before we persist the ids pointing at them.
async fn check_references(db: &DbPool, payload: &CharacterPayload) -> Result<(), ApiError> {
    if let Some(planet_id) = payload.homeworld_id {
        if planet::Entity::find_by_id(planet_id).one(db).await?.is_none() {
            return Err(ApiError::Validation(format!(
                "planet {} does not exist",
                planet_id
            )));
        }
    }
    if let Some(film_id) = payload.film_id {
        if film::Entity::find_by_id(film_id).one(db).await?.is_none() {
            return Err(ApiError::Validation(format!(
                "film {} does not exist",
                film_id
            )));
        }
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/characters",
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterResponse>)
    ),
    tag = "characters"
)]
pub async fn list_characters(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let characters = character::Entity::find().all(pool.get_ref()).await?;

    let mut responses = Vec::with_capacity(characters.len());
    for character in characters {
        responses.push(character_response(pool.get_ref(), character).await?);
    }

    Ok(HttpResponse::Ok().json(responses))
}

#[utoipa::path(
    get,
    path = "/character/{character_id}",
    params(
        ("character_id" = i64, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "One character", body = CharacterResponse),
        (status = 404, description = "Character not found")
    ),
    tag = "characters"
)]
pub async fn get_character(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let character_id = path.into_inner();

    let character = character::Entity::find_by_id(character_id)
        .one(pool.get_ref())
        .await?;
    let character = match character {
        Some(c) => c,
        None => return Err(ApiError::NotFound("character not found".to_string())),
    };

    Ok(HttpResponse::Ok().json(character_response(pool.get_ref(), character).await?))
}

#[utoipa::path(
    post,
    path = "/characters",
    request_body = CharacterPayload,
    responses(
        (status = 201, description = "Character created"),
        (status = 400, description = "Missing name or dangling reference")
    ),
    tag = "characters"
)]
pub async fn create_character(
    req: web::Json<CharacterPayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let payload = req.into_inner();

    if payload.name.is_none() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    check_references(pool.get_ref(), &payload).await?;

    let now = Utc::now();
    let mut character = character::ActiveModel {
        created: sea_orm::Set(Some(now)),
        edited: sea_orm::Set(Some(now)),
        ..Default::default()
    };
    payload.apply(&mut character);

    let inserted = character::Entity::insert(character)
        .exec(pool.get_ref())
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "character created",
        "character_id": inserted.last_insert_id
    })))
}

#[utoipa::path(
    put,
    path = "/character/{character_id}",
    request_body = CharacterPayload,
    params(
        ("character_id" = i64, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "Character updated"),
        (status = 400, description = "Dangling reference"),
        (status = 404, description = "Character not found")
    ),
    tag = "characters"
)]
pub async fn update_character(
    path: web::Path<i64>,
    req: web::Json<CharacterPayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let character_id = path.into_inner();

    let existing = character::Entity::find_by_id(character_id)
        .one(pool.get_ref())
        .await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(ApiError::NotFound("character not found".to_string())),
    };

    let payload = req.into_inner();
    if payload.is_empty() {
        // Nothing to change; acknowledge without touching the row.
        return Ok(HttpResponse::Ok().json(json!({ "message": "character updated" })));
    }
    check_references(pool.get_ref(), &payload).await?;

    let mut character: character::ActiveModel = existing.into();
    payload.apply(&mut character);
    character.edited = sea_orm::Set(Some(Utc::now()));
    character.update(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "character updated" })))
}

#[utoipa::path(
    delete,
    path = "/character/{character_id}",
    params(
        ("character_id" = i64, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "Character deleted"),
        (status = 404, description = "Character not found")
    ),
    tag = "characters"
)]
pub async fn delete_character(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let character_id = path.into_inner();

    let existing = character::Entity::find_by_id(character_id)
        .one(pool.get_ref())
        .await?;
    if existing.is_none() {
        return Err(ApiError::NotFound("character not found".to_string()));
    }

    // The row and the bookmarks pointing at it go together.
    let txn = pool.begin().await?;
    favorite::Entity::delete_many()
        .filter(
            Condition::all()
                .add(favorite::Column::Kind.eq(FavoriteKind::Character))
                .add(favorite::Column::TargetId.eq(character_id)),
        )
        .exec(&txn)
        .await?;
    character::Entity::delete_by_id(character_id)
        .exec(&txn)
        .await?;
    txn.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "character deleted" })))
}
