use crate::db::DbPool;
use crate::entities::favorite::{self, FavoriteKind};
use crate::entities::{film_species, planet, species};
use crate::error::ApiError;
use crate::models::{SpeciesPayload, SpeciesResponse};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, TransactionTrait};
use serde_json::json;

async fn species_response(
    db: &DbPool,
    species: species::Model,
) -> Result<SpeciesResponse, ApiError> {
    let homeworld = match species.homeworld_id {
        Some(id) => planet::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|planet| planet.name),
        None => None,
    };
    Ok(SpeciesResponse::from_model(species, homeworld))
}

async fn check_references(db: &DbPool, payload: &SpeciesPayload) -> Result<(), ApiError> {
    if let Some(planet_id) = payload.homeworld_id {
        if planet::Entity::find_by_id(planet_id).one(db).await?.is_none() {
            return Err(ApiError::Validation(format!(
                "planet {} does not exist",
                planet_id
            )));
        }
    }
    Ok(())
}

async fn url_taken(db: &DbPool, url: &str, exclude_id: Option<i64>) -> Result<bool, ApiError> {
    let mut condition = Condition::all().add(species::Column::Url.eq(url));
    if let Some(id) = exclude_id {
        condition = condition.add(species::Column::Id.ne(id));
    }
    let existing = species::Entity::find().filter(condition).one(db).await?;
    Ok(existing.is_some())
}

#[utoipa::path(
    get,
    path = "/species",
    responses(
        (status = 200, description = "All species", body = Vec<SpeciesResponse>)
    ),
    tag = "species"
)]
pub async fn list_species(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let rows = species::Entity::find().all(pool.get_ref()).await?;

    let mut responses = Vec::with_capacity(rows.len());
    for species in rows {
        responses.push(species_response(pool.get_ref(), species).await?);
    }

    Ok(HttpResponse::Ok().json(responses))
}

#[utoipa::path(
    get,
    path = "/species/{species_id}",
    params(
        ("species_id" = i64, Path, description = "Species id")
    ),
    responses(
        (status = 200, description = "One species", body = SpeciesResponse),
        (status = 404, description = "Species not found")
    ),
    tag = "species"
)]
pub async fn get_species(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let species_id = path.into_inner();

    let species = species::Entity::find_by_id(species_id)
        .one(pool.get_ref())
        .await?;
    let species = match species {
        Some(s) => s,
        None => return Err(ApiError::NotFound("species not found".to_string())),
    };

    Ok(HttpResponse::Ok().json(species_response(pool.get_ref(), species).await?))
}

#[utoipa::path(
    post,
    path = "/species",
    request_body = SpeciesPayload,
    responses(
        (status = 201, description = "Species created"),
        (status = 400, description = "Missing name or language, or dangling reference"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "species"
)]
pub async fn create_species(
    req: web::Json<SpeciesPayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let payload = req.into_inner();

    if payload.name.is_none() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    if payload.language.is_none() {
        return Err(ApiError::Validation("language is required".to_string()));
    }
    check_references(pool.get_ref(), &payload).await?;
    if let Some(url) = payload.url.as_deref() {
        if url_taken(pool.get_ref(), url, None).await? {
            return Err(ApiError::Conflict("url already exists".to_string()));
        }
    }

    let now = Utc::now();
    let mut species = species::ActiveModel {
        created: sea_orm::Set(Some(now)),
        edited: sea_orm::Set(Some(now)),
        ..Default::default()
    };
    payload.apply(&mut species);

    let inserted = species::Entity::insert(species).exec(pool.get_ref()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "species created",
        "species_id": inserted.last_insert_id
    })))
}

#[utoipa::path(
    put,
    path = "/species/{species_id}",
    request_body = SpeciesPayload,
    params(
        ("species_id" = i64, Path, description = "Species id")
    ),
    responses(
        (status = 200, description = "Species updated"),
        (status = 400, description = "Dangling reference"),
        (status = 404, description = "Species not found"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "species"
)]
pub async fn update_species(
    path: web::Path<i64>,
    req: web::Json<SpeciesPayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let species_id = path.into_inner();

    let existing = species::Entity::find_by_id(species_id)
        .one(pool.get_ref())
        .await?;
    let existing = match existing {
        Some(s) => s,
        None => return Err(ApiError::NotFound("species not found".to_string())),
    };

    let payload = req.into_inner();
    if payload.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({ "message": "species updated" })));
    }

    check_references(pool.get_ref(), &payload).await?;
    if let Some(url) = payload.url.as_deref() {
        if url_taken(pool.get_ref(), url, Some(species_id)).await? {
            return Err(ApiError::Conflict("url already exists".to_string()));
        }
    }

    let mut species: species::ActiveModel = existing.into();
    payload.apply(&mut species);
    species.edited = sea_orm::Set(Some(Utc::now()));
    species.update(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "species updated" })))
}

#[utoipa::path(
    delete,
    path = "/species/{species_id}",
    params(
        ("species_id" = i64, Path, description = "Species id")
    ),
    responses(
        (status = 200, description = "Species deleted"),
        (status = 404, description = "Species not found")
    ),
    tag = "species"
)]
pub async fn delete_species(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let species_id = path.into_inner();

    let existing = species::Entity::find_by_id(species_id)
        .one(pool.get_ref())
        .await?;
    if existing.is_none() {
        return Err(ApiError::NotFound("species not found".to_string()));
    }

    let txn = pool.begin().await?;
    favorite::Entity::delete_many()
        .filter(
            Condition::all()
                .add(favorite::Column::Kind.eq(FavoriteKind::Species))
                .add(favorite::Column::TargetId.eq(species_id)),
        )
        .exec(&txn)
        .await?;
    film_species::Entity::delete_many()
        .filter(film_species::Column::SpeciesId.eq(species_id))
        .exec(&txn)
        .await?;
    species::Entity::delete_by_id(species_id).exec(&txn).await?;
    txn.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "species deleted" })))
}
