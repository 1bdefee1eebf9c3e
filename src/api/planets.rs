use crate::db::DbPool;
use crate::entities::favorite::{self, FavoriteKind};
use crate::entities::{character, film_planet, planet, species};
use crate::error::ApiError;
use crate::models::{PlanetPayload, PlanetResponse};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, TransactionTrait};
use serde_json::json;

async fn url_taken(db: &DbPool, url: &str, exclude_id: Option<i64>) -> Result<bool, ApiError> {
    let mut condition = Condition::all().add(planet::Column::Url.eq(url));
    if let Some(id) = exclude_id {
        condition = condition.add(planet::Column::Id.ne(id));
    }
    let existing = planet::Entity::find().filter(condition).one(db).await?;
    Ok(existing.is_some())
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetResponse>)
    ),
    tag = "planets"
)]
pub async fn list_planets(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let planets = planet::Entity::find().all(pool.get_ref()).await?;

    let responses: Vec<PlanetResponse> = planets.into_iter().map(PlanetResponse::from).collect();

    Ok(HttpResponse::Ok().json(responses))
}

#[utoipa::path(
    get,
    path = "/planet/{planet_id}",
    params(
        ("planet_id" = i64, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "One planet", body = PlanetResponse),
        (status = 404, description = "Planet not found")
    ),
    tag = "planets"
)]
pub async fn get_planet(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let planet_id = path.into_inner();

    let planet = planet::Entity::find_by_id(planet_id)
        .one(pool.get_ref())
        .await?;
    let planet = match planet {
        Some(p) => p,
        None => return Err(ApiError::NotFound("planet not found".to_string())),
    };

    Ok(HttpResponse::Ok().json(PlanetResponse::from(planet)))
}

#[utoipa::path(
    post,
    path = "/planets",
    request_body = PlanetPayload,
    responses(
        (status = 201, description = "Planet created"),
        (status = 400, description = "Missing name"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "planets"
)]
pub async fn create_planet(
    req: web::Json<PlanetPayload>,
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
    let mut planet = planet::ActiveModel {
        created: sea_orm::Set(Some(now)),
        edited: sea_orm::Set(Some(now)),
        ..Default::default()
    };
    payload.apply(&mut planet);

    let inserted = planet::Entity::insert(planet).exec(pool.get_ref()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "planet created",
        "planet_id": inserted.last_insert_id
    })))
}

#[utoipa::path(
    put,
    path = "/planet/{planet_id}",
    request_body = PlanetPayload,
    params(
        ("planet_id" = i64, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Planet updated"),
        (status = 404, description = "Planet not found"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "planets"
)]
pub async fn update_planet(
    path: web::Path<i64>,
    req: web::Json<PlanetPayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let planet_id = path.into_inner();

    let existing = planet::Entity::find_by_id(planet_id)
        .one(pool.get_ref())
        .await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(ApiError::NotFound("planet not found".to_string())),
    };

    let payload = req.into_inner();
    if payload.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({ "message": "planet updated" })));
    }

    if let Some(url) = payload.url.as_deref() {
        if url_taken(pool.get_ref(), url, Some(planet_id)).await? {
            return Err(ApiError::Conflict("url already exists".to_string()));
        }
    }

    let mut planet: planet::ActiveModel = existing.into();
    payload.apply(&mut planet);
    planet.edited = sea_orm::Set(Some(Utc::now()));
    planet.update(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "planet updated" })))
}

#[utoipa::path(
    delete,
    path = "/planet/{planet_id}",
    params(
        ("planet_id" = i64, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Planet deleted"),
        (status = 404, description = "Planet not found")
    ),
    tag = "planets"
)]
pub async fn delete_planet(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let planet_id = path.into_inner();

    let existing = planet::Entity::find_by_id(planet_id)
        .one(pool.get_ref())
        .await?;
    if existing.is_none() {
        return Err(ApiError::NotFound("planet not found".to_string()));
    }

    // Bookmarks and film links disappear with the planet; rows that merely
    // point at it as a homeworld survive with the reference cleared.
    let txn = pool.begin().await?;
    favorite::Entity::delete_many()
        .filter(
            Condition::all()
                .add(favorite::Column::Kind.eq(FavoriteKind::Planet))
                .add(favorite::Column::TargetId.eq(planet_id)),
        )
        .exec(&txn)
        .await?;
    film_planet::Entity::delete_many()
        .filter(film_planet::Column::PlanetId.eq(planet_id))
        .exec(&txn)
        .await?;
    species::Entity::update_many()
        .col_expr(species::Column::HomeworldId, Expr::value(Option::<i64>::None))
        .filter(species::Column::HomeworldId.eq(planet_id))
        .exec(&txn)
        .await?;
    character::Entity::update_many()
        .col_expr(
            character::Column::HomeworldId,
            Expr::value(Option::<i64>::None),
        )
        .filter(character::Column::HomeworldId.eq(planet_id))
        .exec(&txn)
        .await?;
    planet::Entity::delete_by_id(planet_id).exec(&txn).await?;
    txn.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "planet deleted" })))
}
