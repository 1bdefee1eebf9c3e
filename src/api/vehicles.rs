use crate::db::DbPool;
use crate::entities::favorite::{self, FavoriteKind};
use crate::entities::{film_vehicle, vehicle};
use crate::error::ApiError;
use crate::models::{VehiclePayload, VehicleResponse};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, TransactionTrait};
use serde_json::json;

async fn url_taken(db: &DbPool, url: &str, exclude_id: Option<i64>) -> Result<bool, ApiError> {
    let mut condition = Condition::all().add(vehicle::Column::Url.eq(url));
    if let Some(id) = exclude_id {
        condition = condition.add(vehicle::Column::Id.ne(id));
    }
    let existing = vehicle::Entity::find().filter(condition).one(db).await?;
    Ok(existing.is_some())
}

#[utoipa::path(
    get,
    path = "/vehicles",
    responses(
        (status = 200, description = "All vehicles", body = Vec<VehicleResponse>)
    ),
    tag = "vehicles"
)]
pub async fn list_vehicles(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let vehicles = vehicle::Entity::find().all(pool.get_ref()).await?;

    let responses: Vec<VehicleResponse> = vehicles.into_iter().map(VehicleResponse::from).collect();

    Ok(HttpResponse::Ok().json(responses))
}

#[utoipa::path(
    get,
    path = "/vehicle/{vehicle_id}",
    params(
        ("vehicle_id" = i64, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "One vehicle", body = VehicleResponse),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "vehicles"
)]
pub async fn get_vehicle(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let vehicle_id = path.into_inner();

    let vehicle = vehicle::Entity::find_by_id(vehicle_id)
        .one(pool.get_ref())
        .await?;
    let vehicle = match vehicle {
        Some(v) => v,
        None => return Err(ApiError::NotFound("vehicle not found".to_string())),
    };

    Ok(HttpResponse::Ok().json(VehicleResponse::from(vehicle)))
}

#[utoipa::path(
    post,
    path = "/vehicles",
    request_body = VehiclePayload,
    responses(
        (status = 201, description = "Vehicle created"),
        (status = 400, description = "Missing name, model or passengers"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "vehicles"
)]
pub async fn create_vehicle(
    req: web::Json<VehiclePayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let payload = req.into_inner();

    if payload.name.is_none() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    if payload.model.is_none() {
        return Err(ApiError::Validation("model is required".to_string()));
    }
    if payload.passengers.is_none() {
        return Err(ApiError::Validation("passengers is required".to_string()));
    }
    if let Some(url) = payload.url.as_deref() {
        if url_taken(pool.get_ref(), url, None).await? {
            return Err(ApiError::Conflict("url already exists".to_string()));
        }
    }

    let now = Utc::now();
    let mut vehicle = vehicle::ActiveModel {
        created: sea_orm::Set(Some(now)),
        edited: sea_orm::Set(Some(now)),
        ..Default::default()
    };
    payload.apply(&mut vehicle);

    let inserted = vehicle::Entity::insert(vehicle).exec(pool.get_ref()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "vehicle created",
        "vehicle_id": inserted.last_insert_id
    })))
}

#[utoipa::path(
    put,
    path = "/vehicle/{vehicle_id}",
    request_body = VehiclePayload,
    params(
        ("vehicle_id" = i64, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "Vehicle updated"),
        (status = 404, description = "Vehicle not found"),
        (status = 409, description = "Url already catalogued")
    ),
    tag = "vehicles"
)]
pub async fn update_vehicle(
    path: web::Path<i64>,
    req: web::Json<VehiclePayload>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let vehicle_id = path.into_inner();

    let existing = vehicle::Entity::find_by_id(vehicle_id)
        .one(pool.get_ref())
        .await?;
    let existing = match existing {
        Some(v) => v,
        None => return Err(ApiError::NotFound("vehicle not found".to_string())),
    };

    let payload = req.into_inner();
    if payload.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({ "message": "vehicle updated" })));
    }

    if let Some(url) = payload.url.as_deref() {
        if url_taken(pool.get_ref(), url, Some(vehicle_id)).await? {
            return Err(ApiError::Conflict("url already exists".to_string()));
        }
    }

    let mut vehicle: vehicle::ActiveModel = existing.into();
    payload.apply(&mut vehicle);
    vehicle.edited = sea_orm::Set(Some(Utc::now()));
    vehicle.update(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "vehicle updated" })))
}

#[utoipa::path(
    delete,
    path = "/vehicle/{vehicle_id}",
    params(
        ("vehicle_id" = i64, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "Vehicle deleted"),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "vehicles"
)]
pub async fn delete_vehicle(
    path: web::Path<i64>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let vehicle_id = path.into_inner();

    let existing = vehicle::Entity::find_by_id(vehicle_id)
        .one(pool.get_ref())
        .await?;
    if existing.is_none() {
        return Err(ApiError::NotFound("vehicle not found".to_string()));
    }

    let txn = pool.begin().await?;
    favorite::Entity::delete_many()
        .filter(
            Condition::all()
                .add(favorite::Column::Kind.eq(FavoriteKind::Vehicle))
                .add(favorite::Column::TargetId.eq(vehicle_id)),
        )
        .exec(&txn)
        .await?;
    film_vehicle::Entity::delete_many()
        .filter(film_vehicle::Column::VehicleId.eq(vehicle_id))
        .exec(&txn)
        .await?;
    vehicle::Entity::delete_by_id(vehicle_id).exec(&txn).await?;
    txn.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "vehicle deleted" })))
}
