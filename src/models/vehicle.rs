use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::vehicle;
use crate::models::format_day;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VehiclePayload {
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub url: Option<String>,
}

impl VehiclePayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.model.is_none()
            && self.vehicle_class.is_none()
            && self.manufacturer.is_none()
            && self.cost_in_credits.is_none()
            && self.length.is_none()
            && self.crew.is_none()
            && self.passengers.is_none()
            && self.max_atmosphering_speed.is_none()
            && self.cargo_capacity.is_none()
            && self.consumables.is_none()
            && self.url.is_none()
    }

    pub fn apply(self, vehicle: &mut vehicle::ActiveModel) {
        if let Some(name) = self.name {
            vehicle.name = Set(name);
        }
        if let Some(model) = self.model {
            vehicle.model = Set(model);
        }
        if let Some(vehicle_class) = self.vehicle_class {
            vehicle.vehicle_class = Set(Some(vehicle_class));
        }
        if let Some(manufacturer) = self.manufacturer {
            vehicle.manufacturer = Set(Some(manufacturer));
        }
        if let Some(cost_in_credits) = self.cost_in_credits {
            vehicle.cost_in_credits = Set(Some(cost_in_credits));
        }
        if let Some(length) = self.length {
            vehicle.length = Set(Some(length));
        }
        if let Some(crew) = self.crew {
            vehicle.crew = Set(Some(crew));
        }
        if let Some(passengers) = self.passengers {
            vehicle.passengers = Set(passengers);
        }
        if let Some(max_atmosphering_speed) = self.max_atmosphering_speed {
            vehicle.max_atmosphering_speed = Set(Some(max_atmosphering_speed));
        }
        if let Some(cargo_capacity) = self.cargo_capacity {
            vehicle.cargo_capacity = Set(Some(cargo_capacity));
        }
        if let Some(consumables) = self.consumables {
            vehicle.consumables = Set(Some(consumables));
        }
        if let Some(url) = self.url {
            vehicle.url = Set(Some(url));
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleResponse {
    pub id: i64,
    pub name: String,
    pub model: String,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub crew: Option<String>,
    pub passengers: String,
    pub max_atmosphering_speed: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: Option<String>,
}

impl From<vehicle::Model> for VehicleResponse {
    fn from(vehicle: vehicle::Model) -> Self {
        VehicleResponse {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            vehicle_class: vehicle.vehicle_class,
            manufacturer: vehicle.manufacturer,
            cost_in_credits: vehicle.cost_in_credits,
            length: vehicle.length,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
            max_atmosphering_speed: vehicle.max_atmosphering_speed,
            cargo_capacity: vehicle.cargo_capacity,
            consumables: vehicle.consumables,
            created: format_day(vehicle.created),
            edited: format_day(vehicle.edited),
            url: vehicle.url,
        }
    }
}
