use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::starship;
use crate::models::format_day;

#[derive(Debug, Deserialize, ToSchema)]
pub struct StarshipPayload {
    pub name: Option<String>,
    pub model: Option<String>,
    pub starship_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub hyperdrive_rating: Option<String>,
    #[serde(rename = "MGLT")]
    pub mglt: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub url: Option<String>,
}

impl StarshipPayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.model.is_none()
            && self.starship_class.is_none()
            && self.manufacturer.is_none()
            && self.cost_in_credits.is_none()
            && self.length.is_none()
            && self.crew.is_none()
            && self.passengers.is_none()
            && self.max_atmosphering_speed.is_none()
            && self.hyperdrive_rating.is_none()
            && self.mglt.is_none()
            && self.cargo_capacity.is_none()
            && self.consumables.is_none()
            && self.url.is_none()
    }

    pub fn apply(self, starship: &mut starship::ActiveModel) {
        if let Some(name) = self.name {
            starship.name = Set(name);
        }
        if let Some(model) = self.model {
            starship.model = Set(Some(model));
        }
        if let Some(starship_class) = self.starship_class {
            starship.starship_class = Set(Some(starship_class));
        }
        if let Some(manufacturer) = self.manufacturer {
            starship.manufacturer = Set(Some(manufacturer));
        }
        if let Some(cost_in_credits) = self.cost_in_credits {
            starship.cost_in_credits = Set(Some(cost_in_credits));
        }
        if let Some(length) = self.length {
            starship.length = Set(Some(length));
        }
        if let Some(crew) = self.crew {
            starship.crew = Set(Some(crew));
        }
        if let Some(passengers) = self.passengers {
            starship.passengers = Set(Some(passengers));
        }
        if let Some(max_atmosphering_speed) = self.max_atmosphering_speed {
            starship.max_atmosphering_speed = Set(Some(max_atmosphering_speed));
        }
        if let Some(hyperdrive_rating) = self.hyperdrive_rating {
            starship.hyperdrive_rating = Set(Some(hyperdrive_rating));
        }
        if let Some(mglt) = self.mglt {
            starship.mglt = Set(Some(mglt));
        }
        if let Some(cargo_capacity) = self.cargo_capacity {
            starship.cargo_capacity = Set(Some(cargo_capacity));
        }
        if let Some(consumables) = self.consumables {
            starship.consumables = Set(Some(consumables));
        }
        if let Some(url) = self.url {
            starship.url = Set(Some(url));
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StarshipResponse {
    pub id: i64,
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub hyperdrive_rating: Option<String>,
    #[serde(rename = "MGLT")]
    pub mglt: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: Option<String>,
}

impl From<starship::Model> for StarshipResponse {
    fn from(starship: starship::Model) -> Self {
        StarshipResponse {
            id: starship.id,
            name: starship.name,
            model: starship.model,
            starship_class: starship.starship_class,
            manufacturer: starship.manufacturer,
            cost_in_credits: starship.cost_in_credits,
            length: starship.length,
            crew: starship.crew,
            passengers: starship.passengers,
            max_atmosphering_speed: starship.max_atmosphering_speed,
            hyperdrive_rating: starship.hyperdrive_rating,
            mglt: starship.mglt,
            cargo_capacity: starship.cargo_capacity,
            consumables: starship.consumables,
            created: format_day(starship.created),
            edited: format_day(starship.edited),
            url: starship.url,
        }
    }
}
