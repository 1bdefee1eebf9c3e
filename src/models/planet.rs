use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::planet;
use crate::models::format_day;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlanetPayload {
    pub name: Option<String>,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub url: Option<String>,
}

impl PlanetPayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.diameter.is_none()
            && self.rotation_period.is_none()
            && self.orbital_period.is_none()
            && self.gravity.is_none()
            && self.population.is_none()
            && self.climate.is_none()
            && self.terrain.is_none()
            && self.surface_water.is_none()
            && self.url.is_none()
    }

    pub fn apply(self, planet: &mut planet::ActiveModel) {
        if let Some(name) = self.name {
            planet.name = Set(name);
        }
        if let Some(diameter) = self.diameter {
            planet.diameter = Set(Some(diameter));
        }
        if let Some(rotation_period) = self.rotation_period {
            planet.rotation_period = Set(Some(rotation_period));
        }
        if let Some(orbital_period) = self.orbital_period {
            planet.orbital_period = Set(Some(orbital_period));
        }
        if let Some(gravity) = self.gravity {
            planet.gravity = Set(Some(gravity));
        }
        if let Some(population) = self.population {
            planet.population = Set(Some(population));
        }
        if let Some(climate) = self.climate {
            planet.climate = Set(Some(climate));
        }
        if let Some(terrain) = self.terrain {
            planet.terrain = Set(Some(terrain));
        }
        if let Some(surface_water) = self.surface_water {
            planet.surface_water = Set(Some(surface_water));
        }
        if let Some(url) = self.url {
            planet.url = Set(Some(url));
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanetResponse {
    pub id: i64,
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: Option<String>,
}

impl From<planet::Model> for PlanetResponse {
    fn from(planet: planet::Model) -> Self {
        PlanetResponse {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            gravity: planet.gravity,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
            created: format_day(planet.created),
            edited: format_day(planet.edited),
            url: planet.url,
        }
    }
}
