use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::species;
use crate::models::format_day;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SpeciesPayload {
    pub name: Option<String>,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<String>,
    pub average_lifespan: Option<String>,
    pub eye_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub language: Option<String>,
    pub homeworld_id: Option<i64>,
    pub url: Option<String>,
}

impl SpeciesPayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.classification.is_none()
            && self.designation.is_none()
            && self.average_height.is_none()
            && self.average_lifespan.is_none()
            && self.eye_colors.is_none()
            && self.hair_colors.is_none()
            && self.skin_colors.is_none()
            && self.language.is_none()
            && self.homeworld_id.is_none()
            && self.url.is_none()
    }

    pub fn apply(self, species: &mut species::ActiveModel) {
        if let Some(name) = self.name {
            species.name = Set(name);
        }
        if let Some(classification) = self.classification {
            species.classification = Set(Some(classification));
        }
        if let Some(designation) = self.designation {
            species.designation = Set(Some(designation));
        }
        if let Some(average_height) = self.average_height {
            species.average_height = Set(Some(average_height));
        }
        if let Some(average_lifespan) = self.average_lifespan {
            species.average_lifespan = Set(Some(average_lifespan));
        }
        if let Some(eye_colors) = self.eye_colors {
            species.eye_colors = Set(Some(eye_colors));
        }
        if let Some(hair_colors) = self.hair_colors {
            species.hair_colors = Set(Some(hair_colors));
        }
        if let Some(skin_colors) = self.skin_colors {
            species.skin_colors = Set(Some(skin_colors));
        }
        if let Some(language) = self.language {
            species.language = Set(language);
        }
        if let Some(homeworld_id) = self.homeworld_id {
            species.homeworld_id = Set(Some(homeworld_id));
        }
        if let Some(url) = self.url {
            species.url = Set(Some(url));
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpeciesResponse {
    pub id: i64,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<String>,
    pub average_lifespan: Option<String>,
    pub eye_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub language: String,
    pub homeworld: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: Option<String>,
}

impl SpeciesResponse {
    pub fn from_model(species: species::Model, homeworld: Option<String>) -> Self {
        SpeciesResponse {
            id: species.id,
            name: species.name,
            classification: species.classification,
            designation: species.designation,
            average_height: species.average_height,
            average_lifespan: species.average_lifespan,
            eye_colors: species.eye_colors,
            hair_colors: species.hair_colors,
            skin_colors: species.skin_colors,
            language: species.language,
            homeworld,
            created: format_day(species.created),
            edited: format_day(species.edited),
            url: species.url,
        }
    }
}
