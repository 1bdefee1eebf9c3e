use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::character;
use crate::models::format_day;

/// Writable character fields. Unknown JSON keys are dropped during
/// deserialization, so clients cannot touch `id`, `created` or `edited`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CharacterPayload {
    pub name: Option<String>,
    pub eye_color: Option<String>,
    pub skin_color: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub birth_year: Option<String>,
    pub homeworld_id: Option<i64>,
    pub film_id: Option<i64>,
    pub url: Option<String>,
}

impl CharacterPayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.eye_color.is_none()
            && self.skin_color.is_none()
            && self.gender.is_none()
            && self.height.is_none()
            && self.mass.is_none()
            && self.hair_color.is_none()
            && self.birth_year.is_none()
            && self.homeworld_id.is_none()
            && self.film_id.is_none()
            && self.url.is_none()
    }

    pub fn apply(self, character: &mut character::ActiveModel) {
        if let Some(name) = self.name {
            character.name = Set(name);
        }
        if let Some(eye_color) = self.eye_color {
            character.eye_color = Set(Some(eye_color));
        }
        if let Some(skin_color) = self.skin_color {
            character.skin_color = Set(Some(skin_color));
        }
        if let Some(gender) = self.gender {
            character.gender = Set(Some(gender));
        }
        if let Some(height) = self.height {
            character.height = Set(Some(height));
        }
        if let Some(mass) = self.mass {
            character.mass = Set(Some(mass));
        }
        if let Some(hair_color) = self.hair_color {
            character.hair_color = Set(Some(hair_color));
        }
        if let Some(birth_year) = self.birth_year {
            character.birth_year = Set(Some(birth_year));
        }
        if let Some(homeworld_id) = self.homeworld_id {
            character.homeworld_id = Set(Some(homeworld_id));
        }
        if let Some(film_id) = self.film_id {
            character.film_id = Set(Some(film_id));
        }
        if let Some(url) = self.url {
            character.url = Set(Some(url));
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CharacterResponse {
    pub id: i64,
    pub name: String,
    pub eye_color: Option<String>,
    pub skin_color: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub birth_year: Option<String>,
    pub homeworld: Option<String>,
    pub url: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub film: Option<String>,
}

impl CharacterResponse {
    pub fn from_model(
        character: character::Model,
        homeworld: Option<String>,
        film: Option<String>,
    ) -> Self {
        CharacterResponse {
            id: character.id,
            name: character.name,
            eye_color: character.eye_color,
            skin_color: character.skin_color,
            gender: character.gender,
            height: character.height,
            mass: character.mass,
            hair_color: character.hair_color,
            birth_year: character.birth_year,
            homeworld,
            url: character.url,
            created: format_day(character.created),
            edited: format_day(character.edited),
            film,
        }
    }
}
