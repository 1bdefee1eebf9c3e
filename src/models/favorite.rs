use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::favorite::{self, FavoriteKind};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub user_id: Option<i64>,
}

/// One bookmark, rendered with the display name of whatever it points at.
/// Only the field matching the bookmark's kind is populated.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteResponse {
    pub id: i64,
    pub film: Option<String>,
    pub species: Option<String>,
    pub starship: Option<String>,
    pub vehicle: Option<String>,
    pub character: Option<String>,
    pub planet: Option<String>,
}

impl FavoriteResponse {
    pub fn new(favorite: &favorite::Model, label: Option<String>) -> Self {
        let mut response = FavoriteResponse {
            id: favorite.id,
            film: None,
            species: None,
            starship: None,
            vehicle: None,
            character: None,
            planet: None,
        };
        match favorite.kind {
            FavoriteKind::Film => response.film = label,
            FavoriteKind::Species => response.species = label,
            FavoriteKind::Starship => response.starship = label,
            FavoriteKind::Vehicle => response.vehicle = label,
            FavoriteKind::Character => response.character = label,
            FavoriteKind::Planet => response.planet = label,
        }
        response
    }
}
