pub mod characters;
pub mod favorites;
pub mod films;
pub mod planets;
pub mod species;
pub mod starships;
pub mod users;
pub mod vehicles;

use crate::models::{
    AddFavoriteRequest, CharacterPayload, CharacterResponse, CreateUserRequest, FavoriteResponse,
    FilmPayload, FilmResponse, PlanetPayload, PlanetResponse, SpeciesPayload, SpeciesResponse,
    StarshipPayload, StarshipResponse, UserResponse, VehiclePayload, VehicleResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // User endpoints
        users::create_user,
        users::list_users,
        // Favorite endpoints
        favorites::list_favorites,
        favorites::list_user_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        // Film endpoints
        films::list_films,
        films::get_film,
        films::create_film,
        films::update_film,
        films::delete_film,
        // Starship endpoints
        starships::list_starships,
        starships::get_starship,
        starships::create_starship,
        starships::update_starship,
        starships::delete_starship,
        // Vehicle endpoints
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::create_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        // Species endpoints
        species::list_species,
        species::get_species,
        species::create_species,
        species::update_species,
        species::delete_species,
        // Planet endpoints
        planets::list_planets,
        planets::get_planet,
        planets::create_planet,
        planets::update_planet,
        planets::delete_planet,
        // Character endpoints
        characters::list_characters,
        characters::get_character,
        characters::create_character,
        characters::update_character,
        characters::delete_character,
    ),
    components(schemas(
        // User schemas
        CreateUserRequest,
        UserResponse,
        // Favorite schemas
        AddFavoriteRequest,
        FavoriteResponse,
        favorites::UserFavoritesQuery,
        // Catalog schemas
        FilmPayload,
        FilmResponse,
        StarshipPayload,
        StarshipResponse,
        VehiclePayload,
        VehicleResponse,
        SpeciesPayload,
        SpeciesResponse,
        PlanetPayload,
        PlanetResponse,
        CharacterPayload,
        CharacterResponse,
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "favorites", description = "Per-user bookmarks into the catalog"),
        (name = "films", description = "Film catalog"),
        (name = "starships", description = "Starship catalog"),
        (name = "vehicles", description = "Vehicle catalog"),
        (name = "species", description = "Species catalog"),
        (name = "planets", description = "Planet catalog"),
        (name = "characters", description = "Character catalog"),
    )
)]
pub struct ApiDoc;
