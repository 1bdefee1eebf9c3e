pub mod character;
pub mod favorite;
pub mod film;
pub mod film_planet;
pub mod film_species;
pub mod film_starship;
pub mod film_vehicle;
pub mod planet;
pub mod species;
pub mod starship;
pub mod user;
pub mod vehicle;
