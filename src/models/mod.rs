mod character;
mod favorite;
mod film;
mod planet;
mod species;
mod starship;
mod user;
mod vehicle;

pub use character::*;
pub use favorite::*;
pub use film::*;
pub use planet::*;
pub use species::*;
pub use starship::*;
pub use user::*;
pub use vehicle::*;

use chrono::{DateTime, Utc};

// Catalog timestamps are rendered as calendar days, matching the rest of the payloads.
pub(crate) fn format_day(moment: Option<DateTime<Utc>>) -> Option<String> {
    moment.map(|m| m.format("%Y-%m-%d").to_string())
}
