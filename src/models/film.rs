use chrono::NaiveDate;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::film;
use crate::models::format_day;

#[derive(Debug, Deserialize, ToSchema)]
pub struct FilmPayload {
    pub title: Option<String>,
    pub episode_id: Option<i32>,
    pub director: Option<String>,
    pub opening_crawl: Option<String>,
    pub producer: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub release_date: Option<NaiveDate>,
    pub url: Option<String>,
}

impl FilmPayload {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.episode_id.is_none()
            && self.director.is_none()
            && self.opening_crawl.is_none()
            && self.producer.is_none()
            && self.release_date.is_none()
            && self.url.is_none()
    }

    pub fn apply(self, film: &mut film::ActiveModel) {
        if let Some(title) = self.title {
            film.title = Set(title);
        }
        if let Some(episode_id) = self.episode_id {
            film.episode_id = Set(episode_id);
        }
        if let Some(director) = self.director {
            film.director = Set(Some(director));
        }
        if let Some(opening_crawl) = self.opening_crawl {
            film.opening_crawl = Set(Some(opening_crawl));
        }
        if let Some(producer) = self.producer {
            film.producer = Set(Some(producer));
        }
        if let Some(release_date) = self.release_date {
            film.release_date = Set(Some(release_date));
        }
        if let Some(url) = self.url {
            film.url = Set(url);
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FilmResponse {
    pub id: i64,
    pub title: String,
    pub episode_id: i32,
    pub director: Option<String>,
    pub opening_crawl: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: String,
}

impl From<film::Model> for FilmResponse {
    fn from(film: film::Model) -> Self {
        FilmResponse {
            id: film.id,
            title: film.title,
            episode_id: film.episode_id,
            director: film.director,
            opening_crawl: film.opening_crawl,
            producer: film.producer,
            release_date: film.release_date.map(|d| d.to_string()),
            created: format_day(film.created),
            edited: format_day(film.edited),
            url: film.url,
        }
    }
}
