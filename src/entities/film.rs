use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "films")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub episode_id: i32,
    pub director: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub opening_crawl: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<Date>,
    pub created: Option<DateTimeUtc>,
    pub edited: Option<DateTimeUtc>,
    #[sea_orm(unique)]
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
