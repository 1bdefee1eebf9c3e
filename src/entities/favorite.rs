use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// One row per bookmark: `kind` says which catalog table `target_id` points into.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub kind: FavoriteKind,
    pub target_id: i64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    #[sea_orm(string_value = "film")]
    Film,
    #[sea_orm(string_value = "species")]
    Species,
    #[sea_orm(string_value = "starship")]
    Starship,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
    #[sea_orm(string_value = "character")]
    Character,
    #[sea_orm(string_value = "planet")]
    Planet,
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FavoriteKind::Film => "film",
            FavoriteKind::Species => "species",
            FavoriteKind::Starship => "starship",
            FavoriteKind::Vehicle => "vehicle",
            FavoriteKind::Character => "character",
            FavoriteKind::Planet => "planet",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FavoriteKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "film" => Ok(FavoriteKind::Film),
            "species" => Ok(FavoriteKind::Species),
            "starship" => Ok(FavoriteKind::Starship),
            "vehicle" => Ok(FavoriteKind::Vehicle),
            "character" => Ok(FavoriteKind::Character),
            "planet" => Ok(FavoriteKind::Planet),
            _ => Err(()),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
