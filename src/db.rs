use crate::config::Config;
use crate::entities::{
    character, favorite, film, film_planet, film_species, film_starship, film_vehicle, planet,
    species, starship, user, vehicle,
};
use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    let url = config.database.url.clone();
    let mut options = ConnectOptions::new(url.clone());
    if url.starts_with("sqlite") {
        // An in-memory sqlite database lives and dies with its connection,
        // so the pool must hold exactly one.
        options.max_connections(1).min_connections(1);
    }
    let db = Database::connect(options).await?;

    setup_schema(&db).await?;

    Ok(db)
}

// Tables are derived from the entity definitions; parents come first so
// foreign keys resolve.
async fn setup_schema(db: &DatabaseConnection) -> Result<(), anyhow::Error> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, schema.create_table_from_entity(user::Entity)).await?;
    create_table(db, schema.create_table_from_entity(planet::Entity)).await?;
    create_table(db, schema.create_table_from_entity(film::Entity)).await?;
    create_table(db, schema.create_table_from_entity(starship::Entity)).await?;
    create_table(db, schema.create_table_from_entity(vehicle::Entity)).await?;
    create_table(db, schema.create_table_from_entity(species::Entity)).await?;
    create_table(db, schema.create_table_from_entity(character::Entity)).await?;
    create_table(db, schema.create_table_from_entity(favorite::Entity)).await?;
    create_table(db, schema.create_table_from_entity(film_starship::Entity)).await?;
    create_table(db, schema.create_table_from_entity(film_vehicle::Entity)).await?;
    create_table(db, schema.create_table_from_entity(film_species::Entity)).await?;
    create_table(db, schema.create_table_from_entity(film_planet::Entity)).await?;

    Ok(())
}

async fn create_table(
    db: &DatabaseConnection,
    mut statement: TableCreateStatement,
) -> Result<(), anyhow::Error> {
    statement.if_not_exists();
    db.execute(db.get_database_backend().build(&statement))
        .await?;
    Ok(())
}
