use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod db;
mod entities;
mod error;
mod models;
mod password;

use config::Config;
use db::create_pool;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("Failed to load configuration");

    log::info!(
        "Starting server on {}:{}",
        config.server.host,
        config.server.port
    );

    let pool = create_pool(&config)
        .await
        .expect("Failed to create database pool");

    log::info!("Database connection established");

    let openapi = api::ApiDoc::openapi();

    let server_host = config.server.host.clone();
    let server_port = config.server.port;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
            .route(
                "/api/docs",
                web::get().to(|| async {
                    actix_web::HttpResponse::PermanentRedirect()
                        .append_header(("Location", "/api/docs/"))
                        .finish()
                }),
            )
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .route("/users", web::post().to(api::users::create_user))
            .route("/users", web::get().to(api::users::list_users))
            .route(
                "/users/favorites",
                web::get().to(api::favorites::list_user_favorites),
            )
            .route("/favorites", web::get().to(api::favorites::list_favorites))
            .route(
                "/favorite/{kind}/{target_id}",
                web::post().to(api::favorites::add_favorite),
            )
            .route(
                "/favorite/{kind}/{target_id}",
                web::delete().to(api::favorites::remove_favorite),
            )
            .route("/films", web::get().to(api::films::list_films))
            .route("/films", web::post().to(api::films::create_film))
            .route("/film/{film_id}", web::get().to(api::films::get_film))
            .route("/film/{film_id}", web::put().to(api::films::update_film))
            .route("/film/{film_id}", web::delete().to(api::films::delete_film))
            .route("/starships", web::get().to(api::starships::list_starships))
            .route("/starships", web::post().to(api::starships::create_starship))
            .route(
                "/starship/{starship_id}",
                web::get().to(api::starships::get_starship),
            )
            .route(
                "/starship/{starship_id}",
                web::put().to(api::starships::update_starship),
            )
            .route(
                "/starship/{starship_id}",
                web::delete().to(api::starships::delete_starship),
            )
            .route("/vehicles", web::get().to(api::vehicles::list_vehicles))
            .route("/vehicles", web::post().to(api::vehicles::create_vehicle))
            .route(
                "/vehicle/{vehicle_id}",
                web::get().to(api::vehicles::get_vehicle),
            )
            .route(
                "/vehicle/{vehicle_id}",
                web::put().to(api::vehicles::update_vehicle),
            )
            .route(
                "/vehicle/{vehicle_id}",
                web::delete().to(api::vehicles::delete_vehicle),
            )
            .route("/species", web::get().to(api::species::list_species))
            .route("/species", web::post().to(api::species::create_species))
            .route(
                "/species/{species_id}",
                web::get().to(api::species::get_species),
            )
            .route(
                "/species/{species_id}",
                web::put().to(api::species::update_species),
            )
            .route(
                "/species/{species_id}",
                web::delete().to(api::species::delete_species),
            )
            .route("/planets", web::get().to(api::planets::list_planets))
            .route("/planets", web::post().to(api::planets::create_planet))
            .route("/planet/{planet_id}", web::get().to(api::planets::get_planet))
            .route(
                "/planet/{planet_id}",
                web::put().to(api::planets::update_planet),
            )
            .route(
                "/planet/{planet_id}",
                web::delete().to(api::planets::delete_planet),
            )
            .route(
                "/characters",
                web::get().to(api::characters::list_characters),
            )
            .route(
                "/characters",
                web::post().to(api::characters::create_character),
            )
            .route(
                "/character/{character_id}",
                web::get().to(api::characters::get_character),
            )
            .route(
                "/character/{character_id}",
                web::put().to(api::characters::update_character),
            )
            .route(
                "/character/{character_id}",
                web::delete().to(api::characters::delete_character),
            )
    })
    .bind(format!("{}:{}", server_host, server_port))?
    .run()
    .await
}
