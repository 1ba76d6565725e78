mod catalog_store;
mod config;
mod error;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use catalog_store::{FileCatalog, load_or_embedded};
use config::ServerConfig;
use error::ServerError;
use routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()?;
    let store = FileCatalog::new(config.catalog_path.clone());

    // Fail fast if neither the file nor the embedded copy is usable.
    let catalog = load_or_embedded(&store).map_err(ServerError::from)?;
    log::info!(
        "Catalog ready: {} profiles, {} tips, {} badges ({})",
        catalog.profiles.len(),
        catalog.tips.len(),
        catalog.badges.len(),
        store.path().display()
    );

    if !config.frontend_dir.is_dir() {
        log::warn!(
            "Frontend directory {} not found; build it with trunk first",
            config.frontend_dir.display()
        );
    }

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    let store = web::Data::new(store);
    let frontend_dir = config.frontend_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(store.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
