use crate::{config::SiteConfig, content::ContentStore, utils::ensure_static_dir};
use actix_files as fs;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};

mod config;
mod content;
mod errors;
mod models;
mod routes;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = SiteConfig::from_env();

    if config.backend.is_placeholder() {
        warn!(
            "Using placeholder backend credentials ({}), content is served from {}",
            config.backend.url, config.content_path
        );
    }

    if let Err(e) = ensure_static_dir(&config.static_dir) {
        warn!("Failed to create static directory: {}", e);
    }

    // Shared across workers so every worker sees the same cached copy
    let store = web::Data::new(ContentStore::new(
        config.content_path.clone(),
        config.revalidate_seconds,
    ));
    if let Err(e) = store.current().await {
        warn!("About content not available at startup: {}", e);
    }

    let host = config.host.clone();
    let port = config.port;
    let static_dir = config.static_dir.clone();
    let config = web::Data::new(config);

    info!(
        "Starting server on http://{}:{} (revalidate every {}s)...",
        host, port, config.revalidate_seconds
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(config.clone())
            .wrap(actix_web::middleware::Logger::default())
            .service(fs::Files::new("/static", static_dir.clone()))
            .service(routes::landing::landing_handler)
            .service(routes::about::about_handler)
            .service(routes::api::about_api_handler)
            .service(routes::api::revalidate_handler)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
