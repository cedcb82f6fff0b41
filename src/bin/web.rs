//! Single binary web server: REST API plus static files from /static.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), STATIC_DIR (e.g. static).

use actix_files::Files;
use actix_web::{web::Data, App, HttpServer};
use league_tournament_web::{api, League, ServerConfig};
use tokio::sync::RwLock;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(League::new()));
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
