use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use std::time::Duration;

mod api;
mod config;
mod model;
mod routes;
mod state;
mod store;
mod time_api;
mod views;

use config::Config;
use state::AppState;
use store::RecordStore;
use time_api::TimeApi;

use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let store = RecordStore::new(&config.attendance_file);
    let time = TimeApi::new(
        &config.time_api_base,
        &config.timezone,
        Duration::from_secs(config.time_api_timeout_secs),
    );

    // The record list is read from disk once; handlers share this state and
    // write the file back after every mutation.
    let state = Data::new(AppState::new(store, time));
    info!(
        file = %config.attendance_file,
        records = state.records.lock().expect("record list lock poisoned").len(),
        "Attendance file loaded"
    );

    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(state.clone())
            .configure(|cfg| routes::configure(cfg, config.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
