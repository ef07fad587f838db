// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, storage, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
mod views;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{AdminEditor, PhotoStore, RemotePhotoStore, StorageClient};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting temple-site...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Storage client and the photo store built on it
    let storage = StorageClient::new(
        config.supabase_url.clone(),
        config.supabase_service_key.clone(),
        config.storage_bucket.clone(),
    );
    let store: Arc<dyn PhotoStore> = Arc::new(RemotePhotoStore::new(pool, storage));
    let editor = web::Data::new(AdminEditor::new(
        store.clone(),
        config.storage_bucket.clone(),
    ));
    log::info!("Using storage bucket '{}'", config.storage_bucket);

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let store = web::Data::new(store);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (photo store, admin editor, config)
            .app_data(store.clone())
            .app_data(editor.clone())
            .app_data(config.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::pages_config)
            .configure(handlers::gallery_config)
            .configure(handlers::assets_config)
            .configure(handlers::admin_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
