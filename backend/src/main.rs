mod config;
mod error;
mod github;
mod services;
mod state;
#[cfg(test)]
mod testing;

use crate::config::Config;
use crate::github::ContentsClient;
use crate::state::AppState;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::sync::Arc;

/// Request body limit; uploaded images arrive base64-encoded inside JSON.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the compiled storefront. Unknown paths get `index.html` so the
/// frontend can pick the page (storefront or `/admin`) from the URL.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let missing = config.missing(true);
    if !missing.is_empty() {
        warn!(
            "Missing env: {}; API requests will fail until it is set",
            missing.join(", ")
        );
    }

    let store = ContentsClient::new(&config.api_url, &config.raw_url).map_err(io::Error::other)?;
    let host = config.host.clone();
    let port = config.port;
    let state = web::Data::new(AppState::new(config, Arc::new(store)));

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .app_data(state.clone())
            .service(services::cars::configure_routes())
            .service(services::images::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((host.as_str(), port))?
        .run()
        .await
}
