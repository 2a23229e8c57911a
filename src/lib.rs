pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod flash;
pub mod models;
pub mod routes;
pub mod seed;
pub mod templates;
pub mod uploads;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{catalog::Catalog, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Catalog,
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(routes::index))
        .route("/movie", get(routes::movies))
        .route("/actor", get(routes::actors).post(routes::create_actor).layer(upload_limit))
        .route("/actor_detail/{actor_id}", get(routes::actor_detail))
        .route("/movie_detail/{movie_id}", get(routes::movie_detail))
        .route("/love", get(routes::love))
        .nest_service("/static", static_files)
        .fallback(routes::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any)),
        )
}
