use super::assets::{handle_favicon, handle_robots, handle_sitemap};
use super::handlers::*;
use crate::lookup::engine::Lookup;
use crate::quiz::engine::Quiz;

use axum::routing::{any, get};
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Builds the complete HTTP application.
///
/// Static routes win over the `/*word` catch-all, so `/robots.txt` is never
/// looked up as a noun.
pub fn build_router(lookup: Lookup, quiz: Quiz) -> Router {
    Router::new()
        .route("/", any(handle_root))
        .route("/robots.txt", get(handle_robots))
        .route("/sitemap.xml", get(handle_sitemap))
        .route("/favicon.ico", get(handle_favicon))
        .route("/game/random", get(handle_random))
        .route("/game/check/en", get(handle_check_en).post(handle_check_en))
        .route("/game/check/ett", get(handle_check_ett).post(handle_check_ett))
        .route("/*word", any(handle_lookup))
        .layer(Extension(lookup))
        .layer(Extension(quiz))
        // A panicking handler fails its own request only.
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
