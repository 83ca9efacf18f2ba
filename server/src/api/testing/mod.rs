pub mod ping;
pub mod unauthed_ping;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for protected test endpoints (mounted at /api/test)
pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping::ping))
}

#[derive(OpenApi)]
#[openapi(
    paths(ping::ping, unauthed_ping::unauthed_ping),
    components(schemas(ping::PingResponse, unauthed_ping::UnauthedPingResponse))
)]
pub struct ApiDoc;
