//! Axum application setup.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Sales
        .route("/upload", post(handlers::upload_sheet))
        .route("/sales", post(handlers::submit_sales))
        .route("/sales/export", get(handlers::export_sales))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/template", get(handlers::get_template))
        // Measures
        .route(
            "/measures",
            get(handlers::list_measures).post(handlers::create_measure),
        )
        .route("/measures/export", get(handlers::export_measures))
        .route("/measures/:id", delete(handlers::delete_measure));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    info!("server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
