use crate::api_state::ApiContext;
use crate::apod::ApodClient;
use crate::routes::create_router;
use crate::settings::AppSettings;
use color_eyre::Result;
use http::header;
use reqwest::Client;
use sqlx::PgPool;
use std::iter::once;
use std::net::SocketAddr;
use tower_http::LatencyUnit;
use tower_http::cors::{self, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::info;

/// Builds the application router with its middleware stack.
pub fn build_app(pool: PgPool, settings: AppSettings) -> axum::Router {
    let api_state = ApiContext {
        pool,
        apod_client: ApodClient::new(
            Client::new(),
            settings.apod.base_url.clone(),
            settings.secrets.nasa_api_key.clone(),
        ),
        settings,
    };

    // CORS is wide open on purpose: any origin may call this API.
    let cors = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_origin(cors::Any)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
        ]);

    create_router(api_state)
        .layer(
            TraceLayer::new_for_http().on_response(
                DefaultOnResponse::new()
                    .level(tracing::Level::INFO)
                    .latency_unit(LatencyUnit::Micros),
            ),
        )
        .layer(cors)
        .layer(SetSensitiveRequestHeadersLayer::new(once(
            header::AUTHORIZATION,
        )))
}

pub async fn serve(pool: PgPool, settings: AppSettings) -> Result<()> {
    info!("🚀 Initializing server...");
    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port).parse()?;
    let app = build_app(pool, settings);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
