pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use shared::data::{seed, store::AppState};

/// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed = start.elapsed().as_millis();
    if response.status().is_success() {
        tracing::info!("{:>5}ms | {} {:>6} {}", elapsed, status, method, path);
    } else {
        tracing::warn!("{:>5}ms | {} {:>6} {}", elapsed, status, method, path);
    }
    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::logging::initialize()?;

    let config = shared::config::load_config()?;
    let state = AppState::new(seed::build_store(config.seed.enabled));
    if config.seed.enabled {
        tracing::info!(
            "Demo data loaded, login as {} / {}",
            seed::DEMO_EMAIL,
            seed::DEMO_PASSWORD
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = routes::configure_routes(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = config.bind_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
