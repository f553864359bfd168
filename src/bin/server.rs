//! ZapAgent relay HTTP server binary.
//!
//! # Environment Variables
//!
//! - `OPENROUTER_API_KEY` — OpenRouter credential; when unset, completion
//!   requests answer 500 but the process still serves liveness
//! - `PORT` — HTTP port (default: 4000)
//! - `RUST_LOG` — Tracing filter (default: "info,zapagent_relay=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use zapagent_relay::{app_router, AppState, RelayConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,zapagent_relay=debug".into()),
        )
        .init();

    let config = RelayConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("OPENROUTER_API_KEY not set; completion requests will answer 500");
    }

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(&config).expect("Failed to build HTTP client");
    let app = app_router(state);

    tracing::info!("zapagent-relay {} starting on {}", zapagent_relay::VERSION, bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /                            — liveness probe");
    tracing::info!("  POST /gerar-resposta-profissional — generate reply");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
