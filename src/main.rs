#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // `.env` is optional; real environment variables win.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "deskrent failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = config::ServerConfig::from_env().map_err(|e| e.to_string())?;
    let state = state::AppState::builtin().map_err(|e| format!("catalog: {e}"))?;
    tracing::info!(products = state.catalog.len(), "catalog loaded");

    let app = routes::leptos_app(state)?;
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    tracing::info!(%addr, "deskrent listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
