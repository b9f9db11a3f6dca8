pub mod classifier; // sentiment heuristics + crisis assessment
pub mod config;
pub mod db; // local persistence for finalized records and check-in history
pub mod diary; // mood-entry flow state machine
pub mod llm; // optional local-LLM assist with keyword fallback
pub mod models;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for an embedding application. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Sereno core starting v{}", config::APP_VERSION);
}
