//! # Attendance Form Bot Main Entry Point
//!
//! Initializes logging, loads configuration, builds the shared session
//! store and form submitter, then runs the Telegram bot next to the health
//! check server.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attendance_form_bot::bot::handlers::BotHandler;
use attendance_form_bot::bot::BotContext;
use attendance_form_bot::config::Config;
use attendance_form_bot::services::health::HealthService;
use attendance_form_bot::services::timezone::SystemClock;
use attendance_form_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attendance_form_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Attendance Form Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - {} registered users, sessions keyed by {:?}, UTC offset {}, HTTP Port: {}",
        config.users.len(),
        config.session_key,
        config.utc_offset,
        config.http_port
    );

    let clock = Arc::new(SystemClock::new(config.utc_offset));
    let ctx = BotContext::from_config(&config, clock)
        .map_err(|e| anyhow::anyhow!("Failed to build form client: {}", e))?;
    let sessions = ctx.sessions.clone();

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(ctx);
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(sessions.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .default_handler(|upd| async move {
                tracing::debug!("Unhandled update: {:?}", upd.kind);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    let abandoned = sessions.active_count();
    if abandoned > 0 {
        tracing::warn!("Shutting down with {} open sessions, they will be lost", abandoned);
    }

    log_system_event("Application stopped", None);
    Ok(())
}
