use clap::Parser;
use dotenvy::dotenv;

use koreanit_server::api::{create_router, AppState};
use koreanit_server::cli::Cli;
use koreanit_server::config::Config;
use koreanit_server::db;
use koreanit_server::error::AppError;
use koreanit_server::logging::init_logging;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env().map_err(AppError::Config)?.with_cli(&cli);
    tracing::info!("Service starting with config: {:?}", config);

    let pool = db::create_pool(&config.database_url).await?;
    let app = create_router(AppState::from_pool(pool));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped cleanly");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received. Stopping server."),
        Err(err) => {
            tracing::error!("Failed to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
