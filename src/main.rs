use anyhow::Context;
use axum::{routing::get, Router};
use clap::{Parser, Subcommand};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booking_system::{cli::Session, config::Config, controllers, AppState};

#[derive(Parser)]
#[command(name = "booking_system", about = "Movie premiere seat booking")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expose the booking service over HTTP
    Serve,
    /// Interactive booking session on stdin/stdout (default)
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting booking system ({})", config.app.environment);

    let state = Arc::new(AppState::new(config));

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Serve => serve(state).await,
        Commands::Repl => repl(state),
    }
}

async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/", get(|| async { "Premiere Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state.clone())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", state.config.app.host, state.config.app.port)
        .parse()
        .context("invalid HOST/PORT")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")
}

fn repl(state: Arc<AppState>) -> anyhow::Result<()> {
    println!("Premiere booking shell; type 'help' for commands, 'quit' to exit.");
    let stdin = io::stdin();
    let mut session = Session::new(&state.service, io::stdout());
    session.run(stdin.lock()).context("REPL I/O error")
}
