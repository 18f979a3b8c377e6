//! Fluxo de Caixa API entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fluxo_caixa::api::{create_router, render_openapi, AppState};
use fluxo_caixa::config::{Config, LogFormat};
use fluxo_caixa::meta::AppMetadata;
use fluxo_caixa::utils::shutdown_signal;
use fluxo_caixa::{metrics, server};

/// Fluxo de Caixa API.
#[derive(Parser, Debug)]
#[command(name = "fluxo-caixa")]
#[command(about = "HTTP service shell for the Fluxo de Caixa API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Bind address (overrides BIND_HOST).
        #[arg(long)]
        host: Option<String>,

        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document.
    Openapi {
        /// Print on a single line.
        #[arg(long)]
        compact: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Openapi { compact }) => cmd_openapi(compact),
        Some(Command::Serve { host, port }) => cmd_serve(args.verbose, host, port).await,
        None => cmd_serve(args.verbose, None, None).await,
    }
}

/// Install the tracing subscriber.
fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("fluxo_caixa=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let (pretty, json) = match config.log_format {
        LogFormat::Pretty => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("{} - CONFIGURATION CHECK", AppMetadata::current());
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.bind_host, config.port);
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {:?}", config.log_format);
    println!(
        "  Metrics: {}",
        if config.metrics_enabled { "Enabled" } else { "Disabled" }
    );
    println!(
        "  CORS Origins: {}",
        config.cors_allowed_origins.as_deref().unwrap_or("any")
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document to stdout.
fn cmd_openapi(compact: bool) -> anyhow::Result<()> {
    println!("{}", render_openapi(AppMetadata::current(), compact)?);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(verbose: bool, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    // Override with CLI args if provided
    if let Some(host) = host {
        config.bind_host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    init_logging(&config, verbose);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let metadata = AppMetadata::current();
    info!("Starting {}", metadata);

    let mut state = AppState::new().with_allowed_origins(config.allowed_origins()?);
    if config.metrics_enabled {
        state = state.with_metrics(metrics::install_recorder()?);
        info!("Metrics enabled at /metrics");
    }

    let listener = server::bind(config.socket_addr()?).await.map_err(|e| {
        error!("Failed to bind HTTP server: {}", e);
        e
    })?;

    server::serve(listener, create_router(state), shutdown_signal()).await?;
    Ok(())
}
