//! access-gateway - role-based content access service

#![allow(missing_docs)]

use access_by_role::config::Config;
use access_by_role::server;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "access-gateway", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "ACCESS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON
    #[arg(long, env = "ACCESS_LOG_JSON")]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .init();
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref())
        .await
        .context("failed to load configuration")?;

    if let Some(host) = args.host {
        config.access.server.host = host;
    }
    if let Some(port) = args.port {
        config.access.server.port = port;
    }
    config.validate().context("invalid configuration")?;

    let build = access_by_role::build_info();
    info!(version = build.version, git = build.git_hash, "access-gateway");

    server::run_server(config).await?;
    Ok(())
}

#[actix_web::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(args.log_json);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
