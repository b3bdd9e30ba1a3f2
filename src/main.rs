//! Admin gate server.
//!
//! # Architecture Overview
//!
//! ```text
//!  Client Request
//!  ──────────────▶ listener ─▶ request id ─▶ trace ─▶ timeout ─▶ authenticate
//!                                                                    │
//!                                                                    ▼
//!                                                     RouteTable (first match wins)
//!                                                     ├─ password_change       (strict form)
//!                                                     ├─ password_change_done
//!                                                     └─ admin:*               (gated)
//!                                                                    │
//!                                              PasswordGate: allow ──┴── 302 to
//!                                                                       /admin/auth/user/{id}/password/
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use admin_gate::config::{load_config, GateConfig};
use admin_gate::observability::{logging, metrics};
use admin_gate::HttpServer;

#[derive(Parser)]
#[command(name = "admin-gate")]
#[command(about = "Admin interface with password expiration enforcement", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Print the assembled route table and exit.
    #[arg(long)]
    print_routes: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GateConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);
    tracing::info!("admin-gate v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        admin_installed = config.admin.installed,
        users = config.users.len(),
        "Configuration loaded"
    );

    let server = HttpServer::new(config);

    if cli.print_routes {
        for entry in server.routes().entries() {
            println!(
                "{:<40} {:<36} {}",
                entry.pattern.as_str(),
                entry.name.as_deref().unwrap_or("-"),
                if entry.handler.is_guarded() { "gated" } else { "open" },
            );
        }
        return Ok(());
    }

    let observability = &server.config().observability;
    if observability.metrics_enabled {
        let addr: SocketAddr = observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
