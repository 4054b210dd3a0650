use captive_dns_domain::CliOverrides;
use clap::Parser;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "captive-dns")]
#[command(version)]
#[command(about = "Captive DNS - answers every query with the portal address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// IPv4 address returned for every query (overrides CAPTIVE_IP)
    #[arg(long, value_name = "IPV4")]
    redirect_ip: Option<String>,

    /// Number of UDP workers
    #[arg(long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        redirect_ip: cli.redirect_ip,
        workers: cli.workers,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Captive DNS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config).await?;
    info!(
        redirect = %dns_services.redirect.address,
        source = %dns_services.redirect.source,
        "Redirect address resolved"
    );

    let dns_addr = config.dns_listen_addr();

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_services.handler, config.server.workers) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
