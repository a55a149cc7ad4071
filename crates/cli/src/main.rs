//! # fallback-dns
//!
//! One-shot lookup through the configured chain of fallback resolvers

mod bootstrap;
mod lookup;

use clap::Parser;
use fallback_dns_domain::{CliOverrides, RecordClass, RecordType};
use fallback_dns_infrastructure::dns::ChainBuilder;
use lookup::LookupMode;

#[derive(Parser)]
#[command(name = "fallback-dns")]
#[command(version)]
#[command(about = "Resolve a name through an ordered chain of fallback resolvers")]
struct Cli {
    /// Name to resolve
    name: String,

    /// Record type (A, AAAA, MX, TXT, ANY, ...)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Record class
    #[arg(long = "class", default_value = "IN")]
    class: RecordClass,

    /// Ask every resolver for all records of the name
    #[arg(long, conflicts_with = "host")]
    all: bool,

    /// Print only the first address, following aliases
    #[arg(long)]
    host: bool,

    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Per-attempt timeout in milliseconds (overrides the config file)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn mode(&self) -> LookupMode {
        if self.host {
            LookupMode::Host
        } else if self.all {
            LookupMode::AllRecords
        } else {
            LookupMode::Query(self.record_type, self.class)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            timeout_ms: cli.timeout_ms,
            log_level: cli.log_level.clone(),
        },
    )?;
    bootstrap::init_logging(&config);

    tracing::info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        providers = config.resolver.providers.len(),
        timeout_ms = ?config.resolver.timeout_ms,
        "Configuration loaded"
    );

    let chain = ChainBuilder::from_config(&config.resolver)?;
    lookup::run_lookup(&chain, &cli.name, cli.mode(), config.resolver.timeout()).await
}
