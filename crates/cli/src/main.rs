use clap::{Args, Parser, Subcommand};
use rpp_domain::CliOverrides;
use std::process::ExitCode;
use tracing::debug;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "rpp")]
#[command(version)]
#[command(about = "rpp - resolve and talk to remote RDE controllers")]
#[command(after_help = "examples:\n  \
    rpp resolve 203.0.113.0/24\n  \
    rpp advertise 203.0.113.0/24 '192.0.2.0/24 198.51.100.0/24' '64552:0 64900:255 65001:127'")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Nameserver to query instead of those in resolv.conf (repeatable)
    #[arg(short = 'n', long = "nameserver", value_name = "IP[:PORT]", global = true)]
    nameservers: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the RDE controller published for a prefix
    Resolve {
        /// Remote prefix, e.g. 203.0.113.0/24
        prefix: String,
    },

    /// Send inbound routing preferences to a prefix's RDE controller
    Advertise(AdvertiseArgs),
}

#[derive(Args)]
pub struct AdvertiseArgs {
    /// Remote prefix whose controller receives the preferences
    pub prefix: String,

    /// Prefixes advertised by the local AS, as a single argument
    pub local_prefixes: String,

    /// Preferred ASes with weights, e.g. '64552:0 64900:255'
    pub preferences: String,

    /// Lifetime of the preferences in seconds
    #[arg(long)]
    pub ttl: Option<u32>,

    /// Controller TCP port
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Controller address to use instead of the DNS lookup
    #[arg(long, value_name = "ADDR")]
    pub controller: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let (controller_port, ttl) = match &cli.command {
        Command::Advertise(args) => (args.port, args.ttl),
        Command::Resolve { .. } => (None, None),
    };

    let cli_overrides = CliOverrides {
        nameservers: cli.nameservers,
        controller_port,
        ttl,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    debug!("rpp v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config)?;

    let code = match cli.command {
        Command::Resolve { prefix } => commands::resolve(&use_cases, &prefix).await,
        Command::Advertise(args) => commands::advertise(&use_cases, &config, &args).await,
    };
    Ok(code)
}
