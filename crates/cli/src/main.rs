//! # ferrous-nslookup
//!
//! Interactive and batch DNS lookups in the style of classic nslookup.

mod bootstrap;
mod di;

use clap::Parser;
use ferrous_nslookup_application::use_cases::BatchRequest;
use ferrous_nslookup_domain::CliOverrides;
use std::io::Write;
use tracing::{debug, info};

use bootstrap::{init_logging, load_config};
use di::Services;

#[derive(Parser)]
#[command(name = "ferrous-nslookup")]
#[command(version = "0.1.0")]
#[command(about = "Query DNS servers interactively or for a single name")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Record type expression, e.g. A+AAAA or MX (also accepted as -type=)
    #[arg(short = 't', long = "type", value_name = "EXPR")]
    query_type: Option<String>,

    /// Ask the server to recurse
    #[arg(long)]
    recurse: bool,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout: Option<u64>,

    /// Skip the start-up ICMP probe and interface listing
    #[arg(long)]
    no_diagnostics: bool,

    /// Name or address to look up; starts an interactive session when omitted
    target: Option<String>,

    /// Server to query instead of the configured default
    server: Option<String>,
}

/// What the command line asks for once options are parsed.
#[derive(Debug, PartialEq, Eq)]
enum RunMode {
    Interactive,
    Batch { target: String, server: Option<String> },
    /// Lookup options were given but no name to look up.
    MissingTarget,
}

impl Cli {
    fn run_mode(&self) -> RunMode {
        match (&self.target, &self.query_type) {
            (Some(target), _) => RunMode::Batch {
                target: target.clone(),
                server: self.server.clone(),
            },
            (None, Some(_)) => RunMode::MissingTarget,
            (None, None) => RunMode::Interactive,
        }
    }
}

/// Rewrites the legacy single-dash `-type` option into the long form clap understands.
fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-type" {
                "--type".to_string()
            } else if let Some(value) = arg.strip_prefix("-type=") {
                format!("--type={}", value)
            } else {
                arg
            }
        })
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args()));

    let cli_overrides = CliOverrides {
        query_type: cli.query_type.clone(),
        recurse: cli.recurse,
        timeout_ms: cli.timeout,
        no_diagnostics: cli.no_diagnostics,
        log_level: cli.log_level.clone(),
    };

    let config = load_config(cli.config.as_deref(), cli_overrides)?;
    init_logging(&config);

    let services = Services::new(&config)?;

    let report = services.diagnostics.execute().await;
    debug!(
        reflected = report.reflected_from.is_some(),
        interface_addresses = report.interface_addresses,
        "Diagnostics finished"
    );

    match cli.run_mode() {
        RunMode::Batch { target, server } => {
            let request = BatchRequest {
                target,
                server,
                type_expression: config.lookup.query_type.clone(),
                recursion_desired: config.lookup.recursion_desired,
            };

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            services.batch_lookup().run(request, &mut out).await?;
            out.flush()?;
        }
        RunMode::MissingTarget => {
            println!("No parameters supplied.");
        }
        RunMode::Interactive => {
            info!("Starting interactive session");
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            services.interactive_session().run(input, &mut out).await?;
            out.flush()?;
        }
    }

    Ok(())
}
