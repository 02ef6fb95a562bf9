use clap::{Parser, Subcommand};
use decoy_dns_domain::dns_record::builder::to_fqdn;
use decoy_dns_domain::{CliOverrides, Config, DnsQuery, RecordType};
use std::process::ExitCode;
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "decoy-dns")]
#[command(version)]
#[command(about = "Decoy DNS - canned answers for DNS questions")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Answer every A/AAAA question nothing else answers
    #[arg(long, global = true)]
    safe_box: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a question against the configured answers
    Lookup {
        name: String,

        #[arg(default_value = "A")]
        record_type: String,
    },

    /// Validate the configuration and report provider sizes
    Check,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        safe_box: cli.safe_box.then_some(true),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let services = di::AnswerServices::new(&config)?;

    match cli.command {
        Command::Lookup { name, record_type } => lookup(&services, &name, &record_type),
        Command::Check => check(&config, &services),
    }
}

fn lookup(
    services: &di::AnswerServices,
    name: &str,
    record_type: &str,
) -> anyhow::Result<ExitCode> {
    let record_type: RecordType = record_type.parse().map_err(anyhow::Error::msg)?;
    let query = DnsQuery::new(to_fqdn(name.trim()), record_type);
    debug!(domain = %query.domain, record_type = %query.record_type, "Offline lookup");

    match services.use_case.resolve(&query) {
        Some(record) => {
            println!("{}", record);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("no answer");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn check(config: &Config, services: &di::AnswerServices) -> anyhow::Result<ExitCode> {
    info!("Configuration is valid");
    println!("exact answers:   {}", services.exact.len());
    println!("pattern answers: {}", services.patterns.len());
    println!(
        "safe box:        {}",
        if services.safe_box.is_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("answer ttl:      {}", config.answers.ttl);
    Ok(ExitCode::SUCCESS)
}
