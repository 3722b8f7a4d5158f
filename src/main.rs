use clap::Parser;
use leaf_utils::utils::{error::LeafError, logger, validation::Validate};
use leaf_utils::{CliConfig, Driver};

fn run(config: &CliConfig) -> Result<(), LeafError> {
    config.validate()?;

    let inputs = config.load_inputs()?;
    tracing::debug!("Driver inputs: {:?}", inputs);

    let stdout = std::io::stdout();
    Driver::new(inputs).write_report(stdout.lock(), config.format)
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting leaf-utils");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        if !e.is_failure() {
            tracing::debug!("Ignoring {} (Severity: {:?})", e, e.severity());
            return;
        }

        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
