use clap::Parser;
use verbprobe::config::{CliConfig, Config};
use verbprobe::probe::{ClassifyInputs, Dispatcher, MethodProber, dedup_inputs};
use verbprobe::reporting::logging;
use verbprobe::ui::output;
use verbprobe::ui::{Cli, cli_to_config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_verbprobe_logic(&cli).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main classification logic extracted from main() for testing
async fn run_verbprobe_logic(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config, config.concurrency.unwrap_or_else(num_cpus::get));

    let inputs = dedup_inputs(&cli.inputs);

    let dispatcher = Dispatcher::new(MethodProber::default());
    let report = dispatcher.classify_with_config(inputs, &config).await?;

    output::print_report(&report)?;
    Ok(())
}

/// Load configuration from file or standard locations and merge with CLI config
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
