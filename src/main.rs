use clap::Parser;
use small_fn_utils::config::cli::run;
use small_fn_utils::config::CliConfig;
use small_fn_utils::utils::{logger, validation::Validate};
use small_fn_utils::{Result, UtilsConfig};

fn main() {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    if config.logging.is_json() {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let stdout = std::io::stdout();
    if let Err(e) = run(&cli.command, &mut stdout.lock()) {
        tracing::error!("❌ Command failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

fn load_config(cli: &CliConfig) -> Result<UtilsConfig> {
    let config = match &cli.config {
        Some(path) => UtilsConfig::from_file(path)?,
        None => UtilsConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
