use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::error::Error;
use std::path::{Path, PathBuf};

use vlsm_planner::{plan_from_text, render, Config, OutputFormat, Overrides};

/// Split an IPv4 network into the smallest subnets that fit each host count.
#[derive(Parser)]
#[command(name = "vlsm-planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base network in CIDR notation, e.g. 192.168.1.0/24
    base: String,

    /// Comma separated host counts, e.g. "50,20,10"
    hosts: String,

    /// Output format [env: VLSM_FORMAT]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output [env: VLSM_COLOR=false]
    #[arg(long)]
    no_color: bool,

    /// log4rs YAML configuration [env: VLSM_LOG_CONFIG]
    #[arg(short, long)]
    log_config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let overrides = Overrides {
        log_config: cli.log_config.clone(),
        format: cli.format,
        color: cli.no_color.then_some(false),
    };
    let config = Config::from_env_with(&overrides)?;
    init_logging(&config.log_config)?;
    log::info!("#Start main() {:?}", config);

    let plan = match plan_from_text(&cli.base, &cli.hosts) {
        Ok(plan) => plan,
        Err(e) => {
            log::error!("Planning {} for [{}] failed: {e:?}", cli.base, cli.hosts);
            let message = e.to_string();
            eprintln!("{}", if config.color { message.red().to_string() } else { message });
            std::process::exit(1);
        }
    };

    print!("{}", render(&plan, config.format, config.color)?);
    Ok(())
}

/// Initialise log4rs from `path`, or log warnings to stderr if the file is missing.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
