use aeroadvisor::config::LoggingConfig;
use aeroadvisor::{
    AdvisoryClient, AeroAdvisorConfig, AirportDirectory, BriefingService, EmergencyRequest,
    EmergencyType, PromptStyle, WeatherClient,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DISCLAIMER: &str = "Disclaimer: This is a decision support tool for educational purposes only. Always follow official PCAA and Airline SOPs.";

#[derive(Parser)]
#[command(
    name = "aeroadvisor",
    version,
    about = "Flight emergency decision support with AI-generated diversion advisories"
)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a two-option advisory for an emergency scenario
    Advise {
        /// Type of emergency
        #[arg(long)]
        emergency: EmergencyType,

        /// Nearest major airport, e.g. "Karachi (OPKC)"
        #[arg(long)]
        airport: String,

        /// Current altitude in feet (config default: 30000)
        #[arg(long)]
        altitude: Option<u32>,

        /// Current weather conditions as free text (config default: "Clear")
        #[arg(long)]
        weather: Option<String>,

        /// Prompt style override
        #[arg(long, value_enum)]
        style: Option<PromptStyle>,
    },
    /// List airports available in the reference directory
    Airports,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // A broken or credential-less configuration is fatal before any
    // request is accepted.
    let config = match AeroAdvisorConfig::load_from_path(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging, cli.verbose);
    tracing::debug!("Configuration loaded");

    let directory = AirportDirectory::bundled();

    if let Err(e) = run(cli.command, &config, &directory).await {
        tracing::error!("Request failed: {e}");
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(
    command: Command,
    config: &AeroAdvisorConfig,
    directory: &AirportDirectory,
) -> aeroadvisor::Result<()> {
    match command {
        Command::Airports => {
            println!("Available airports:");
            for record in directory.records() {
                println!("  {:<18} {}", record.id, record.format_specs());
            }
            Ok(())
        }
        Command::Advise {
            emergency,
            airport,
            altitude,
            weather,
            style,
        } => {
            let weather_client = WeatherClient::new(&config.weather)
                .map_err(|e| aeroadvisor::AeroAdvisorError::config(format!("{e:#}")))?;
            let advisory_client = AdvisoryClient::new(&config.advisory)?;

            let request = EmergencyRequest::new(emergency, airport)
                .with_altitude(altitude.unwrap_or(config.defaults.altitude_ft))
                .with_weather(
                    weather.unwrap_or_else(|| config.defaults.weather_description.clone()),
                );

            println!("Analyzing data and calculating options...");
            let briefing = BriefingService::handle(
                directory,
                &weather_client,
                &advisory_client,
                style.unwrap_or_else(|| config.prompt_style()),
                request,
            )
            .await?;

            render(&briefing);
            Ok(())
        }
    }
}

fn render(briefing: &aeroadvisor::AdvisoryBriefing) {
    println!("⚠️  Critical Advisory");
    println!("{}", briefing.banner());
    if let Some(snapshot) = &briefing.weather {
        println!(
            "Live weather at {}: {}, wind {}",
            snapshot.city_resolved,
            snapshot.format_temperature(),
            snapshot.format_wind()
        );
    }
    println!();

    match &briefing.advisory.option_two {
        Some(option_two) => {
            println!("=== Option 1 ===");
            println!("{}", briefing.advisory.option_one.trim());
            println!();
            println!("=== Option 2 ===");
            println!("{}", option_two.trim());
        }
        None => {
            // Marker missing: render the raw advisory as one block
            println!("{}", briefing.advisory.option_one.trim());
        }
    }

    println!();
    println!("---");
    println!("{DISCLAIMER}");
}

fn init_logging(config: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aeroadvisor={level}")));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}
