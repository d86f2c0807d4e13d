use chrono::Local;
use clap::Parser;
use color_eyre::{eyre::Result, Section};
use dotenv::dotenv;
use eyre::Report;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use api::directions::Client;
use cli::Cli;
use defaults::Defaults;
use error::ConfigError;
use route::request_etas;
use settings::Settings;

mod api;
mod cli;
mod defaults;
mod error;
mod route;
mod settings;

fn main() -> Result<()> {
    dotenv().ok();
    color_eyre::install()?;
    init_tracing()?;

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::from_env()
        .suggestion("Set GOOGLE_MAPS_API_KEY in your .env file or environment variables.")
        .suggestion("You can get an API key from: https://developers.google.com/maps/documentation/directions/get-api-key")?;
    let units = cli.units();

    let Defaults {
        origin,
        destination,
    } = if cli.defaults {
        let (Some(origin), Some(destination)) = (cli.origin, cli.destination) else {
            return Err(Report::new(ConfigError::DefaultsWithoutAddresses)
                .suggestion("Usage: drivetime \"<origin>\" \"<destination>\" --defaults"));
        };

        let defaults = Defaults {
            origin,
            destination,
        };
        defaults::save(&settings.defaults_path()?, &defaults)?;
        println!(
            "Saved default addresses: {} → {}",
            defaults.origin, defaults.destination
        );
        defaults
    } else {
        defaults::resolve(cli.origin, cli.destination, || settings.defaults_path()).suggestion(
            "Pass an origin and destination, or save them with: drivetime \"<origin>\" \"<destination>\" --defaults",
        )?
    };

    debug!(%origin, %destination, future = ?cli.future, "resolved route");

    let client = Client::new(&settings.api_key, &settings.api_url)?;
    let report = request_etas(&client, &origin, &destination, Local::now(), cli.future)?;

    println!("{}", report.render(units));

    Ok(())
}

fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
