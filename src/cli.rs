use clap::Parser;

use crate::route::{Address, Units};

#[derive(Parser, Debug)]
#[command(
    name = "drivetime",
    version,
    about = "Live driving time and optional future-traffic forecast"
)]
pub struct Cli {
    /// Start address or 'lat,lng'
    pub origin: Option<Address>,

    /// End address or 'lat,lng'
    pub destination: Option<Address>,

    /// Also show the ETA if leaving N minutes from now
    #[arg(short, long, value_name = "N")]
    pub future: Option<u32>,

    /// Save the provided addresses as defaults
    #[arg(short, long)]
    pub defaults: bool,

    /// Show distances in km and speeds in km/h
    #[arg(long)]
    pub metric: bool,
}

impl Cli {
    pub fn units(&self) -> Units {
        if self.metric {
            Units::Metric
        } else {
            Units::Imperial
        }
    }
}
