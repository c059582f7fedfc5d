use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stezhka_core::models::RouteMode;

/// Stezhka - Walking route generator for Ukrainian free-text requests
#[derive(Parser, Debug)]
#[command(name = "stezhka")]
#[command(about = "Walking route generator for Ukrainian free-text requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Nominatim-compatible geocoder base URL
    #[arg(long, global = true, value_name = "URL")]
    pub nominatim_url: Option<String>,

    /// Mapbox-compatible API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub mapbox_url: Option<String>,

    /// Mapbox access token (env: MAPBOX_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub mapbox_token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a walking route from a free-text request
    Route(RouteArgs),

    /// Search points of interest around a location
    Pois(PoisArgs),
}

/// Route generation mode selection
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// Route to a resolved destination
    PointToPoint,
    /// Loop through nearby points of interest
    Exploration,
}

impl From<ModeArg> for RouteMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::PointToPoint => RouteMode::PointToPoint,
            ModeArg::Exploration => RouteMode::Exploration,
        }
    }
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// The route request text, e.g. "прогулянка до парку на 5 км"
    pub text: String,

    /// Starting point latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Starting point longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Force a route mode instead of inferring it from the text
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Emit the route as a GeoJSON FeatureCollection
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct PoisArgs {
    /// Center latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Center longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Category words to search for, e.g. "парк" or "кав'ярня"
    /// (defaults to the exploration set)
    #[arg(long = "category", value_name = "WORD")]
    pub categories: Vec<String>,

    /// Search radius in meters
    #[arg(long, default_value = "5000")]
    pub radius: f64,

    /// Maximum results per category
    #[arg(long, default_value = "1")]
    pub limit: usize,
}
