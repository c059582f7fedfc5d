//! Command implementations

mod pois;
mod route;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use stezhka_core::config::{CliConfigOverrides, ProviderConfig};
use stezhka_providers::{MapboxClient, NominatimClient};
use stezhka_route::RoutePipeline;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let mut config = ProviderConfig::with_defaults();
    if let Some(path) = &cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
    }
    config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        nominatim_url: cli.nominatim_url.clone(),
        mapbox_url: cli.mapbox_url.clone(),
        mapbox_token: cli.mapbox_token.clone(),
    });

    let pipeline = build_pipeline(&config)?;

    match cli.command {
        Commands::Route(args) => route::execute(args, &output, &pipeline).await,
        Commands::Pois(args) => pois::execute(args, &output, &pipeline).await,
    }
}

/// Wire the real provider adapters into the route pipeline. The Mapbox
/// client serves both the POI search and the directions ports.
fn build_pipeline(
    config: &ProviderConfig,
) -> Result<RoutePipeline<NominatimClient, MapboxClient, MapboxClient>> {
    let token = config.require_mapbox_token()?;

    let geocoder = NominatimClient::new(config.nominatim_url.value.clone());
    let mapbox = MapboxClient::new(config.mapbox_url.value.clone(), token);

    Ok(RoutePipeline::new(geocoder, mapbox.clone(), mapbox))
}
