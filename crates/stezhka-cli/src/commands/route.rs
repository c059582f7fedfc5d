use crate::cli::RouteArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use console::style;
use stezhka_core::models::{LngLat, RouteResult};
use stezhka_providers::{MapboxClient, NominatimClient};
use stezhka_route::{RouteOptions, RoutePipeline};

pub async fn execute(
    args: RouteArgs,
    output: &OutputWriter,
    pipeline: &RoutePipeline<NominatimClient, MapboxClient, MapboxClient>,
) -> Result<()> {
    let origin = LngLat::new(args.lng, args.lat);
    let options = RouteOptions {
        route_mode: args.mode.map(Into::into),
    };

    let route = pipeline
        .generate_route_from_text(origin, &args.text, options)
        .await?;

    if args.geojson {
        println!("{}", serde_json::to_string_pretty(&route.to_geojson_value())?);
        return Ok(());
    }

    if output.is_json() {
        return output.result(&route);
    }

    print_summary(output, &route);
    Ok(())
}

fn print_summary(output: &OutputWriter, route: &RouteResult) {
    output.section("Маршрут");
    output.kv("Відстань", format!("{:.1} км", route.distance_km));
    output.kv("Час пішки", format!("{} хв", route.estimated_time_minutes));

    if !route.locations.is_empty() {
        output.section("Зупинки");
        for (i, name) in route.locations.iter().enumerate() {
            println!("  {} {}", style(format!("{}.", i + 1)).dim(), name);
        }
    }
}
