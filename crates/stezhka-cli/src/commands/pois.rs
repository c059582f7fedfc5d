use crate::cli::PoisArgs;
use crate::output::OutputWriter;
use anyhow::{bail, Result};
use console::style;
use stezhka_core::models::{Category, LngLat};
use stezhka_providers::{MapboxClient, NominatimClient};
use stezhka_route::RoutePipeline;

pub async fn execute(
    args: PoisArgs,
    output: &OutputWriter,
    pipeline: &RoutePipeline<NominatimClient, MapboxClient, MapboxClient>,
) -> Result<()> {
    let center = LngLat::new(args.lng, args.lat);
    let categories = resolve_categories(&args.categories)?;

    let pois = pipeline
        .resolver()
        .search_nearby_pois(center, &categories, args.radius, args.limit)
        .await;

    if output.is_json() {
        return output.result(&pois);
    }

    if pois.is_empty() {
        output.warning("Поблизу нічого не знайдено.");
        return Ok(());
    }

    output.section("Місця поблизу");
    for place in &pois {
        println!(
            "  {} {} ({:.5}, {:.5})",
            style(place.category.info().display_name).dim(),
            place.name,
            place.coordinates.lat,
            place.coordinates.lng,
        );
    }
    Ok(())
}

/// Map category words (any grammatical form) to known categories, or
/// fall back to the exploration defaults when none were given.
fn resolve_categories(words: &[String]) -> Result<Vec<Category>> {
    if words.is_empty() {
        return Ok(Category::EXPLORATION_DEFAULTS.to_vec());
    }

    let mut categories = Vec::new();
    for word in words {
        match stezhka_nlp::match_category(word) {
            Some(category) => {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
            None => bail!("невідома категорія: {word}"),
        }
    }
    Ok(categories)
}
