//! Intent parser: free text in, [`RouteRequest`] out.
//!
//! Seven extraction steps run in priority order, first match wins per
//! slot: destination name, destination category, waypoint names, waypoint
//! categories, target distance, exploration inference, stop count.

use regex::Regex;
use std::sync::LazyLock;
use stezhka_core::models::{Category, RouteRequest};
use tracing::debug;

use crate::lexicon;

/// Phrase patterns meaning "walk/route to X", most specific first. The
/// capture runs to end of string; stop-word clipping happens afterwards
/// in [`clip_destination_span`].
static DESTINATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:прогулянк\p{L}*|маршрут\p{L}*|шлях\p{L}*)\s+(?:до|на|в|у)\s+(.+)",
        r"(?i)(?:дійти|дістатися|дістатись|сходити|піти|пройтися|пройтись)\s+(?:до|на|в|у)\s+(.+)",
        r"(?i)\bдо\s+(.+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("destination pattern"))
    .collect()
});

/// Waypoint markers meaning "through" / "past" / "with". Every
/// occurrence opens its own span, so repeated markers each contribute
/// a waypoint.
static WAYPOINT_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:через|повз|зі|із|з)\s+").expect("waypoint marker pattern")
});

/// Prepositional category mention: "до/в/у/на <word>".
static DEST_CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:до|на|в|у)\s+([\p{L}'\-]+)").expect("category pattern"));

/// Kilometre quantity with comma or dot decimals and short or full unit
/// spelling.
static DISTANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:[.,]\d+)?)\s*(?:кілометр\p{L}*|км|km)").expect("distance pattern")
});

/// "<integer> stops/places/points".
static STOPS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:зупин\p{L}*|місц\p{L}*|точ\p{L}*|stops?)").expect("stops pattern")
});

/// Walk/stroll verb stems that signal an open-ended walk.
static WALK_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:прогулян|прогуля|погуля|пройти|походи|гулят)").expect("walk verb pattern")
});

/// Words that end a captured destination span.
const SPAN_STOPPERS: &[&str] = &[
    "і", "та", "й", "а", "або", "через", "повз", "зі", "із", "з", "на", "в", "у", "за", "щоб",
];

/// Markers that end a waypoint span but do not split a conjunction list.
const WAYPOINT_SPAN_STOPPERS: &[&str] =
    &["через", "повз", "зі", "із", "з", "на", "в", "у", "до", "за", "щоб"];

const CONJUNCTIONS: &[&str] = &["і", "та", "й"];

const PUNCTUATION: &[char] = &[',', '.', '!', '?', ';', ':'];

/// Parse a free-text walk request into a structured route request.
pub fn parse(text: &str) -> RouteRequest {
    let text = text.trim().replace(['’', 'ʼ', '`'], "'");
    let lower = text.to_lowercase();
    let mut request = RouteRequest::default();

    // 1. Specific destination name.
    if let Some(span) = extract_destination_span(&text) {
        if looks_like_proper_name(&span) || lexicon::match_category(&span).is_none() {
            debug!(destination = %span, "extracted destination name");
            request.destination_name = Some(span);
        }
        // A bare category word falls through to category extraction.
    }

    // 2. Destination category, only when no name was captured.
    if request.destination_name.is_none() {
        request.destination_category = extract_destination_category(&lower);
    }

    // 3 + 4. Waypoint names and categories.
    extract_waypoints(&text, &mut request);

    // 5. Target distance.
    request.target_distance_km = extract_distance(&lower);

    // 6. Exploration: no destination, a stroll verb, and something to
    // visit along the way.
    request.is_exploration =
        !request.has_destination() && WALK_VERB_RE.is_match(&lower) && request.has_waypoints();

    // 7. Desired stop count.
    if let Some(cap) = STOPS_RE.captures(&lower) {
        if let Ok(count) = cap[1].parse::<usize>() {
            request.desired_stop_count = RouteRequest::clamp_stop_count(count);
        }
    }

    request
}

/// Run the ordered destination patterns and clip the first usable span.
fn extract_destination_span(text: &str) -> Option<String> {
    for pattern in DESTINATION_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(text) {
            let span = clip_destination_span(cap.get(1).map_or("", |m| m.as_str()));
            if !span.is_empty() && starts_alphabetic(&span) {
                return Some(span);
            }
        }
    }
    None
}

/// Keep tokens up to the first stop word or punctuation mark.
fn clip_destination_span(span: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for raw in span.split_whitespace() {
        let token = raw.trim_matches(|c| PUNCTUATION.contains(&c));
        if token.is_empty() || SPAN_STOPPERS.contains(&token.to_lowercase().as_str()) {
            break;
        }
        // A numeric token starts a distance/stop-count phrase, not a name.
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            break;
        }
        kept.push(token);
        if raw.ends_with(|c| PUNCTUATION.contains(&c)) {
            break;
        }
    }
    kept.join(" ")
}

/// Clip a waypoint span at markers/punctuation, keeping conjunctions so
/// the list can be split afterwards.
fn clip_waypoint_span(span: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for raw in span.split_whitespace() {
        let token = raw.trim_matches(|c| PUNCTUATION.contains(&c));
        if token.is_empty() || WAYPOINT_SPAN_STOPPERS.contains(&token.to_lowercase().as_str()) {
            break;
        }
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            break;
        }
        kept.push(token);
        if raw.ends_with(|c| PUNCTUATION.contains(&c)) {
            break;
        }
    }
    kept.join(" ")
}

/// Split "кав'ярнею та парком" into its conjuncts.
fn split_conjunctions(span: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for token in span.split_whitespace() {
        if CONJUNCTIONS.contains(&token.to_lowercase().as_str()) {
            if !current.is_empty() {
                pieces.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(token);
        }
    }
    if !current.is_empty() {
        pieces.push(current.join(" "));
    }
    pieces
}

/// The "is it shaped like a name" heuristic: whitespace, leading
/// uppercase, more than 10 characters, or an adjective + noun pair.
/// Approximate by design; never overridden by dictionary lookup.
fn looks_like_proper_name(span: &str) -> bool {
    if span.split_whitespace().count() > 1 {
        return true;
    }
    if span.chars().next().is_some_and(|c| c.is_uppercase()) {
        return true;
    }
    span.chars().count() > 10
}

fn starts_alphabetic(span: &str) -> bool {
    span.chars().next().is_some_and(|c| c.is_alphabetic())
}

/// Find a destination category: prepositional mentions first, then
/// free-standing lemma occurrences outside waypoint scope.
fn extract_destination_category(lower: &str) -> Option<Category> {
    for cap in DEST_CATEGORY_RE.captures_iter(lower) {
        if let Some(category) = lexicon::match_category(&cap[1]) {
            return Some(category);
        }
    }

    // Free-standing scan. Words introduced by "з"/"через"/"повз" (and
    // conjunction continuations of such a phrase) are waypoints, not
    // destinations.
    let mut waypoint_scope = false;
    for raw in lower.split_whitespace() {
        let token = raw.trim_matches(|c| PUNCTUATION.contains(&c));
        if token.is_empty() {
            continue;
        }
        if WAYPOINT_SPAN_STOPPERS[..5].contains(&token) {
            // через / повз / зі / із / з
            waypoint_scope = true;
            continue;
        }
        if matches!(token, "до" | "на" | "в" | "у") {
            waypoint_scope = false;
            continue;
        }
        if CONJUNCTIONS.contains(&token) {
            continue;
        }
        let ends_clause = raw.ends_with(|c| PUNCTUATION.contains(&c));
        if !waypoint_scope {
            if let Some(category) = lexicon::match_category(token) {
                return Some(category);
            }
        }
        if ends_clause {
            waypoint_scope = false;
        }
    }
    None
}

/// Collect waypoint names and categories from "through X" / "with X"
/// phrases. Names dedup by exact string; categories dedup by value and
/// never repeat the destination category.
fn extract_waypoints(text: &str, request: &mut RouteRequest) {
    for marker in WAYPOINT_MARKER_RE.find_iter(text) {
        let span = clip_waypoint_span(&text[marker.end()..]);
        for piece in split_conjunctions(&span) {
            if !starts_alphabetic(&piece) {
                continue;
            }
            if looks_like_proper_name(&piece) {
                if !request.waypoint_names.contains(&piece) {
                    request.waypoint_names.push(piece);
                }
            } else if let Some(category) = lexicon::match_category(&piece) {
                if request.destination_category != Some(category)
                    && !request.waypoint_categories.contains(&category)
                {
                    request.waypoint_categories.push(category);
                }
            }
        }
    }
}

/// First kilometre quantity in the text, if any.
fn extract_distance(lower: &str) -> Option<f64> {
    let cap = DISTANCE_RE.captures(lower)?;
    cap[1].replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_category_simple() {
        let request = parse("прогулянка до парку");
        assert_eq!(request.destination_category, Some(Category::Park));
        assert_eq!(request.destination_name, None);
        assert!(!request.is_exploration);
    }

    #[test]
    fn test_exploration_with_waypoint_categories() {
        let request = parse("прогулянка з кав'ярнею та парком");
        assert!(request.is_exploration);
        assert_eq!(request.destination_name, None);
        assert_eq!(request.destination_category, None);
        assert_eq!(request.waypoint_categories, vec![Category::Cafe, Category::Park]);
    }

    #[test]
    fn test_multiword_capitalized_destination_is_a_name() {
        let request = parse("до Західного автовокзалу");
        assert_eq!(request.destination_name.as_deref(), Some("Західного автовокзалу"));
        assert_eq!(request.destination_category, None);
    }

    #[test]
    fn test_name_suppresses_category_inference() {
        let request = parse("маршрут до Золотих воріт через парк");
        assert!(request.destination_name.is_some());
        assert_eq!(request.destination_category, None);
        assert_eq!(request.waypoint_categories, vec![Category::Park]);
    }

    #[test]
    fn test_declined_destination_category() {
        let request = parse("хочу дійти до музею");
        assert_eq!(request.destination_category, Some(Category::Museum));
    }

    #[test]
    fn test_distance_with_dot() {
        let request = parse("прогулянка до парку 5 км");
        assert_eq!(request.target_distance_km, Some(5.0));
    }

    #[test]
    fn test_distance_with_comma_decimal() {
        let request = parse("маршрут до парку на 5,5 km");
        let d = request.target_distance_km.unwrap();
        assert!(d > 4.5 && d < 5.6);
    }

    #[test]
    fn test_distance_full_unit_spelling() {
        let request = parse("пройтися до озера 3 кілометри");
        assert_eq!(request.target_distance_km, Some(3.0));
    }

    #[test]
    fn test_waypoint_name_extraction() {
        let request = parse("до парку через Контрактову площу");
        assert_eq!(request.destination_category, Some(Category::Park));
        assert_eq!(request.waypoint_names, vec!["Контрактову площу".to_string()]);
    }

    #[test]
    fn test_waypoint_category_never_repeats_destination() {
        let request = parse("прогулянка до парку через сквер");
        assert_eq!(request.destination_category, Some(Category::Park));
        assert!(request.waypoint_categories.is_empty());
    }

    #[test]
    fn test_stop_count_extraction_and_clamping() {
        assert_eq!(parse("прогулянка з парком на 4 зупинки").desired_stop_count, 4);
        assert_eq!(parse("прогулянка з парком на 20 зупинок").desired_stop_count, 10);
        assert_eq!(parse("прогулянка з парком").desired_stop_count, 6);
    }

    #[test]
    fn test_numeric_span_is_not_a_destination_name() {
        let request = parse("прогулянка на 5 км");
        assert_eq!(request.destination_name, None);
        assert_eq!(request.target_distance_km, Some(5.0));
    }

    #[test]
    fn test_exploration_requires_walk_verb() {
        // Waypoints but no stroll verb: not an exploration request.
        let request = parse("з кав'ярнею та парком");
        assert!(!request.is_exploration);
        assert_eq!(request.waypoint_categories.len(), 2);
    }

    #[test]
    fn test_exploration_requires_missing_destination() {
        let request = parse("прогулянка до парку з кав'ярнею");
        assert!(!request.is_exploration);
        assert_eq!(request.destination_category, Some(Category::Park));
        assert_eq!(request.waypoint_categories, vec![Category::Cafe]);
    }

    #[test]
    fn test_waypoint_names_deduplicate() {
        let request = parse("через Хрещатик і через Хрещатик");
        assert_eq!(request.waypoint_names.len(), 1);
    }

    #[test]
    fn test_repeated_through_phrases_keep_every_waypoint() {
        let request = parse("до Оболоні через Золоті ворота через Поштову площу");
        assert_eq!(request.destination_name.as_deref(), Some("Оболоні"));
        assert_eq!(
            request.waypoint_names,
            vec!["Золоті ворота".to_string(), "Поштову площу".to_string()]
        );
    }

    #[test]
    fn test_mixed_waypoint_markers_each_contribute() {
        let request = parse("прогулянка до озера через парк повз музей з кав'ярнею");
        assert_eq!(request.destination_category, Some(Category::Lake));
        assert_eq!(
            request.waypoint_categories,
            vec![Category::Park, Category::Museum, Category::Cafe]
        );
    }

    #[test]
    fn test_empty_text_yields_default_request() {
        let request = parse("   ");
        assert_eq!(request, RouteRequest::default());
    }
}
