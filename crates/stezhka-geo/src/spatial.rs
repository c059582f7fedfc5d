use geo::{Distance, Haversine, Point};
use stezhka_core::models::{BoundingBox, LatLng, LngLat};

/// Two points closer than this in both axes are treated as the same place
/// (~100 m at mid latitudes).
pub const NEAR_DUPLICATE_EPSILON_DEG: f64 = 0.001;

// Approximate degree lengths at mid latitudes, for bounding-box sizing only.
const KM_PER_DEG_LAT: f64 = 110.574;
const KM_PER_DEG_LNG_EQUATOR: f64 = 111.320;

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(a: LngLat, b: LngLat) -> f64 {
    let pa = Point::new(a.lng, a.lat);
    let pb = Point::new(b.lng, b.lat);
    Haversine.distance(pa, pb) / 1000.0
}

/// Axis-aligned bounding box spanning `radius_km` in every direction
/// around `origin`. Longitude span widens with latitude.
pub fn bbox_around(origin: LngLat, radius_km: f64) -> BoundingBox {
    let dlat = radius_km / KM_PER_DEG_LAT;
    let lat_cos = origin.lat.to_radians().cos().max(0.01);
    let dlng = radius_km / (KM_PER_DEG_LNG_EQUATOR * lat_cos);

    BoundingBox::new(
        LngLat::new(origin.lng - dlng, origin.lat - dlat),
        LngLat::new(origin.lng + dlng, origin.lat + dlat),
    )
}

/// Whether two coordinates fall within the near-duplicate threshold on
/// both axes.
pub fn is_near_duplicate(a: LngLat, b: LngLat) -> bool {
    (a.lng - b.lng).abs() < NEAR_DUPLICATE_EPSILON_DEG
        && (a.lat - b.lat).abs() < NEAR_DUPLICATE_EPSILON_DEG
}

/// Up to `count` points evenly spaced along a path, excluding the
/// endpoints. Returns fewer points when the path is short.
pub fn sample_along(points: &[LatLng], count: usize) -> Vec<LatLng> {
    if points.len() < 3 || count == 0 {
        return Vec::new();
    }

    let step = points.len() as f64 / (count + 1) as f64;
    let mut samples = Vec::with_capacity(count);
    for i in 1..=count {
        let idx = ((i as f64 * step) as usize).min(points.len() - 2);
        let point = points[idx];
        if samples.last() != Some(&point) {
            samples.push(point);
        }
    }
    samples
}

/// The path point nearest to `fraction` of the way along the geometry,
/// by index. `fraction` is clamped to [0, 1].
pub fn point_at_fraction(points: &[LatLng], fraction: f64) -> Option<LatLng> {
    if points.is_empty() {
        return None;
    }
    let f = fraction.clamp(0.0, 1.0);
    let idx = ((points.len() - 1) as f64 * f).round() as usize;
    points.get(idx).copied()
}
