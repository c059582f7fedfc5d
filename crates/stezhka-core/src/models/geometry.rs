use serde::{Deserialize, Serialize};

/// A coordinate in provider order: longitude first, latitude second.
///
/// Every geocoding/POI/directions provider call works in this order. The
/// route results handed back to consumers use [`LatLng`] instead. The two
/// types never convert implicitly; swapping axes is the classic geo bug
/// this split exists to prevent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// A coordinate in display order: latitude first, longitude second.
///
/// Used in [`RouteResult`](super::RouteResult) points and waypoint
/// locations, the convention mapping UIs consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<LngLat> for LatLng {
    fn from(c: LngLat) -> Self {
        Self { lat: c.lat, lng: c.lng }
    }
}

impl From<LatLng> for LngLat {
    fn from(c: LatLng) -> Self {
        Self { lng: c.lng, lat: c.lat }
    }
}

/// Axis-aligned bounding box in (lng, lat) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: LngLat,
    pub max: LngLat,
}

impl BoundingBox {
    pub fn new(min: LngLat, max: LngLat) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: LngLat) -> bool {
        point.lng >= self.min.lng
            && point.lng <= self.max.lng
            && point.lat >= self.min.lat
            && point.lat <= self.max.lat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_order_preserved_on_conversion() {
        let provider = LngLat::new(30.52, 50.45);
        let display: LatLng = provider.into();
        assert_eq!(display.lat, 50.45);
        assert_eq!(display.lng, 30.52);

        let back: LngLat = display.into();
        assert_eq!(back, provider);
    }

    #[test]
    fn test_bounding_box_containment() {
        let bbox = BoundingBox::new(LngLat::new(30.0, 50.0), LngLat::new(31.0, 51.0));
        assert!(bbox.contains(LngLat::new(30.5, 50.5)));
        assert!(!bbox.contains(LngLat::new(29.9, 50.5)));
        assert!(!bbox.contains(LngLat::new(30.5, 51.1)));
    }
}
