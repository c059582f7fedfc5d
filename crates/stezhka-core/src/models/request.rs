use serde::{Deserialize, Serialize};

use super::Category;

pub const MIN_STOP_COUNT: usize = 2;
pub const MAX_STOP_COUNT: usize = 10;
pub const DEFAULT_STOP_COUNT: usize = 6;

/// Route generation mode, selectable by callers to override what the
/// parser inferred from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    PointToPoint,
    Exploration,
}

/// Structured walk request produced by the intent parser. Transient:
/// created per user submission, never persisted.
///
/// Invariant: `destination_category` and `destination_name` are never both
/// set. A recognized specific name suppresses category inference for the
/// destination slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub destination_category: Option<Category>,
    pub destination_name: Option<String>,

    /// Unique categories in insertion order.
    pub waypoint_categories: Vec<Category>,
    /// Unique names in extraction order.
    pub waypoint_names: Vec<String>,

    pub target_distance_km: Option<f64>,
    pub is_exploration: bool,

    /// Desired number of stops, clamped to [MIN_STOP_COUNT, MAX_STOP_COUNT].
    pub desired_stop_count: usize,
}

impl Default for RouteRequest {
    fn default() -> Self {
        Self {
            destination_category: None,
            destination_name: None,
            waypoint_categories: Vec::new(),
            waypoint_names: Vec::new(),
            target_distance_km: None,
            is_exploration: false,
            desired_stop_count: DEFAULT_STOP_COUNT,
        }
    }
}

impl RouteRequest {
    /// Clamp a requested stop count to the supported range.
    pub fn clamp_stop_count(count: usize) -> usize {
        count.clamp(MIN_STOP_COUNT, MAX_STOP_COUNT)
    }

    /// True when the request names any destination at all.
    pub fn has_destination(&self) -> bool {
        self.destination_name.is_some() || self.destination_category.is_some()
    }

    /// True when the request carries at least one waypoint, by name or
    /// by category.
    pub fn has_waypoints(&self) -> bool {
        !self.waypoint_names.is_empty() || !self.waypoint_categories.is_empty()
    }
}
