use serde::{Deserialize, Serialize};

/// Values derived from a validated record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ComputedMetrics {
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}
