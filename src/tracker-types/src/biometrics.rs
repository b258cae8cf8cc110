use serde::{Deserialize, Serialize};

/// Body parameters supplied with every calculation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Biometrics {
    /// Body weight in kilograms.
    pub weight: f64,
    /// Height in meters.
    pub height: f64,
}

impl Biometrics {
    pub fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }
}
