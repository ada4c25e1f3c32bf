use serde::{Deserialize, Serialize};

/// Ett segment fra en ekspander: relativ varighet fra forrige segments slutt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub duration_min: f64, // minutter, aldri negativ
    pub power_pct: f64,    // % av FTP
}

impl Segment {
    pub fn new(duration_min: f64, power_pct: f64) -> Self {
        Self { duration_min, power_pct }
    }
}

/// Ett punkt i [COURSE DATA]: absolutt tid + effekt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub time_min: f64,
    pub power_pct: f64,
}
