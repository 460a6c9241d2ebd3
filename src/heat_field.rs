/// Heat-field sampler
///
/// Scatters interior points over the field and assigns each the summed
/// Gaussian contribution of every active hotspot, clamped to [0, 1]. This
/// is the dominant cost center, O(samples × hotspots), which is why the
/// sample budget is hard-capped.

use crate::constants::{HEAT_SAMPLE_ATTEMPT_FACTOR, HEAT_SAMPLE_STREAM, MAX_HEAT_SAMPLES};
use crate::geo::{self, GeoPoint, Polygon};
use crate::hotspot::Hotspot;
use crate::seeded_rng::SeededRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatSample {
    pub position: GeoPoint,
    /// In [0, 1], rounded to 3 decimals.
    pub intensity: f64,
}

#[derive(Debug, Clone)]
pub struct HeatField {
    pub samples: Vec<HeatSample>,
    /// True when the rejection loop hit its attempt cap before delivering
    /// the full target (near-degenerate boundaries under-deliver).
    pub attempts_exhausted: bool,
}

impl HeatField {
    pub fn mean_intensity(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|s| s.intensity).sum::<f64>() / self.samples.len() as f64
    }
}

/// Summed hotspot contribution at `point`, before rounding.
///
/// The offset to each hotspot center is normalized per axis by the spread
/// converted from meters to degrees at the hotspot's latitude (longitude
/// corrected by cos(lat)), then fed through exp(−d²/2) and scaled by the
/// amplitude. An empty hotspot slice yields 0.
pub fn intensity_at(point: &GeoPoint, hotspots: &[Hotspot]) -> f64 {
    let mut total = 0.0;
    for h in hotspots {
        let deg_per_m = geo::degrees_per_meter(h.position.lat);
        let sigma_lng = h.spread_m * deg_per_m.x;
        let sigma_lat = h.spread_m * deg_per_m.y;
        let dx = (point.lng - h.position.lng) / sigma_lng;
        let dy = (point.lat - h.position.lat) / sigma_lat;
        let d2 = dx * dx + dy * dy;
        total += h.amplitude * (-d2 / 2.0).exp();
    }
    total.clamp(0.0, 1.0)
}

/// Samples the heat field at up to `target` interior points.
///
/// `target` is clamped to `MAX_HEAT_SAMPLES`; the rejection loop is bounded
/// by target × `HEAT_SAMPLE_ATTEMPT_FACTOR` attempts and under-delivers
/// silently when the cap trips.
pub fn sample_heat_field(
    polygon: &Polygon,
    hotspots: &[Hotspot],
    seed: u32,
    target: usize,
) -> HeatField {
    let target = target.min(MAX_HEAT_SAMPLES);
    let mut rng = SeededRng::stream(seed, HEAT_SAMPLE_STREAM);
    let (points, attempts_exhausted) = geo::scatter_in_polygon(
        polygon,
        target,
        target.saturating_mul(HEAT_SAMPLE_ATTEMPT_FACTOR),
        &mut rng,
    );
    let samples = points
        .into_iter()
        .map(|position| HeatSample {
            intensity: geo::round3(intensity_at(&position, hotspots)),
            position,
        })
        .collect();
    HeatField {
        samples,
        attempts_exhausted,
    }
}
