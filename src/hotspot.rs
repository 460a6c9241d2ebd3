/// Synthetic infestation centers
///
/// A hotspot is a point source with an amplitude and a spatial spread in
/// meters. The heat field and the detection records are both derived from
/// the hotspot set, so hotspots are generated once per seed and treated as
/// immutable afterwards.

use crate::constants::{
    DEFAULT_AMPLITUDE_RANGE, DEFAULT_SPREAD_RANGE_M, HOTSPOT_ATTEMPT_CAP, HOTSPOT_STREAM,
};
use crate::geo::{GeoPoint, Polygon};
use crate::seeded_rng::SeededRng;
use serde::{Deserialize, Serialize};

/// Treatment-pass label used to filter which hotspots and detections are
/// active in a given view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Passada {
    PreEmergente,
    Plantio,
    Adubacao,
}

impl Passada {
    pub const ALL: [Passada; 3] = [Passada::PreEmergente, Passada::Plantio, Passada::Adubacao];

    pub fn label(&self) -> &'static str {
        match self {
            Passada::PreEmergente => "pré-emergente",
            Passada::Plantio => "plantio",
            Passada::Adubacao => "adubação",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub position: GeoPoint,
    /// Peak contribution to the heat field, in [amplitude range].
    pub amplitude: f64,
    /// Gaussian spread in meters.
    pub spread_m: f64,
    pub passada: Passada,
}

#[derive(Debug, Clone)]
pub struct HotspotConfig {
    pub amplitude_range: (f64, f64),
    pub spread_range_m: (f64, f64),
}

impl Default for HotspotConfig {
    fn default() -> Self {
        Self {
            amplitude_range: DEFAULT_AMPLITUDE_RANGE,
            spread_range_m: DEFAULT_SPREAD_RANGE_M,
        }
    }
}

/// Result of one generation pass. `attempts_exhausted` is set when the
/// placement cap was hit before `count` hotspots were accepted; the short
/// list is still valid output.
#[derive(Debug, Clone)]
pub struct HotspotField {
    pub hotspots: Vec<Hotspot>,
    pub attempts_exhausted: bool,
}

/// Rejection-samples `count` hotspots strictly inside the polygon.
///
/// Each attempt draws a point in the bounding box and keeps it only if the
/// polygon contains it; accepted points get amplitude, spread, and passada
/// from the same stream. Bounded by `HOTSPOT_ATTEMPT_CAP` placement
/// attempts.
pub fn generate_hotspots(
    polygon: &Polygon,
    count: usize,
    seed: u32,
    config: &HotspotConfig,
) -> HotspotField {
    let mut rng = SeededRng::stream(seed, HOTSPOT_STREAM);
    if polygon.is_degenerate() || count == 0 {
        return HotspotField {
            hotspots: Vec::new(),
            attempts_exhausted: false,
        };
    }
    let bbox = polygon.bounding_box();
    let mut hotspots = Vec::with_capacity(count);
    let mut attempts = 0usize;
    while hotspots.len() < count && attempts < HOTSPOT_ATTEMPT_CAP {
        let candidate = GeoPoint::new(
            rng.range_f64(bbox.west, bbox.east),
            rng.range_f64(bbox.south, bbox.north),
        );
        if polygon.contains(&candidate) {
            let amplitude = rng.range_f64(config.amplitude_range.0, config.amplitude_range.1);
            let spread_m = rng.range_f64(config.spread_range_m.0, config.spread_range_m.1);
            let passada = Passada::ALL[rng.pick(Passada::ALL.len())];
            hotspots.push(Hotspot {
                position: candidate,
                amplitude,
                spread_m,
                passada,
            });
        }
        attempts += 1;
    }
    let attempts_exhausted = hotspots.len() < count;
    HotspotField {
        hotspots,
        attempts_exhausted,
    }
}
