pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// Equirectangular approximation: one degree of latitude in meters.
// Longitude degrees shrink by cos(latitude) toward the poles.
pub const METERS_PER_DEG_LAT: f64 = 111_320.0;

// Attempt caps for the bounded rejection-sampling loops. Hitting a cap is
// a silent partial delivery, never an error.
pub const HOTSPOT_ATTEMPT_CAP: usize = 5000;
pub const HEAT_SAMPLE_ATTEMPT_FACTOR: usize = 20;
pub const MAX_HEAT_SAMPLES: usize = 30_000;

// Stream salts: the base seed is XOR-ed with a distinct odd constant per
// consumer so the streams never interfere with one another.
pub const HOTSPOT_STREAM: u32 = 0x9E37_79B1;
pub const HEAT_SAMPLE_STREAM: u32 = 0x85EB_CA77;
pub const DETECTION_STREAM: u32 = 0xC2B2_AE3D;

// default hotspot generation ranges:
pub const DEFAULT_AMPLITUDE_RANGE: (f64, f64) = (0.6, 1.0);
pub const DEFAULT_SPREAD_RANGE_M: (f64, f64) = (25.0, 80.0);

// Detection jitter as a fraction of the source hotspot's spread.
pub const DETECTION_JITTER_RANGE: (f64, f64) = (0.35, 0.75);
pub const DETECTION_CONFIDENCE_RANGE: (f64, f64) = (0.6, 0.98);
pub const DETECTION_MAX_AGE_S: f64 = 72.0 * 3600.0;
// Fixed reference instant (unix seconds) so detection timestamps are a pure
// function of the seed. 2026-08-01T00:00:00Z.
pub const DETECTION_REFERENCE_TIME_S: u64 = 1_785_542_400;

// Grid scoring weights: mean intensity vs normalized detection count.
pub const SCORE_WEIGHT_INTENSITY: f64 = 0.7;
pub const SCORE_WEIGHT_DETECTIONS: f64 = 0.3;
pub const MIN_GRID_CELL_M: f64 = 10.0;
pub const MAX_TOP_N: usize = 20;

// Derived-metrics thresholds.
pub const COVERAGE_INTENSITY_THRESHOLD: f64 = 0.35;
pub const RISK_MEDIUM_THRESHOLD: f64 = 0.33;
pub const RISK_HIGH_THRESHOLD: f64 = 0.66;
pub const PROJECTION_DAILY_GROWTH: f64 = 0.03;
pub const PROJECTION_HORIZON_DAYS: f64 = 7.0;

pub const M2_PER_HA: f64 = 10_000.0;
