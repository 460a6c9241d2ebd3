/// Detection synthesizer
///
/// Emits 1–3 synthetic point-observation records per hotspot, jittered
/// around the hotspot center. A jittered point that escapes the polygon is
/// snapped back to the exact hotspot center rather than re-sampled, which
/// can produce coincident detections near boundary hotspots. Deliberate
/// simplification, kept as-is.

use crate::constants::{
    DETECTION_CONFIDENCE_RANGE, DETECTION_JITTER_RANGE, DETECTION_MAX_AGE_S,
    DETECTION_REFERENCE_TIME_S, DETECTION_STREAM,
};
use crate::geo::{self, GeoPoint, Polygon};
use crate::hotspot::{Hotspot, Passada};
use crate::seeded_rng::SeededRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PestClass {
    Lagarta,
    Percevejo,
}

impl PestClass {
    pub fn label(&self) -> &'static str {
        match self {
            PestClass::Lagarta => "lagarta",
            PestClass::Percevejo => "percevejo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Derived from the source hotspot position plus an index; not
    /// globally unique across regenerations with colliding coordinates.
    pub id: String,
    pub position: GeoPoint,
    /// Unix seconds, drawn backwards from the configured reference time.
    pub timestamp_s: u64,
    pub passada: Passada,
    pub class: PestClass,
    /// In [0.6, 0.98].
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct DetectionConfig {
    /// Reference instant detections are dated back from. Fixed by default
    /// so identical inputs give identical timestamps.
    pub reference_time_s: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            reference_time_s: DETECTION_REFERENCE_TIME_S,
        }
    }
}

/// Generates 1–3 detections for each hotspot.
///
/// Draw order per detection is fixed (jitter fraction, x offset, y offset,
/// class, confidence, age) so the stream is reproducible.
pub fn synthesize_detections(
    hotspots: &[Hotspot],
    polygon: &Polygon,
    seed: u32,
    config: &DetectionConfig,
) -> Vec<Detection> {
    let mut rng = SeededRng::stream(seed, DETECTION_STREAM);
    let mut detections = Vec::new();
    for hotspot in hotspots {
        let count = 1 + rng.pick(3);
        for index in 0..count {
            let jitter_m =
                hotspot.spread_m * rng.range_f64(DETECTION_JITTER_RANGE.0, DETECTION_JITTER_RANGE.1);
            let dx_m = jitter_m * rng.range_f64(-1.0, 1.0);
            let dy_m = jitter_m * rng.range_f64(-1.0, 1.0);
            let deg_per_m = geo::degrees_per_meter(hotspot.position.lat);
            let jittered = GeoPoint::new(
                hotspot.position.lng + dx_m * deg_per_m.x,
                hotspot.position.lat + dy_m * deg_per_m.y,
            );
            // Snap back to the center when jitter exits the field.
            let position = if polygon.contains(&jittered) {
                jittered
            } else {
                hotspot.position
            };
            let class = if rng.next_f64() < 0.5 {
                PestClass::Lagarta
            } else {
                PestClass::Percevejo
            };
            let confidence =
                rng.range_f64(DETECTION_CONFIDENCE_RANGE.0, DETECTION_CONFIDENCE_RANGE.1);
            let age_s = (rng.next_f64() * DETECTION_MAX_AGE_S) as u64;
            detections.push(Detection {
                id: format!(
                    "det_{:.5}_{:.5}_{}",
                    hotspot.position.lat, hotspot.position.lng, index
                ),
                position,
                timestamp_s: config.reference_time_s.saturating_sub(age_s),
                passada: hotspot.passada,
                class,
                confidence,
            });
        }
    }
    detections
}

/// Detections whose passada is in the active set. An empty set means no
/// filter (everything active).
pub fn filter_active<'a>(detections: &'a [Detection], active: &[Passada]) -> Vec<&'a Detection> {
    detections
        .iter()
        .filter(|d| active.is_empty() || active.contains(&d.passada))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotspot::{HotspotConfig, generate_hotspots};
    use more_asserts::{assert_ge, assert_le};

    fn field_polygon() -> Polygon {
        Polygon::new(vec![
            GeoPoint::new(-51.200, -23.500),
            GeoPoint::new(-51.190, -23.500),
            GeoPoint::new(-51.190, -23.490),
            GeoPoint::new(-51.200, -23.490),
        ])
    }

    #[test]
    fn test_one_to_three_per_hotspot() {
        let polygon = field_polygon();
        let field = generate_hotspots(&polygon, 15, 42, &HotspotConfig::default());
        let detections =
            synthesize_detections(&field.hotspots, &polygon, 42, &DetectionConfig::default());
        assert_ge!(detections.len(), field.hotspots.len());
        assert_le!(detections.len(), field.hotspots.len() * 3);
    }

    #[test]
    fn test_detections_inside_polygon() {
        let polygon = field_polygon();
        let field = generate_hotspots(&polygon, 20, 7, &HotspotConfig::default());
        let detections =
            synthesize_detections(&field.hotspots, &polygon, 7, &DetectionConfig::default());
        // Jittered points either stay inside or are snapped to a hotspot
        // center, which is inside by construction.
        for d in &detections {
            assert!(polygon.contains(&d.position));
        }
    }

    #[test]
    fn test_confidence_and_timestamp_ranges() {
        let polygon = field_polygon();
        let field = generate_hotspots(&polygon, 10, 3, &HotspotConfig::default());
        let config = DetectionConfig::default();
        let detections = synthesize_detections(&field.hotspots, &polygon, 3, &config);
        for d in &detections {
            assert_ge!(d.confidence, DETECTION_CONFIDENCE_RANGE.0);
            assert_le!(d.confidence, DETECTION_CONFIDENCE_RANGE.1);
            assert_le!(d.timestamp_s, config.reference_time_s);
            assert_ge!(
                d.timestamp_s,
                config.reference_time_s - DETECTION_MAX_AGE_S as u64
            );
        }
    }

    #[test]
    fn test_determinism() {
        let polygon = field_polygon();
        let field = generate_hotspots(&polygon, 10, 99, &HotspotConfig::default());
        let a = synthesize_detections(&field.hotspots, &polygon, 99, &DetectionConfig::default());
        let b = synthesize_detections(&field.hotspots, &polygon, 99, &DetectionConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_hotspots() {
        let detections =
            synthesize_detections(&[], &field_polygon(), 1, &DetectionConfig::default());
        assert!(detections.is_empty());
    }

    #[test]
    fn test_filter_active() {
        let polygon = field_polygon();
        let field = generate_hotspots(&polygon, 30, 5, &HotspotConfig::default());
        let detections =
            synthesize_detections(&field.hotspots, &polygon, 5, &DetectionConfig::default());

        let all = filter_active(&detections, &[]);
        assert_eq!(all.len(), detections.len());

        let plantio = filter_active(&detections, &[Passada::Plantio]);
        for d in &plantio {
            assert_eq!(d.passada, Passada::Plantio);
        }
        let split: usize = Passada::ALL
            .iter()
            .map(|p| filter_active(&detections, &[*p]).len())
            .sum();
        assert_eq!(split, detections.len());
    }
}
