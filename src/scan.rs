/// Field scan pipeline
///
/// Runs the whole generation chain from one config:
/// seed → hotspots → {heat samples, detections} → grid aggregation → route
/// → derived metrics. Pure and re-entrant; the result is a function of the
/// config alone, so callers may memoize by input tuple. Each stage draws
/// from its own salted stream of the base seed.

use crate::detection::{self, Detection, DetectionConfig};
use crate::geo::Polygon;
use crate::grid_route::{self, GridConfig, GridSummary};
use crate::heat_field::{self, HeatField};
use crate::hotspot::{self, Hotspot, HotspotConfig, HotspotField, Passada};
use crate::metrics::{self, FieldMetrics, TreatmentPlan};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub polygon: Polygon,
    pub seed: u32,
    pub hotspot_count: usize,
    pub sample_budget: usize,
    /// Passadas considered active; empty = all.
    pub active_passadas: Vec<Passada>,
    pub hotspots: HotspotConfig,
    pub detections: DetectionConfig,
    pub grid: GridConfig,
    pub treatment: TreatmentPlan,
}

impl ScanConfig {
    pub fn new(polygon: Polygon, seed: u32) -> Self {
        Self {
            polygon,
            seed,
            hotspot_count: 8,
            sample_budget: 4000,
            active_passadas: Vec::new(),
            hotspots: HotspotConfig::default(),
            detections: DetectionConfig::default(),
            grid: GridConfig::default(),
            treatment: TreatmentPlan::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Every generated hotspot, before passada filtering.
    pub hotspot_field: HotspotField,
    /// The hotspots in the active passada set; the heat field and the grid
    /// are built from these.
    pub active_hotspots: Vec<Hotspot>,
    pub heat: HeatField,
    /// Every synthesized detection (generated once per hotspot set).
    pub detections: Vec<Detection>,
    pub grid: GridSummary,
    pub metrics: FieldMetrics,
}

/// Runs one scan. Never fails: degenerate polygons, zero counts, and
/// exhausted attempt caps all come back as valid (possibly empty) output.
pub fn run_scan(config: &ScanConfig) -> ScanResult {
    let hotspot_field = hotspot::generate_hotspots(
        &config.polygon,
        config.hotspot_count,
        config.seed,
        &config.hotspots,
    );

    let active_hotspots: Vec<Hotspot> = hotspot_field
        .hotspots
        .iter()
        .filter(|h| {
            config.active_passadas.is_empty() || config.active_passadas.contains(&h.passada)
        })
        .cloned()
        .collect();

    let heat = heat_field::sample_heat_field(
        &config.polygon,
        &active_hotspots,
        config.seed,
        config.sample_budget,
    );

    // Detections are synthesized from the full hotspot set and filtered for
    // aggregation, matching how the category toggle behaves.
    let detections = detection::synthesize_detections(
        &hotspot_field.hotspots,
        &config.polygon,
        config.seed,
        &config.detections,
    );
    let active_detections = detection::filter_active(&detections, &config.active_passadas);

    let grid = grid_route::aggregate_grid(
        &heat.samples,
        &active_detections,
        &config.polygon,
        &config.grid,
    );

    let metrics = metrics::derive_metrics(
        &config.polygon,
        &heat,
        &active_detections,
        &config.treatment,
    );

    ScanResult {
        hotspot_field,
        active_hotspots,
        heat,
        detections,
        grid,
        metrics,
    }
}
