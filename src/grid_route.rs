/// Grid aggregation and scouting-route construction
///
/// Buckets heat samples and detections into a uniform grid over the field's
/// bounding box, scores each in-field cell by a weighted blend of mean
/// intensity and normalized detection count, and orders the top-N cells
/// into a visiting sequence with a greedy nearest-neighbor pass. The route
/// is advisory, not optimal TSP.

use crate::constants::{
    MAX_TOP_N, MIN_GRID_CELL_M, SCORE_WEIGHT_DETECTIONS, SCORE_WEIGHT_INTENSITY,
};
use crate::detection::Detection;
use crate::geo::{self, BoundingBox, GeoPoint, Polygon};
use crate::heat_field::HeatSample;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub ix: i32,
    pub iy: i32,
    pub centroid: GeoPoint,
    pub bounds: BoundingBox,
    /// Mean intensity over the samples bucketed into this cell.
    pub mean_intensity: f64,
    pub sample_count: usize,
    pub detection_count: usize,
    /// 0.7 · mean intensity + 0.3 · normalized detection count.
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Cell edge in meters; clamped to a 10 m minimum.
    pub cell_size_m: f64,
    /// Number of cells to select and route; clamped to 0–20.
    pub top_n: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size_m: 50.0,
            top_n: 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GridSummary {
    /// All in-field cells, score descending ((ix, iy) tie-break).
    pub cells: Vec<GridCell>,
    /// The first min(top_n, cells) cells in score order.
    pub selected: Vec<GridCell>,
    /// Centroids of the selected cells in visiting order.
    pub route: Vec<GeoPoint>,
}

#[derive(Default)]
struct CellAccum {
    intensity_sum: f64,
    sample_count: usize,
    detection_count: usize,
}

// (ix, iy) packed into one 64-bit key.
fn cell_key(ix: i32, iy: i32) -> i64 {
    ((ix as i64) << 32) | (iy as u32 as i64)
}

fn split_key(key: i64) -> (i32, i32) {
    ((key >> 32) as i32, key as i32)
}

/// Aggregates samples and active detections into grid cells and builds the
/// scouting route.
///
/// Cells whose centroid falls outside the polygon are discarded, so the
/// summed per-cell sample counts can be less than the input count. Empty
/// inputs yield an empty summary.
pub fn aggregate_grid(
    samples: &[HeatSample],
    detections: &[&Detection],
    polygon: &Polygon,
    config: &GridConfig,
) -> GridSummary {
    if polygon.is_degenerate() || (samples.is_empty() && detections.is_empty()) {
        return GridSummary {
            cells: Vec::new(),
            selected: Vec::new(),
            route: Vec::new(),
        };
    }

    let bbox = polygon.bounding_box();
    let cell_size_m = config.cell_size_m.max(MIN_GRID_CELL_M);
    let deg_per_m = geo::degrees_per_meter(bbox.mean_lat());
    let d_lng = cell_size_m * deg_per_m.x;
    let d_lat = cell_size_m * deg_per_m.y;

    let index_of = |p: &GeoPoint| -> (i32, i32) {
        (
            ((p.lng - bbox.west) / d_lng).floor() as i32,
            ((p.lat - bbox.south) / d_lat).floor() as i32,
        )
    };

    let mut buckets: HashMap<i64, CellAccum> = HashMap::new();
    for sample in samples {
        let (ix, iy) = index_of(&sample.position);
        let accum = buckets.entry(cell_key(ix, iy)).or_default();
        accum.intensity_sum += sample.intensity;
        accum.sample_count += 1;
    }
    for detection in detections {
        let (ix, iy) = index_of(&detection.position);
        buckets.entry(cell_key(ix, iy)).or_default().detection_count += 1;
    }

    let mut cells: Vec<GridCell> = buckets
        .into_iter()
        .filter_map(|(key, accum)| {
            let (ix, iy) = split_key(key);
            let west = bbox.west + ix as f64 * d_lng;
            let south = bbox.south + iy as f64 * d_lat;
            let centroid = GeoPoint::new(west + d_lng / 2.0, south + d_lat / 2.0);
            // Corner cells whose centroid lies outside the field are noise.
            if !polygon.contains(&centroid) {
                return None;
            }
            let mean_intensity = if accum.sample_count > 0 {
                accum.intensity_sum / accum.sample_count as f64
            } else {
                0.0
            };
            Some(GridCell {
                ix,
                iy,
                centroid,
                bounds: BoundingBox {
                    west,
                    south,
                    east: west + d_lng,
                    north: south + d_lat,
                },
                mean_intensity,
                sample_count: accum.sample_count,
                detection_count: accum.detection_count,
                score: 0.0,
            })
        })
        .collect();

    let max_detections = cells.iter().map(|c| c.detection_count).max().unwrap_or(0);
    for cell in &mut cells {
        let det_norm = if max_detections > 0 {
            cell.detection_count as f64 / max_detections as f64
        } else {
            0.0
        };
        cell.score =
            SCORE_WEIGHT_INTENSITY * cell.mean_intensity + SCORE_WEIGHT_DETECTIONS * det_norm;
    }

    // Score descending with an (ix, iy) tie-break; the HashMap iteration
    // order must not leak into the output.
    cells.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| (a.ix, a.iy).cmp(&(b.ix, b.iy)))
    });

    let top_n = config.top_n.min(MAX_TOP_N);
    let selected: Vec<GridCell> = cells.iter().take(top_n).cloned().collect();
    let route = nearest_neighbor_route(&selected);

    GridSummary {
        cells,
        selected,
        route,
    }
}

/// Greedy nearest-neighbor ordering over the selected cells, starting from
/// the top-scoring one, stepping to the closest unvisited centroid by
/// haversine distance.
fn nearest_neighbor_route(selected: &[GridCell]) -> Vec<GeoPoint> {
    if selected.is_empty() {
        return Vec::new();
    }
    let mut remaining: Vec<&GridCell> = selected.iter().skip(1).collect();
    let mut route = vec![selected[0].centroid];
    let mut current = selected[0].centroid;
    while !remaining.is_empty() {
        let (nearest_idx, _) = remaining
            .iter()
            .enumerate()
            .map(|(i, cell)| (i, geo::haversine_m(&current, &cell.centroid)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or((0, 0.0));
        current = remaining.remove(nearest_idx).centroid;
        route.push(current);
    }
    route
}
