/// Geographic primitives for the field boundary
///
/// Positions are WGS84 (longitude, latitude) pairs. Meter offsets use an
/// equirectangular approximation: latitude degrees are a fixed 111 320 m,
/// longitude degrees shrink by cos(latitude). Good enough at field scale.

use crate::constants::{EARTH_RADIUS_M, METERS_PER_DEG_LAT};
use crate::seeded_rng::SeededRng;
use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// A geographic bounding box in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn mean_lat(&self) -> f64 {
        (self.south + self.north) / 2.0
    }
}

/// The field boundary: an ordered vertex ring, closed implicitly.
///
/// Containment assumes a simple (non-self-intersecting) ring with at least
/// 3 vertices; degenerate polygons give unspecified containment results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<GeoPoint>,
}

impl Polygon {
    pub fn new(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }

    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Ray-casting parity test, including the wrap-around edge.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let vi = &self.vertices[i];
            let vj = &self.vertices[j];
            let crosses = (vi.lat > point.lat) != (vj.lat > point.lat);
            if crosses {
                let x_at_lat =
                    (vj.lng - vi.lng) * (point.lat - vi.lat) / (vj.lat - vi.lat) + vi.lng;
                if point.lng < x_at_lat {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox {
            west: f64::INFINITY,
            south: f64::INFINITY,
            east: f64::NEG_INFINITY,
            north: f64::NEG_INFINITY,
        };
        for v in &self.vertices {
            bbox.west = bbox.west.min(v.lng);
            bbox.south = bbox.south.min(v.lat);
            bbox.east = bbox.east.max(v.lng);
            bbox.north = bbox.north.max(v.lat);
        }
        bbox
    }

    /// Vertex centroid (arithmetic mean), not the area centroid. Matches
    /// what the map view centers on.
    pub fn centroid(&self) -> GeoPoint {
        if self.vertices.is_empty() {
            return GeoPoint::new(0.0, 0.0);
        }
        let n = self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |acc, v| (acc.0 + v.lng, acc.1 + v.lat));
        GeoPoint::new(sum.0 / n, sum.1 / n)
    }

    /// Shoelace area in m², with longitude scaled to meters at the mean
    /// latitude. 0 for degenerate polygons.
    pub fn area_m2(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let mean_lat = self.bounding_box().mean_lat();
        let mx = METERS_PER_DEG_LAT * mean_lat.to_radians().cos();
        let my = METERS_PER_DEG_LAT;
        let n = self.vertices.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            twice_area += (a.lng * mx) * (b.lat * my) - (b.lng * mx) * (a.lat * my);
        }
        twice_area.abs() / 2.0
    }
}

/// Degree deltas equivalent to one meter at `lat`, per axis (x = lng,
/// y = lat).
pub fn degrees_per_meter(lat: f64) -> DVec2 {
    let lng_scale = METERS_PER_DEG_LAT * lat.to_radians().cos();
    DVec2::new(1.0 / lng_scale, 1.0 / METERS_PER_DEG_LAT)
}

/// Great-circle (haversine) distance in meters.
pub fn haversine_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Bounded rejection sampling of interior points.
///
/// Draws uniform points in the bounding box and keeps the ones inside the
/// polygon, stopping at `count` accepted or `attempt_cap` draws. The bool
/// is true when the cap was hit first, so callers can distinguish true
/// completion from early termination. Never errors; an empty or degenerate
/// polygon yields an empty batch.
pub fn scatter_in_polygon(
    polygon: &Polygon,
    count: usize,
    attempt_cap: usize,
    rng: &mut SeededRng,
) -> (Vec<GeoPoint>, bool) {
    if polygon.is_degenerate() || count == 0 {
        return (Vec::new(), false);
    }
    let bbox = polygon.bounding_box();
    let mut points = Vec::with_capacity(count);
    let mut attempts = 0usize;
    while points.len() < count && attempts < attempt_cap {
        let candidate = GeoPoint::new(
            rng.range_f64(bbox.west, bbox.east),
            rng.range_f64(bbox.south, bbox.north),
        );
        if polygon.contains(&candidate) {
            points.push(candidate);
        }
        attempts += 1;
    }
    let exhausted = points.len() < count;
    (points, exhausted)
}

/// Round to 3 decimals, the precision carried by heat samples and exports.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
