/// GeoJSON / KML export of the routing output
///
/// Read-only snapshots of the grid summary for downstream GIS tools. The
/// GeoJSON property names (`rank`, `score`, `wAvg`, `det`, `centroid`,
/// `gridSize`) are interop surface and must not change.

use crate::geo::round3;
use crate::grid_route::{GridCell, GridSummary};
use serde_json::{Value, json};

fn cell_ring(cell: &GridCell) -> Value {
    json!([[
        [cell.bounds.west, cell.bounds.south],
        [cell.bounds.east, cell.bounds.south],
        [cell.bounds.east, cell.bounds.north],
        [cell.bounds.west, cell.bounds.north],
        [cell.bounds.west, cell.bounds.south],
    ]])
}

/// FeatureCollection with one Polygon feature per selected cell plus one
/// LineString feature for the route. Feature count = selected + 1.
pub fn geojson_feature_collection(summary: &GridSummary, grid_size_m: f64) -> Value {
    let mut features: Vec<Value> = summary
        .selected
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": cell_ring(cell),
                },
                "properties": {
                    "rank": index + 1,
                    "score": round3(cell.score),
                    "wAvg": round3(cell.mean_intensity),
                    "det": cell.detection_count,
                    "centroid": [cell.centroid.lng, cell.centroid.lat],
                    "gridSize": grid_size_m,
                },
            })
        })
        .collect();

    let route_coords: Vec<Value> = summary
        .route
        .iter()
        .map(|p| json!([p.lng, p.lat]))
        .collect();
    features.push(json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": route_coords,
        },
        "properties": {
            "kind": "route",
            "gridSize": grid_size_m,
        },
    }));

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Hand-built KML document: one Placemark per selected cell with
/// ExtendedData, plus the route as a styled LineString.
pub fn kml_document(summary: &GridSummary, grid_size_m: f64) -> String {
    let mut kml = String::new();
    kml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    kml.push_str("<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n<Document>\n");
    kml.push_str("<name>Rota de monitoramento</name>\n");
    kml.push_str(
        "<Style id=\"routeLine\"><LineStyle><color>ff0055ff</color><width>3</width></LineStyle></Style>\n",
    );

    for (index, cell) in summary.selected.iter().enumerate() {
        kml.push_str("<Placemark>\n");
        kml.push_str(&format!("<name>Célula {}</name>\n", index + 1));
        kml.push_str("<ExtendedData>\n");
        kml.push_str(&format!(
            "<Data name=\"rank\"><value>{}</value></Data>\n",
            index + 1
        ));
        kml.push_str(&format!(
            "<Data name=\"score\"><value>{}</value></Data>\n",
            round3(cell.score)
        ));
        kml.push_str(&format!(
            "<Data name=\"wAvg\"><value>{}</value></Data>\n",
            round3(cell.mean_intensity)
        ));
        kml.push_str(&format!(
            "<Data name=\"det\"><value>{}</value></Data>\n",
            cell.detection_count
        ));
        kml.push_str(&format!(
            "<Data name=\"gridSize\"><value>{}</value></Data>\n",
            grid_size_m
        ));
        kml.push_str("</ExtendedData>\n");
        kml.push_str(&format!(
            "<Polygon><outerBoundaryIs><LinearRing><coordinates>{w},{s},0 {e},{s},0 {e},{n},0 {w},{n},0 {w},{s},0</coordinates></LinearRing></outerBoundaryIs></Polygon>\n",
            w = cell.bounds.west,
            s = cell.bounds.south,
            e = cell.bounds.east,
            n = cell.bounds.north,
        ));
        kml.push_str("</Placemark>\n");
    }

    kml.push_str("<Placemark>\n<name>Rota</name>\n<styleUrl>#routeLine</styleUrl>\n");
    kml.push_str("<LineString><coordinates>");
    for (i, p) in summary.route.iter().enumerate() {
        if i > 0 {
            kml.push(' ');
        }
        kml.push_str(&format!("{},{},0", p.lng, p.lat));
    }
    kml.push_str("</coordinates></LineString>\n</Placemark>\n");
    kml.push_str("</Document>\n</kml>\n");
    kml
}
