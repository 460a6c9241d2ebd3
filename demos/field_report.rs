/// End-to-end scan over a demo field plot
///
/// Generates a seeded infestation map over a quadrilateral plot in northern
/// Paraná, prints the scan report, and dumps the GeoJSON / KML exports.

use field_heat_rust::export::{geojson_feature_collection, kml_document};
use field_heat_rust::geo::{GeoPoint, Polygon};
use field_heat_rust::grid_route::GridConfig;
use field_heat_rust::report::print_scan_report;
use field_heat_rust::scan::{ScanConfig, run_scan};

fn main() {
    let plot = Polygon::new(vec![
        GeoPoint::new(-51.2012, -23.5021),
        GeoPoint::new(-51.1903, -23.5034),
        GeoPoint::new(-51.1891, -23.4942),
        GeoPoint::new(-51.1998, -23.4928),
    ]);

    let mut config = ScanConfig::new(plot, 20260827);
    config.hotspot_count = 10;
    config.sample_budget = 6000;
    config.grid = GridConfig {
        cell_size_m: 60.0,
        top_n: 8,
    };

    let result = run_scan(&config);
    print_scan_report(&result);

    let geojson = geojson_feature_collection(&result.grid, config.grid.cell_size_m);
    println!();
    println!("--- GeoJSON ---");
    println!("{}", serde_json::to_string_pretty(&geojson).unwrap());

    println!();
    println!("--- KML ---");
    println!("{}", kml_document(&result.grid, config.grid.cell_size_m));
}
