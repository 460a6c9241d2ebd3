/// Console scan report
///
/// Prints a human-readable summary of one scan: generation counts, grid
/// ranking, route order, and the derived indicators with the risk label
/// colored by severity. Presentation only; nothing here feeds back into
/// the engine.

use crate::detection::PestClass;
use crate::hotspot::Passada;
use crate::scan::ScanResult;
use colored::Colorize;

fn colored_risk_label(label: &str) -> colored::ColoredString {
    match label {
        "Alto" => label.red().bold(),
        "Médio" => label.yellow().bold(),
        _ => label.green().bold(),
    }
}

pub fn print_scan_report(result: &ScanResult) {
    let m = &result.metrics;

    println!("{}", "=== Relatório de varredura ===".bold());
    println!(
        "Hotspots: {} gerados, {} ativos{}",
        result.hotspot_field.hotspots.len(),
        result.active_hotspots.len(),
        if result.hotspot_field.attempts_exhausted {
            " (cap de tentativas atingido)"
        } else {
            ""
        }
    );
    println!(
        "Amostras de calor: {}{}",
        result.heat.samples.len(),
        if result.heat.attempts_exhausted {
            " (entrega parcial)"
        } else {
            ""
        }
    );
    let lagartas = result
        .detections
        .iter()
        .filter(|d| d.class == PestClass::Lagarta)
        .count();
    println!(
        "Detecções: {} ({} {}, {} {})",
        result.detections.len(),
        lagartas,
        PestClass::Lagarta.label(),
        result.detections.len() - lagartas,
        PestClass::Percevejo.label()
    );
    for passada in Passada::ALL {
        let count = result
            .hotspot_field
            .hotspots
            .iter()
            .filter(|h| h.passada == passada)
            .count();
        println!("   passada {}: {} hotspots", passada.label(), count);
    }
    println!();

    println!(
        "Área: {:.1} ha | Cobertura: {:.1}% | Intensidade média: {:.3}",
        m.area_ha,
        m.coverage * 100.0,
        m.mean_intensity
    );
    println!(
        "Risco: {} ({:.3}) | Projeção 7d: {:.3}",
        colored_risk_label(m.risk_label),
        m.risk_score,
        m.projected_index_7d
    );
    println!(
        "Custo: {:.2} | Perda evitada: {:.2} | ROI: {:.2}",
        m.treatment_cost, m.avoided_loss, m.roi
    );
    println!();

    if result.grid.selected.is_empty() {
        println!("Nenhuma célula selecionada.");
        return;
    }

    println!("{}", "Células prioritárias:".bold());
    println!(
        "   {:>4} {:>8} {:>8} {:>5} {:>20}",
        "rank", "score", "wAvg", "det", "centroide"
    );
    for (index, cell) in result.grid.selected.iter().enumerate() {
        println!(
            "   {:>4} {:>8.3} {:>8.3} {:>5} {:>10.5},{:.5}",
            index + 1,
            cell.score,
            cell.mean_intensity,
            cell.detection_count,
            cell.centroid.lng,
            cell.centroid.lat
        );
    }

    println!();
    println!("{}", "Rota de visita:".bold());
    for (index, point) in result.grid.route.iter().enumerate() {
        println!("   {}. ({:.5}, {:.5})", index + 1, point.lng, point.lat);
    }
}
