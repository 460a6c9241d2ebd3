/// Derived field indicators
///
/// Pure arithmetic over the generated field: coverage, area, composite
/// risk, a 7-day linear projection, and the treatment economics. Every
/// aggregate defaults to 0 for empty input, so an empty field is a valid
/// "Baixo" report, never an error.

use crate::constants::{
    COVERAGE_INTENSITY_THRESHOLD, M2_PER_HA, PROJECTION_DAILY_GROWTH, PROJECTION_HORIZON_DAYS,
    RISK_HIGH_THRESHOLD, RISK_MEDIUM_THRESHOLD,
};
use crate::detection::Detection;
use crate::geo::Polygon;
use crate::heat_field::HeatField;
use serde::{Deserialize, Serialize};

/// Economic inputs for the treatment model, per-hectare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub dose_l_per_ha: f64,
    pub price_per_l: f64,
    /// Potential loss per hectare at full infestation.
    pub loss_per_ha: f64,
    /// Fraction of the expected loss the treatment avoids, in [0, 1].
    pub efficacy: f64,
}

impl Default for TreatmentPlan {
    fn default() -> Self {
        Self {
            dose_l_per_ha: 2.0,
            price_per_l: 85.0,
            loss_per_ha: 1200.0,
            efficacy: 0.8,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldMetrics {
    pub area_ha: f64,
    /// Share of samples at or above the infestation threshold.
    pub coverage: f64,
    pub mean_intensity: f64,
    pub detections_per_ha: f64,
    /// Composite in [0, 1].
    pub risk_score: f64,
    /// "Baixo", "Médio" or "Alto".
    pub risk_label: &'static str,
    /// Infestation index projected 7 days out, linear growth, clamped.
    pub projected_index_7d: f64,
    pub treatment_cost: f64,
    pub expected_loss: f64,
    pub avoided_loss: f64,
    /// (avoided loss − cost) / cost; 0 when the cost is 0.
    pub roi: f64,
}

pub fn risk_label(score: f64) -> &'static str {
    if score >= RISK_HIGH_THRESHOLD {
        "Alto"
    } else if score >= RISK_MEDIUM_THRESHOLD {
        "Médio"
    } else {
        "Baixo"
    }
}

/// Derives the full indicator set from one generation pass.
pub fn derive_metrics(
    polygon: &Polygon,
    heat: &HeatField,
    detections: &[&Detection],
    plan: &TreatmentPlan,
) -> FieldMetrics {
    let area_ha = polygon.area_m2() / M2_PER_HA;
    let mean_intensity = heat.mean_intensity();
    let coverage = if heat.samples.is_empty() {
        0.0
    } else {
        let infested = heat
            .samples
            .iter()
            .filter(|s| s.intensity >= COVERAGE_INTENSITY_THRESHOLD)
            .count();
        infested as f64 / heat.samples.len() as f64
    };
    let detections_per_ha = if area_ha > 0.0 {
        detections.len() as f64 / area_ha
    } else {
        0.0
    };

    // Intensity dominates; coverage and scouting density refine it. The
    // density term saturates at 5 detections/ha.
    let density_norm = (detections_per_ha / 5.0).clamp(0.0, 1.0);
    let risk_score = (0.5 * mean_intensity + 0.3 * coverage + 0.2 * density_norm).clamp(0.0, 1.0);

    let projected_index_7d = (mean_intensity
        + PROJECTION_DAILY_GROWTH * PROJECTION_HORIZON_DAYS * mean_intensity)
        .clamp(0.0, 1.0);

    let treatment_cost = area_ha * plan.dose_l_per_ha * plan.price_per_l;
    let expected_loss = area_ha * plan.loss_per_ha * risk_score;
    let avoided_loss = expected_loss * plan.efficacy.clamp(0.0, 1.0);
    let roi = if treatment_cost > 0.0 {
        (avoided_loss - treatment_cost) / treatment_cost
    } else {
        0.0
    };

    FieldMetrics {
        area_ha,
        coverage,
        mean_intensity,
        detections_per_ha,
        risk_score,
        risk_label: risk_label(risk_score),
        projected_index_7d,
        treatment_cost,
        expected_loss,
        avoided_loss,
        roi,
    }
}
