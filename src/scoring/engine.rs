use super::types::{Band, MarketDemand};
use super::validation::validate_metrics;
use crate::input::MetricsRecord;

/// Every score starts here; present metrics adjust it up or down.
pub const BASE_SCORE: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct FactorContribution {
    pub label: &'static str,
    pub detail: String, // e.g. "(72.5 - 50) x 0.3 = +6.8"
    pub before: f64,
    pub after: f64,
}

#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub base: f64,
    /// Total before rounding and clamping.
    pub raw: f64,
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub score: u8,
    pub band: Band,
    pub breakdown: ScoreBreakdown,
}

/// Derive capacity utilization as a percentage of production capacity,
/// rounded to one decimal place (ties away from zero).
///
/// Returns None when capacity is zero or negative so the caller can leave the
/// previously displayed value in place - there is no divide-by-zero path.
pub fn derive_utilization(output: f64, capacity: f64) -> Option<f64> {
    if capacity > 0.0 {
        Some(((output / capacity) * 100.0 * 10.0).round() / 10.0)
    } else {
        None
    }
}

/// Recompute the derived utilization field in place.
///
/// The form layer calls this after every edit of monthly output or production
/// capacity; unparseable inputs count as zero. When capacity is absent or
/// zero the field keeps whatever it held before.
pub fn refresh_utilization(record: &mut MetricsRecord) {
    let output = record.monthly_output.number().unwrap_or(0.0);
    let capacity = record.production_capacity.number().unwrap_or(0.0);
    if let Some(utilization) = derive_utilization(output, capacity) {
        record.capacity_utilization.set(format!("{:.1}", utilization));
    }
}

/// Compute the heuristic performance score for a metrics record.
///
/// Starts from [`BASE_SCORE`] and applies a fixed weight per present metric;
/// absent or unparseable fields contribute nothing. The returned score is
/// rounded (ties away from zero) and clamped to 0-100; the breakdown records
/// each contributing factor and the unrounded total.
pub fn compute_score(metrics: &MetricsRecord) -> (u8, ScoreBreakdown) {
    let mut score = BASE_SCORE;
    let mut factors = Vec::new();

    // Production factors
    if let Some(v) = metrics.capacity_utilization.number() {
        let before = score;
        score += (v - 50.0) * 0.3;
        factors.push(FactorContribution {
            label: "Capacity utilization",
            detail: format!("({} - 50) x 0.3 = {:+.1}", v, score - before),
            before,
            after: score,
        });
    }

    if let Some(v) = metrics.production_efficiency.number() {
        let before = score;
        score += (v - 50.0) * 0.4;
        factors.push(FactorContribution {
            label: "Production efficiency",
            detail: format!("({} - 50) x 0.4 = {:+.1}", v, score - before),
            before,
            after: score,
        });
    }

    // Quality factors
    if let Some(v) = metrics.defect_rate.number() {
        let before = score;
        score -= v * 2.0;
        factors.push(FactorContribution {
            label: "Defect rate",
            detail: format!("{} x -2 = {:+.1}", v, score - before),
            before,
            after: score,
        });
    }

    if let Some(v) = metrics.customer_satisfaction.number() {
        let before = score;
        score += (v - 5.0) * 5.0;
        factors.push(FactorContribution {
            label: "Customer satisfaction",
            detail: format!("({} - 5) x 5 = {:+.1}", v, score - before),
            before,
            after: score,
        });
    }

    // Financial factors
    if let Some(v) = metrics.profit_margin.number() {
        let before = score;
        score += v * 0.5;
        factors.push(FactorContribution {
            label: "Profit margin",
            detail: format!("{} x 0.5 = {:+.1}", v, score - before),
            before,
            after: score,
        });
    }

    // External factors. A zero adjustment is skipped entirely, so "moderate"
    // demand is indistinguishable from leaving the field blank.
    if let Some(demand) = MarketDemand::parse(metrics.market_demand.as_str()) {
        let adjustment = demand.adjustment();
        if adjustment != 0.0 {
            let before = score;
            score += adjustment;
            factors.push(FactorContribution {
                label: "Market demand",
                detail: format!("{} = {:+}", demand.as_str(), adjustment),
                before,
                after: score,
            });
        }
    }

    let raw = score;
    let final_score = raw.round().clamp(0.0, 100.0) as u8;

    (
        final_score,
        ScoreBreakdown {
            base: BASE_SCORE,
            raw,
            factors,
        },
    )
}

/// Validate, score, and classify a metrics record.
///
/// The error lists every missing required field; no partial score is ever
/// produced.
pub fn compute_prediction(metrics: &MetricsRecord) -> Result<PredictionResult, Vec<String>> {
    validate_metrics(metrics)?;
    let (score, breakdown) = compute_score(metrics);
    let band = Band::from_score(score);
    Ok(PredictionResult {
        score,
        band,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_only() -> MetricsRecord {
        let mut record = MetricsRecord::default();
        record.company_name.set("Acme");
        record.industry_type.set("automotive");
        record.monthly_output.set("1000");
        record.production_capacity.set("2000");
        record
    }

    #[test]
    fn test_all_optionals_absent_scores_base() {
        let (score, breakdown) = compute_score(&required_only());
        assert_eq!(score, 50);
        assert!(breakdown.factors.is_empty());
        assert_eq!(breakdown.raw, BASE_SCORE);
        assert_eq!(Band::from_score(score), Band::Moderate);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let mut record = required_only();
        record.production_efficiency.set("72");
        record.defect_rate.set("1.5");
        record.market_demand.set("high");
        let (first, _) = compute_score(&record);
        let (second, _) = compute_score(&record);
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_factor_weights() {
        let mut record = required_only();
        record.capacity_utilization.set("100");
        let (score, _) = compute_score(&record);
        assert_eq!(score, 65); // 50 + (100-50)*0.3

        let mut record = required_only();
        record.production_efficiency.set("100");
        let (score, _) = compute_score(&record);
        assert_eq!(score, 70); // 50 + (100-50)*0.4

        let mut record = required_only();
        record.defect_rate.set("10");
        let (score, _) = compute_score(&record);
        assert_eq!(score, 30); // 50 - 10*2

        let mut record = required_only();
        record.customer_satisfaction.set("9");
        let (score, _) = compute_score(&record);
        assert_eq!(score, 70); // 50 + (9-5)*5

        let mut record = required_only();
        record.profit_margin.set("20");
        let (score, _) = compute_score(&record);
        assert_eq!(score, 60); // 50 + 20*0.5
    }

    #[test]
    fn test_clamps_at_one_hundred() {
        let mut record = required_only();
        record.capacity_utilization.set("100");
        record.production_efficiency.set("100");
        record.customer_satisfaction.set("10");
        record.profit_margin.set("100");
        record.market_demand.set("very_high");
        let (score, breakdown) = compute_score(&record);
        // 50 + 15 + 20 + 25 + 50 + 10 = 170 before clamping
        assert_eq!(breakdown.raw, 170.0);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_clamps_at_zero() {
        let mut record = required_only();
        record.defect_rate.set("100");
        record.production_efficiency.set("0");
        record.capacity_utilization.set("0");
        let (score, breakdown) = compute_score(&record);
        // 50 - 200 - 20 - 15 = -185 before clamping
        assert_eq!(breakdown.raw, -185.0);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_band_boundaries_reachable() {
        // 50 + (10-5)*5 + 10*0.5 = 80
        let mut record = required_only();
        record.customer_satisfaction.set("10");
        record.profit_margin.set("10");
        let (score, _) = compute_score(&record);
        assert_eq!(score, 80);
        assert_eq!(Band::from_score(score), Band::VeryGood);

        // 50 + 25 + 4 = 79
        let mut record = required_only();
        record.customer_satisfaction.set("10");
        record.profit_margin.set("8");
        let (score, _) = compute_score(&record);
        assert_eq!(score, 79);
        assert_eq!(Band::from_score(score), Band::Good);

        // 50 - 5.5*2 = 39
        let mut record = required_only();
        record.defect_rate.set("5.5");
        let (score, _) = compute_score(&record);
        assert_eq!(score, 39);
        assert_eq!(Band::from_score(score), Band::Low);
    }

    #[test]
    fn test_moderate_demand_same_as_absent() {
        let mut with_moderate = required_only();
        with_moderate.market_demand.set("moderate");
        let absent = required_only();

        let (moderate_score, moderate_breakdown) = compute_score(&with_moderate);
        let (absent_score, absent_breakdown) = compute_score(&absent);

        assert_eq!(moderate_score, absent_score);
        assert_eq!(
            moderate_breakdown.factors.len(),
            absent_breakdown.factors.len()
        );
    }

    #[test]
    fn test_malformed_optional_is_ignored() {
        let mut record = required_only();
        record.defect_rate.set("n/a");
        record.profit_margin.set("twenty");
        let (score, breakdown) = compute_score(&record);
        assert_eq!(score, 50);
        assert!(breakdown.factors.is_empty());
    }

    #[test]
    fn test_unknown_demand_level_is_ignored() {
        let mut record = required_only();
        record.market_demand.set("enormous");
        let (score, _) = compute_score(&record);
        assert_eq!(score, 50);
    }

    #[test]
    fn test_unused_metrics_do_not_move_the_score() {
        let mut record = required_only();
        record.rework_rate.set("50");
        record.return_rate.set("50");
        record.monthly_revenue.set("1000000");
        record.employee_count.set("250");
        record.downtime_hours.set("40");
        record.competition_level.set("very_high");
        record.economic_condition.set("recession");
        record.seasonality.set("very_high");
        record.operating_years.set("12");
        record.company_size.set("large");
        record.additional_notes.set("strike ongoing");
        let (score, breakdown) = compute_score(&record);
        assert_eq!(score, 50);
        assert!(breakdown.factors.is_empty());
    }

    #[test]
    fn test_breakdown_chains_from_base_to_raw() {
        let mut record = required_only();
        record.capacity_utilization.set("72.5");
        record.defect_rate.set("2");
        record.market_demand.set("low");
        let (_, breakdown) = compute_score(&record);

        assert_eq!(breakdown.factors.len(), 3);
        assert_eq!(breakdown.factors[0].before, breakdown.base);
        for pair in breakdown.factors.windows(2) {
            assert_eq!(pair[0].after, pair[1].before);
        }
        assert_eq!(breakdown.factors.last().unwrap().after, breakdown.raw);
    }

    #[test]
    fn test_derive_utilization_half_capacity() {
        assert_eq!(derive_utilization(5000.0, 10000.0), Some(50.0));
    }

    #[test]
    fn test_derive_utilization_rounds_to_tenths() {
        assert_eq!(derive_utilization(1.0, 3.0), Some(33.3));
        assert_eq!(derive_utilization(2.0, 3.0), Some(66.7));
        // Tie at the tenths digit rounds away from zero
        assert_eq!(derive_utilization(1.0, 1600.0), Some(0.1));
        assert_eq!(derive_utilization(100.0, 1600.0), Some(6.3));
    }

    #[test]
    fn test_derive_utilization_zero_capacity_is_unset() {
        assert_eq!(derive_utilization(5000.0, 0.0), None);
        assert_eq!(derive_utilization(5000.0, -1.0), None);
    }

    #[test]
    fn test_refresh_utilization_overwrites_stale_value() {
        let mut record = required_only();
        record.monthly_output.set("5000");
        record.production_capacity.set("10000");
        record.capacity_utilization.set("99.9");
        refresh_utilization(&mut record);
        assert_eq!(record.capacity_utilization.as_str(), "50.0");
    }

    #[test]
    fn test_refresh_utilization_keeps_value_without_capacity() {
        let mut record = required_only();
        record.monthly_output.set("5000");
        record.production_capacity.set("0");
        record.capacity_utilization.set("77.0");
        refresh_utilization(&mut record);
        assert_eq!(record.capacity_utilization.as_str(), "77.0");
    }

    #[test]
    fn test_refresh_utilization_junk_output_counts_as_zero() {
        let mut record = required_only();
        record.monthly_output.set("abc");
        record.production_capacity.set("10000");
        refresh_utilization(&mut record);
        assert_eq!(record.capacity_utilization.as_str(), "0.0");
    }

    #[test]
    fn test_prediction_for_valid_record() {
        let mut record = required_only();
        record.production_efficiency.set("85");
        let result = compute_prediction(&record).unwrap();
        assert_eq!(result.score, 64); // 50 + (85-50)*0.4
        assert_eq!(result.band, Band::Good);
    }

    #[test]
    fn test_prediction_blocked_by_missing_required() {
        let mut record = required_only();
        record.company_name.clear();
        let errors = compute_prediction(&record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("company_name"));
    }
}
