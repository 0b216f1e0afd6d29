use crate::input::MetricsRecord;

/// Check the required fields before scoring.
/// Returns all missing fields at once (not just the first).
///
/// Only presence is checked: a non-empty but unparseable monthly output
/// passes validation and simply contributes nothing downstream.
pub fn validate_metrics(metrics: &MetricsRecord) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if metrics.company_name.is_empty() {
        errors.push("company_name: required field is empty".to_string());
    }
    if metrics.industry_type.is_empty() {
        errors.push("industry_type: required field is empty".to_string());
    }
    if metrics.monthly_output.is_empty() {
        errors.push("monthly_output: required field is empty".to_string());
    }
    if metrics.production_capacity.is_empty() {
        errors.push("production_capacity: required field is empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> MetricsRecord {
        let mut record = MetricsRecord::default();
        record.company_name.set("Acme");
        record.industry_type.set("automotive");
        record.monthly_output.set("1000");
        record.production_capacity.set("2000");
        record
    }

    #[test]
    fn test_complete_record_passes() {
        assert!(validate_metrics(&complete()).is_ok());
    }

    #[test]
    fn test_missing_company_name() {
        let mut record = complete();
        record.company_name.clear();
        let errors = validate_metrics(&record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("company_name"));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut record = complete();
        record.industry_type.set("   ");
        let errors = validate_metrics(&record).unwrap_err();
        assert!(errors[0].contains("industry_type"));
    }

    #[test]
    fn test_collects_all_missing_fields() {
        let record = MetricsRecord::default();
        let errors = validate_metrics(&record).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("company_name")));
        assert!(errors.iter().any(|e| e.contains("industry_type")));
        assert!(errors.iter().any(|e| e.contains("monthly_output")));
        assert!(errors.iter().any(|e| e.contains("production_capacity")));
    }

    #[test]
    fn test_unparseable_required_number_still_passes() {
        let mut record = complete();
        record.monthly_output.set("a lot");
        assert!(validate_metrics(&record).is_ok());
    }

    #[test]
    fn test_optional_fields_never_block() {
        let mut record = complete();
        record.defect_rate.set("not a number");
        record.market_demand.set("unknown_level");
        assert!(validate_metrics(&record).is_ok());
    }
}
