mod init;
mod schema;

pub use init::{run_init_wizard, write_metrics_file};
pub use schema::{
    FieldValue, MetricsRecord, COMPANY_SIZES, DEMAND_LEVELS, ECONOMIC_CONDITIONS, INDUSTRY_TYPES,
    MAINTENANCE_FREQS, SEASONALITY_LEVELS,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a metrics record from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed or contains unknown fields
pub fn load_metrics(path: &Path) -> Result<MetricsRecord> {
    if !path.exists() {
        anyhow::bail!(
            "Metrics file not found at {}. Run `mfg-score init` to create one.",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read metrics file at {}", path.display()))?;

    let record: MetricsRecord = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse metrics: invalid YAML in {}", path.display()))?;

    Ok(record)
}
