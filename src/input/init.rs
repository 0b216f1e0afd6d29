use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::Path;

use super::schema::{
    MetricsRecord, COMPANY_SIZES, DEMAND_LEVELS, ECONOMIC_CONDITIONS, INDUSTRY_TYPES,
    MAINTENANCE_FREQS, SEASONALITY_LEVELS,
};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Prompt for a required field: loops until the input is non-empty.
fn prompt_required(label: &str, unit: Option<&str>) -> Result<String> {
    loop {
        let suffix = unit.map(|u| format!(" ({})", u)).unwrap_or_default();
        let value = prompt(&format!("{}{}: ", label, suffix))?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("  Required - please enter a value.");
    }
}

/// Prompt for an optional field: empty input skips it.
fn prompt_optional(label: &str, unit: Option<&str>) -> Result<String> {
    let suffix = unit.map(|u| format!(" ({})", u)).unwrap_or_default();
    prompt(&format!("{}{} [skip]: ", label, suffix))
}

/// Prompt for a choice from a fixed option list. Accepts the option text or
/// its 1-based number; empty input skips (or repeats, when required).
fn prompt_select(label: &str, options: &[&str], required: bool) -> Result<String> {
    println!("{}:", label);
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    loop {
        let hint = if required { "" } else { " [skip]" };
        let input = prompt(&format!("Choice{}: ", hint))?;
        if input.is_empty() {
            if !required {
                return Ok(String::new());
            }
            println!("  Required - pick one of the options.");
            continue;
        }
        if let Ok(n) = input.parse::<usize>() {
            if n >= 1 && n <= options.len() {
                return Ok(options[n - 1].to_string());
            }
        }
        if let Some(found) = options.iter().find(|o| o.eq_ignore_ascii_case(&input)) {
            return Ok(found.to_string());
        }
        println!("  Not an option. Enter a number or one of the values shown.");
    }
}

/// Serialize the record and write it atomically, so an interrupted write
/// never leaves a truncated metrics file behind.
pub fn write_metrics_file(path: &Path, record: &MetricsRecord) -> Result<()> {
    let yaml = serde_saphyr::to_string(record)
        .map_err(|e| anyhow::anyhow!("Failed to serialize metrics: {}", e))?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write metrics to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save metrics file at {}", path.display()))?;

    Ok(())
}

/// Run the interactive wizard to create a metrics file, or write a blank
/// template when `blank` is set.
///
/// Walks the four required fields first, then offers the optional sections.
/// Capacity utilization is not asked for - it is derived at scoring time.
pub fn run_init_wizard(path: &Path, blank: bool) -> Result<()> {
    if path.exists() {
        let overwrite = prompt_yes_no(
            &format!("A metrics file already exists at {}. Overwrite?", path.display()),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let mut record = MetricsRecord::default();

    if !blank {
        println!();
        println!("Manufacturing Metrics Setup");
        println!("===========================");
        println!();
        println!("Four fields are required; everything else can be skipped and");
        println!("filled in later by editing the file or using the form.");
        println!();

        record.company_name.set(prompt_required("Company name", None)?);
        record
            .industry_type
            .set(prompt_select("Industry type", INDUSTRY_TYPES, true)?);
        record
            .monthly_output
            .set(prompt_required("Monthly output", Some("units"))?);
        record
            .production_capacity
            .set(prompt_required("Production capacity", Some("units/month"))?);

        println!();
        if prompt_yes_no("Add optional metrics now?", false)? {
            println!();
            println!("-- Company --");
            record
                .company_size
                .set(prompt_select("Company size", COMPANY_SIZES, false)?);
            record
                .operating_years
                .set(prompt_optional("Operating years", Some("years"))?);

            println!();
            println!("-- Production --");
            record
                .production_efficiency
                .set(prompt_optional("Production efficiency", Some("%"))?);

            println!();
            println!("-- Quality --");
            record.defect_rate.set(prompt_optional("Defect rate", Some("%"))?);
            record.rework_rate.set(prompt_optional("Rework rate", Some("%"))?);
            record
                .customer_satisfaction
                .set(prompt_optional("Customer satisfaction", Some("0-10"))?);
            record.return_rate.set(prompt_optional("Return rate", Some("%"))?);

            println!();
            println!("-- Financial --");
            record
                .monthly_revenue
                .set(prompt_optional("Monthly revenue", None)?);
            record
                .production_cost
                .set(prompt_optional("Production cost", None)?);
            record
                .profit_margin
                .set(prompt_optional("Profit margin", Some("%"))?);
            record
                .operational_cost
                .set(prompt_optional("Operational cost", None)?);

            println!();
            println!("-- Operational --");
            record
                .employee_count
                .set(prompt_optional("Employee count", None)?);
            record
                .machine_hours
                .set(prompt_optional("Machine hours", Some("h/day"))?);
            record
                .downtime_hours
                .set(prompt_optional("Downtime hours", Some("h/month"))?);
            record
                .maintenance_freq
                .set(prompt_select("Maintenance frequency", MAINTENANCE_FREQS, false)?);

            println!();
            println!("-- External factors --");
            record
                .market_demand
                .set(prompt_select("Market demand", DEMAND_LEVELS, false)?);
            record
                .competition_level
                .set(prompt_select("Competition level", DEMAND_LEVELS, false)?);
            record
                .economic_condition
                .set(prompt_select("Economic condition", ECONOMIC_CONDITIONS, false)?);
            record
                .seasonality
                .set(prompt_select("Seasonality", SEASONALITY_LEVELS, false)?);

            println!();
            record
                .additional_notes
                .set(prompt_optional("Additional notes", None)?);
        }
    }

    write_metrics_file(path, &record)?;

    println!();
    println!("Metrics written to {}", path.display());
    println!("Run `mfg-score predict --input {}` to score them,", path.display());
    println!("or `mfg-score form --input {}` to keep editing.", path.display());

    Ok(())
}
