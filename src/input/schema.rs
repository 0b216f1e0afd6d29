use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single form field exactly as entered: free text, empty when unset.
///
/// Metrics files may carry numbers or strings interchangeably, so any YAML
/// scalar deserializes into the text it was written as. Numeric
/// interpretation happens later via [`FieldValue::number`] and is deliberately
/// lenient: whatever does not parse counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue(String);

impl FieldValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the field holds nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Lenient numeric parse: empty or malformed text yields None, never an
    /// error. This is how optional metrics degrade to "no adjustment".
    pub fn number(&self) -> Option<f64> {
        let text = self.0.trim();
        if text.is_empty() {
            None
        } else {
            text.parse::<f64>().ok()
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a scalar value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FieldValue(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FieldValue(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FieldValue(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FieldValue(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(FieldValue(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(FieldValue(v.to_string()))
    }

    // YAML null (an omitted value after the colon) means "left blank"
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::default())
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// One form session's worth of metrics, exactly as entered.
///
/// Every field is text-typed; empty means the field was left blank. Only the
/// four fields marked `required` block scoring when missing - see
/// `scoring::validate_metrics`. Everything else degrades gracefully.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsRecord {
    // Company information
    pub company_name: FieldValue, // required
    pub industry_type: FieldValue, // required
    pub company_size: FieldValue,
    pub operating_years: FieldValue,

    // Production metrics
    pub monthly_output: FieldValue, // required
    pub production_capacity: FieldValue, // required
    pub capacity_utilization: FieldValue, // derived from the two above
    pub production_efficiency: FieldValue,

    // Quality metrics
    pub defect_rate: FieldValue,
    pub rework_rate: FieldValue,
    pub customer_satisfaction: FieldValue,
    pub return_rate: FieldValue,

    // Financial metrics
    pub monthly_revenue: FieldValue,
    pub production_cost: FieldValue,
    pub profit_margin: FieldValue,
    pub operational_cost: FieldValue,

    // Operational metrics
    pub employee_count: FieldValue,
    pub machine_hours: FieldValue,
    pub downtime_hours: FieldValue,
    pub maintenance_freq: FieldValue,

    // External factors
    pub market_demand: FieldValue,
    pub competition_level: FieldValue,
    pub economic_condition: FieldValue,
    pub seasonality: FieldValue,

    pub additional_notes: FieldValue,
}

/// Options offered by the industry select. Validation only requires the field
/// to be non-empty; the list drives the form, `init` prompts, and the guide.
pub const INDUSTRY_TYPES: &[&str] = &[
    "automotive",
    "electronics",
    "textile",
    "food",
    "chemical",
    "machinery",
    "pharmaceutical",
    "other",
];

pub const COMPANY_SIZES: &[&str] = &["small", "medium", "large"];

pub const MAINTENANCE_FREQS: &[&str] = &["daily", "weekly", "monthly", "quarterly", "annually"];

/// Shared by market demand and competition level.
pub const DEMAND_LEVELS: &[&str] = &["very_low", "low", "moderate", "high", "very_high"];

pub const ECONOMIC_CONDITIONS: &[&str] = &["recession", "slow_growth", "stable", "growth", "boom"];

pub const SEASONALITY_LEVELS: &[&str] = &["none", "low", "moderate", "high", "very_high"];
