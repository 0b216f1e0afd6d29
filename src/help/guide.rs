//! Static filling guidance, field by field. Shown in full by the `guide`
//! subcommand and per-field in the form's help overlay.

use owo_colors::OwoColorize;

use crate::tui::fields::FieldId;

pub struct FieldHelp {
    /// What the field means.
    pub what: &'static str,
    /// How to compute it, where a formula exists.
    pub how: Option<&'static str>,
    pub example: Option<&'static str>,
}

pub fn field_help(field: FieldId) -> FieldHelp {
    match field {
        FieldId::CompanyName => FieldHelp {
            what: "Full name of the manufacturing company.",
            how: None,
            example: Some("Acme Manufacturing Ltd"),
        },
        FieldId::IndustryType => FieldHelp {
            what: "The category that best matches the business.",
            how: None,
            example: Some("automotive covers cars, motorcycles and spare parts"),
        },
        FieldId::CompanySize => FieldHelp {
            what: "Classification by employee count.",
            how: Some("small < 50, medium 50-250, large > 250 employees"),
            example: None,
        },
        FieldId::OperatingYears => FieldHelp {
            what: "How long the company has been operating, in years.",
            how: None,
            example: Some("founded ten years ago -> 10"),
        },
        FieldId::MonthlyOutput => FieldHelp {
            what: "Units successfully produced in one month.",
            how: None,
            example: Some("shoe plant: 5000 pairs/month"),
        },
        FieldId::ProductionCapacity => FieldHelp {
            what: "Maximum monthly production when running at full operation.",
            how: Some("machine rate x operating hours x working days"),
            example: Some("100 units/h x 8 h x 25 days = 20000 units/month"),
        },
        FieldId::CapacityUtilization => FieldHelp {
            what: "Filled automatically from monthly output and capacity; 70-85% is generally healthy.",
            how: Some("(monthly output / production capacity) x 100%"),
            example: None,
        },
        FieldId::ProductionEfficiency => FieldHelp {
            what: "Effectiveness of the production process against the ideal standard.",
            how: Some("(standard time / actual time) x 100%"),
            example: Some("standard 60 min, actual 75 min = 80%"),
        },
        FieldId::DefectRate => FieldHelp {
            what: "Share of defective products in total production.",
            how: Some("(defective units / total production) x 100%"),
            example: Some("50 defects out of 10000 units = 0.5%"),
        },
        FieldId::ReworkRate => FieldHelp {
            what: "Share of products that needed rework to meet the standard.",
            how: None,
            example: Some("30 reworked out of 1000 products = 3%"),
        },
        FieldId::CustomerSatisfaction => FieldHelp {
            what: "Average customer satisfaction on a 0-10 scale.",
            how: None,
            example: Some("surveys, online reviews, direct feedback"),
        },
        FieldId::ReturnRate => FieldHelp {
            what: "Share of sold products returned by customers.",
            how: Some("(returned units / total sales) x 100%"),
            example: None,
        },
        FieldId::MonthlyRevenue => FieldHelp {
            what: "Gross revenue from product sales in one month.",
            how: None,
            example: Some("1000 units sold at 500 each = 500000"),
        },
        FieldId::ProductionCost => FieldHelp {
            what: "Total cost of producing goods: raw materials, direct labor, factory overhead.",
            how: None,
            example: None,
        },
        FieldId::ProfitMargin => FieldHelp {
            what: "Profit as a percentage of revenue.",
            how: Some("((revenue - total cost) / revenue) x 100%"),
            example: Some("revenue 500, cost 400 -> 20%"),
        },
        FieldId::OperationalCost => FieldHelp {
            what: "Day-to-day running costs: utilities, maintenance, administration, logistics.",
            how: None,
            example: None,
        },
        FieldId::EmployeeCount => FieldHelp {
            what: "Everyone involved in production: operators, supervisors, quality control, maintenance staff.",
            how: None,
            example: None,
        },
        FieldId::MachineHours => FieldHelp {
            what: "Average machine operating hours per day.",
            how: None,
            example: Some("single shift 8, double shift 16, continuous 24"),
        },
        FieldId::DowntimeHours => FieldHelp {
            what: "Total hours machines were not operating this month.",
            how: None,
            example: Some("maintenance 20 + breakdowns 15 + changeovers 10 = 45"),
        },
        FieldId::MaintenanceFreq => FieldHelp {
            what: "How often routine maintenance is performed.",
            how: None,
            example: Some("daily for critical machines, weekly for main lines"),
        },
        FieldId::MarketDemand => FieldHelp {
            what: "Current market demand for your products.",
            how: Some("very_high: orders exceed capacity; moderate: orders at 60-80% of capacity"),
            example: None,
        },
        FieldId::CompetitionLevel => FieldHelp {
            what: "How crowded the market is.",
            how: None,
            example: Some("very_high means more than 10 major competitors"),
        },
        FieldId::EconomicCondition => FieldHelp {
            what: "Macro-economic conditions affecting the business.",
            how: Some("boom: growth above 6%; recession: negative growth"),
            example: None,
        },
        FieldId::Seasonality => FieldHelp {
            what: "How strongly the seasons move sales of the product.",
            how: None,
            example: Some("high: clothing, toys; none: daily staples"),
        },
        FieldId::AdditionalNotes => FieldHelp {
            what: "Anything else that may affect performance. Not scored.",
            how: None,
            example: Some("ongoing strike, planned line expansion"),
        },
    }
}

const ACCURACY_TIPS: &[&str] = &[
    "Use actual data from your ERP system or official reports",
    "Average the last 3-6 months to smooth out fluctuations",
    "Keep units and time periods consistent across fields",
    "Verify figures with the department that owns them",
];

const BENCHMARKS: &[&str] = &[
    "Defect rate: < 1% very good, 1-3% good, > 5% needs work",
    "Customer satisfaction: > 8.0 excellent, 7.0-8.0 good",
    "Capacity utilization: 70-85% is a healthy range",
    "Manufacturing profit margins typically run 10-25%",
];

/// Full filling guide: every field grouped by form section, then tips.
pub fn format_guide(use_colors: bool) -> String {
    let mut out = String::new();
    let title = "Metrics Filling Guide";
    if use_colors {
        out.push_str(&format!("{}\n", title.bold()));
    } else {
        out.push_str(title);
        out.push('\n');
    }
    out.push_str("Four fields are required (*); everything else refines the picture.\n");

    let mut current_section = None;
    for field in FieldId::ALL {
        let section = field.section();
        if current_section != Some(section) {
            let header = format!("\n== {} ==", section.title());
            if use_colors {
                out.push_str(&format!("{}\n", header.cyan().bold()));
            } else {
                out.push_str(&header);
                out.push('\n');
            }
            current_section = Some(section);
        }

        let mark = if field.required() { " *" } else { "" };
        let label = format!("{}{}", field.label(), mark);
        if use_colors {
            out.push_str(&format!("{}\n", label.bold()));
        } else {
            out.push_str(&label);
            out.push('\n');
        }

        let help = field_help(field);
        out.push_str(&format!("  {}\n", help.what));
        if let Some(how) = help.how {
            if use_colors {
                out.push_str(&format!("  {}\n", how.yellow()));
            } else {
                out.push_str(&format!("  {}\n", how));
            }
        }
        if let Some(example) = help.example {
            out.push_str(&format!("  e.g. {}\n", example));
        }
    }

    for (header, items) in [("Data accuracy", ACCURACY_TIPS), ("Benchmarks", BENCHMARKS)] {
        let line = format!("\n== {} ==", header);
        if use_colors {
            out.push_str(&format!("{}\n", line.cyan().bold()));
        } else {
            out.push_str(&line);
            out.push('\n');
        }
        for item in items {
            out.push_str(&format!("  - {}\n", item));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_guidance() {
        for field in FieldId::ALL {
            let help = field_help(field);
            assert!(!help.what.is_empty(), "{} has no guidance", field.key());
        }
    }

    #[test]
    fn test_guide_covers_all_sections_and_required_fields() {
        let guide = format_guide(false);
        assert!(guide.contains("== Company Information =="));
        assert!(guide.contains("== External Factors =="));
        assert!(guide.contains("Company name *"));
        assert!(guide.contains("Production capacity *"));
        assert!(guide.contains("Benchmarks"));
    }

    #[test]
    fn test_derived_field_documents_formula() {
        let help = field_help(FieldId::CapacityUtilization);
        assert!(help.how.unwrap().contains("monthly output / production capacity"));
    }
}
