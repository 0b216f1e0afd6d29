//! Form field registry: every metric the form collects, with enough metadata
//! to render and edit it. Pure data - no terminal types in here.

use crate::input::{
    FieldValue, MetricsRecord, COMPANY_SIZES, DEMAND_LEVELS, ECONOMIC_CONDITIONS, INDUSTRY_TYPES,
    MAINTENANCE_FREQS, SEASONALITY_LEVELS,
};

/// What kind of editor a field needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Select(&'static [&'static str]),
    /// Auto-computed from monthly output and production capacity, but still
    /// manually editable until the next recompute.
    Derived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Company,
    Production,
    Quality,
    Financial,
    Operational,
    External,
    Notes,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Company => "Company Information",
            Section::Production => "Production Metrics",
            Section::Quality => "Quality Metrics",
            Section::Financial => "Financial Metrics",
            Section::Operational => "Operational Metrics",
            Section::External => "External Factors",
            Section::Notes => "Additional Notes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    CompanyName,
    IndustryType,
    CompanySize,
    OperatingYears,
    MonthlyOutput,
    ProductionCapacity,
    CapacityUtilization,
    ProductionEfficiency,
    DefectRate,
    ReworkRate,
    CustomerSatisfaction,
    ReturnRate,
    MonthlyRevenue,
    ProductionCost,
    ProfitMargin,
    OperationalCost,
    EmployeeCount,
    MachineHours,
    DowntimeHours,
    MaintenanceFreq,
    MarketDemand,
    CompetitionLevel,
    EconomicCondition,
    Seasonality,
    AdditionalNotes,
}

impl FieldId {
    /// Form order: grouped by section, sections in card order.
    pub const ALL: [FieldId; 25] = [
        FieldId::CompanyName,
        FieldId::IndustryType,
        FieldId::CompanySize,
        FieldId::OperatingYears,
        FieldId::MonthlyOutput,
        FieldId::ProductionCapacity,
        FieldId::CapacityUtilization,
        FieldId::ProductionEfficiency,
        FieldId::DefectRate,
        FieldId::ReworkRate,
        FieldId::CustomerSatisfaction,
        FieldId::ReturnRate,
        FieldId::MonthlyRevenue,
        FieldId::ProductionCost,
        FieldId::ProfitMargin,
        FieldId::OperationalCost,
        FieldId::EmployeeCount,
        FieldId::MachineHours,
        FieldId::DowntimeHours,
        FieldId::MaintenanceFreq,
        FieldId::MarketDemand,
        FieldId::CompetitionLevel,
        FieldId::EconomicCondition,
        FieldId::Seasonality,
        FieldId::AdditionalNotes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::CompanyName => "Company name",
            FieldId::IndustryType => "Industry type",
            FieldId::CompanySize => "Company size",
            FieldId::OperatingYears => "Operating years",
            FieldId::MonthlyOutput => "Monthly output",
            FieldId::ProductionCapacity => "Production capacity",
            FieldId::CapacityUtilization => "Capacity utilization",
            FieldId::ProductionEfficiency => "Production efficiency",
            FieldId::DefectRate => "Defect rate",
            FieldId::ReworkRate => "Rework rate",
            FieldId::CustomerSatisfaction => "Customer satisfaction",
            FieldId::ReturnRate => "Return rate",
            FieldId::MonthlyRevenue => "Monthly revenue",
            FieldId::ProductionCost => "Production cost",
            FieldId::ProfitMargin => "Profit margin",
            FieldId::OperationalCost => "Operational cost",
            FieldId::EmployeeCount => "Employee count",
            FieldId::MachineHours => "Machine hours",
            FieldId::DowntimeHours => "Downtime hours",
            FieldId::MaintenanceFreq => "Maintenance frequency",
            FieldId::MarketDemand => "Market demand",
            FieldId::CompetitionLevel => "Competition level",
            FieldId::EconomicCondition => "Economic condition",
            FieldId::Seasonality => "Seasonality",
            FieldId::AdditionalNotes => "Additional notes",
        }
    }

    /// The serde key, used in messages and the metrics file.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::CompanyName => "company_name",
            FieldId::IndustryType => "industry_type",
            FieldId::CompanySize => "company_size",
            FieldId::OperatingYears => "operating_years",
            FieldId::MonthlyOutput => "monthly_output",
            FieldId::ProductionCapacity => "production_capacity",
            FieldId::CapacityUtilization => "capacity_utilization",
            FieldId::ProductionEfficiency => "production_efficiency",
            FieldId::DefectRate => "defect_rate",
            FieldId::ReworkRate => "rework_rate",
            FieldId::CustomerSatisfaction => "customer_satisfaction",
            FieldId::ReturnRate => "return_rate",
            FieldId::MonthlyRevenue => "monthly_revenue",
            FieldId::ProductionCost => "production_cost",
            FieldId::ProfitMargin => "profit_margin",
            FieldId::OperationalCost => "operational_cost",
            FieldId::EmployeeCount => "employee_count",
            FieldId::MachineHours => "machine_hours",
            FieldId::DowntimeHours => "downtime_hours",
            FieldId::MaintenanceFreq => "maintenance_freq",
            FieldId::MarketDemand => "market_demand",
            FieldId::CompetitionLevel => "competition_level",
            FieldId::EconomicCondition => "economic_condition",
            FieldId::Seasonality => "seasonality",
            FieldId::AdditionalNotes => "additional_notes",
        }
    }

    pub fn section(self) -> Section {
        match self {
            FieldId::CompanyName
            | FieldId::IndustryType
            | FieldId::CompanySize
            | FieldId::OperatingYears => Section::Company,
            FieldId::MonthlyOutput
            | FieldId::ProductionCapacity
            | FieldId::CapacityUtilization
            | FieldId::ProductionEfficiency => Section::Production,
            FieldId::DefectRate
            | FieldId::ReworkRate
            | FieldId::CustomerSatisfaction
            | FieldId::ReturnRate => Section::Quality,
            FieldId::MonthlyRevenue
            | FieldId::ProductionCost
            | FieldId::ProfitMargin
            | FieldId::OperationalCost => Section::Financial,
            FieldId::EmployeeCount
            | FieldId::MachineHours
            | FieldId::DowntimeHours
            | FieldId::MaintenanceFreq => Section::Operational,
            FieldId::MarketDemand
            | FieldId::CompetitionLevel
            | FieldId::EconomicCondition
            | FieldId::Seasonality => Section::External,
            FieldId::AdditionalNotes => Section::Notes,
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            FieldId::MonthlyOutput => Some("units"),
            FieldId::ProductionCapacity => Some("units/month"),
            FieldId::CapacityUtilization
            | FieldId::ProductionEfficiency
            | FieldId::DefectRate
            | FieldId::ReworkRate
            | FieldId::ReturnRate
            | FieldId::ProfitMargin => Some("%"),
            FieldId::CustomerSatisfaction => Some("/10"),
            FieldId::OperatingYears => Some("years"),
            FieldId::MachineHours => Some("h/day"),
            FieldId::DowntimeHours => Some("h/month"),
            _ => None,
        }
    }

    pub fn required(self) -> bool {
        matches!(
            self,
            FieldId::CompanyName
                | FieldId::IndustryType
                | FieldId::MonthlyOutput
                | FieldId::ProductionCapacity
        )
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::CompanyName | FieldId::AdditionalNotes => FieldKind::Text,
            FieldId::IndustryType => FieldKind::Select(INDUSTRY_TYPES),
            FieldId::CompanySize => FieldKind::Select(COMPANY_SIZES),
            FieldId::MaintenanceFreq => FieldKind::Select(MAINTENANCE_FREQS),
            FieldId::MarketDemand | FieldId::CompetitionLevel => FieldKind::Select(DEMAND_LEVELS),
            FieldId::EconomicCondition => FieldKind::Select(ECONOMIC_CONDITIONS),
            FieldId::Seasonality => FieldKind::Select(SEASONALITY_LEVELS),
            FieldId::CapacityUtilization => FieldKind::Derived,
            _ => FieldKind::Number,
        }
    }

    pub fn get(self, record: &MetricsRecord) -> &FieldValue {
        match self {
            FieldId::CompanyName => &record.company_name,
            FieldId::IndustryType => &record.industry_type,
            FieldId::CompanySize => &record.company_size,
            FieldId::OperatingYears => &record.operating_years,
            FieldId::MonthlyOutput => &record.monthly_output,
            FieldId::ProductionCapacity => &record.production_capacity,
            FieldId::CapacityUtilization => &record.capacity_utilization,
            FieldId::ProductionEfficiency => &record.production_efficiency,
            FieldId::DefectRate => &record.defect_rate,
            FieldId::ReworkRate => &record.rework_rate,
            FieldId::CustomerSatisfaction => &record.customer_satisfaction,
            FieldId::ReturnRate => &record.return_rate,
            FieldId::MonthlyRevenue => &record.monthly_revenue,
            FieldId::ProductionCost => &record.production_cost,
            FieldId::ProfitMargin => &record.profit_margin,
            FieldId::OperationalCost => &record.operational_cost,
            FieldId::EmployeeCount => &record.employee_count,
            FieldId::MachineHours => &record.machine_hours,
            FieldId::DowntimeHours => &record.downtime_hours,
            FieldId::MaintenanceFreq => &record.maintenance_freq,
            FieldId::MarketDemand => &record.market_demand,
            FieldId::CompetitionLevel => &record.competition_level,
            FieldId::EconomicCondition => &record.economic_condition,
            FieldId::Seasonality => &record.seasonality,
            FieldId::AdditionalNotes => &record.additional_notes,
        }
    }

    pub fn set(self, record: &mut MetricsRecord, value: String) {
        let slot = match self {
            FieldId::CompanyName => &mut record.company_name,
            FieldId::IndustryType => &mut record.industry_type,
            FieldId::CompanySize => &mut record.company_size,
            FieldId::OperatingYears => &mut record.operating_years,
            FieldId::MonthlyOutput => &mut record.monthly_output,
            FieldId::ProductionCapacity => &mut record.production_capacity,
            FieldId::CapacityUtilization => &mut record.capacity_utilization,
            FieldId::ProductionEfficiency => &mut record.production_efficiency,
            FieldId::DefectRate => &mut record.defect_rate,
            FieldId::ReworkRate => &mut record.rework_rate,
            FieldId::CustomerSatisfaction => &mut record.customer_satisfaction,
            FieldId::ReturnRate => &mut record.return_rate,
            FieldId::MonthlyRevenue => &mut record.monthly_revenue,
            FieldId::ProductionCost => &mut record.production_cost,
            FieldId::ProfitMargin => &mut record.profit_margin,
            FieldId::OperationalCost => &mut record.operational_cost,
            FieldId::EmployeeCount => &mut record.employee_count,
            FieldId::MachineHours => &mut record.machine_hours,
            FieldId::DowntimeHours => &mut record.downtime_hours,
            FieldId::MaintenanceFreq => &mut record.maintenance_freq,
            FieldId::MarketDemand => &mut record.market_demand,
            FieldId::CompetitionLevel => &mut record.competition_level,
            FieldId::EconomicCondition => &mut record.economic_condition,
            FieldId::Seasonality => &mut record.seasonality,
            FieldId::AdditionalNotes => &mut record.additional_notes,
        };
        slot.set(value);
    }

    /// True for the two inputs that feed the utilization derivation.
    pub fn triggers_utilization(self) -> bool {
        matches!(self, FieldId::MonthlyOutput | FieldId::ProductionCapacity)
    }
}
