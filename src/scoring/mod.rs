pub mod engine;
pub mod types;
pub mod validation;

pub use engine::{
    compute_prediction, compute_score, derive_utilization, refresh_utilization,
    FactorContribution, PredictionResult, ScoreBreakdown,
};
pub use types::{Band, MarketDemand};
pub use validation::validate_metrics;
