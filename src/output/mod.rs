pub mod formatter;

pub use formatter::{format_breakdown, format_result, result_json, should_use_colors};
