pub mod guide;

pub use guide::{field_help, format_guide, FieldHelp};
