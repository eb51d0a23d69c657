pub mod csv;
pub mod json;
pub mod report;

pub use crate::error::ExportError;
pub use csv::{export_csv, write_csv};
pub use json::export_json;
pub use report::FootprintReport;
