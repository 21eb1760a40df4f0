//! Output rendering: standalone HTML reports.

pub mod html_report;

pub use html_report::{render, ReportMeta};
