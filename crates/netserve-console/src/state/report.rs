//! BI report generation state

/// State of the analytics report generator
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    /// A report request is in flight
    pub generating: bool,
    /// File name of the most recent report
    pub last_report: Option<String>,
}
