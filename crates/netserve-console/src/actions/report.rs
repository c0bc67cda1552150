//! Analytics report actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportAction {
    /// Request a new BI report
    Generate,
    /// Report finished; carries the generated file name
    Ready(String),
    /// Report generation died
    Failed(String),
}
