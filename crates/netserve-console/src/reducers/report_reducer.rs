//! Report generation reducer

use crate::actions::ReportAction;
use crate::state::ReportState;

pub fn reduce_report(mut state: ReportState, action: &ReportAction) -> ReportState {
    match action {
        ReportAction::Generate => {
            state.generating = true;
        }
        ReportAction::Ready(name) => {
            state.generating = false;
            state.last_report = Some(name.clone());
        }
        ReportAction::Failed(_) => {
            state.generating = false;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_stores_name_and_clears_flag() {
        let state = reduce_report(ReportState::default(), &ReportAction::Generate);
        assert!(state.generating);

        let state = reduce_report(state, &ReportAction::Ready("r.pdf".to_string()));
        assert!(!state.generating);
        assert_eq!(state.last_report.as_deref(), Some("r.pdf"));
    }

    #[test]
    fn test_failure_keeps_previous_report() {
        let state = ReportState {
            generating: true,
            last_report: Some("old.pdf".to_string()),
        };
        let state = reduce_report(state, &ReportAction::Failed("boom".to_string()));
        assert!(!state.generating);
        assert_eq!(state.last_report.as_deref(), Some("old.pdf"));
    }
}
