//! ListStatusesHandler - Query handler for the release status catalogue.

use crate::domain::foundation::StateMachine;
use crate::domain::release::ReleaseStatus;

/// A status and the statuses it may move to next, as display labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub status: ReleaseStatus,
    pub label: &'static str,
    pub allowed_transitions: Vec<&'static str>,
    pub is_terminal: bool,
}

impl StatusDescriptor {
    pub fn describe(status: ReleaseStatus) -> Self {
        Self {
            status,
            label: status.display_label(),
            allowed_transitions: status
                .allowed_next()
                .iter()
                .map(ReleaseStatus::display_label)
                .collect(),
            is_terminal: status.is_terminal(),
        }
    }
}

/// Handler for listing statuses in workflow order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListStatusesHandler;

impl ListStatusesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> Vec<StatusDescriptor> {
        ReleaseStatus::ALL
            .into_iter()
            .map(StatusDescriptor::describe)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_statuses_in_workflow_order() {
        let labels: Vec<_> = ListStatusesHandler::new()
            .handle()
            .iter()
            .map(|d| d.label)
            .collect();

        assert_eq!(
            labels,
            vec![
                "Created",
                "In Development",
                "On DEV",
                "QA Done on DEV",
                "On Staging",
                "QA Done on STAGING",
                "On PROD",
                "Done",
            ]
        );
    }

    #[test]
    fn catalogue_has_fourteen_edges() {
        let edges: usize = ListStatusesHandler::new()
            .handle()
            .iter()
            .map(|d| d.allowed_transitions.len())
            .sum();

        assert_eq!(edges, 14);
    }

    #[test]
    fn describes_allowed_transitions_by_label() {
        let descriptor = StatusDescriptor::describe(ReleaseStatus::OnStaging);

        assert_eq!(
            descriptor.allowed_transitions,
            vec!["QA Done on DEV", "QA Done on STAGING"]
        );
        assert!(!descriptor.is_terminal);
    }
}
