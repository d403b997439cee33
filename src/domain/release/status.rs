//! ReleaseStatus enum and the release workflow transition table.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::errors::ReleaseError;
use crate::domain::foundation::StateMachine;

/// Lifecycle stage of a release.
///
/// Externally a status is always represented by its display label
/// ("On DEV", "QA Done on STAGING", ...). The machine tag returned by
/// [`ReleaseStatus::as_machine_str`] is reserved for storage columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ReleaseStatus {
    #[default]
    Created,
    InDevelopment,
    OnDev,
    QaDoneOnDev,
    OnStaging,
    QaDoneOnStaging,
    OnProd,
    Done,
}

impl ReleaseStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [ReleaseStatus; 8] = [
        ReleaseStatus::Created,
        ReleaseStatus::InDevelopment,
        ReleaseStatus::OnDev,
        ReleaseStatus::QaDoneOnDev,
        ReleaseStatus::OnStaging,
        ReleaseStatus::QaDoneOnStaging,
        ReleaseStatus::OnProd,
        ReleaseStatus::Done,
    ];

    /// Human-readable label used on the API boundary.
    pub fn display_label(&self) -> &'static str {
        match self {
            ReleaseStatus::Created => "Created",
            ReleaseStatus::InDevelopment => "In Development",
            ReleaseStatus::OnDev => "On DEV",
            ReleaseStatus::QaDoneOnDev => "QA Done on DEV",
            ReleaseStatus::OnStaging => "On Staging",
            ReleaseStatus::QaDoneOnStaging => "QA Done on STAGING",
            ReleaseStatus::OnProd => "On PROD",
            ReleaseStatus::Done => "Done",
        }
    }

    /// All display labels, in lifecycle order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(ReleaseStatus::display_label).collect()
    }

    /// Parses a display label, ignoring ASCII case.
    ///
    /// This is the only text-to-status conversion for inbound data; machine
    /// tags are not accepted here.
    ///
    /// # Errors
    ///
    /// - `InvalidStatus` carrying the input and every valid label
    pub fn parse(label: &str) -> Result<Self, ReleaseError> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.display_label().eq_ignore_ascii_case(label))
            .ok_or_else(|| ReleaseError::invalid_status(label))
    }

    /// Allowed targets from this status, in table order.
    ///
    /// Forward progression and a one-step rollback are legal; skipping
    /// stages never is.
    pub fn allowed_next(&self) -> &'static [ReleaseStatus] {
        use ReleaseStatus::*;
        match self {
            Created => &[InDevelopment],
            InDevelopment => &[Created, OnDev],
            OnDev => &[InDevelopment, QaDoneOnDev],
            QaDoneOnDev => &[OnDev, OnStaging],
            OnStaging => &[QaDoneOnDev, QaDoneOnStaging],
            QaDoneOnStaging => &[OnStaging, OnProd],
            OnProd => &[QaDoneOnStaging, Done],
            Done => &[OnProd],
        }
    }

    /// Storage tag for this status.
    pub fn as_machine_str(&self) -> &'static str {
        match self {
            ReleaseStatus::Created => "CREATED",
            ReleaseStatus::InDevelopment => "IN_DEVELOPMENT",
            ReleaseStatus::OnDev => "ON_DEV",
            ReleaseStatus::QaDoneOnDev => "QA_DONE_ON_DEV",
            ReleaseStatus::OnStaging => "ON_STAGING",
            ReleaseStatus::QaDoneOnStaging => "QA_DONE_ON_STAGING",
            ReleaseStatus::OnProd => "ON_PROD",
            ReleaseStatus::Done => "DONE",
        }
    }

    /// Decodes a storage tag. Returns `None` for unknown tags.
    pub fn from_machine_str(tag: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_machine_str() == tag)
    }
}

impl StateMachine for ReleaseStatus {
    fn valid_transitions(&self) -> &'static [Self] {
        self.allowed_next()
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

impl FromStr for ReleaseStatus {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ReleaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_label())
    }
}

impl<'de> Deserialize<'de> for ReleaseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::parse(&label).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReleaseStatus::*;

    const EDGES: [(ReleaseStatus, ReleaseStatus); 14] = [
        (Created, InDevelopment),
        (InDevelopment, Created),
        (InDevelopment, OnDev),
        (OnDev, InDevelopment),
        (OnDev, QaDoneOnDev),
        (QaDoneOnDev, OnDev),
        (QaDoneOnDev, OnStaging),
        (OnStaging, QaDoneOnDev),
        (OnStaging, QaDoneOnStaging),
        (QaDoneOnStaging, OnStaging),
        (QaDoneOnStaging, OnProd),
        (OnProd, QaDoneOnStaging),
        (OnProd, Done),
        (Done, OnProd),
    ];

    #[test]
    fn default_is_created() {
        assert_eq!(ReleaseStatus::default(), Created);
    }

    #[test]
    fn transition_table_matches_edge_list_exactly() {
        let mut allowed = 0;
        for current in ReleaseStatus::ALL {
            for target in ReleaseStatus::ALL {
                let expected = EDGES.contains(&(current, target));
                assert_eq!(
                    current.can_transition_to(&target),
                    expected,
                    "{:?} -> {:?}",
                    current,
                    target
                );
                if expected {
                    allowed += 1;
                }
            }
        }
        assert_eq!(allowed, 14);
    }

    #[test]
    fn self_transitions_are_rejected() {
        for status in ReleaseStatus::ALL {
            assert!(!status.can_transition_to(&status));
        }
    }

    #[test]
    fn skipping_stages_is_rejected() {
        assert!(!Created.can_transition_to(&OnProd));
        assert!(!Created.can_transition_to(&Done));
        assert!(!OnDev.can_transition_to(&OnStaging));
    }

    #[test]
    fn allowed_next_keeps_table_order() {
        assert_eq!(Created.allowed_next(), &[InDevelopment]);
        assert_eq!(InDevelopment.allowed_next(), &[Created, OnDev]);
        assert_eq!(OnProd.allowed_next(), &[QaDoneOnStaging, Done]);
        assert_eq!(Done.allowed_next(), &[OnProd]);
    }

    #[test]
    fn no_status_is_terminal() {
        for status in ReleaseStatus::ALL {
            assert!(!status.is_terminal(), "{:?} should not be terminal", status);
        }
    }

    #[test]
    fn parse_round_trips_every_label() {
        for status in ReleaseStatus::ALL {
            assert_eq!(ReleaseStatus::parse(status.display_label()).unwrap(), status);
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(ReleaseStatus::parse("created").unwrap(), Created);
        assert_eq!(ReleaseStatus::parse("CREATED").unwrap(), Created);
        assert_eq!(ReleaseStatus::parse("qa done on staging").unwrap(), QaDoneOnStaging);
    }

    #[test]
    fn parse_rejects_machine_tags() {
        assert!(ReleaseStatus::parse("IN_DEVELOPMENT").is_err());
        assert!(ReleaseStatus::parse("ON_PROD").is_err());
    }

    #[test]
    fn parse_does_not_trim() {
        assert!(ReleaseStatus::parse(" Done ").is_err());
    }

    #[test]
    fn parse_bogus_lists_all_labels() {
        match ReleaseStatus::parse("bogus") {
            Err(ReleaseError::InvalidStatus { input, valid }) => {
                assert_eq!(input, "bogus");
                assert_eq!(valid.len(), 8);
                assert_eq!(valid, ReleaseStatus::labels());
            }
            other => panic!("expected InvalidStatus, got {:?}", other),
        }
    }

    #[test]
    fn from_str_uses_display_labels() {
        let status: ReleaseStatus = "On Staging".parse().unwrap();
        assert_eq!(status, OnStaging);
    }

    #[test]
    fn display_renders_label() {
        assert_eq!(QaDoneOnDev.to_string(), "QA Done on DEV");
        assert_eq!(OnProd.to_string(), "On PROD");
    }

    #[test]
    fn machine_tags_round_trip() {
        for status in ReleaseStatus::ALL {
            assert_eq!(
                ReleaseStatus::from_machine_str(status.as_machine_str()),
                Some(status)
            );
        }
        assert_eq!(ReleaseStatus::from_machine_str("Created"), None);
    }

    #[test]
    fn serializes_as_display_label() {
        assert_eq!(serde_json::to_string(&OnDev).unwrap(), "\"On DEV\"");
    }

    #[test]
    fn deserializes_from_any_case_label() {
        let status: ReleaseStatus = serde_json::from_str("\"in development\"").unwrap();
        assert_eq!(status, InDevelopment);
    }

    #[test]
    fn deserialize_rejects_unknown_label() {
        let result: Result<ReleaseStatus, _> = serde_json::from_str("\"Shipped\"");
        assert!(result.is_err());
    }
}
