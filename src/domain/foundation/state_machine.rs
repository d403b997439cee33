//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating state transitions
//! across entity lifecycle statuses.

/// Trait for status enums that represent state machines.
///
/// Implementors define the adjacency of legal transitions; the trait
/// derives membership checks and terminal-state detection from it.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ReleaseStatus {
///     fn valid_transitions(&self) -> &'static [Self] {
///         match self {
///             Created => &[InDevelopment],
///             InDevelopment => &[Created, OnDev],
///             // ... etc
///         }
///     }
/// }
///
/// assert!(ReleaseStatus::Created.can_transition_to(&ReleaseStatus::InDevelopment));
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// Returns all valid target states from the current state, in table order.
    ///
    /// The slice is static, so callers can never alter the table through it.
    fn valid_transitions(&self) -> &'static [Self];

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
