//! State machine trait for status enums.
//!
//! Transitions live in a static adjacency table per status, so adding a state
//! is a data change, not new branching logic.

/// Trait for status enums that represent state machines.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// The set of states reachable from this one.
    fn allowed_transitions(&self) -> &'static [Self];

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.allowed_transitions().contains(target)
    }

    /// A state with no outgoing transitions is terminal.
    fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}
