//! Deterministic finite automaton driven by polynomial evaluation.
//!
//! Instead of a lookup table, the transition function is a bilinear
//! polynomial fitted through the automaton's (token, current-state,
//! next-state) table: the next state is the polynomial evaluated at
//! (token, current state).
//!
//! Accepting states are the observed next-states that never appear as a
//! current state in the transition table. A table-driven automaton freezes
//! once it reaches such a state (there is no outgoing row to follow), but a
//! polynomial is defined everywhere, so evaluating it from an accepting
//! state can transition back out. [`AcceptPolicy`] makes the choice
//! explicit: [`AcceptPolicy::Freeze`] reproduces the table semantics and is
//! the default; [`AcceptPolicy::Evaluate`] always applies the polynomial,
//! matching the raw evaluation behavior.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::gf::{Gf, GfElement, GfVector};
use crate::interp::BilinearPoly;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of an automaton's transition table, pre-parsed into integers.
///
/// Parsing tabular sources (CSV and friends) is the caller's concern; the
/// automaton consumes a slice of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransitionSample {
    /// The input token.
    pub token: u32,
    /// The state the automaton is in.
    pub current: u32,
    /// The state the automaton moves to.
    pub next: u32,
}

impl TransitionSample {
    /// Create a transition sample.
    #[must_use]
    pub fn new(token: u32, current: u32, next: u32) -> Self {
        Self {
            token,
            current,
            next,
        }
    }
}

impl From<(u32, u32, u32)> for TransitionSample {
    fn from((token, current, next): (u32, u32, u32)) -> Self {
        Self::new(token, current, next)
    }
}

/// How the automaton behaves once it reaches an accepting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AcceptPolicy {
    /// Transitions from an accepting state are no-ops, matching the
    /// semantics of a lookup-table automaton with no outgoing row.
    #[default]
    Freeze,
    /// Always evaluate the polynomial, even from an accepting state. The
    /// polynomial is defined at every (token, state) pair, so this can
    /// transition out of acceptance.
    Evaluate,
}

/// A state machine whose transition function is a fitted bilinear
/// polynomial.
///
/// The state starts at the field's zero element, moves by polynomial
/// evaluation, and returns to zero on [`PolyAutomaton::restart`].
///
/// # Example
///
/// ```
/// use polydfa::dfa::{PolyAutomaton, TransitionSample};
/// use polydfa::gf::Gf;
///
/// let gf4 = Gf::new(4).unwrap();
/// let table = [
///     TransitionSample::new(0, 0, 0),
///     TransitionSample::new(1, 0, 1),
///     TransitionSample::new(0, 1, 1),
///     TransitionSample::new(1, 1, 0),
/// ];
///
/// let mut dfa = PolyAutomaton::fit(&gf4, &table).unwrap();
/// dfa.transition(1).unwrap();
/// assert_eq!(dfa.current_state(), 1);
/// dfa.restart();
/// assert_eq!(dfa.current_state(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct PolyAutomaton {
    poly: BilinearPoly,
    accepting: BTreeSet<u32>,
    policy: AcceptPolicy,
    state: GfElement,
}

impl PolyAutomaton {
    /// Fit an automaton from its transition table with the default
    /// [`AcceptPolicy::Freeze`].
    ///
    /// # Errors
    ///
    /// Returns an error if any token or state value is not a field element,
    /// or if the (token, current) pairs do not form a complete rectangular
    /// grid (see [`BilinearPoly::fit`]).
    pub fn fit(field: &Gf, samples: &[TransitionSample]) -> Result<Self> {
        Self::with_policy(field, samples, AcceptPolicy::default())
    }

    /// Fit an automaton with an explicit accepting-state policy.
    ///
    /// # Errors
    ///
    /// Same as [`PolyAutomaton::fit`].
    pub fn with_policy(
        field: &Gf,
        samples: &[TransitionSample],
        policy: AcceptPolicy,
    ) -> Result<Self> {
        let tokens =
            GfVector::from_values(field, samples.iter().map(|s| s.token).collect())?;
        let currents =
            GfVector::from_values(field, samples.iter().map(|s| s.current).collect())?;
        let nexts =
            GfVector::from_values(field, samples.iter().map(|s| s.next).collect())?;

        let poly = BilinearPoly::fit(field, &tokens, &currents, &nexts)?;

        // Accepting states have no outgoing row in the table
        let current_states: BTreeSet<u32> = currents.values().iter().copied().collect();
        let accepting = nexts
            .values()
            .iter()
            .copied()
            .filter(|s| !current_states.contains(s))
            .collect();

        Ok(Self {
            poly,
            accepting,
            policy,
            state: field.zero(),
        })
    }

    /// Consume one input token, moving to the polynomial's value at
    /// (token, current state).
    ///
    /// Under [`AcceptPolicy::Freeze`], this is a no-op while the automaton
    /// is in an accepting state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::ElementOutOfRange`] if the token is
    /// not a field element.
    pub fn transition(&mut self, token: u32) -> Result<()> {
        if self.policy == AcceptPolicy::Freeze && self.is_accepting() {
            return Ok(());
        }

        let token = self.poly.field().try_element(token)?;
        self.state = self.poly.evaluate(&token, &self.state);
        Ok(())
    }

    /// Get the current state's integer value.
    #[must_use]
    pub fn current_state(&self) -> u32 {
        self.state.value()
    }

    /// Check whether the automaton is in an accepting state.
    #[must_use]
    pub fn is_accepting(&self) -> bool {
        self.accepting.contains(&self.state.value())
    }

    /// Get the accepting states.
    #[must_use]
    pub fn accepting_states(&self) -> &BTreeSet<u32> {
        &self.accepting
    }

    /// Get the accepting-state policy.
    #[must_use]
    pub fn policy(&self) -> AcceptPolicy {
        self.policy
    }

    /// Get the fitted transition polynomial.
    #[must_use]
    pub fn polynomial(&self) -> &BilinearPoly {
        &self.poly
    }

    /// Reset the automaton to the field's zero state.
    pub fn restart(&mut self) {
        self.state = self.poly.field().zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two tokens, two interior states, one accepting state 2.
    fn accepting_table() -> Vec<TransitionSample> {
        vec![
            TransitionSample::new(0, 0, 0),
            TransitionSample::new(1, 0, 1),
            TransitionSample::new(0, 1, 1),
            TransitionSample::new(1, 1, 2),
        ]
    }

    #[test]
    fn test_parity_automaton() {
        let gf4 = Gf::new(4).unwrap();
        // XOR parity of the consumed tokens
        let table = [
            TransitionSample::new(0, 0, 0),
            TransitionSample::new(1, 0, 1),
            TransitionSample::new(0, 1, 1),
            TransitionSample::new(1, 1, 0),
        ];
        let mut dfa = PolyAutomaton::fit(&gf4, &table).unwrap();

        assert_eq!(dfa.current_state(), 0);
        for (token, expected) in [(1, 1), (0, 1), (1, 0), (1, 1)] {
            dfa.transition(token).unwrap();
            assert_eq!(dfa.current_state(), expected);
        }
    }

    #[test]
    fn test_accepting_states_inferred_from_table() {
        let gf4 = Gf::new(4).unwrap();
        let dfa = PolyAutomaton::fit(&gf4, &accepting_table()).unwrap();

        // 2 is reached but never left from; 0 and 1 have outgoing rows
        assert_eq!(
            dfa.accepting_states().iter().copied().collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn test_freeze_policy_stops_at_accepting_state() {
        let gf4 = Gf::new(4).unwrap();
        let mut dfa = PolyAutomaton::fit(&gf4, &accepting_table()).unwrap();

        dfa.transition(1).unwrap(); // 0 -> 1
        dfa.transition(1).unwrap(); // 1 -> 2, accepting
        assert_eq!(dfa.current_state(), 2);
        assert!(dfa.is_accepting());

        // Frozen: further input leaves the state alone
        dfa.transition(1).unwrap();
        dfa.transition(0).unwrap();
        assert_eq!(dfa.current_state(), 2);
    }

    #[test]
    fn test_evaluate_policy_can_leave_accepting_state() {
        let gf4 = Gf::new(4).unwrap();
        let mut dfa =
            PolyAutomaton::with_policy(&gf4, &accepting_table(), AcceptPolicy::Evaluate)
                .unwrap();

        dfa.transition(1).unwrap(); // 0 -> 1
        dfa.transition(1).unwrap(); // 1 -> 2, accepting
        assert!(dfa.is_accepting());

        // The fitted polynomial is y + x + 2xy; at (1, 2) it evaluates to
        // 2 + 1 + 2*2 = 0 in GF(4), transitioning out of acceptance
        dfa.transition(1).unwrap();
        assert_eq!(dfa.current_state(), 0);
        assert!(!dfa.is_accepting());
    }

    #[test]
    fn test_restart_idempotence() {
        let gf4 = Gf::new(4).unwrap();
        let mut dfa = PolyAutomaton::fit(&gf4, &accepting_table()).unwrap();

        for history in [vec![], vec![1], vec![1, 1, 0, 1], vec![0, 0, 0]] {
            for token in history {
                dfa.transition(token).unwrap();
            }
            dfa.restart();
            assert_eq!(dfa.current_state(), 0);
        }
    }

    #[test]
    fn test_transition_matches_table_everywhere() {
        let gf4 = Gf::new(4).unwrap();
        let table = accepting_table();
        let mut dfa = PolyAutomaton::fit(&gf4, &table).unwrap();

        // Walking any row from its current state lands on its next state
        for sample in &table {
            dfa.restart();
            // Drive the automaton into the row's current state first
            if sample.current == 1 {
                dfa.transition(1).unwrap();
            }
            assert_eq!(dfa.current_state(), sample.current);

            dfa.transition(sample.token).unwrap();
            assert_eq!(dfa.current_state(), sample.next);
        }
    }

    #[test]
    fn test_token_out_of_range() {
        let gf4 = Gf::new(4).unwrap();
        let mut dfa = PolyAutomaton::fit(&gf4, &accepting_table()).unwrap();

        assert!(dfa.transition(4).is_err());
        // State untouched by the failed transition
        assert_eq!(dfa.current_state(), 0);
    }

    #[test]
    fn test_incomplete_table_rejected() {
        let gf4 = Gf::new(4).unwrap();
        let table = [
            TransitionSample::new(0, 0, 0),
            TransitionSample::new(1, 0, 1),
            TransitionSample::new(0, 1, 1),
            // (1, 1) row missing
        ];
        assert!(PolyAutomaton::fit(&gf4, &table).is_err());
    }
}
