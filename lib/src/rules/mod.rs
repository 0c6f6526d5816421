//! Rule tables: neighborhood combinations and the transitions they trigger.
//!
//! A rule table is an ordered list of [`Transition`]s. Looking up a
//! [`Combination`] in it returns the state of the first transition that
//! matches.

pub mod elementary;

use crate::{error::Error, states::State};
use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
    slice,
};

/// An ordered neighborhood pattern.
///
/// For elementary rules, this is `(left, center, right)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Combination {
    states: Vec<State>,
}

impl Combination {
    /// Creates a combination from its member states.
    ///
    /// Returns [`Error::InvalidCombination`] if there are no states.
    pub fn new(states: Vec<State>) -> Result<Self, Error> {
        if states.is_empty() {
            return Err(Error::InvalidCombination);
        }
        Ok(Combination { states })
    }

    /// Number of states in the combination.
    pub fn arity(&self) -> usize {
        self.states.len()
    }

    /// The member states, in order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Iterates over the member states.
    pub fn iter(&self) -> slice::Iter<'_, State> {
        self.states.iter()
    }
}

impl Index<usize> for Combination {
    type Output = State;

    fn index(&self, index: usize) -> &State {
        &self.states[index]
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = &'a State;
    type IntoIter = slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for state in &self.states {
            write!(f, "{}", state.value())?;
        }
        Ok(())
    }
}

/// Maps a combination to the state a cell takes in the next generation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    combination: Combination,
    state: State,
}

impl Transition {
    /// A transition from `combination` to `state`.
    pub fn new(combination: Combination, state: State) -> Self {
        Transition { combination, state }
    }

    /// The combination this transition matches.
    pub fn combination(&self) -> &Combination {
        &self.combination
    }

    /// The resulting state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Whether this transition matches the given combination.
    ///
    /// Combinations are compared by the values of their states.
    pub fn matches(&self, combination: &Combination) -> bool {
        self.combination == *combination
    }
}

/// Checks that a rule table is non-empty and all its combinations have the
/// same arity. Returns that arity.
pub(crate) fn table_arity(rules: &[Transition]) -> Result<usize, Error> {
    let arity = rules
        .first()
        .map(|t| t.combination.arity())
        .ok_or(Error::InvalidTransition)?;
    if rules.iter().any(|t| t.combination.arity() != arity) {
        return Err(Error::InvalidTransition);
    }
    Ok(arity)
}
