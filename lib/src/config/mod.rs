//! Universe configuration.

mod initial;

pub use initial::InitialCondition;

use crate::{
    cells::{Cell, Dimension},
    error::Error,
    rules::elementary,
    space::Neighborhood,
    states::State,
    time::Time,
    universe::Universe,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of a one-dimensional elementary universe.
///
/// The universe will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The Wolfram code of the rule, from `0` to `255`.
    #[educe(Default = 30)]
    pub rule_number: u16,

    /// Number of cells in a generation.
    #[educe(Default = 100)]
    pub cells: i64,

    /// Number of generations to simulate.
    ///
    /// `None` means that the time is unlimited.
    #[educe(Default(expression = "Some(100)"))]
    pub iterations: Option<i64>,

    /// The first generation, from which all the others are derived.
    pub initial: InitialCondition,

    /// Whether to keep every generation, or only the last one.
    #[educe(Default = true)]
    pub keep_history: bool,
}

impl Config {
    /// Sets up a new configuration with given rule, width and number of
    /// generations.
    pub fn new(rule_number: u16, cells: i64, iterations: i64) -> Self {
        Config {
            rule_number,
            cells,
            iterations: Some(iterations),
            ..Config::default()
        }
    }

    /// Sets the rule number.
    pub fn set_rule_number(mut self, rule_number: u16) -> Self {
        self.rule_number = rule_number;
        self
    }

    /// Sets the number of cells in a generation.
    pub fn set_cells(mut self, cells: i64) -> Self {
        self.cells = cells;
        self
    }

    /// Sets the number of generations.
    pub fn set_iterations<T: Into<Option<i64>>>(mut self, iterations: T) -> Self {
        self.iterations = iterations.into();
        self
    }

    /// Sets the initial condition.
    pub fn set_initial(mut self, initial: InitialCondition) -> Self {
        self.initial = initial;
        self
    }

    /// Sets whether to keep every generation.
    pub fn set_keep_history(mut self, keep_history: bool) -> Self {
        self.keep_history = keep_history;
        self
    }

    /// Creates a new universe from the configuration.
    ///
    /// Fails with
    /// * [`Error::InvalidRuleNumber`] if the rule number is larger than `255`;
    /// * [`Error::InvalidInitialCondition`] if `cells` is not positive, or
    ///   the initial condition does not fit it;
    /// * [`Error::InvalidAbsoluteTimeLimit`] if `iterations` is not positive.
    pub fn universe(&self) -> Result<Universe, Error> {
        let rules = elementary::rule_table(self.rule_number)?;
        if self.cells <= 0 {
            return Err(Error::InvalidInitialCondition);
        }
        let time = Time::dimensional(self.iterations, &[self.cells])?;
        let template = Cell::new(State::dead(), rules)?;
        let initial = self
            .initial
            .values(self.cells as usize)?
            .into_iter()
            .map(|alive| {
                template.with_state(if alive {
                    State::alive()
                } else {
                    State::dead()
                })
            });
        Universe::with_initial(
            time,
            Dimension::row(initial),
            self.keep_history,
            Neighborhood::elementary(),
        )
    }
}
