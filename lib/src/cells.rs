//! Cells, and the nested structure that holds them.

use crate::{
    error::Error,
    rules::{table_arity, Combination, Transition},
    states::State,
};
use log::warn;
use std::{iter, sync::Arc};

/// A cell in the cellular automaton.
///
/// A cell holds its current state and the rule table it was configured
/// with. Cells are never mutated while simulating: the next generation
/// gets new cells from [`with_state`](Cell::with_state), which share the
/// rule table of the old ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The current state.
    state: State,

    /// The rule table.
    ///
    /// Never empty, and all combinations have the same arity.
    rules: Arc<[Transition]>,
}

impl Cell {
    /// Creates a new cell with a state and a rule table.
    ///
    /// Returns [`Error::InvalidTransition`] if the rule table is empty
    /// or mixes combinations of different arities.
    pub fn new(state: State, rules: Vec<Transition>) -> Result<Self, Error> {
        table_arity(&rules)?;
        Ok(Cell {
            state,
            rules: rules.into(),
        })
    }

    /// The current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The rule table.
    pub fn rules(&self) -> &[Transition] {
        &self.rules
    }

    /// The arity of the combinations in the rule table.
    pub fn arity(&self) -> usize {
        self.rules[0].combination().arity()
    }

    /// Whether two cells share the same rule table allocation.
    pub fn shares_rules_with(&self, other: &Cell) -> bool {
        Arc::ptr_eq(&self.rules, &other.rules)
    }

    /// Looks up the state for a combination.
    ///
    /// The first matching transition wins. A miss means the rule table is
    /// incomplete, which is reported as [`Error::UnmatchedCombination`].
    pub fn apply_rule(&self, combination: &Combination) -> Result<&State, Error> {
        self.rules
            .iter()
            .find(|t| t.matches(combination))
            .map(Transition::state)
            .ok_or_else(|| {
                warn!("No transition matches the combination {}", combination);
                Error::UnmatchedCombination(combination.clone())
            })
    }

    /// A new cell with the given state and the same rule table.
    pub fn with_state(&self, state: State) -> Self {
        Cell {
            state,
            rules: Arc::clone(&self.rules),
        }
    }
}

/// A recursively nested collection of cells.
///
/// A space of dimensionality `d` is a [`Nested`](Dimension::Nested) value
/// whose leaves are all exactly `d` levels deep. For example, a
/// one-dimensional row is a `Nested` of `Leaf`s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dimension {
    Leaf(Cell),
    Nested(Vec<Dimension>),
}

impl Dimension {
    /// A one-dimensional row of cells.
    pub fn row<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        Dimension::Nested(cells.into_iter().map(Dimension::Leaf).collect())
    }

    /// The nesting depth of this structure.
    ///
    /// Returns [`Error::InvalidInitialCondition`] if some nested sequence is
    /// empty, and [`Error::InvalidDimensionalSpace`] if some level mixes
    /// subsequences of different depths.
    pub fn depth(&self) -> Result<usize, Error> {
        match self {
            Dimension::Leaf(_) => Ok(0),
            Dimension::Nested(children) => {
                let (first, rest) = children
                    .split_first()
                    .ok_or(Error::InvalidInitialCondition)?;
                let depth = first.depth()?;
                for child in rest {
                    if child.depth()? != depth {
                        return Err(Error::InvalidDimensionalSpace);
                    }
                }
                Ok(depth + 1)
            }
        }
    }

    /// Number of direct children. A leaf has none.
    pub fn len(&self) -> usize {
        match self {
            Dimension::Leaf(_) => 0,
            Dimension::Nested(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell at the given position, one index per level.
    pub fn get(&self, position: &[usize]) -> Option<&Cell> {
        match (self, position.split_first()) {
            (Dimension::Leaf(cell), None) => Some(cell),
            (Dimension::Nested(children), Some((&i, rest))) => children.get(i)?.get(rest),
            _ => None,
        }
    }

    /// The cell at the given position, wrapping around every level.
    pub fn get_wrapped(&self, position: &[isize]) -> Option<&Cell> {
        match (self, position.split_first()) {
            (Dimension::Leaf(cell), None) => Some(cell),
            (Dimension::Nested(children), Some((&i, rest))) if !children.is_empty() => {
                let i = i.rem_euclid(children.len() as isize) as usize;
                children[i].get_wrapped(rest)
            }
            _ => None,
        }
    }

    /// All cells, in row-major order.
    pub fn cells(&self) -> Box<dyn Iterator<Item = &Cell> + '_> {
        match self {
            Dimension::Leaf(cell) => Box::new(iter::once(cell)),
            Dimension::Nested(children) => Box::new(children.iter().flat_map(Dimension::cells)),
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        match self {
            Dimension::Leaf(_) => 1,
            Dimension::Nested(children) => children.iter().map(Dimension::cell_count).sum(),
        }
    }

    /// The values of all states, in row-major order.
    pub fn values(&self) -> Vec<i64> {
        self.cells().map(|c| c.state().value()).collect()
    }
}

impl From<Cell> for Dimension {
    fn from(cell: Cell) -> Self {
        Dimension::Leaf(cell)
    }
}

impl From<Vec<Dimension>> for Dimension {
    fn from(children: Vec<Dimension>) -> Self {
        Dimension::Nested(children)
    }
}
