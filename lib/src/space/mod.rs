//! The space: initial condition, the generation being built, and history.

mod neighborhood;

pub use neighborhood::Neighborhood;

use crate::{
    cells::{Cell, Dimension},
    error::Error,
    rules::{Combination, Transition},
    time::Time,
};
use log::{debug, trace};
use std::{cell::Cell as Counter, mem, sync::Arc};

/// Counters of what a [`Space`] has done so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpaceEvents {
    /// Number of new iterations (generations) started.
    ///
    /// The first generation is started implicitly and is not counted.
    pub iterations: u64,

    /// Number of cells created.
    pub cells: u64,

    /// Number of combinations read from the initial condition.
    pub initial_reads: u64,

    /// Number of combinations read from the last completed generation.
    pub last_reads: u64,
}

/// A recursively nested space of cells, with its whole evolution.
///
/// Generations that are no longer being built are stored behind [`Arc`]s,
/// so that they can be handed out as read-only snapshots.
#[derive(Debug)]
pub struct Space {
    /// Nesting depth of every generation.
    dimensionality: usize,

    /// Extent of a generation along each dimension, outermost first.
    ///
    /// Taken from the relative components of the time.
    shape: Vec<usize>,

    /// The neighborhood used to build combinations.
    neighborhood: Neighborhood,

    /// Whether completed generations are appended to the history.
    keep_history: bool,

    /// The initial condition. Never changes.
    initial: Arc<Dimension>,

    /// The generation being built, or just completed.
    current: Dimension,

    /// Absolute time of the current generation.
    ///
    /// `None` before the first cell is set.
    generation: Option<u64>,

    /// Position of the last cell appended to the current generation.
    ///
    /// `None` when the current generation is empty.
    cursor: Option<Vec<usize>>,

    /// The most recent generation that rolled off `current`.
    last: Option<Arc<Dimension>>,

    /// All generations that rolled off `current`, in order.
    ///
    /// Always empty when `keep_history` is `false`.
    history: Vec<Arc<Dimension>>,

    events: SpaceEvents,
    initial_reads: Counter<u64>,
    last_reads: Counter<u64>,
}

impl Space {
    /// Creates a new space with a von Neumann neighborhood of radius `1`.
    ///
    /// For one-dimensional spaces, this is `(left, center, right)`.
    pub fn new(time: &Time, initial: Dimension, keep_history: bool) -> Result<Self, Error> {
        let neighborhood = Neighborhood::von_neumann(time.dimensions(), 1);
        Space::with_neighborhood(time, initial, keep_history, neighborhood)
    }

    /// Creates a new space with the given neighborhood.
    ///
    /// The dimensionality of the space is the number of relative
    /// components of `time`. Fails with:
    ///
    /// * [`Error::InvalidDimensionalAmount`] if `time` has no relative
    ///   components;
    /// * [`Error::InvalidInitialCondition`] if the initial condition
    ///   has an empty sequence;
    /// * [`Error::InvalidDimensionalSpace`] if some level of the initial
    ///   condition mixes cells and sequences, or sequences of different
    ///   depths, or if it is not nested exactly as deeply as `time` has
    ///   relative components;
    /// * [`Error::InvalidNeighborhood`] if the neighborhood does not match
    ///   the dimensionality or the arity of the rule tables.
    pub fn with_neighborhood(
        time: &Time,
        initial: Dimension,
        keep_history: bool,
        neighborhood: Neighborhood,
    ) -> Result<Self, Error> {
        let dimensionality = time.dimensions();
        if dimensionality == 0 {
            return Err(Error::InvalidDimensionalAmount {
                time: 0,
                space: initial.depth().unwrap_or(0),
            });
        }
        if initial.is_empty() {
            return Err(Error::InvalidInitialCondition);
        }
        if initial.depth()? != dimensionality {
            return Err(Error::InvalidDimensionalSpace);
        }
        if neighborhood.dimensions() != dimensionality
            || initial.cells().any(|c| c.arity() != neighborhood.len())
        {
            return Err(Error::InvalidNeighborhood);
        }
        debug!(
            "Space of {} dimension(s) with {} initial cells, generation shape {:?}",
            dimensionality,
            initial.cell_count(),
            time.shape()
        );
        Ok(Space {
            dimensionality,
            shape: time.shape(),
            neighborhood,
            keep_history,
            initial: Arc::new(initial),
            current: Dimension::Nested(Vec::new()),
            generation: None,
            cursor: None,
            last: None,
            history: Vec::new(),
            events: SpaceEvents::default(),
            initial_reads: Counter::new(0),
            last_reads: Counter::new(0),
        })
    }

    /// Number of dimensions of a generation.
    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// Extent of a generation along each dimension, outermost first.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The neighborhood every combination is read from.
    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    /// Whether completed generations are kept in the history.
    pub fn is_keep_history(&self) -> bool {
        self.keep_history
    }

    /// The initial condition.
    pub fn initial(&self) -> &Dimension {
        &self.initial
    }

    /// A shared handle to the initial condition.
    pub fn initial_snapshot(&self) -> Arc<Dimension> {
        Arc::clone(&self.initial)
    }

    /// The generation being built, or just completed.
    ///
    /// Empty before the first cell is set.
    pub fn current(&self) -> &Dimension {
        &self.current
    }

    /// All generations that rolled off [`current`](Space::current), oldest first.
    pub fn history(&self) -> &[Arc<Dimension>] {
        &self.history
    }

    /// Absolute time of the current generation, if any cell was set.
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    /// Whether every cell of the current generation has been set.
    pub fn is_complete(&self) -> bool {
        self.cursor.as_ref().map_or(false, |cursor| {
            cursor.iter().zip(&self.shape).all(|(&i, &n)| i + 1 == n)
        })
    }

    /// The most recently completed generation.
    ///
    /// This is the current generation once it is complete, otherwise the
    /// last generation that rolled off it, otherwise the initial condition.
    pub fn last(&self) -> &Dimension {
        if self.is_complete() {
            &self.current
        } else {
            self.last.as_deref().unwrap_or(&self.initial)
        }
    }

    /// What the space has done so far.
    pub fn events(&self) -> SpaceEvents {
        SpaceEvents {
            initial_reads: self.initial_reads.get(),
            last_reads: self.last_reads.get(),
            ..self.events
        }
    }

    /// The generation the cell at `time` is derived from.
    fn source(&self, time: &Time) -> &Dimension {
        if time.absolute() == 0 {
            &self.initial
        } else {
            self.last()
        }
    }

    /// The relative position of `time`, checked against the dimensionality.
    fn position(&self, time: &Time) -> Result<Vec<usize>, Error> {
        let position = time.position();
        if position.len() != self.dimensionality {
            return Err(Error::InvalidDimensionalAmount {
                time: position.len(),
                space: self.dimensionality,
            });
        }
        Ok(position)
    }

    /// The cell at the position of `time` in the generation it is derived
    /// from. Its rule table decides the next state.
    pub fn previous_cell(&self, time: &Time) -> Result<&Cell, Error> {
        let position = self.position(time)?;
        let signed: Vec<isize> = position.iter().map(|&i| i as isize).collect();
        self.source(time)
            .get_wrapped(&signed)
            .ok_or(Error::InvalidPosition(position))
    }

    /// The combination of the cell at `time`.
    ///
    /// At absolute time `0` it is read from the initial condition,
    /// afterwards from the [`last`](Space::last) completed generation.
    pub fn combination(&self, time: &Time) -> Result<Combination, Error> {
        if time.absolute() == 0 {
            let combination = self.combination_in(time, &self.initial)?;
            self.initial_reads.set(self.initial_reads.get() + 1);
            Ok(combination)
        } else {
            let combination = self.combination_in(time, self.last())?;
            self.last_reads.set(self.last_reads.get() + 1);
            Ok(combination)
        }
    }

    /// The combination of the cell at `time`, read from `generation`.
    pub fn combination_in(&self, time: &Time, generation: &Dimension) -> Result<Combination, Error> {
        let position = self.position(time)?;
        let states = self
            .neighborhood
            .around(&position)
            .map(|target| generation.get_wrapped(&target).map(|c| c.state().clone()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::InvalidPosition(position.clone()))?;
        Combination::new(states)
    }

    /// The position that the next call to [`set_state`](Space::set_state)
    /// must write.
    fn next_position(&self) -> Vec<usize> {
        let mut next = match &self.cursor {
            Some(cursor) => cursor.clone(),
            None => return vec![0; self.dimensionality],
        };
        for (i, &n) in next.iter_mut().zip(&self.shape).rev() {
            *i += 1;
            if *i < n {
                break;
            }
            *i = 0;
        }
        next
    }

    /// Writes the cell at `time`, with the resulting state of `transition`.
    ///
    /// Exactly one new cell is created per call. When `time` is at the
    /// start of a generation and the current generation is complete,
    /// a new iteration is started first, and the completed generation
    /// rolls off into the history.
    ///
    /// Returns [`Error::InvalidPosition`] if `time` does not address the
    /// next cell to be written. Nothing changes in that case.
    pub fn set_state(&mut self, time: &Time, transition: &Transition) -> Result<(), Error> {
        let position = self.position(time)?;
        if position != self.next_position() {
            return Err(Error::InvalidPosition(position));
        }
        match self.generation {
            None => self.generation = Some(time.absolute()),
            Some(generation) if self.cursor.is_none() || self.is_complete() => {
                if time.absolute() != generation + 1 {
                    return Err(Error::InvalidPosition(position));
                }
                self.create_new_iteration(time);
            }
            Some(generation) => {
                if time.absolute() != generation {
                    return Err(Error::InvalidPosition(position));
                }
            }
        }
        self.create_new_cell(time, transition)
    }

    /// Rolls the current generation off into the history,
    /// and starts an empty one.
    fn create_new_iteration(&mut self, time: &Time) {
        let completed = Arc::new(mem::replace(
            &mut self.current,
            Dimension::Nested(Vec::new()),
        ));
        if self.keep_history {
            self.history.push(Arc::clone(&completed));
        }
        self.last = Some(completed);
        self.generation = Some(time.absolute());
        self.cursor = None;
        self.events.iterations += 1;
        debug!("Iteration {} started", time.absolute());
    }

    /// Appends a new cell to the current generation.
    fn create_new_cell(&mut self, time: &Time, transition: &Transition) -> Result<(), Error> {
        let cell = self
            .previous_cell(time)?
            .with_state(transition.state().clone());
        let position = time.position();
        trace!("Cell {} set to {}", time, cell.state());
        if let Dimension::Nested(children) = &mut self.current {
            if push_at(children, &position, cell) {
                self.cursor = Some(position);
                self.events.cells += 1;
                return Ok(());
            }
        }
        Err(Error::InvalidPosition(position))
    }
}

/// Appends a cell at `position`, opening new subsequences as needed.
///
/// `position` must be the next position in row-major order.
fn push_at(children: &mut Vec<Dimension>, position: &[usize], cell: Cell) -> bool {
    match position.split_first() {
        Some((&i, [])) if children.len() == i => {
            children.push(Dimension::Leaf(cell));
            true
        }
        Some((&i, rest)) if !rest.is_empty() => {
            if children.len() == i {
                children.push(Dimension::Nested(Vec::new()));
            }
            if children.len() != i + 1 {
                return false;
            }
            match children.last_mut() {
                Some(Dimension::Nested(grandchildren)) => push_at(grandchildren, rest, cell),
                _ => false,
            }
        }
        _ => false,
    }
}
