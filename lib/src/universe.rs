//! The universe, which drives a space with a clock.

use crate::{
    cells::Dimension,
    error::Error,
    rules::Transition,
    space::{Neighborhood, Space},
    time::Time,
};
use log::info;

/// Whether a universe can still advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The time limit is not reached yet, or there is no limit.
    Running,
    /// The time limit is reached. Every further step fails with
    /// [`Error::TimeLimitReached`].
    Completed,
}

/// A [`Time`] and the [`Space`] it drives.
///
/// This is what rendering, persistence and user interfaces hold on to.
/// They read the space through [`space`](Universe::space), and advance it
/// with [`step`](Universe::step), [`step_generation`](Universe::step_generation),
/// [`run_to_completion`](Universe::run_to_completion) or
/// [`run_while`](Universe::run_while).
#[derive(Debug)]
pub struct Universe {
    time: Time,
    space: Space,
}

impl Universe {
    /// Binds a time and a space.
    ///
    /// Returns [`Error::InvalidDimensionalAmount`] if the space was built
    /// for a time of another shape.
    pub fn new(time: Time, space: Space) -> Result<Self, Error> {
        if time.shape() != space.shape() {
            return Err(Error::InvalidDimensionalAmount {
                time: time.dimensions(),
                space: space.dimensionality(),
            });
        }
        Ok(Universe { time, space })
    }

    /// Builds the space from an initial condition, then binds it to `time`.
    pub fn with_initial(
        time: Time,
        initial: Dimension,
        keep_history: bool,
        neighborhood: Neighborhood,
    ) -> Result<Self, Error> {
        let space = Space::with_neighborhood(&time, initial, keep_history, neighborhood)?;
        Ok(Universe { time, space })
    }

    /// The clock of the simulation.
    pub fn time(&self) -> &Time {
        &self.time
    }

    /// The space, with the initial condition and every generation so far.
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// [`Status::Completed`] once a bounded time is exhausted.
    pub fn status(&self) -> Status {
        if self.time.is_exhausted() {
            Status::Completed
        } else {
            Status::Running
        }
    }

    /// Computes the cell at the current time, then advances the time.
    ///
    /// Returns [`Error::TimeLimitReached`] once the time limit is reached;
    /// the universe is left unchanged in that case.
    pub fn step(&mut self) -> Result<(), Error> {
        if self.time.is_exhausted() {
            return Err(Error::TimeLimitReached(self.time.absolute()));
        }
        let combination = self.space.combination(&self.time)?;
        let state = self
            .space
            .previous_cell(&self.time)?
            .apply_rule(&combination)?
            .clone();
        let transition = Transition::new(combination, state);
        self.space.set_state(&self.time, &transition)?;
        self.time.increase()
    }

    /// Steps until the current generation is complete.
    pub fn step_generation(&mut self) -> Result<(), Error> {
        loop {
            self.step()?;
            if self.space.is_complete() {
                return Ok(());
            }
        }
    }

    /// Steps until the time limit is reached. Returns the number of steps.
    ///
    /// With an unlimited time this never returns, unless a rule table is
    /// incomplete. Use [`run_while`](Universe::run_while) to stop it.
    pub fn run_to_completion(&mut self) -> Result<u64, Error> {
        self.run_while(|_| true)
    }

    /// Steps while `keep_going` returns `true` and the time limit is not
    /// reached. Returns the number of steps.
    ///
    /// `keep_going` is checked before every step.
    pub fn run_while<F: FnMut(&Universe) -> bool>(&mut self, mut keep_going: F) -> Result<u64, Error> {
        let mut steps = 0;
        while keep_going(self) {
            match self.step() {
                Ok(()) => steps += 1,
                Err(e) if e.is_time_limit_reached() => {
                    info!("Simulation complete after {} steps at time {}", steps, self.time);
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(steps)
    }
}
