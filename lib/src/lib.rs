//! __rcas__ simulates generalized N-dimensional cellular automata.
//!
//! A [`Universe`] binds a [`Time`] to a [`Space`]. Every step computes
//! one cell of the generation being built, from the neighborhood
//! [`Combination`] of that cell in the previous generation and the rule
//! table of the cell. The whole evolution is kept for later inspection.
//!
//! ```
//! use rcas_lib::Config;
//!
//! let mut universe = Config::new(90, 9, 4).universe().unwrap();
//! assert_eq!(universe.run_to_completion().unwrap(), 4 * 9);
//! let space = universe.space();
//! assert_eq!(space.initial().values(), vec![0, 0, 0, 0, 1, 0, 0, 0, 0]);
//! assert_eq!(space.history().len(), 3);
//! assert_eq!(space.history()[0].values(), vec![0, 0, 0, 1, 0, 1, 0, 0, 0]);
//! assert_eq!(space.current().values(), vec![1, 0, 0, 0, 0, 0, 0, 0, 1]);
//! ```

mod cells;
mod config;
mod error;
pub mod rules;
mod space;
mod states;
mod time;
mod universe;

pub use cells::{Cell, Dimension};
pub use config::{Config, InitialCondition};
pub use error::{Error, ErrorKind};
pub use rules::{Combination, Transition};
pub use space::{Neighborhood, Space, SpaceEvents};
pub use states::State;
pub use time::{Time, TimeShape};
pub use universe::{Status, Universe};
