//! Initial conditions of elementary universes.

use crate::error::Error;
use educe::Educe;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to fill the first generation.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InitialCondition {
    /// A single living cell in the middle.
    #[educe(Default)]
    SingleCell,

    /// Every cell is alive with probability `1/2`.
    ///
    /// The same seed always gives the same generation.
    /// `None` means a seed from the operating system.
    Random { seed: Option<u64> },

    /// Explicit values, `0` for dead and `1` for alive.
    Explicit(Vec<u8>),
}

impl InitialCondition {
    /// Whether each of the `cells` cells is alive.
    ///
    /// Returns [`Error::InvalidInitialCondition`] if explicit values have the
    /// wrong length or are neither `0` nor `1`.
    pub(crate) fn values(&self, cells: usize) -> Result<Vec<bool>, Error> {
        match self {
            InitialCondition::SingleCell => Ok((0..cells).map(|i| i == cells / 2).collect()),
            InitialCondition::Random { seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                Ok((0..cells).map(|_| rng.gen_bool(0.5)).collect())
            }
            InitialCondition::Explicit(values) => {
                if values.len() != cells {
                    return Err(Error::InvalidInitialCondition);
                }
                values
                    .iter()
                    .map(|&v| match v {
                        0 => Ok(false),
                        1 => Ok(true),
                        _ => Err(Error::InvalidInitialCondition),
                    })
                    .collect()
            }
        }
    }
}
