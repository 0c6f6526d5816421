//! The simulation clock.
//!
//! A [`Time`] counts absolute steps, optionally up to a limit. A
//! dimensional time additionally owns relative components, one per
//! dimension of the space, which address a position inside the generation
//! being built. Increasing a dimensional time advances the innermost
//! relative component and carries outward, like an odometer; a carry out
//! of the outermost relative component advances the absolute counter.
//!
//! For example, a time with absolute limit `3` and one relative
//! component of limit `2` visits
//!
//! ```plaintext
//! (0; 0) (0; 1) (1; 0) (1; 1) (2; 0) (2; 1) (3; 0)
//! ```
//!
//! and then refuses to increase any further.

use crate::error::Error;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A description of a [`Time`] to construct.
///
/// Limits are signed so that invalid configurations can be described,
/// and are rejected by [`Time::from_shape`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeShape {
    /// A scalar time without limit.
    Unlimited,

    /// A scalar time with an absolute limit.
    Limited(i64),

    /// A time with relative components.
    ///
    /// Every relative component must be [`Limited`](TimeShape::Limited);
    /// its limit is the extent of the space along that dimension.
    Nested {
        /// The absolute limit. `None` means unlimited.
        limit: Option<i64>,
        /// One shape per dimension, outermost first.
        relative: Vec<TimeShape>,
    },
}

/// The simulation clock.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Time {
    /// Number of increases since the start or the last reset.
    absolute: u64,

    /// The absolute counter never exceeds this limit.
    limit: Option<u64>,

    /// Relative components, outermost first.
    ///
    /// Either `None` or non-empty. Every component is limited and has no
    /// relative components itself; its counter stays below its limit.
    relative: Option<Vec<Time>>,
}

/// Checks that an absolute limit is positive.
fn positive_limit(limit: i64) -> Result<u64, Error> {
    if limit <= 0 {
        Err(Error::InvalidAbsoluteTimeLimit(limit))
    } else {
        Ok(limit as u64)
    }
}

impl Time {
    /// A scalar time without limit.
    pub fn unlimited() -> Self {
        Time {
            absolute: 0,
            limit: None,
            relative: None,
        }
    }

    /// A scalar time that can be increased exactly `limit` times.
    ///
    /// Returns [`Error::InvalidAbsoluteTimeLimit`] if `limit` is not positive.
    pub fn limited(limit: i64) -> Result<Self, Error> {
        Ok(Time {
            limit: Some(positive_limit(limit)?),
            ..Time::unlimited()
        })
    }

    /// A time with one relative component per entry of `relative`,
    /// each bounded by that entry.
    pub fn dimensional(limit: Option<i64>, relative: &[i64]) -> Result<Self, Error> {
        Time::from_shape(&TimeShape::Nested {
            limit,
            relative: relative.iter().map(|&l| TimeShape::Limited(l)).collect(),
        })
    }

    /// Constructs the time described by a shape.
    pub fn from_shape(shape: &TimeShape) -> Result<Self, Error> {
        match shape {
            TimeShape::Unlimited => Ok(Time::unlimited()),
            TimeShape::Limited(limit) => Time::limited(*limit),
            TimeShape::Nested { limit, relative } => {
                let limit = limit.map(positive_limit).transpose()?;
                if relative.is_empty() {
                    return Err(Error::InvalidRelativeTimeClass);
                }
                let relative = relative
                    .iter()
                    .map(Time::relative_from_shape)
                    .collect::<Result<_, _>>()?;
                Ok(Time {
                    absolute: 0,
                    limit,
                    relative: Some(relative),
                })
            }
        }
    }

    /// Constructs a relative component.
    fn relative_from_shape(shape: &TimeShape) -> Result<Self, Error> {
        match shape {
            TimeShape::Limited(limit) if *limit <= 0 => {
                Err(Error::InvalidRelativeTimeLimit(*limit))
            }
            TimeShape::Limited(limit) => Time::limited(*limit),
            _ => Err(Error::InvalidRelativeTimeClass),
        }
    }

    /// The absolute counter.
    pub fn absolute(&self) -> u64 {
        self.absolute
    }

    /// The absolute limit, if any.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// The relative components, outermost first.
    pub fn relative(&self) -> Option<&[Time]> {
        self.relative.as_deref()
    }

    /// Number of relative components.
    pub fn dimensions(&self) -> usize {
        self.relative.as_ref().map_or(0, Vec::len)
    }

    /// The relative counters, outermost first.
    ///
    /// This is the position inside the generation being built.
    pub fn position(&self) -> Vec<usize> {
        self.relative()
            .unwrap_or_default()
            .iter()
            .map(|t| t.absolute as usize)
            .collect()
    }

    /// The limits of the relative components, outermost first.
    ///
    /// This is the extent of a generation along each dimension.
    pub fn shape(&self) -> Vec<usize> {
        self.relative()
            .unwrap_or_default()
            .iter()
            .filter_map(|t| t.limit)
            .map(|l| l as usize)
            .collect()
    }

    /// Whether the absolute counter has reached its limit.
    pub fn is_exhausted(&self) -> bool {
        self.limit == Some(self.absolute)
    }

    /// Whether every relative component is at its start.
    ///
    /// Scalar times are always at the start of a generation.
    pub fn at_generation_start(&self) -> bool {
        self.relative()
            .unwrap_or_default()
            .iter()
            .all(|t| t.absolute == 0)
    }

    /// Whether every relative component is at its last value.
    pub fn at_generation_end(&self) -> bool {
        self.relative()
            .unwrap_or_default()
            .iter()
            .all(Time::at_last)
    }

    /// Whether a relative component can not advance without wrapping.
    fn at_last(&self) -> bool {
        self.limit.map_or(false, |l| self.absolute + 1 >= l)
    }

    /// Advances the clock by one step.
    ///
    /// Returns [`Error::TimeLimitReached`] if the absolute counter is already
    /// at its limit. In that case nothing changes.
    pub fn increase(&mut self) -> Result<(), Error> {
        if let Some(limit) = self.limit {
            if self.absolute >= limit {
                return Err(Error::TimeLimitReached(limit));
            }
        }
        if let Some(relative) = &mut self.relative {
            if let Some(i) = relative.iter().rposition(|t| !t.at_last()) {
                relative[i].absolute += 1;
                for t in &mut relative[i + 1..] {
                    t.absolute = 0;
                }
                return Ok(());
            }
            for t in relative.iter_mut() {
                t.absolute = 0;
            }
        }
        self.absolute += 1;
        Ok(())
    }

    /// Sets the absolute counter back to `0`.
    ///
    /// Limits and relative components are left alone.
    pub fn reset(&mut self) {
        self.absolute = 0;
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.relative.is_none() {
            return write!(f, "{}", self.absolute);
        }
        let position: Vec<String> = self.position().iter().map(ToString::to_string).collect();
        write!(f, "({}; {})", self.absolute, position.join(", "))
    }
}
