//! All kinds of errors in this crate.

use crate::rules::Combination;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Every error except [`TimeLimitReached`](Error::TimeLimitReached) is a
/// configuration error, raised when something is constructed.
/// [`TimeLimitReached`](Error::TimeLimitReached) is the normal signal that
/// a bounded simulation is complete.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Absolute time limit should be positive, got {0}.
    InvalidAbsoluteTimeLimit(i64),
    /// Relative time limit should be positive, got {0}.
    InvalidRelativeTimeLimit(i64),
    /// Relative time components must be bounded and must not have relative components of their own.
    InvalidRelativeTimeClass,
    /// Time limit {0} reached.
    TimeLimitReached(u64),
    /// The initial condition must not be empty.
    InvalidInitialCondition,
    /// The initial condition must be uniformly nested, one level per relative time dimension.
    InvalidDimensionalSpace,
    /// Time has {time} relative dimension(s) but the space has {space}.
    InvalidDimensionalAmount {
        /// Number of relative components of the time.
        time: usize,
        /// Nesting depth of the initial condition.
        space: usize,
    },
    /// A state must have a name.
    InvalidState,
    /// A combination must have at least one state.
    InvalidCombination,
    /// A rule table must have at least one transition, all of the same arity.
    InvalidTransition,
    /// The neighborhood does not fit the dimensionality or the rule table.
    InvalidNeighborhood,
    /// Position {0:?} does not continue the generation being built.
    InvalidPosition(Vec<usize>),
    /// No transition matches the combination {0:?}.
    UnmatchedCombination(Combination),
    /// Elementary rule numbers range from 0 to 255, got {0}.
    InvalidRuleNumber(u16),
}

/// The kind of an [`Error`], without any payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A non-positive absolute time limit.
    InvalidAbsoluteTimeLimit,
    /// A non-positive relative time limit.
    InvalidRelativeTimeLimit,
    /// A malformed relative time component.
    InvalidRelativeTimeClass,
    /// A bounded time is exhausted.
    TimeLimitReached,
    /// An empty initial condition.
    InvalidInitialCondition,
    /// A badly nested initial condition.
    InvalidDimensionalSpace,
    /// Time and space disagree on the number of dimensions.
    InvalidDimensionalAmount,
    /// A state without a name.
    InvalidState,
    /// An empty combination.
    InvalidCombination,
    /// An empty or mixed-arity rule table.
    InvalidTransition,
    /// A neighborhood that does not fit the space.
    InvalidNeighborhood,
    /// A write out of order.
    InvalidPosition,
    /// A combination missing from a rule table.
    UnmatchedCombination,
    /// An elementary rule number above 255.
    InvalidRuleNumber,
}

impl Error {
    /// The kind of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAbsoluteTimeLimit(_) => ErrorKind::InvalidAbsoluteTimeLimit,
            Error::InvalidRelativeTimeLimit(_) => ErrorKind::InvalidRelativeTimeLimit,
            Error::InvalidRelativeTimeClass => ErrorKind::InvalidRelativeTimeClass,
            Error::TimeLimitReached(_) => ErrorKind::TimeLimitReached,
            Error::InvalidInitialCondition => ErrorKind::InvalidInitialCondition,
            Error::InvalidDimensionalSpace => ErrorKind::InvalidDimensionalSpace,
            Error::InvalidDimensionalAmount { .. } => ErrorKind::InvalidDimensionalAmount,
            Error::InvalidState => ErrorKind::InvalidState,
            Error::InvalidCombination => ErrorKind::InvalidCombination,
            Error::InvalidTransition => ErrorKind::InvalidTransition,
            Error::InvalidNeighborhood => ErrorKind::InvalidNeighborhood,
            Error::InvalidPosition(_) => ErrorKind::InvalidPosition,
            Error::UnmatchedCombination(_) => ErrorKind::UnmatchedCombination,
            Error::InvalidRuleNumber(_) => ErrorKind::InvalidRuleNumber,
        }
    }

    /// Whether this is the signal that a bounded simulation has completed.
    pub fn is_time_limit_reached(&self) -> bool {
        self.kind() == ErrorKind::TimeLimitReached
    }
}
