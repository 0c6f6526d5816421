//! States a cell can hold.

use crate::error::Error;
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

/// A named state of a cell, such as `dead = 0` or `alive = 1`.
///
/// Two states are equal if and only if their values are equal;
/// the name is only a label.
#[derive(Clone, Debug, Educe)]
#[educe(PartialEq, Eq, Hash)]
pub struct State {
    #[educe(PartialEq(ignore), Hash(ignore))]
    name: Arc<str>,
    value: i64,
}

impl State {
    /// Creates a new state.
    ///
    /// Returns [`Error::InvalidState`] if the name is blank.
    pub fn new<S: AsRef<str>>(name: S, value: i64) -> Result<Self, Error> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(Error::InvalidState);
        }
        Ok(State {
            name: Arc::from(name),
            value,
        })
    }

    /// The `dead` state, with value `0`.
    pub fn dead() -> Self {
        State {
            name: Arc::from("dead"),
            value: 0,
        }
    }

    /// The `alive` state, with value `1`.
    pub fn alive() -> Self {
        State {
            name: Arc::from("alive"),
            value: 1,
        }
    }

    /// The name of the state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of the state.
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
