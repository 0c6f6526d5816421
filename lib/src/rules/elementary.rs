//! [Elementary cellular automata](https://en.wikipedia.org/wiki/Elementary_cellular_automaton)
//! identified by their Wolfram code.

use super::{Combination, Transition};
use crate::{error::Error, states::State};

/// Number of distinct `(left, center, right)` patterns.
const PATTERNS: u8 = 8;

/// Builds the rule table of an elementary rule from its number.
///
/// The transitions are listed in the usual order,
/// from `111` down to `000`. Bit `i` of the rule number is the next state
/// of a cell whose neighborhood, read as a binary number, is `i`.
///
/// Returns [`Error::InvalidRuleNumber`] if the number is larger than `255`.
pub fn rule_table(number: u16) -> Result<Vec<Transition>, Error> {
    if number > 0xff {
        return Err(Error::InvalidRuleNumber(number));
    }
    let state = |bit: bool| if bit { State::alive() } else { State::dead() };
    (0..PATTERNS)
        .rev()
        .map(|pattern| {
            let combination = Combination::new(
                [4, 2, 1]
                    .iter()
                    .map(|&mask| state(pattern & mask != 0))
                    .collect(),
            )?;
            Ok(Transition::new(combination, state(number >> pattern & 1 == 1)))
        })
        .collect()
}
