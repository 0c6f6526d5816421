//! Neighborhood shapes.

use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered list of offsets, relative to a cell, whose states form the
/// [`Combination`](crate::rules::Combination) of that cell.
///
/// Offsets wrap around every axis of the space.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<isize>>", into = "Vec<Vec<isize>>")
)]
pub struct Neighborhood {
    /// Never empty. All offsets have the same number of components.
    offsets: Vec<Vec<isize>>,
}

impl Neighborhood {
    /// A neighborhood from explicit offsets.
    ///
    /// Returns [`Error::InvalidNeighborhood`] if there are no offsets,
    /// or if they have different numbers of components.
    pub fn new(offsets: Vec<Vec<isize>>) -> Result<Self, Error> {
        let dimensions = offsets.first().ok_or(Error::InvalidNeighborhood)?.len();
        if offsets.iter().any(|o| o.len() != dimensions) {
            return Err(Error::InvalidNeighborhood);
        }
        Ok(Neighborhood { offsets })
    }

    /// `(left, center, right)`, the neighborhood of elementary rules.
    pub fn elementary() -> Self {
        Neighborhood {
            offsets: vec![vec![-1], vec![0], vec![1]],
        }
    }

    /// All offsets within Manhattan distance `radius`,
    /// in lexicographic order.
    pub fn von_neumann(dimensions: usize, radius: usize) -> Self {
        let offsets = cube(dimensions, radius)
            .into_iter()
            .filter(|o| o.iter().map(|c| c.unsigned_abs()).sum::<usize>() <= radius)
            .collect();
        Neighborhood { offsets }
    }

    /// All offsets within Chebyshev distance `radius`,
    /// in lexicographic order.
    pub fn moore(dimensions: usize, radius: usize) -> Self {
        Neighborhood {
            offsets: cube(dimensions, radius),
        }
    }

    /// Number of components of every offset.
    pub fn dimensions(&self) -> usize {
        self.offsets.first().map_or(0, Vec::len)
    }

    /// Number of offsets, which is the arity of the combinations.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false` for a validated neighborhood.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The offsets, in the order their states appear in a combination.
    pub fn offsets(&self) -> &[Vec<isize>] {
        &self.offsets
    }

    /// The positions of the neighbors of a cell, before wrapping.
    pub(crate) fn around<'a>(
        &'a self,
        position: &'a [usize],
    ) -> impl Iterator<Item = Vec<isize>> + 'a {
        self.offsets.iter().map(move |offset| {
            position
                .iter()
                .zip(offset)
                .map(|(&p, &o)| p as isize + o)
                .collect()
        })
    }
}

impl TryFrom<Vec<Vec<isize>>> for Neighborhood {
    type Error = Error;

    fn try_from(offsets: Vec<Vec<isize>>) -> Result<Self, Error> {
        Neighborhood::new(offsets)
    }
}

impl From<Neighborhood> for Vec<Vec<isize>> {
    fn from(neighborhood: Neighborhood) -> Self {
        neighborhood.offsets
    }
}

/// Every offset with components in `-radius..=radius`.
fn cube(dimensions: usize, radius: usize) -> Vec<Vec<isize>> {
    let radius = radius as isize;
    (0..dimensions).fold(vec![Vec::new()], |offsets, _| {
        offsets
            .into_iter()
            .flat_map(|offset| {
                (-radius..=radius).map(move |c| {
                    let mut offset = offset.clone();
                    offset.push(c);
                    offset
                })
            })
            .collect()
    })
}
