// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::base_types::Weight;
use std::fmt;
use std::ops::Add;

/// Travel distance along roads. `Infinity` is used for pairs of cities without a connection.
/// The variant order makes every finite distance smaller than `Infinity`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub enum Distance {
    Distance(Weight),
    Infinity,
}

// methods:
impl Distance {
    pub fn value(&self) -> Option<Weight> {
        match self {
            Distance::Distance(d) => Some(*d),
            Distance::Infinity => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Distance(_))
    }
}

// static functions:
impl Distance {
    pub const ZERO: Distance = Distance::Distance(0.0);

    pub fn from_weight(weight: Weight) -> Distance {
        Distance::Distance(weight)
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Distance::Distance(d1), Distance::Distance(d2)) => Distance::Distance(d1 + d2),
            _ => Distance::Infinity,
        }
    }
}

impl std::iter::Sum<Self> for Distance {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Distance::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Distance(d) => write!(f, "{}", d),
            Distance::Infinity => write!(f, "INF"),
        }
    }
}
