//! Path lengths with an explicit "unreachable" value.
use std::fmt;
use std::ops::Add;

use ordered_float::OrderedFloat;

/// Length of a directed path, or [`Distance::Infinite`] when no path exists.
///
/// The variant order matters: the derived `Ord` places every finite length before `Infinite`,
/// and `Infinite` absorbs addition, so relaxation never has to special-case a sentinel number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// A finite, non-negative path length.
    Finite(OrderedFloat<f64>),
    /// No path is known.
    Infinite,
}

impl Distance {
    /// The length of the empty path.
    pub const ZERO: Self = Self::Finite(OrderedFloat(0.0));

    /// Wrap a finite length.
    #[must_use]
    pub const fn finite(length: f64) -> Self {
        Self::Finite(OrderedFloat(length))
    }

    /// Whether a path exists.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The finite length, if any.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Finite(OrderedFloat(length)) => Some(length),
            Self::Infinite => None,
        }
    }

    /// Like `+`, but `None` when two finite lengths sum past the largest `f64`.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self + rhs {
            Self::Finite(sum) if sum.0.is_infinite() => None,
            sum => Some(sum),
        }
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a + b),
            _ => Self::Infinite,
        }
    }
}

impl PartialEq<f64> for Distance {
    fn eq(&self, other: &f64) -> bool {
        self.value() == Some(*other)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(length) => write!(f, "{length}"),
            Self::Infinite => f.write_str("∞"),
        }
    }
}
