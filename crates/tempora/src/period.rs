// Copyright (c) 2026 The tempora authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::{PrimInt, Signed};
use smallvec::SmallVec;
use std::{
    cmp::{max, min},
    ops::{BitAnd, BitOr, Sub},
};

/// The upper endpoint of a [`Period`].
///
/// The raw wire/storage encoding of a period uses a negative upper bound as a
/// sentinel for "unbounded above". This type makes that distinction explicit
/// so every case split over boundedness is checked by the compiler.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PeriodEnd<T> {
    /// A concrete inclusive upper bound.
    Finite(T),
    /// Positive infinity; the period has no upper bound.
    Unbounded,
}

impl<T> PeriodEnd<T> {
    /// Returns `true` if the endpoint is [`PeriodEnd::Unbounded`].
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, PeriodEnd::Unbounded)
    }

    /// Returns the finite bound, or `None` if unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::PeriodEnd;
    /// assert_eq!(PeriodEnd::Finite(7).as_finite(), Some(7));
    /// assert_eq!(PeriodEnd::<i64>::Unbounded.as_finite(), None);
    /// ```
    #[inline]
    pub fn as_finite(self) -> Option<T> {
        match self {
            PeriodEnd::Finite(v) => Some(v),
            PeriodEnd::Unbounded => None,
        }
    }
}

impl<T> std::fmt::Display for PeriodEnd<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodEnd::Finite(v) => write!(f, "{}", v),
            PeriodEnd::Unbounded => write!(f, "+inf"),
        }
    }
}

/// The error type for period construction.
///
/// Validation happens exclusively at construction time; every operation on
/// already-constructed periods is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodError<T> {
    /// The start of the period is negative.
    NegativeStart {
        /// The offending start value.
        start: T,
    },
    /// The start of the period lies after its finite end.
    StartAfterEnd {
        /// The offending start value.
        start: T,
        /// The finite end value.
        end: T,
    },
    /// A flat boundary list did not contain an even number of values.
    OddArgumentCount {
        /// The length of the supplied list.
        count: usize,
    },
}

impl<T> std::fmt::Display for PeriodError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeStart { start } => {
                write!(f, "period start {} is negative", start)
            }
            Self::StartAfterEnd { start, end } => {
                write!(f, "period start {} lies after end {}", start, end)
            }
            Self::OddArgumentCount { count } => {
                write!(
                    f,
                    "boundary list of length {} cannot be split into (start, end) pairs",
                    count
                )
            }
        }
    }
}

impl<T> std::error::Error for PeriodError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// A closed interval `[start, end]` over the non-negative integers, where the
/// upper endpoint may be [`PeriodEnd::Unbounded`] (positive infinity).
///
/// Periods are immutable `Copy` values; every transformation produces a new
/// period. The constructor enforces `start >= 0` and, for finite ends,
/// `start <= end`, so all downstream algebra can assume well-formed inputs.
///
/// Merging policy: two periods merge when they overlap or share an endpoint
/// value. Integer adjacency without a shared point does *not* merge:
/// `[20, 30]` touches `[30, 40]` (both contain 30) and their union is one
/// period, while `[10, 19]` and `[20, 30]` stay separate.
///
/// # Examples
///
/// ```rust
/// # use tempora::Period;
/// let p = Period::new(10i64, 20).unwrap();
/// assert!(p.contains(10));
/// assert!(p.contains(20));
/// assert!(!p.contains(21));
///
/// // A negative raw end denotes "unbounded above".
/// let open = Period::new(30i64, -1).unwrap();
/// assert!(open.is_unbounded());
/// assert!(open.contains(1_000_000));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Period<T>
where
    T: PrimInt + Signed,
{
    start: T,
    end: PeriodEnd<T>,
}

impl<T> Period<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `Period` from raw bounds.
    ///
    /// A negative `end` is the sentinel for "unbounded above" and is accepted
    /// unconditionally; a non-negative `end` must not precede `start`.
    ///
    /// # Errors
    ///
    /// * [`PeriodError::NegativeStart`] if `start < 0`.
    /// * [`PeriodError::StartAfterEnd`] if `end >= 0` and `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::{Period, PeriodError};
    /// assert!(Period::new(0i64, 0).is_ok());
    /// assert!(Period::new(5i64, -1).is_ok());
    /// assert_eq!(
    ///     Period::new(-1i64, 0),
    ///     Err(PeriodError::NegativeStart { start: -1 })
    /// );
    /// assert_eq!(
    ///     Period::new(10i64, 5),
    ///     Err(PeriodError::StartAfterEnd { start: 10, end: 5 })
    /// );
    /// ```
    pub fn new(start: T, end: T) -> Result<Self, PeriodError<T>> {
        if start < T::zero() {
            return Err(PeriodError::NegativeStart { start });
        }
        if end >= T::zero() && start > end {
            return Err(PeriodError::StartAfterEnd { start, end });
        }
        let end = if end < T::zero() {
            PeriodEnd::Unbounded
        } else {
            PeriodEnd::Finite(end)
        };
        Ok(Self { start, end })
    }

    /// Creates a new `Period` without validating the bounds in release builds.
    ///
    /// The caller must ensure `start >= 0` and, for a finite end,
    /// `start <= end`. A `debug_assert!` catches violations during
    /// development.
    #[inline]
    pub fn new_unchecked(start: T, end: PeriodEnd<T>) -> Self {
        debug_assert!(start >= T::zero(), "period start must be non-negative");
        if let PeriodEnd::Finite(e) = end {
            debug_assert!(start <= e, "period start must not lie after its end");
        }
        Self { start, end }
    }

    /// Creates periods from a flat list of `(start, end)` boundary pairs,
    /// preserving input order.
    ///
    /// # Errors
    ///
    /// [`PeriodError::OddArgumentCount`] if the list length is odd; otherwise
    /// the first per-pair validation error, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::{Period, PeriodError};
    /// let ps = Period::many(&[0i64, 1, 2, 3]).unwrap();
    /// assert_eq!(ps.len(), 2);
    /// assert_eq!(
    ///     Period::many(&[0i64, 1, 2]),
    ///     Err(PeriodError::OddArgumentCount { count: 3 })
    /// );
    /// ```
    pub fn many(bounds: &[T]) -> Result<Vec<Self>, PeriodError<T>> {
        if bounds.len() % 2 != 0 {
            return Err(PeriodError::OddArgumentCount {
                count: bounds.len(),
            });
        }
        let mut periods = Vec::with_capacity(bounds.len() / 2);
        for pair in bounds.chunks_exact(2) {
            periods.push(Self::new(pair[0], pair[1])?);
        }
        Ok(periods)
    }

    /// Bounded period from already-validated bounds.
    #[inline]
    pub(crate) fn bounded(start: T, end: T) -> Self {
        Self::new_unchecked(start, PeriodEnd::Finite(end))
    }

    /// Unbounded period from an already-validated start.
    #[inline]
    pub(crate) fn unbounded_from(start: T) -> Self {
        Self::new_unchecked(start, PeriodEnd::Unbounded)
    }

    /// Returns the inclusive start of the period.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the upper endpoint of the period.
    #[inline]
    pub fn end(&self) -> PeriodEnd<T> {
        self.end
    }

    /// Returns `true` if the period has no upper bound.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.end.is_unbounded()
    }

    /// Returns `true` if `point` lies inside the period.
    ///
    /// Negative points are never contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::Period;
    /// let p = Period::new(10i64, 20).unwrap();
    /// assert!(p.contains(15));
    /// assert!(!p.contains(-1));
    /// assert!(!p.contains(9));
    /// ```
    #[inline]
    pub fn contains(&self, point: T) -> bool {
        if point < T::zero() || point < self.start {
            return false;
        }
        match self.end {
            PeriodEnd::Unbounded => true,
            PeriodEnd::Finite(end) => point <= end,
        }
    }

    /// Calculates the union of two periods.
    ///
    /// Returns one period when the operands overlap or share an endpoint
    /// value, and both operands unchanged when they are disjoint. The result
    /// is symmetric as a set: `a.union(b)` and `b.union(a)` contain the same
    /// periods.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::Period;
    /// let a = Period::new(20i64, 30).unwrap();
    /// let b = Period::new(30i64, 40).unwrap();
    /// let merged = a.union(b);
    /// assert_eq!(&merged[..], &[Period::new(20i64, 40).unwrap()]);
    ///
    /// let open = Period::new(30i64, -1).unwrap();
    /// let low = Period::new(10i64, 20).unwrap();
    /// let kept = open.union(low);
    /// assert_eq!(&kept[..], &[open, low]);
    /// ```
    pub fn union(&self, other: Self) -> SmallVec<Self, 2> {
        match (self.end, other.end) {
            (PeriodEnd::Unbounded, PeriodEnd::Unbounded) => {
                smallvec::smallvec![Self::unbounded_from(min(self.start, other.start))]
            }
            (PeriodEnd::Unbounded, PeriodEnd::Finite(other_end)) => {
                if other_end < self.start {
                    smallvec::smallvec![*self, other]
                } else {
                    // Overlapping or sharing the start point: one unbounded
                    // period from the smaller start.
                    smallvec::smallvec![Self::unbounded_from(min(self.start, other.start))]
                }
            }
            (PeriodEnd::Finite(_), PeriodEnd::Unbounded) => other.union(*self),
            (PeriodEnd::Finite(self_end), PeriodEnd::Finite(other_end)) => {
                if other_end < self.start {
                    smallvec::smallvec![*self, other]
                } else if other_end <= self_end {
                    // `other` ends inside `self` (or exactly at its bounds).
                    smallvec::smallvec![Self::bounded(min(self.start, other.start), self_end)]
                } else if other.start <= self_end {
                    if other.start <= self.start {
                        // `other` subsumes `self`.
                        smallvec::smallvec![other]
                    } else {
                        smallvec::smallvec![Self::bounded(self.start, other_end)]
                    }
                } else {
                    smallvec::smallvec![*self, other]
                }
            }
        }
    }

    /// Calculates the intersection of two periods.
    ///
    /// Returns `None` when the operands are disjoint. Operands that only
    /// share an endpoint value intersect in the degenerate single-point
    /// period.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::Period;
    /// let open = Period::new(30i64, -1).unwrap();
    /// let p = Period::new(25i64, 35).unwrap();
    /// assert_eq!(open.intersection(p), Some(Period::new(30i64, 35).unwrap()));
    ///
    /// let a = Period::new(10i64, 20).unwrap();
    /// let b = Period::new(20i64, 30).unwrap();
    /// assert_eq!(a.intersection(b), Some(Period::new(20i64, 20).unwrap()));
    /// assert_eq!(a.intersection(Period::new(25i64, 30).unwrap()), None);
    /// ```
    pub fn intersection(&self, other: Self) -> Option<Self> {
        match (self.end, other.end) {
            (PeriodEnd::Unbounded, PeriodEnd::Unbounded) => {
                Some(Self::unbounded_from(max(self.start, other.start)))
            }
            (PeriodEnd::Unbounded, PeriodEnd::Finite(other_end)) => {
                if other_end < self.start {
                    None
                } else {
                    Some(Self::bounded(max(self.start, other.start), other_end))
                }
            }
            (PeriodEnd::Finite(_), PeriodEnd::Unbounded) => other.intersection(*self),
            (PeriodEnd::Finite(self_end), PeriodEnd::Finite(other_end)) => {
                let start = max(self.start, other.start);
                let end = min(self_end, other_end);
                if start <= end {
                    Some(Self::bounded(start, end))
                } else {
                    None
                }
            }
        }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 0 periods: if `other` fully covers `self`.
    /// * 1 period: if `other` clips one side of `self` or is disjoint.
    /// * 2 periods: if `other` splits `self` into two remaining pieces.
    ///
    /// A piece whose bounds would be degenerate (`start > end`) simply does
    /// not exist; the operation never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::Period;
    /// let b = Period::new(30i64, 40).unwrap();
    /// let a = Period::new(35i64, 45).unwrap();
    /// assert_eq!(&b.difference(a)[..], &[Period::new(30i64, 34).unwrap()]);
    ///
    /// let wide = Period::new(10i64, 60).unwrap();
    /// let hole = Period::new(30i64, 40).unwrap();
    /// let split = wide.difference(hole);
    /// assert_eq!(split.len(), 2);
    /// assert_eq!(split[0], Period::new(10i64, 29).unwrap());
    /// assert_eq!(split[1], Period::new(41i64, 60).unwrap());
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<Self, 2> {
        let one = T::one();
        match (self.end, other.end) {
            (_, PeriodEnd::Unbounded) => {
                // Everything from `other.start` on is removed; only the part
                // of `self` strictly before it can survive.
                if self.start >= other.start {
                    return SmallVec::new();
                }
                let end = match self.end {
                    PeriodEnd::Unbounded => other.start - one,
                    PeriodEnd::Finite(self_end) => min(self_end, other.start - one),
                };
                smallvec::smallvec![Self::bounded(self.start, end)]
            }
            (PeriodEnd::Unbounded, PeriodEnd::Finite(other_end)) => {
                if self.start > other_end {
                    return smallvec::smallvec![*self];
                }
                let mut pieces = SmallVec::new();
                if self.start < other.start {
                    pieces.push(Self::bounded(self.start, other.start - one));
                }
                pieces.push(Self::unbounded_from(other_end + one));
                pieces
            }
            (PeriodEnd::Finite(self_end), PeriodEnd::Finite(other_end)) => {
                if self_end < other.start || self.start > other_end {
                    return smallvec::smallvec![*self];
                }
                let mut pieces = SmallVec::new();
                if self.start < other.start {
                    pieces.push(Self::bounded(self.start, other.start - one));
                }
                if self_end > other_end {
                    pieces.push(Self::bounded(other_end + one, self_end));
                }
                pieces
            }
        }
    }
}

impl<T> BitAnd for Period<T>
where
    T: PrimInt + Signed,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for Period<T>
where
    T: PrimInt + Signed,
{
    type Output = SmallVec<Self, 2>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> Sub for Period<T>
where
    T: PrimInt + Signed,
{
    type Output = SmallVec<Self, 2>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T> std::fmt::Display for Period<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            PeriodEnd::Finite(end) => write!(f, "[{}, {}]", self.start, end),
            PeriodEnd::Unbounded => write!(f, "[{}, +inf)", self.start),
        }
    }
}
