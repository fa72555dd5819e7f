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

use crate::period::{Period, PeriodEnd};
use num_traits::{PrimInt, Signed};

/// A canonical set of periods.
///
/// Entries are kept ascending by start and pairwise non-mergeable: no two
/// entries overlap or share an endpoint value, so the sequence is the unique
/// minimal representation of the union it denotes. Entries may still be
/// integer-adjacent (`[10, 19]` next to `[20, 30]`); only periods that share
/// a point are merged.
///
/// All set operators return freshly allocated sets and never alias input
/// storage, so values can be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// # use tempora::{Period, PeriodSet};
/// let set: PeriodSet<i64> = Period::many(&[40, 50, 10, 20, 15, 45])
///     .unwrap()
///     .into_iter()
///     .collect();
/// // The three inputs chain together through the overlapping middle period.
/// assert_eq!(set.as_slice(), &[Period::new(10i64, 50).unwrap()]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PeriodSet<T>
where
    T: PrimInt + Signed,
{
    periods: Vec<Period<T>>,
}

impl<T> PeriodSet<T>
where
    T: PrimInt + Signed,
{
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            periods: Vec::new(),
        }
    }

    /// Returns the number of periods in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns `true` if the set contains no periods.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns the periods in ascending start order.
    #[inline]
    pub fn as_slice(&self) -> &[Period<T>] {
        &self.periods
    }

    /// Iterates over the periods in ascending start order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Period<T>> {
        self.periods.iter()
    }

    /// Returns `true` if any member period contains `point`.
    pub fn contains_point(&self, point: T) -> bool {
        self.periods.iter().any(|p| p.contains(point))
    }

    /// Folds `period` into the set, merging to a fixed point.
    ///
    /// A single merge can make the merged period touch another existing
    /// entry, so the scan repeats with the grown period until no entry
    /// merges; the survivor is then placed at its sorted position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::{Period, PeriodSet};
    /// let mut set = PeriodSet::new();
    /// set.insert(Period::new(15i64, 30).unwrap());
    /// set.insert(Period::new(40i64, 50).unwrap());
    /// set.insert(Period::new(30i64, 40).unwrap());
    /// assert_eq!(set.as_slice(), &[Period::new(15i64, 50).unwrap()]);
    /// ```
    pub fn insert(&mut self, period: Period<T>) {
        let mut pending = period;
        'merge: loop {
            for i in 0..self.periods.len() {
                let merged = pending.union(self.periods[i]);
                if merged.len() == 1 {
                    self.periods.remove(i);
                    pending = merged[0];
                    continue 'merge;
                }
            }
            break;
        }
        let pos = self
            .periods
            .partition_point(|q| q.start() < pending.start());
        self.periods.insert(pos, pending);
    }

    /// Calculates the union of two sets.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for &p in self.periods.iter().chain(other.periods.iter()) {
            result.insert(p);
        }
        result
    }

    /// Calculates the intersection of two sets.
    ///
    /// Every pairwise intersection of members is collected; because both
    /// inputs are canonical, the pieces are disjoint and non-mergeable and
    /// the result needs no further folding.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut periods = Vec::new();
        for &a in &self.periods {
            for &b in &other.periods {
                if let Some(p) = a.intersection(b) {
                    periods.push(p);
                }
            }
        }
        periods.sort_unstable_by_key(|p| p.start());
        Self { periods }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// Each member of `other` is subtracted in turn from the running list of
    /// surviving pieces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::{Period, PeriodSet};
    /// let b: PeriodSet<i64> = Period::many(&[10, 60]).unwrap().into_iter().collect();
    /// let a: PeriodSet<i64> = Period::many(&[20, 30, 50, 55]).unwrap().into_iter().collect();
    /// let d = b.difference(&a);
    /// assert_eq!(d.as_slice(), &Period::many(&[10i64, 19, 31, 49, 56, 60]).unwrap()[..]);
    /// ```
    pub fn difference(&self, other: &Self) -> Self {
        let mut pieces = self.periods.clone();
        for &a in &other.periods {
            pieces = pieces.iter().flat_map(|b| b.difference(a)).collect();
        }
        Self { periods: pieces }
    }

    /// Calculates the complement of the set: the bounded gaps between
    /// consecutive members.
    ///
    /// No gap is emitted after a trailing unbounded period, and the
    /// complement of an empty set is empty — no universal bound is assumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora::{Period, PeriodSet};
    /// let set: PeriodSet<i64> = Period::many(&[10, 20, 40, 50, 70, -1])
    ///     .unwrap()
    ///     .into_iter()
    ///     .collect();
    /// let gaps = set.complement();
    /// assert_eq!(gaps.as_slice(), &Period::many(&[21i64, 39, 51, 69]).unwrap()[..]);
    /// ```
    pub fn complement(&self) -> Self {
        let one = T::one();
        let mut gaps = Vec::new();
        for pair in self.periods.windows(2) {
            if let PeriodEnd::Finite(end) = pair[0].end() {
                let gap_start = end + one;
                let gap_end = pair[1].start() - one;
                if gap_start <= gap_end {
                    gaps.push(Period::bounded(gap_start, gap_end));
                }
            }
        }
        Self { periods: gaps }
    }
}

impl<T> FromIterator<Period<T>> for PeriodSet<T>
where
    T: PrimInt + Signed,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Period<T>>,
    {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<Period<T>> for PeriodSet<T>
where
    T: PrimInt + Signed,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Period<T>>,
    {
        for p in iter {
            self.insert(p);
        }
    }
}

impl<'a, T> IntoIterator for &'a PeriodSet<T>
where
    T: PrimInt + Signed,
{
    type Item = &'a Period<T>;
    type IntoIter = std::slice::Iter<'a, Period<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

impl<T> IntoIterator for PeriodSet<T>
where
    T: PrimInt + Signed,
{
    type Item = Period<T>;
    type IntoIter = std::vec::IntoIter<Period<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.into_iter()
    }
}

impl<T> std::fmt::Display for PeriodSet<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, p) in self.periods.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(start: i64, end: i64) -> Period<i64> {
        Period::new(start, end).unwrap()
    }

    fn set(bounds: &[i64]) -> PeriodSet<i64> {
        Period::many(bounds).unwrap().into_iter().collect()
    }

    #[test]
    fn test_insert_into_empty() {
        let mut s = PeriodSet::new();
        s.insert(p(10, 20));
        assert_eq!(s.as_slice(), &[p(10, 20)]);
    }

    #[test]
    fn test_insert_keeps_disjoint_sorted() {
        let s = set(&[40, 50, 10, 20, 25, 30]);
        assert_eq!(s.as_slice(), &[p(10, 20), p(25, 30), p(40, 50)]);
    }

    #[test]
    fn test_insert_merges_overlap() {
        let s = set(&[10, 20, 15, 30]);
        assert_eq!(s.as_slice(), &[p(10, 30)]);
    }

    #[test]
    fn test_insert_cascading_merge() {
        let mut s = set(&[15, 30, 40, 50]);
        s.insert(p(30, 40));
        assert_eq!(s.as_slice(), &[p(15, 50)]);
    }

    #[test]
    fn test_insert_adjacent_not_merged() {
        let s = set(&[10, 19, 20, 30]);
        assert_eq!(s.as_slice(), &[p(10, 19), p(20, 30)]);
    }

    #[test]
    fn test_insert_unbounded_absorbs() {
        let mut s = set(&[10, 20, 40, 50]);
        s.insert(p(35, -1));
        assert_eq!(s.as_slice(), &[p(10, 20), p(35, -1)]);
    }

    #[test]
    fn test_union_idempotent() {
        let a = set(&[10, 20, 40, 50]);
        let canonical = a.union(&PeriodSet::new());
        assert_eq!(a.union(&a), canonical);
    }

    #[test]
    fn test_union_merges_across_sets() {
        let a = set(&[10, 20, 40, 50]);
        let b = set(&[20, 40]);
        assert_eq!(a.union(&b).as_slice(), &[p(10, 50)]);
    }

    #[test]
    fn test_intersection() {
        let a = set(&[0, 100, 200, 300]);
        let b = set(&[50, 250]);
        let i = a.intersection(&b);
        assert_eq!(i.as_slice(), &[p(50, 100), p(200, 250)]);
    }

    #[test]
    fn test_intersection_empty() {
        let a = set(&[0, 10]);
        let b = set(&[20, 30]);
        assert!(a.intersection(&b).is_empty());
        assert!(a.intersection(&PeriodSet::new()).is_empty());
    }

    #[test]
    fn test_intersection_point_touch() {
        let a = set(&[0, 10, 20, 30]);
        let b = set(&[10, 20]);
        let i = a.intersection(&b);
        assert_eq!(i.as_slice(), &[p(10, 10), p(20, 20)]);
    }

    #[test]
    fn test_difference() {
        let b = set(&[10, 60]);
        let a = set(&[20, 30, 50, 55]);
        let d = b.difference(&a);
        assert_eq!(d.as_slice(), &[p(10, 19), p(31, 49), p(56, 60)]);
    }

    #[test]
    fn test_difference_empty_subtrahend_copies() {
        let b = set(&[10, 20, 30, 40]);
        let d = b.difference(&PeriodSet::new());
        assert_eq!(d, b);
    }

    #[test]
    fn test_difference_unbounded() {
        let b = set(&[10, -1]);
        let a = set(&[30, -1]);
        assert_eq!(b.difference(&a).as_slice(), &[p(10, 29)]);
    }

    #[test]
    fn test_complement_gaps() {
        let s = set(&[10, 20, 40, 50]);
        assert_eq!(s.complement().as_slice(), &[p(21, 39)]);
    }

    #[test]
    fn test_complement_adjacent_entries() {
        // [10, 19] and [20, 30] leave no integer between them.
        let s = set(&[10, 19, 20, 30]);
        assert!(s.complement().is_empty());
        // [10, 18] and [20, 30] leave exactly the point 19.
        let t = set(&[10, 18, 20, 30]);
        assert_eq!(t.complement().as_slice(), &[p(19, 19)]);
    }

    #[test]
    fn test_complement_trailing_unbounded() {
        let s = set(&[10, 20, 40, -1]);
        assert_eq!(s.complement().as_slice(), &[p(21, 39)]);
        let only_open = set(&[10, -1]);
        assert!(only_open.complement().is_empty());
    }

    #[test]
    fn test_complement_empty() {
        assert!(PeriodSet::<i64>::new().complement().is_empty());
    }

    #[test]
    fn test_complement_partitions_span() {
        // Within the spanned range every point is covered by exactly one of
        // the set and its complement. The two stay separate entries under
        // union because a gap never shares a point with its neighbors.
        let s = set(&[10, 20, 40, 50, 70, 80]);
        let gaps = s.complement();
        assert!(s.intersection(&gaps).is_empty());
        for x in 10..=80 {
            assert_ne!(s.contains_point(x), gaps.contains_point(x), "point {x}");
        }
    }

    #[test]
    fn test_bounded_complement_involution_via_difference() {
        // With a bounding set B, "complement within B" is B - a, and
        // subtracting twice recovers a: B - (B - a) == a.
        let a = set(&[10, 20, 40, 50]);
        let bound = set(&[0, 100]);
        let complement_in_bound = bound.difference(&a);
        assert_eq!(
            complement_in_bound.as_slice(),
            &[p(0, 9), p(21, 39), p(51, 100)]
        );
        assert_eq!(bound.difference(&complement_in_bound), a);
    }

    #[test]
    fn test_contains_point() {
        let s = set(&[10, 20, 40, -1]);
        assert!(s.contains_point(15));
        assert!(s.contains_point(100));
        assert!(!s.contains_point(30));
        assert!(!s.contains_point(-1));
    }

    #[test]
    fn test_display() {
        let s = set(&[10, 20, 40, -1]);
        assert_eq!(s.to_string(), "{[10, 20], [40, +inf)}");
        assert_eq!(PeriodSet::<i64>::new().to_string(), "{}");
    }
}
