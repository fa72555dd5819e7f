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

//! Alignment of periods to a fixed-size integer grid.
//!
//! For a positive `interval`, every point `x >= 0` belongs to the bucket
//! whose aligned span is `[floor(x / interval) * interval, ... + interval - 1]`.
//! Maps returned here are keyed by that aligned lower boundary, and use
//! `BTreeMap` so bucket traversal follows time order.

use crate::period::{Period, PeriodEnd};
use crate::set::PeriodSet;
use num_traits::{PrimInt, Signed};
use std::collections::BTreeMap;

#[inline]
fn bucket_floor<T: PrimInt + Signed>(point: T, interval: T) -> T {
    point / interval * interval
}

#[inline]
fn check_interval<T: PrimInt + Signed>(interval: T) {
    assert!(
        interval > T::zero(),
        "grid interval must be a positive integer"
    );
}

/// Splits `period` at every grid boundary it crosses.
///
/// Returns one entry per bucket touched, keyed by the bucket's aligned lower
/// boundary; the first and last pieces are clipped to the period's true
/// bounds. An unbounded period is not split: it is assigned whole to the
/// bucket containing its start.
///
/// # Panics
///
/// Panics if `interval <= 0`.
///
/// # Examples
///
/// ```rust
/// # use tempora::{grid, Period};
/// let parts = grid::partition(Period::new(12i64, 27).unwrap(), 10);
/// assert_eq!(parts[&10], Period::new(12i64, 19).unwrap());
/// assert_eq!(parts[&20], Period::new(20i64, 27).unwrap());
/// assert_eq!(parts.len(), 2);
/// ```
pub fn partition<T>(period: Period<T>, interval: T) -> BTreeMap<T, Period<T>>
where
    T: PrimInt + Signed,
{
    check_interval(interval);
    let one = T::one();
    let mut buckets = BTreeMap::new();
    let first = bucket_floor(period.start(), interval);
    match period.end() {
        PeriodEnd::Unbounded => {
            buckets.insert(first, period);
        }
        PeriodEnd::Finite(end) => {
            let last = bucket_floor(end, interval);
            if first == last {
                buckets.insert(first, period);
                return buckets;
            }
            buckets.insert(first, Period::bounded(period.start(), first + interval - one));
            let mut boundary = first + interval;
            while boundary < last {
                buckets.insert(boundary, Period::bounded(boundary, boundary + interval - one));
                boundary = boundary + interval;
            }
            buckets.insert(last, Period::bounded(last, end));
        }
    }
    buckets
}

/// Returns the minimal grid-aligned period enclosing `period`.
///
/// The start is rounded down to its bucket boundary; a finite end is rounded
/// up to the last point of its bucket, and an unbounded end stays unbounded.
///
/// # Panics
///
/// Panics if `interval <= 0`.
///
/// # Examples
///
/// ```rust
/// # use tempora::{grid, Period};
/// let hull = grid::min_superset(Period::new(12i64, 27).unwrap(), 10);
/// assert_eq!(hull, Period::new(10i64, 29).unwrap());
/// ```
pub fn min_superset<T>(period: Period<T>, interval: T) -> Period<T>
where
    T: PrimInt + Signed,
{
    check_interval(interval);
    let start = bucket_floor(period.start(), interval);
    match period.end() {
        PeriodEnd::Unbounded => Period::unbounded_from(start),
        PeriodEnd::Finite(end) => {
            Period::bounded(start, bucket_floor(end, interval) + interval - T::one())
        }
    }
}

/// Partitions every member of `set`, grouping the pieces by bucket.
///
/// Pieces landing in the same bucket are accumulated, not merged; members of
/// a canonical set are disjoint, so the pieces within a bucket are too.
///
/// # Panics
///
/// Panics if `interval <= 0`.
pub fn partition_set<T>(set: &PeriodSet<T>, interval: T) -> BTreeMap<T, Vec<Period<T>>>
where
    T: PrimInt + Signed,
{
    check_interval(interval);
    let mut buckets: BTreeMap<T, Vec<Period<T>>> = BTreeMap::new();
    for &p in set {
        for (key, piece) in partition(p, interval) {
            buckets.entry(key).or_default().push(piece);
        }
    }
    buckets
}

/// Returns the canonical union of the member-wise minimal supersets of `set`.
///
/// Extending members outward to bucket boundaries can make previously
/// separate members overlap inside a shared bucket, so the results are
/// folded back into canonical form.
///
/// # Panics
///
/// Panics if `interval <= 0`.
///
/// # Examples
///
/// ```rust
/// # use tempora::{grid, Period, PeriodSet};
/// let set: PeriodSet<i64> = Period::many(&[12, 27, 29, 45]).unwrap().into_iter().collect();
/// let hull = grid::min_superset_set(&set, 10);
/// assert_eq!(hull.as_slice(), &[Period::new(10i64, 49).unwrap()]);
/// ```
pub fn min_superset_set<T>(set: &PeriodSet<T>, interval: T) -> PeriodSet<T>
where
    T: PrimInt + Signed,
{
    check_interval(interval);
    set.iter().map(|&p| min_superset(p, interval)).collect()
}
