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

//! # Tempora
//!
//! An algebra for closed integer time periods. A [`Period`] is a closed
//! interval `[start, end]` over the non-negative integers whose upper
//! endpoint may be unbounded; a [`PeriodSet`] is the canonical (ordered,
//! pairwise non-mergeable) form of a union of periods; the [`grid`] module
//! aligns periods and sets to a fixed-size bucket grid.
//!
//! ## Modules
//!
//! - `period`: the [`Period`] value type with validated construction, the
//!   [`PeriodEnd`] two-variant endpoint, point containment, and the pairwise
//!   union / intersection / difference operators (also available through the
//!   `|`, `&`, and `-` operators).
//! - `set`: [`PeriodSet`], built by folding periods to a merge fixed point;
//!   set-level union, intersection, difference, and complement.
//! - `grid`: bucket partitioning and minimal grid-aligned supersets.
//!
//! ## Design
//!
//! Validation happens once, at period construction; every operator on
//! constructed values is total and returns an empty result rather than an
//! error when the mathematical answer is the empty set. All values are
//! immutable and all operators allocate fresh outputs, so everything here is
//! safe to use from multiple threads without locking.
//!
//! ## Example
//!
//! ```rust
//! use tempora::{grid, Period, PeriodSet};
//!
//! let busy: PeriodSet<i64> = Period::many(&[9, 12, 14, 17])
//!     .unwrap()
//!     .into_iter()
//!     .collect();
//! let day: PeriodSet<i64> = Period::many(&[0, 23]).unwrap().into_iter().collect();
//!
//! let free = day.difference(&busy);
//! assert_eq!(free.as_slice(), &Period::many(&[0i64, 8, 13, 13, 18, 23]).unwrap()[..]);
//!
//! let by_shift = grid::partition_set(&busy, 8);
//! assert_eq!(by_shift[&8].len(), 2);
//! assert_eq!(by_shift[&16], vec![Period::new(16i64, 17).unwrap()]);
//! ```

pub mod grid;
pub mod period;
pub mod set;

pub use period::{Period, PeriodEnd, PeriodError};
pub use set::PeriodSet;
