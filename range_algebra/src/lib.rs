//! This crate provides an algebra on ranges of ordered values.
//! A range includes all values between its two boundaries, each of which
//! can be closed, open or unbounded.
//!
//!  |Range   |Constructor                    |Description
//!  |--------|-------------------------------|--------------
//!  | `[A,B]`|[`Range::new_closed_closed`]   |left-closed, right-closed
//!  | `[A,B)`|[`Range::new_closed_open`]     |left-closed, right-open
//!  | `(A,B)`|[`Range::new_open_open`]       |left-open, right-open
//!  | `(A,B]`|[`Range::new_open_closed`]     |left-open, right-closed
//!  | `(,B]` |[`Range::new_unbounded_closed`]|left-unbounded, right-closed
//!  | `(,B)` |[`Range::new_unbounded_open`]  |left-unbounded, right-open
//!  | `[A,)` |[`Range::new_closed_unbounded`]|left-closed, right-unbounded
//!  | `(A,)` |[`Range::new_open_unbounded`]  |left-open, right-unbounded
//!  | `(,)`  |[`Range::doubly_unbounded`]    |doubly unbounded
//!  | `[A,A]`|[`Range::new_single`]          |a single value
//!  | `empty`|[`Range::empty`]               |empty
//!
//! These constructors use the natural ordering of the values.  Every range
//! is in fact parameterized by an [`OrderingContext`], which only needs to
//! provide `less_than` and `equals`.  Use [`make_range`] and
//! [`RangeOptions`] to pick another ordering ([`Tolerance`] for floats,
//! or any pair of functions via [`FnOrdering`]), to name the range, or to
//! restrict the valid boundary values with a [`Validator`].
//!
//! Binary operations only combine ranges whose orderings are compatible,
//! and report a [`RangeError::IncompatibleRange`] otherwise.
//!
//! ```text
//!        [------ A ------]
//!               [----- B -------]
//!
//!        [----------------------]     Convex hull
//!        [------)                     Difference (A - B)
//!                        (------]     Difference (B - A)
//!               [--------]            Intersection (A & B)
//!        [----------------------]     Union (A | B)
//! ```
//!
//! When the two ranges do not overlap:
//! ```text
//!      [---A---]   [----B----]
//!
//!      [---------------------]    Convex hull
//!      [-------]                  Difference (A - B)
//!                                 Intersection (A & B) is empty
//!      [-------]   [---------]    Union (A | B), two ranges
//! ```
//!
//! Ranges can also be converted to and from a [`CompactRange`] or a
//! [`RangeRecord`].

mod algebra;
mod boundary;
mod encoding;
mod errors;
mod ordering;
mod range;
pub mod validators;

pub use crate::algebra::{belongs, union_all};
pub use crate::boundary::{
    compare_lower_boundaries, compare_lower_to_upper, compare_upper_boundaries,
    resolve_lower, resolve_upper, value_within_lower, value_within_upper, Boundary,
    Resolution, Side,
};
pub use crate::encoding::{
    is_range, is_range_options, is_range_record, CompactRange, RangeRecord,
};
pub use crate::errors::RangeError;
pub use crate::ordering::{FnOrdering, Natural, OrderingContext, Tolerance, NATURAL};
pub use crate::range::{make_range, BoundaryOptions, Range, RangeOptions, Validator};
