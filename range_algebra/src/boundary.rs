use crate::ordering::OrderingContext;
use std::cmp::Ordering;

/// Which end of a range a boundary belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Lower,
    Upper,
}

impl ::core::fmt::Display for Side {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            Side::Lower => write!(f, "lower"),
            Side::Upper => write!(f, "upper"),
        }
    }
}

/// One edge of a range: an optional value (None means unbounded on that
/// side) and whether the value itself is excluded from the range.
///
/// An unbounded boundary is never open: it does not restrict membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Boundary<T> {
    value: Option<T>,
    open: bool,
}

impl<T> Boundary<T> {
    pub fn new(value: Option<T>, open: bool) -> Self {
        let open = open && value.is_some();
        Self { value, open }
    }

    /// A boundary that includes its value
    pub fn closed(value: T) -> Self {
        Self {
            value: Some(value),
            open: false,
        }
    }

    /// A boundary that excludes its value
    pub fn open(value: T) -> Self {
        Self {
            value: Some(value),
            open: true,
        }
    }

    pub fn unbounded() -> Self {
        Self {
            value: None,
            open: false,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_unbounded(&self) -> bool {
        self.value.is_none()
    }

    /// Converts from `Boundary<T>` to `Boundary<&T>`
    pub fn as_ref(&self) -> Boundary<&T> {
        Boundary {
            value: self.value.as_ref(),
            open: self.open,
        }
    }
}

impl<T: Clone> Boundary<T> {
    /// Same value, opposite openness.  The upper boundary `v)` starts where
    /// the lower boundary `[v` ends, and so on.
    pub(crate) fn flipped(&self) -> Self {
        Boundary::new(self.value.clone(), !self.open)
    }
}

/// Where a boundary sits on the line of values, so that lower and upper
/// boundaries can be compared with each other.
///
/// LeftOf(v) is a conceptual point halfway between v and its predecessor,
/// RightOf(v) is halfway between v and its successor.  A closed lower bound
/// and an open upper bound are both LeftOf their value.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Cut<'a, T> {
    LeftUnbounded,
    LeftOf(&'a T),
    RightOf(&'a T),
    RightUnbounded,
}

impl<'a, T> Cut<'a, T> {
    pub(crate) fn lower(value: Option<&'a T>, open: bool) -> Self {
        match (value, open) {
            (None, _) => Cut::LeftUnbounded,
            (Some(v), false) => Cut::LeftOf(v),
            (Some(v), true) => Cut::RightOf(v),
        }
    }

    pub(crate) fn upper(value: Option<&'a T>, open: bool) -> Self {
        match (value, open) {
            (None, _) => Cut::RightUnbounded,
            (Some(v), false) => Cut::RightOf(v),
            (Some(v), true) => Cut::LeftOf(v),
        }
    }

    pub(crate) fn of_lower(boundary: &'a Boundary<T>) -> Self {
        Cut::lower(boundary.value.as_ref(), boundary.open)
    }

    pub(crate) fn of_upper(boundary: &'a Boundary<T>) -> Self {
        Cut::upper(boundary.value.as_ref(), boundary.open)
    }

    pub(crate) fn compare<O: OrderingContext<T>>(
        &self,
        other: &Self,
        ord: &O,
    ) -> Option<Ordering> {
        match (self, other) {
            (Cut::LeftUnbounded, Cut::LeftUnbounded)
            | (Cut::RightUnbounded, Cut::RightUnbounded) => Some(Ordering::Equal),
            (Cut::LeftUnbounded, _) | (_, Cut::RightUnbounded) => {
                Some(Ordering::Less)
            }
            (_, Cut::LeftUnbounded) | (Cut::RightUnbounded, _) => {
                Some(Ordering::Greater)
            }
            (Cut::LeftOf(a), Cut::LeftOf(b))
            | (Cut::RightOf(a), Cut::RightOf(b)) => ord.compare(a, b),
            (Cut::LeftOf(a), Cut::RightOf(b)) => {
                ord.compare(a, b).map(|o| o.then(Ordering::Less))
            }
            (Cut::RightOf(a), Cut::LeftOf(b)) => {
                ord.compare(a, b).map(|o| o.then(Ordering::Greater))
            }
        }
    }

    /// Strictly before other.  False when the two cannot be compared.
    pub(crate) fn lt<O: OrderingContext<T>>(&self, other: &Self, ord: &O) -> bool {
        matches!(self.compare(other, ord), Some(Ordering::Less))
    }

    /// Before or at the same place as other.
    pub(crate) fn le<O: OrderingContext<T>>(&self, other: &Self, ord: &O) -> bool {
        matches!(self.compare(other, ord), Some(Ordering::Less | Ordering::Equal))
    }
}

/// Whether `value` satisfies the lower boundary.
///
/// A None value stands for the lower end of another unbounded range: it only
/// satisfies a lower boundary that is itself unbounded.
pub fn value_within_lower<T, O: OrderingContext<T>>(
    ord: &O,
    value: Option<&T>,
    lower: &Boundary<T>,
) -> bool {
    match (value, &lower.value) {
        (None, bound) => bound.is_none() && !lower.open,
        (Some(_), None) => true,
        (Some(v), Some(b)) => {
            if lower.open {
                ord.less_than(b, v)
            } else {
                !ord.less_than(v, b)
            }
        }
    }
}

/// Whether `value` satisfies the upper boundary.  See
/// [`value_within_lower`] for the meaning of a None value.
pub fn value_within_upper<T, O: OrderingContext<T>>(
    ord: &O,
    value: Option<&T>,
    upper: &Boundary<T>,
) -> bool {
    match (value, &upper.value) {
        (None, bound) => bound.is_none() && !upper.open,
        (Some(_), None) => true,
        (Some(v), Some(b)) => {
            if upper.open {
                ord.less_than(v, b)
            } else {
                !ord.less_than(b, v)
            }
        }
    }
}

/// Compares two lower boundaries.  `Less` means `a` lets more values in.
/// For equal values, a closed boundary is before an open one.
pub fn compare_lower_boundaries<T, O: OrderingContext<T>>(
    ord: &O,
    a: &Boundary<T>,
    b: &Boundary<T>,
) -> Option<Ordering> {
    Cut::of_lower(a).compare(&Cut::of_lower(b), ord)
}

/// Compares two upper boundaries.  `Greater` means `a` lets more values in.
/// For equal values, an open boundary is before a closed one.
pub fn compare_upper_boundaries<T, O: OrderingContext<T>>(
    ord: &O,
    a: &Boundary<T>,
    b: &Boundary<T>,
) -> Option<Ordering> {
    Cut::of_upper(a).compare(&Cut::of_upper(b), ord)
}

/// Compares a lower boundary with an upper boundary.  `Less` means that
/// some values satisfy both; `Equal` that they touch without sharing any
/// value (as in `[5` and `5)`).
pub fn compare_lower_to_upper<T, O: OrderingContext<T>>(
    ord: &O,
    lower: &Boundary<T>,
    upper: &Boundary<T>,
) -> Option<Ordering> {
    Cut::of_lower(lower).compare(&Cut::of_upper(upper), ord)
}

/// How two boundaries on the same side are merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Keep the most restrictive boundary.  For equal values the result is
    /// open if either boundary is open.
    Intersection,

    /// Keep the least restrictive boundary.  For equal values the result is
    /// open only if both boundaries are open.
    Union,
}

fn resolve<'a, T>(
    order: Option<Ordering>,
    a: &'a Boundary<T>,
    b: &'a Boundary<T>,
    keep_larger: bool,
) -> &'a Boundary<T> {
    match (order, keep_larger) {
        (Some(Ordering::Less), true) | (Some(Ordering::Greater), false) => b,
        _ => a,
    }
}

/// The dominant lower boundary of `a` and `b`
pub fn resolve_lower<T: Clone, O: OrderingContext<T>>(
    ord: &O,
    a: &Boundary<T>,
    b: &Boundary<T>,
    resolution: Resolution,
) -> Boundary<T> {
    let order = compare_lower_boundaries(ord, a, b);
    resolve(order, a, b, resolution == Resolution::Intersection).clone()
}

/// The dominant upper boundary of `a` and `b`
pub fn resolve_upper<T: Clone, O: OrderingContext<T>>(
    ord: &O,
    a: &Boundary<T>,
    b: &Boundary<T>,
    resolution: Resolution,
) -> Boundary<T> {
    let order = compare_upper_boundaries(ord, a, b);
    resolve(order, a, b, resolution == Resolution::Union).clone()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ordering::{Tolerance, NATURAL};

    #[test]
    fn test_new() {
        let b = Boundary::new(Some(3), true);
        assert_eq!(b.value(), Some(&3));
        assert!(b.is_open());
        assert!(!b.is_unbounded());

        //  open flag is meaningless without a value
        let b = Boundary::<i32>::new(None, true);
        assert!(!b.is_open());
        assert!(b.is_unbounded());
        assert_eq!(b, Boundary::unbounded());

        assert_eq!(Boundary::closed(2).flipped(), Boundary::open(2));
        assert_eq!(Boundary::open(2).flipped(), Boundary::closed(2));
        assert_eq!(Boundary::open(2).as_ref(), Boundary::open(&2));
        assert_eq!(Boundary::closed(2).into_value(), Some(2));
    }

    #[test]
    fn test_value_within() {
        let closed = Boundary::closed(5);
        let open = Boundary::open(5);
        let unbounded = Boundary::unbounded();

        assert!(value_within_lower(&NATURAL, Some(&5), &closed));
        assert!(value_within_lower(&NATURAL, Some(&6), &closed));
        assert!(!value_within_lower(&NATURAL, Some(&4), &closed));
        assert!(!value_within_lower(&NATURAL, Some(&5), &open));
        assert!(value_within_lower(&NATURAL, Some(&6), &open));
        assert!(value_within_lower(&NATURAL, Some(&-1000), &unbounded));

        assert!(value_within_upper(&NATURAL, Some(&5), &closed));
        assert!(value_within_upper(&NATURAL, Some(&4), &closed));
        assert!(!value_within_upper(&NATURAL, Some(&6), &closed));
        assert!(!value_within_upper(&NATURAL, Some(&5), &open));
        assert!(value_within_upper(&NATURAL, Some(&4), &open));
        assert!(value_within_upper(&NATURAL, Some(&1000), &unbounded));

        //  an unbounded probe only matches an unbounded boundary
        assert!(value_within_lower(&NATURAL, None, &unbounded));
        assert!(!value_within_lower(&NATURAL, None, &closed));
        assert!(value_within_upper(&NATURAL, None, &unbounded));
        assert!(!value_within_upper(&NATURAL, None, &open));

        let tol = Tolerance::new(0.1);
        assert!(!value_within_lower(&tol, Some(&1.05), &Boundary::open(1.0)));
        assert!(value_within_lower(&tol, Some(&1.2), &Boundary::open(1.0)));
        assert!(value_within_upper(&tol, Some(&1.05), &Boundary::closed(1.0)));
    }

    #[test]
    fn test_compare() {
        let c5 = Boundary::closed(5);
        let o5 = Boundary::open(5);
        let c6 = Boundary::closed(6);
        let unbounded = Boundary::unbounded();

        assert_eq!(
            compare_lower_boundaries(&NATURAL, &c5, &o5),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_lower_boundaries(&NATURAL, &o5, &c6),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_lower_boundaries(&NATURAL, &unbounded, &c5),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_lower_boundaries(&NATURAL, &c5, &c5),
            Some(Ordering::Equal)
        );

        assert_eq!(
            compare_upper_boundaries(&NATURAL, &o5, &c5),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_upper_boundaries(&NATURAL, &unbounded, &c6),
            Some(Ordering::Greater)
        );

        // [5 vs 5]: one value in common
        assert_eq!(
            compare_lower_to_upper(&NATURAL, &c5, &c5),
            Some(Ordering::Less)
        );
        // [5 vs 5): touching
        assert_eq!(
            compare_lower_to_upper(&NATURAL, &c5, &o5),
            Some(Ordering::Equal)
        );
        // (5 vs 5]: touching
        assert_eq!(
            compare_lower_to_upper(&NATURAL, &o5, &c5),
            Some(Ordering::Equal)
        );
        // (5 vs 5): a gap
        assert_eq!(
            compare_lower_to_upper(&NATURAL, &o5, &o5),
            Some(Ordering::Greater)
        );
        assert_eq!(
            compare_lower_to_upper(&NATURAL, &unbounded, &unbounded),
            Some(Ordering::Less)
        );

        let nan = Boundary::closed(f64::NAN);
        assert_eq!(
            compare_lower_boundaries(&NATURAL, &nan, &Boundary::closed(1.0)),
            None
        );
    }

    #[test]
    fn test_resolve() {
        let c5 = Boundary::closed(5);
        let o5 = Boundary::open(5);
        let c6 = Boundary::closed(6);
        let unbounded = Boundary::unbounded();
        use Resolution::{Intersection, Union};

        assert_eq!(resolve_lower(&NATURAL, &c5, &c6, Intersection), c6);
        assert_eq!(resolve_lower(&NATURAL, &c6, &c5, Intersection), c6);
        assert_eq!(resolve_lower(&NATURAL, &c5, &c6, Union), c5);
        assert_eq!(resolve_lower(&NATURAL, &unbounded, &c6, Union), unbounded);
        assert_eq!(resolve_lower(&NATURAL, &unbounded, &c6, Intersection), c6);

        //  ties on the value
        assert_eq!(resolve_lower(&NATURAL, &c5, &o5, Intersection), o5);
        assert_eq!(resolve_lower(&NATURAL, &o5, &c5, Intersection), o5);
        assert_eq!(resolve_lower(&NATURAL, &c5, &o5, Union), c5);
        assert_eq!(resolve_lower(&NATURAL, &o5, &o5, Union), o5);
        assert_eq!(resolve_upper(&NATURAL, &c5, &o5, Intersection), o5);
        assert_eq!(resolve_upper(&NATURAL, &o5, &c5, Union), c5);
        assert_eq!(resolve_upper(&NATURAL, &o5, &o5, Union), o5);

        assert_eq!(resolve_upper(&NATURAL, &c5, &c6, Intersection), c5);
        assert_eq!(resolve_upper(&NATURAL, &c5, &c6, Union), c6);
        assert_eq!(resolve_upper(&NATURAL, &unbounded, &c6, Union), unbounded);
        assert_eq!(resolve_upper(&NATURAL, &c6, &unbounded, Intersection), c6);
    }
}
