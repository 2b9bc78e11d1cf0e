use std::cmp::Ordering;
use std::sync::Arc;

/// The comparison primitives that parameterize every range.
///
/// Only [`OrderingContext::less_than`] and [`OrderingContext::equals`] need
/// to be implemented.  All other comparisons are derived from those two, so
/// that a customized `equals` (for instance one with a tolerance, for
/// floats) never contradicts `greater_than` or `less_or_equal`.
///
/// Implementations must define a strict weak ordering: for any two
/// comparable values, exactly one of `less_than(a, b)`, `less_than(b, a)`
/// and `equals(a, b)` holds.  Ranges share their context between threads,
/// so the functions must be pure.
pub trait OrderingContext<T> {
    /// Strict order predicate.
    fn less_than(&self, a: &T, b: &T) -> bool;

    /// Equivalence predicate.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Whether the two contexts are provably the same ordering.  The algebra
    /// refuses to combine ranges whose contexts are not compatible.
    fn is_compatible(&self, _other: &Self) -> bool {
        true
    }

    fn greater_than(&self, a: &T, b: &T) -> bool {
        !(self.less_than(a, b) || self.equals(a, b))
    }

    fn less_or_equal(&self, a: &T, b: &T) -> bool {
        !self.greater_than(a, b)
    }

    fn greater_or_equal(&self, a: &T, b: &T) -> bool {
        !self.less_than(a, b)
    }

    /// Three-way comparison.  Returns None when the values cannot be
    /// compared (e.g. NaN with the natural ordering on floats).
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        if self.less_than(a, b) {
            Some(Ordering::Less)
        } else if self.equals(a, b) {
            Some(Ordering::Equal)
        } else if self.less_than(b, a) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    /// The smallest of the two values (the first one if they are equal)
    fn min<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.less_than(b, a) {
            b
        } else {
            a
        }
    }

    /// The largest of the two values (the first one if they are equal)
    fn max<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.less_than(a, b) {
            b
        } else {
            a
        }
    }
}

/// The ordering given by the `PartialOrd` and `PartialEq` implementations
/// of the value type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

/// The default ordering, usable wherever an ordering context is expected.
pub const NATURAL: Natural = Natural;

impl<T: PartialOrd> OrderingContext<T> for Natural {
    fn less_than(&self, a: &T, b: &T) -> bool {
        a < b
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// An ordering on `f64` where values closer than `epsilon` are considered
/// equal.
///
/// Note that such an equality is not transitive, so ranges whose bounds are
/// all further apart than `epsilon` behave best.
/// ```
/// use range_algebra::{OrderingContext, Tolerance};
/// let tol = Tolerance::new(0.001);
/// assert!(tol.equals(&1.0, &1.0005));
/// assert!(!tol.less_than(&1.0, &1.0005));
/// assert!(tol.less_than(&1.0, &1.1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl OrderingContext<f64> for Tolerance {
    fn less_than(&self, a: &f64, b: &f64) -> bool {
        a < b && !self.equals(a, b)
    }

    fn equals(&self, a: &f64, b: &f64) -> bool {
        // inf - inf is NaN
        a == b || (a - b).abs() <= self.epsilon
    }

    fn is_compatible(&self, other: &Self) -> bool {
        self.epsilon.to_bits() == other.epsilon.to_bits()
    }
}

enum Predicate<T> {
    /// The `==` of the value type
    ValueEq(fn(&T, &T) -> bool),
    Pointer(fn(&T, &T) -> bool),
    Shared(Arc<dyn Fn(&T, &T) -> bool + Send + Sync>),
}

impl<T> Predicate<T> {
    fn call(&self, a: &T, b: &T) -> bool {
        match self {
            Predicate::ValueEq(f) | Predicate::Pointer(f) => f(a, b),
            Predicate::Shared(f) => f(a, b),
        }
    }

    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Predicate::ValueEq(_), Predicate::ValueEq(_)) => true,
            (Predicate::Pointer(f), Predicate::Pointer(g)) => std::ptr::fn_addr_eq(*f, *g),
            (Predicate::Shared(f), Predicate::Shared(g)) => Arc::ptr_eq(f, g),
            (Predicate::ValueEq(_), Predicate::Pointer(_) | Predicate::Shared(_))
            | (Predicate::Pointer(_), Predicate::ValueEq(_) | Predicate::Shared(_))
            | (Predicate::Shared(_), Predicate::ValueEq(_) | Predicate::Pointer(_)) => false,
        }
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        match self {
            Predicate::ValueEq(f) => Predicate::ValueEq(*f),
            Predicate::Pointer(f) => Predicate::Pointer(*f),
            Predicate::Shared(f) => Predicate::Shared(Arc::clone(f)),
        }
    }
}

/// An ordering built from user-supplied functions.
///
/// Plain `fn` items are compared by address, so two orderings built from
/// the same functions are compatible.  Closures are shared through an
/// `Arc`, and only clones of the same `FnOrdering` are compatible.
/// ```
/// use range_algebra::{FnOrdering, OrderingContext};
/// fn by_len(a: &&str, b: &&str) -> bool {
///     a.len() < b.len()
/// }
/// let a = FnOrdering::from_fn(by_len);
/// assert!(a.is_compatible(&FnOrdering::from_fn(by_len)));
/// assert!(a.equals(&"ab", &"ab"));
/// ```
pub struct FnOrdering<T> {
    less_than: Predicate<T>,
    equals: Predicate<T>,
}

impl<T> FnOrdering<T> {
    pub fn new<L, E>(less_than: L, equals: E) -> Self
    where
        L: Fn(&T, &T) -> bool + Send + Sync + 'static,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            less_than: Predicate::Shared(Arc::new(less_than)),
            equals: Predicate::Shared(Arc::new(equals)),
        }
    }

    pub fn from_fns(less_than: fn(&T, &T) -> bool, equals: fn(&T, &T) -> bool) -> Self {
        Self {
            less_than: Predicate::Pointer(less_than),
            equals: Predicate::Pointer(equals),
        }
    }

    /// Use a custom strict order, but the type's own equality
    pub fn from_less_than<L>(less_than: L) -> Self
    where
        T: PartialEq,
        L: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            less_than: Predicate::Shared(Arc::new(less_than)),
            equals: Predicate::ValueEq(|a: &T, b: &T| a == b),
        }
    }

    /// Same as [`FnOrdering::from_less_than`], for a plain function
    pub fn from_fn(less_than: fn(&T, &T) -> bool) -> Self
    where
        T: PartialEq,
    {
        Self {
            less_than: Predicate::Pointer(less_than),
            equals: Predicate::ValueEq(|a: &T, b: &T| a == b),
        }
    }

    /// Replace the equality, keeping the strict order
    pub fn with_equals<E>(self, equals: E) -> Self
    where
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            less_than: self.less_than,
            equals: Predicate::Shared(Arc::new(equals)),
        }
    }

    pub fn with_equals_fn(self, equals: fn(&T, &T) -> bool) -> Self {
        Self {
            less_than: self.less_than,
            equals: Predicate::Pointer(equals),
        }
    }
}

impl<T> Clone for FnOrdering<T> {
    fn clone(&self) -> Self {
        Self {
            less_than: self.less_than.clone(),
            equals: self.equals.clone(),
        }
    }
}

impl<T> ::core::fmt::Debug for FnOrdering<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("FnOrdering").finish_non_exhaustive()
    }
}

impl<T> OrderingContext<T> for FnOrdering<T> {
    fn less_than(&self, a: &T, b: &T) -> bool {
        self.less_than.call(a, b)
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        self.equals.call(a, b)
    }

    fn is_compatible(&self, other: &Self) -> bool {
        self.less_than.same(&other.less_than) && self.equals.same(&other.equals)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::range::{make_range, RangeOptions};

    #[test]
    fn test_natural() {
        assert!(NATURAL.less_than(&1, &2));
        assert!(!NATURAL.less_than(&2, &2));
        assert!(NATURAL.equals(&2, &2));
        assert!(NATURAL.greater_than(&3, &2));
        assert!(!NATURAL.greater_than(&2, &2));
        assert!(NATURAL.less_or_equal(&2, &2));
        assert!(NATURAL.greater_or_equal(&2, &2));
        assert!(!NATURAL.greater_or_equal(&1, &2));
        assert_eq!(NATURAL.compare(&1, &2), Some(Ordering::Less));
        assert_eq!(NATURAL.compare(&2, &2), Some(Ordering::Equal));
        assert_eq!(NATURAL.compare(&3, &2), Some(Ordering::Greater));
        assert_eq!(NATURAL.compare(&1.0, &f64::NAN), None);
        assert_eq!(*NATURAL.min(&"abc", &"abd"), "abc");
        assert_eq!(*NATURAL.max(&"abc", &"abd"), "abd");
        assert!(OrderingContext::<i32>::is_compatible(&NATURAL, &Natural));
    }

    #[test]
    fn test_tolerance() {
        let tol = Tolerance::new(-0.01); //  sign is irrelevant
        assert_eq!(tol.epsilon(), 0.01);
        assert!(tol.equals(&1.0, &1.005));
        assert!(!tol.less_than(&1.0, &1.005));
        assert!(!tol.greater_than(&1.005, &1.0));
        assert!(tol.less_or_equal(&1.005, &1.0));
        assert_eq!(tol.compare(&1.0, &1.005), Some(Ordering::Equal));
        assert_eq!(tol.compare(&1.0, &1.5), Some(Ordering::Less));
        assert_eq!(tol.compare(&1.5, &1.0), Some(Ordering::Greater));

        assert!(tol.is_compatible(&Tolerance::new(0.01)));
        assert!(!tol.is_compatible(&Tolerance::new(0.02)));
    }

    #[test]
    fn test_tolerance_infinite() {
        let tol = Tolerance::new(0.0);
        assert!(tol.equals(&f64::INFINITY, &f64::INFINITY));
        assert!(tol.equals(&f64::NEG_INFINITY, &f64::NEG_INFINITY));
        assert!(!tol.equals(&f64::NEG_INFINITY, &f64::INFINITY));
        assert!(tol.less_than(&1.0, &f64::INFINITY));
        assert!(!tol.less_than(&f64::INFINITY, &f64::INFINITY));
        assert_eq!(
            tol.compare(&f64::INFINITY, &f64::INFINITY),
            Some(Ordering::Equal)
        );

        let r = make_range(
            Some(0.0),
            Some(f64::INFINITY),
            RangeOptions::new().ordering(tol),
        )
        .unwrap();
        assert!(r.includes(&1e300));
        assert!(r.includes(&f64::INFINITY));
        assert!(!r.includes(&-1.0));

        let r = make_range(
            Some(f64::NEG_INFINITY),
            None,
            RangeOptions::new().ordering(Tolerance::new(0.5)).open_boundaries(true),
        )
        .unwrap();
        assert!(!r.includes(&f64::NEG_INFINITY));
        assert!(r.includes(&-1e300));
    }

    #[test]
    fn test_fn_ordering() {
        // Order strings by length only
        let by_len = FnOrdering::new(
            |a: &String, b: &String| a.len() < b.len(),
            |a: &String, b: &String| a.len() == b.len(),
        );
        let short = "ab".to_string();
        let other = "cd".to_string();
        let long = "abcd".to_string();
        assert!(by_len.less_than(&short, &long));
        assert!(by_len.equals(&short, &other));
        assert!(by_len.greater_than(&long, &other));
        assert_eq!(by_len.compare(&other, &short), Some(Ordering::Equal));

        // Clones share their closures, new instances do not
        let clone = by_len.clone();
        assert!(by_len.is_compatible(&clone));
        assert!(!by_len.is_compatible(&FnOrdering::new(
            |a: &String, b: &String| a.len() < b.len(),
            |a: &String, b: &String| a.len() == b.len(),
        )));
        let reversed = FnOrdering::from_less_than(|a: &i32, b: &i32| b < a);
        assert!(!reversed.is_compatible(&FnOrdering::from_less_than(
            |a: &i32, b: &i32| b < a
        )));
        assert!(reversed.less_than(&5, &1));
        assert!(reversed.equals(&5, &5));

        let modulo = reversed.clone().with_equals(|a, b| a % 10 == b % 10);
        assert!(modulo.equals(&15, &5));
        assert!(!modulo.is_compatible(&reversed));
        assert_eq!(format!("{:?}", modulo), "FnOrdering { .. }");
    }

    fn descending(a: &i32, b: &i32) -> bool {
        b < a
    }

    fn same_unit(a: &i32, b: &i32) -> bool {
        a % 10 == b % 10
    }

    #[test]
    fn test_fn_pointers() {
        // Plain functions are compared by address
        let a = FnOrdering::from_fn(descending);
        let b = FnOrdering::from_fn(descending);
        assert!(a.is_compatible(&b));
        assert!(a.less_than(&5, &1));
        assert!(a.equals(&5, &5));
        assert!(!a.equals(&15, &5));

        let c = FnOrdering::from_fns(descending, same_unit);
        assert!(c.equals(&15, &5));
        assert!(c.is_compatible(&FnOrdering::from_fns(descending, same_unit)));
        assert!(c.is_compatible(&a.clone().with_equals_fn(same_unit)));
        assert!(!c.is_compatible(&a));

        // A closure is never the same as a plain function
        assert!(!a.is_compatible(&FnOrdering::from_less_than(descending)));
        assert!(!c.is_compatible(&a.with_equals(same_unit)));
    }
}
