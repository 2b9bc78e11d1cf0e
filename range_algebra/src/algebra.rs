use crate::boundary::{resolve_lower, resolve_upper, Boundary, Resolution};
use crate::errors::RangeError;
use crate::ordering::OrderingContext;
use crate::range::Range;
use itertools::Itertools;
use std::cmp::Ordering;

impl<T: Clone, O: OrderingContext<T> + Clone> Range<T, O> {
    /// A new range with the ordering and name of self
    fn derive(&self, lower: Boundary<T>, upper: Boundary<T>) -> Self {
        Self {
            lower,
            upper,
            ordering: self.ordering.clone(),
            name: self.name.clone(),
        }
    }

    fn check_compatible(&self, other: &Self) -> Result<(), RangeError> {
        if self.ordering.is_compatible(&other.ordering) {
            Ok(())
        } else {
            log::warn!(
                "refusing to combine {} and {}: incompatible orderings",
                self.label(),
                other.label()
            );
            Err(RangeError::IncompatibleRange {
                left: self.label(),
                right: other.label(),
            })
        }
    }

    /// Whether no value lies between the two non-empty ranges, i.e. they
    /// overlap or the upper boundary of one meets the lower boundary of
    /// the other with at least one side closed.
    fn touches(&self, other: &Self) -> bool {
        self.lower_cut().le(&other.upper_cut(), &self.ordering)
            && other.lower_cut().le(&self.upper_cut(), &self.ordering)
    }

    /// Smallest range holding both, assuming neither is empty
    fn hull(&self, other: &Self) -> Self {
        self.derive(
            resolve_lower(&self.ordering, &self.lower, &other.lower, Resolution::Union),
            resolve_upper(&self.ordering, &self.upper, &other.upper, Resolution::Union),
        )
    }

    fn cmp_lower(&self, other: &Self) -> Ordering {
        self.lower_cut()
            .compare(&other.lower_cut(), &self.ordering)
            .unwrap_or(Ordering::Equal)
    }

    /// Whether the two ranges have at least one value in common.
    pub fn overlaps(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_compatible(other)?;
        Ok(!self.is_empty()
            && !other.is_empty()
            && (self.includes_lower_boundary(other.lower_value(), other.lower_open())
                || other.includes_lower_boundary(self.lower_value(), self.lower_open())))
    }

    /// Whether self contains all values of the second range (and possibly
    /// more).  An empty range is contained in anything.
    pub fn contains(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_compatible(other)?;
        Ok(other.is_empty()
            || (self.includes_lower_boundary(other.lower_value(), other.lower_open())
                && self.includes_upper_boundary(other.upper_value(), other.upper_open())))
    }

    /// Returns the intersection of the two ranges.  The result may be
    /// empty, check with [`Range::is_empty()`].
    /// ```
    /// use range_algebra::Range;
    /// let r = Range::new_closed_closed(1, 10)
    ///     .intersect(&Range::new_closed_closed(5, 15))
    ///     .unwrap();
    /// assert_eq!(r, Range::new_closed_closed(5, 10));
    /// ```
    pub fn intersect(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_compatible(other)?;
        Ok(self.derive(
            resolve_lower(&self.ordering, &self.lower, &other.lower, Resolution::Intersection),
            resolve_upper(&self.ordering, &self.upper, &other.upper, Resolution::Intersection),
        ))
    }

    /// If neither range is empty, returns true if no value lies between
    /// them.  True if either of the ranges is empty.
    pub fn contiguous(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_compatible(other)?;
        Ok(self.is_empty() || other.is_empty() || self.touches(other))
    }

    /// Returns the values that are in either of the ranges.  This is a
    /// single range when they overlap or touch, both ranges (sorted by lower
    /// boundary) otherwise, and nothing if both are empty.  Ranges that are
    /// not merged are returned unchanged; a merged range takes the name of
    /// `self`.
    /// ```
    /// use range_algebra::Range;
    /// let a = Range::new_closed_closed(1, 5);
    /// let b = Range::new_closed_closed(10, 15);
    /// assert_eq!(b.union(&a).unwrap(), vec![a.clone(), b.clone()]);
    /// assert_eq!(
    ///     a.union(&Range::new_open_closed(5, 8)).unwrap(),
    ///     vec![Range::new_closed_closed(1, 8)],
    /// );
    /// ```
    pub fn union(&self, other: &Self) -> Result<Vec<Self>, RangeError> {
        self.check_compatible(other)?;
        Ok(match (self.is_empty(), other.is_empty()) {
            (true, true) => vec![],
            (false, true) => vec![self.clone()],
            (true, false) => vec![other.clone()],
            (false, false) if self.touches(other) => vec![self.hull(other)],
            (false, false) => {
                if self.cmp_lower(other) == Ordering::Greater {
                    vec![other.clone(), self.clone()]
                } else {
                    vec![self.clone(), other.clone()]
                }
            }
        })
    }

    /// Returns the result of removing all values in other from self.
    ///
    /// ```text
    ///     [---------- self ----------]
    ///            [-- other --]
    ///     [------)           (-------]
    /// ```
    pub fn difference(&self, other: &Self) -> Result<Vec<Self>, RangeError> {
        self.check_compatible(other)?;
        if self.is_empty() || other.contains(self)? {
            return Ok(vec![]);
        }
        if !self.overlaps(other)? {
            return Ok(vec![self.clone()]);
        }

        // cut points keep other's values, with the opposite openness
        let mut pieces = Vec::with_capacity(2);
        if self.lower_cut().lt(&other.lower_cut(), &self.ordering) {
            pieces.push(self.derive(self.lower.clone(), other.lower.flipped()));
        }
        if other.upper_cut().lt(&self.upper_cut(), &self.ordering) {
            pieces.push(self.derive(other.upper.flipped(), self.upper.clone()));
        }
        Ok(pieces)
    }

    /// Returns the smallest range that contains the values of both ranges.
    pub fn convex_hull(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_compatible(other)?;
        Ok(if self.is_empty() {
            self.derive(other.lower.clone(), other.upper.clone())
        } else if other.is_empty() {
            self.clone()
        } else {
            self.hull(other)
        })
    }
}

/// Merges any number of ranges into the sorted list of disjoint, non-empty
/// ranges that hold the same values.
/// ```
/// use range_algebra::{union_all, Range};
/// let merged = union_all(vec![
///     Range::new_closed_open(8, 10),
///     Range::new_closed_closed(1, 3),
///     Range::new_closed_closed(3, 5),
///     Range::new_open_open(9, 12),
/// ])
/// .unwrap();
/// assert_eq!(
///     merged,
///     vec![Range::new_closed_closed(1, 5), Range::new_closed_open(8, 12)],
/// );
/// ```
pub fn union_all<T, O, I>(ranges: I) -> Result<Vec<Range<T, O>>, RangeError>
where
    T: Clone,
    O: OrderingContext<T> + Clone,
    I: IntoIterator<Item = Range<T, O>>,
{
    let ranges: Vec<_> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
    if let Some(first) = ranges.first() {
        for r in ranges.iter().skip(1) {
            first.check_compatible(r)?;
        }
    }
    Ok(ranges
        .into_iter()
        .sorted_by(|a, b| a.cmp_lower(b))
        .coalesce(|a, b| {
            if a.touches(&b) {
                Ok(a.hull(&b))
            } else {
                Err((a, b))
            }
        })
        .collect())
}

/// Whether the value belongs to any of the ranges
pub fn belongs<T, O: OrderingContext<T>>(value: &T, ranges: &[Range<T, O>]) -> bool {
    ranges.iter().any(|r| r.includes(value))
}

///  &Range & &Range
impl<T: Clone, O: OrderingContext<T> + Clone> std::ops::BitAnd<&Range<T, O>>
    for &Range<T, O>
{
    type Output = Result<Range<T, O>, RangeError>;

    /// Same as [`Range::intersect()`]
    fn bitand(self, rhs: &Range<T, O>) -> Self::Output {
        self.intersect(rhs)
    }
}

///  &Range | &Range
impl<T: Clone, O: OrderingContext<T> + Clone> std::ops::BitOr<&Range<T, O>>
    for &Range<T, O>
{
    type Output = Result<Vec<Range<T, O>>, RangeError>;

    /// Same as [`Range::union()`]
    fn bitor(self, rhs: &Range<T, O>) -> Self::Output {
        self.union(rhs)
    }
}

///  &Range - &Range
impl<T: Clone, O: OrderingContext<T> + Clone> std::ops::Sub<&Range<T, O>>
    for &Range<T, O>
{
    type Output = Result<Vec<Range<T, O>>, RangeError>;

    /// Same as [`Range::difference()`]
    fn sub(self, rhs: &Range<T, O>) -> Self::Output {
        self.difference(rhs)
    }
}
