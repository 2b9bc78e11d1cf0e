//! Surface representations of a range, convertible to and from [`Range`].
//!
//! Neither form carries an ordering: it is supplied when the range is
//! rebuilt, and the natural ordering is used by the `TryFrom` impls.

use crate::errors::RangeError;
use crate::ordering::{Natural, OrderingContext};
use crate::range::{BoundaryOptions, Range, RangeOptions};

/// The tuple-like form of a range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompactRange<T> {
    /// The closed range `[value, value]`
    Point(T),

    /// Lower and upper bounds (None when unbounded), and options if any
    /// differ from the defaults (closed on both sides, unnamed).
    Bounds(Option<T>, Option<T>, Option<BoundaryOptions>),
}

impl<T> CompactRange<T> {
    /// Checks that the options, if any, are well-formed
    pub fn check(&self) -> Result<(), RangeError> {
        match self {
            CompactRange::Point(_) | CompactRange::Bounds(_, _, None) => Ok(()),
            CompactRange::Bounds(_, _, Some(options)) => options.check(),
        }
    }
}

/// The property-bag form of a range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeRecord<T> {
    pub lower_boundary: Option<T>,
    pub upper_boundary: Option<T>,
    pub options: BoundaryOptions,
}

impl<T> RangeRecord<T> {
    pub fn check(&self) -> Result<(), RangeError> {
        self.options.check()
    }
}

/// Whether the options could be used to build a range
pub fn is_range_options(options: &BoundaryOptions) -> bool {
    options.check().is_ok()
}

/// Whether the compact form is structurally a range.  The bounds themselves
/// are only checked once an ordering is known, see [`Range::from_compact`].
pub fn is_range<T>(compact: &CompactRange<T>) -> bool {
    compact.check().is_ok()
}

pub fn is_range_record<T>(record: &RangeRecord<T>) -> bool {
    record.check().is_ok()
}

impl<T: Clone, O: OrderingContext<T>> Range<T, O> {
    /// Rebuild a range from its compact form, with the same checks as
    /// [`Range::new`].
    /// ```
    /// use range_algebra::{CompactRange, Range, NATURAL};
    /// let r = Range::from_compact(CompactRange::Point(4), NATURAL).unwrap();
    /// assert_eq!(r, Range::new_single(4));
    /// ```
    pub fn from_compact(compact: CompactRange<T>, ordering: O) -> Result<Self, RangeError> {
        let (lower, upper, options) = match compact {
            CompactRange::Point(value) => (Some(value.clone()), Some(value), None),
            CompactRange::Bounds(lower, upper, options) => (lower, upper, options),
        };
        Range::new(
            lower,
            upper,
            RangeOptions::with_ordering(ordering)
                .boundary_options(options.unwrap_or_default()),
        )
    }

    pub fn from_record(record: RangeRecord<T>, ordering: O) -> Result<Self, RangeError> {
        Range::new(
            record.lower_boundary,
            record.upper_boundary,
            RangeOptions::with_ordering(ordering).boundary_options(record.options),
        )
    }

    /// The open flags and name of self
    pub fn boundary_options(&self) -> BoundaryOptions {
        BoundaryOptions {
            open_boundaries: None,
            open_lower_boundary: Some(self.lower_open()),
            open_upper_boundary: Some(self.upper_open()),
            name: self.name.clone(),
        }
    }

    /// The compact form of self.  Unnamed single-point ranges become a
    /// [`CompactRange::Point`], and default options are left out.
    pub fn to_compact(&self) -> CompactRange<T> {
        if self.name.is_none() && self.is_single() {
            if let Some(v) = self.lower_value() {
                return CompactRange::Point(v.clone());
            }
        }
        let options = if self.name.is_none() && !self.lower_open() && !self.upper_open() {
            None
        } else {
            Some(self.boundary_options())
        };
        CompactRange::Bounds(
            self.lower_value().cloned(),
            self.upper_value().cloned(),
            options,
        )
    }

    pub fn to_record(&self) -> RangeRecord<T> {
        RangeRecord {
            lower_boundary: self.lower_value().cloned(),
            upper_boundary: self.upper_value().cloned(),
            options: self.boundary_options(),
        }
    }
}

impl<T: Clone + PartialOrd> TryFrom<CompactRange<T>> for Range<T, Natural> {
    type Error = RangeError;

    fn try_from(compact: CompactRange<T>) -> Result<Self, Self::Error> {
        Range::from_compact(compact, Natural)
    }
}

impl<T: Clone + PartialOrd> TryFrom<RangeRecord<T>> for Range<T, Natural> {
    type Error = RangeError;

    fn try_from(record: RangeRecord<T>) -> Result<Self, Self::Error> {
        Range::from_record(record, Natural)
    }
}

impl<T: Clone, O: OrderingContext<T>> From<&Range<T, O>> for CompactRange<T> {
    fn from(range: &Range<T, O>) -> Self {
        range.to_compact()
    }
}

impl<T: Clone, O: OrderingContext<T>> From<&Range<T, O>> for RangeRecord<T> {
    fn from(range: &Range<T, O>) -> Self {
        range.to_record()
    }
}
