use crate::boundary::{value_within_lower, value_within_upper, Boundary, Cut, Side};
use crate::errors::RangeError;
use crate::ordering::{FnOrdering, Natural, OrderingContext};
use std::sync::Arc;

/// A check on boundary values, used to restrict a range to a subset of its
/// value type (integers only, dates at midnight,...).  See
/// [`crate::validators`].
pub type Validator<T> = Arc<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// The part of the range options that does not depend on the value type:
/// open flags and a diagnostic name.
///
/// `open_boundaries` sets both flags, but is overridden by the more
/// specific `open_lower_boundary` and `open_upper_boundary`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryOptions {
    pub open_boundaries: Option<bool>,
    pub open_lower_boundary: Option<bool>,
    pub open_upper_boundary: Option<bool>,
    pub name: Option<String>,
}

impl BoundaryOptions {
    pub fn lower_open(&self) -> bool {
        self.open_lower_boundary
            .or(self.open_boundaries)
            .unwrap_or(false)
    }

    pub fn upper_open(&self) -> bool {
        self.open_upper_boundary
            .or(self.open_boundaries)
            .unwrap_or(false)
    }

    /// Checks that the options are well-formed
    pub fn check(&self) -> Result<(), RangeError> {
        match &self.name {
            Some(n) if n.trim().is_empty() => {
                Err(RangeError::MalformedRangeOptions(
                    "the name must not be blank".into(),
                ))
            }
            Some(_) | None => Ok(()),
        }
    }
}

/// How to build a range: open flags, name, ordering and an optional
/// boundary validator.
/// ```
/// use range_algebra::{make_range, RangeOptions};
/// let r = make_range(
///     Some(1.0),
///     Some(10.0),
///     RangeOptions::new().open_upper_boundary(true),
/// ).unwrap();
/// assert!(!r.includes(&10.0));
/// assert!(r.includes(&9.999));
/// ```
pub struct RangeOptions<T, O = Natural> {
    boundaries: BoundaryOptions,
    ordering: O,
    validator: Option<Validator<T>>,
}

impl<T> RangeOptions<T, Natural> {
    pub fn new() -> Self {
        Self::with_ordering(Natural)
    }
}

impl<T> Default for RangeOptions<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> RangeOptions<T, O> {
    pub fn with_ordering(ordering: O) -> Self {
        Self {
            boundaries: BoundaryOptions::default(),
            ordering,
            validator: None,
        }
    }

    pub fn open_boundaries(mut self, open: bool) -> Self {
        self.boundaries.open_boundaries = Some(open);
        self
    }

    pub fn open_lower_boundary(mut self, open: bool) -> Self {
        self.boundaries.open_lower_boundary = Some(open);
        self
    }

    pub fn open_upper_boundary(mut self, open: bool) -> Self {
        self.boundaries.open_upper_boundary = Some(open);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.boundaries.name = Some(name.to_string());
        self
    }

    pub fn boundary_options(mut self, boundaries: BoundaryOptions) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Switch to another ordering
    pub fn ordering<O2>(self, ordering: O2) -> RangeOptions<T, O2> {
        RangeOptions {
            boundaries: self.boundaries,
            ordering,
            validator: self.validator,
        }
    }

    /// Order values with a custom function, but compare them with the type's
    /// own equality.  Ranges built with the same function are compatible.
    /// Use [`RangeOptions::ordering`] with [`FnOrdering::new`] for closures
    /// that capture their environment.
    pub fn less_than(self, less_than: fn(&T, &T) -> bool) -> RangeOptions<T, FnOrdering<T>>
    where
        T: PartialEq,
    {
        self.ordering(FnOrdering::from_fn(less_than))
    }

    pub fn validator<V>(mut self, validator: V) -> Self
    where
        V: Fn(&T) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }
}

impl<T> RangeOptions<T, FnOrdering<T>> {
    pub fn equals(mut self, equals: fn(&T, &T) -> bool) -> Self {
        self.ordering = self.ordering.with_equals_fn(equals);
        self
    }
}

/// Build a range.  Either bound may be None to leave that side unbounded.
pub fn make_range<T, O: OrderingContext<T>>(
    lower: Option<T>,
    upper: Option<T>,
    options: RangeOptions<T, O>,
) -> Result<Range<T, O>, RangeError> {
    Range::new(lower, upper, options)
}

/// A range of values between two boundaries, each of which might be open,
/// closed or unbounded.
///
/// Ranges are immutable: all operations return new ranges.
/// ```
/// use range_algebra::Range;
/// let r = Range::new_closed_closed(1, 10);
/// assert!(r.includes(&1));
/// assert!(r.includes(&10));
/// assert!(!r.includes(&11));
/// ```
#[derive(Clone)]
pub struct Range<T, O = Natural> {
    pub(crate) lower: Boundary<T>,
    pub(crate) upper: Boundary<T>,
    pub(crate) ordering: O,
    pub(crate) name: Option<String>,
}

impl<T> Range<T, Natural> {
    /// Construct a left-closed, right-open range (`[A,B)`)
    pub fn new_closed_open(lower: T, upper: T) -> Self {
        Self::from_boundaries(Boundary::closed(lower), Boundary::open(upper), Natural)
    }

    /// Construct a left-closed, right-closed range (`[A,B]`)
    pub fn new_closed_closed(lower: T, upper: T) -> Self {
        Self::from_boundaries(Boundary::closed(lower), Boundary::closed(upper), Natural)
    }

    /// Construct a left-open, right-open range (`(A,B)`)
    pub fn new_open_open(lower: T, upper: T) -> Self {
        Self::from_boundaries(Boundary::open(lower), Boundary::open(upper), Natural)
    }

    /// Construct a left-open, right-closed range (`(A,B]`)
    pub fn new_open_closed(lower: T, upper: T) -> Self {
        Self::from_boundaries(Boundary::open(lower), Boundary::closed(upper), Natural)
    }

    /// Construct a left-unbounded, right-closed range (`(,B]`)
    pub fn new_unbounded_closed(upper: T) -> Self {
        Self::from_boundaries(Boundary::unbounded(), Boundary::closed(upper), Natural)
    }

    /// Construct a left-unbounded, right-open range (`(,B)`)
    pub fn new_unbounded_open(upper: T) -> Self {
        Self::from_boundaries(Boundary::unbounded(), Boundary::open(upper), Natural)
    }

    /// Construct a left-closed, right-unbounded range (`[A,)`)
    pub fn new_closed_unbounded(lower: T) -> Self {
        Self::from_boundaries(Boundary::closed(lower), Boundary::unbounded(), Natural)
    }

    /// Construct a left-open, right-unbounded range (`(A,)`)
    pub fn new_open_unbounded(lower: T) -> Self {
        Self::from_boundaries(Boundary::open(lower), Boundary::unbounded(), Natural)
    }

    /// Construct a doubly unbounded range (`(,)`) that contains all
    /// possible values.
    pub fn doubly_unbounded() -> Self {
        Self::from_boundaries(Boundary::unbounded(), Boundary::unbounded(), Natural)
    }
}

impl<T: Clone> Range<T, Natural> {
    /// Returns a range that contains a single value (`[value,value]`)
    pub fn new_single(value: T) -> Self {
        Self::new_closed_closed(value.clone(), value)
    }
}

impl<T: Default> Range<T, Natural> {
    /// Returns an empty range.  There are multiple representations for
    /// empty ranges, though they are all equivalent.
    pub fn empty() -> Self {
        Self::new_open_open(T::default(), T::default())
    }
}

impl<T: Default> Default for Range<T, Natural> {
    /// Returns an empty range
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, O> Range<T, O> {
    /// Assemble a range from two boundaries without any validation
    pub fn from_boundaries(lower: Boundary<T>, upper: Boundary<T>, ordering: O) -> Self {
        Self {
            lower,
            upper,
            ordering,
            name: None,
        }
    }

    /// The same range with a diagnostic name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn lower(&self) -> &Boundary<T> {
        &self.lower
    }

    pub fn upper(&self) -> &Boundary<T> {
        &self.upper
    }

    /// The lower bound.  Returns None if the range is unbounded below.
    pub fn lower_value(&self) -> Option<&T> {
        self.lower.value()
    }

    /// The upper bound.  Returns None if the range is unbounded above.
    pub fn upper_value(&self) -> Option<&T> {
        self.upper.value()
    }

    /// Whether the lower bound is excluded from the range.  False when
    /// the range is unbounded below.
    pub fn lower_open(&self) -> bool {
        self.lower.is_open()
    }

    pub fn upper_open(&self) -> bool {
        self.upper.is_open()
    }

    pub fn lower_unbounded(&self) -> bool {
        self.lower.is_unbounded()
    }

    pub fn upper_unbounded(&self) -> bool {
        self.upper.is_unbounded()
    }

    pub fn ordering(&self) -> &O {
        &self.ordering
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// How the range is referred to in error messages
    pub(crate) fn label(&self) -> String {
        match &self.name {
            Some(n) => n.clone(),
            None => "unnamed range".to_string(),
        }
    }

    pub(crate) fn lower_cut(&self) -> Cut<'_, T> {
        Cut::of_lower(&self.lower)
    }

    pub(crate) fn upper_cut(&self) -> Cut<'_, T> {
        Cut::of_upper(&self.upper)
    }
}

impl<T, O: OrderingContext<T>> Range<T, O> {
    /// Build a range, checking the options, the boundary values and the
    /// ordering.
    pub fn new(
        lower: Option<T>,
        upper: Option<T>,
        options: RangeOptions<T, O>,
    ) -> Result<Self, RangeError> {
        let RangeOptions {
            boundaries,
            ordering,
            validator,
        } = options;
        boundaries.check()?;

        for (side, value) in [(Side::Lower, lower.as_ref()), (Side::Upper, upper.as_ref())] {
            let Some(v) = value else { continue };
            if ordering.less_than(v, v) {
                return Err(RangeError::MalformedRangeOptions(format!(
                    "less_than is not irreflexive on the {side} boundary"
                )));
            }
            if !ordering.equals(v, v) {
                return Err(RangeError::InvalidBoundary {
                    side,
                    reason: "value cannot be compared with itself".into(),
                });
            }
            if let Some(validate) = &validator {
                validate(v).map_err(|reason| {
                    log::debug!("rejected {side} boundary: {reason}");
                    RangeError::InvalidBoundary { side, reason }
                })?;
            }
        }

        if let (Some(l), Some(u)) = (&lower, &upper) {
            let lt = ordering.less_than(l, u);
            let gt = ordering.less_than(u, l);
            if (lt && gt) || ((lt || gt) && ordering.equals(l, u)) {
                return Err(RangeError::MalformedRangeOptions(
                    "the ordering gives contradictory answers for the bounds".into(),
                ));
            }
        }

        log::trace!(
            "new range, lower open={} upper open={}",
            boundaries.lower_open(),
            boundaries.upper_open()
        );
        Ok(Self {
            lower: Boundary::new(lower, boundaries.lower_open()),
            upper: Boundary::new(upper, boundaries.upper_open()),
            ordering,
            name: boundaries.name,
        })
    }

    /// Whether value is contained in the range
    pub fn includes(&self, value: &T) -> bool {
        value_within_lower(&self.ordering, Some(value), &self.lower)
            && value_within_upper(&self.ordering, Some(value), &self.upper)
    }

    /// Whether a range starting at the given lower boundary would start
    /// inside self, i.e. its first values belong to self.  An unbounded
    /// boundary (None) is only included if self is unbounded below.
    pub fn includes_lower_boundary(&self, value: Option<&T>, open: bool) -> bool {
        let probe = Cut::lower(value, open);
        self.lower_cut().le(&probe, &self.ordering)
            && probe.lt(&self.upper_cut(), &self.ordering)
    }

    /// Whether a range ending at the given upper boundary would end inside
    /// self, i.e. its last values belong to self.
    pub fn includes_upper_boundary(&self, value: Option<&T>, open: bool) -> bool {
        let probe = Cut::upper(value, open);
        self.lower_cut().lt(&probe, &self.ordering)
            && probe.le(&self.upper_cut(), &self.ordering)
    }

    /// True if the range contains no value: both bounds are set, and either
    /// upper is less than lower, or they are equal and one of them is open.
    pub fn is_empty(&self) -> bool {
        match (self.lower.value(), self.upper.value()) {
            (Some(l), Some(u)) => {
                self.ordering.less_than(u, l)
                    || ((self.lower.is_open() || self.upper.is_open())
                        && self.ordering.equals(l, u))
            }
            _ => false,
        }
    }

    /// True if self is of the form `[A, A]`.
    /// ```
    /// use range_algebra::Range;
    /// assert!(Range::new_single(3).is_single());
    /// assert!(!Range::new_open_open(0, 2).is_single());
    /// ```
    pub fn is_single(&self) -> bool {
        match (self.lower.value(), self.upper.value()) {
            (Some(l), Some(u)) => {
                !self.lower.is_open()
                    && !self.upper.is_open()
                    && self.ordering.equals(l, u)
            }
            _ => false,
        }
    }

    /// Whether the two ranges contain the same set of values
    pub fn equivalent(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else if other.is_empty() {
            false
        } else {
            self.lower_cut().le(&other.lower_cut(), &self.ordering)
                && other.lower_cut().le(&self.lower_cut(), &self.ordering)
                && self.upper_cut().le(&other.upper_cut(), &self.ordering)
                && other.upper_cut().le(&self.upper_cut(), &self.ordering)
        }
    }
}

impl<T, O: OrderingContext<T>> PartialEq for Range<T, O> {
    /// True if the two ranges contain the same values (though they might
    /// have different bounds).
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other)
    }
}

impl<T: ::core::fmt::Debug, O: OrderingContext<T>> ::core::fmt::Debug for Range<T, O> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            match self.lower.value() {
                None => write!(f, "(")?,
                Some(p) if self.lower.is_open() => write!(f, "({:?}", p)?,
                Some(p) => write!(f, "[{:?}", p)?,
            }
            match self.upper.value() {
                None => write!(f, ",)"),
                Some(p) if self.upper.is_open() => write!(f, ", {:?})", p),
                Some(p) => write!(f, ", {:?}]", p),
            }
        }
    }
}

impl<T: ::core::fmt::Display, O: OrderingContext<T>> ::core::fmt::Display for Range<T, O> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            match self.lower.value() {
                None => write!(f, "(")?,
                Some(p) if self.lower.is_open() => write!(f, "({}", p)?,
                Some(p) => write!(f, "[{}", p)?,
            }
            match self.upper.value() {
                None => write!(f, ",)"),
                Some(p) if self.upper.is_open() => write!(f, ", {})", p),
                Some(p) => write!(f, ", {}]", p),
            }
        }
    }
}
