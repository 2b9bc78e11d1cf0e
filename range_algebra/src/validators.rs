//! Ready-made boundary validators, to be passed to
//! [`crate::RangeOptions::validator`].
//!
//! ```
//! use range_algebra::{make_range, validators, RangeOptions};
//! let r = make_range(
//!     Some(1.5),
//!     Some(3.0),
//!     RangeOptions::new().validator(validators::integral()),
//! );
//! assert!(r.is_err());
//! ```

use std::fmt::Display;

/// Only accepts floats with no fractional part
pub fn integral() -> impl Fn(&f64) -> Result<(), String> + Send + Sync {
    |v: &f64| {
        if v.is_finite() && v.fract() == 0.0 {
            Ok(())
        } else {
            Err(format!("{v} is not an integer"))
        }
    }
}

/// Rejects infinities and NaN
pub fn finite() -> impl Fn(&f64) -> Result<(), String> + Send + Sync {
    |v: &f64| {
        if v.is_finite() {
            Ok(())
        } else {
            Err(format!("{v} is not a finite number"))
        }
    }
}

pub fn at_least<T>(min: T) -> impl Fn(&T) -> Result<(), String> + Send + Sync
where
    T: PartialOrd + Display + Send + Sync,
{
    move |v: &T| {
        if *v >= min {
            Ok(())
        } else {
            Err(format!("{v} is less than {min}"))
        }
    }
}

pub fn at_most<T>(max: T) -> impl Fn(&T) -> Result<(), String> + Send + Sync
where
    T: PartialOrd + Display + Send + Sync,
{
    move |v: &T| {
        if *v <= max {
            Ok(())
        } else {
            Err(format!("{v} is greater than {max}"))
        }
    }
}

/// For ranges of days: only accepts timestamps at midnight.
#[cfg(feature = "chrono")]
pub fn midnight() -> impl Fn(&chrono::NaiveDateTime) -> Result<(), String> + Send + Sync {
    use chrono::Timelike;
    |v: &chrono::NaiveDateTime| {
        if v.hour() == 0 && v.minute() == 0 && v.second() == 0 && v.nanosecond() == 0 {
            Ok(())
        } else {
            Err(format!("{v} is not at midnight"))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::boundary::Side;
    use crate::errors::RangeError;
    use crate::range::{make_range, RangeOptions};

    #[test]
    fn test_numbers() {
        let check = integral();
        assert!(check(&3.0).is_ok());
        assert!(check(&-3.0).is_ok());
        assert_eq!(check(&2.5), Err("2.5 is not an integer".to_string()));
        assert!(check(&f64::INFINITY).is_err());

        let check = finite();
        assert!(check(&2.5).is_ok());
        assert!(check(&f64::NAN).is_err());
        assert_eq!(
            check(&f64::NEG_INFINITY),
            Err("-inf is not a finite number".to_string())
        );

        let check = at_least(10);
        assert!(check(&10).is_ok());
        assert_eq!(check(&9), Err("9 is less than 10".to_string()));
        let check = at_most(10);
        assert!(check(&10).is_ok());
        assert_eq!(check(&11), Err("11 is greater than 10".to_string()));
    }

    #[test]
    fn test_in_range_options() {
        let r = make_range(
            Some(1.0),
            Some(10.0),
            RangeOptions::new().validator(integral()),
        )
        .unwrap();
        assert!(r.includes(&2.5));

        let err = make_range(
            Some(1.0),
            Some(10.5),
            RangeOptions::new().validator(integral()),
        )
        .err();
        assert_eq!(
            err,
            Some(RangeError::InvalidBoundary {
                side: Side::Upper,
                reason: "10.5 is not an integer".into(),
            })
        );

        //  unbounded sides are not validated
        assert!(make_range(None, Some(5), RangeOptions::new().validator(at_least(0)))
            .is_ok());
        assert!(make_range(Some(-1), None, RangeOptions::new().validator(at_least(0)))
            .is_err());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_midnight() {
        use chrono::NaiveDate;
        let day = |d: u32, h: u32| {
            NaiveDate::from_ymd_opt(2024, 3, d)
                .and_then(|date| date.and_hms_opt(h, 0, 0))
                .unwrap()
        };
        let check = midnight();
        assert!(check(&day(1, 0)).is_ok());
        assert_eq!(
            check(&day(1, 12)),
            Err("2024-03-01 12:00:00 is not at midnight".to_string())
        );

        let r = make_range(
            Some(day(1, 0)),
            Some(day(10, 0)),
            RangeOptions::new()
                .open_upper_boundary(true)
                .validator(midnight()),
        )
        .unwrap();
        assert!(r.includes(&day(9, 23)));
        assert!(!r.includes(&day(10, 0)));
        assert!(make_range(
            Some(day(1, 6)),
            None,
            RangeOptions::new().validator(midnight())
        )
        .is_err());
    }
}
