use crate::global_settings::GlobalSettings;
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches};
use range_algebra::{make_range, validators, BoundaryOptions, Range, RangeOptions, Tolerance};

/// The names of the switches that describe one range
pub struct RangeFlags {
    lower: &'static str,
    upper: &'static str,
    open_lower: &'static str,
    open_upper: &'static str,
    open: &'static str,
    name: &'static str,
}

/// The range every command works on
pub const FIRST: RangeFlags = RangeFlags {
    lower: "lower",
    upper: "upper",
    open_lower: "open-lower",
    open_upper: "open-upper",
    open: "open",
    name: "name",
};

/// The second operand of binary operations
pub const OTHER: RangeFlags = RangeFlags {
    lower: "other-lower",
    upper: "other-upper",
    open_lower: "other-open-lower",
    open_upper: "other-open-upper",
    open: "other-open",
    name: "other-name",
};

impl RangeFlags {
    /// Return the command line switches to describe a range.  A missing
    /// bound leaves that side unbounded.
    pub fn cli(&self) -> impl IntoIterator<Item = Arg> {
        let bound = |id: &'static str, help: &'static str| {
            Arg::new(id)
                .long(id)
                .value_name("VALUE")
                .help(help)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
        };
        let flag = |id: &'static str, help: &'static str| {
            Arg::new(id).long(id).help(help).action(ArgAction::SetTrue)
        };
        [
            bound(self.lower, "Lower bound (unbounded if omitted)"),
            bound(self.upper, "Upper bound (unbounded if omitted)"),
            flag(self.open_lower, "Exclude the lower bound"),
            flag(self.open_upper, "Exclude the upper bound"),
            flag(self.open, "Exclude both bounds"),
            Arg::new(self.name)
                .long(self.name)
                .value_name("NAME")
                .help("Name of the range, for error messages"),
        ]
    }

    /// Build the range from the command line arguments
    pub fn range(
        &self,
        args: &ArgMatches,
        settings: &GlobalSettings,
    ) -> Result<Range<f64, Tolerance>> {
        let set = |id: &str| args.get_flag(id).then_some(true);
        let boundaries = BoundaryOptions {
            open_boundaries: set(self.open),
            open_lower_boundary: set(self.open_lower),
            open_upper_boundary: set(self.open_upper),
            name: args.get_one::<String>(self.name).cloned(),
        };
        let mut options = RangeOptions::new()
            .ordering(Tolerance::new(settings.tolerance))
            .boundary_options(boundaries);
        if settings.integral {
            options = options.validator(validators::integral());
        }
        let range = make_range(
            args.get_one::<f64>(self.lower).copied(),
            args.get_one::<f64>(self.upper).copied(),
            options,
        )?;
        log::debug!("--{} and --{} give {}", self.lower, self.upper, range);
        Ok(range)
    }
}
