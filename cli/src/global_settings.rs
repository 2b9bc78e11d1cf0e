use clap::{arg, Arg, ArgAction, ArgMatches};

pub struct GlobalSettings {
    // Values closer than this are considered equal
    pub tolerance: f64,

    // Only accept integer bounds
    pub integral: bool,

    // Default filter for env_logger, overridden by RUST_LOG
    pub log_filter: &'static str,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--tolerance [EPSILON] "Consider values closer than this equal")
                .value_parser(clap::value_parser!(f64))
                .default_value("0")
                .global(true),
            arg!(--integral "Reject bounds that are not integers")
                .global(true),
            arg!(-v --verbose "More verbose output, repeat for more")
                .action(ArgAction::Count)
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            tolerance: args.get_one::<f64>("tolerance").copied().unwrap_or(0.0),
            integral: args.get_flag("integral"),
            log_filter: match args.get_count("verbose") {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            },
        }
    }
}
