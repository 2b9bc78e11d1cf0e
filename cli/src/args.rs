use crate::global_settings::GlobalSettings;
use crate::range_settings::{FIRST, OTHER};
use clap::{arg, Arg, Command};

/// A subcommand that combines the range with a second one
fn binary(name: &'static str, about: &'static str) -> Command {
    Command::new(name).about(about).args(OTHER.cli())
}

pub(crate) fn build_cli() -> Command {
    Command::new("ranges")
        .version("0.1")
        .about("Compute with ranges of numbers")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .args(FIRST.cli().into_iter().map(|a| a.global(true)))
        .subcommand(
            Command::new("includes")
                .about("Check whether values belong to the range")
                .arg(
                    arg!(<VALUES> ... "The values to check")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(binary("contains", "Whether the range contains the other one"))
        .subcommand(binary("overlaps", "Whether the two ranges have values in common"))
        .subcommand(binary("intersect", "Show the intersection of the two ranges"))
        .subcommand(binary("union", "Show the union of the two ranges"))
        .subcommand(binary("difference", "Show the values of the range not in the other"))
        .subcommand(binary("hull", "Show the smallest range holding both ranges"))
        .subcommand(
            // Use    eval "$(ranges completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
