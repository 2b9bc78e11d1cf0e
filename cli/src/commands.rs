use crate::global_settings::GlobalSettings;
use crate::range_settings::{FIRST, OTHER};
use anyhow::{bail, Result};
use clap::ArgMatches;
use itertools::Itertools;
use range_algebra::{Range, Tolerance};

fn show_all(ranges: &[Range<f64, Tolerance>]) -> String {
    if ranges.is_empty() {
        "empty".to_string()
    } else {
        ranges.iter().join(" ")
    }
}

/// Execute one of the subcommands (other than completions), and return
/// its output.
pub fn run(name: &str, args: &ArgMatches, settings: &GlobalSettings) -> Result<String> {
    let range = FIRST.range(args, settings)?;
    if name == "includes" {
        let output = args
            .get_many::<f64>("VALUES")
            .into_iter()
            .flatten()
            .map(|v| format!("{v}: {}", range.includes(v)))
            .join("\n");
        return Ok(output);
    }

    let other = OTHER.range(args, settings)?;
    log::info!("{name} {range} {other}");
    Ok(match name {
        "contains" => range.contains(&other)?.to_string(),
        "overlaps" => range.overlaps(&other)?.to_string(),
        "intersect" => range.intersect(&other)?.to_string(),
        "union" => show_all(&range.union(&other)?),
        "difference" => show_all(&range.difference(&other)?),
        "hull" => range.convex_hull(&other)?.to_string(),
        _ => bail!("Unknown command {name}"),
    })
}
