mod args;
mod commands;
mod global_settings;
mod range_settings;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use anyhow::Result;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    // global switches are visible from the subcommand
    let settings = GlobalSettings::new(
        matches.subcommand().map(|(_, sub)| sub).unwrap_or(&matches),
    );
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_filter),
    )
    .init();

    match matches.subcommand() {
        Some(("completions", sub)) => {
            if let Some(shell) = sub.get_one::<clap_complete_command::Shell>("shell") {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
        }
        Some((name, sub)) => {
            println!("{}", crate::commands::run(name, sub, &settings)?);
        }
        None => {}
    }
    Ok(())
}
