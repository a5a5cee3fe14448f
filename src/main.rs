//! skillmeter CLI - stable skill-level scoring
//!
//! Usage: skillmeter <COMMAND>
//!
//! Commands:
//!   score    Compute the display level for one skill
//!   render   Render the skills panel for the configured catalog
//!   check    Validate the configured catalog
//!   catalog  Print the effective catalog as TOML

mod cli;
mod commands;
mod logging;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use skillmeter::SkillError;

use cli::{Cli, Commands};
use commands::GlobalArgs;
use ui::json::{emit, ErrorEvent};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let args = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        config: cli.config.clone(),
        color: cli.color,
    };
    let command = command_name(&cli.command);

    let result = match &cli.command {
        Commands::Score { name, base, range } => {
            commands::score::cmd_score(&args, name, *base, *range)
        }
        Commands::Render { no_bars, schedule } => {
            commands::render::cmd_render(&args, *no_bars, *schedule)
        }
        Commands::Check => commands::check::cmd_check(&args),
        Commands::Catalog => commands::catalog::cmd_catalog(&args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            report_error(command, &err, args.json);
            ExitCode::FAILURE
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Score { .. } => "score",
        Commands::Render { .. } => "render",
        Commands::Check => "check",
        Commands::Catalog => "catalog",
    }
}

fn help_for(err: &SkillError) -> Option<&'static str> {
    match err {
        SkillError::InvalidArgument { field, .. } if field == "range" => {
            Some("the jitter range must be zero or a positive integer")
        }
        SkillError::InvalidArgument { field, .. } if field == "output.bar_width" => {
            Some("bar_width must be between 0 and 200 cells")
        }
        SkillError::InvalidArgument { field, .. } if field.starts_with("skills[") => {
            Some("run 'skillmeter check' to list every issue")
        }
        SkillError::ConfigNotFound { .. } => {
            Some("pass an existing file to --config, or omit it to use ./skillmeter.toml")
        }
        SkillError::MissingField { .. }
        | SkillError::DuplicateSkill { .. }
        | SkillError::BaseOutOfRange { .. } => Some("run 'skillmeter check' to list every issue"),
        _ => None,
    }
}

fn report_error(command: &str, err: &anyhow::Error, json: bool) {
    let skill_err = err.downcast_ref::<SkillError>();
    let help = skill_err.and_then(help_for);

    if json {
        let code = skill_err.map(SkillError::code).unwrap_or("error");
        let mut event = ErrorEvent::new(command, code, format!("{err:#}"));
        if let Some(h) = help {
            event = event.with_help(h);
        }
        if emit(&event).is_ok() {
            return;
        }
    }

    eprintln!("Error: {err:#}");
    if let Some(h) = help {
        eprintln!("  help: {h}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_for_negative_range() {
        let err = SkillError::invalid_argument("range", "must be non-negative");
        assert!(help_for(&err).is_some());
    }

    #[test]
    fn help_for_oversized_bar_width() {
        let err = SkillError::invalid_argument("output.bar_width", "must be at most 200");
        assert!(help_for(&err).unwrap().contains("200"));
    }

    #[test]
    fn help_for_io_is_none() {
        let err = SkillError::Io(std::io::Error::other("boom"));
        assert!(help_for(&err).is_none());
    }
}
