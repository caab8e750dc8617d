//! Command implementations
//!
//! Each command writes its results to `out` and its notices to `err`, so the
//! binary passes stdout and stderr while tests pass buffers.

use colored::Colorize;
use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::cli::{Cli, Commands, ConfigCommands, InputArgs};
use crate::config::TagInputConfig;
use crate::output;
use crate::tags::{TagInput, TagsChanged};
use crate::ui::{TagEditor, TagInputState};
use crate::validation::ValidationMode;
use crate::TagInputError;

type Result<T> = std::result::Result<T, TagInputError>;

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputMode {
    pub json: bool,
    pub quiet: bool,
}

impl OutputMode {
    const fn from_cli(cli: &Cli) -> Self {
        Self { json: cli.json, quiet: cli.quiet }
    }

    /// Whether human-oriented notices should be written
    const fn chatty(self) -> bool {
        !self.quiet && !self.json
    }
}

/// Run the parsed command line
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the terminal
/// fails, or writing to `out`/`err` fails.
pub fn execute(cli: &Cli, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    let mode = OutputMode::from_cli(cli);
    let config_file = cli.config.as_deref();

    match cli.get_command() {
        Commands::Config { command } => config(&command, config_file, &cli.input, mode, out, err),
        Commands::Check { candidate } => check(&candidate, mode, out),
        Commands::Edit { title } => {
            let config = load_config(config_file, &cli.input)?;
            edit(&config, &title, mode, out, err)
        }
        Commands::Add { candidates, events } => {
            let config = load_config(config_file, &cli.input)?;
            add(&config, &candidates, events, mode, out, err)
        }
    }
}

/// Load the named configuration file, or the default one, and overlay the
/// command-line input options
///
/// # Errors
/// Returns `TagInputError::ConfigError` if the file cannot be read or parsed.
pub fn load_config(config_file: Option<&Path>, input: &InputArgs) -> Result<TagInputConfig> {
    let mut config = match config_file {
        Some(path) => TagInputConfig::load_from(path)?,
        None => TagInputConfig::load()?,
    };
    input.apply(&mut config);
    Ok(config)
}

fn build_input(config: &TagInputConfig) -> Result<TagInput> {
    Ok(TagInput::with_tags(config.to_options()?, config.tags.clone()))
}

fn write_tags(tags: &[String], mode: OutputMode, out: &mut dyn Write) -> Result<()> {
    if mode.json {
        writeln!(out, "{}", output::json_line(tags)?)?;
    } else if !tags.is_empty() || !mode.quiet {
        writeln!(out, "{}", output::tag_list(tags, mode.quiet))?;
    }
    Ok(())
}

/// Interactive editing session
///
/// # Errors
/// Returns an error if a commit key name is invalid or the terminal fails.
pub fn edit(
    config: &TagInputConfig,
    title: &str,
    mode: OutputMode,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let mut state = TagInputState::new(build_input(config)?)
        .with_commit_keys(&config.add_tag_on_keys)?
        .with_add_tag_on_blur(config.add_tag_on_blur);

    let result = TagEditor::new().with_title(title).run(&mut state)?;
    if result.aborted {
        if !mode.quiet {
            writeln!(err, "{}", "Aborted".dimmed())?;
        }
        return Ok(());
    }
    write_tags(&result.tags, mode, out)
}

/// Feed candidates through a tag input in order
///
/// With `events`, every change notification is written to `out` as a JSON
/// line and the final list is not printed.
///
/// # Errors
/// Returns an error if the validator cannot be built or writing fails.
pub fn add(
    config: &TagInputConfig,
    candidates: &[String],
    events: bool,
    mode: OutputMode,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let mut input = build_input(config)?;

    let emitted: Rc<RefCell<Vec<TagsChanged>>> = Rc::default();
    if events {
        let sink = Rc::clone(&emitted);
        input.on_change(move |event| sink.borrow_mut().push(event.clone()));
    }

    let rejected = input.add_candidates(candidates.iter().map(String::as_str));

    if mode.chatty() {
        for candidate in &rejected {
            writeln!(err, "{}", output::rejected(candidate))?;
        }
    }

    if events {
        for event in emitted.borrow().iter() {
            writeln!(out, "{}", output::json_line(event)?)?;
        }
        return Ok(());
    }

    if mode.chatty() {
        let accepted = candidates.len() - rejected.len();
        writeln!(err, "{}", output::summary(accepted, candidates.len()))?;
    }
    write_tags(input.tags(), mode, out)
}

/// List the validation modes accepting a candidate
///
/// # Errors
/// Returns an error if writing fails.
pub fn check(candidate: &str, mode: OutputMode, out: &mut dyn Write) -> Result<()> {
    let candidate = candidate.trim();
    let modes = ValidationMode::accepting(candidate);
    if mode.json {
        writeln!(out, "{}", output::json_line(&modes)?)?;
    } else {
        writeln!(out, "{}", output::check_result(candidate, &modes, mode.quiet))?;
    }
    Ok(())
}

fn target_path(config_file: Option<&Path>) -> Result<PathBuf> {
    match config_file {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(TagInputConfig::config_path()?),
    }
}

/// Configuration subcommands
///
/// # Errors
/// Returns an error if the configuration cannot be read, serialized or
/// written.
pub fn config(
    command: &ConfigCommands,
    config_file: Option<&Path>,
    input: &InputArgs,
    mode: OutputMode,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            writeln!(out, "{}", target_path(config_file)?.display())?;
        }
        ConfigCommands::Show => {
            let config = load_config(config_file, input)?;
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigCommands::Init { force } => {
            let path = target_path(config_file)?;
            if path.exists() && !force {
                writeln!(
                    err,
                    "{} {} already exists (use --force to overwrite)",
                    "⚠️".yellow(),
                    path.display()
                )?;
                return Ok(());
            }
            TagInputConfig::default().save_to(&path)?;
            if !mode.quiet {
                writeln!(out, "{} Wrote {}", "✓".green(), path.display())?;
            }
        }
    }
    Ok(())
}
