//! Command dispatch: turns parsed arguments into service calls and output.

use std::fmt::Display;
use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::drawing::{scaled_skyline_lines, skyline_lines};
use crate::application::services::SAMPLE_BUILDINGS;
use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Building, Skyline};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;
use crate::tree_traits::TreeNodeConvert;

/// Run the command selected on the command line.
///
/// Settings are loaded only for commands that need them, so `completion`
/// and `config template|path` work even with a broken config file.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `skyline --help`".to_string(),
        ));
    };

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Config {
            command: ConfigCommands::Template,
        } => {
            output::info(&Settings::template());
            Ok(())
        }
        Commands::Config {
            command: ConfigCommands::Path,
        } => {
            match global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("no config directory available on this platform"),
            }
            Ok(())
        }
        _ => {
            let settings = Settings::load(cli.config.as_deref())?;
            let container = ServiceContainer::new(settings);
            execute_with(command, &container)
        }
    }
}

/// Run `command` against an already wired container.
pub fn execute_with(command: &Commands, container: &ServiceContainer) -> CliResult<()> {
    match command {
        Commands::Build { input } => _build(container, input),
        Commands::Lines { input, scaled } => _lines(container, input, *scaled),
        Commands::Tree { input, balance } => _tree(container, input, *balance),
        Commands::Demo => _demo(container),
        Commands::Config {
            command: ConfigCommands::Show,
        } => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        Commands::Config { .. } | Commands::Completion { .. } => Err(CliError::InvalidArgs(
            "command does not need settings, run it through execute_command".to_string(),
        )),
    }
}

/// Buildings from files and `-b` arguments, or from stdin when neither is given.
pub fn read_buildings(container: &ServiceContainer, input: &InputArgs) -> CliResult<Vec<Building>> {
    if input.is_empty() {
        debug!("no files or inline buildings, reading stdin");
        let content = container
            .input
            .read_all()
            .map_err(|e| InfraError::io("read stdin", e))?;
        return Ok(container.skyline.parse_source("stdin", &content)?);
    }
    Ok(container.skyline.collect(&input.files, &input.buildings)?)
}

/// Collapsed skyline of `buildings`, one formatted building per entry.
pub fn render_skyline(
    container: &ServiceContainer,
    buildings: Vec<Building>,
) -> Vec<String> {
    let precision = container.settings.output.precision;
    container
        .skyline
        .build(buildings)
        .flatten()
        .iter()
        .map(|b| with_precision(b, precision))
        .collect()
}

/// Draw calls outlining the collapsed skyline of `buildings`.
pub fn render_lines(
    container: &ServiceContainer,
    buildings: Vec<Building>,
    scaled: bool,
) -> Vec<String> {
    let settings = &container.settings;
    let flat = container.skyline.build(buildings).flatten();
    let lines = if scaled {
        scaled_skyline_lines(&flat, &settings.render)
    } else {
        skyline_lines(&flat)
    };
    lines
        .iter()
        .map(|line| with_precision(line, settings.output.precision))
        .collect()
}

fn with_precision<T: Display>(value: &T, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{value:.p$}"),
        None => value.to_string(),
    }
}

#[instrument(level = "debug", skip(container))]
fn _build(container: &ServiceContainer, input: &InputArgs) -> CliResult<()> {
    let buildings = read_buildings(container, input)?;
    let rendered = render_skyline(container, buildings);
    if rendered.is_empty() {
        output::warning("no buildings, the skyline is empty");
    }
    for line in rendered {
        output::info(&line);
    }
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn _lines(container: &ServiceContainer, input: &InputArgs, scaled: bool) -> CliResult<()> {
    let buildings = read_buildings(container, input)?;
    for line in render_lines(container, buildings, scaled) {
        output::info(&line);
    }
    Ok(())
}

/// Skyline of `buildings`, rebalanced if asked for.
pub fn build_tree(
    container: &ServiceContainer,
    buildings: Vec<Building>,
    balance: bool,
) -> CliResult<Skyline> {
    let skyline = container.skyline.build(buildings);
    if balance {
        return Ok(container.skyline.balance(&skyline)?);
    }
    Ok(skyline)
}

#[instrument(level = "debug", skip(container))]
fn _tree(container: &ServiceContainer, input: &InputArgs, balance: bool) -> CliResult<()> {
    let buildings = read_buildings(container, input)?;
    let skyline = build_tree(container, buildings, balance)?;
    output::info(&skyline.to_tree_string());
    output::detail(&format!(
        "depth: {}, nodes: {}, segments: {}",
        skyline.depth(),
        skyline.node_count(),
        skyline.len()
    ));
    Ok(())
}

fn _demo(container: &ServiceContainer) -> CliResult<()> {
    let buildings = SAMPLE_BUILDINGS.to_vec();
    let precision = container.settings.output.precision;

    output::header("Buildings");
    for b in &buildings {
        output::detail(&with_precision(b, precision));
    }
    output::header("Skyline");
    for b in render_skyline(container, buildings.clone()) {
        output::detail(&b);
    }
    output::header("Lines");
    for line in render_lines(container, buildings, true) {
        output::detail(&line);
    }
    Ok(())
}
