//! Command-line interface for ini-tree
//! Loads INI documents into a configuration tree and prints the tree or single values.
//!
//! Usage:
//!   ini-tree tree `<file>`... [--format `<format>`] [--config `<settings>`]
//!       Print the loaded tree
//!   ini-tree get `<file>` `<path>` [--index `<n>`] [--all]
//!       Print values of a path
//!   ini-tree list-formats
//!       List output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use ini_tree::ini::formats::{FormatError, FormatRegistry};
use ini_tree::ini::settings::SettingsLoader;
use ini_tree::{IniLoader, LoadError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when present, below `--config`
const LOCAL_SETTINGS: &str = "ini-tree.toml";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("no value at '{path}' (index {index})")]
    NoValue { path: String, index: usize },
    #[error("missing argument '{0}'")]
    MissingArgument(&'static str),
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ini_tree=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("tree", tree_matches)) => handle_tree_command(tree_matches),
        Some(("get", get_matches)) => handle_get_command(get_matches),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("ini-tree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting hierarchical INI files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tree")
                .about("Load one or more files and print the resulting tree")
                .arg(
                    Arg::new("files")
                        .help("INI files, loaded in order; later files add to earlier ones")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'json', 'yaml')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Settings file layered over the built-in defaults"),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print the value stored at a dotted path")
                .arg(
                    Arg::new("file")
                        .help("Path to the INI file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("path")
                        .help("Dotted key path, e.g. 'server.port'")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("index")
                        .long("index")
                        .short('i')
                        .help("Which of the stored values to print")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("0"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Print every stored value, one per line")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("index"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn required<'a>(matches: &'a ArgMatches, name: &'static str) -> Result<&'a String, CliError> {
    matches
        .get_one::<String>(name)
        .ok_or(CliError::MissingArgument(name))
}

/// Handle the tree command
fn handle_tree_command(matches: &ArgMatches) -> Result<(), CliError> {
    let mut settings = SettingsLoader::new().with_optional_file(LOCAL_SETTINGS);
    if let Some(path) = matches.get_one::<String>("config") {
        settings = settings.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        settings = settings.set_override("output.format", format.clone())?;
    }
    let settings = settings.build()?;

    let mut loader = IniLoader::new();
    for (i, file) in matches.get_many::<String>("files").into_iter().flatten().enumerate() {
        loader.load_file(file, i > 0)?;
    }

    let registry = FormatRegistry::with_settings(&settings.output);
    let output = registry.serialize(loader.root(), &settings.output.format)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Handle the get command
fn handle_get_command(matches: &ArgMatches) -> Result<(), CliError> {
    let file = required(matches, "file")?;
    let path = required(matches, "path")?;
    let index = matches.get_one::<usize>("index").copied().unwrap_or(0);

    let mut loader = IniLoader::new();
    loader.load_file(file, false)?;

    let values = loader.find(path).map(|node| node.values()).unwrap_or(&[]);
    if matches.get_flag("all") {
        if values.is_empty() {
            return Err(CliError::NoValue {
                path: path.clone(),
                index,
            });
        }
        for value in values {
            println!("{}", value);
        }
        return Ok(());
    }

    let value = values.get(index).ok_or_else(|| CliError::NoValue {
        path: path.clone(),
        index,
    })?;
    println!("{}", value);
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}
