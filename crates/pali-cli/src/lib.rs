// pali-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use pali_grammar::GrammarData;
use pali_grammar::data::VERB_PARADIGM_FILE;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Data directory name below a user or system prefix.
const DATA_SUBDIR: &str = "pali/grammar";

/// Environment variable naming a data directory.
pub const DATA_PATH_ENV: &str = "PALI_DATA_PATH";

/// Search for a data directory and load it.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `PALI_DATA_PATH` environment variable
/// 3. `~/.pali/grammar`
/// 4. `/usr/share/pali/grammar`
/// 5. Current working directory
///
/// The first directory holding the verb paradigm file wins.
pub fn load_data(data_path: Option<&str>) -> Result<GrammarData, String> {
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        if dir.join(VERB_PARADIGM_FILE).is_file() {
            tracing::debug!(dir = %dir.display(), "using data directory");
            return GrammarData::from_dir(dir)
                .map_err(|e| format!("failed to load {}: {e}", dir.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        VERB_PARADIGM_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for data files.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(format!(".{DATA_SUBDIR}")));
    }

    paths.push(PathBuf::from("/usr/share").join(DATA_SUBDIR));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--data-path=PATH`, `--data-path PATH` or `-d PATH` argument.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--data-path=") {
            data_path = Some(val.to_string());
        } else if arg == "--data-path" || arg == "-d" {
            let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            data_path = Some(val.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((data_path, remaining))
}

/// Remove a boolean flag from `args`, returning whether it was present.
pub fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

/// Remove `--name VALUE` or `--name=VALUE` from `args` and parse the value.
pub fn take_option<T>(args: &mut Vec<String>, name: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let prefix = format!("{name}=");
    let Some(pos) = args.iter().position(|a| a == name || a.starts_with(&prefix)) else {
        return Ok(None);
    };
    let arg = args.remove(pos);
    let value = match arg.strip_prefix(&prefix) {
        Some(v) => v.to_string(),
        None if pos < args.len() => args.remove(pos),
        None => return Err(format!("{name} requires a value")),
    };
    value
        .parse()
        .map(Some)
        .map_err(|e: T::Err| format!("{name}: {e}"))
}

/// Install the stderr log subscriber. `RUST_LOG` sets the level; the
/// default is `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fatal(&format!("failed to serialize output: {e}")),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
