// hunter-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use hunter_core::Combo;
use hunter_gen::config::base_dir_of;
use hunter_gen::{DomainHunter, RunConfig, Settings};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a config file.
const CONFIG_ENV: &str = "HUNTER_CONFIG";

/// Environment variable holding a log filter directive.
const LOG_ENV: &str = "HUNTER_LOG";

/// Config directory under the user's home.
const HOME_SUBDIR: &str = ".domain-hunter";

/// Config file name inside `HOME_SUBDIR`.
const HOME_CONFIG: &str = "config.toml";

/// Config file name looked up in the current directory.
const LOCAL_CONFIG: &str = "hunter.toml";

/// Width of the domain column in printed results.
pub const DOMAIN_COLUMN: usize = 32;

/// Find the config file and build a DomainHunter from it.
///
/// Search order:
/// 1. `config_path` argument (if provided)
/// 2. `HUNTER_CONFIG` environment variable
/// 3. `~/.domain-hunter/config.toml`
/// 4. `hunter.toml` in the current working directory
///
/// `extra_words` are word files given on the command line; relative paths
/// are taken from the current directory, not the config's.
pub fn load_hunter(
    config_path: Option<&str>,
    extra_words: &[String],
) -> Result<DomainHunter, String> {
    let path = find_config(config_path)?;
    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let mut settings = Settings::from_toml_str(&text)
        .map_err(|e| format!("{}: {e}", path.display()))?;

    for words in extra_words {
        settings.words.source_files.push(absolute(Path::new(words))?);
    }

    let config = RunConfig::from_settings(&settings, base_dir_of(&path))
        .map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::info!(config = %path.display(), "using configuration");
    Ok(DomainHunter::new(config))
}

/// First existing file among the config search paths.
pub fn find_config(config_path: Option<&str>) -> Result<PathBuf, String> {
    // An explicit path must exist; don't silently fall back.
    if let Some(p) = config_path {
        let explicit = PathBuf::from(p);
        return if explicit.is_file() {
            Ok(explicit)
        } else {
            Err(format!("config file {} does not exist", explicit.display()))
        };
    }

    let search_paths = build_search_paths();

    search_paths
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| {
            format!(
                "could not find a config file in any of the search paths:\n{}",
                search_paths
                    .iter()
                    .map(|p| format!("  - {}", p.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        })
}

/// Build the list of candidate config files, used when no path is given.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(HOME_SUBDIR).join(HOME_CONFIG));
    }

    paths.push(PathBuf::from(LOCAL_CONFIG));

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

fn absolute(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| format!("failed to resolve {}: {e}", path.display()))?;
    Ok(cwd.join(path))
}

/// Parse a `--config=PATH` or `-c PATH` argument from command line args.
///
/// Returns `(config_path, remaining_args)`.
pub fn parse_config_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut config_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--config=") {
            config_path = Some(val.to_string());
        } else if arg == "--config" || arg == "-c" {
            if i + 1 < args.len() {
                config_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (config_path, remaining)
}

/// Parse a `-n`/`--count` value.
pub fn parse_count(value: Option<&String>) -> Result<usize, String> {
    let value = value.ok_or("--count requires a value")?;
    value
        .parse()
        .map_err(|_| format!("invalid number for --count: {value}"))
}

/// Set up logging to stderr.
///
/// `HUNTER_LOG` takes an `EnvFilter` directive; without it only warnings are
/// shown. `verbose` forces debug output.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Width of the score column.
pub const SCORE_COLUMN: usize = 11;

/// Digits printed after the decimal point of a score.
const SCORE_PRECISION: usize = 9;

/// One result line: the text padded to the domain column, then the score
/// right-aligned to a fixed precision.
pub fn format_combo(combo: &Combo) -> String {
    format!(
        "{:<domain$} {:>score$.precision$}",
        combo.text(),
        combo.score(),
        domain = DOMAIN_COLUMN,
        score = SCORE_COLUMN,
        precision = SCORE_PRECISION,
    )
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

/// Check if `--verbose` or `-v` is in the args.
pub fn wants_verbose(args: &[String]) -> bool {
    args.iter().any(|a| a == "--verbose" || a == "-v")
}
