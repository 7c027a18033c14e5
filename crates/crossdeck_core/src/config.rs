//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_MAX_GRID, MIN_SCRATCH_GRID};
use crate::models::{DecorationLayout, Difficulty};
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Runtime configuration for Crossdeck, built by [`Config::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    pub decks_path: Option<String>,
    pub difficulty: Difficulty,
    pub decoration: DecorationLayout,
    pub seed: Option<u64>,
    /// Side length the scratch grid never exceeds. Grid words are capped at
    /// `max_grid - SCRATCH_GRID_PADDING` cells to keep that bound.
    pub max_grid: usize,
    pub log_layout: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decks_path: None,
            difficulty: Difficulty::Medium,
            decoration: DecorationLayout::None,
            seed: None,
            max_grid: DEFAULT_MAX_GRID,
            log_layout: false,
        }
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows USERPROFILE (standard)
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    None
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn parse_or_default<T>(
    name: &str,
    raw: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
) -> T {
    match raw {
        Some(value) if !value.trim().is_empty() => match parse(&value) {
            Some(parsed) => parsed,
            None => {
                warn!(var = name, value = %value, "ignoring unrecognized config value");
                default
            }
        },
        _ => default,
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            decks_path: env::var("CROSSDECK_DECKS_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(expand_tilde),
            difficulty: parse_or_default(
                "CROSSDECK_DIFFICULTY",
                env::var("CROSSDECK_DIFFICULTY").ok(),
                Difficulty::parse,
                defaults.difficulty,
            ),
            decoration: parse_or_default(
                "CROSSDECK_DECORATION",
                env::var("CROSSDECK_DECORATION").ok(),
                DecorationLayout::parse,
                defaults.decoration,
            ),
            seed: env::var("CROSSDECK_SEED")
                .ok()
                .and_then(|seed| seed.trim().parse().ok()),
            max_grid: env::var("CROSSDECK_MAX_GRID")
                .ok()
                .and_then(|size| size.trim().parse().ok())
                .filter(|size: &usize| *size >= MIN_SCRATCH_GRID)
                .unwrap_or(defaults.max_grid),
            log_layout: env_flag_enabled("CROSSDECK_LOG_LAYOUT"),
        }
    }
}
