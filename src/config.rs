use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration. All fields are optional so the JSON file,
/// CLI overrides, and defaults can be layered.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,
    /// path to the BDF font file
    pub font: Option<PathBuf>,
    pub matrix: Option<MatrixConfig>,
    pub control: Option<ControlConfig>,
}

/// LED matrix geometry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatrixConfig {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub chain_length: Option<u8>,
    pub parallel: Option<u8>,
    pub brightness: Option<u8>,
    pub hardware_mapping: Option<String>,
}

/// TCP control channel binding.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ControlConfig {
    pub bind: Option<String>,
    pub port: Option<u16>,
}

/// CLI overrides. All fields are Options so we can layer them over JSON.
#[derive(Debug, Parser, Clone)]
#[command(name = "ledwall", about = "RGB LED matrix display daemon")]
pub struct Cli {
    /// Path to a JSON config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// Path to the BDF font file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub font: Option<PathBuf>,
    #[arg(long)]
    pub rows: Option<usize>,
    #[arg(long)]
    pub cols: Option<usize>,
    #[arg(long)]
    pub port: Option<u16>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read JSON, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    let cli = Cli::parse();
    load_with(cli)
}

fn load_with(cli: Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) JSON file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let file = read_json(p)?;
            merge(&mut cfg, file);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let file = read_json(&p)?;
        merge(&mut cfg, file);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, &cli);

    // 4) Validate
    validate(&cfg)?;

    if cli.dump_config {
        let s = serde_json::to_string_pretty(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/ledwall/config.json
    if let Some(home) = home_dir() {
        let p = home.join(".config/ledwall/config.json");
        if p.exists() { return Some(p) }
        let p = home.join(".config/ledwall.json");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["ledwall.json", "config.json", "config/ledwall.json"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_json(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Overlay `other` onto `cfg`: any field set in `other` wins.
fn merge(cfg: &mut Config, other: Config) {
    if other.log_level.is_some() { cfg.log_level = other.log_level }
    if other.font.is_some() { cfg.font = other.font }
    if let Some(m) = other.matrix {
        let dst = cfg.matrix.get_or_insert_with(MatrixConfig::default);
        if m.rows.is_some() { dst.rows = m.rows }
        if m.cols.is_some() { dst.cols = m.cols }
        if m.chain_length.is_some() { dst.chain_length = m.chain_length }
        if m.parallel.is_some() { dst.parallel = m.parallel }
        if m.brightness.is_some() { dst.brightness = m.brightness }
        if m.hardware_mapping.is_some() { dst.hardware_mapping = m.hardware_mapping }
    }
    if let Some(c) = other.control {
        let dst = cfg.control.get_or_insert_with(ControlConfig::default);
        if c.bind.is_some() { dst.bind = c.bind }
        if c.port.is_some() { dst.port = c.port }
    }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone() }
    if cli.font.is_some() { cfg.font = cli.font.clone() }
    if cli.rows.is_some() || cli.cols.is_some() {
        let m = cfg.matrix.get_or_insert_with(MatrixConfig::default);
        if cli.rows.is_some() { m.rows = cli.rows }
        if cli.cols.is_some() { m.cols = cli.cols }
    }
    if cli.port.is_some() {
        let c = cfg.control.get_or_insert_with(ControlConfig::default);
        c.port = cli.port;
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rows() == 0 || cfg.cols() == 0 {
        return Err(ConfigError::Validation(
            "matrix rows/cols must be non-zero".to_string(),
        ));
    }
    if cfg.font.is_none() {
        return Err(ConfigError::Validation(
            "a BDF font path is required (font field or --font)".to_string(),
        ));
    }
    Ok(())
}

// Resolved accessors with the defaults the original hardware uses.
impl Config {
    pub fn rows(&self) -> usize {
        self.matrix.as_ref().and_then(|m| m.rows).unwrap_or(32)
    }

    pub fn cols(&self) -> usize {
        self.matrix.as_ref().and_then(|m| m.cols).unwrap_or(64)
    }

    pub fn bind(&self) -> String {
        self.control
            .as_ref()
            .and_then(|c| c.bind.clone())
            .unwrap_or_else(|| "0.0.0.0".to_string())
    }

    pub fn port(&self) -> u16 {
        self.control.as_ref().and_then(|c| c.port).unwrap_or(1234)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font.as_deref()
    }
}
