//! Configuration structures for the pass registry
//!
//! This module contains the command line arguments, the partial configuration
//! file and the merged [`RegistryConfig`] with its validation rules.

use super::OutputFormat;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Longest temporary pass window the demo generator may be asked for
pub const MAX_TEMPORARY_PASS_DAYS: u32 = 3650;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pass-registry",
    version = "0.1.0",
    about = "Employee Pass Registry - registers employees, issues passes and checks access",
    long_about = "Loads employees into an in-memory registry, issues permanent or temporary passes, checks every pass at a given instant and reports who holds a permanent pass and whose temporary pass expires on a given date.

EXAMPLES:
    # Run with the built-in sample roster
    pass-registry

    # Load employees and passes from a roster file
    pass-registry --roster staff.json

    # Generate a random population
    pass-registry --generate 50 --seed 7

    # Check passes at a fixed instant and report expiries on a date
    pass-registry --check-at 2022-05-10T09:00:00Z --expiring-on 2022-05-15

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(short, long, help = "Configuration file path (JSON format)")]
    pub config: Option<String>,

    /// Roster file with employees and their passes
    #[arg(
        long,
        help = "Roster file path (JSON format)",
        long_help = "Path to a JSON roster listing employees and the passes to issue to them. When absent, the built-in sample roster is used unless --generate is given."
    )]
    pub roster: Option<String>,

    /// Number of random employees to generate
    #[arg(long, help = "Number of random employees to generate")]
    pub generate: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Fraction of generated employees holding a permanent pass (0.0-1.0)
    #[arg(long, help = "Fraction of generated employees with a permanent pass (0.0-1.0)")]
    pub permanent_pass_percentage: Option<f64>,

    /// Fraction of generated employees holding a temporary pass (0.0-1.0)
    #[arg(long, help = "Fraction of generated employees with a temporary pass (0.0-1.0)")]
    pub temporary_pass_percentage: Option<f64>,

    /// Longest window of a generated temporary pass, in days
    #[arg(long, help = "Maximum length of a generated temporary pass in days")]
    pub temporary_pass_max_days: Option<u32>,

    /// Instant at which passes are checked (RFC 3339)
    #[arg(long, help = "Instant to check passes at (RFC 3339), defaults to now")]
    pub check_at: Option<DateTime<Utc>>,

    /// Date for the temporary pass expiry query (YYYY-MM-DD)
    #[arg(long, help = "Date for the expiring temporary pass query, defaults to today")]
    pub expiring_on: Option<NaiveDate>,

    /// Output format for the report
    #[arg(long, help = "Output format (text or json)")]
    pub output_format: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, help = "Directory for daily rolling log files")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without building the registry
    #[arg(long, help = "Validate configuration without building the registry")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Roster file path
    pub roster_path: Option<String>,

    /// Number of random employees to generate
    pub generate_count: Option<usize>,

    /// Fraction of generated employees holding a permanent pass
    pub permanent_pass_percentage: Option<f64>,

    /// Fraction of generated employees holding a temporary pass
    pub temporary_pass_percentage: Option<f64>,

    /// Longest window of a generated temporary pass, in days
    pub temporary_pass_max_days: Option<u32>,

    /// Random seed for reproducible generation
    pub seed: Option<u64>,

    /// Instant at which passes are checked
    pub check_at: Option<DateTime<Utc>>,

    /// Date for the temporary pass expiry query
    pub expiring_on: Option<NaiveDate>,

    /// Output format for the report
    pub output_format: Option<String>,
}

/// Configuration for a registry run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Roster file path; takes priority over generation
    pub roster_path: Option<String>,

    /// Number of random employees to generate (0 uses the sample roster)
    pub generate_count: usize,

    /// Fraction of generated employees holding a permanent pass (0.0-1.0)
    pub permanent_pass_percentage: f64,

    /// Fraction of generated employees holding a temporary pass (0.0-1.0)
    pub temporary_pass_percentage: f64,

    /// Longest window of a generated temporary pass, in days
    pub temporary_pass_max_days: u32,

    /// Random seed for reproducible generation
    pub seed: Option<u64>,

    /// Instant at which passes are checked; `None` means the current instant
    pub check_at: Option<DateTime<Utc>>,

    /// Date for the expiry query; `None` means today
    pub expiring_on: Option<NaiveDate>,

    /// Output format for the report
    pub output_format: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for registry configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Percentage value is out of range
    #[error("Invalid percentage for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidPercentage {
        /// Name of the field with invalid percentage
        field: String,
        /// The invalid percentage value
        value: f64,
    },

    /// Temporary pass window length is invalid
    #[error("Temporary pass max days must be greater than 0, got {0}")]
    InvalidTemporaryPassDays(u32),

    /// Temporary pass window length exceeds the supported maximum
    #[error("Temporary pass max days must be at most {max}, got {value}")]
    TemporaryPassDaysTooLarge {
        /// The configured window length
        value: u32,
        /// The largest accepted window length
        max: u32,
    },

    /// Output format is not recognised
    #[error("Invalid output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            generate_count: 0,
            permanent_pass_percentage: 0.3,
            temporary_pass_percentage: 0.5,
            temporary_pass_max_days: 14,
            seed: None,
            check_at: None,
            expiring_on: None,
            output_format: "text".to_string(),
        }
    }
}

impl RegistryConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            roster_path: config_file.roster_path.or(defaults.roster_path),
            generate_count: config_file.generate_count.unwrap_or(defaults.generate_count),
            permanent_pass_percentage: config_file
                .permanent_pass_percentage
                .unwrap_or(defaults.permanent_pass_percentage),
            temporary_pass_percentage: config_file
                .temporary_pass_percentage
                .unwrap_or(defaults.temporary_pass_percentage),
            temporary_pass_max_days: config_file
                .temporary_pass_max_days
                .unwrap_or(defaults.temporary_pass_max_days),
            seed: config_file.seed.or(defaults.seed),
            check_at: config_file.check_at.or(defaults.check_at),
            expiring_on: config_file.expiring_on.or(defaults.expiring_on),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
        }
    }

    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(roster) = args.roster {
            config.roster_path = Some(roster);
        }
        if let Some(count) = args.generate {
            config.generate_count = count;
        }
        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }
        if let Some(pct) = args.permanent_pass_percentage {
            config.permanent_pass_percentage = pct;
        }
        if let Some(pct) = args.temporary_pass_percentage {
            config.temporary_pass_percentage = pct;
        }
        if let Some(days) = args.temporary_pass_max_days {
            config.temporary_pass_max_days = days;
        }
        if let Some(at) = args.check_at {
            config.check_at = Some(at);
        }
        if let Some(date) = args.expiring_on {
            config.expiring_on = Some(date);
        }
        if let Some(format) = args.output_format {
            config.output_format = format;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = self.print_json()?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Serialize configuration as pretty JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.validate_percentage("permanent_pass_percentage", self.permanent_pass_percentage)?;
        self.validate_percentage("temporary_pass_percentage", self.temporary_pass_percentage)?;

        if self.temporary_pass_max_days == 0 {
            return Err(ConfigValidationError::InvalidTemporaryPassDays(
                self.temporary_pass_max_days,
            ));
        }
        if self.temporary_pass_max_days > MAX_TEMPORARY_PASS_DAYS {
            return Err(ConfigValidationError::TemporaryPassDaysTooLarge {
                value: self.temporary_pass_max_days,
                max: MAX_TEMPORARY_PASS_DAYS,
            });
        }

        self.get_output_format()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))?;

        Ok(())
    }

    fn validate_percentage(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidPercentage {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Parse the configured output format
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// The instant passes should be checked at
    pub fn resolve_check_time(&self) -> DateTime<Utc> {
        self.check_at.unwrap_or_else(Utc::now)
    }

    /// The date the expiry query should use
    pub fn resolve_expiry_date(&self) -> NaiveDate {
        self.expiring_on.unwrap_or_else(|| Utc::now().date_naive())
    }
}
