//! Error types for the energy footprint estimator.
//!
//! The calculator itself never fails; these cover the file edges around it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a user input record.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read the input file from disk.
    #[error("failed to read inputs '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported input format '{path}' (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// The JSON document does not describe an input record.
    #[error("invalid JSON inputs: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// The TOML document does not describe an input record.
    #[error("invalid TOML inputs: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

/// Errors that can occur when loading an energy factors file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the factors file from disk.
    #[error("failed to read factors '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The TOML document is malformed or names an unknown factor.
    #[error("invalid factors file: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    /// A factor is NaN or outside its accepted range.
    #[error("factor '{key}' is out of range (got {value})")]
    InvalidFactor { key: String, value: f64 },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors that can occur when reading or writing UI preferences.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// No preference path was given and the platform has no config directory.
    #[error("no configuration directory available for preferences")]
    NoConfigDir,

    /// Failed to read or write the preference file.
    #[error("preference file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The preference file is not a JSON object of flags.
    #[error("invalid preference file: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
