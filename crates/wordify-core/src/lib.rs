//! Core library for wordify.
//!
//! This crate converts string representations of arbitrary-precision
//! signed integers into their English-word expansion, and classifies
//! malformed input with a diagnostic hint explaining the rejection.
//!
//! # Modules
//!
//! - [`dictionary`] - Static English word and scale tables
//! - [`validate`] - Input validation with diagnostic hints
//! - [`wordify`] - Number-to-words conversion
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordify_core::{number_to_words, validate_with_hints};
//!
//! assert_eq!(validate_with_hints("1234"), None);
//! assert_eq!(
//!     number_to_words("1234").unwrap(),
//!     "One thousand two hundred and thirty four"
//! );
//! ```
#![deny(unsafe_code)]

pub mod config;

pub mod dictionary;

pub mod error;

pub mod validate;

pub mod wordify;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};

pub use error::{ConfigError, ConfigResult, WordifyError, WordifyResult};

pub use validate::{
    Hint, is_valid_integer_representation, max_integer_representation,
    min_integer_representation, validate_with_hints,
};

pub use wordify::{number_to_words, small_int_to_words};
