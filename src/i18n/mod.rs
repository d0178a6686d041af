// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! This module provides localization backed by message catalogs that
//! are embedded into the binary, plus the `[[..]]` template formatter
//! used to splice values into translated strings.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded per-locale `.toml` message catalogs
//! - Runtime language switching
//! - Fail-open lookups: a missing key renders as itself, never an error

pub mod catalog;
pub mod format;

pub use catalog::I18n;
pub use format::{format, FormatDict};
