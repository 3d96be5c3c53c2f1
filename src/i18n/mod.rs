//! Internationalization (i18n) module for the bilingual site core.
//!
//! This module provides a centralized architecture for managing the two
//! display languages of the site (English and Marathi). All language-related
//! logic, localized strings, and coverage tooling is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type that replaces hardcoded enums
//! - `strings`: Centralized localized UI strings
//! - `coverage`: Translation completeness reporting over a document
//!
//! # Example
//!
//! ```rust,ignore
//! use rent_agreement_desk::i18n::{Language, LanguageRegistry};
//!
//! // Get canonical language (English)
//! let canonical = Language::canonical();
//!
//! // Create language from a persisted code
//! let marathi = Language::from_code("mr")?;
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod coverage;
mod language;
mod registry;
mod strings;

pub use coverage::{coverage_report, CoverageReport};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{strings_for, LanguageStrings};
