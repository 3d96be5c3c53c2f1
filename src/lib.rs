//! Core logic for a bilingual (English/Marathi) rent agreement booking site.
//!
//! The UI layer binds these pieces to real markup; everything here runs and
//! tests without a browser: the localization engine, navigation menu
//! builder, fee calculator, agreement submission client, preference
//! persistence, upload validation, and the promotional popup scheduler.

pub mod app;
pub mod calculator;
pub mod config;
pub mod i18n;
pub mod menu;
pub mod popup;
pub mod prefs;
pub mod render;
pub mod submission;
pub mod upload;
