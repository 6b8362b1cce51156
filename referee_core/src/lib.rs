//! `referee_core` scans the storyboards of an iOS project and collects the
//! identifiers that generated accessor code needs: table and collection cell
//! reuse identifiers, view controller Storyboard IDs with their classes, and
//! segue identifiers.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Project directory
//!   → Manifest (files with their declared Xcode file types)
//!   → Storyboard filter (declared type `file.storyboard`, manifest order)
//!   → Document (storyboard XML parsed once, queried by tag name)
//!   → Extractors (cells, controllers, segues; trimmed and deduplicated)
//!   → Resource groups (one per storyboard, carrying the active config)
//!   → Validation (missing Storyboard IDs warn or abort per config)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `referee.toml`.
//! - [`manifest`] — The project's file list and directory walking.
//! - [`document`] — Tag and attribute queries over a parsed storyboard.
//! - [`extract`] — Identifier extractors.
//! - [`diagnostics`] — Missing identifier policy and diagnostic sinks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use referee_core::CollectingSink;
//! use referee_core::ProjectContext;
//! use std::path::Path;
//!
//! let ctx = ProjectContext::load(Path::new(".")).unwrap();
//! let mut sink = CollectingSink::new();
//! let result = ctx.scan(&mut sink).unwrap();
//!
//! for group in &result {
//! 	println!("{}: {} controllers", group.storyboard_name(), group.view_controllers().len());
//! }
//! for warning in sink.warnings() {
//! 	eprintln!("warning: {}", warning.message());
//! }
//! ```

pub use config::*;
pub use controller::*;
pub use diagnostics::*;
pub use error::*;
pub use manifest::*;
pub use resource::*;
pub use scanner::*;

pub mod config;
mod controller;
pub mod diagnostics;
pub mod document;
#[allow(unused_assignments)]
mod error;
pub mod extract;
pub mod manifest;
mod resource;
mod scanner;

#[cfg(test)]
mod __fixtures;
