use std::path::PathBuf;

use serde::Serialize;

/// How a storyboard with view controllers lacking a Storyboard ID is
/// treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingIdentifierPolicy {
	/// Report a warning and keep scanning.
	#[default]
	Warn,
	/// Report an error and abort the scan.
	Error,
}

impl MissingIdentifierPolicy {
	/// Map the `error_on_missing_storyboard_ids` config flag to a policy.
	pub fn from_flag(error_on_missing: bool) -> Self {
		if error_on_missing {
			Self::Error
		} else {
			Self::Warn
		}
	}

	pub fn severity(self) -> Severity {
		match self {
			Self::Warn => Severity::Warning,
			Self::Error => Severity::Error,
		}
	}

	pub fn is_fatal(self) -> bool {
		self == Self::Error
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Warning,
	Error,
}

/// The kind of finding produced while scanning storyboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum DiagnosticKind {
	/// Some view controllers in the storyboard have no Storyboard ID.
	MissingViewControllerIds {
		/// Display name of the storyboard.
		storyboard: String,
		/// Number of controller elements without an identifier.
		count: usize,
	},
}

/// A finding reported to a [`DiagnosticSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanDiagnostic {
	/// The storyboard file the finding belongs to.
	pub file: PathBuf,
	pub kind: DiagnosticKind,
	pub severity: Severity,
}

impl ScanDiagnostic {
	/// Human-readable message for this diagnostic.
	pub fn message(&self) -> String {
		match &self.kind {
			DiagnosticKind::MissingViewControllerIds { storyboard, .. } => {
				format!("Missing view controller ID(s) in '{storyboard}' storyboard!")
			}
		}
	}

	pub fn is_error(&self) -> bool {
		self.severity == Severity::Error
	}
}

/// Receives diagnostics as the scanner produces them, in discovery order.
///
/// The sink only observes; whether a diagnostic aborts the scan is decided by
/// the [`MissingIdentifierPolicy`].
pub trait DiagnosticSink {
	fn report(&mut self, diagnostic: &ScanDiagnostic);
}

/// A sink that keeps every diagnostic it receives.
#[derive(Debug, Default)]
pub struct CollectingSink {
	pub diagnostics: Vec<ScanDiagnostic>,
}

impl CollectingSink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn warnings(&self) -> impl Iterator<Item = &ScanDiagnostic> {
		self.diagnostics
			.iter()
			.filter(|diagnostic| diagnostic.severity == Severity::Warning)
	}

	pub fn errors(&self) -> impl Iterator<Item = &ScanDiagnostic> {
		self.diagnostics.iter().filter(|diagnostic| diagnostic.is_error())
	}

	pub fn is_empty(&self) -> bool {
		self.diagnostics.is_empty()
	}
}

impl DiagnosticSink for CollectingSink {
	fn report(&mut self, diagnostic: &ScanDiagnostic) {
		self.diagnostics.push(diagnostic.clone());
	}
}

/// A sink that forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn report(&mut self, diagnostic: &ScanDiagnostic) {
		let file = diagnostic.file.display();
		match diagnostic.severity {
			Severity::Warning => tracing::warn!(%file, "{}", diagnostic.message()),
			Severity::Error => tracing::error!(%file, "{}", diagnostic.message()),
		}
	}
}
