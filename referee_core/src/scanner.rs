use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use crate::RefereeError;
use crate::RefereeResult;
use crate::config::RefereeConfig;
use crate::diagnostics::DiagnosticKind;
use crate::diagnostics::DiagnosticSink;
use crate::diagnostics::MissingIdentifierPolicy;
use crate::diagnostics::ScanDiagnostic;
use crate::document::StoryboardDocument;
use crate::extract::Extraction;
use crate::manifest::FileEntry;
use crate::manifest::ProjectManifest;
use crate::resource::ResourceGroup;
use crate::resource::ScanResult;
use crate::resource::storyboard_name;

/// Drives extraction over every storyboard in a manifest and applies the
/// missing identifier policy.
///
/// Each storyboard is read, parsed, extracted and dropped before the next
/// one is opened. Diagnostics reach the sink in manifest order.
pub struct Scanner<'sink> {
	config: Arc<RefereeConfig>,
	policy: MissingIdentifierPolicy,
	sink: &'sink mut dyn DiagnosticSink,
}

impl<'sink> Scanner<'sink> {
	/// Create a scanner whose policy follows `config`.
	pub fn new(config: Arc<RefereeConfig>, sink: &'sink mut dyn DiagnosticSink) -> Self {
		let policy = config.missing_identifier_policy();
		Self {
			config,
			policy,
			sink,
		}
	}

	/// Override the policy derived from the config.
	#[must_use]
	pub fn with_policy(mut self, policy: MissingIdentifierPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn policy(&self) -> MissingIdentifierPolicy {
		self.policy
	}

	/// Scan every storyboard in `manifest`.
	///
	/// A storyboard that cannot be read or parsed aborts the scan. Under
	/// [`MissingIdentifierPolicy::Error`] the first storyboard with a missing
	/// Storyboard ID aborts the scan as well, and later storyboards are not
	/// opened.
	pub fn scan(&mut self, manifest: &ProjectManifest) -> RefereeResult<ScanResult> {
		let storyboards = find_storyboards(manifest);
		tracing::debug!(count = storyboards.len(), "discovered storyboards");

		let mut result = ScanResult::default();
		for entry in storyboards {
			let group = self.scan_storyboard(&entry.real_path)?;
			result.push(group);
		}

		Ok(result)
	}

	/// Read and scan a single storyboard file.
	pub fn scan_storyboard(&mut self, path: &Path) -> RefereeResult<ResourceGroup> {
		let content = std::fs::read_to_string(path).map_err(|e| {
			RefereeError::StoryboardRead {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})?;

		self.scan_source(path, &content)
	}

	/// Scan storyboard markup that has already been loaded from `path`.
	pub fn scan_source(&mut self, path: &Path, content: &str) -> RefereeResult<ResourceGroup> {
		tracing::debug!(storyboard = %path.display(), "scanning storyboard");

		let document =
			StoryboardDocument::parse(content).map_err(|e| RefereeError::StoryboardParse {
				path: path.display().to_string(),
				reason: e.to_string(),
			})?;
		let extraction = Extraction::from_document(&document);

		let missing = extraction.controllers.missing;
		let group = ResourceGroup::build(path, extraction, Arc::clone(&self.config));

		if missing > 0 {
			self.report_missing_identifiers(path.to_path_buf(), group.storyboard_name(), missing)?;
		}

		Ok(group)
	}

	fn report_missing_identifiers(
		&mut self,
		file: PathBuf,
		storyboard: &str,
		count: usize,
	) -> RefereeResult<()> {
		let diagnostic = ScanDiagnostic {
			file,
			kind: DiagnosticKind::MissingViewControllerIds {
				storyboard: storyboard.to_string(),
				count,
			},
			severity: self.policy.severity(),
		};
		self.sink.report(&diagnostic);

		if self.policy.is_fatal() {
			return Err(RefereeError::MissingViewControllerIds {
				storyboard: storyboard.to_string(),
			});
		}

		Ok(())
	}
}

/// Manifest entries declared as storyboards, in manifest order.
pub fn find_storyboards(manifest: &ProjectManifest) -> Vec<&FileEntry> {
	manifest.storyboards().collect()
}

/// Scan `manifest` with a policy taken from `config`.
pub fn scan_project(
	manifest: &ProjectManifest,
	config: Arc<RefereeConfig>,
	sink: &mut dyn DiagnosticSink,
) -> RefereeResult<ScanResult> {
	Scanner::new(config, sink).scan(manifest)
}

/// A project root together with its loaded config and file manifest, ready
/// to scan.
#[derive(Debug)]
pub struct ProjectContext {
	/// Directory the config was discovered in.
	pub root: PathBuf,
	pub config: Arc<RefereeConfig>,
	pub manifest: ProjectManifest,
}

impl ProjectContext {
	/// Load `referee.toml` from `root` (or defaults) and build the manifest.
	pub fn load(root: &Path) -> RefereeResult<Self> {
		let config = RefereeConfig::load_or_default(root)?;
		Self::with_config(root, config)
	}

	/// Build the manifest for `root` using an already loaded config.
	pub fn with_config(root: &Path, config: RefereeConfig) -> RefereeResult<Self> {
		let project_root = config.project_root(root);
		let manifest = ProjectManifest::from_config(&project_root, &config)?;

		Ok(Self {
			root: root.to_path_buf(),
			config: Arc::new(config),
			manifest,
		})
	}

	pub fn scan(&self, sink: &mut dyn DiagnosticSink) -> RefereeResult<ScanResult> {
		scan_project(&self.manifest, Arc::clone(&self.config), sink)
	}

	/// Display names of the storyboards a scan would visit.
	pub fn storyboard_names(&self) -> Vec<String> {
		self.manifest
			.storyboards()
			.map(|entry| storyboard_name(&entry.real_path))
			.collect()
	}
}
