use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::RefereeError;
use crate::RefereeResult;
use crate::diagnostics::MissingIdentifierPolicy;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"referee.toml",
	".referee.toml",
	".config/referee.toml",
];

/// Default directory, relative to the project root, that generated accessor
/// code is written to.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "Generated";

/// Configuration loaded from a `referee.toml` file.
///
/// ```toml
/// project = "App"
/// error_on_missing_storyboard_ids = true
///
/// [exclude]
/// patterns = ["Pods/", "*.generated.storyboard"]
///
/// [output]
/// directory = "App/Generated"
/// class_prefix = "AB"
/// language = "swift"
/// ```
///
/// Only `project`, `error_on_missing_storyboard_ids`, `disable_gitignore` and
/// `[exclude]` affect scanning. The `[output]` table is carried on every
/// [`ResourceGroup`](crate::ResourceGroup) unchanged for the code generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereeConfig {
	/// Project directory to scan, relative to the directory holding the
	/// config file.
	#[serde(default = "default_project")]
	pub project: PathBuf,
	/// When true a storyboard with view controllers lacking a Storyboard ID
	/// aborts the scan instead of producing a warning.
	#[serde(default)]
	pub error_on_missing_storyboard_ids: bool,
	/// When true, `.gitignore` files are not used to filter the manifest.
	#[serde(default)]
	pub disable_gitignore: bool,
	/// Exclusion configuration using gitignore-style patterns.
	#[serde(default)]
	pub exclude: ExcludeConfig,
	/// Naming options for the code generator.
	#[serde(default)]
	pub output: OutputConfig,
}

impl Default for RefereeConfig {
	fn default() -> Self {
		Self {
			project: default_project(),
			error_on_missing_storyboard_ids: false,
			disable_gitignore: false,
			exclude: ExcludeConfig::default(),
			output: OutputConfig::default(),
		}
	}
}

/// Configuration for excluding files and directories from the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeConfig {
	/// Gitignore-style patterns relative to the project root.
	///
	/// Examples: `"Pods/"`, `"Carthage/"`, `"*.generated.storyboard"`.
	#[serde(default)]
	pub patterns: Vec<String>,
}

/// Target language of the generated accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputLanguage {
	#[default]
	Swift,
	Objc,
}

/// Options consumed by the code generator. Opaque to scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
	#[serde(default = "default_output_directory")]
	pub directory: PathBuf,
	/// Prefix applied to generated type names.
	#[serde(default)]
	pub class_prefix: String,
	#[serde(default)]
	pub language: OutputLanguage,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			directory: default_output_directory(),
			class_prefix: String::new(),
			language: OutputLanguage::default(),
		}
	}
}

fn default_project() -> PathBuf {
	PathBuf::from(".")
}

fn default_output_directory() -> PathBuf {
	PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)
}

impl RefereeConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> RefereeResult<Option<RefereeConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::from_toml(&content)?;

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults when no config
	/// file is present.
	pub fn load_or_default(root: &Path) -> RefereeResult<RefereeConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Parse a config from TOML source.
	pub fn from_toml(content: &str) -> RefereeResult<RefereeConfig> {
		toml::from_str(content).map_err(|e| RefereeError::ConfigParse(e.to_string()))
	}

	/// The directory to scan, resolved against the config root.
	pub fn project_root(&self, root: &Path) -> PathBuf {
		if self.project.is_absolute() {
			self.project.clone()
		} else {
			root.join(&self.project)
		}
	}

	/// How missing view controller identifiers are reported.
	pub fn missing_identifier_policy(&self) -> MissingIdentifierPolicy {
		MissingIdentifierPolicy::from_flag(self.error_on_missing_storyboard_ids)
	}
}
