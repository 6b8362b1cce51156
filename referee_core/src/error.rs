use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum RefereeError {
	#[error(transparent)]
	#[diagnostic(code(referee::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(referee::config_parse),
		help("check that referee.toml is valid TOML with optional [exclude] and [output] sections")
	)]
	ConfigParse(String),

	#[error("project directory not found: `{0}`")]
	#[diagnostic(
		code(referee::project_not_found),
		help("set `project` in referee.toml or pass `--path` to point at the Xcode project root")
	)]
	ProjectNotFound(String),

	#[error("invalid exclude pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(referee::invalid_exclude_pattern),
		help("exclude patterns use gitignore syntax, e.g. `Pods/` or `*.generated.storyboard`")
	)]
	InvalidExcludePattern { pattern: String, reason: String },

	#[error("failed to read storyboard `{path}`: {reason}")]
	#[diagnostic(code(referee::storyboard_read))]
	StoryboardRead { path: String, reason: String },

	#[error("failed to parse storyboard `{path}`: {reason}")]
	#[diagnostic(
		code(referee::storyboard_parse),
		help("open the storyboard in Xcode and save it again to repair malformed XML")
	)]
	StoryboardParse { path: String, reason: String },

	#[error("Missing view controller ID(s) in '{storyboard}' storyboard!")]
	#[diagnostic(
		code(referee::missing_view_controller_ids),
		help(
			"give every view controller a Storyboard ID in Interface Builder, or set \
			 `error_on_missing_storyboard_ids = false` to only warn"
		)
	)]
	MissingViewControllerIds { storyboard: String },
}

pub type RefereeResult<T> = Result<T, RefereeError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
