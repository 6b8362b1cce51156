use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;
use serde::Deserialize;
use serde::Serialize;

use crate::RefereeError;
use crate::RefereeResult;
use crate::config::RefereeConfig;

/// The declared file type Xcode records for storyboards.
pub const STORYBOARD_FILE_TYPE: &str = "file.storyboard";

/// Declared type for files whose extension has no better match.
pub const GENERIC_FILE_TYPE: &str = "file";

/// A file known to the project together with its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
	/// Resolved location of the file on disk.
	pub real_path: PathBuf,
	/// Declared file type, using Xcode's `lastKnownFileType` vocabulary.
	pub file_type: String,
}

impl FileEntry {
	pub fn new(real_path: impl Into<PathBuf>, file_type: impl Into<String>) -> Self {
		Self {
			real_path: real_path.into(),
			file_type: file_type.into(),
		}
	}

	/// Build an entry whose declared type is inferred from the extension.
	pub fn from_path(real_path: impl Into<PathBuf>) -> Self {
		let real_path = real_path.into();
		let file_type = file_type_for_path(&real_path);
		Self::new(real_path, file_type)
	}

	pub fn is_storyboard(&self) -> bool {
		self.file_type == STORYBOARD_FILE_TYPE
	}
}

/// The ordered list of files belonging to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
	entries: Vec<FileEntry>,
}

impl ProjectManifest {
	pub fn new(entries: Vec<FileEntry>) -> Self {
		Self { entries }
	}

	pub fn entries(&self) -> &[FileEntry] {
		&self.entries
	}

	/// Entries declared as storyboards, in manifest order.
	pub fn storyboards(&self) -> impl Iterator<Item = &FileEntry> {
		self.entries.iter().filter(|entry| entry.is_storyboard())
	}

	/// Build a manifest by walking `root` with the scanning options from
	/// `config`.
	pub fn from_config(root: &Path, config: &RefereeConfig) -> RefereeResult<Self> {
		Self::from_directory(root, &config.exclude.patterns, config.disable_gitignore)
	}

	/// Build a manifest by walking a project directory.
	///
	/// Hidden directories, build products and dependency checkouts are
	/// skipped. Files matched by the root `.gitignore` (unless
	/// `disable_gitignore` is set) or by `exclude_patterns` are left out.
	/// Entries are sorted by path so repeated walks yield the same manifest.
	pub fn from_directory(
		root: &Path,
		exclude_patterns: &[String],
		disable_gitignore: bool,
	) -> RefereeResult<Self> {
		if !root.is_dir() {
			return Err(RefereeError::ProjectNotFound(root.display().to_string()));
		}

		let gitignore = if disable_gitignore {
			Gitignore::empty()
		} else {
			build_gitignore(root)
		};
		let custom_exclude = build_exclude_matcher(root, exclude_patterns)?;

		let mut files = Vec::new();
		let mut visited_dirs = HashSet::new();
		walk_dir(
			root,
			&mut files,
			&gitignore,
			&custom_exclude,
			&mut visited_dirs,
		)?;
		files.sort();

		let entries = files.into_iter().map(FileEntry::from_path).collect();
		Ok(Self { entries })
	}
}

/// Infer Xcode's declared file type from a path's extension.
pub fn file_type_for_path(path: &Path) -> &'static str {
	let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
		return GENERIC_FILE_TYPE;
	};

	match ext {
		"storyboard" => STORYBOARD_FILE_TYPE,
		"xib" => "file.xib",
		"swift" => "sourcecode.swift",
		"m" => "sourcecode.c.objc",
		"mm" => "sourcecode.cpp.objcpp",
		"h" => "sourcecode.c.h",
		"plist" => "text.plist.xml",
		"strings" => "text.plist.strings",
		"json" => "text.json",
		"png" => "image.png",
		_ => GENERIC_FILE_TYPE,
	}
}

/// Build a `Gitignore` matcher from `[exclude]` patterns in `referee.toml`.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> RefereeResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder
			.add_line(None, pattern)
			.map_err(|e| RefereeError::InvalidExcludePattern {
				pattern: pattern.clone(),
				reason: e.to_string(),
			})?;
	}
	builder
		.build()
		.map_err(|e| RefereeError::InvalidExcludePattern {
			pattern: patterns.join(", "),
			reason: e.to_string(),
		})
}

/// Build a `Gitignore` matcher from the project's `.gitignore` file (if any).
fn build_gitignore(root: &Path) -> Gitignore {
	let mut builder = GitignoreBuilder::new(root);
	let gitignore_path = root.join(".gitignore");
	if gitignore_path.exists() {
		let _ = builder.add(gitignore_path);
	}
	builder.build().unwrap_or_else(|_| Gitignore::empty())
}

/// Directories that never hold project sources: hidden folders, build
/// output, dependency checkouts and bundles Xcode manages itself.
fn is_ignored_directory(path: &Path) -> bool {
	let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
		return false;
	};

	if name.starts_with('.') || matches!(name, "build" | "DerivedData" | "Pods" | "Carthage") {
		return true;
	}

	matches!(
		path.extension().and_then(|e| e.to_str()),
		Some("xcodeproj" | "xcworkspace" | "xcassets" | "framework")
	)
}

fn walk_dir(
	dir: &Path,
	files: &mut Vec<PathBuf>,
	gitignore: &Gitignore,
	custom_exclude: &Gitignore,
	visited_dirs: &mut HashSet<PathBuf>,
) -> RefereeResult<()> {
	// Symlinked directories can point back up the tree.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		tracing::debug!(dir = %dir.display(), "skipping already visited directory");
		return Ok(());
	}

	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();
		let is_dir = path.is_dir();

		if is_dir && is_ignored_directory(&path) {
			continue;
		}

		if gitignore.matched(&path, is_dir).is_ignore()
			|| custom_exclude.matched(&path, is_dir).is_ignore()
		{
			continue;
		}

		if is_dir {
			walk_dir(&path, files, gitignore, custom_exclude, visited_dirs)?;
		} else {
			files.push(path);
		}
	}

	Ok(())
}
