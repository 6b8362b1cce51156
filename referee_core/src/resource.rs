use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use derive_more::Deref;
use serde::Serialize;

use crate::config::RefereeConfig;
use crate::controller::ControllerDescriptor;
use crate::extract::Extraction;

/// All identifiers extracted from one storyboard. This is the unit handed to
/// the code generator.
///
/// Groups are immutable once built. `view_controllers` only holds controllers
/// with a Storyboard ID; whether any were missing is decided by the
/// [`Scanner`](crate::Scanner) before the group is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceGroup {
	storyboard_path: PathBuf,
	storyboard_name: String,
	table_cells: Vec<String>,
	collection_cells: Vec<String>,
	view_controllers: Vec<ControllerDescriptor>,
	segues: Vec<String>,
	#[serde(skip)]
	config: Arc<RefereeConfig>,
}

impl ResourceGroup {
	/// Aggregate an extraction with its source file and the active config.
	pub fn build(path: &Path, extraction: Extraction, config: Arc<RefereeConfig>) -> Self {
		Self {
			storyboard_path: path.to_path_buf(),
			storyboard_name: storyboard_name(path),
			table_cells: extraction.table_cells,
			collection_cells: extraction.collection_cells,
			view_controllers: extraction.controllers.valid,
			segues: extraction.segues,
			config,
		}
	}

	pub fn storyboard_path(&self) -> &Path {
		&self.storyboard_path
	}

	/// Display name of the storyboard: its file name without extension.
	pub fn storyboard_name(&self) -> &str {
		&self.storyboard_name
	}

	pub fn table_cells(&self) -> &[String] {
		&self.table_cells
	}

	pub fn collection_cells(&self) -> &[String] {
		&self.collection_cells
	}

	pub fn view_controllers(&self) -> &[ControllerDescriptor] {
		&self.view_controllers
	}

	pub fn segues(&self) -> &[String] {
		&self.segues
	}

	pub fn config(&self) -> &RefereeConfig {
		&self.config
	}

	/// True when the storyboard declared nothing worth generating code for.
	pub fn is_empty(&self) -> bool {
		self.table_cells.is_empty()
			&& self.collection_cells.is_empty()
			&& self.view_controllers.is_empty()
			&& self.segues.is_empty()
	}
}

/// The display name used in diagnostics and generated type names.
pub fn storyboard_name(path: &Path) -> String {
	path.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.unwrap_or_default()
}

/// Resource groups in storyboard discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref)]
#[serde(transparent)]
pub struct ScanResult(#[deref] Vec<ResourceGroup>);

impl ScanResult {
	pub(crate) fn push(&mut self, group: ResourceGroup) {
		self.0.push(group);
	}

	pub fn into_inner(self) -> Vec<ResourceGroup> {
		self.0
	}

	pub fn find(&self, storyboard_name: &str) -> Option<&ResourceGroup> {
		self.0
			.iter()
			.find(|group| group.storyboard_name == storyboard_name)
	}
}

impl IntoIterator for ScanResult {
	type IntoIter = std::vec::IntoIter<ResourceGroup>;
	type Item = ResourceGroup;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a ScanResult {
	type IntoIter = std::slice::Iter<'a, ResourceGroup>;
	type Item = &'a ResourceGroup;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
