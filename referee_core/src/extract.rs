use std::collections::HashSet;
use std::hash::Hash;

use crate::controller::ControllerDescriptor;
use crate::controller::ControllerExtraction;
use crate::controller::ControllerKind;
use crate::document::StoryboardDocument;

pub const TABLE_CELL_TAG: &str = "tableViewCell";
pub const COLLECTION_CELL_TAG: &str = "collectionViewCell";
pub const SEGUE_TAG: &str = "segue";

pub const REUSE_IDENTIFIER_ATTRIBUTE: &str = "reuseIdentifier";
pub const STORYBOARD_IDENTIFIER_ATTRIBUTE: &str = "storyboardIdentifier";
pub const CUSTOM_CLASS_ATTRIBUTE: &str = "customClass";
pub const SEGUE_IDENTIFIER_ATTRIBUTE: &str = "identifier";

/// The reusable cell flavours a storyboard can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
	Table,
	Collection,
}

impl CellKind {
	pub const fn tag(self) -> &'static str {
		match self {
			Self::Table => TABLE_CELL_TAG,
			Self::Collection => COLLECTION_CELL_TAG,
		}
	}
}

/// Everything extracted from a single storyboard, before it is turned into a
/// [`ResourceGroup`](crate::ResourceGroup).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
	pub table_cells: Vec<String>,
	pub collection_cells: Vec<String>,
	pub controllers: ControllerExtraction,
	pub segues: Vec<String>,
}

impl Extraction {
	/// Run every extractor over `document`.
	pub fn from_document(document: &StoryboardDocument<'_>) -> Self {
		Self {
			table_cells: extract_table_cells(document),
			collection_cells: extract_collection_cells(document),
			controllers: extract_controllers(document),
			segues: extract_segues(document),
		}
	}
}

/// Reuse identifiers of every cell of `kind`, trimmed and deduplicated in
/// first-seen order. Cells without an identifier are skipped.
pub fn extract_cell_identifiers(document: &StoryboardDocument<'_>, kind: CellKind) -> Vec<String> {
	let identifiers = document
		.find(&[kind.tag()])
		.into_iter()
		.filter_map(|cell| normalize_identifier(cell.attribute(REUSE_IDENTIFIER_ATTRIBUTE)));

	dedup_preserving_order(identifiers)
}

pub fn extract_table_cells(document: &StoryboardDocument<'_>) -> Vec<String> {
	extract_cell_identifiers(document, CellKind::Table)
}

pub fn extract_collection_cells(document: &StoryboardDocument<'_>) -> Vec<String> {
	extract_cell_identifiers(document, CellKind::Collection)
}

/// Describe every view controller in `document` with a single query over all
/// controller tags.
///
/// Elements without a Storyboard ID count towards `total` and `missing` but
/// are left out of `valid`. Descriptors in `valid` are deduplicated by
/// identifier and class together, so the same identifier used with two
/// different classes appears twice.
pub fn extract_controllers(document: &StoryboardDocument<'_>) -> ControllerExtraction {
	let elements = document.find(&ControllerKind::tags());
	let total = elements.len();
	let mut missing = 0;
	let mut identified = Vec::with_capacity(total);

	for element in elements {
		let Some(identifier) = normalize_identifier(element.attribute(STORYBOARD_IDENTIFIER_ATTRIBUTE))
		else {
			missing += 1;
			continue;
		};

		let class = element
			.attribute(CUSTOM_CLASS_ATTRIBUTE)
			.map(str::to_string)
			.or_else(|| {
				ControllerKind::from_tag(element.tag_name())
					.map(|kind| kind.default_class().to_string())
			});

		identified.push(ControllerDescriptor { identifier, class });
	}

	ControllerExtraction {
		valid: dedup_preserving_order(identified),
		total,
		missing,
	}
}

/// Segue identifiers, trimmed and deduplicated in first-seen order. Segues
/// without an identifier are skipped.
pub fn extract_segues(document: &StoryboardDocument<'_>) -> Vec<String> {
	let identifiers = document
		.find(&[SEGUE_TAG])
		.into_iter()
		.filter_map(|segue| normalize_identifier(segue.attribute(SEGUE_IDENTIFIER_ATTRIBUTE)));

	dedup_preserving_order(identifiers)
}

fn normalize_identifier(value: Option<&str>) -> Option<String> {
	let trimmed = value?.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn dedup_preserving_order<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
	T: Clone + Eq + Hash,
{
	let mut seen = HashSet::new();
	items
		.into_iter()
		.filter(|item| seen.insert(item.clone()))
		.collect()
}
