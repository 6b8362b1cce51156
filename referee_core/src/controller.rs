use serde::Deserialize;
use serde::Serialize;

/// The view controller element kinds Interface Builder writes into a
/// storyboard. The XML tag name only matters at the markup boundary; see
/// [`ControllerKind::tag`] and [`ControllerKind::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControllerKind {
	ViewController,
	TableViewController,
	NavigationController,
	GlkViewController,
	PageViewController,
	CollectionViewController,
	SplitViewController,
	AvPlayerViewController,
	TabBarController,
}

impl ControllerKind {
	pub const ALL: [ControllerKind; 9] = [
		Self::ViewController,
		Self::TableViewController,
		Self::NavigationController,
		Self::GlkViewController,
		Self::PageViewController,
		Self::CollectionViewController,
		Self::SplitViewController,
		Self::AvPlayerViewController,
		Self::TabBarController,
	];

	/// The storyboard element tag for this kind.
	pub const fn tag(self) -> &'static str {
		match self {
			Self::ViewController => "viewController",
			Self::TableViewController => "tableViewController",
			Self::NavigationController => "navigationController",
			Self::GlkViewController => "glkViewController",
			Self::PageViewController => "pageViewController",
			Self::CollectionViewController => "collectionViewController",
			Self::SplitViewController => "splitViewController",
			Self::AvPlayerViewController => "avPlayerViewController",
			Self::TabBarController => "tabBarController",
		}
	}

	/// The framework class used when the element has no `customClass`.
	pub const fn default_class(self) -> &'static str {
		match self {
			Self::ViewController => "UIViewController",
			Self::TableViewController => "UITableViewController",
			Self::NavigationController => "UINavigationController",
			Self::GlkViewController => "GLKViewController",
			Self::PageViewController => "UIPageViewController",
			Self::CollectionViewController => "UICollectionViewController",
			Self::SplitViewController => "UISplitViewController",
			Self::AvPlayerViewController => "AVPlayerViewController",
			Self::TabBarController => "UITabBarController",
		}
	}

	pub fn from_tag(tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.tag() == tag)
	}

	/// Every controller tag, for a single combined query.
	pub fn tags() -> [&'static str; 9] {
		Self::ALL.map(Self::tag)
	}
}

/// A view controller's Storyboard ID paired with its implementing class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerDescriptor {
	pub identifier: String,
	/// `None` only for an element whose tag has no known default class and
	/// which carries no `customClass`.
	pub class: Option<String>,
}

impl ControllerDescriptor {
	pub fn new(identifier: impl Into<String>, class: Option<impl Into<String>>) -> Self {
		Self {
			identifier: identifier.into(),
			class: class.map(Into::into),
		}
	}
}

/// The result of one pass over a storyboard's controller elements.
///
/// All three values come from the same query so they can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerExtraction {
	/// Identifier-bearing descriptors, deduplicated by full descriptor
	/// equality, in document order.
	pub valid: Vec<ControllerDescriptor>,
	/// Every matched controller element, with or without an identifier.
	pub total: usize,
	/// Matched elements whose identifier was absent or blank.
	pub missing: usize,
}

impl ControllerExtraction {
	/// Whether at least one controller element lacked a Storyboard ID.
	pub fn has_missing_identifiers(&self) -> bool {
		self.missing > 0
	}
}
