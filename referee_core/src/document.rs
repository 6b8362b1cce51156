//! Thin query layer over a parsed storyboard.
//!
//! Storyboards are plain XML without namespaces. The extractors only need to
//! find elements by tag name and read their attributes, so this module hides
//! [`roxmltree`] behind those two operations.

use roxmltree::Document;
use roxmltree::Node;

/// The parsed form of one storyboard file.
///
/// A document is parsed once and may then be queried any number of times.
/// Query results borrow from the document and are returned in document
/// order.
#[derive(Debug)]
pub struct StoryboardDocument<'input> {
	document: Document<'input>,
}

impl<'input> StoryboardDocument<'input> {
	/// Parse storyboard markup. Malformed XML is reported as an error for
	/// this document only; the caller decides how to surface it.
	pub fn parse(text: &'input str) -> Result<Self, roxmltree::Error> {
		let document = Document::parse(text)?;
		Ok(Self { document })
	}

	/// All elements whose tag name is one of `tags`, in document order.
	///
	/// The document is walked once regardless of how many tags are given.
	pub fn find<'a>(&'a self, tags: &[&str]) -> Vec<Element<'a, 'input>> {
		self.document
			.descendants()
			.filter(|node| node.is_element() && tags.contains(&node.tag_name().name()))
			.map(|node| Element { node })
			.collect()
	}

	/// The tag name of the root element (`document` for Xcode storyboards).
	pub fn root_tag_name(&self) -> &str {
		self.document.root_element().tag_name().name()
	}
}

/// A single element matched by [`StoryboardDocument::find`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'a, 'input> {
	node: Node<'a, 'input>,
}

impl<'a> Element<'a, '_> {
	/// The element's local tag name, e.g. `tableViewCell`.
	pub fn tag_name(&self) -> &'a str {
		self.node.tag_name().name()
	}

	/// The raw value of the named attribute, if present.
	pub fn attribute(&self, name: &str) -> Option<&'a str> {
		self.node.attribute(name)
	}
}
