use crate::id3::v2::FrameId;

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A decoded frame, as a `(label, value)` pair
///
/// Frames that are recognized but not decoded have an empty label and value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodedField {
	/// A human readable name for the frame
	pub label: String,
	/// The decoded frame content
	pub value: String,
}

impl DecodedField {
	/// Create a new [`DecodedField`]
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}

	/// Whether the frame was recognized but not decoded
	pub fn is_undecoded(&self) -> bool {
		self.label.is_empty() && self.value.is_empty()
	}
}

impl Display for DecodedField {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.label, self.value)
	}
}

/// The decoded frames of an ID3v2 tag block
///
/// There is at most one field per frame ID. When a frame ID appears multiple times, the last
/// occurrence wins. Iteration is in frame ID order.
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::{DecodedField, FrameId, Id3v2Fields};
///
/// let title = FrameId::new("TIT2").unwrap();
///
/// let mut fields = Id3v2Fields::default();
/// fields.insert(title, DecodedField::new("Title", "Bohemian Rhapsody"));
///
/// assert_eq!(fields.value("TIT2"), Some("Bohemian Rhapsody"));
/// assert_eq!(fields.label("TIT2"), Some("Title"));
/// assert_eq!(fields.value("TALB"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Id3v2Fields {
	fields: BTreeMap<FrameId, DecodedField>,
}

impl Id3v2Fields {
	/// Get the field for a frame ID
	///
	/// IDs that are not exactly 4 bytes never match.
	pub fn get(&self, id: &str) -> Option<&DecodedField> {
		self.fields.get(&FrameId::new(id)?)
	}

	/// Get the value of the field for a frame ID
	pub fn value(&self, id: &str) -> Option<&str> {
		self.get(id).map(|field| field.value.as_str())
	}

	/// Get the label of the field for a frame ID
	pub fn label(&self, id: &str) -> Option<&str> {
		self.get(id).map(|field| field.label.as_str())
	}

	/// Insert a field, returning the one it replaced
	pub fn insert(&mut self, id: FrameId, field: DecodedField) -> Option<DecodedField> {
		self.fields.insert(id, field)
	}

	/// The number of fields
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether there are no fields
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// An iterator over the fields, in frame ID order
	pub fn iter(&self) -> impl Iterator<Item = (FrameId, &DecodedField)> {
		self.fields.iter().map(|(id, field)| (*id, field))
	}
}

impl<'a> IntoIterator for &'a Id3v2Fields {
	type Item = (&'a FrameId, &'a DecodedField);
	type IntoIter = std::collections::btree_map::Iter<'a, FrameId, DecodedField>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.iter()
	}
}
