pub(in crate::id3::v2) mod parse;

use crate::id3::v2::FrameFlags;

use std::fmt::{Debug, Display, Formatter};

/// An ID3v2.3 frame header
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	pub(crate) id: FrameId,
	/// The payload size, **NOT** including the header or any extra fields
	pub size: u32,
	#[allow(missing_docs)]
	pub flags: FrameFlags,
}

impl FrameHeader {
	/// The size of a frame header on disk
	pub const LEN: usize = 10;

	/// Get the ID of the frame
	pub const fn id(&self) -> FrameId {
		self.id
	}
}

/// An `ID3v2` frame ID
///
/// This is always 4 bytes. Unlike a [`String`], it is `Copy` and orders byte-wise, so collections
/// keyed by it iterate in frame ID order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId([u8; 4]);

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// Returns `None` if `id` is not exactly 4 bytes long.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::FrameId;
	///
	/// let title = FrameId::new("TIT2").unwrap();
	/// assert_eq!(title.as_str(), "TIT2");
	///
	/// assert!(FrameId::new("TT2").is_none());
	/// ```
	pub fn new(id: &str) -> Option<Self> {
		let bytes: [u8; 4] = id.as_bytes().try_into().ok()?;
		Some(Self(bytes))
	}

	/// Create a `FrameId` from the raw bytes of a frame header
	///
	/// No validation is done, IDs in the wild are not always uppercase ASCII.
	pub const fn from_bytes(bytes: [u8; 4]) -> Self {
		Self(bytes)
	}

	/// The raw ID bytes
	pub const fn as_bytes(&self) -> &[u8; 4] {
		&self.0
	}

	/// Extracts the string from the ID
	///
	/// IDs that are not valid UTF-8 are replaced with `"????"`.
	pub fn as_str(&self) -> &str {
		std::str::from_utf8(&self.0).unwrap_or("????")
	}

	/// Whether this ID is the start of padding rather than a frame
	pub(crate) fn is_empty(self) -> bool {
		self.0[0] == 0
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Debug for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "FrameId({:?})", String::from_utf8_lossy(&self.0))
	}
}

impl PartialEq<&str> for FrameId {
	fn eq(&self, other: &&str) -> bool {
		self.0.as_slice() == other.as_bytes()
	}
}
