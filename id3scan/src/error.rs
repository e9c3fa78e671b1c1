//! Contains the errors that can arise within id3scan
//!
//! The primary error is [`Id3ScanError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::id3::v2::FrameId;

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Id3ScanError>`
pub type Result<T> = std::result::Result<T, Id3ScanError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Errors that arise while reading ID3v2 tags
	Id3v2(Id3v2Error),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`] other than running out of input.
	Io(std::io::Error),
}

/// The types of errors that can occur while reading an ID3v2 tag block
#[derive(Debug)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// The fixed 10-byte header is missing or invalid
	///
	/// This covers a bad "ID3" magic, a 0xFF version or revision byte, reserved header flag bits,
	/// and a size byte with its high bit set.
	MalformedHeader(&'static str),
	/// Fewer bytes were available than a fixed-size read requires
	TruncatedInput {
		/// The number of bytes the read needed
		expected: u64,
		/// The number of bytes that were actually available
		available: u64,
	},

	// Header or frame
	/// An extended header or frame has flag bits set outside of the legal mask
	InvalidFlags {
		/// The frame the flags belong to, or `None` for the extended header
		frame: Option<FrameId>,
		/// The raw flags
		flags: u16,
	},

	// Frame
	/// A picture or private frame is missing one of its 0x00 delimiters
	UnterminatedSpecialFrame(FrameId, &'static str),
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::MalformedHeader(reason) => write!(f, "Invalid ID3v2 header: {reason}"),
			Self::TruncatedInput {
				expected,
				available,
			} => write!(
				f,
				"Expected {expected} bytes, but only {available} were available"
			),
			Self::InvalidFlags {
				frame: Some(id),
				flags,
			} => write!(f, "Invalid flags for frame {id} (0x{flags:x})"),
			Self::InvalidFlags { frame: None, flags } => {
				write!(f, "Invalid flags for extended header (0x{flags:x})")
			},
			Self::UnterminatedSpecialFrame(_, message) => f.write_str(message),
		}
	}
}

/// An error that arises while reading an ID3v2 tag block
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Errors that could occur within id3scan
pub struct Id3ScanError {
	pub(crate) kind: ErrorKind,
}

impl Id3ScanError {
	/// Create an `Id3ScanError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::error::{ErrorKind, Id3ScanError, Id3v2Error, Id3v2ErrorKind};
	///
	/// let bad_magic = Id3ScanError::new(ErrorKind::Id3v2(Id3v2Error::new(
	/// 	Id3v2ErrorKind::MalformedHeader("missing \"ID3\" identifier"),
	/// )));
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Returns the [`Id3v2ErrorKind`], if this error came from the tag block itself
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ParseOptions;
	/// use id3scan::error::Id3v2ErrorKind;
	/// use id3scan::track::TrackInfo;
	///
	/// let err = TrackInfo::read_from(&mut &b"RIFF"[..], ParseOptions::new()).unwrap_err();
	/// assert!(matches!(
	/// 	err.id3v2_kind(),
	/// 	Some(Id3v2ErrorKind::MalformedHeader(_))
	/// ));
	/// ```
	pub fn id3v2_kind(&self) -> Option<&Id3v2ErrorKind> {
		match &self.kind {
			ErrorKind::Id3v2(err) => Some(err.kind()),
			ErrorKind::Io(_) => None,
		}
	}
}

impl std::error::Error for Id3ScanError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match &self.kind {
			ErrorKind::Io(err) => Some(err),
			ErrorKind::Id3v2(_) => None,
		}
	}
}

impl Debug for Id3ScanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for Id3ScanError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<Id3v2ErrorKind> for Id3ScanError {
	fn from(input: Id3v2ErrorKind) -> Self {
		Self::from(Id3v2Error::new(input))
	}
}

impl From<std::io::Error> for Id3ScanError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for Id3ScanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),
		}
	}
}
