use crate::error::{Id3v2ErrorKind, Result};
use crate::id3::v2::FrameId;
use crate::util::text::decode_with_encoding_byte;

use std::fmt::{Display, Formatter};

pub(crate) const MISSING_MIME_TERMINATOR: &str = "Cannot find MIME type termination in APIC frame";
pub(crate) const MISSING_DESCRIPTION_TERMINATOR: &str =
	"Cannot find Description termination in APIC frame";

/// A summary of an `ID3v2` attached picture frame
///
/// The picture data itself is not kept, only its length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	/// The raw text encoding byte, shared by the MIME type and description
	pub encoding: u8,
	/// The MIME type, as written in the frame
	pub mime_type: String,
	/// The raw picture type byte
	pub picture_type: u8,
	/// The picture description
	pub description: String,
	/// The number of bytes of picture data
	pub data_len: usize,
}

impl AttachedPictureFrame {
	/// The label recorded for every picture frame
	pub const LABEL: &'static str = "Picture";

	/// Get an [`AttachedPictureFrame`] from ID3v2 APIC bytes:
	///
	/// NOTE: This expects *only* the frame content
	///
	/// Both strings are located with a single 0x00 byte search, regardless of encoding.
	///
	/// # Errors
	///
	/// * The MIME type or description is missing its terminator
	pub fn parse(content: &[u8]) -> Result<Self> {
		let unterminated =
			|message| Id3v2ErrorKind::UnterminatedSpecialFrame(FrameId::from_bytes(*b"APIC"), message);

		let Some((&encoding, rest)) = content.split_first() else {
			return Err(unterminated(MISSING_MIME_TERMINATOR).into());
		};

		let Some(mime_end) = rest.iter().position(|&b| b == 0) else {
			return Err(unterminated(MISSING_MIME_TERMINATOR).into());
		};

		let mime_type = decode_with_encoding_byte(encoding, &rest[..mime_end]);

		let Some((&picture_type, rest)) = rest[mime_end + 1..].split_first() else {
			return Err(unterminated(MISSING_DESCRIPTION_TERMINATOR).into());
		};

		let Some(description_end) = rest.iter().position(|&b| b == 0) else {
			return Err(unterminated(MISSING_DESCRIPTION_TERMINATOR).into());
		};

		let description = decode_with_encoding_byte(encoding, &rest[..description_end]);

		Ok(Self {
			encoding,
			mime_type,
			picture_type,
			description,
			data_len: rest.len() - description_end - 1,
		})
	}
}

impl Display for AttachedPictureFrame {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}, 0x{:02x}, \"{}\", {} (0x{:x}) bytes",
			self.mime_type, self.picture_type, self.description, self.data_len, self.data_len
		)
	}
}
