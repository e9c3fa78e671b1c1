use crate::error::{Id3v2ErrorKind, Result};
use crate::id3::v2::FrameId;

use std::fmt::{Display, Formatter};

pub(crate) const MISSING_OWNER_TERMINATOR: &str = "Missing 0x00 in PRIV frame";

/// A summary of an `ID3v2` private frame
///
/// This frame is used to contain information from a software producer that
/// its program uses and does not fit into the other frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrivateFrame {
	/// A URL containing an email address, or a link to a location where an email can be found,
	/// that belongs to the organisation responsible for the frame
	pub owner: String,
	/// The number of bytes of private data
	pub data_len: usize,
}

impl PrivateFrame {
	/// Read a [`PrivateFrame`]
	///
	/// NOTE: This expects *only* the frame content
	///
	/// The owner is not run through the text decoder, it is taken as UTF-8 with invalid
	/// sequences replaced.
	///
	/// # Errors
	///
	/// * The owner is missing its terminator
	pub fn parse(content: &[u8]) -> Result<Self> {
		let Some(owner_end) = content.iter().position(|&b| b == 0) else {
			return Err(Id3v2ErrorKind::UnterminatedSpecialFrame(
				FrameId::from_bytes(*b"PRIV"),
				MISSING_OWNER_TERMINATOR,
			)
			.into());
		};

		Ok(Self {
			owner: String::from_utf8_lossy(&content[..owner_end]).into_owned(),
			data_len: content.len() - owner_end - 1,
		})
	}
}

impl Display for PrivateFrame {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} bytes", self.data_len)
	}
}
