use super::{FrameHeader, FrameId};
use crate::error::Result;
use crate::id3::v2::FrameFlags;
use crate::macros::err;

use byteorder::{BigEndian, ByteOrder};

/// Parse an ID3v2.3 frame header
///
/// Returns `Ok(None)` once padding is reached, either an empty ID or a size of zero.
pub(crate) fn parse_header(header: &[u8; FrameHeader::LEN]) -> Result<Option<FrameHeader>> {
	let id = FrameId::from_bytes([header[0], header[1], header[2], header[3]]);

	// ID3v2.3 frame sizes are plain 32-bit integers, never synchsafe
	let size = BigEndian::read_u32(&header[4..8]);
	let flags = BigEndian::read_u16(&header[8..]);

	if flags & FrameFlags::RESERVED != 0 {
		err!(InvalidFlags {
			frame: Some(id),
			flags,
		});
	}

	// Assume we just started reading padding
	if id.is_empty() || size == 0 {
		return Ok(None);
	}

	Ok(Some(FrameHeader {
		id,
		size,
		flags: FrameFlags::parse_id3v23(flags),
	}))
}
