pub(super) mod content;
pub(super) mod descriptor;
pub(super) mod header;

use byteorder::{BigEndian, ByteOrder};

/// Various flags to describe the content of an item
///
/// Only the ID3v2.3 layout is understood.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Item cannot be written to
	pub read_only: bool,
	/// Frame is zlib compressed
	///
	/// NOTE: The payload is never decompressed
	pub compression: bool,
	/// The decompressed size stored after the header, if `compression` is set
	pub uncompressed_size: Option<u32>,
	/// Frame encryption method symbol
	///
	/// NOTE: Since the encryption method is unknown, the payload is never decrypted
	pub encryption: Option<u8>,
	/// The group identifier the frame belongs to
	///
	/// All frames with the same group identifier byte belong to the same group.
	pub grouping_identity: Option<u8>,
}

impl FrameFlags {
	/// Bits that must never be set in an ID3v2.3 frame
	pub(crate) const RESERVED: u16 = 0x1F1F;

	const COMPRESSION: u16 = 0x0080;
	const ENCRYPTION: u16 = 0x0040;
	const GROUPING_IDENTITY: u16 = 0x0020;

	/// Parse the flags from an ID3v2.3 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)` until the extra
	/// fields are read:
	/// * `uncompressed_size`
	/// * `encryption`
	/// * `grouping_identity`
	pub fn parse_id3v23(flags: u16) -> Self {
		let compression = flags & Self::COMPRESSION == Self::COMPRESSION;
		FrameFlags {
			tag_alter_preservation: flags & 0x8000 == 0x8000,
			file_alter_preservation: flags & 0x4000 == 0x4000,
			read_only: flags & 0x2000 == 0x2000,
			compression,
			uncompressed_size: compression.then_some(0),
			encryption: (flags & Self::ENCRYPTION == Self::ENCRYPTION).then_some(0),
			grouping_identity: (flags & Self::GROUPING_IDENTITY == Self::GROUPING_IDENTITY)
				.then_some(0),
		}
	}

	/// Get the ID3v2.3 byte representation of the flags
	pub fn as_id3v23_bytes(&self) -> u16 {
		let mut flags = 0;

		if self.tag_alter_preservation {
			flags |= 0x8000;
		}

		if self.file_alter_preservation {
			flags |= 0x4000;
		}

		if self.read_only {
			flags |= 0x2000;
		}

		if self.compression {
			flags |= Self::COMPRESSION;
		}

		if self.encryption.is_some() {
			flags |= Self::ENCRYPTION;
		}

		if self.grouping_identity.is_some() {
			flags |= Self::GROUPING_IDENTITY;
		}

		flags
	}

	/// The number of bytes between the frame header and the payload
	pub fn extras_len(&self) -> usize {
		let mut len = 0;

		if self.compression {
			len += 4;
		}

		if self.encryption.is_some() {
			len += 1;
		}

		if self.grouping_identity.is_some() {
			len += 1;
		}

		len
	}

	/// Fill in the extra fields, in on-disk order
	///
	/// `extras` must be exactly [`FrameFlags::extras_len`] bytes.
	pub(crate) fn read_extras(&mut self, mut extras: &[u8]) {
		debug_assert_eq!(extras.len(), self.extras_len());

		if self.compression {
			self.uncompressed_size = Some(BigEndian::read_u32(&extras[..4]));
			extras = &extras[4..];
		}

		if let Some(method) = self.encryption.as_mut() {
			*method = extras[0];
			extras = &extras[1..];
		}

		if let Some(group) = self.grouping_identity.as_mut() {
			*group = extras[0];
		}
	}
}
