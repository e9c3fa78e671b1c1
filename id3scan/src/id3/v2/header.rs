use crate::error::Result;
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::err;

use std::fmt::{Display, Formatter};
use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// The ID3v2 version, as stored in the tag header
///
/// Any version is accepted, as long as neither byte is 0xFF.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Id3v2Version {
	/// The major version (3 for ID3v2.3)
	pub major: u8,
	/// The revision number
	pub revision: u8,
}

impl Display for Id3v2Version {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2.{}.{}", self.major, self.revision)
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised
	///
	/// NOTE: The frame content is read as-is, unsynchronisation is not reversed.
	pub unsynchronisation: bool,
	/// Whether an extended header follows the tag header
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
}

impl Id3v2TagFlags {
	const UNSYNCHRONISATION: u8 = 0x80;
	const EXTENDED_HEADER: u8 = 0x40;
	const EXPERIMENTAL: u8 = 0x20;
	const RESERVED: u8 = 0x1F;

	fn parse(flags: u8) -> Self {
		Self {
			unsynchronisation: flags & Self::UNSYNCHRONISATION == Self::UNSYNCHRONISATION,
			extended_header: flags & Self::EXTENDED_HEADER == Self::EXTENDED_HEADER,
			experimental: flags & Self::EXPERIMENTAL == Self::EXPERIMENTAL,
		}
	}
}

impl Display for Id3v2TagFlags {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let names = [
			(self.unsynchronisation, "unsync"),
			(self.extended_header, "exthdr"),
			(self.experimental, "eXprmt"),
		];

		let mut first = true;
		for (_, name) in names.iter().filter(|(set, _)| *set) {
			if !first {
				f.write_str(" ")?;
			}

			f.write_str(name)?;
			first = false;
		}

		Ok(())
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Id3v2Header {
	pub version: Id3v2Version,
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER**)
	pub size: u32,
}

impl Id3v2Header {
	pub(crate) const LEN: usize = 10;

	pub(crate) fn parse<R>(bytes: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let mut header = [0; Self::LEN];
		if let Err(e) = bytes.read_exact(&mut header) {
			if e.kind() == std::io::ErrorKind::UnexpectedEof {
				err!(MalformedHeader("input is shorter than an ID3v2 header"));
			}

			return Err(e.into());
		}

		Self::parse_bytes(header)
	}

	pub(crate) fn parse_bytes(header: [u8; Self::LEN]) -> Result<Self> {
		if &header[..3] != b"ID3" {
			err!(MalformedHeader("missing \"ID3\" identifier"));
		}

		let (major, revision) = (header[3], header[4]);
		if major == 0xFF || revision == 0xFF {
			err!(MalformedHeader("version bytes must not be 0xFF"));
		}

		let flags = header[5];
		if flags & Id3v2TagFlags::RESERVED != 0 {
			err!(MalformedHeader("reserved flag bits are set"));
		}

		if header[6..].iter().any(|b| b & 0x80 != 0) {
			err!(MalformedHeader("size is not a synchsafe integer"));
		}

		Ok(Id3v2Header {
			version: Id3v2Version { major, revision },
			flags: Id3v2TagFlags::parse(flags),
			size: BigEndian::read_u32(&header[6..]).unsynch(),
		})
	}
}

/// The optional block between the tag header and the first frame
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ExtendedHeader {
	/// The declared body length, **NOT** a synchsafe integer
	pub size: u32,
	pub flags: u16,
	pub padding_size: u32,
	pub crc: Option<u32>,
}

impl ExtendedHeader {
	/// Size, flags, and padding size
	pub(crate) const FIXED_LEN: usize = 10;
	const CRC_LEN: usize = 4;
	const CRC_PRESENT: u16 = 0x8000;

	/// Parse the extended header from the start of the tag contents
	pub(crate) fn parse(content: &[u8]) -> Result<Self> {
		if content.len() < 6 {
			err!(TruncatedInput {
				expected: 6,
				available: content.len() as u64,
			});
		}

		let size = BigEndian::read_u32(&content[..4]);
		let flags = BigEndian::read_u16(&content[4..6]);

		if flags & !Self::CRC_PRESENT != 0 {
			err!(InvalidFlags { frame: None, flags });
		}

		let crc_present = flags & Self::CRC_PRESENT == Self::CRC_PRESENT;
		let needed = Self::FIXED_LEN + if crc_present { Self::CRC_LEN } else { 0 };
		if content.len() < needed {
			err!(TruncatedInput {
				expected: needed as u64,
				available: content.len() as u64,
			});
		}

		let padding_size = BigEndian::read_u32(&content[6..Self::FIXED_LEN]);
		let crc = crc_present.then(|| BigEndian::read_u32(&content[Self::FIXED_LEN..needed]));

		Ok(Self {
			size,
			flags,
			padding_size,
			crc,
		})
	}

	/// The offset of the first frame, relative to the start of the tag contents
	///
	/// The fixed portion and the CRC are skipped, then the declared size is skipped on top of that.
	pub(crate) fn frames_offset(&self) -> u64 {
		let crc_len = if self.crc.is_some() { Self::CRC_LEN } else { 0 };
		(Self::FIXED_LEN + crc_len) as u64 + u64::from(self.size)
	}
}
