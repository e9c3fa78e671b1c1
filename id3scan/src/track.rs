//! The metadata of a single MP3 file

use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::v2::Id3v2Fields;
use crate::id3::v2::header::Id3v2Header;
use crate::id3::v2::read::parse_id3v2;
use crate::mpeg::{FrameHeader, verify_frame_sync};
use crate::naming::build_file_name;

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};

/// The decoded ID3v2 fields and bitrate of an MP3 file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackInfo {
	pub(crate) fields: Id3v2Fields,
	pub(crate) bitrate: u32,
}

impl TrackInfo {
	/// Read the tag block and first audio frame header from `reader`
	///
	/// `reader` must be positioned at the start of the file. Only the tag header, the tag contents,
	/// and the 4 bytes that follow are read.
	///
	/// # Errors
	///
	/// * The input doesn't start with a valid ID3v2 header
	/// * The input is shorter than the tag size in the header
	/// * The extended header or a frame has invalid flags
	/// * Depending on the [`ParsingMode`](crate::config::ParsingMode), a frame is malformed
	/// * Failure to read from `reader`
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ParseOptions;
	/// use id3scan::track::TrackInfo;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// // An empty tag, followed by an MPEG-1 Layer III frame header
	/// let mut file = &b"ID3\x03\x00\x00\x00\x00\x00\x00\xFF\xFB\x90\x64"[..];
	///
	/// let track = TrackInfo::read_from(&mut file, ParseOptions::new())?;
	/// assert!(track.fields().is_empty());
	/// assert_eq!(track.bitrate(), 128);
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read,
	{
		let header = Id3v2Header::parse(reader)?;
		let fields = parse_id3v2(reader, header, parse_options)?;
		let bitrate = read_bitrate(reader, parse_options)?;

		Ok(Self { fields, bitrate })
	}

	/// The decoded fields
	pub fn fields(&self) -> &Id3v2Fields {
		&self.fields
	}

	/// Consume the `TrackInfo`, returning the decoded fields
	pub fn into_fields(self) -> Id3v2Fields {
		self.fields
	}

	/// The bitrate of the first audio frame in kbps, 0 if it is unknown
	pub fn bitrate(&self) -> u32 {
		self.bitrate
	}

	/// Build a canonical file name from the fields
	///
	/// See [`build_file_name`].
	pub fn file_name(&self) -> String {
		build_file_name(&self.fields)
	}
}

fn read_bitrate<R>(reader: &mut R, parse_options: ParseOptions) -> Result<u32>
where
	R: Read,
{
	let data = match reader.read_u32::<BigEndian>() {
		Ok(data) => data,
		Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
			if parse_options.logs_fields() {
				log::warn!("No audio data follows the tag");
			}

			return Ok(0);
		},
		Err(e) => return Err(e.into()),
	};

	if !verify_frame_sync(data) {
		if parse_options.logs_fields() {
			log::warn!("Invalid sync pattern (info = {:#010X})", data);
		}

		return Ok(0);
	}

	let bitrate = FrameHeader::parse(data).map_or(0, |header| header.bitrate);
	if parse_options.logs_fields() {
		log::info!("Bitrate = {} kbps", bitrate);
	}

	Ok(bitrate)
}

/// Read a [`TrackInfo`] from a path
///
/// # Errors
///
/// * `path` does not exist or can't be opened
/// * See [`TrackInfo::read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// use id3scan::config::ParseOptions;
/// use id3scan::read_from_path;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let track = read_from_path("foo.mp3", ParseOptions::new())?;
/// println!("{} kbps, {}", track.bitrate(), track.file_name());
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<TrackInfo>
where
	P: AsRef<Path>,
{
	let file = File::open(path)?;
	TrackInfo::read_from(&mut BufReader::new(file), parse_options)
}
