use super::constants::BITRATES;

/// MPEG Audio version
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[allow(missing_docs)]
pub enum MpegVersion {
	V1,
	V2,
	V2_5,
	/// Version bits `0b01`, looked up in the MPEG-1 bitrate row
	Reserved,
}

/// MPEG layer
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Layer {
	Layer1 = 1,
	Layer2 = 2,
	Layer3 = 3,
}

pub(crate) fn verify_frame_sync(data: u32) -> bool {
	data & 0xFFE0_0000 == 0xFFE0_0000
}

/// The fields of an MPEG audio frame header needed for the bitrate
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameHeader {
	/// The MPEG version
	pub version: MpegVersion,
	/// The layer, `None` if the header uses the reserved layer bits
	pub layer: Option<Layer>,
	/// The bitrate index, 0 through 15
	pub bitrate_index: u8,
	/// The bitrate in kbps, 0 if it is free, invalid, or the layer is reserved
	pub bitrate: u32,
}

impl FrameHeader {
	/// Parse the 4 bytes at the start of an MPEG audio frame
	///
	/// Returns `None` if `data` doesn't start with a frame sync (11 set bits).
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::mpeg::{FrameHeader, Layer, MpegVersion};
	///
	/// // MPEG-1, Layer III, 128 kbps
	/// let header = FrameHeader::parse(0xFFFB_9064).unwrap();
	/// assert_eq!(header.version, MpegVersion::V1);
	/// assert_eq!(header.layer, Some(Layer::Layer3));
	/// assert_eq!(header.bitrate, 128);
	///
	/// assert!(FrameHeader::parse(0x4944_3303).is_none());
	/// ```
	pub fn parse(data: u32) -> Option<Self> {
		if !verify_frame_sync(data) {
			return None;
		}

		let version_bits = (data >> 19) & 0b11;
		let version = match version_bits {
			0b00 => MpegVersion::V2_5,
			0b01 => MpegVersion::Reserved,
			0b10 => MpegVersion::V2,
			_ => MpegVersion::V1,
		};

		let layer = match (data >> 17) & 0b11 {
			0b01 => Some(Layer::Layer3),
			0b10 => Some(Layer::Layer2),
			0b11 => Some(Layer::Layer1),
			_ => None,
		};

		let bitrate_index = ((data >> 12) & 0xF) as u8;

		// Layer III is the first row, so the row is the inverse of the layer number
		let bitrate = match layer {
			Some(layer) => {
				let version_index = (version_bits & 1) as usize;
				let layer_index = 3 - layer as usize;
				BITRATES[version_index][layer_index][usize::from(bitrate_index)]
			},
			None => 0,
		};

		Some(Self {
			version,
			layer,
			bitrate_index,
			bitrate,
		})
	}
}

/// Get the bitrate (kbps) from the first 4 bytes of an MPEG audio frame
///
/// Anything that can't be a frame header is a bitrate of 0, never an error.
///
/// # Examples
///
/// ```rust
/// use id3scan::mpeg::bitrate;
///
/// // MPEG-1, Layer II, bitrate index 10
/// assert_eq!(bitrate(0xFFFD_A000), 192);
///
/// // No frame sync
/// assert_eq!(bitrate(0x0000_0000), 0);
/// ```
pub fn bitrate(data: u32) -> u32 {
	FrameHeader::parse(data).map_or(0, |header| header.bitrate)
}
