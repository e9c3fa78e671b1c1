use super::frame::content::parse_content;
use super::frame::descriptor::lookup;
use super::frame::header::parse::parse_header;
use super::header::{ExtendedHeader, Id3v2Header, Id3v2TagFlags};
use super::tag::{DecodedField, Id3v2Fields};
use super::FrameHeader;
use crate::config::ParseOptions;
use crate::error::{Id3v2ErrorKind, Result};
use crate::macros::{err, parse_mode_choice};

use std::io::Read;

/// Read the tag contents following `header` and decode every frame
///
/// Exactly `header.size` bytes are consumed from `bytes`.
pub(crate) fn parse_id3v2<R>(
	bytes: &mut R,
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Id3v2Fields>
where
	R: Read,
{
	if parse_options.logs_headers() {
		if header.flags == Id3v2TagFlags::default() {
			log::info!("{} header, {:#x} bytes", header.version, header.size);
		} else {
			log::info!(
				"{} header ({}), {:#x} bytes",
				header.version,
				header.flags,
				header.size
			);
		}
	}

	let content = read_tag_content(bytes, header.size)?;

	let mut offset = 0;
	if header.flags.extended_header {
		let extended_header = ExtendedHeader::parse(&content)?;
		if parse_options.logs_headers() {
			log_extended_header(&extended_header);
		}

		offset = extended_header.frames_offset();
	}

	let mut fields = Id3v2Fields::default();

	// An extended header claiming more than the whole tag leaves no room for frames
	let Ok(offset) = usize::try_from(offset) else {
		return Ok(fields);
	};

	if let Some(frames) = content.get(offset..) {
		read_all_frames(frames, &mut fields, parse_options)?;
	}

	Ok(fields)
}

fn read_tag_content<R>(bytes: &mut R, size: u32) -> Result<Vec<u8>>
where
	R: Read,
{
	let expected = u64::from(size);

	let mut content = Vec::new();
	bytes.take(expected).read_to_end(&mut content)?;

	if (content.len() as u64) < expected {
		err!(TruncatedInput {
			expected,
			available: content.len() as u64,
		});
	}

	Ok(content)
}

fn log_extended_header(extended_header: &ExtendedHeader) {
	match extended_header.crc {
		Some(crc) => log::info!(
			" * Extended header: length = {:#010x}, flags = {:#x}, padding = {:#010x}, CRC = {:#x}",
			extended_header.size,
			extended_header.flags,
			extended_header.padding_size,
			crc
		),
		None => log::info!(
			" * Extended header: length = {:#010x}, flags = {:#x}, padding = {:#010x}",
			extended_header.size,
			extended_header.flags,
			extended_header.padding_size
		),
	}
}

/// A bounds-checked read position within the frame region
struct FrameCursor<'a> {
	content: &'a [u8],
	position: usize,
}

impl<'a> FrameCursor<'a> {
	fn remaining(&self) -> &'a [u8] {
		&self.content[self.position..]
	}

	fn take(&mut self, len: usize) -> Option<&'a [u8]> {
		let end = self.position.checked_add(len)?;
		let taken = self.content.get(self.position..end)?;
		self.position = end;
		Some(taken)
	}
}

fn read_all_frames(
	content: &[u8],
	fields: &mut Id3v2Fields,
	parse_options: ParseOptions,
) -> Result<()> {
	let mut cursor = FrameCursor {
		content,
		position: 0,
	};

	while !cursor.remaining().is_empty() {
		let remaining = cursor.remaining();
		let Some(header_bytes) = cursor.take(FrameHeader::LEN) else {
			// Not enough room for another frame, anything but zeroes is a frame cut short
			if remaining.iter().any(|&b| b != 0) {
				truncated(FrameHeader::LEN, remaining.len(), parse_options)?;
			}

			break;
		};

		let mut header_array = [0; FrameHeader::LEN];
		header_array.copy_from_slice(header_bytes);

		// Padding, there are no more frames
		let Some(mut frame_header) = parse_header(&header_array)? else {
			break;
		};

		let id = frame_header.id;
		let extras_len = frame_header.flags.extras_len();
		let Some(extras) = cursor.take(extras_len) else {
			truncated(extras_len, cursor.remaining().len(), parse_options)?;
			break;
		};

		frame_header.flags.read_extras(extras);

		if parse_options.logs_headers() {
			log::info!(
				"  {}: length = {:#09x}, flags = {:#x}",
				id,
				frame_header.size,
				frame_header.flags.as_id3v23_bytes()
			);
		}

		let payload_len = usize::try_from(frame_header.size).unwrap_or(usize::MAX);
		let Some(payload) = cursor.take(payload_len) else {
			truncated(payload_len, cursor.remaining().len(), parse_options)?;
			break;
		};

		let Some(descriptor) = lookup(id) else {
			if parse_options.logs_fields() {
				log::warn!("{}: Unexpected frame, skipping", id);
			}

			continue;
		};

		let field = match parse_content(descriptor, payload) {
			Ok(field) => field,
			Err(e) => {
				let Some(Id3v2ErrorKind::UnterminatedSpecialFrame(_, message)) = e.id3v2_kind()
				else {
					return Err(e);
				};

				let message = *message;
				let parsing_mode = parse_options.parsing_mode;
				parse_mode_choice!(
					parsing_mode,
					STRICT: return Err(e),
					RELAXED: {
						if parse_options.logs_fields() {
							log::warn!("{}: {}, discarding frame", id, message);
						}

						continue;
					},
					DEFAULT: {
						if parse_options.logs_fields() {
							log::warn!("{}: {}", id, message);
						}

						DecodedField::new("Error", message)
					}
				)
			},
		};

		if parse_options.logs_fields() {
			log::info!("{}", field);
		}

		if fields.insert(id, field).is_some() && parse_options.logs_fields() {
			log::warn!("Replaced frame with ID \"{}\" by a frame with the same ID", id);
		}
	}

	Ok(())
}

fn truncated(expected: usize, available: usize, parse_options: ParseOptions) -> Result<()> {
	let parsing_mode = parse_options.parsing_mode;
	parse_mode_choice!(
		parsing_mode,
		STRICT: err!(TruncatedInput {
			expected: expected as u64,
			available: available as u64,
		}),
		DEFAULT: {
			if parse_options.logs_fields() {
				log::warn!(
					"Frame needs {} bytes, but only {} remain in the tag, stopping",
					expected,
					available
				);
			}

			Ok(())
		}
	)
}
