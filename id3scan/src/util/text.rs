use std::char::REPLACEMENT_CHARACTER;

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	/// Whether a 0x00 terminator in this encoding is a single byte
	pub fn is_single_byte_terminated(self) -> bool {
		matches!(self, Self::Latin1 | Self::UTF8)
	}

	/// Decode `bytes` (without the leading encoding byte) as text in this encoding
	///
	/// Decoding never fails, invalid sequences become U+FFFD. Null terminators are kept.
	pub fn decode(self, bytes: &[u8]) -> String {
		match self {
			TextEncoding::Latin1 => latin1_decode(bytes),
			TextEncoding::UTF16 => match bytes {
				[0xFE, 0xFF, rest @ ..] => utf16_decode_bytes(rest, u16::from_be_bytes),
				[0xFF, 0xFE, rest @ ..] => utf16_decode_bytes(rest, u16::from_le_bytes),
				// A missing BOM is tolerated, the text is assumed to be big endian
				_ => utf16_decode_bytes(bytes, u16::from_be_bytes),
			},
			TextEncoding::UTF16BE => utf16_decode_bytes(bytes, u16::from_be_bytes),
			TextEncoding::UTF8 => String::from_utf8_lossy(bytes).into_owned(),
		}
	}
}

/// Decode a text frame payload
///
/// The first byte of `payload` selects the [`TextEncoding`], the rest is the encoded text.
///
/// An unrecognized encoding byte does not fail, it produces a placeholder naming the byte instead.
///
/// # Examples
///
/// ```rust
/// use id3scan::decode_text;
///
/// assert_eq!(decode_text(b"\x00Caf\xE9"), "Café");
/// assert_eq!(decode_text(b"\x01\xFF\xFEH\x00i\x00"), "Hi");
/// assert_eq!(decode_text(b"\x02\x00H\x00i"), "Hi");
/// assert_eq!(decode_text(b"\x03Caf\xC3\xA9"), "Café");
/// assert_eq!(decode_text(b"\x07Hi"), "UNKNOWN ENCODING (0x07)");
/// ```
pub fn decode_text(payload: &[u8]) -> String {
	let Some((&encoding_byte, text)) = payload.split_first() else {
		return String::new();
	};

	decode_with_encoding_byte(encoding_byte, text)
}

/// Same as [`decode_text`], for when the encoding byte is not adjacent to the text
pub(crate) fn decode_with_encoding_byte(encoding_byte: u8, text: &[u8]) -> String {
	match TextEncoding::from_u8(encoding_byte) {
		Some(encoding) => encoding.decode(text),
		None => unknown_encoding(encoding_byte),
	}
}

fn unknown_encoding(encoding_byte: u8) -> String {
	format!("UNKNOWN ENCODING (0x{encoding_byte:02x})")
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> String {
	if bytes.is_empty() {
		return String::new();
	}

	let chunks = bytes.chunks_exact(2);
	let dangling_byte = !chunks.remainder().is_empty();

	let words = chunks
		// In ID3v2, it is possible to have multiple UTF-16 strings separated by null.
		// This also makes it possible for us to encounter multiple BOMs in a single string.
		// We must filter them out.
		.filter_map(|c| match c {
			[0xFF, 0xFE] | [0xFE, 0xFF] => None,
			[a, b] => Some(endianness([*a, *b])),
			_ => None,
		});

	let mut text = char::decode_utf16(words)
		.map(|c| c.unwrap_or(REPLACEMENT_CHARACTER))
		.collect::<String>();

	if dangling_byte {
		text.push(REPLACEMENT_CHARACTER);
	}

	text
}
