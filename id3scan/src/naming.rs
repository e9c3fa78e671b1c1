//! Canonical file names from decoded fields
//!
//! The layout is `artist/album/{disk-}{track }title.mp3`, using the platform path separator. Every
//! segment is made safe for Windows, which is assumed to be safe everywhere else too.

use crate::id3::v2::Id3v2Fields;

use std::fmt::Write as _;
use std::num::ParseIntError;
use std::path::MAIN_SEPARATOR_STR;

/// The name built from fields that have no artist, album, disk, track, or title
///
/// Callers should fall back to the source file name when they see this.
pub const DEGENERATE_FILE_NAME: &str = ".mp3";

const FILE_EXTENSION: &str = ".mp3";

// Characters that can't appear in a Windows path segment
const INVALID_PATH_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Build a relative path from the decoded fields
///
/// * The artist is the band (`TPE2`), falling back to the lead performer (`TPE1`)
/// * The album is `TALB`
/// * The file name is the disk number (`TPOS`), track number (`TRCK`), and title (`TIT2`)
///
/// Empty segments are left out, so a tag without any of these fields produces
/// [`DEGENERATE_FILE_NAME`].
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::{DecodedField, FrameId, Id3v2Fields};
/// use id3scan::naming::build_file_name;
///
/// let mut fields = Id3v2Fields::default();
/// for (id, value) in [
/// 	("TPE2", "Queen"),
/// 	("TALB", "News of the World"),
/// 	("TPOS", "1/1"),
/// 	("TRCK", "3"),
/// 	("TIT2", "We Are the Champions"),
/// ] {
/// 	fields.insert(FrameId::new(id).unwrap(), DecodedField::new("", value));
/// }
///
/// let expected = ["Queen", "News of the World", "03 We Are the Champions.mp3"]
/// 	.join(std::path::MAIN_SEPARATOR_STR);
/// assert_eq!(build_file_name(&fields), expected);
/// ```
pub fn build_file_name(fields: &Id3v2Fields) -> String {
	let value = |id| fields.value(id).unwrap_or_default();

	let mut artist = purify(value("TPE2"), true);
	if artist.is_empty() {
		artist = purify(value("TPE1"), true);
	}

	let album = purify(value("TALB"), true);

	let mut name = String::new();
	match parse_leading_int(value("TPOS")) {
		Ok(0) | Err(_) => {},
		Ok(disk) => {
			let _ = write!(name, "{disk}-");
		},
	}

	match parse_leading_int(value("TRCK")) {
		Ok(0) | Err(_) => {},
		Ok(track) => {
			let _ = write!(name, "{track:02} ");
		},
	}

	name.push_str(&purify(value("TIT2"), false));
	name.push_str(FILE_EXTENSION);

	[artist, album, name]
		.into_iter()
		.filter(|segment| !segment.is_empty())
		.collect::<Vec<_>>()
		.join(MAIN_SEPARATOR_STR)
}

/// Parse the number at the start of `s`
///
/// Numbers are often followed by a total, such as `"3/12"`. `"1/1"` is special cased to 0, as a
/// single disk set is no different from having no disk number at all.
///
/// # Errors
///
/// * The leading number doesn't fit in an `i64`
///
/// # Examples
///
/// ```rust
/// use id3scan::naming::parse_leading_int;
///
/// assert_eq!(parse_leading_int("3/12"), Ok(3));
/// assert_eq!(parse_leading_int("07"), Ok(7));
/// assert_eq!(parse_leading_int("1/1"), Ok(0));
/// assert_eq!(parse_leading_int("Side A"), Ok(0));
/// ```
pub fn parse_leading_int(s: &str) -> Result<i64, ParseIntError> {
	if s == "1/1" {
		return Ok(0);
	}

	let sign_len = usize::from(s.starts_with(['+', '-']));
	let digits_len = s[sign_len..]
		.bytes()
		.take_while(u8::is_ascii_digit)
		.count();

	if digits_len == 0 {
		return Ok(0);
	}

	s[..sign_len + digits_len].parse()
}

/// Make `s` safe to use as a path segment
///
/// Trailing null terminators are dropped first, then surrounding whitespace is removed. With `strip_dots`, only spaces and dots are trimmed instead,
/// which keeps directory names from ending in a dot. Every character that is invalid in a Windows
/// path is then replaced with `-`.
///
/// # Examples
///
/// ```rust
/// use id3scan::naming::purify;
///
/// assert_eq!(purify("Metallica/Ride", true), "Metallica-Ride");
/// assert_eq!(purify("Track: One.", false), "Track- One.");
/// assert_eq!(purify(" ...And Justice for All. ", true), "And Justice for All");
/// assert_eq!(purify("One\0", false), "One");
/// ```
pub fn purify(s: &str, strip_dots: bool) -> String {
	let s = s.trim_end_matches('\0');
	let trimmed = if strip_dots {
		s.trim_matches([' ', '.'])
	} else {
		s.trim()
	};

	trimmed.replace(INVALID_PATH_CHARS, "-")
}
