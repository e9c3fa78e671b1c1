use crate::util::{
	MPEG1_LAYER2_192KBPS, MPEG1_LAYER3_128KBPS, file, frame, tag, temp_file, text_frame,
};

use id3scan::config::{ParseOptions, ParsingMode, Verbosity};
use id3scan::error::{ErrorKind, Id3v2ErrorKind};
use id3scan::track::TrackInfo;

fn read(bytes: &[u8]) -> TrackInfo {
	TrackInfo::read_from(&mut &bytes[..], ParseOptions::new()).unwrap()
}

fn read_err(bytes: &[u8], parsing_mode: ParsingMode) -> id3scan::error::Id3ScanError {
	TrackInfo::read_from(
		&mut &bytes[..],
		ParseOptions::new().parsing_mode(parsing_mode),
	)
	.unwrap_err()
}

#[test_log::test]
fn read_text_frames() {
	let bytes = file(
		&[
			text_frame(b"TPE1", "Queen"),
			text_frame(b"TALB", "News of the World"),
			text_frame(b"TYER", "1977"),
		],
		&MPEG1_LAYER2_192KBPS,
	);

	let track = read(&bytes);
	let fields = track.fields();

	assert_eq!(fields.len(), 3);
	assert_eq!(fields.label("TPE1"), Some("Artist(s)"));
	assert_eq!(fields.value("TPE1"), Some("Queen"));
	assert_eq!(fields.label("TALB"), Some("Album"));
	assert_eq!(fields.value("TYER"), Some("1977"));
	assert_eq!(track.bitrate(), 192);
}

#[test_log::test]
fn read_every_text_encoding() {
	let bytes = file(
		&[
			frame(b"TIT2", 0, b"\x00Caf\xE9"),
			frame(b"TALB", 0, b"\x01\xFF\xFEC\x00a\x00f\x00\xE9\x00"),
			frame(b"TPE1", 0, b"\x02\x00C\x00a\x00f\x00\xE9"),
			frame(b"TCOM", 0, b"\x03Caf\xC3\xA9"),
			frame(b"TCON", 0, b"\x05Caf\xE9"),
		],
		&MPEG1_LAYER3_128KBPS,
	);

	let track = read(&bytes);
	let fields = track.fields();

	assert_eq!(fields.value("TIT2"), Some("Café"));
	assert_eq!(fields.value("TALB"), Some("Café"));
	assert_eq!(fields.value("TPE1"), Some("Café"));
	assert_eq!(fields.value("TCOM"), Some("Café"));
	assert_eq!(fields.value("TCON"), Some("UNKNOWN ENCODING (0x05)"));
}

#[test_log::test]
fn zero_size_tag() {
	let track = read(&tag(0, &[]));

	assert!(track.fields().is_empty());
	assert_eq!(track.bitrate(), 0);
	assert_eq!(track.file_name(), ".mp3");
}

#[test_log::test]
fn special_frames() {
	let mut picture = b"\x00image/jpeg\x00\x03Front\x00".to_vec();
	picture.extend([0xAB; 0x20]);

	let bytes = file(
		&[
			frame(b"APIC", 0, &picture),
			frame(b"PRIV", 0, b"AverageLevel\x00\x01\x02\x03\x04"),
			frame(b"COMM", 0, b"\x00engcomment"),
		],
		&MPEG1_LAYER3_128KBPS,
	);

	let track = read(&bytes);
	let fields = track.fields();

	assert_eq!(fields.label("APIC"), Some("Picture"));
	assert_eq!(
		fields.value("APIC"),
		Some("image/jpeg, 0x03, \"Front\", 32 (0x20) bytes")
	);
	assert_eq!(fields.label("PRIV"), Some("AverageLevel"));
	assert_eq!(fields.value("PRIV"), Some("4 bytes"));

	// Recognized, but not decoded
	let comment = fields.get("COMM").unwrap();
	assert!(comment.is_undecoded());
}

#[test_log::test]
fn unknown_frame_skipped() {
	let bytes = file(
		&[
			text_frame(b"TIT2", "Before"),
			frame(b"XXXX", 0, b"\x00unknown"),
			text_frame(b"TALB", "After"),
		],
		&MPEG1_LAYER3_128KBPS,
	);

	let fields = read(&bytes).into_fields();
	assert_eq!(fields.len(), 2);
	assert_eq!(fields.value("TIT2"), Some("Before"));
	assert_eq!(fields.value("TALB"), Some("After"));
}

#[test_log::test]
fn id3v24_recording_time_is_skipped() {
	let bytes = file(
		&[
			frame(b"TDRC", 0, b"\x002024"),
			text_frame(b"TYER", "2024"),
		],
		&MPEG1_LAYER3_128KBPS,
	);

	let fields = read(&bytes).into_fields();
	assert!(fields.get("TDRC").is_none());
	assert_eq!(fields.len(), 1);
	assert_eq!(fields.value("TYER"), Some("2024"));
}

#[test_log::test]
fn frame_extras_consumed_before_payload() {
	// Compression (4 bytes), encryption (1 byte), and grouping (1 byte)
	let mut flagged = b"TIT2\x00\x00\x00\x06\x00\xE0".to_vec();
	flagged.extend([0x00, 0x00, 0x00, 0x20, 0x80, 0x01]);
	flagged.extend(b"\x00Title");

	let bytes = file(
		&[flagged, text_frame(b"TRCK", "7")],
		&MPEG1_LAYER3_128KBPS,
	);

	let track = read(&bytes);
	assert_eq!(track.fields().value("TIT2"), Some("Title"));
	assert_eq!(track.fields().value("TRCK"), Some("7"));
	assert_eq!(track.bitrate(), 128);
}

#[test_log::test]
fn padding_stops_iteration() {
	let mut content = text_frame(b"TIT2", "Title");
	content.extend([0; 256]);

	let mut bytes = tag(0, &content);
	bytes.extend(MPEG1_LAYER3_128KBPS);

	let track = read(&bytes);
	assert_eq!(track.fields().len(), 1);
	assert_eq!(track.bitrate(), 128);
}

#[test_log::test]
fn extended_header() {
	let mut content = vec![0, 0, 0, 6, 0, 0, 0, 0, 0, 0];
	content.extend([0; 6]);
	content.extend(text_frame(b"TIT2", "Title"));

	let mut bytes = tag(0x40, &content);
	bytes.extend(MPEG1_LAYER3_128KBPS);

	let track = read(&bytes);
	assert_eq!(track.fields().value("TIT2"), Some("Title"));
}

#[test_log::test]
fn extended_header_invalid_flags() {
	let mut content = vec![0, 0, 0, 6, 0x00, 0x01, 0, 0, 0, 0];
	content.extend([0; 6]);

	let err = read_err(&tag(0x40, &content), ParsingMode::Relaxed);
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::InvalidFlags {
			frame: None,
			flags: 0x0001
		})
	));
}

#[test_log::test]
fn invalid_frame_flags() {
	let bytes = file(&[frame(b"TIT2", 0x0100, b"\x00Title")], &[]);

	let err = read_err(&bytes, ParsingMode::Relaxed);
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::InvalidFlags { frame: Some(id), flags: 0x0100 }) if *id == "TIT2"
	));
	assert_eq!(err.to_string(), "ID3v2: Invalid flags for frame TIT2 (0x100)");
}

#[test_log::test]
fn malformed_headers() {
	for bytes in [
		&b"ID3"[..],
		b"RIFF\x00\x00\x00\x00\x00\x00",
		b"ID3\xFF\x00\x00\x00\x00\x00\x00",
		b"ID3\x03\x00\x01\x00\x00\x00\x00",
		b"ID3\x03\x00\x00\x00\x00\x00\x80",
	] {
		let err = read_err(bytes, ParsingMode::Relaxed);
		assert!(
			matches!(err.id3v2_kind(), Some(Id3v2ErrorKind::MalformedHeader(_))),
			"unexpected error: {err}"
		);
	}
}

#[test_log::test]
fn truncated_tag() {
	let mut bytes = tag(0, &text_frame(b"TIT2", "Title"));
	bytes.truncate(bytes.len() - 1);

	let err = read_err(&bytes, ParsingMode::Relaxed);
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::TruncatedInput {
			expected: 16,
			available: 15
		})
	));
	assert!(!matches!(err.kind(), ErrorKind::Io(_)));
}

#[test_log::test]
fn overrunning_frame_depends_on_mode() {
	let mut overrun = text_frame(b"TALB", "Album");
	overrun.truncate(overrun.len() - 3);

	let bytes = file(
		&[text_frame(b"TIT2", "Title"), overrun],
		&MPEG1_LAYER3_128KBPS,
	);

	let err = read_err(&bytes, ParsingMode::Strict);
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::TruncatedInput { .. })
	));

	let track = read(&bytes);
	assert_eq!(track.fields().len(), 1);
	assert_eq!(track.fields().value("TIT2"), Some("Title"));

	// The tag size is still honored, so the audio frame is found
	assert_eq!(track.bitrate(), 128);
}

#[test_log::test]
fn unterminated_picture_depends_on_mode() {
	let bytes = file(
		&[
			frame(b"APIC", 0, b"\x00image/png"),
			text_frame(b"TIT2", "Title"),
		],
		&[],
	);

	let err = read_err(&bytes, ParsingMode::Strict);
	assert_eq!(
		err.to_string(),
		"ID3v2: Cannot find MIME type termination in APIC frame"
	);

	let best_attempt = read(&bytes);
	assert_eq!(best_attempt.fields().label("APIC"), Some("Error"));
	assert_eq!(
		best_attempt.fields().value("APIC"),
		Some("Cannot find MIME type termination in APIC frame")
	);

	let relaxed = TrackInfo::read_from(
		&mut &bytes[..],
		ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
	)
	.unwrap();
	assert!(relaxed.fields().get("APIC").is_none());
	assert_eq!(relaxed.fields().value("TIT2"), Some("Title"));
}

#[test_log::test]
fn verbosity_does_not_change_output() {
	let bytes = file(
		&[
			text_frame(b"TIT2", "Title"),
			frame(b"XXXX", 0, b"??"),
			frame(b"PRIV", 0, b"owner"),
		],
		&[0x12, 0x34, 0x56, 0x78],
	);

	let silent = read(&bytes);
	for verbosity in [Verbosity::Fields, Verbosity::Headers] {
		let verbose = TrackInfo::read_from(
			&mut &bytes[..],
			ParseOptions::new().verbosity(verbosity),
		)
		.unwrap();
		assert_eq!(verbose, silent);
	}
}

#[test_log::test]
fn read_from_file() {
	let bytes = file(&[text_frame(b"TIT2", "Title")], &MPEG1_LAYER3_128KBPS);
	let mut file = temp_file(&bytes);

	let track = TrackInfo::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(track.fields().value("TIT2"), Some("Title"));
	assert_eq!(track.bitrate(), 128);
}
