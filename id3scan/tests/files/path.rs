use crate::util::{MPEG1_LAYER2_192KBPS, file, text_frame};

use id3scan::config::{ParseOptions, ParsingMode};
use id3scan::error::ErrorKind;

use std::io::Write as _;

#[test_log::test]
fn read_from_path() {
	let mut file_on_disk = tempfile::NamedTempFile::new().unwrap();
	file_on_disk
		.write_all(&file(
			&[
				text_frame(b"TPE1", "Queen"),
				text_frame(b"TIT2", "Spread Your Wings"),
			],
			&MPEG1_LAYER2_192KBPS,
		))
		.unwrap();
	file_on_disk.flush().unwrap();

	let track = id3scan::read_from_path(file_on_disk.path(), ParseOptions::new()).unwrap();
	assert_eq!(track.fields().value("TPE1"), Some("Queen"));
	assert_eq!(track.bitrate(), 192);
	assert_eq!(
		track.file_name(),
		["Queen", "Spread Your Wings.mp3"].join(std::path::MAIN_SEPARATOR_STR)
	);
}

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();

	let err = id3scan::read_from_path(
		dir.path().join("missing.mp3"),
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}
