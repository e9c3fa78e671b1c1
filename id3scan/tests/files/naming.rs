use crate::util::{MPEG1_LAYER3_128KBPS, file, frame, text_frame};

use id3scan::config::ParseOptions;
use id3scan::naming::DEGENERATE_FILE_NAME;
use id3scan::track::TrackInfo;

use std::path::MAIN_SEPARATOR_STR;

fn file_name(frames: &[Vec<u8>]) -> String {
	let bytes = file(frames, &MPEG1_LAYER3_128KBPS);
	TrackInfo::read_from(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.file_name()
}

#[test_log::test]
fn queen() {
	let name = file_name(&[
		text_frame(b"TPE2", "Queen"),
		text_frame(b"TALB", "News of the World"),
		text_frame(b"TPOS", "1/1"),
		text_frame(b"TRCK", "3"),
		text_frame(b"TIT2", "We Are the Champions"),
	]);

	assert_eq!(
		name,
		["Queen", "News of the World", "03 We Are the Champions.mp3"].join(MAIN_SEPARATOR_STR)
	);
}

#[test_log::test]
fn lead_performer_fallback() {
	let name = file_name(&[
		text_frame(b"TPE1", "Metallica"),
		text_frame(b"TALB", "...And Justice for All"),
		text_frame(b"TPOS", "2/2"),
		text_frame(b"TRCK", "4/9"),
		text_frame(b"TIT2", "One"),
	]);

	assert_eq!(
		name,
		["Metallica", "And Justice for All", "2-04 One.mp3"].join(MAIN_SEPARATOR_STR)
	);
}

#[test_log::test]
fn band_takes_precedence() {
	let name = file_name(&[
		text_frame(b"TPE1", "Freddie Mercury"),
		text_frame(b"TPE2", "Queen"),
		text_frame(b"TIT2", "Bicycle Race"),
	]);

	assert_eq!(name, ["Queen", "Bicycle Race.mp3"].join(MAIN_SEPARATOR_STR));
}

#[test_log::test]
fn utf16_fields() {
	let name = file_name(&[
		frame(b"TPE2", 0, b"\x01\xFF\xFEA\x00C\x00/\x00D\x00C\x00"),
		frame(b"TIT2", 0, b"\x02\x00T\x00N\x00T"),
	]);

	assert_eq!(name, ["AC-DC", "TNT.mp3"].join(MAIN_SEPARATOR_STR));
}

#[test_log::test]
fn null_terminated_fields() {
	let name = file_name(&[
		frame(b"TPE2", 0, b"\x00Queen\x00"),
		frame(b"TRCK", 0, b"\x005\x00"),
		frame(b"TIT2", 0, b"\x03All Dead, All Dead\x00"),
	]);

	assert_eq!(
		name,
		["Queen", "05 All Dead, All Dead.mp3"].join(MAIN_SEPARATOR_STR)
	);
}

#[test_log::test]
fn no_naming_fields() {
	let name = file_name(&[text_frame(b"TYER", "1977"), text_frame(b"TCON", "Rock")]);
	assert_eq!(name, DEGENERATE_FILE_NAME);
}
