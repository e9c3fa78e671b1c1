#![allow(missing_docs)]

use id3scan::config::{ParseOptions, ParsingMode, Verbosity};
use id3scan::track::TrackInfo;

use std::thread;
use std::time::Duration;

// A tag header claiming a few hundred bytes of content, followed by frames
const BASE: &[u8] = b"ID3\x03\x00\x40\x00\x00\x01\x10\
	\x00\x00\x00\x06\x80\x00\x00\x00\x00\x00\xDE\xAD\xBE\xEF\x00\x00\x00\x00\x00\x00\
	TIT2\x00\x00\x00\x06\x00\x00\x00Title\
	TPE1\x00\x00\x00\x0D\x00\x00\x01\xFF\xFEQ\x00u\x00e\x00e\x00n\x00\
	APIC\x00\x00\x00\x18\x00\x00\x00image/png\x00\x03Cover\x00\x89PNG\x0D\x0A\x1A\x0A\
	PRIV\x00\x00\x00\x0C\x00\x00owner\x00\x01\x02\x03\x04\x05\x06\
	TIT2\x00\x00\x00\x09\x00\xE0\x00\x00\x00\x20\x01\x02\x03Again\x00\x00\x00";

fn read_all_modes(bytes: &[u8]) {
	for parsing_mode in [
		ParsingMode::Strict,
		ParsingMode::BestAttempt,
		ParsingMode::Relaxed,
	] {
		for verbosity in [Verbosity::Silent, Verbosity::Headers] {
			let parse_options = ParseOptions::new()
				.parsing_mode(parsing_mode)
				.verbosity(verbosity);

			if let Ok(track) = TrackInfo::read_from(&mut &bytes[..], parse_options) {
				let _ = track.file_name();
			}
		}
	}
}

// Every read must finish quickly, whatever the input
fn oom_test(bytes: Vec<u8>) {
	let handle = thread::spawn(move || read_all_modes(&bytes));

	thread::sleep(Duration::from_millis(500));
	assert!(handle.is_finished(), "Reading took too long");
	handle.join().unwrap();
}

#[test_log::test]
fn truncated_at_every_offset() {
	for len in 0..BASE.len() {
		read_all_modes(&BASE[..len]);
	}
}

#[test_log::test]
fn single_byte_corruption() {
	for index in 0..BASE.len() {
		for value in [0x00, 0x01, 0x7F, 0x80, 0xFF] {
			let mut bytes = BASE.to_vec();
			bytes[index] = value;
			read_all_modes(&bytes);
		}
	}
}

#[test_log::test]
fn huge_sizes() {
	// Largest tag size, with no content behind it
	oom_test(b"ID3\x03\x00\x00\x7F\x7F\x7F\x7F".to_vec());

	// Largest extended header size
	oom_test(b"ID3\x03\x00\x40\x00\x00\x00\x0A\xFF\xFF\xFF\xFF\x00\x00\x00\x00\x00\x00".to_vec());

	// Largest frame size
	oom_test(b"ID3\x03\x00\x00\x00\x00\x00\x0ATIT2\xFF\xFF\xFF\xFF\x00\x00".to_vec());
}
