use id3scan::id3::v2::util::synchsafe::SynchsafeInteger;

use std::fs::File;
use std::io::{Seek as _, Write as _};

/// The header of an MPEG-1 Layer III frame at 128 kbps
pub const MPEG1_LAYER3_128KBPS: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];

/// The header of an MPEG-1 Layer II frame at 192 kbps
pub const MPEG1_LAYER2_192KBPS: [u8; 4] = [0xFF, 0xFD, 0xA0, 0x00];

/// Build a frame with the given flags, the size is taken from `content`
pub fn frame(id: &[u8; 4], flags: u16, content: &[u8]) -> Vec<u8> {
	let mut bytes = id.to_vec();
	bytes.extend((content.len() as u32).to_be_bytes());
	bytes.extend(flags.to_be_bytes());
	bytes.extend(content);
	bytes
}

/// Build a Latin-1 text frame
pub fn text_frame(id: &[u8; 4], text: &str) -> Vec<u8> {
	let mut content = vec![0];
	content.extend(text.chars().map(|c| c as u8));
	frame(id, 0, &content)
}

/// Build an ID3v2.3 tag block, the size is taken from `content`
pub fn tag(flags: u8, content: &[u8]) -> Vec<u8> {
	let size = (content.len() as u32).synch().unwrap();

	let mut bytes = b"ID3\x03\x00".to_vec();
	bytes.push(flags);
	bytes.extend(size.to_be_bytes());
	bytes.extend(content);
	bytes
}

/// Build a tag block from frames, followed by `audio`
pub fn file(frames: &[Vec<u8>], audio: &[u8]) -> Vec<u8> {
	let mut bytes = tag(0, &frames.concat());
	bytes.extend(audio);
	bytes
}

/// Create a new temporary file containing `content`
pub fn temp_file(content: &[u8]) -> File {
	let mut file = tempfile::tempfile().unwrap();
	file.write_all(content).unwrap();
	file.rewind().unwrap();

	file
}
