//! Read the ID3v2 tag block at the start of an MP3 file.
//!
//! The tag header is validated, every frame is decoded into a `(label, value)` pair, the bitrate
//! is taken from the first MPEG audio frame that follows the tag, and a canonical file name can be
//! built from the decoded fields.
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! # fn main() -> id3scan::error::Result<()> {
//! use id3scan::config::ParseOptions;
//! use id3scan::read_from_path;
//!
//! let track = read_from_path("test.mp3", ParseOptions::new())?;
//!
//! for (id, field) in track.fields() {
//! 	println!("{id} ({}): {}", field.label, field.value);
//! }
//!
//! println!("Bitrate: {} kbps", track.bitrate());
//! # Ok(())
//! # }
//! ```
//!
//! ## Using an existing reader
//!
//! ```rust
//! # fn main() -> id3scan::error::Result<()> {
//! use id3scan::config::ParseOptions;
//! use id3scan::track::TrackInfo;
//!
//! let mut tag = b"ID3\x03\x00\x00\x00\x00\x00\x1F".to_vec();
//! // A single title frame
//! tag.extend(b"TIT2\x00\x00\x00\x15\x00\x00\x00We Are the Champions");
//! // The first audio frame header
//! tag.extend([0xFF, 0xFB, 0x90, 0x64]);
//!
//! let track = TrackInfo::read_from(&mut &tag[..], ParseOptions::new())?;
//!
//! assert_eq!(track.fields().value("TIT2"), Some("We Are the Champions"));
//! assert_eq!(track.file_name(), "We Are the Champions.mp3");
//! assert_eq!(track.bitrate(), 128);
//! # Ok(())
//! # }
//! ```
//!
//! # Diagnostics
//!
//! Nothing is printed by the library itself. Decoded fields, skipped frames, and header details
//! are reported through the [`log`] facade, depending on the [`Verbosity`](config::Verbosity) in
//! the [`ParseOptions`](config::ParseOptions).

pub mod config;
pub mod error;
pub(crate) mod macros;
pub mod naming;
pub mod track;
mod util;

pub mod id3;
pub mod mpeg;

pub use crate::track::{TrackInfo, read_from_path};

pub use util::text::{TextEncoding, decode_text};
