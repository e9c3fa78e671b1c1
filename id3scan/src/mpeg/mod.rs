//! MPEG audio frame headers
//!
//! Only the bitrate of the first frame following the tag block is read.

mod constants;
mod header;

pub use header::{FrameHeader, Layer, MpegVersion, bitrate};
pub(crate) use header::verify_frame_sync;
