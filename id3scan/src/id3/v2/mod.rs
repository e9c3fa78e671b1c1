//! ID3v2 items and utilities
//!
//! Only ID3v2.3 frame layouts are understood. The tag block is read in one piece, then walked
//! frame by frame, and every frame with a known ID becomes a [`DecodedField`] in [`Id3v2Fields`].

mod frame;
pub(crate) mod header;
mod items;
pub(crate) mod read;
mod tag;
pub mod util;

// Exports

pub use header::{Id3v2TagFlags, Id3v2Version};

pub use tag::{DecodedField, Id3v2Fields};

pub use items::*;

pub use frame::FrameFlags;
pub use frame::header::{FrameHeader, FrameId};
