//! ID3 specific items
//!
//! Only the ID3v2 tag block at the start of a file is read. ID3v1 tags at the end of a file are
//! never looked at.

pub mod v2;
