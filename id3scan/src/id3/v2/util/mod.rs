//! Utilities for working with ID3v2 tags

pub mod synchsafe;
