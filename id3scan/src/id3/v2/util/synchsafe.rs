//! Utilities for working with synchsafe integers
//!
//! The ID3v2 tag header stores its size as a synchsafe integer, where every byte only contributes
//! its low 7 bits. The most significant bit of each byte is always zero, so the size can never be
//! mistaken for an MPEG frame sync.

/// Trait for converting to and from synchsafe integers
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// // 257 is 0b1_0000_0001, the high bit of the low byte moves up into the next byte
	/// assert_eq!(257_u32.synch(), Some(0x0000_0201));
	///
	/// // 28 bits is the most that fits
	/// assert_eq!(0x1000_0000_u32.synch(), None);
	/// ```
	fn synch(self) -> Option<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch().unwrap();
	///
	/// // Our synchronized number should be something completely different
	/// assert_ne!(synch_number, unsynch_number);
	///
	/// // Now, our re-unsynchronized number should match our original
	/// assert_eq!(synch_number.unsynch(), unsynch_number);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Option<Self> {
		// 7 bits are available per byte, shave off 1 bit per byte
		const MAXIMUM_INTEGER: u32 = u32::MAX >> 4;

		if self > MAXIMUM_INTEGER {
			return None;
		}

		let n = self;
		Some(
			(n & 0x7F)
				| ((n & (0x7F << 7)) << 1)
				| ((n & (0x7F << 14)) << 2)
				| ((n & (0x7F << 21)) << 3),
		)
	}

	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}
